//! Key/value persistence for the auth session.
//!
//! In the browser this is `localStorage`; host builds keep a per-thread map so
//! tests never touch browser APIs.

use thiserror::Error;

pub const ACCESS_TOKEN_KEY: &str = "lexboard.access_token";
pub const REFRESH_TOKEN_KEY: &str = "lexboard.refresh_token";
pub const CURRENT_USER_KEY: &str = "lexboard.current_user";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("No localStorage")]
    Unavailable,
    #[error("Failed to write key '{0}'")]
    Write(String),
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;
    use web_sys::Storage;

    fn local_storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::NoWindow)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }

    pub fn get(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    pub fn set(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    pub fn remove(key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use super::StorageError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Result<Option<String>, StorageError> {
        Ok(STORE.with(|store| store.borrow().get(key).cloned()))
    }

    pub fn set(key: &str, value: &str) -> Result<(), StorageError> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove(key: &str) -> Result<(), StorageError> {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
        Ok(())
    }
}

pub fn get_item(key: &str) -> Option<String> {
    match backend::get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("storage read failed for {}: {}", key, err);
            None
        }
    }
}

pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    backend::set(key, value)
}

pub fn remove_item(key: &str) {
    if let Err(err) = backend::remove(key) {
        log::warn!("storage remove failed for {}: {}", key, err);
    }
}

pub fn clear_session() {
    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, CURRENT_USER_KEY] {
        remove_item(key);
    }
}

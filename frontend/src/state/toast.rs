//! Transient success/error notifications shown in the page corner.

use crate::api::ApiError;
use leptos::*;
use uuid::Uuid;

pub const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct ToastState {
    queue: RwSignal<ToastQueue>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, error: &ApiError) {
        self.push(ToastKind::Error, error.error.clone());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut id = None;
        self.queue.update(|queue| id = Some(queue.push(kind, message)));
        if let Some(id) = id {
            self.schedule_dismiss(id);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let queue = self.queue;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || {
            let _ = queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastState {
    let state = ToastState::new();
    provide_context(state);
    state
}

/// Returns the app-wide toast state, or a detached one outside the provider.
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>().unwrap_or_default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn queue_push_and_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Rate saved");
        let second = queue.push(ToastKind::Error, "Request failed");
        assert_ne!(first, second);
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].kind, ToastKind::Error);
    }

    #[test]
    fn toast_state_records_errors_by_message() {
        with_runtime(|| {
            let toasts = provide_toasts();
            toasts.error(&ApiError::request_failed("Lead is linked to a case"));
            toasts.success("Deleted 3 leads");
            let queue = use_toasts().queue().get();
            assert_eq!(queue.items()[0].message, "Lead is linked to a case");
            assert_eq!(queue.items()[1].kind, ToastKind::Success);
        });
    }
}

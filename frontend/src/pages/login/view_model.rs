use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

/// Returns true when the login succeeded.
fn apply_login_result(
    result: Option<Result<(), ApiError>>,
    form: LoginFormState,
    error: RwSignal<Option<ApiError>>,
) -> bool {
    match result {
        Some(Ok(())) => {
            error.set(None);
            form.password.set(String::new());
            true
        }
        Some(Err(err)) => {
            error.set(Some(err));
            false
        }
        None => false,
    }
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if apply_login_result(login_action.value().get(), form, error) {
            navigation::redirect("/dashboard");
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
        });
    }

    #[test]
    fn submit_with_blank_email_sets_validation_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.submit();
            let err = vm.error.get().expect("validation error");
            assert!(err.is_validation());
            assert!(vm.login_action.value().get().is_none());
        });
    }

    #[test]
    fn apply_login_result_clears_password_on_success() {
        with_runtime(|| {
            let form = LoginFormState::default();
            let error = create_rw_signal(Some(ApiError::unknown("old")));
            form.password.set("secret".into());
            assert!(apply_login_result(Some(Ok(())), form, error));
            assert!(error.get().is_none());
            assert!(form.password.get().is_empty());

            assert!(!apply_login_result(
                Some(Err(ApiError::request_failed("Invalid credentials"))),
                form,
                error
            ));
            assert_eq!(error.get().map(|e| e.error), Some("Invalid credentials".into()));
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn owner_user() -> UserResponse {
        UserResponse {
            id: "u-owner".into(),
            email: "owner@firm.test".into(),
            first_name: "Maha".into(),
            last_name: "Al-Otaibi".into(),
            role: "owner".into(),
            firm_id: Some("firm-1".into()),
            firm_name: Some("Al-Otaibi & Partners".into()),
        }
    }

    pub fn lawyer_user() -> UserResponse {
        UserResponse {
            id: "u-lawyer".into(),
            email: "lawyer@firm.test".into(),
            first_name: "Omar".into(),
            last_name: "Farouk".into(),
            role: "lawyer".into(),
            firm_id: Some("firm-1".into()),
            firm_name: Some("Al-Otaibi & Partners".into()),
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}

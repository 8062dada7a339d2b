use crate::{
    api::UserResponse, components::layout::LoadingSpinner, state::auth::use_auth,
    utils::navigation,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        navigation::redirect("/login");
    });
    view! {
        <Show
            when=move || {
                guard_outcome(is_authenticated.get(), is_loading.get()) == GuardOutcome::Render
            }
            fallback=move || {
                if guard_outcome(is_authenticated.get(), is_loading.get()) == GuardOutcome::Wait {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardOutcome {
    Render,
    Wait,
    Deny,
}

/// A stored session renders immediately; `/auth/me` confirms it in the
/// background.
fn guard_outcome(is_authenticated: bool, is_loading: bool) -> GuardOutcome {
    match (is_authenticated, is_loading) {
        (true, _) => GuardOutcome::Render,
        (false, true) => GuardOutcome::Wait,
        (false, false) => GuardOutcome::Deny,
    }
}

/// Staff administration and enterprise settings are limited to firm owners
/// and admins.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated {
            navigation::redirect("/login");
        } else if !is_admin_user(state.user.as_ref()) {
            navigation::redirect("/dashboard");
        }
    });
    view! {
        <Show
            when=move || should_render_admin_children(is_authenticated.get(), is_admin.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    view! {
                        <p class="p-6 text-sm text-fg-muted">
                            {"Only firm owners and administrators can open this page."}
                        </p>
                    }
                    .into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn is_admin_user(user: Option<&UserResponse>) -> bool {
    user.map(UserResponse::is_admin).unwrap_or(false)
}

fn should_render_admin_children(is_authenticated: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin
}

#[cfg(test)]
mod tests {
    use super::{guard_outcome, is_admin_user, should_render_admin_children, GuardOutcome};
    use crate::api::UserResponse;

    #[test]
    fn guard_blocks_until_authenticated() {
        assert_eq!(guard_outcome(false, true), GuardOutcome::Wait);
        assert_eq!(guard_outcome(false, false), GuardOutcome::Deny);
        assert_eq!(guard_outcome(true, true), GuardOutcome::Render);
        assert_eq!(guard_outcome(true, false), GuardOutcome::Render);
    }

    #[test]
    fn admin_guard_accepts_owner_and_admin_roles() {
        let lawyer = UserResponse {
            id: "u1".into(),
            email: "lawyer@firm.test".into(),
            first_name: "Omar".into(),
            last_name: "Farouk".into(),
            role: "lawyer".into(),
            firm_id: None,
            firm_name: None,
        };
        let admin = UserResponse {
            role: "admin".into(),
            ..lawyer.clone()
        };
        let owner = UserResponse {
            role: "owner".into(),
            ..lawyer.clone()
        };
        assert!(!is_admin_user(None));
        assert!(!is_admin_user(Some(&lawyer)));
        assert!(is_admin_user(Some(&admin)));
        assert!(is_admin_user(Some(&owner)));
    }

    #[test]
    fn admin_guard_blocks_non_admins() {
        assert!(!should_render_admin_children(false, true));
        assert!(!should_render_admin_children(true, false));
        assert!(should_render_admin_children(true, true));
    }
}

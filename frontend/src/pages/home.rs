use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let target = move || {
        if auth.with(|state| state.is_authenticated) {
            ("/dashboard", "Open dashboard")
        } else {
            ("/login", "Sign in")
        }
    };

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Lexboard"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Practice administration for law firms"
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                        <div class="rounded-md shadow">
                            <a
                                href=move || target().0
                                class="w-full flex items-center justify-center px-8 py-3 text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover lg:py-4 lg:text-lg lg:px-10"
                            >
                                {move || target().1}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{owner_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn home_links_to_login_when_signed_out() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <HomePage /> }
        });
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("Sign in"));
    }

    #[test]
    fn home_links_to_dashboard_when_signed_in() {
        let html = render_to_string(move || {
            provide_auth(Some(owner_user()));
            view! { <HomePage /> }
        });
        assert!(html.contains("href=\"/dashboard\""));
    }
}

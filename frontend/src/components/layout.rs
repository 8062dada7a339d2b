use crate::{
    components::toast::ToastHost,
    state::auth::{self, use_auth},
    utils::navigation,
};
use leptos::*;
use leptos_meta::Title;

/// Header navigation entries as `(href, label, admin_only)`.
pub const NAV_LINKS: &[(&str, &str, bool)] = &[
    ("/dashboard", "Dashboard", false),
    ("/billing-rates", "Billing rates", false),
    ("/leave", "Leave", false),
    ("/leads", "Leads", false),
    ("/staff", "Staff", true),
    ("/settings", "Settings", true),
];

fn visible_links(is_admin: bool) -> Vec<(&'static str, &'static str)> {
    NAV_LINKS
        .iter()
        .filter(|(_, _, admin_only)| is_admin || !admin_only)
        .map(|(href, label, _)| (*href, *label))
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let is_admin = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.is_admin())
            .unwrap_or(false)
    };
    let user_label = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.display_name())
            .unwrap_or_default()
    };
    let firm_label = move || {
        auth.get()
            .user
            .and_then(|user| user.firm_name)
            .unwrap_or_else(|| "Lexboard".to_string())
    };
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            navigation::redirect("/login");
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-2">
                        <h1 class="text-xl font-semibold text-fg">{firm_label}</h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <nav class="hidden lg:flex space-x-2">
                            {move || {
                                visible_links(is_admin())
                                    .into_iter()
                                    .map(|(href, label)| view! {
                                        <a
                                            href=href
                                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        >
                                            {label}
                                        </a>
                                    })
                                    .collect_view()
                            }}
                        </nav>
                        <span class="hidden lg:inline text-sm text-fg-muted">{user_label}</span>
                        <button
                            on:click=on_logout
                            class="hidden lg:inline text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                        >
                            "Log out"
                        </button>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get().to_string()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <span aria-hidden="true">{move || if menu_open.get() { "✕" } else { "☰" }}</span>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {move || {
                                visible_links(is_admin())
                                    .into_iter()
                                    .map(|(href, label)| view! {
                                        <a
                                            href=href
                                            class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {label}
                                        </a>
                                    })
                                    .collect_view()
                            }}
                            <button
                                on:click=on_logout
                                class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                                disabled=move || logout_pending.get()
                            >
                                "Log out"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">{children()}</main>
            <ToastHost/>
        </div>
    }
}

/// Page heading shared by every feature page.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let document_title = format!("{} | Lexboard", title);
    view! {
        <Title text=document_title />
        <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
            <div>
                <h1 class="text-2xl font-bold text-fg">{title}</h1>
                {description.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
            </div>
            {children.map(|actions| view! { <div class="flex gap-2">{actions()}</div> })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
            role="alert"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4"
            role="status"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{lawyer_user, owner_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_admin_links_for_owner() {
        let html = render_to_string(move || {
            provide_auth(Some(owner_user()));
            view! { <Header /> }
        });
        assert!(html.contains("href=\"/staff\""));
        assert!(html.contains("href=\"/settings\""));
        assert!(html.contains("Al-Otaibi &amp; Partners") || html.contains("Al-Otaibi & Partners"));
        assert!(html.contains("Log out"));
    }

    #[test]
    fn header_hides_admin_links_for_lawyer() {
        let html = render_to_string(move || {
            provide_auth(Some(lawyer_user()));
            view! { <Header /> }
        });
        assert!(html.contains("href=\"/billing-rates\""));
        assert!(html.contains("href=\"/leave\""));
        assert!(!html.contains("href=\"/staff\""));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_auth(Some(owner_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <PageHeader title="Leads" description="Track prospective clients" />
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("Track prospective clients"));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("ok"));
    }

    #[test]
    fn visible_links_filters_admin_only_entries() {
        assert_eq!(visible_links(false).len(), 4);
        assert_eq!(visible_links(true).len(), NAV_LINKS.len());
    }
}

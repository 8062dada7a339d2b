use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.call(());
                }
            }
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Coloured pill for enum values such as statuses and roles.
#[component]
pub fn Badge(#[prop(into)] label: String, #[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let class = class.unwrap_or_else(|| "bg-surface-muted text-fg".to_string());
    view! {
        <span class={format!("inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}", class)}>
            {label}
        </span>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{element_containing, has_bool_attr, render_to_string};

    #[test]
    fn loading_button_is_disabled_and_spins() {
        let html = render_to_string(move || {
            view! { <Button variant=ButtonVariant::Danger loading=true>"Delete rate"</Button> }
        });
        assert!(html.contains("animate-spin"));
        let button = element_containing(&html, "button", "Delete rate").expect("button tag");
        assert!(has_bool_attr(button, "disabled"));
        assert!(button.contains("type=\"button\""));
    }
}

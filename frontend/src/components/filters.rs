//! Search box plus status/kind selects shared by the list pages.

use crate::api::ListQuery;
use crate::utils::form::optional_string;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ListFilterState {
    pub search: RwSignal<String>,
    pub status: RwSignal<String>,
    pub kind: RwSignal<String>,
    pub page: RwSignal<u32>,
}

impl Default for ListFilterState {
    fn default() -> Self {
        Self {
            search: create_rw_signal(String::new()),
            status: create_rw_signal(String::new()),
            kind: create_rw_signal(String::new()),
            page: create_rw_signal(1),
        }
    }
}

impl ListFilterState {
    /// Tracked read; resources keyed on this refetch when a filter changes.
    pub fn to_query(&self, per_page: u32) -> ListQuery {
        ListQuery {
            search: optional_string(self.search.get()),
            status: optional_string(self.status.get()),
            kind: optional_string(self.kind.get()),
            page: Some(self.page.get()),
            per_page: Some(per_page),
        }
    }

    pub fn reset(&self) {
        self.search.set(String::new());
        self.status.set(String::new());
        self.kind.set(String::new());
        self.page.set(1);
    }
}

#[component]
pub fn FilterBar(
    filter: ListFilterState,
    #[prop(optional)] search_placeholder: Option<&'static str>,
    #[prop(optional)] status_options: Vec<(&'static str, &'static str)>,
    #[prop(optional)] kind_label: Option<&'static str>,
    #[prop(optional)] kind_options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let select_class = "rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg";
    let has_status = !status_options.is_empty();
    let has_kind = !kind_options.is_empty();
    let kind_label = kind_label.unwrap_or("All types");

    view! {
        <div class="flex flex-wrap items-center gap-3" role="search">
            <input
                type="search"
                class="flex-1 min-w-[12rem] rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                placeholder=search_placeholder.unwrap_or("Search")
                prop:value=move || filter.search.get()
                on:input=move |ev| {
                    filter.search.set(event_target_value(&ev));
                    filter.page.set(1);
                }
            />
            {has_status.then(|| view! {
                <select
                    class=select_class
                    aria-label="Status filter"
                    prop:value=move || filter.status.get()
                    on:change=move |ev| {
                        filter.status.set(event_target_value(&ev));
                        filter.page.set(1);
                    }
                >
                    <option value="">"All statuses"</option>
                    {status_options
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            })}
            {has_kind.then(|| view! {
                <select
                    class=select_class
                    aria-label="Type filter"
                    prop:value=move || filter.kind.get()
                    on:change=move |ev| {
                        filter.kind.set(event_target_value(&ev));
                        filter.page.set(1);
                    }
                >
                    <option value="">{kind_label}</option>
                    {kind_options
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn to_query_drops_blank_filters() {
        with_runtime(|| {
            let filter = ListFilterState::default();
            filter.search.set("  khalid ".into());
            filter.status.set("approved".into());
            let query = filter.to_query(20);
            assert_eq!(query.search.as_deref(), Some("khalid"));
            assert_eq!(query.status.as_deref(), Some("approved"));
            assert_eq!(query.kind, None);
            assert_eq!(query.page, Some(1));

            filter.reset();
            assert_eq!(filter.to_query(20).status, None);
        });
    }

    #[test]
    fn filter_bar_renders_configured_selects_only() {
        let html = render_to_string(move || {
            let filter = ListFilterState::default();
            view! {
                <FilterBar filter=filter status_options=vec![("new", "New")] />
            }
        });
        assert!(html.contains("Status filter"));
        assert!(!html.contains("Type filter"));
    }
}

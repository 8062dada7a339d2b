//! Pieces shared by the list tables: selection checkboxes and paging.

use crate::utils::selection::RowSelection;
use leptos::*;

#[component]
pub fn SelectAllCheckbox(
    selection: RwSignal<RowSelection>,
    #[prop(into)] visible_ids: Signal<Vec<String>>,
) -> impl IntoView {
    let all_selected = move || {
        let ids = visible_ids.get();
        selection.with(|s| s.all_selected(ids.iter().map(String::as_str)))
    };
    view! {
        <input
            type="checkbox"
            aria-label="Select all rows"
            prop:checked=all_selected
            checked=all_selected
            on:change=move |_| {
                let ids = visible_ids.get_untracked();
                selection.update(|s| s.toggle_all(ids.iter().map(String::as_str)));
            }
        />
    }
}

#[component]
pub fn RowCheckbox(selection: RwSignal<RowSelection>, #[prop(into)] id: String) -> impl IntoView {
    let row_id = id.clone();
    let is_checked = move || selection.with(|s| s.contains(&row_id));
    view! {
        <input
            type="checkbox"
            aria-label="Select row"
            prop:checked=is_checked.clone()
            checked=is_checked
            on:change=move |_| selection.update(|s| s.toggle(&id))
        />
    }
}

pub fn page_count(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    let pages = total.div_ceil(per_page as u64).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[component]
pub fn Pagination(page: RwSignal<u32>, #[prop(into)] total: Signal<u64>, per_page: u32) -> impl IntoView {
    let pages = move || page_count(total.get(), per_page);
    view! {
        <div class="flex items-center justify-between py-3 text-sm text-fg-muted">
            <span>{move || format!("Page {} of {} ({} total)", page.get(), pages(), total.get())}</span>
            <div class="flex gap-2">
                <button
                    type="button"
                    class="rounded-md border border-border px-3 py-1 disabled:opacity-50"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <button
                    type="button"
                    class="rounded-md border border-border px-3 py-1 disabled:opacity-50"
                    disabled=move || { page.get() >= pages() }
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::page_count;

    #[test]
    fn page_count_rounds_up_and_never_returns_zero() {
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(5, 0), 1);
    }
}

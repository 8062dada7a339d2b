use crate::components::{
    bulk_action_bar::BulkActionBar,
    confirm_dialog::ConfirmDialog,
    filters::FilterBar,
    forms::enum_options,
    layout::{ErrorMessage, LoadingSpinner},
    table::Pagination,
};
use crate::models::lead::{Lead, LeadSource, LeadStatus};
use crate::pages::leads::{
    components::{LeadFormDialog, LeadTable},
    layout::LeadsFrame,
    view_model::use_leads_view_model,
};
use leptos::*;

#[component]
pub fn LeadsPage() -> impl IntoView {
    let vm = use_leads_view_model();

    let leads = vm.leads();
    let total = Signal::derive(move || {
        vm.leads_resource
            .get()
            .and_then(Result::ok)
            .map(|list| list.total_count())
            .unwrap_or(0)
    });
    let error = Signal::derive(move || {
        vm.leads_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });
    let selection_count = Signal::derive(move || vm.selection.with(|s| s.count()));
    let delete_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .with(|lead| {
                lead.as_ref()
                    .map(|lead| format!("Delete the lead \"{}\"? This cannot be undone.", lead.full_name()))
            })
            .unwrap_or_default()
    });
    let bulk_open = Signal::derive(move || vm.bulk_confirm_open.get());
    let bulk_message = Signal::derive(move || {
        format!(
            "Delete {} selected leads? This cannot be undone.",
            vm.selection.with(|s| s.count())
        )
    });

    view! {
        <LeadsFrame>
            <div class="flex flex-wrap items-center justify-between gap-3">
                <FilterBar
                    filter=vm.filter
                    search_placeholder="Search name, email or company"
                    status_options=enum_options(LeadStatus::ALL, LeadStatus::as_str, LeadStatus::label)
                    kind_label="All sources"
                    kind_options=enum_options(LeadSource::ALL, LeadSource::as_str, LeadSource::label)
                />
                <button
                    type="button"
                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text"
                    on:click=move |_| vm.open_create()
                >
                    "New lead"
                </button>
            </div>
            <BulkActionBar
                count=selection_count
                on_delete=Callback::new(move |_| vm.bulk_confirm_open.set(true))
                on_clear=Callback::new(move |_| vm.selection.update(|s| s.clear()))
                pending=Signal::derive(move || vm.bulk_delete_action.pending().get())
            />
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <Show when=move || vm.leads_resource.loading().get()>
                <LoadingSpinner />
            </Show>
            <LeadTable
                leads=leads
                selection=vm.selection
                on_edit=Callback::new(move |lead| vm.open_edit(&lead))
                on_delete=Callback::new(move |lead: Lead| vm.pending_delete.set(Some(lead)))
            />
            <Pagination page=vm.filter.page total=total per_page=vm.per_page />
            <LeadFormDialog
                form=vm.form
                mode=vm.dialog
                message=vm.message
                pending=Signal::derive(move || vm.save_action.pending().get())
                on_submit=Callback::new(move |_| vm.submit())
                on_close=Callback::new(move |_| vm.close_dialog())
            />
            <ConfirmDialog
                is_open=delete_open
                title="Delete lead"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
            <ConfirmDialog
                is_open=bulk_open
                title="Delete selected leads"
                message=bulk_message
                confirm_label="Delete"
                destructive=true
                confirm_disabled=Signal::derive(move || vm.bulk_delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_bulk_delete())
                on_cancel=Callback::new(move |_| vm.bulk_confirm_open.set(false))
            />
        </LeadsFrame>
    }
}

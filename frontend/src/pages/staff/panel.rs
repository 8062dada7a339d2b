use crate::components::{
    bulk_action_bar::BulkActionBar,
    confirm_dialog::ConfirmDialog,
    filters::FilterBar,
    forms::enum_options,
    layout::{ErrorMessage, LoadingSpinner},
    table::Pagination,
};
use crate::models::staff::{StaffMember, StaffRole, StaffStatus};
use crate::pages::staff::{
    components::{DepartureDialog, InviteDialog, ReinstateDialog, StaffFormDialog, StaffTable},
    layout::StaffFrame,
    view_model::use_staff_view_model,
};
use leptos::*;

#[component]
pub fn StaffPage() -> impl IntoView {
    let vm = use_staff_view_model();

    let staff = vm.staff();
    let total = Signal::derive(move || {
        vm.staff_resource
            .get()
            .and_then(Result::ok)
            .map(|list| list.total_count())
            .unwrap_or(0)
    });
    let error = Signal::derive(move || {
        vm.staff_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });
    let selection_count = Signal::derive(move || vm.selection.with(|s| s.count()));
    let delete_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .with(|member| {
                member.as_ref().map(|member| {
                    format!(
                        "Delete {}? Their account and access are removed.",
                        member.full_name()
                    )
                })
            })
            .unwrap_or_default()
    });
    let bulk_open = Signal::derive(move || vm.bulk_confirm_open.get());
    let bulk_message = Signal::derive(move || {
        format!(
            "Delete {} selected staff members? This cannot be undone.",
            vm.selection.with(|s| s.count())
        )
    });

    view! {
        <StaffFrame>
            <div class="flex flex-wrap items-center justify-between gap-3">
                <FilterBar
                    filter=vm.filter
                    search_placeholder="Search name or email"
                    status_options=enum_options(StaffStatus::ALL, StaffStatus::as_str, StaffStatus::label)
                    kind_label="All roles"
                    kind_options=enum_options(StaffRole::ALL, StaffRole::as_str, StaffRole::label)
                />
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="rounded-md border border-border px-4 py-2 text-sm font-semibold text-fg"
                        on:click=move |_| vm.open_invite()
                    >
                        "Invite"
                    </button>
                    <button
                        type="button"
                        class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text"
                        on:click=move |_| vm.open_create()
                    >
                        "Add staff member"
                    </button>
                </div>
            </div>
            <BulkActionBar
                count=selection_count
                on_delete=Callback::new(move |_| vm.bulk_confirm_open.set(true))
                on_clear=Callback::new(move |_| vm.selection.update(|s| s.clear()))
                pending=Signal::derive(move || vm.bulk_delete_action.pending().get())
            />
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <Show when=move || vm.staff_resource.loading().get()>
                <LoadingSpinner />
            </Show>
            <StaffTable
                staff=staff
                selection=vm.selection
                on_edit=Callback::new(move |member| vm.open_edit(&member))
                on_depart=Callback::new(move |member| vm.open_departure(&member))
                on_reinstate=Callback::new(move |member| vm.open_reinstate(&member))
                on_delete=Callback::new(move |member: StaffMember| vm.pending_delete.set(Some(member)))
            />
            <Pagination page=vm.filter.page total=total per_page=vm.per_page />
            <StaffFormDialog
                form=vm.form
                mode=vm.dialog
                message=vm.message
                pending=Signal::derive(move || vm.save_action.pending().get())
                on_submit=Callback::new(move |_| vm.submit())
                on_close=Callback::new(move |_| vm.close_dialog())
            />
            <InviteDialog
                form=vm.invite_form
                open=vm.invite_dialog
                message=vm.invite_message
                pending=Signal::derive(move || vm.invite_action.pending().get())
                on_submit=Callback::new(move |_| vm.submit_invite())
                on_close=Callback::new(move |_| vm.invite_dialog.set(None))
            />
            <DepartureDialog
                form=vm.departure_form
                target=vm.departure_target
                message=vm.departure_message
                pending=Signal::derive(move || vm.departure_action.pending().get())
                on_submit=Callback::new(move |_| vm.submit_departure())
                on_close=Callback::new(move |_| vm.departure_target.set(None))
            />
            <ReinstateDialog
                target=vm.reinstate_target
                role=vm.reinstate_role
                message=vm.reinstate_message
                pending=Signal::derive(move || vm.reinstate_action.pending().get())
                on_submit=Callback::new(move |_| vm.submit_reinstate())
                on_close=Callback::new(move |_| vm.reinstate_target.set(None))
            />
            <ConfirmDialog
                is_open=delete_open
                title="Delete staff member"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
            <ConfirmDialog
                is_open=bulk_open
                title="Delete selected staff"
                message=bulk_message
                confirm_label="Delete"
                destructive=true
                confirm_disabled=Signal::derive(move || vm.bulk_delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_bulk_delete())
                on_cancel=Callback::new(move |_| vm.bulk_confirm_open.set(false))
            />
        </StaffFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ListResponse;
    use crate::pages::staff::view_model::StaffViewModel;
    use crate::test_support::helpers::{owner_user, provide_auth};
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    #[test]
    fn page_lists_staff_and_open_invite_dialog() {
        let html = with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_auth(Some(owner_user()));
            let vm = StaffViewModel::new();
            vm.staff_resource.set(Ok(ListResponse {
                data: vec![serde_json::from_value(json!({
                    "_id": "s1", "firstName": "Reem", "lastName": "Al-Dosari",
                    "email": "reem@firm.test", "role": "partner", "status": "active"
                }))
                .unwrap()],
                total: Some(1),
                page: Some(1),
                pagination: None,
            }));
            vm.open_invite();
            provide_context(vm);
            let html = view! { <StaffPage /> }
                .into_view()
                .render_to_string()
                .to_string();
            leptos_reactive::suppress_resource_load(false);
            html
        });
        assert!(html.contains("Reem Al-Dosari"));
        assert!(html.contains("All roles"));
        assert!(html.contains("Invite staff member"));
        assert!(html.contains("Send invitation"));
    }
}

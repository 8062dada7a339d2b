use super::form::role_options;
use crate::components::{
    error::{MessageBanner, MessageState},
    forms::{SelectField, TextAreaField, TextField},
    modal::Modal,
};
use crate::models::staff::StaffMember;
use crate::pages::staff::utils::{DepartureFormState, InviteFormState};
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
fn DialogButtons(
    #[prop(into)] pending: Signal<bool>,
    submit_label: &'static str,
    #[prop(optional)] destructive: bool,
    on_close: Callback<()>,
) -> impl IntoView {
    let submit_class = if destructive {
        "rounded-md bg-action-danger-bg px-4 py-2 text-sm font-semibold text-action-danger-text disabled:opacity-50"
    } else {
        "rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
    };
    view! {
        <div class="flex justify-end gap-2">
            <button
                type="button"
                class="rounded-md border border-border px-4 py-2 text-sm"
                on:click=move |_| on_close.call(())
            >
                "Cancel"
            </button>
            <button type="submit" class=submit_class disabled=move || pending.get()>
                {submit_label}
            </button>
        </div>
    }
}

fn submit_handler(on_submit: Callback<()>) -> impl Fn(SubmitEvent) {
    move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    }
}

#[component]
pub fn InviteDialog(
    form: InviteFormState,
    open: RwSignal<Option<()>>,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || open.with(Option::is_some));
    view! {
        <Modal is_open=is_open title="Invite staff member" on_close=on_close>
            <form class="space-y-4" on:submit=submit_handler(on_submit)>
                <MessageBanner state=message />
                <p class="text-sm text-fg-muted">
                    "An invitation email is sent; the account stays pending until it is accepted."
                </p>
                <TextField label="Email" value=form.email_signal() input_type="email" required=true />
                <SelectField label="Role" value=form.role_signal() options=role_options() required=true />
                <DialogButtons pending=pending submit_label="Send invitation" on_close=on_close />
            </form>
        </Modal>
    }
}

#[component]
pub fn DepartureDialog(
    form: DepartureFormState,
    target: RwSignal<Option<StaffMember>>,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || target.with(Option::is_some));
    let title = Signal::derive(move || {
        target.with(|member| {
            member
                .as_ref()
                .map(|m| format!("Record departure: {}", m.full_name()))
                .unwrap_or_default()
        })
    });
    view! {
        <Modal is_open=is_open title=title on_close=on_close>
            <form class="space-y-4" on:submit=submit_handler(on_submit)>
                <MessageBanner state=message />
                <TextAreaField label="Reason" value=form.reason_signal() rows=3 required=true />
                <TextField label="Departure date" value=form.departed_at_signal() input_type="date" required=true />
                <DialogButtons pending=pending submit_label="Record departure" destructive=true on_close=on_close />
            </form>
        </Modal>
    }
}

#[component]
pub fn ReinstateDialog(
    target: RwSignal<Option<StaffMember>>,
    role: RwSignal<String>,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || target.with(Option::is_some));
    let title = Signal::derive(move || {
        target.with(|member| {
            member
                .as_ref()
                .map(|m| format!("Reinstate {}", m.full_name()))
                .unwrap_or_default()
        })
    });
    let reason = Signal::derive(move || {
        target.with(|member| member.as_ref().and_then(|m| m.departure_reason.clone()))
    });
    view! {
        <Modal is_open=is_open title=title on_close=on_close>
            <form class="space-y-4" on:submit=submit_handler(on_submit)>
                <MessageBanner state=message />
                {move || {
                    reason
                        .get()
                        .map(|reason| view! { <p class="text-sm text-fg-muted">"Departure reason: " {reason}</p> })
                }}
                <SelectField label="Role on return" value=role options=role_options() required=true />
                <DialogButtons pending=pending submit_label="Reinstate" on_close=on_close />
            </form>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn reinstate_dialog_shows_departure_reason_and_role() {
        let html = render_to_string(|| {
            let member: StaffMember = serde_json::from_value(json!({
                "_id": "s1", "firstName": "Ali", "lastName": "Hassan", "email": "ali@firm.test",
                "role": "departed", "status": "departed", "previousRole": "partner",
                "departureReason": "Sabbatical"
            }))
            .unwrap();
            let role = create_rw_signal(member.reinstate_role().as_str().to_string());
            view! {
                <ReinstateDialog
                    target=create_rw_signal(Some(member))
                    role=role
                    message=create_rw_signal(MessageState::default())
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Reinstate Ali Hassan"));
        assert!(html.contains("Sabbatical"));
        assert!(html.contains("Role on return"));
    }

    #[test]
    fn closed_departure_dialog_renders_nothing() {
        let html = render_to_string(|| {
            view! {
                <DepartureDialog
                    form=DepartureFormState::default()
                    target=create_rw_signal(None)
                    message=create_rw_signal(MessageState::default())
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Departure date"));
    }
}

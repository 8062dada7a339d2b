use crate::api::ApiError;
use leptos::*;

/// Outcome of the last mutation in a form or dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
        self.success = None;
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let messages = e.validation_messages();
                    if e.is_validation() && messages.len() > 1 {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    } else if !e.is_validation() && e.code != "UNKNOWN" && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                })}
            </div>
        </Show>
    }
}

/// Renders whichever half of a `MessageState` is set.
#[component]
pub fn MessageBanner(state: RwSignal<MessageState>) -> impl IntoView {
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    view! {
        {move || state.with(|s| s.success.clone()).map(|msg| view! {
            <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded my-2" role="status">
                {msg}
            </div>
        })}
        <InlineErrorMessage error=error />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_state_keeps_one_outcome() {
        let mut state = MessageState::default();
        state.set_error(ApiError::request_failed("NG"));
        assert!(state.error.is_some());
        assert!(state.success.is_none());

        state.set_success("Saved");
        assert_eq!(state.success.as_deref(), Some("Saved"));
        assert!(state.error.is_none());

        state.clear();
        assert_eq!(state, MessageState::default());
    }
}

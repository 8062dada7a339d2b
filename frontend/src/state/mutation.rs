//! Applies the outcome of a finished mutation to page state: close the
//! dialog, report through a toast, and invalidate the list by bumping its
//! reload counter.

use crate::api::{ApiError, BulkDeleteResponse, ListResponse};
use crate::components::error::MessageState;
use crate::state::toast::ToastState;
use crate::utils::selection::RowSelection;
use leptos::*;

pub fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

/// Returns true on success so the caller can reset its form.
pub fn apply_optional_form_result<T: 'static>(
    result: Option<Result<(), ApiError>>,
    success_message: &str,
    dialog: RwSignal<Option<T>>,
    message: RwSignal<MessageState>,
    toasts: ToastState,
    reload: RwSignal<u32>,
) -> bool {
    match result {
        Some(Ok(())) => {
            dialog.set(None);
            message.update(|msg| msg.clear());
            toasts.success(success_message);
            bump(reload);
            true
        }
        Some(Err(err)) => {
            toasts.error(&err);
            message.update(|msg| msg.set_error(err));
            false
        }
        None => false,
    }
}

/// Row-level mutations (delete, toggle, membership) resolve to the success
/// text to show.
pub fn apply_optional_list_result(
    result: Option<Result<String, ApiError>>,
    toasts: ToastState,
    reload: RwSignal<u32>,
) -> bool {
    match result {
        Some(Ok(success)) => {
            toasts.success(success);
            bump(reload);
            true
        }
        Some(Err(err)) => {
            toasts.error(&err);
            false
        }
        None => false,
    }
}

pub fn bulk_delete_summary(response: &BulkDeleteResponse, requested: usize, noun: &str) -> String {
    let deleted = if response.deleted == 0 && response.failed.is_empty() {
        requested as u64
    } else {
        response.deleted
    };
    if response.failed.is_empty() {
        format!("Deleted {} {}", deleted, noun)
    } else {
        format!(
            "Deleted {} {}; {} could not be deleted",
            deleted,
            noun,
            response.failed.len()
        )
    }
}

/// One toast for the whole batch. The selection is cleared only on success.
pub fn apply_optional_bulk_delete_result(
    result: Option<Result<BulkDeleteResponse, ApiError>>,
    noun: &str,
    selection: RwSignal<RowSelection>,
    toasts: ToastState,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(response)) => {
            let requested = selection.with_untracked(|s| s.count());
            let summary = bulk_delete_summary(&response, requested, noun);
            if response.failed.is_empty() {
                toasts.success(summary);
            } else {
                toasts.error(&ApiError::request_failed(summary));
            }
            selection.update(|s| s.clear());
            bump(reload);
        }
        Some(Err(err)) => toasts.error(&err),
        None => {}
    }
}

/// Drops selected ids that the reloaded page no longer lists.
pub fn prune_selection<T>(
    result: Option<&Result<ListResponse<T>, ApiError>>,
    selection: RwSignal<RowSelection>,
    id_of: impl Fn(&T) -> &str,
) {
    if let Some(Ok(list)) = result {
        let stale = selection.with_untracked(|s| {
            s.ids()
                .iter()
                .any(|id| !list.data.iter().any(|row| id_of(row) == id))
        });
        if stale {
            selection.update(|s| s.retain_present(list.data.iter().map(&id_of)));
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::state::toast::ToastKind;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_success_closes_dialog_and_reloads() {
        with_runtime(|| {
            let dialog = create_rw_signal(Some("r1".to_string()));
            let message = create_rw_signal(MessageState::default());
            let toasts = ToastState::new();
            let reload = create_rw_signal(0u32);

            assert!(apply_optional_form_result(
                Some(Ok(())),
                "Rate saved",
                dialog,
                message,
                toasts,
                reload
            ));
            assert!(dialog.get().is_none());
            assert_eq!(reload.get(), 1);
            let queue = toasts.queue().get();
            assert_eq!(queue.items()[0].message, "Rate saved");
        });
    }

    #[test]
    fn form_failure_keeps_dialog_open_with_error() {
        with_runtime(|| {
            let dialog = create_rw_signal(Some(()));
            let message = create_rw_signal(MessageState::default());
            let toasts = ToastState::new();
            let reload = create_rw_signal(0u32);

            assert!(!apply_optional_form_result(
                Some(Err(ApiError::request_failed("Duplicate name"))),
                "Rate saved",
                dialog,
                message,
                toasts,
                reload
            ));
            assert!(dialog.get().is_some());
            assert_eq!(message.get().error.map(|e| e.error), Some("Duplicate name".into()));
            assert_eq!(reload.get(), 0);
            assert_eq!(toasts.queue().get().items()[0].kind, ToastKind::Error);
        });
    }

    #[test]
    fn bulk_delete_reports_once_and_clears_selection() {
        with_runtime(|| {
            let mut initial = RowSelection::default();
            initial.toggle("a");
            initial.toggle("b");
            let selection = create_rw_signal(initial);
            let toasts = ToastState::new();
            let reload = create_rw_signal(0u32);

            apply_optional_bulk_delete_result(
                Some(Ok(BulkDeleteResponse::default())),
                "rates",
                selection,
                toasts,
                reload,
            );
            assert!(selection.get().is_empty());
            assert_eq!(reload.get(), 1);
            let queue = toasts.queue().get();
            assert_eq!(queue.items().len(), 1);
            assert_eq!(queue.items()[0].message, "Deleted 2 rates");
        });
    }

    #[test]
    fn bulk_delete_failure_keeps_selection() {
        with_runtime(|| {
            let mut initial = RowSelection::default();
            initial.toggle("a");
            let selection = create_rw_signal(initial);
            let toasts = ToastState::new();
            let reload = create_rw_signal(0u32);

            apply_optional_bulk_delete_result(
                Some(Err(ApiError::request_failed("Request failed with status 500"))),
                "rates",
                selection,
                toasts,
                reload,
            );
            assert_eq!(selection.get().count(), 1);
            assert_eq!(reload.get(), 0);
            assert_eq!(toasts.queue().get().items().len(), 1);
        });
    }

    #[test]
    fn partial_bulk_delete_summary_counts_failures() {
        let response = BulkDeleteResponse {
            deleted: 3,
            failed: vec!["x".into()],
        };
        assert_eq!(
            bulk_delete_summary(&response, 4, "leads"),
            "Deleted 3 leads; 1 could not be deleted"
        );
    }
}

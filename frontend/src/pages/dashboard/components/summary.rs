use crate::api::ApiError;
use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::pages::dashboard::repository::DashboardOverview;
use crate::utils::format::format_number;
use leptos::*;

fn overview_tiles(overview: &DashboardOverview) -> Vec<(&'static str, String)> {
    let mut tiles = Vec::new();
    if let Some(leave) = &overview.leave {
        tiles.push(("Pending leave approvals", leave.pending_approval.to_string()));
        tiles.push(("On leave today", leave.on_leave_today.to_string()));
    }
    if let Some(rates) = &overview.rates {
        tiles.push(("Active billing rates", rates.active_rates.to_string()));
        tiles.push((
            "Average hourly rate",
            rates
                .average_hourly_rate
                .map(format_number)
                .unwrap_or_else(|| "-".to_string()),
        ));
    }
    tiles
}

#[component]
pub fn SummarySection(
    overview: Resource<u32, Result<DashboardOverview, ApiError>>,
) -> impl IntoView {
    view! {
        <Suspense fallback=move || view! { <LoadingSpinner /> }>
            {move || {
                overview.get().map(|result| match result {
                    Ok(data) => {
                        view! {
                            <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
                                {overview_tiles(&data)
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div class="rounded-lg bg-surface-elevated p-4 shadow">
                                                <p class="text-xs uppercase text-fg-muted">{label}</p>
                                                <p class="mt-1 text-2xl font-semibold text-fg">{value}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_view()
                    }
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })
            }}
        </Suspense>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{billing::RateStats, leave::LeaveStats};

    #[test]
    fn tiles_skip_sections_without_data() {
        let overview = DashboardOverview {
            rates: None,
            leave: Some(LeaveStats {
                pending_approval: 4,
                ..LeaveStats::default()
            }),
        };
        let tiles = overview_tiles(&overview);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0], ("Pending leave approvals", "4".to_string()));

        let overview = DashboardOverview {
            rates: Some(RateStats {
                active_rates: 7,
                average_hourly_rate: Some(1250.0),
                ..RateStats::default()
            }),
            leave: None,
        };
        let tiles = overview_tiles(&overview);
        assert_eq!(tiles[1], ("Average hourly rate", "1,250.00".to_string()));
    }
}

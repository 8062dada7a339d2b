use crate::api::ApiError;
use crate::models::billing::RateStats;
use crate::utils::format::format_number;
use leptos::*;

fn stat_tiles(stats: &RateStats) -> [(&'static str, String); 4] {
    [
        ("Total rates", stats.total_rates.to_string()),
        ("Active rates", stats.active_rates.to_string()),
        ("Rate groups", stats.total_groups.to_string()),
        (
            "Average hourly rate",
            stats
                .average_hourly_rate
                .map(format_number)
                .unwrap_or_else(|| "-".to_string()),
        ),
    ]
}

/// Silent on failure; the tables report load errors themselves.
#[component]
pub fn RateStatsStrip(stats: Resource<u32, Result<RateStats, ApiError>>) -> impl IntoView {
    view! {
        <Transition fallback=|| ()>
            {move || {
                stats
                    .get()
                    .and_then(Result::ok)
                    .map(|stats| {
                        view! {
                            <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
                                {stat_tiles(&stats)
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div class="rounded-lg bg-surface-elevated p-4 shadow">
                                                <p class="text-xs uppercase text-fg-muted">{label}</p>
                                                <p class="mt-1 text-xl font-semibold text-fg">{value}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </Transition>
    }
}

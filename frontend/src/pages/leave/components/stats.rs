use crate::api::ApiError;
use crate::models::leave::LeaveStats;
use leptos::*;

fn stat_tiles(stats: &LeaveStats) -> [(&'static str, u64); 4] {
    [
        ("Pending approval", stats.pending_approval),
        ("Approved", stats.approved),
        ("Rejected", stats.rejected),
        ("On leave today", stats.on_leave_today),
    ]
}

#[component]
pub fn LeaveStatsStrip(stats: Resource<u32, Result<LeaveStats, ApiError>>) -> impl IntoView {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_follow_stats() {
        let tiles = stat_tiles(&LeaveStats {
            pending_approval: 3,
            on_leave_today: 1,
            ..LeaveStats::default()
        });
        assert_eq!(tiles[0], ("Pending approval", 3));
        assert_eq!(tiles[3], ("On leave today", 1));
    }
}

/// Shortcut tile on the dashboard: `(href, title, description, admin_only)`.
pub const FEATURE_CARDS: &[(&str, &str, &str, bool)] = &[
    (
        "/billing-rates",
        "Billing rates",
        "Hourly, flat and retainer rates and the groups they are sold in.",
        false,
    ),
    (
        "/leave",
        "Leave requests",
        "Submit leave, follow approvals and confirm returns.",
        false,
    ),
    (
        "/leads",
        "Leads",
        "Capture prospective clients and track them to a decision.",
        false,
    ),
    (
        "/staff",
        "Staff",
        "Invite colleagues, change roles and record departures.",
        true,
    ),
    (
        "/settings",
        "Enterprise settings",
        "Security policy, branding, privacy and API keys.",
        true,
    ),
];

pub fn visible_cards(is_admin: bool) -> Vec<(&'static str, &'static str, &'static str)> {
    FEATURE_CARDS
        .iter()
        .filter(|(_, _, _, admin_only)| is_admin || !admin_only)
        .map(|(href, title, description, _)| (*href, *title, *description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_only_cards_are_hidden_from_members() {
        let member: Vec<_> = visible_cards(false).into_iter().map(|c| c.0).collect();
        assert_eq!(member, vec!["/billing-rates", "/leave", "/leads"]);
        assert_eq!(visible_cards(true).len(), FEATURE_CARDS.len());
    }
}

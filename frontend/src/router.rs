use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth},
    pages::{
        BillingRatesPage, DashboardPage, HomePage, LeadsPage, LeaveDetailPage, LeavePage,
        LoginPage, SettingsPage, StaffPage,
    },
    state::{auth::AuthProvider, toast::provide_toasts},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/billing-rates",
    "/leave",
    "/leave/:id",
    "/leads",
    "/staff",
    "/settings",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/billing-rates",
    "/leave",
    "/leave/:id",
    "/leads",
    "/staff",
    "/settings",
];

/// Protected routes that additionally require an owner or admin.
pub const ADMIN_ROUTE_PATHS: &[&str] = &["/staff", "/settings"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_toasts();
    provide_meta_context();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/billing-rates" view=ProtectedBillingRates/>
                    <Route path="/leave" view=ProtectedLeave/>
                    <Route path="/leave/:id" view=ProtectedLeaveDetail/>
                    <Route path="/leads" view=ProtectedLeads/>
                    <Route path="/staff" view=AdminStaff/>
                    <Route path="/settings" view=AdminSettings/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedBillingRates() -> impl IntoView {
    view! { <RequireAuth><BillingRatesPage/></RequireAuth> }
}

#[component]
fn ProtectedLeave() -> impl IntoView {
    view! { <RequireAuth><LeavePage/></RequireAuth> }
}

#[component]
fn ProtectedLeaveDetail() -> impl IntoView {
    view! { <RequireAuth><LeaveDetailPage/></RequireAuth> }
}

#[component]
fn ProtectedLeads() -> impl IntoView {
    view! { <RequireAuth><LeadsPage/></RequireAuth> }
}

#[component]
fn AdminStaff() -> impl IntoView {
    view! { <RequireAdmin><StaffPage/></RequireAdmin> }
}

#[component]
fn AdminSettings() -> impl IntoView {
    view! { <RequireAdmin><SettingsPage/></RequireAdmin> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::NAV_LINKS;
    use std::collections::HashSet;

    #[test]
    fn route_paths_cover_every_feature() {
        for path in ["/billing-rates", "/leave", "/leave/:id", "/leads", "/staff", "/settings"] {
            assert!(ROUTE_PATHS.contains(&path), "missing route {}", path);
        }
    }

    #[test]
    fn protected_and_public_routes_partition_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        assert_eq!(protected.union(&public).count(), all.len());
    }

    #[test]
    fn admin_routes_are_protected() {
        for path in ADMIN_ROUTE_PATHS {
            assert!(PROTECTED_ROUTE_PATHS.contains(path), "{} must be protected", path);
        }
    }

    #[test]
    fn nav_links_point_at_routes() {
        for (href, _, admin_only) in NAV_LINKS {
            assert!(ROUTE_PATHS.contains(href), "nav link {} has no route", href);
            assert_eq!(*admin_only, ADMIN_ROUTE_PATHS.contains(href), "{}", href);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}

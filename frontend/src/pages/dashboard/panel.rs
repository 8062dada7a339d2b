use crate::pages::dashboard::{
    components::{FeatureGrid, SummarySection},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <DashboardFrame>
            <SummarySection overview=vm.overview_resource />
            <FeatureGrid is_admin=vm.is_admin />
        </DashboardFrame>
    }
}

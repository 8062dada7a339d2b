use crate::components::layout::{Layout, PageHeader};
use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader
                    title="Dashboard"
                    description="Firm activity at a glance and shortcuts into each area."
                />
                {children()}
            </div>
        </Layout>
    }
}

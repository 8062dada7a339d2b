use crate::components::layout::{Layout, PageHeader};
use leptos::*;

#[component]
pub fn BillingRatesFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader
                    title="Billing rates"
                    description="Rates charged for legal work and the groups that bundle them for clients, cases and services."
                />
                {children()}
            </div>
        </Layout>
    }
}

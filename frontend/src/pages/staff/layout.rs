use crate::components::layout::{Layout, PageHeader};
use leptos::*;

#[component]
pub fn StaffFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader
                    title="Staff"
                    description="Team members, invitations, departures and reinstatements."
                />
                {children()}
            </div>
        </Layout>
    }
}

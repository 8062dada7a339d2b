use crate::components::layout::{Layout, PageHeader};
use leptos::*;

#[component]
pub fn LeadsFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader
                    title="Leads"
                    description="Prospective clients from enquiry to engagement."
                />
                {children()}
            </div>
        </Layout>
    }
}

use crate::components::layout::{Layout, PageHeader};
use leptos::*;

#[component]
pub fn LeaveFrame(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader title=title description=description />
                {children()}
            </div>
        </Layout>
    }
}

use crate::components::layout::{Layout, PageHeader};
use leptos::*;

#[component]
pub fn SettingsFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader
                    title="Enterprise settings"
                    description="Security, branding, privacy and API access for the whole firm."
                />
                {children()}
            </div>
        </Layout>
    }
}

use crate::domain::a002_project_alm_binding::ui::AlmBindingPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <AlmBindingPage />
        </ConfigProvider>
    }
}

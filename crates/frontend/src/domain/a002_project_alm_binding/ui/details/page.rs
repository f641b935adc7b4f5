//! Project settings page hosting the binding form

use super::view::AlmBindingForm;
use super::view_model::AlmBindingVm;
use crate::shared::config::BootstrapConfig;
use contracts::domain::a002_project_alm_binding::{BindingField, FieldValue};
use leptos::prelude::*;

#[component]
pub fn AlmBindingPage() -> impl IntoView {
    let vm = AlmBindingVm::new();
    vm.load(BootstrapConfig::load());

    let documentation_url: Signal<Option<String>> = vm.documentation_url.into();

    view! {
        <div class="page page--detail">
            <div class="page__content">
                <AlmBindingForm
                    form_data=vm.form
                    instances=vm.instances
                    is_changed=vm.is_changed()
                    is_configured=vm.is_configured()
                    is_valid=vm.is_valid()
                    loading=vm.loading
                    saving=vm.saving
                    success=vm.success
                    documentation_url=documentation_url
                    on_field_change=Callback::new(move |(field, value): (BindingField, FieldValue)| {
                        vm.change_field(field, value)
                    })
                    on_reset=Callback::new(move |_| vm.reset())
                    on_submit=Callback::new(move |_| vm.submit())
                />
            </div>
        </div>
    }
}

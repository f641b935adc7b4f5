use super::plan::{provider_fields, selected_alm, FieldKind};
use crate::shared::config::BootstrapConfig;
use contracts::domain::a001_alm_settings::AlmSettingsInstance;
use contracts::domain::a002_project_alm_binding::{BindingField, FieldValue, ProjectAlmBinding};
use leptos::prelude::*;

/// ViewModel that owns the binding form state and feeds `AlmBindingForm`.
///
/// Saving keeps the binding in memory only.
#[derive(Clone, Copy)]
pub struct AlmBindingVm {
    pub form: RwSignal<ProjectAlmBinding>,
    pub saved: RwSignal<Option<ProjectAlmBinding>>,
    pub instances: RwSignal<Vec<AlmSettingsInstance>>,
    pub documentation_url: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub success: RwSignal<bool>,
}

impl AlmBindingVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProjectAlmBinding::default()),
            saved: RwSignal::new(None),
            instances: RwSignal::new(Vec::new()),
            documentation_url: RwSignal::new(None),
            loading: RwSignal::new(true),
            saving: RwSignal::new(false),
            success: RwSignal::new(false),
        }
    }

    /// Take instances and the stored binding from the page bootstrap
    pub fn load(&self, config: BootstrapConfig) {
        let binding = config.binding.map(|b| normalized(&b));
        self.form.set(binding.clone().unwrap_or_default());
        self.saved.set(binding);
        self.instances.set(config.instances);
        self.documentation_url.set(Some(config.documentation_url));
        self.loading.set(false);
    }

    pub fn is_changed(&self) -> Signal<bool> {
        let form = self.form;
        let saved = self.saved;
        Signal::derive(move || form.with(|f| saved.with(|s| is_changed(f, s.as_ref()))))
    }

    pub fn is_configured(&self) -> Signal<bool> {
        let saved = self.saved;
        Signal::derive(move || saved.with(Option::is_some))
    }

    pub fn is_valid(&self) -> Signal<bool> {
        let form = self.form;
        let instances = self.instances;
        Signal::derive(move || form.with(|f| instances.with(|list| is_complete(f, list))))
    }

    pub fn change_field(&self, field: BindingField, value: FieldValue) {
        self.form.update(|f| apply_change(f, field, value));
        self.success.set(false);
    }

    pub fn submit(&self) {
        let form = self.form.get_untracked();
        let complete = self.instances.with_untracked(|list| is_complete(&form, list));
        if !complete {
            log::warn!("binding form submitted while incomplete, ignoring");
            return;
        }

        self.saving.set(true);
        let stored = normalized(&form);
        log::info!(
            "binding saved: key={}",
            stored.key.as_deref().unwrap_or_default()
        );
        self.form.set(stored.clone());
        self.saved.set(Some(stored));
        self.saving.set(false);
        self.success.set(true);
    }

    pub fn reset(&self) {
        log::info!("binding removed");
        self.form.set(ProjectAlmBinding::default());
        self.saved.set(None);
        self.success.set(false);
    }
}

impl Default for AlmBindingVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank text fields count as unset
fn normalized(form: &ProjectAlmBinding) -> ProjectAlmBinding {
    let non_blank = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
    ProjectAlmBinding {
        key: non_blank(&form.key),
        repository: non_blank(&form.repository),
        slug: non_blank(&form.slug),
        summary_comment_enabled: form.summary_comment_enabled,
    }
}

fn is_changed(form: &ProjectAlmBinding, saved: Option<&ProjectAlmBinding>) -> bool {
    let baseline = saved.cloned().unwrap_or_default();
    normalized(form) != normalized(&baseline)
}

/// A provider is selected and every mandatory field of its field set is filled
fn is_complete(form: &ProjectAlmBinding, instances: &[AlmSettingsInstance]) -> bool {
    let Some(alm) = selected_alm(form, instances) else {
        return false;
    };
    provider_fields(Some(alm))
        .iter()
        .filter(|spec| !spec.optional && spec.kind == FieldKind::Text)
        .all(|spec| !form.text(spec.field).trim().is_empty())
}

/// Write a field; switching instance drops the previous provider's fields
fn apply_change(form: &mut ProjectAlmBinding, field: BindingField, value: FieldValue) {
    if let (BindingField::Key, FieldValue::Text(key)) = (field, &value) {
        if form.key.as_deref() != Some(key.as_str()) {
            form.clear_provider_fields();
        }
    }
    form.apply(field, value);
}

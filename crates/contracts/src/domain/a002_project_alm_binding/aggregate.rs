use serde::{Deserialize, Serialize};

// ============================================================================
// Binding form data
// ============================================================================

/// Binding of a project to an ALM instance, as edited by the binding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAlmBinding {
    /// Key of the selected `AlmSettingsInstance`
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary_comment_enabled: Option<bool>,
}

/// Identifier of an editable binding field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindingField {
    Key,
    Repository,
    Slug,
    SummaryCommentEnabled,
}

/// Value emitted by a form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl ProjectAlmBinding {
    /// Current text of a text field, empty when unset
    pub fn text(&self, field: BindingField) -> String {
        let value = match field {
            BindingField::Key => &self.key,
            BindingField::Repository => &self.repository,
            BindingField::Slug => &self.slug,
            BindingField::SummaryCommentEnabled => return String::new(),
        };
        value.clone().unwrap_or_default()
    }

    /// Write a single field. A value of the wrong shape for the field is ignored.
    pub fn apply(&mut self, field: BindingField, value: FieldValue) {
        match (field, value) {
            (BindingField::Key, FieldValue::Text(v)) => self.key = Some(v),
            (BindingField::Repository, FieldValue::Text(v)) => self.repository = Some(v),
            (BindingField::Slug, FieldValue::Text(v)) => self.slug = Some(v),
            (BindingField::SummaryCommentEnabled, FieldValue::Flag(v)) => {
                self.summary_comment_enabled = Some(v)
            }
            _ => {}
        }
    }

    /// Drop everything but the instance key
    pub fn clear_provider_fields(&mut self) {
        self.repository = None;
        self.slug = None;
        self.summary_comment_enabled = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_matching_values() {
        let mut form = ProjectAlmBinding::default();
        form.apply(BindingField::Key, FieldValue::Text("gh".into()));
        form.apply(BindingField::Repository, FieldValue::Text("org/repo".into()));
        form.apply(BindingField::SummaryCommentEnabled, FieldValue::Flag(false));

        assert_eq!(form.key.as_deref(), Some("gh"));
        assert_eq!(form.text(BindingField::Repository), "org/repo");
        assert_eq!(form.summary_comment_enabled, Some(false));
    }

    #[test]
    fn test_apply_ignores_mismatched_values() {
        let mut form = ProjectAlmBinding::default();
        form.apply(BindingField::Slug, FieldValue::Flag(true));
        form.apply(BindingField::SummaryCommentEnabled, FieldValue::Text("yes".into()));
        assert_eq!(form, ProjectAlmBinding::default());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let form: ProjectAlmBinding =
            serde_json::from_str(r#"{"key":"gh","summaryCommentEnabled":true}"#).unwrap();
        assert_eq!(form.summary_comment_enabled, Some(true));
        assert_eq!(form.text(BindingField::Slug), "");
    }

    #[test]
    fn test_clear_provider_fields() {
        let mut form = ProjectAlmBinding {
            key: Some("bb".into()),
            repository: Some("PROJ".into()),
            slug: Some("repo".into()),
            summary_comment_enabled: Some(true),
        };
        form.clear_provider_fields();
        assert_eq!(form.key.as_deref(), Some("bb"));
        assert_eq!(form.repository, None);
        assert_eq!(form.slug, None);
        assert_eq!(form.summary_comment_enabled, None);
    }
}

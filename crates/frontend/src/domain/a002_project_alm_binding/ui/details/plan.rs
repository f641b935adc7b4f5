//! What the binding form shows for a given set of props.
//!
//! Everything here is pure so the view can stay a thin mapping from these
//! values to markup.

use contracts::domain::a001_alm_settings::AlmSettingsInstance;
use contracts::domain::a002_project_alm_binding::{BindingField, ProjectAlmBinding};
use contracts::enums::AlmKind;

/// Status flags computed by the controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindingFlags {
    pub is_changed: bool,
    pub is_configured: bool,
    pub is_valid: bool,
    pub loading: bool,
    pub saving: bool,
    pub success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    NoInstances,
    Form,
}

pub fn screen(loading: bool, instance_count: usize) -> Screen {
    if loading {
        Screen::Loading
    } else if instance_count == 0 {
        Screen::NoInstances
    } else {
        Screen::Form
    }
}

// ============================================================================
// Provider fields
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Toggle; `default` is used while the form value is unset
    Boolean { default: bool },
}

/// Example shown in a help tooltip; `emphasis` is rendered in bold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpExample {
    pub before: &'static str,
    pub emphasis: &'static str,
    pub after: &'static str,
}

impl HelpExample {
    fn plain(text: &'static str) -> Self {
        Self {
            before: text,
            emphasis: "",
            after: "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Message id under `settings.pr_decoration.binding.form`, also the DOM id
    pub id: &'static str,
    pub field: BindingField,
    pub kind: FieldKind,
    pub optional: bool,
    pub help: bool,
    pub example: Option<HelpExample>,
}

impl FieldSpec {
    fn text(id: &'static str, field: BindingField) -> Self {
        Self {
            id,
            field,
            kind: FieldKind::Text,
            optional: false,
            help: false,
            example: None,
        }
    }

    fn with_help(mut self, example: Option<HelpExample>) -> Self {
        self.help = true;
        self.example = example;
        self
    }

    /// Value of a boolean field, falling back to its default
    pub fn flag(&self, form: &ProjectAlmBinding) -> bool {
        let default = match self.kind {
            FieldKind::Boolean { default } => default,
            FieldKind::Text => false,
        };
        let value = match self.field {
            BindingField::SummaryCommentEnabled => form.summary_comment_enabled,
            BindingField::Key | BindingField::Repository | BindingField::Slug => None,
        };
        value.unwrap_or(default)
    }
}

/// Provider kind of the instance the form points at, if any
pub fn selected_alm(form: &ProjectAlmBinding, instances: &[AlmSettingsInstance]) -> Option<AlmKind> {
    let key = form.key.as_deref().filter(|k| !k.is_empty())?;
    AlmSettingsInstance::find(instances, key).map(|i| i.alm)
}

pub fn provider_fields(alm: Option<AlmKind>) -> Vec<FieldSpec> {
    let Some(alm) = alm else {
        return Vec::new();
    };

    match alm {
        AlmKind::Bitbucket => vec![
            FieldSpec::text("bitbucket.repository", BindingField::Repository).with_help(Some(
                HelpExample {
                    before: ".../projects/",
                    emphasis: "{KEY}",
                    after: "/repos/{SLUG}/browse",
                },
            )),
            FieldSpec::text("bitbucket.slug", BindingField::Slug).with_help(Some(HelpExample {
                before: ".../projects/{KEY}/repos/",
                emphasis: "{SLUG}",
                after: "/browse",
            })),
        ],
        AlmKind::GitHub => vec![
            FieldSpec::text("github.repository", BindingField::Repository)
                .with_help(Some(HelpExample::plain("SonarSource/sonarqube"))),
            FieldSpec {
                id: "github.summary_comment_setting",
                field: BindingField::SummaryCommentEnabled,
                kind: FieldKind::Boolean { default: true },
                optional: true,
                help: true,
                example: None,
            },
        ],
        AlmKind::GitLab => vec![FieldSpec::text("gitlab.repository", BindingField::Repository)],
        AlmKind::Azure => Vec::new(),
    }
}

// ============================================================================
// Actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Hidden,
    Disabled,
    Enabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState {
    pub saving_spinner: bool,
    pub submit: SubmitState,
    pub reset_visible: bool,
    pub success_visible: bool,
}

pub fn actions(flags: BindingFlags) -> ActionState {
    let submit = if !flags.is_changed {
        SubmitState::Hidden
    } else if flags.is_valid && !flags.saving {
        SubmitState::Enabled
    } else {
        SubmitState::Disabled
    };

    ActionState {
        saving_spinner: flags.saving,
        submit,
        reset_visible: flags.is_configured,
        success_visible: !flags.saving && flags.success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instances() -> Vec<AlmSettingsInstance> {
        vec![
            AlmSettingsInstance::new("azure", AlmKind::Azure),
            AlmSettingsInstance::new("bitbucket", AlmKind::Bitbucket)
                .with_url("https://bitbucket.example.com"),
            AlmSettingsInstance::new("github", AlmKind::GitHub),
            AlmSettingsInstance::new("gitlab", AlmKind::GitLab),
        ]
    }

    fn form_for(key: &str) -> ProjectAlmBinding {
        ProjectAlmBinding {
            key: Some(key.to_string()),
            ..Default::default()
        }
    }

    fn field_ids(form: &ProjectAlmBinding) -> Vec<&'static str> {
        provider_fields(selected_alm(form, &instances()))
            .iter()
            .map(|f| f.id)
            .collect()
    }

    #[test]
    fn test_loading_wins_over_everything() {
        assert_eq!(screen(true, instances().len()), Screen::Loading);
        assert_eq!(screen(true, 0), Screen::Loading);
    }

    #[test]
    fn test_no_instances() {
        assert_eq!(screen(false, 0), Screen::NoInstances);
        assert_eq!(screen(false, instances().len()), Screen::Form);
    }

    #[test]
    fn test_fields_per_provider() {
        assert_eq!(
            field_ids(&form_for("bitbucket")),
            vec!["bitbucket.repository", "bitbucket.slug"]
        );
        assert_eq!(
            field_ids(&form_for("github")),
            vec!["github.repository", "github.summary_comment_setting"]
        );
        assert_eq!(field_ids(&form_for("gitlab")), vec!["gitlab.repository"]);
        assert!(field_ids(&form_for("azure")).is_empty());
    }

    #[test]
    fn test_no_fields_without_matching_instance() {
        assert!(field_ids(&ProjectAlmBinding::default()).is_empty());
        assert!(field_ids(&form_for("")).is_empty());
        assert!(field_ids(&form_for("removed-instance")).is_empty());
    }

    #[test]
    fn test_summary_comment_defaults_to_true() {
        let fields = provider_fields(Some(AlmKind::GitHub));
        let toggle = fields
            .iter()
            .find(|f| f.field == BindingField::SummaryCommentEnabled)
            .unwrap();
        assert!(toggle.optional);

        let mut form = form_for("github");
        assert!(toggle.flag(&form));
        form.summary_comment_enabled = Some(false);
        assert!(!toggle.flag(&form));
    }

    #[test]
    fn test_mandatory_text_fields() {
        for alm in AlmKind::all() {
            for spec in provider_fields(Some(alm)) {
                if spec.kind == FieldKind::Text {
                    assert!(!spec.optional, "{} should be mandatory", spec.id);
                }
            }
        }
        let gitlab = provider_fields(Some(AlmKind::GitLab));
        assert!(!gitlab[0].help);
    }

    #[test]
    fn test_submit_state() {
        let mut flags = BindingFlags::default();
        assert_eq!(actions(flags).submit, SubmitState::Hidden);

        flags.is_changed = true;
        assert_eq!(actions(flags).submit, SubmitState::Disabled);

        flags.is_valid = true;
        assert_eq!(actions(flags).submit, SubmitState::Enabled);

        flags.saving = true;
        assert_eq!(actions(flags).submit, SubmitState::Disabled);

        flags.is_changed = false;
        assert_eq!(actions(flags).submit, SubmitState::Hidden);
    }

    #[test]
    fn test_reset_and_success_visibility() {
        let mut flags = BindingFlags::default();
        assert!(!actions(flags).reset_visible);
        flags.is_configured = true;
        assert!(actions(flags).reset_visible);

        flags.success = true;
        assert!(actions(flags).success_visible);
        flags.saving = true;
        let state = actions(flags);
        assert!(!state.success_visible);
        assert!(state.saving_spinner);
    }
}

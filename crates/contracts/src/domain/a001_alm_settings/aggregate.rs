use crate::enums::AlmKind;
use serde::{Deserialize, Serialize};

/// A configured code-hosting instance a project can be bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmSettingsInstance {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub alm: AlmKind,
}

impl AlmSettingsInstance {
    pub fn new(key: impl Into<String>, alm: AlmKind) -> Self {
        Self {
            key: key.into(),
            url: None,
            alm,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Text shown for the instance in the selector: `key — url`, or just `key`
    pub fn option_label(&self) -> String {
        match self.url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => format!("{} — {}", self.key, url),
            None => self.key.clone(),
        }
    }

    /// Find the instance with the given key
    pub fn find<'a>(instances: &'a [AlmSettingsInstance], key: &str) -> Option<&'a Self> {
        instances.iter().find(|i| i.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label() {
        let plain = AlmSettingsInstance::new("gh-main", AlmKind::GitHub);
        assert_eq!(plain.option_label(), "gh-main");

        let with_url = plain.clone().with_url("https://api.github.com");
        assert_eq!(with_url.option_label(), "gh-main — https://api.github.com");

        let empty_url = plain.with_url("");
        assert_eq!(empty_url.option_label(), "gh-main");
    }

    #[test]
    fn test_deserialize_without_url() {
        let inst: AlmSettingsInstance =
            serde_json::from_str(r#"{"key":"bb","alm":"bitbucket"}"#).unwrap();
        assert_eq!(inst.url, None);
        assert_eq!(inst.alm, AlmKind::Bitbucket);
    }

    #[test]
    fn test_find() {
        let list = vec![
            AlmSettingsInstance::new("a", AlmKind::GitLab),
            AlmSettingsInstance::new("b", AlmKind::Azure),
        ];
        assert_eq!(
            AlmSettingsInstance::find(&list, "b").map(|i| i.alm),
            Some(AlmKind::Azure)
        );
        assert!(AlmSettingsInstance::find(&list, "c").is_none());
    }
}

//! Page bootstrap configuration
//!
//! The host page embeds the data the binding page starts from:
//!
//! ```html
//! <script type="application/json" id="alm-binding-bootstrap">
//!   {"instances": [{"key": "github", "url": "https://api.github.com", "alm": "github"}],
//!    "binding": {"key": "github", "repository": "org/repo"}}
//! </script>
//! ```

use contracts::domain::a001_alm_settings::AlmSettingsInstance;
use contracts::domain::a002_project_alm_binding::ProjectAlmBinding;
use serde::Deserialize;

pub const BOOTSTRAP_ELEMENT_ID: &str = "alm-binding-bootstrap";
pub const DEFAULT_DOCUMENTATION_URL: &str = "/documentation/analysis/pull-request/#pr-decoration";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default)]
    pub instances: Vec<AlmSettingsInstance>,
    /// Binding already stored for the project, if any
    #[serde(default)]
    pub binding: Option<ProjectAlmBinding>,
    #[serde(default = "default_documentation_url")]
    pub documentation_url: String,
}

fn default_documentation_url() -> String {
    DEFAULT_DOCUMENTATION_URL.to_string()
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
            binding: None,
            documentation_url: default_documentation_url(),
        }
    }
}

impl BootstrapConfig {
    pub fn from_json(text: &str) -> Result<Self, String> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text).map_err(|e| format!("invalid bootstrap config: {e}"))
    }

    /// Read the bootstrap element from the current document.
    ///
    /// A missing element yields the defaults, a malformed one is logged and
    /// also yields the defaults.
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(text) = text else {
            log::debug!("no #{} element, starting empty", BOOTSTRAP_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                log::debug!(
                    "bootstrap config: {} instance(s), binding present: {}",
                    config.instances.len(),
                    config.binding.is_some()
                );
                config
            }
            Err(e) => {
                log::error!("{}", e);
                Self::default()
            }
        }
    }
}

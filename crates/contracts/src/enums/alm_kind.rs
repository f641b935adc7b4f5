use serde::{Deserialize, Serialize};

/// Code-hosting providers a project can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlmKind {
    Azure,
    Bitbucket,
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "gitlab")]
    GitLab,
}

impl AlmKind {
    pub fn all() -> Vec<AlmKind> {
        vec![
            AlmKind::Azure,
            AlmKind::Bitbucket,
            AlmKind::GitHub,
            AlmKind::GitLab,
        ]
    }
}

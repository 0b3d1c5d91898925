//! Repository reference — the `owner/repo_name` pair a request targets.

use std::fmt;

use serde::Deserialize;

/// A GitHub repository addressed by its owner and name.
///
/// Both segments are opaque; the mock never checks that they name anything.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo_name: String,
}

impl RepositoryRef {
    #[must_use]
    pub fn new(owner: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo_name: repo_name.into(),
        }
    }

    /// Path of the custom property values endpoint for this repository.
    #[must_use]
    pub fn properties_values_path(&self) -> String {
        format!("/repos/{}/{}/properties/values", self.owner, self.repo_name)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo_name)
    }
}

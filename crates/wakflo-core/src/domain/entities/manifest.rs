use serde::{Deserialize, Serialize};

use crate::domain::{entities::render_context::RenderContext, error::DomainError, naming};

/// Version written into new manifests.
pub const INITIAL_VERSION: &str = "0.0.1";

/// Content of the `flo.toml` marker file.
///
/// ```toml
/// [integration]
/// name = "Slack"
/// description = "Post messages to channels"
/// version = "0.0.1"
/// icon = "mdi:slack"
/// categories = ["communication"]
/// authors = ["Wakflo <integrations@wakflo.com>"]
/// ```
///
/// Unknown keys are ignored when reading, so manifests written by other
/// tools still open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationManifest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct ManifestFile {
    integration: IntegrationManifest,
}

impl IntegrationManifest {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            description: description.into().trim().to_string(),
            version: INITIAL_VERSION.to_string(),
            icon: String::new(),
            categories: Vec::new(),
            authors: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Parse a `flo.toml` document.
    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        let file: ManifestFile =
            toml::from_str(content).map_err(|e| DomainError::MalformedMetadataFile {
                reason: e.message().to_string(),
            })?;

        if file.integration.name.trim().is_empty() {
            return Err(DomainError::MalformedMetadataFile {
                reason: "integration name is empty".into(),
            });
        }

        Ok(file.integration)
    }

    pub fn to_toml_string(&self) -> Result<String, DomainError> {
        toml::to_string(&ManifestFile {
            integration: self.clone(),
        })
        .map_err(|e| DomainError::RenderingFailed {
            reason: format!("flo.toml: {e}"),
        })
    }

    /// Folder and Go package of the integration: lowercase alphanumerics.
    pub fn package_name(&self) -> String {
        naming::to_package_name(&self.name)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::InvalidIntegration("name cannot be empty".into()));
        }
        if self.package_name().is_empty() {
            return Err(DomainError::InvalidIntegration(format!(
                "name '{}' has no letters or digits",
                self.name
            )));
        }
        if !self.name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidIntegration(format!(
                "name '{}' must start with a letter",
                self.name
            )));
        }
        if self.authors.iter().all(|a| a.trim().is_empty()) {
            return Err(DomainError::InvalidIntegration(
                "at least one author is required".into(),
            ));
        }
        Ok(())
    }

    /// Variables for the `lib.go` and `README.md` templates.
    pub fn render_context(&self, docs: &str) -> RenderContext {
        RenderContext::new()
            .with_variable("name", &self.name)
            .with_variable("description", &self.description)
            .with_variable("docs", docs.trim())
            .with_variable("categories_list", bullet_list(&self.categories))
            .with_variable("authors_list", bullet_list(&self.authors))
    }
}

fn bullet_list(items: &[String]) -> String {
    items.iter().map(|item| format!("- {item}\n")).collect()
}

/// Split a comma-separated author string, dropping empty entries.
pub fn parse_authors(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect()
}

use std::path::PathBuf;

use crate::domain::{
    entities::render_context::RenderContext,
    error::DomainError,
    naming::{to_file_name, to_pascal_case},
    value_objects::{ResourceKind, ResourceSubtype},
};

/// Everything known about one action or trigger being added.
///
/// Built once from user input, then read by every step of resource creation.
/// All derived names are computed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMetadata {
    name: String,
    description: String,
    kind: ResourceKind,
    subtype: ResourceSubtype,
    file_name: String,
    constructor: String,
}

impl ResourceMetadata {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ResourceKind,
        subtype: ResourceSubtype,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        let description = description.into().trim().to_string();

        if name.is_empty() {
            return Err(DomainError::InvalidResource("name cannot be empty".into()));
        }
        if name.contains(['/', '\\']) {
            return Err(DomainError::InvalidResource(format!(
                "name '{name}' cannot contain path separators"
            )));
        }

        let pascal = to_pascal_case(&name);
        if !pascal.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidResource(format!(
                "name '{name}' has no letters or digits"
            )));
        }

        if !kind.allows(subtype) {
            return Err(DomainError::SubtypeNotAllowed {
                kind: kind.to_string(),
                subtype: subtype.to_string(),
            });
        }

        Ok(Self {
            file_name: to_file_name(&name),
            constructor: format!("{}.New{}{}", kind.folder(), pascal, kind.title()),
            name,
            description,
            kind,
            subtype,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn subtype(&self) -> ResourceSubtype {
        self.subtype
    }

    /// File stem shared by the source and documentation files.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Qualified constructor, e.g. `actions.NewRunPythonAction`.
    pub fn constructor(&self) -> &str {
        &self.constructor
    }

    /// SDK constant, e.g. `sdkcore.TriggerTypePolling`.
    pub fn type_name(&self) -> String {
        format!("{}{}", self.kind.sdk_type_prefix(), self.subtype)
    }

    pub fn source_path(&self) -> PathBuf {
        PathBuf::from(self.kind.folder()).join(format!("{}.go", self.file_name))
    }

    pub fn doc_file_name(&self) -> String {
        format!("{}.md", self.file_name)
    }

    pub fn doc_path(&self) -> PathBuf {
        PathBuf::from(self.kind.folder()).join(self.doc_file_name())
    }

    /// Line registered in `lib.go`.
    pub fn registry_entry(&self) -> String {
        format!("{}(),", self.constructor)
    }

    /// Link target relative to the project root; also the README dedupe key.
    pub fn doc_link(&self) -> String {
        format!("{}/{}", self.kind.folder(), self.doc_file_name())
    }

    pub fn readme_key(&self) -> String {
        format!("({})", self.doc_link())
    }

    pub fn readme_row(&self) -> String {
        format!(
            "- **{}**: {} ([Documentation]({}))",
            self.name,
            self.description,
            self.doc_link()
        )
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext::new()
            .with_variable("name", &self.name)
            .with_variable("description", &self.description)
            .with_variable("file_name", &self.file_name)
            .with_variable("type_name", self.type_name())
            .with_variable("kind", self.kind.as_str())
            .with_variable("constructor", &self.constructor)
    }
}

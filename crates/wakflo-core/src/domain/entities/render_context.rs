use std::collections::BTreeMap;

/// Variables available to a template.
///
/// Immutable after creation; `with_variable` consumes and returns the context
/// so contexts read as a chain:
///
/// ```rust
/// use wakflo_core::domain::RenderContext;
///
/// let ctx = RenderContext::new()
///     .with_variable("name", "Run Python")
///     .with_variable("file_name", "run_python");
/// assert_eq!(ctx.get("name"), Some("Run Python"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Variables in name order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

//! Placeholder renderer with pipe transforms.
//!
//! `{{ name }}` is replaced by the variable; `{{ name | snake | upper }}`
//! applies the transforms left to right. Text outside `{{ }}` is copied
//! untouched.

use tracing::{instrument, trace};
use wakflo_core::{
    application::ports::TemplateRenderer,
    domain::{DomainError, RenderContext, Transforms},
    error::WakfloResult,
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Renderer resolving placeholders against a [`RenderContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer {
    transforms: Transforms,
}

impl SimpleRenderer {
    /// Renderer with the default transform table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with a caller-supplied transform table.
    pub fn with_transforms(transforms: Transforms) -> Self {
        Self { transforms }
    }

    fn evaluate(&self, expression: &str, context: &RenderContext) -> Result<String, DomainError> {
        let mut parts = expression.split('|').map(str::trim);

        let variable = parts.next().unwrap_or_default();
        if variable.is_empty() {
            return Err(failed(format!("empty placeholder '{{{{{expression}}}}}'")));
        }

        let mut value = context
            .get(variable)
            .ok_or_else(|| failed(format!("unknown variable '{variable}'")))?
            .to_string();

        for name in parts {
            let transform = self
                .transforms
                .get(name)
                .ok_or_else(|| failed(format!("unknown transform '{name}'")))?;
            value = transform(&value);
        }

        Ok(value)
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(variables = context.len()))]
    fn render(&self, template: &str, context: &RenderContext) -> WakfloResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open
                .find(CLOSE)
                .ok_or_else(|| failed("unclosed '{{' in template".into()))?;

            let expression = &after_open[..end];
            trace!(expression = expression.trim(), "Resolving placeholder");
            out.push_str(&self.evaluate(expression, context)?);

            rest = &after_open[end + CLOSE.len()..];
        }
        out.push_str(rest);

        Ok(out)
    }
}

fn failed(reason: String) -> DomainError {
    DomainError::RenderingFailed { reason }
}

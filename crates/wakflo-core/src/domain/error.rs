// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through staged change sets)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Invalid integration: {0}")]
    InvalidIntegration(String),

    #[error("Subtype '{subtype}' is not valid for a {kind}")]
    SubtypeNotAllowed { kind: String, subtype: String },

    #[error("Duplicate path in change set: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Shape Errors (generated files are not what we expect)
    // ========================================================================
    #[error("Anchor '{anchor}' not found")]
    AnchorNotFound { anchor: String },

    #[error("Malformed metadata file: {reason}")]
    MalformedMetadataFile { reason: String },

    // ========================================================================
    // Rendering
    // ========================================================================
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidResource(msg) => vec![
                format!("Details: {}", msg),
                "Resource names must contain at least one letter or digit".into(),
            ],
            Self::InvalidIntegration(msg) => vec![
                format!("Details: {}", msg),
                "Check the name and authors you entered".into(),
            ],
            Self::SubtypeNotAllowed { kind, .. } => vec![
                format!("Valid {} types:", kind),
                match kind.as_str() {
                    "action" => "  • normal".into(),
                    _ => "  • polling, event, webhook, scheduled".into(),
                },
            ],
            Self::AnchorNotFound { anchor } => vec![
                format!("Could not find '{}' in the generated file", anchor),
                "The file was probably edited by hand or is not a generated registry".into(),
                "Restore the `return []integration.X{` literal and run the command again".into(),
            ],
            Self::MalformedMetadataFile { reason } => vec![
                format!("flo.toml could not be parsed: {}", reason),
                "The file needs an [integration] table with at least a name".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "A built-in template could not be rendered".into(),
                "This is a bug, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidResource(_)
            | Self::InvalidIntegration(_)
            | Self::SubtypeNotAllowed { .. } => ErrorCategory::Validation,
            Self::AnchorNotFound { .. } | Self::MalformedMetadataFile { .. } => {
                ErrorCategory::ProjectShape
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    ProjectShape,
    Internal,
}

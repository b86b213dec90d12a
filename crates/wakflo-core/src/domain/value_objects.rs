//! Domain value objects: ResourceKind, ResourceSubtype.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Everything that differs between an action and a trigger (folder, anchor,
//! README heading, template, allowed subtypes) is carried here as data so the
//! rest of the crate never branches on a kind string.

use crate::domain::error::DomainError;
use crate::domain::surgery::RegistryAnchor;
use crate::domain::templates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ResourceKind ─────────────────────────────────────────────────────────────

/// The kind of resource an integration exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Action,
    Trigger,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [Self::Action, Self::Trigger];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Trigger => "trigger",
        }
    }

    /// Capitalised name used in type names and messages.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Trigger => "Trigger",
        }
    }

    /// Folder (and Go package) holding every resource of this kind.
    pub const fn folder(&self) -> &'static str {
        match self {
            Self::Action => "actions",
            Self::Trigger => "triggers",
        }
    }

    /// Where new constructors are registered inside `lib.go`.
    pub const fn registry_anchor(&self) -> RegistryAnchor {
        match self {
            Self::Action => RegistryAnchor::new("return []integration.Action{"),
            Self::Trigger => RegistryAnchor::new("return []integration.Trigger{"),
        }
    }

    /// README section listing every resource of this kind.
    pub const fn readme_heading(&self) -> &'static str {
        match self {
            Self::Action => "## Actions",
            Self::Trigger => "## Triggers",
        }
    }

    /// Prefix of the SDK constant naming the subtype.
    pub const fn sdk_type_prefix(&self) -> &'static str {
        match self {
            Self::Action => "sdkcore.ActionType",
            Self::Trigger => "sdkcore.TriggerType",
        }
    }

    /// Source template rendered into `<folder>/<file>.go`.
    pub const fn source_template(&self) -> &'static str {
        match self {
            Self::Action => templates::ACTION_SOURCE,
            Self::Trigger => templates::TRIGGER_SOURCE,
        }
    }

    /// Subtypes a resource of this kind may declare.
    pub const fn subtypes(&self) -> &'static [ResourceSubtype] {
        match self {
            Self::Action => &[ResourceSubtype::Normal],
            Self::Trigger => &[
                ResourceSubtype::Polling,
                ResourceSubtype::Event,
                ResourceSubtype::Webhook,
                ResourceSubtype::Scheduled,
            ],
        }
    }

    pub fn allows(&self, subtype: ResourceSubtype) -> bool {
        self.subtypes().contains(&subtype)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "action" | "actions" => Ok(Self::Action),
            "trigger" | "triggers" => Ok(Self::Trigger),
            other => Err(DomainError::InvalidResource(format!(
                "unknown resource kind: {other}"
            ))),
        }
    }
}

// ── ResourceSubtype ──────────────────────────────────────────────────────────

/// How a resource runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceSubtype {
    Normal,
    Polling,
    Event,
    Webhook,
    Scheduled,
}

impl ResourceSubtype {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Polling => "Polling",
            Self::Event => "Event",
            Self::Webhook => "Webhook",
            Self::Scheduled => "Scheduled",
        }
    }
}

impl fmt::Display for ResourceSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceSubtype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "polling" => Ok(Self::Polling),
            "event" => Ok(Self::Event),
            "webhook" => Ok(Self::Webhook),
            "scheduled" => Ok(Self::Scheduled),
            other => Err(DomainError::InvalidResource(format!(
                "unknown resource type: {other}"
            ))),
        }
    }
}

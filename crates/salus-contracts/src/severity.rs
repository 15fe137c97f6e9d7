//! Severity scales used by the knowledge tables and advisories.
//!
//! Two scales exist: `Severity` is the six-bucket scale symptom entries and
//! advisories carry, and `InteractionSeverity` is the three-bucket scale of
//! drug interaction rules. The advisory formatter in salus-engine owns the
//! bridge between them; nothing in this crate decides escalation policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The severity bucket attached to a symptom entry or advisory.
///
/// Encoded in TOML and JSON as kebab-case strings:
///
/// ```toml
/// severity = "low"
/// severity = "low-moderate"
/// severity = "moderate"
/// severity = "moderate-high"
/// severity = "high"
/// severity = "unknown"
/// ```
///
/// `Unknown` is reserved for the fallback advisory produced when no symptom
/// keyword matches. It is never a valid severity for a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Low,
    LowModerate,
    Moderate,
    ModerateHigh,
    High,
    Unknown,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::LowModerate => "Low-Moderate",
            Severity::Moderate => "Moderate",
            Severity::ModerateHigh => "Moderate-High",
            Severity::High => "High",
            Severity::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// The severity of a drug interaction rule.
///
/// Ordered: `Mild < Moderate < Severe`. The ordering is used to pick the
/// dominant severity when several rules fire for one drug list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionSeverity {
    Mild,
    Moderate,
    Severe,
}

impl fmt::Display for InteractionSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InteractionSeverity::Mild => "Mild",
            InteractionSeverity::Moderate => "Moderate",
            InteractionSeverity::Severe => "Severe",
        };
        f.write_str(label)
    }
}

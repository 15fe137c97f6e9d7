//! Knowledge table row types and configuration schema.
//!
//! A `KnowledgeConfig` is deserialized from TOML and holds the three ordered
//! tables the engine queries. Table order is load-bearing: the symptom
//! matcher and region locator both return the FIRST matching row, so a more
//! specific entry must be declared before a more general one that would also
//! match. That ordering dependency is part of the contract, not an
//! implementation accident.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use salus_contracts::geometry::Rect;
use salus_contracts::severity::{InteractionSeverity, Severity};

/// A single symptom keyword rule.
///
/// Matching is case-insensitive substring containment against the
/// normalized (lowercased, trimmed) input text; no tokenization, no
/// stemming. Keywords must be stored lowercase and be unique within the
/// table.
///
/// Example in TOML:
/// ```toml
/// [[symptoms]]
/// keyword = "chest pain"
/// condition = "Requires immediate medical attention"
/// severity = "high"
/// advice = "Call emergency services or go to the nearest emergency department now."
/// escalate = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    /// Lowercase phrase matched as a substring of the normalized input.
    pub keyword: String,

    /// Human-readable probable condition; becomes the advisory label.
    pub condition: String,

    /// Severity bucket. `"unknown"` is reserved for the engine's fallback
    /// advisory and is rejected at store construction.
    pub severity: Severity,

    /// Free-text guidance shown to the user.
    pub advice: String,

    /// Whether this entry on its own recommends a clinician visit. The
    /// advisory formatter may still escalate on severity grounds.
    pub escalate: bool,
}

/// A named rectangular area of the front-facing body silhouette.
///
/// Bounds are in percentage units (0-100) of the normalized silhouette.
/// Regions may geometrically overlap; the locator resolves overlaps by
/// returning the first containing region in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRegion {
    /// Stable identifier, unique within the table (e.g. `"left-knee"`).
    pub id: String,

    /// Display label (e.g. `"Left Knee"`).
    pub name: String,

    /// Percentage-space rectangle; containment is edge-inclusive.
    pub bounds: Rect,

    /// Symptoms commonly reported for this region.
    #[serde(default)]
    pub symptoms: Vec<String>,

    /// Conditions commonly associated with this region.
    #[serde(default)]
    pub possible_conditions: Vec<String>,

    /// Over-the-counter medicines commonly suggested for this region.
    #[serde(default)]
    pub recommended_medicines: Vec<String>,

    /// Precautions to surface alongside any suggestion.
    #[serde(default)]
    pub precautions: Vec<String>,
}

/// A drug combination with a known adverse interaction.
///
/// The rule fires when every listed drug is present in the caller's
/// (case-insensitively normalized) drug set; extra drugs in the input are
/// irrelevant to this rule. Rules are evaluated independently; several may
/// fire for one drug list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugInteractionRule {
    /// The interacting drugs, at least two distinct names.
    pub drugs: Vec<String>,

    /// Interaction severity: `"mild"`, `"moderate"`, or `"severe"`.
    pub severity: InteractionSeverity,

    /// What the interaction does.
    pub description: String,

    /// What the user should do about it.
    pub recommendation: String,
}

impl DrugInteractionRule {
    /// The rule's drug names lowercased and trimmed, as a set.
    ///
    /// A `BTreeSet` keeps the comparison order-independent while staying
    /// deterministic in debug output.
    pub fn normalized_drugs(&self) -> BTreeSet<String> {
        self.drugs
            .iter()
            .map(|d| d.trim().to_lowercase())
            .collect()
    }
}

/// The top-level structure deserialized from a TOML knowledge document.
///
/// All three tables default to empty so that test fixtures can declare only
/// the table under test. Each table is evaluated in the order it appears in
/// the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Ordered symptom keyword table. First match wins.
    #[serde(default)]
    pub symptoms: Vec<SymptomEntry>,

    /// Ordered body-region table. First containing region wins.
    #[serde(default)]
    pub regions: Vec<BodyRegion>,

    /// Interaction rule table. Every rule is evaluated; matches are
    /// reported in declaration order.
    #[serde(default)]
    pub interactions: Vec<DrugInteractionRule>,
}

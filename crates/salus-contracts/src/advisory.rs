//! The uniform advisory record returned by every matcher.
//!
//! The three matchers in salus-engine produce different raw hits (a symptom
//! entry, a body region, a list of fired interaction rules). The advisory
//! formatter shapes all of them into this one tagged type so that callers
//! never need matcher-specific branching: they switch on `source` (or just
//! render `label`/`detail`/`escalate`) and, when they need the richer data,
//! on `payload`.

use serde::{Deserialize, Serialize};

use crate::severity::{InteractionSeverity, Severity};

/// Which matcher produced an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisorySource {
    Symptom,
    Region,
    Interaction,
}

/// One fired drug-interaction rule, as reported to the caller.
///
/// Plain owned data: the engine copies the relevant rule fields out of the
/// knowledge store so that callers can hold matches without borrowing the
/// store. `drugs` preserves the rule's declared spelling, not the caller's
/// input spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionMatch {
    pub drugs: Vec<String>,
    pub severity: InteractionSeverity,
    pub description: String,
    pub recommendation: String,
}

/// Source-specific advisory payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AdvisoryPayload {
    /// `matched_keyword` is `None` for the fallback advisory produced when
    /// no symptom keyword matched the input text.
    Symptom { matched_keyword: Option<String> },

    /// The matched region's full metadata lists.
    Region {
        region_id: String,
        symptoms: Vec<String>,
        possible_conditions: Vec<String>,
        recommended_medicines: Vec<String>,
        precautions: Vec<String>,
    },

    /// Every rule that fired for the caller's drug list, in knowledge-table
    /// declaration order.
    Interaction { matches: Vec<InteractionMatch> },
}

/// The uniform output record of the SALUS engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    /// Which matcher produced this advisory.
    pub source: AdvisorySource,

    /// Short human-readable headline (a probable condition, a region name,
    /// or an interaction summary).
    pub label: String,

    /// Severity on the shared six-bucket scale. Interaction severities are
    /// bridged onto this scale by the advisory formatter.
    pub severity: Severity,

    /// Free-text guidance for the user.
    pub detail: String,

    /// Whether a clinician visit is recommended. An unmatched symptom
    /// always escalates; absence of a match is never "no condition".
    pub escalate: bool,

    /// Source-specific data for callers that need more than the headline.
    pub payload: AdvisoryPayload,
}

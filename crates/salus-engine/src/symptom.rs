//! Free-text symptom matcher.
//!
//! Evaluation algorithm:
//!
//! 1. Normalize the input: trim, lowercase. Matching is substring
//!    containment only; no tokenization, no stemming.
//! 2. Scan the symptom table in declaration order; the first entry whose
//!    keyword occurs as a substring of the normalized text wins.
//! 3. No match → the fallback advisory (severity Unknown, escalate true).
//!    The matcher is total: it never fails, and the absence of a match is
//!    never "no condition", only "unmatched".

use tracing::debug;

use salus_contracts::advisory::Advisory;
use salus_knowledge::KnowledgeStore;

use crate::advisory::{fallback_advisory, symptom_advisory};

/// Matches free-text symptom descriptions against the symptom table.
///
/// Holds a borrowed reference to the store; the store owns all table rows.
/// Pure and stateless: repeated calls with the same text return identical
/// advisories.
#[derive(Debug, Clone, Copy)]
pub struct SymptomMatcher<'a> {
    store: &'a KnowledgeStore,
}

impl<'a> SymptomMatcher<'a> {
    pub fn new(store: &'a KnowledgeStore) -> Self {
        Self { store }
    }

    /// Map a symptom description to an advisory. Never fails.
    ///
    /// A more specific keyword must be declared before any more general
    /// keyword that would also match; the table order is part of the
    /// contract (see salus-knowledge).
    pub fn match_text(&self, text: &str) -> Advisory {
        let normalized = text.trim().to_lowercase();

        for entry in self.store.symptoms() {
            if normalized.contains(&entry.keyword) {
                debug!(keyword = %entry.keyword, condition = %entry.condition, "symptom keyword matched");
                return symptom_advisory(entry);
            }
        }

        debug!("no symptom keyword matched; returning fallback advisory");
        fallback_advisory()
    }
}

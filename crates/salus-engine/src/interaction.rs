//! Drug-interaction detector.
//!
//! Unlike the other two matchers, this is NOT first-match-wins: every rule
//! is evaluated independently, because one drug list can trigger several
//! unrelated interactions and all of them must be surfaced.
//!
//! Evaluation algorithm:
//!
//! 1. Normalize the input names: trim, lowercase, drop empties,
//!    deduplicate into a set.
//! 2. Fewer than two distinct names → empty result (no rule can fire;
//!    valid outcome, not an error).
//! 3. A rule fires iff its drug set is a subset of the input set; extra
//!    drugs the user takes never suppress a rule.
//! 4. Matches are returned in table declaration order, never severity
//!    sorted; presentation layers may re-sort.

use std::collections::HashSet;

use tracing::debug;

use salus_contracts::advisory::{Advisory, InteractionMatch};
use salus_knowledge::{DrugInteractionRule, KnowledgeStore};

use crate::advisory::interaction_advisory;

/// Reports all known interaction rules applicable to a drug list.
///
/// Holds a borrowed reference to the store; pure and stateless.
#[derive(Debug, Clone, Copy)]
pub struct InteractionDetector<'a> {
    store: &'a KnowledgeStore,
}

impl<'a> InteractionDetector<'a> {
    pub fn new(store: &'a KnowledgeStore) -> Self {
        Self { store }
    }

    /// Return every fired rule for `drug_names`, in table order.
    ///
    /// Adding a drug to the input can only add matches, never remove one.
    pub fn check<S: AsRef<str>>(&self, drug_names: &[S]) -> Vec<InteractionMatch> {
        let input: HashSet<String> = drug_names
            .iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();

        if input.len() < 2 {
            return Vec::new();
        }

        let matches: Vec<InteractionMatch> = self
            .store
            .interactions()
            .iter()
            .filter(|rule| rule.normalized_drugs().iter().all(|d| input.contains(d)))
            .map(to_match)
            .collect();

        debug!(
            input_drugs = input.len(),
            fired = matches.len(),
            "interaction rules evaluated"
        );
        matches
    }

    /// Check and wrap the fired rules into a uniform advisory.
    ///
    /// `None` when no rule fires.
    pub fn advise<S: AsRef<str>>(&self, drug_names: &[S]) -> Option<Advisory> {
        interaction_advisory(self.check(drug_names))
    }
}

fn to_match(rule: &DrugInteractionRule) -> InteractionMatch {
    InteractionMatch {
        drugs: rule.drugs.clone(),
        severity: rule.severity,
        description: rule.description.clone(),
        recommendation: rule.recommendation.clone(),
    }
}

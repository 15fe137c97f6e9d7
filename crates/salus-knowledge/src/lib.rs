//! # salus-knowledge
//!
//! TOML-driven knowledge tables for the SALUS health-advisory engine.
//!
//! ## Overview
//!
//! This crate provides [`KnowledgeStore`], the validated, immutable owner
//! of the three lookup tables the engine queries:
//!
//! - the symptom keyword table (ordered; first match wins),
//! - the body-region table (ordered; first containing region wins),
//! - the drug-interaction rule table (all rules evaluated independently).
//!
//! Tables are declared in one TOML document and loaded once at startup.
//! Malformed data (duplicate region ids, duplicate or empty keywords,
//! degenerate interaction rules) is rejected at construction with
//! `ConfigError`, never at query time.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use salus_knowledge::KnowledgeStore;
//!
//! let store = KnowledgeStore::builtin()?;
//! // Hand &store to the matchers in salus-engine.
//! ```

pub mod store;
pub mod tables;

pub use store::{KnowledgeStore, DEFAULT_KNOWLEDGE};
pub use tables::{BodyRegion, DrugInteractionRule, KnowledgeConfig, SymptomEntry};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use salus_contracts::error::SalusError;
    use salus_contracts::severity::{InteractionSeverity, Severity};

    use crate::KnowledgeStore;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Assert that a TOML document is rejected with a ConfigError whose
    /// reason contains `needle`.
    fn assert_config_error(toml: &str, needle: &str) {
        match KnowledgeStore::from_toml_str(toml) {
            Err(SalusError::ConfigError { reason }) => {
                assert!(
                    reason.contains(needle),
                    "expected '{needle}' in reason, got: {reason}"
                );
            }
            Ok(_) => panic!("expected ConfigError containing '{needle}', got Ok"),
            Err(other) => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── Loading ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_document_is_a_valid_store() {
        let store = KnowledgeStore::from_toml_str("").unwrap();
        assert!(store.symptoms().is_empty());
        assert!(store.regions().is_empty());
        assert!(store.interactions().is_empty());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert_config_error("this is not valid toml ][[[", "failed to parse knowledge TOML");
    }

    #[test]
    fn tables_preserve_declaration_order() {
        let toml = r#"
            [[symptoms]]
            keyword = "severe headache"
            condition = "Possible migraine"
            severity = "moderate-high"
            advice = "Rest in a dark room."
            escalate = true

            [[symptoms]]
            keyword = "headache"
            condition = "Possible tension headache"
            severity = "low-moderate"
            advice = "Hydrate and rest."
            escalate = false
        "#;

        let store = KnowledgeStore::from_toml_str(toml).unwrap();
        let keywords: Vec<&str> =
            store.symptoms().iter().map(|s| s.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["severe headache", "headache"]);
    }

    // ── Symptom validation ────────────────────────────────────────────────────

    #[test]
    fn empty_keyword_rejected() {
        let toml = r#"
            [[symptoms]]
            keyword = "  "
            condition = "X"
            severity = "low"
            advice = "Y"
            escalate = false
        "#;
        assert_config_error(toml, "empty keyword");
    }

    #[test]
    fn uppercase_keyword_rejected() {
        let toml = r#"
            [[symptoms]]
            keyword = "Chest Pain"
            condition = "X"
            severity = "high"
            advice = "Y"
            escalate = true
        "#;
        assert_config_error(toml, "must be lowercase");
    }

    #[test]
    fn duplicate_keyword_rejected() {
        let toml = r#"
            [[symptoms]]
            keyword = "fever"
            condition = "X"
            severity = "moderate"
            advice = "Y"
            escalate = true

            [[symptoms]]
            keyword = "fever"
            condition = "Z"
            severity = "low"
            advice = "W"
            escalate = false
        "#;
        assert_config_error(toml, "duplicate symptom keyword 'fever'");
    }

    #[test]
    fn unknown_severity_reserved_for_fallback() {
        let toml = r#"
            [[symptoms]]
            keyword = "fever"
            condition = "X"
            severity = "unknown"
            advice = "Y"
            escalate = true
        "#;
        assert_config_error(toml, "reserved for the fallback advisory");
    }

    // ── Region validation ─────────────────────────────────────────────────────

    #[test]
    fn duplicate_region_id_rejected() {
        let toml = r#"
            [[regions]]
            id = "head"
            name = "Head"
            bounds = { x = 40.0, y = 2.0, width = 20.0, height = 12.0 }

            [[regions]]
            id = "head"
            name = "Head Again"
            bounds = { x = 0.0, y = 0.0, width = 10.0, height = 10.0 }
        "#;
        assert_config_error(toml, "duplicate body region id 'head'");
    }

    #[test]
    fn non_positive_region_bounds_rejected() {
        let toml = r#"
            [[regions]]
            id = "broken"
            name = "Broken"
            bounds = { x = 10.0, y = 10.0, width = 0.0, height = 5.0 }
        "#;
        assert_config_error(toml, "non-positive bounds");
    }

    #[test]
    fn out_of_range_region_bounds_rejected() {
        let toml = r#"
            [[regions]]
            id = "offscreen"
            name = "Offscreen"
            bounds = { x = 95.0, y = 10.0, width = 10.0, height = 5.0 }
        "#;
        assert_config_error(toml, "outside the 0-100 percentage space");
    }

    // ── Interaction validation ────────────────────────────────────────────────

    #[test]
    fn single_drug_rule_rejected() {
        let toml = r#"
            [[interactions]]
            drugs = ["Warfarin"]
            severity = "severe"
            description = "X"
            recommendation = "Y"
        "#;
        assert_config_error(toml, "at least two distinct drugs");
    }

    #[test]
    fn case_duplicate_drugs_count_as_one() {
        // "Aspirin" and "aspirin" normalize to the same name, leaving a
        // one-drug rule.
        let toml = r#"
            [[interactions]]
            drugs = ["Aspirin", "aspirin"]
            severity = "mild"
            description = "X"
            recommendation = "Y"
        "#;
        assert_config_error(toml, "at least two distinct drugs");
    }

    #[test]
    fn empty_drug_name_rejected() {
        let toml = r#"
            [[interactions]]
            drugs = ["Warfarin", ""]
            severity = "severe"
            description = "X"
            recommendation = "Y"
        "#;
        assert_config_error(toml, "empty drug name");
    }

    // ── Built-in knowledge base ───────────────────────────────────────────────

    /// The embedded default document must always parse and validate; this
    /// test is what lets `builtin()` be trusted at startup.
    #[test]
    fn builtin_knowledge_base_is_valid() {
        let store = KnowledgeStore::builtin().unwrap();
        assert!(!store.symptoms().is_empty());
        assert!(!store.regions().is_empty());
        assert!(!store.interactions().is_empty());
    }

    #[test]
    fn builtin_orders_specific_keywords_first() {
        let store = KnowledgeStore::builtin().unwrap();
        let keywords: Vec<&str> =
            store.symptoms().iter().map(|s| s.keyword.as_str()).collect();

        let pos = |k: &str| {
            keywords
                .iter()
                .position(|&x| x == k)
                .unwrap_or_else(|| panic!("keyword '{k}' missing from builtin table"))
        };

        // More specific phrases must precede the general ones they shadow.
        assert!(pos("severe headache") < pos("headache"));
        assert!(pos("high fever") < pos("fever"));
    }

    #[test]
    fn builtin_contains_warfarin_aspirin_rule() {
        let store = KnowledgeStore::builtin().unwrap();
        let rule = store
            .interactions()
            .iter()
            .find(|r| {
                let drugs = r.normalized_drugs();
                drugs.contains("warfarin") && drugs.contains("aspirin") && drugs.len() == 2
            })
            .expect("builtin table should carry the warfarin + aspirin rule");
        assert_eq!(rule.severity, InteractionSeverity::Severe);
    }

    #[test]
    fn builtin_chest_pain_entry_matches_contract() {
        let store = KnowledgeStore::builtin().unwrap();
        let entry = store
            .symptoms()
            .iter()
            .find(|s| s.keyword == "chest pain")
            .expect("builtin table should carry 'chest pain'");
        assert_eq!(entry.condition, "Requires immediate medical attention");
        assert_eq!(entry.severity, Severity::High);
        assert!(entry.escalate);
    }
}

//! The validated, immutable knowledge store.
//!
//! `KnowledgeStore` loads a `KnowledgeConfig` from a TOML string or file,
//! validates it once, and then exposes the three tables as read-only
//! slices. Every malformed-data condition is a construction-time
//! `ConfigError`; a store that constructs successfully never fails at
//! query time.
//!
//! Validation rules:
//!
//! 1. Symptom keywords must be non-empty, lowercase, and unique; entry
//!    severity must not be `"unknown"` (reserved for the fallback advisory).
//! 2. Region ids must be non-empty and unique; bounds must have positive
//!    width/height and lie within the 0-100 percentage space.
//! 3. Interaction rules must name at least two distinct drugs after
//!    case-insensitive normalization, none of them empty.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use salus_contracts::error::{SalusError, SalusResult};
use salus_contracts::severity::Severity;

use crate::tables::{BodyRegion, DrugInteractionRule, KnowledgeConfig, SymptomEntry};

/// The curated knowledge base shipped with the engine.
///
/// Embedded at compile time and parsed by `KnowledgeStore::builtin()`;
/// a test pins its validity.
pub const DEFAULT_KNOWLEDGE: &str = include_str!("../knowledge/default.toml");

/// Immutable owner of the three knowledge tables.
///
/// Construct via `from_toml_str`, `from_file`, or `builtin`, then hand
/// borrowed references to the matchers in salus-engine. The store holds no
/// interior mutability, so it is freely shareable across threads.
///
/// Multiple independently configured stores (e.g. per-locale knowledge
/// bases) are just multiple values of this type; nothing is global.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    config: KnowledgeConfig,
}

impl KnowledgeStore {
    /// Parse `s` as TOML, validate it, and build a `KnowledgeStore`.
    ///
    /// Returns `SalusError::ConfigError` if the TOML is malformed, does not
    /// match the `KnowledgeConfig` schema, or violates a table invariant.
    pub fn from_toml_str(s: &str) -> SalusResult<Self> {
        let config: KnowledgeConfig =
            toml::from_str(s).map_err(|e| SalusError::ConfigError {
                reason: format!("failed to parse knowledge TOML: {}", e),
            })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML knowledge document.
    pub fn from_file(path: &Path) -> SalusResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| SalusError::ConfigError {
                reason: format!(
                    "failed to read knowledge file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        Self::from_toml_str(&contents)
    }

    /// Build a store from the embedded default knowledge base.
    pub fn builtin() -> SalusResult<Self> {
        Self::from_toml_str(DEFAULT_KNOWLEDGE)
    }

    /// Validate an already-deserialized config and build a store from it.
    ///
    /// Useful for fixture tables in tests; the TOML constructors delegate
    /// here.
    pub fn from_config(config: KnowledgeConfig) -> SalusResult<Self> {
        validate(&config)?;
        debug!(
            symptoms = config.symptoms.len(),
            regions = config.regions.len(),
            interactions = config.interactions.len(),
            "knowledge store constructed"
        );
        Ok(Self { config })
    }

    /// The ordered symptom keyword table.
    pub fn symptoms(&self) -> &[SymptomEntry] {
        &self.config.symptoms
    }

    /// The ordered body-region table.
    pub fn regions(&self) -> &[BodyRegion] {
        &self.config.regions
    }

    /// The interaction rule table, in declaration order.
    pub fn interactions(&self) -> &[DrugInteractionRule] {
        &self.config.interactions
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate(config: &KnowledgeConfig) -> SalusResult<()> {
    validate_symptoms(&config.symptoms)?;
    validate_regions(&config.regions)?;
    validate_interactions(&config.interactions)
}

fn validate_symptoms(symptoms: &[SymptomEntry]) -> SalusResult<()> {
    let mut seen = HashSet::new();
    for entry in symptoms {
        if entry.keyword.trim().is_empty() {
            return Err(SalusError::ConfigError {
                reason: "symptom entry with empty keyword".to_string(),
            });
        }
        if entry.keyword != entry.keyword.to_lowercase() {
            return Err(SalusError::ConfigError {
                reason: format!(
                    "symptom keyword '{}' must be lowercase",
                    entry.keyword
                ),
            });
        }
        if !seen.insert(entry.keyword.clone()) {
            return Err(SalusError::ConfigError {
                reason: format!("duplicate symptom keyword '{}'", entry.keyword),
            });
        }
        if entry.severity == Severity::Unknown {
            return Err(SalusError::ConfigError {
                reason: format!(
                    "symptom keyword '{}' uses severity 'unknown', which is reserved for the fallback advisory",
                    entry.keyword
                ),
            });
        }
    }
    Ok(())
}

fn validate_regions(regions: &[BodyRegion]) -> SalusResult<()> {
    let mut seen = HashSet::new();
    for region in regions {
        if region.id.trim().is_empty() {
            return Err(SalusError::ConfigError {
                reason: "body region with empty id".to_string(),
            });
        }
        if !seen.insert(region.id.clone()) {
            return Err(SalusError::ConfigError {
                reason: format!("duplicate body region id '{}'", region.id),
            });
        }

        let b = &region.bounds;
        if !(b.width > 0.0 && b.height > 0.0) {
            return Err(SalusError::ConfigError {
                reason: format!(
                    "body region '{}' has non-positive bounds {}x{}",
                    region.id, b.width, b.height
                ),
            });
        }
        if b.x < 0.0 || b.y < 0.0 || b.x + b.width > 100.0 || b.y + b.height > 100.0 {
            return Err(SalusError::ConfigError {
                reason: format!(
                    "body region '{}' bounds fall outside the 0-100 percentage space",
                    region.id
                ),
            });
        }
    }
    Ok(())
}

fn validate_interactions(rules: &[DrugInteractionRule]) -> SalusResult<()> {
    for (index, rule) in rules.iter().enumerate() {
        if rule.drugs.iter().any(|d| d.trim().is_empty()) {
            return Err(SalusError::ConfigError {
                reason: format!("interaction rule #{} contains an empty drug name", index),
            });
        }
        if rule.normalized_drugs().len() < 2 {
            return Err(SalusError::ConfigError {
                reason: format!(
                    "interaction rule #{} must name at least two distinct drugs",
                    index
                ),
            });
        }
    }
    Ok(())
}

//! # salus-engine
//!
//! The decision core of the SALUS health-advisory system: three matchers
//! over an immutable [`KnowledgeStore`](salus_knowledge::KnowledgeStore),
//! plus the formatter that shapes every hit into one uniform
//! [`Advisory`](salus_contracts::advisory::Advisory) record.
//!
//! ## The three matchers
//!
//! - [`SymptomMatcher`] — free text → advisory (total; unmatched input
//!   yields the escalating fallback advisory).
//! - [`RegionLocator`] — pixel tap + surface dimensions → containing body
//!   region, or `None` for a tap outside every region.
//! - [`InteractionDetector`] — drug-name list → every applicable
//!   interaction rule, in table order.
//!
//! All three share one evaluation pattern: deterministic lookup against an
//! ordered knowledge table. They are pure functions of (input, store) with
//! no session state and no I/O, so a single store may serve arbitrarily
//! many concurrent callers without locking.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use salus_engine::{InteractionDetector, RegionLocator, SymptomMatcher};
//! use salus_knowledge::KnowledgeStore;
//!
//! let store = KnowledgeStore::builtin()?;
//! let advisory = SymptomMatcher::new(&store).match_text("sore throat since monday");
//! let region = RegionLocator::new(&store).locate(320.0, 96.0, 640.0, 480.0)?;
//! let matches = InteractionDetector::new(&store).check(&["warfarin", "aspirin"]);
//! ```

pub mod advisory;
pub mod interaction;
pub mod region;
pub mod symptom;

pub use interaction::InteractionDetector;
pub use region::RegionLocator;
pub use symptom::SymptomMatcher;

// ── End-to-end tests against the builtin knowledge base ──────────────────────

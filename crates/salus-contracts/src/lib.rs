//! # salus-contracts
//!
//! Shared types, severity scales, and error contracts for the SALUS
//! health-advisory engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions, geometry, and error types.

pub mod advisory;
pub mod error;
pub mod geometry;
pub mod severity;

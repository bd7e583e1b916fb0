//! actinyx-evidence — Tiered treatment evidence and external trials per finding.
//!
//! Wires the knowledge-base matchers, tumor personalization and the evidence
//! reducer into a per-patient engine.

pub mod tiering;
pub mod trials;
pub mod reducer;
pub mod engine;

pub use engine::{EvidenceEngine, PatientEvidence};
pub use reducer::{corroborate_resistance, reduce, suppress_redundancy, EvidenceReducer};
pub use tiering::Tier;
pub use trials::{external_trials, is_nct_url};

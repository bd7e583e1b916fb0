//! actinyx-kg — Knowledge base matching for patient molecular findings.
//!
//! Holds the curated actionable events, expands tumor DOIDs, runs the
//! per-category matchers and splits the matches into on-label and off-label.

pub mod doid;
pub mod knowledgebase;
pub mod matchers;
pub mod personalization;
pub mod actionability;

pub use actionability::ActionabilityMatcher;
pub use doid::{DoidGraph, DoidProvider};
pub use knowledgebase::{KnowledgeBase, KnowledgeBaseSummary};
pub use personalization::{classify, is_on_label, ActionabilityMatch};

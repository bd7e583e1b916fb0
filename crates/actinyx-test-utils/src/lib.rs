//! Shared test fixtures for the Actinyx workspace.
//!
//! Builders default to a level A, certain-responsive CKB evidence event for
//! DOID 162 (cancer) with a placeholder treatment; tests override only what
//! they care about.

use actinyx_common::ActionableEvent;

pub mod fixtures;
pub mod criteria;

/// Intervention display names of matched events, in order.
pub fn treatment_names<'a>(events: &[&'a ActionableEvent]) -> Vec<&'a str> {
    events.iter().map(|event| event.intervention.display_name()).collect()
}

//! On-label / off-label classification of matched events.
//!
//! An event is on-label when the patient's expanded tumor DOIDs contain the
//! event's applicable cancer type and none of its blacklisted types.

use std::collections::BTreeSet;

use actinyx_common::{ActionableEvent, OntologyCode};

/// Matched events for one finding, split by tumor-type applicability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionabilityMatch<'kb> {
    pub on_label: Vec<&'kb ActionableEvent>,
    pub off_label: Vec<&'kb ActionableEvent>,
}

impl<'kb> ActionabilityMatch<'kb> {
    pub fn len(&self) -> usize {
        self.on_label.len() + self.off_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.on_label.is_empty() && self.off_label.is_empty()
    }
}

pub fn is_on_label(event: &ActionableEvent, expanded_tumor_doids: &BTreeSet<OntologyCode>) -> bool {
    expanded_tumor_doids.contains(&event.applicable_cancer_type)
        && event
            .blacklist_cancer_types
            .iter()
            .all(|blacklisted| !expanded_tumor_doids.contains(blacklisted))
}

/// Total partition: every input event lands in exactly one list, order preserved.
pub fn classify<'kb>(
    events: Vec<&'kb ActionableEvent>,
    expanded_tumor_doids: &BTreeSet<OntologyCode>,
) -> ActionabilityMatch<'kb> {
    let (on_label, off_label): (Vec<_>, Vec<_>) = events
        .into_iter()
        .partition(|event| is_on_label(event, expanded_tumor_doids));
    ActionabilityMatch { on_label, off_label }
}

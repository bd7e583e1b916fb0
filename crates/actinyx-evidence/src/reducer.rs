//! Reduces personalized matches for one finding into tiered evidence.
//!
//! Order matters: tiering and trial extraction run first, then the merged
//! result has lower tiers suppressed by higher ones, and finally resistance
//! is kept only for treatments that are a live option in a clinical tier.

use std::collections::BTreeSet;

use actinyx_common::{ActionableEvent, ActionableEvidence, EngineConfig, Knowledgebase, Result};
use actinyx_kg::ActionabilityMatch;
use tracing::debug;

use crate::tiering::{off_label_responsive_tier, on_label_responsive_tier, resistant_evidence, responsive_evidence};
use crate::trials::external_trials;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvidenceReducer {
    evidence_source: Knowledgebase,
    external_trial_source: Knowledgebase,
}

impl EvidenceReducer {
    pub fn new(evidence_source: Knowledgebase, external_trial_source: Knowledgebase) -> Self {
        Self { evidence_source, external_trial_source }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.evidence_source, config.external_trial_source)
    }

    pub fn reduce(&self, matched: &ActionabilityMatch<'_>) -> Result<ActionableEvidence> {
        reduce(matched, self.evidence_source, self.external_trial_source)
    }
}

pub fn reduce(
    matched: &ActionabilityMatch<'_>,
    evidence_source: Knowledgebase,
    external_trial_source: Knowledgebase,
) -> Result<ActionableEvidence> {
    let relevant = |event: &&ActionableEvent| {
        event.source == evidence_source || event.source == external_trial_source
    };
    let on_label: Vec<&ActionableEvent> = matched.on_label.iter().copied().filter(relevant).collect();
    let off_label: Vec<&ActionableEvent> = matched.off_label.iter().copied().filter(relevant).collect();

    let on_label_responsive = responsive_evidence(&on_label, evidence_source, on_label_responsive_tier);
    let off_label_responsive = responsive_evidence(&off_label, evidence_source, off_label_responsive_tier);
    let resistant = resistant_evidence(&on_label, evidence_source)
        .combine(resistant_evidence(&off_label, evidence_source));
    let trials = ActionableEvidence {
        external_eligible_trials: external_trials(&on_label, external_trial_source)?,
        ..ActionableEvidence::empty()
    };

    let merged = on_label_responsive + off_label_responsive + resistant + trials;
    let evidence = corroborate_resistance(suppress_redundancy(merged));
    debug!(
        on_label = on_label.len(),
        off_label = off_label.len(),
        treatments = evidence.treatments().len(),
        trials = evidence.external_eligible_trials.len(),
        "Evidence reduced"
    );
    Ok(evidence)
}

/// Hide treatments already present in a higher tier.
///
/// Idempotent: applying it to its own output changes nothing.
pub fn suppress_redundancy(mut evidence: ActionableEvidence) -> ActionableEvidence {
    let before = tiered_count(&evidence);

    let approved = evidence.approved_treatments.clone();
    evidence.on_label_experimental_treatments.retain(|t| !approved.contains(t));

    let mut higher = approved;
    higher.extend(evidence.on_label_experimental_treatments.iter().cloned());
    evidence.off_label_experimental_treatments.retain(|t| !higher.contains(t));

    higher.extend(evidence.off_label_experimental_treatments.iter().cloned());
    evidence.pre_clinical_treatments.retain(|t| !higher.contains(t));

    let known = &evidence.known_resistant_treatments;
    evidence.suspect_resistant_treatments.retain(|t| !known.contains(t));

    let suppressed = before - tiered_count(&evidence);
    if suppressed > 0 {
        debug!(suppressed, "Redundant lower-tier treatments suppressed");
    }
    evidence
}

/// Keep resistance only for treatments with clinical responsive evidence.
pub fn corroborate_resistance(mut evidence: ActionableEvidence) -> ActionableEvidence {
    let clinical: BTreeSet<String> = evidence
        .responsive_clinical_treatments()
        .into_iter()
        .map(str::to_string)
        .collect();
    let before = tiered_count(&evidence);
    evidence.known_resistant_treatments.retain(|t| clinical.contains(t));
    evidence.suspect_resistant_treatments.retain(|t| clinical.contains(t));
    let dropped = before - tiered_count(&evidence);
    if dropped > 0 {
        debug!(dropped, "Uncorroborated resistant treatments dropped");
    }
    evidence
}

fn tiered_count(evidence: &ActionableEvidence) -> usize {
    evidence.approved_treatments.len()
        + evidence.on_label_experimental_treatments.len()
        + evidence.off_label_experimental_treatments.len()
        + evidence.pre_clinical_treatments.len()
        + evidence.known_resistant_treatments.len()
        + evidence.suspect_resistant_treatments.len()
}

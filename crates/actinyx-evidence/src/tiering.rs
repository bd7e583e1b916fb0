//! Evidence tiers for treatment events.
//!
//! On-label and off-label responsive events are tiered by different rules:
//! off-label level A lands in on-label experimental, not approved, and
//! off-label level B certain evidence is the only route to off-label
//! experimental. Resistant events are tiered the same way in both buckets.

use std::collections::BTreeSet;

use actinyx_common::{ActionableEvent, ActionableEvidence, EvidenceDirection, EvidenceLevel, Knowledgebase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Approved,
    OnLabelExperimental,
    OffLabelExperimental,
    PreClinical,
    KnownResistant,
    SuspectResistant,
}

impl Tier {
    /// The evidence field this tier writes to.
    pub fn treatments_mut(self, evidence: &mut ActionableEvidence) -> &mut BTreeSet<String> {
        match self {
            Tier::Approved => &mut evidence.approved_treatments,
            Tier::OnLabelExperimental => &mut evidence.on_label_experimental_treatments,
            Tier::OffLabelExperimental => &mut evidence.off_label_experimental_treatments,
            Tier::PreClinical => &mut evidence.pre_clinical_treatments,
            Tier::KnownResistant => &mut evidence.known_resistant_treatments,
            Tier::SuspectResistant => &mut evidence.suspect_resistant_treatments,
        }
    }
}

pub fn on_label_responsive_tier(level: EvidenceLevel, direction: EvidenceDirection) -> Tier {
    match (level, direction.is_certain()) {
        (EvidenceLevel::A, true) => Tier::Approved,
        (EvidenceLevel::A, false) | (EvidenceLevel::B, true) => Tier::OnLabelExperimental,
        _ => Tier::PreClinical,
    }
}

pub fn off_label_responsive_tier(level: EvidenceLevel, direction: EvidenceDirection) -> Tier {
    match (level, direction.is_certain()) {
        (EvidenceLevel::A, _) => Tier::OnLabelExperimental,
        (EvidenceLevel::B, true) => Tier::OffLabelExperimental,
        _ => Tier::PreClinical,
    }
}

pub fn resistant_tier(level: EvidenceLevel, direction: EvidenceDirection) -> Tier {
    match (level, direction.is_certain()) {
        (EvidenceLevel::A | EvidenceLevel::B, true) => Tier::KnownResistant,
        _ => Tier::SuspectResistant,
    }
}

/// Responsive events from `evidence_source`, tiered by `rule`.
pub fn responsive_evidence(
    events: &[&ActionableEvent],
    evidence_source: Knowledgebase,
    rule: fn(EvidenceLevel, EvidenceDirection) -> Tier,
) -> ActionableEvidence {
    tiered(events, evidence_source, EvidenceDirection::is_responsive, rule)
}

/// Resistant events from `evidence_source`, regardless of label.
pub fn resistant_evidence(events: &[&ActionableEvent], evidence_source: Knowledgebase) -> ActionableEvidence {
    tiered(events, evidence_source, EvidenceDirection::is_resistant, resistant_tier)
}

fn tiered(
    events: &[&ActionableEvent],
    evidence_source: Knowledgebase,
    wanted: fn(&EvidenceDirection) -> bool,
    rule: fn(EvidenceLevel, EvidenceDirection) -> Tier,
) -> ActionableEvidence {
    let mut evidence = ActionableEvidence::empty();
    for event in events {
        if event.source != evidence_source || !wanted(&event.direction) {
            continue;
        }
        // Trials from the evidence source carry no treatment name to tier.
        let Some(name) = event.treatment_name() else {
            continue;
        };
        rule(event.level, event.direction)
            .treatments_mut(&mut evidence)
            .insert(name.to_string());
    }
    evidence
}

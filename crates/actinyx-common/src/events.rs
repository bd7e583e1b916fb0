/// Actionable events as curated in the knowledge base.
/// Every event links one molecular pattern to one intervention, with an evidence
/// level, a direction and a cancer-type applicability rule.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A DOID ontology code, e.g. "1909" (melanoma).
pub type OntologyCode = String;

// ---------------------------------------------------------------------------
// Knowledge base source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Knowledgebase {
    CkbEvidence,
    CkbTrial,
    Iclusion,
    Vicc,
    Actin,
    Unknown,
}

impl Knowledgebase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Knowledgebase::CkbEvidence => "ckb_evidence",
            Knowledgebase::CkbTrial    => "ckb_trial",
            Knowledgebase::Iclusion    => "iclusion",
            Knowledgebase::Vicc        => "vicc",
            Knowledgebase::Actin       => "actin",
            Knowledgebase::Unknown     => "unknown",
        }
    }

    /// Parse from the config/database string form.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ckb_evidence" => Knowledgebase::CkbEvidence,
            "ckb_trial"    => Knowledgebase::CkbTrial,
            "iclusion"     => Knowledgebase::Iclusion,
            "vicc"         => Knowledgebase::Vicc,
            "actin"        => Knowledgebase::Actin,
            _              => Knowledgebase::Unknown,
        }
    }
}

impl fmt::Display for Knowledgebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Evidence level & direction
// ---------------------------------------------------------------------------

/// Knowledge-base confidence rank. A is strongest, D weakest, and the
/// ordering follows that: `EvidenceLevel::A > EvidenceLevel::B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceLevel {
    A,
    B,
    C,
    D,
}

impl EvidenceLevel {
    fn rank(&self) -> u8 {
        match self {
            EvidenceLevel::A => 4,
            EvidenceLevel::B => 3,
            EvidenceLevel::C => 2,
            EvidenceLevel::D => 1,
        }
    }
}

impl PartialOrd for EvidenceLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvidenceLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// Response or resistance, each either certain or predicted (uncertain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceDirection {
    Responsive,
    PredictedResponsive,
    Resistant,
    PredictedResistant,
}

impl EvidenceDirection {
    pub fn is_responsive(&self) -> bool {
        matches!(self, EvidenceDirection::Responsive | EvidenceDirection::PredictedResponsive)
    }

    pub fn is_resistant(&self) -> bool {
        matches!(self, EvidenceDirection::Resistant | EvidenceDirection::PredictedResistant)
    }

    pub fn is_certain(&self) -> bool {
        matches!(self, EvidenceDirection::Responsive | EvidenceDirection::Resistant)
    }
}

// ---------------------------------------------------------------------------
// Intervention
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalTrial {
    pub study_title: String,
    pub study_acronym: Option<String>,
    pub countries_of_study: BTreeSet<String>,
    pub nct_id: String,
    pub source_urls: Vec<String>,
}

impl ClinicalTrial {
    /// Acronym when the trial has one, full title otherwise.
    pub fn title(&self) -> &str {
        self.study_acronym.as_deref().unwrap_or(&self.study_title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intervention {
    Treatment(Treatment),
    ClinicalTrial(ClinicalTrial),
}

impl Intervention {
    pub fn display_name(&self) -> &str {
        match self {
            Intervention::Treatment(t) => &t.name,
            Intervention::ClinicalTrial(trial) => trial.title(),
        }
    }
}

// ---------------------------------------------------------------------------
// Molecular patterns
// ---------------------------------------------------------------------------

/// Gene-level event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneEvent {
    AnyMutation,
    Activation,
    Inactivation,
    Amplification,
    Deletion,
    Fusion,
}

/// Which coding consequences a codon or exon range applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationType {
    Any,
    Missense,
    NonsenseOrFrameshift,
    Splice,
    Inframe,
    InframeInsertion,
    InframeDeletion,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacteristicType {
    MicrosatelliteUnstable,
    HomologousRecombinationDeficient,
    HighTumorMutationalBurden,
    HighTumorMutationalLoad,
    HpvPositive,
    EbvPositive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableHotspot {
    pub gene: String,
    pub chromosome: String,
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
}

/// A codon or exon range; `start` and `end` are inclusive genomic positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableRange {
    pub gene: String,
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
    pub applicable_mutation_type: MutationType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableGene {
    pub gene: String,
    pub event: GeneEvent,
}

/// A known fusion pair. `None` on an exon bound means unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableFusion {
    pub gene_up: String,
    pub gene_down: String,
    pub min_exon_up: Option<u32>,
    pub max_exon_up: Option<u32>,
    pub min_exon_down: Option<u32>,
    pub max_exon_down: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ActionableEventKind {
    Hotspot(ActionableHotspot),
    Codon(ActionableRange),
    Exon(ActionableRange),
    Gene(ActionableGene),
    Fusion(ActionableFusion),
    Characteristic { characteristic: CharacteristicType },
}

/// Coarse event category, as listed in the knowledge base export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Hotspot,
    Codon,
    Exon,
    Gene,
    Fusion,
    CopyNumberGene,
    Characteristic,
}

// ---------------------------------------------------------------------------
// Actionable event
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableEvent {
    pub kind: ActionableEventKind,
    pub source: Knowledgebase,
    pub level: EvidenceLevel,
    pub direction: EvidenceDirection,
    pub intervention: Intervention,
    pub applicable_cancer_type: OntologyCode,
    #[serde(default)]
    pub blacklist_cancer_types: BTreeSet<OntologyCode>,
}

impl ActionableEvent {
    pub fn category(&self) -> EventCategory {
        match &self.kind {
            ActionableEventKind::Hotspot(_) => EventCategory::Hotspot,
            ActionableEventKind::Codon(_) => EventCategory::Codon,
            ActionableEventKind::Exon(_) => EventCategory::Exon,
            ActionableEventKind::Gene(g) => match g.event {
                GeneEvent::Amplification | GeneEvent::Deletion => EventCategory::CopyNumberGene,
                _ => EventCategory::Gene,
            },
            ActionableEventKind::Fusion(_) => EventCategory::Fusion,
            ActionableEventKind::Characteristic { .. } => EventCategory::Characteristic,
        }
    }

    /// Gene the event is keyed on. Fusion pairs report their upstream gene.
    pub fn gene(&self) -> Option<&str> {
        match &self.kind {
            ActionableEventKind::Hotspot(h) => Some(&h.gene),
            ActionableEventKind::Codon(r) | ActionableEventKind::Exon(r) => Some(&r.gene),
            ActionableEventKind::Gene(g) => Some(&g.gene),
            ActionableEventKind::Fusion(f) => Some(&f.gene_up),
            ActionableEventKind::Characteristic { .. } => None,
        }
    }

    pub fn gene_event(&self) -> Option<GeneEvent> {
        match &self.kind {
            ActionableEventKind::Gene(g) => Some(g.event),
            _ => None,
        }
    }

    pub fn characteristic(&self) -> Option<CharacteristicType> {
        match &self.kind {
            ActionableEventKind::Characteristic { characteristic } => Some(*characteristic),
            _ => None,
        }
    }

    /// Treatment name, or `None` when the intervention is a clinical trial.
    pub fn treatment_name(&self) -> Option<&str> {
        match &self.intervention {
            Intervention::Treatment(t) => Some(&t.name),
            Intervention::ClinicalTrial(_) => None,
        }
    }

    pub fn clinical_trial(&self) -> Option<&ClinicalTrial> {
        match &self.intervention {
            Intervention::ClinicalTrial(trial) => Some(trial),
            Intervention::Treatment(_) => None,
        }
    }
}

//! Actionable event builders.

use std::collections::BTreeSet;

use actinyx_common::{
    ActionableEvent, ActionableEventKind, ActionableFusion, ActionableGene, ActionableHotspot,
    ActionableRange, CharacteristicType, ClinicalTrial, EvidenceDirection, EvidenceLevel, GeneEvent,
    Intervention, Knowledgebase, MutationType, OntologyCode, Treatment,
};

/// DOID for "cancer", the root of every tumor expansion used in tests.
pub const CANCER_DOID: &str = "162";

pub struct EventBuilder {
    kind: ActionableEventKind,
    source: Knowledgebase,
    level: EvidenceLevel,
    direction: EvidenceDirection,
    intervention: Intervention,
    applicable_cancer_type: OntologyCode,
    blacklist_cancer_types: BTreeSet<OntologyCode>,
}

impl EventBuilder {
    fn new(kind: ActionableEventKind) -> Self {
        Self {
            kind,
            source: Knowledgebase::CkbEvidence,
            level: EvidenceLevel::A,
            direction: EvidenceDirection::Responsive,
            intervention: Intervention::Treatment(Treatment { name: "Treatment".to_string() }),
            applicable_cancer_type: CANCER_DOID.to_string(),
            blacklist_cancer_types: BTreeSet::new(),
        }
    }

    pub fn treatment(mut self, name: &str) -> Self {
        self.intervention = Intervention::Treatment(Treatment { name: name.to_string() });
        self
    }

    /// Turn the event into an external trial from CKB trials.
    pub fn trial(mut self, trial: ClinicalTrial) -> Self {
        self.intervention = Intervention::ClinicalTrial(trial);
        self.source = Knowledgebase::CkbTrial;
        self
    }

    pub fn source(mut self, source: Knowledgebase) -> Self {
        self.source = source;
        self
    }

    pub fn level(mut self, level: EvidenceLevel) -> Self {
        self.level = level;
        self
    }

    pub fn direction(mut self, direction: EvidenceDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn cancer_type(mut self, doid: &str) -> Self {
        self.applicable_cancer_type = doid.to_string();
        self
    }

    pub fn blacklist(mut self, doid: &str) -> Self {
        self.blacklist_cancer_types.insert(doid.to_string());
        self
    }

    pub fn build(self) -> ActionableEvent {
        ActionableEvent {
            kind: self.kind,
            source: self.source,
            level: self.level,
            direction: self.direction,
            intervention: self.intervention,
            applicable_cancer_type: self.applicable_cancer_type,
            blacklist_cancer_types: self.blacklist_cancer_types,
        }
    }
}

pub fn hotspot(gene: &str, chromosome: &str, position: u64, ref_allele: &str, alt_allele: &str) -> EventBuilder {
    EventBuilder::new(ActionableEventKind::Hotspot(ActionableHotspot {
        gene: gene.to_string(),
        chromosome: chromosome.to_string(),
        position,
        ref_allele: ref_allele.to_string(),
        alt_allele: alt_allele.to_string(),
    }))
}

fn range(gene: &str, chromosome: &str, start: u64, end: u64, mutation_type: MutationType) -> ActionableRange {
    ActionableRange {
        gene: gene.to_string(),
        chromosome: chromosome.to_string(),
        start,
        end,
        applicable_mutation_type: mutation_type,
    }
}

pub fn codon(gene: &str, chromosome: &str, start: u64, end: u64, mutation_type: MutationType) -> EventBuilder {
    EventBuilder::new(ActionableEventKind::Codon(range(gene, chromosome, start, end, mutation_type)))
}

pub fn exon(gene: &str, chromosome: &str, start: u64, end: u64, mutation_type: MutationType) -> EventBuilder {
    EventBuilder::new(ActionableEventKind::Exon(range(gene, chromosome, start, end, mutation_type)))
}

pub fn gene(gene: &str, event: GeneEvent) -> EventBuilder {
    EventBuilder::new(ActionableEventKind::Gene(ActionableGene { gene: gene.to_string(), event }))
}

pub fn fusion(
    gene_up: &str,
    gene_down: &str,
    min_exon_up: Option<u32>,
    max_exon_up: Option<u32>,
    min_exon_down: Option<u32>,
    max_exon_down: Option<u32>,
) -> EventBuilder {
    EventBuilder::new(ActionableEventKind::Fusion(ActionableFusion {
        gene_up: gene_up.to_string(),
        gene_down: gene_down.to_string(),
        min_exon_up,
        max_exon_up,
        min_exon_down,
        max_exon_down,
    }))
}

pub fn characteristic(characteristic: CharacteristicType) -> EventBuilder {
    EventBuilder::new(ActionableEventKind::Characteristic { characteristic })
}

/// A trial recruiting in the Netherlands with a clinicaltrials.gov source URL.
pub fn clinical_trial(nct_id: &str) -> ClinicalTrial {
    ClinicalTrial {
        study_title: format!("Study {nct_id}"),
        study_acronym: None,
        countries_of_study: ["Netherlands".to_string()].into_iter().collect(),
        nct_id: nct_id.to_string(),
        source_urls: vec![format!("https://clinicaltrials.gov/study/{nct_id}")],
    }
}

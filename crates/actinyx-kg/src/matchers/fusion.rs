//! Fusion matching: promiscuous single-gene events and known fusion pairs.

use actinyx_common::{
    ActionableEvent, ActionableFusion, ActionableGene, FusionDriverType, FusionMatchCriteria,
    GeneEvent,
};

use crate::knowledgebase::KnowledgeBase;

/// Gene-level events a promiscuous fusion partner can trigger.
pub const PROMISCUOUS_FUSION_EVENTS: [GeneEvent; 3] =
    [GeneEvent::Fusion, GeneEvent::Activation, GeneEvent::AnyMutation];

pub struct FusionMatcher<'kb> {
    promiscuous: Vec<(&'kb ActionableGene, &'kb ActionableEvent)>,
    pairs: Vec<(&'kb ActionableFusion, &'kb ActionableEvent)>,
}

impl<'kb> FusionMatcher<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self {
            promiscuous: knowledge_base.genes_with(&PROMISCUOUS_FUSION_EVENTS).collect(),
            pairs: knowledge_base.fusions().collect(),
        }
    }

    /// Promiscuous matches followed by known-pair matches.
    pub fn find_matches(&self, fusion: &FusionMatchCriteria) -> Vec<&'kb ActionableEvent> {
        let mut matches = self.promiscuous_matches(fusion);
        matches.extend(self.known_pair_matches(fusion));
        matches
    }

    /// The driver type decides which partner is compared against the event gene.
    pub fn promiscuous_matches(&self, fusion: &FusionMatchCriteria) -> Vec<&'kb ActionableEvent> {
        if !fusion.is_reportable {
            return Vec::new();
        }
        self.promiscuous
            .iter()
            .filter(|(gene, _)| match fusion.driver_type {
                FusionDriverType::Promiscuous3 => gene.gene == fusion.gene_end,
                FusionDriverType::Promiscuous5 => gene.gene == fusion.gene_start,
                FusionDriverType::KnownPair | FusionDriverType::Unclassified => {
                    gene.gene == fusion.gene_start || gene.gene == fusion.gene_end
                }
            })
            .map(|(_, event)| *event)
            .collect()
    }

    /// Every pair whose genes and exon bounds fit the fusion; no most-specific selection.
    pub fn known_pair_matches(&self, fusion: &FusionMatchCriteria) -> Vec<&'kb ActionableEvent> {
        if !fusion.is_reportable {
            return Vec::new();
        }
        self.pairs
            .iter()
            .filter(|(pair, _)| is_fusion_pair_match(pair, fusion))
            .map(|(_, event)| *event)
            .collect()
    }
}

pub fn is_fusion_pair_match(pair: &ActionableFusion, fusion: &FusionMatchCriteria) -> bool {
    pair.gene_up == fusion.gene_start
        && pair.gene_down == fusion.gene_end
        && exon_within(fusion.fused_exon_up, pair.min_exon_up, pair.max_exon_up)
        && exon_within(fusion.fused_exon_down, pair.min_exon_down, pair.max_exon_down)
}

/// Inclusive containment; a missing bound does not constrain that side.
fn exon_within(exon: u32, min: Option<u32>, max: Option<u32>) -> bool {
    min.map_or(true, |min| exon >= min) && max.map_or(true, |max| exon <= max)
}

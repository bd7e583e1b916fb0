//! Disruption matching.
//!
//! Homozygous disruptions and breakends both arrive as `DisruptionCriteria`
//! but match different gene-event sets: a homozygous disruption also counts
//! as a deletion or inactivation, a breakend only as "any mutation".

use actinyx_common::{ActionableEvent, ActionableGene, DisruptionCriteria, GeneEvent};

use crate::knowledgebase::KnowledgeBase;

pub const HOMOZYGOUS_DISRUPTION_EVENTS: [GeneEvent; 3] =
    [GeneEvent::Deletion, GeneEvent::Inactivation, GeneEvent::AnyMutation];

pub const BREAKEND_EVENTS: [GeneEvent; 1] = [GeneEvent::AnyMutation];

pub struct HomozygousDisruptionMatcher<'kb> {
    genes: Vec<(&'kb ActionableGene, &'kb ActionableEvent)>,
}

impl<'kb> HomozygousDisruptionMatcher<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self { genes: knowledge_base.genes_with(&HOMOZYGOUS_DISRUPTION_EVENTS).collect() }
    }

    pub fn find_matches(&self, disruption: &DisruptionCriteria) -> Vec<&'kb ActionableEvent> {
        gene_matches(&self.genes, disruption)
    }
}

pub struct BreakendMatcher<'kb> {
    genes: Vec<(&'kb ActionableGene, &'kb ActionableEvent)>,
}

impl<'kb> BreakendMatcher<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self { genes: knowledge_base.genes_with(&BREAKEND_EVENTS).collect() }
    }

    pub fn find_matches(&self, disruption: &DisruptionCriteria) -> Vec<&'kb ActionableEvent> {
        gene_matches(&self.genes, disruption)
    }
}

fn gene_matches<'kb>(
    genes: &[(&'kb ActionableGene, &'kb ActionableEvent)],
    disruption: &DisruptionCriteria,
) -> Vec<&'kb ActionableEvent> {
    if !disruption.is_reportable {
        return Vec::new();
    }
    genes
        .iter()
        .filter(|(gene, _)| gene.gene == disruption.gene)
        .map(|(_, event)| *event)
        .collect()
}

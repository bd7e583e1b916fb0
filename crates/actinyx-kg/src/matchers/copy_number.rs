//! Copy-number matching: gains against amplifications, losses against deletions.

use actinyx_common::{
    ActionableEvent, ActionableGene, CopyNumberCriteria, CopyNumberType, GeneEvent,
};

use crate::knowledgebase::KnowledgeBase;

pub struct CopyNumberMatcher<'kb> {
    amplifications: Vec<(&'kb ActionableGene, &'kb ActionableEvent)>,
    deletions: Vec<(&'kb ActionableGene, &'kb ActionableEvent)>,
}

impl<'kb> CopyNumberMatcher<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self {
            amplifications: knowledge_base.genes_with(&[GeneEvent::Amplification]).collect(),
            deletions: knowledge_base.genes_with(&[GeneEvent::Deletion]).collect(),
        }
    }

    pub fn find_matches(&self, copy_number: &CopyNumberCriteria) -> Vec<&'kb ActionableEvent> {
        let candidates = match copy_number.copy_number_type {
            CopyNumberType::FullGain | CopyNumberType::PartialGain => &self.amplifications,
            CopyNumberType::Loss => &self.deletions,
            CopyNumberType::None => return Vec::new(),
        };
        candidates
            .iter()
            .filter(|(gene, _)| gene.gene == copy_number.gene)
            .map(|(_, event)| *event)
            .collect()
    }
}

//! Small-variant matching: hotspots, codon/exon ranges and gene-level events.

use actinyx_common::{
    ActionableEvent, ActionableGene, ActionableHotspot, ActionableRange, CodingEffect, GeneEvent,
    MutationType, VariantMatchCriteria, VariantType,
};

use crate::knowledgebase::KnowledgeBase;

/// Gene-level events a reportable variant can trigger.
pub const VARIANT_GENE_EVENTS: [GeneEvent; 3] =
    [GeneEvent::Activation, GeneEvent::Inactivation, GeneEvent::AnyMutation];

pub struct VariantMatcher<'kb> {
    hotspots: Vec<(&'kb ActionableHotspot, &'kb ActionableEvent)>,
    codons: Vec<(&'kb ActionableRange, &'kb ActionableEvent)>,
    exons: Vec<(&'kb ActionableRange, &'kb ActionableEvent)>,
    genes: Vec<(&'kb ActionableGene, &'kb ActionableEvent)>,
}

impl<'kb> VariantMatcher<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self {
            hotspots: knowledge_base.hotspots().collect(),
            codons: knowledge_base.codons().collect(),
            exons: knowledge_base.exons().collect(),
            genes: knowledge_base.genes_with(&VARIANT_GENE_EVENTS).collect(),
        }
    }

    /// Hotspot, codon, exon and gene matches, in that order.
    pub fn find_matches(&self, variant: &VariantMatchCriteria) -> Vec<&'kb ActionableEvent> {
        let mut matches = self.hotspot_matches(variant);
        matches.extend(self.codon_matches(variant));
        matches.extend(self.exon_matches(variant));
        matches.extend(self.gene_matches(variant));
        matches
    }

    pub fn hotspot_matches(&self, variant: &VariantMatchCriteria) -> Vec<&'kb ActionableEvent> {
        if !variant.is_reportable {
            return Vec::new();
        }
        self.hotspots
            .iter()
            .filter(|(hotspot, _)| {
                hotspot.gene == variant.gene
                    && hotspot.chromosome == variant.chromosome
                    && hotspot.position == variant.position
                    && hotspot.ref_allele == variant.ref_allele
                    && hotspot.alt_allele == variant.alt_allele
            })
            .map(|(_, event)| *event)
            .collect()
    }

    pub fn codon_matches(&self, variant: &VariantMatchCriteria) -> Vec<&'kb ActionableEvent> {
        range_matches(&self.codons, variant)
    }

    pub fn exon_matches(&self, variant: &VariantMatchCriteria) -> Vec<&'kb ActionableEvent> {
        range_matches(&self.exons, variant)
    }

    pub fn gene_matches(&self, variant: &VariantMatchCriteria) -> Vec<&'kb ActionableEvent> {
        if !variant.is_reportable {
            return Vec::new();
        }
        self.genes
            .iter()
            .filter(|(gene, _)| gene.gene == variant.gene)
            .map(|(_, event)| *event)
            .collect()
    }
}

fn range_matches<'kb>(
    ranges: &[(&'kb ActionableRange, &'kb ActionableEvent)],
    variant: &VariantMatchCriteria,
) -> Vec<&'kb ActionableEvent> {
    if !variant.is_reportable {
        return Vec::new();
    }
    ranges
        .iter()
        .filter(|(range, _)| {
            range.gene == variant.gene
                && range.chromosome == variant.chromosome
                && (range.start..=range.end).contains(&variant.position)
                && is_mutation_type_match(
                    range.applicable_mutation_type,
                    variant.coding_effect,
                    variant.variant_type,
                )
        })
        .map(|(_, event)| *event)
        .collect()
}

/// Whether a variant's coding consequence satisfies a range's mutation-type filter.
/// In-frame indels are annotated with a missense coding effect.
pub fn is_mutation_type_match(
    filter: MutationType,
    coding_effect: CodingEffect,
    variant_type: VariantType,
) -> bool {
    let is_indel = matches!(variant_type, VariantType::Insert | VariantType::Delete);
    match filter {
        MutationType::Any => true,
        MutationType::Missense => coding_effect == CodingEffect::Missense,
        MutationType::NonsenseOrFrameshift => coding_effect == CodingEffect::NonsenseOrFrameshift,
        MutationType::Splice => coding_effect == CodingEffect::Splice,
        MutationType::Inframe => coding_effect == CodingEffect::Missense && is_indel,
        MutationType::InframeInsertion => {
            coding_effect == CodingEffect::Missense && variant_type == VariantType::Insert
        }
        MutationType::InframeDeletion => {
            coding_effect == CodingEffect::Missense && variant_type == VariantType::Delete
        }
        MutationType::Unknown => false,
    }
}

//! Property tests for matching and personalization.

use std::collections::BTreeSet;

use actinyx_common::{
    ActionableEvent, FusionDriverType, GeneEvent, MolecularFinding, MutationType, OntologyCode,
    VirusCriteria, VirusType,
};
use actinyx_kg::matchers::{is_fusion_pair_match, FusionMatcher, VariantMatcher};
use actinyx_kg::{classify, is_on_label, ActionabilityMatcher, DoidGraph, DoidProvider, KnowledgeBase};
use actinyx_test_utils::{criteria, fixtures};
use proptest::prelude::*;

const GENES: [&str; 4] = ["BRAF", "EGFR", "KRAS", "PTEN"];
const DOIDS: [&str; 5] = ["162", "1324", "1909", "4159", "3908"];

fn gene() -> impl Strategy<Value = &'static str> {
    prop::sample::select(GENES.to_vec())
}

fn doid() -> impl Strategy<Value = &'static str> {
    prop::sample::select(DOIDS.to_vec())
}

fn doid_set() -> impl Strategy<Value = BTreeSet<OntologyCode>> {
    prop::collection::btree_set(doid().prop_map(str::to_string), 0..=DOIDS.len())
}

fn event() -> impl Strategy<Value = ActionableEvent> {
    (gene(), doid(), prop::collection::vec(doid(), 0..3)).prop_map(|(gene, cancer_type, blacklist)| {
        blacklist
            .into_iter()
            .fold(fixtures::gene(gene, GeneEvent::AnyMutation).cancer_type(cancer_type), |builder, doid| {
                builder.blacklist(doid)
            })
            .build()
    })
}

/// Every gene with every variant-relevant event plus a hotspot and codon per gene.
fn dense_kb() -> KnowledgeBase {
    let mut events = Vec::new();
    for gene in GENES {
        for kind in [GeneEvent::Activation, GeneEvent::Inactivation, GeneEvent::AnyMutation, GeneEvent::Deletion, GeneEvent::Fusion] {
            events.push(fixtures::gene(gene, kind).build());
        }
        events.push(fixtures::hotspot(gene, "1", 100, "A", "T").build());
        events.push(fixtures::codon(gene, "1", 90, 110, MutationType::Any).build());
        events.push(fixtures::fusion(gene, "ALK", None, None, None, None).build());
    }
    KnowledgeBase::new(events)
}

proptest! {
    #[test]
    fn unreportable_findings_never_match(gene in gene(), position in 80u64..120, exon in 1u32..30) {
        let kb = dense_kb();
        let matcher = ActionabilityMatcher::new(&kb);

        let mut variant = criteria::variant(gene, "1", position, "A", "T");
        variant.is_reportable = false;
        let mut disruption = criteria::disruption(gene);
        disruption.is_reportable = false;
        let mut fusion = criteria::fusion(gene, "ALK", exon, exon, FusionDriverType::KnownPair);
        fusion.is_reportable = false;

        let findings = vec![
            MolecularFinding::Variant(variant),
            MolecularFinding::HomozygousDisruption(disruption.clone()),
            MolecularFinding::Disruption(disruption),
            MolecularFinding::Fusion(fusion),
            MolecularFinding::Virus(VirusCriteria { virus_type: VirusType::Hpv, is_reportable: false }),
        ];
        for finding in &findings {
            prop_assert!(matcher.find_matches(finding).is_empty(), "{} matched", finding.label());
        }
    }

    #[test]
    fn range_matching_is_inclusive(start in 1u64..10_000, width in 0u64..50) {
        let end = start + width;
        let kb = KnowledgeBase::new(vec![fixtures::codon("EGFR", "7", start, end, MutationType::Any).build()]);
        let matcher = VariantMatcher::new(&kb);
        let at = |position| matcher.codon_matches(&criteria::variant("EGFR", "7", position, "G", "A")).len();

        prop_assert_eq!(at(start), 1);
        prop_assert_eq!(at(end), 1);
        prop_assert_eq!(at(start - 1), 0);
        prop_assert_eq!(at(end + 1), 0);
    }

    #[test]
    fn hotspot_matching_is_exact(position in 1u64..1_000_000, offset in 1u64..10) {
        let kb = KnowledgeBase::new(vec![fixtures::hotspot("KRAS", "12", position, "C", "T").build()]);
        let matcher = VariantMatcher::new(&kb);

        prop_assert_eq!(matcher.hotspot_matches(&criteria::variant("KRAS", "12", position, "C", "T")).len(), 1);
        prop_assert!(matcher.hotspot_matches(&criteria::variant("KRAS", "12", position + offset, "C", "T")).is_empty());
        prop_assert!(matcher.hotspot_matches(&criteria::variant("NRAS", "12", position, "C", "T")).is_empty());
        prop_assert!(matcher.hotspot_matches(&criteria::variant("KRAS", "11", position, "C", "T")).is_empty());
        prop_assert!(matcher.hotspot_matches(&criteria::variant("KRAS", "12", position, "G", "T")).is_empty());
        prop_assert!(matcher.hotspot_matches(&criteria::variant("KRAS", "12", position, "C", "A")).is_empty());
    }

    #[test]
    fn known_pair_bounds(
        min_up in prop::option::of(1u32..20),
        max_up in prop::option::of(1u32..20),
        min_down in prop::option::of(1u32..20),
        max_down in prop::option::of(1u32..20),
        exon_up in 1u32..20,
        exon_down in 1u32..20,
    ) {
        let kb = KnowledgeBase::new(vec![
            fixtures::fusion("EML4", "ALK", min_up, max_up, min_down, max_down).build(),
        ]);
        let fusion = criteria::fusion("EML4", "ALK", exon_up, exon_down, FusionDriverType::KnownPair);
        let within = |exon: u32, min: Option<u32>, max: Option<u32>| {
            min.map_or(true, |min| exon >= min) && max.map_or(true, |max| exon <= max)
        };
        let expected = within(exon_up, min_up, max_up) && within(exon_down, min_down, max_down);

        let matcher = FusionMatcher::new(&kb);
        prop_assert_eq!(matcher.known_pair_matches(&fusion).len() == 1, expected);
        if let actinyx_common::ActionableEventKind::Fusion(pair) = &kb.events()[0].kind {
            prop_assert_eq!(is_fusion_pair_match(pair, &fusion), expected);
        }
    }

    #[test]
    fn personalization_partition_is_total(events in prop::collection::vec(event(), 0..20), tumor in doid_set()) {
        let refs: Vec<&ActionableEvent> = events.iter().collect();
        let result = classify(refs, &tumor);

        prop_assert_eq!(result.on_label.len() + result.off_label.len(), events.len());
        for event in &result.on_label {
            prop_assert!(tumor.contains(&event.applicable_cancer_type));
            prop_assert!(event.blacklist_cancer_types.iter().all(|b| !tumor.contains(b)));
        }
        for event in &result.off_label {
            prop_assert!(!is_on_label(event, &tumor));
        }
    }

    #[test]
    fn ancestor_closure_is_closed(
        edges in prop::collection::vec((doid(), doid()), 0..12),
        start in doid_set(),
    ) {
        let graph = DoidGraph::from_edges(edges.iter().copied());
        let closure = graph.ancestor_closure(&start);

        prop_assert!(start.is_subset(&closure));
        for code in &closure {
            if let Some(parents) = graph.parents_of(code) {
                prop_assert!(parents.is_subset(&closure));
            }
        }
        prop_assert_eq!(graph.ancestor_closure(&closure), closure.clone());
    }
}

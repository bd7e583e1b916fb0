//! Read-only container for the curated actionable events.
//!
//! Built once by the caller and shared by reference with every matcher. The
//! typed accessors hand out `(pattern, event)` pairs so matchers never have to
//! re-inspect an event's kind.

use std::collections::BTreeMap;

use actinyx_common::{
    ActionableEvent, ActionableEventKind, ActionableFusion, ActionableGene, ActionableHotspot,
    ActionableRange, CharacteristicType, EventCategory, GeneEvent,
};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    events: Vec<ActionableEvent>,
}

/// Per-category event counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnowledgeBaseSummary {
    pub total: usize,
    pub per_category: BTreeMap<EventCategory, usize>,
}

impl KnowledgeBase {
    pub fn new(events: Vec<ActionableEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[ActionableEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn summary(&self) -> KnowledgeBaseSummary {
        let mut per_category = BTreeMap::new();
        for event in &self.events {
            *per_category.entry(event.category()).or_insert(0) += 1;
        }
        KnowledgeBaseSummary { total: self.events.len(), per_category }
    }

    pub fn hotspots(&self) -> impl Iterator<Item = (&ActionableHotspot, &ActionableEvent)> {
        self.events.iter().filter_map(|e| match &e.kind {
            ActionableEventKind::Hotspot(h) => Some((h, e)),
            _ => None,
        })
    }

    pub fn codons(&self) -> impl Iterator<Item = (&ActionableRange, &ActionableEvent)> {
        self.events.iter().filter_map(|e| match &e.kind {
            ActionableEventKind::Codon(r) => Some((r, e)),
            _ => None,
        })
    }

    pub fn exons(&self) -> impl Iterator<Item = (&ActionableRange, &ActionableEvent)> {
        self.events.iter().filter_map(|e| match &e.kind {
            ActionableEventKind::Exon(r) => Some((r, e)),
            _ => None,
        })
    }

    /// Gene-level events whose kind is one of `kinds`.
    pub fn genes_with<'a>(
        &'a self,
        kinds: &[GeneEvent],
    ) -> impl Iterator<Item = (&'a ActionableGene, &'a ActionableEvent)> + 'a {
        let kinds = kinds.to_vec();
        self.events.iter().filter_map(move |e| match &e.kind {
            ActionableEventKind::Gene(g) if kinds.contains(&g.event) => Some((g, e)),
            _ => None,
        })
    }

    pub fn fusions(&self) -> impl Iterator<Item = (&ActionableFusion, &ActionableEvent)> {
        self.events.iter().filter_map(|e| match &e.kind {
            ActionableEventKind::Fusion(f) => Some((f, e)),
            _ => None,
        })
    }

    pub fn characteristics(
        &self,
        characteristic: CharacteristicType,
    ) -> impl Iterator<Item = &ActionableEvent> {
        self.events.iter().filter(move |e| e.characteristic() == Some(characteristic))
    }
}

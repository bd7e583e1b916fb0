//! Disease Ontology (DOID) ancestor expansion.
//!
//! The graph is supplied by an external loader as `child -> parents` edges and
//! is read-only for the lifetime of the process. Codes missing from the graph
//! simply do not expand; that is normal for leaf or unknown codes.

use std::collections::{BTreeSet, HashMap};

use actinyx_common::OntologyCode;

/// Trait for looking up the direct parents of an ontology code.
///
/// Implementations can use:
/// - An in-memory `DoidGraph` (default)
/// - A loader-specific tree structure wrapped in an adapter
pub trait DoidProvider: Send + Sync {
    /// Direct parents of `doid`, or `None` if the code is not in the ontology.
    fn parents_of(&self, doid: &str) -> Option<&BTreeSet<OntologyCode>>;

    /// Transitive closure of ancestors, including the starting codes.
    ///
    /// Terminates on cyclic input: every code is expanded at most once.
    fn ancestor_closure(&self, codes: &BTreeSet<OntologyCode>) -> BTreeSet<OntologyCode> {
        let mut closure: BTreeSet<OntologyCode> = BTreeSet::new();
        let mut pending: Vec<&str> = codes.iter().map(String::as_str).collect();

        while let Some(code) = pending.pop() {
            if !closure.insert(code.to_string()) {
                continue;
            }
            if let Some(parents) = self.parents_of(code) {
                pending.extend(
                    parents
                        .iter()
                        .map(String::as_str)
                        .filter(|parent| !closure.contains(*parent)),
                );
            }
        }

        closure
    }
}

/// In-memory `child -> parents` DOID graph.
#[derive(Debug, Clone, Default)]
pub struct DoidGraph {
    parents: HashMap<OntologyCode, BTreeSet<OntologyCode>>,
}

impl DoidGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(child, parent)` edges.
    pub fn from_edges<I, C, P>(edges: I) -> Self
    where
        I: IntoIterator<Item = (C, P)>,
        C: Into<OntologyCode>,
        P: Into<OntologyCode>,
    {
        let mut graph = Self::new();
        for (child, parent) in edges {
            graph.add_edge(child, parent);
        }
        graph
    }

    pub fn add_edge(&mut self, child: impl Into<OntologyCode>, parent: impl Into<OntologyCode>) {
        self.parents.entry(child.into()).or_default().insert(parent.into());
    }

    /// Builder-style edge insertion.
    pub fn with_edge(mut self, child: &str, parent: &str) -> Self {
        self.add_edge(child, parent);
        self
    }
}

impl DoidProvider for DoidGraph {
    fn parents_of(&self, doid: &str) -> Option<&BTreeSet<OntologyCode>> {
        self.parents.get(doid)
    }
}

//! Per-patient evidence engine.
//!
//! The engine borrows the knowledge base and ontology for its whole lifetime.
//! `for_patient` expands the tumor DOIDs once; every finding evaluated through
//! the returned handle reuses that expansion.

use std::collections::BTreeSet;

use actinyx_common::{ActionableEvidence, EngineConfig, MolecularFinding, OntologyCode, Result};
use actinyx_kg::{ActionabilityMatch, ActionabilityMatcher, DoidProvider, KnowledgeBase};
use tracing::{debug, info, instrument};

use crate::reducer::EvidenceReducer;

pub struct EvidenceEngine<'kb> {
    matcher: ActionabilityMatcher<'kb>,
    doids: &'kb dyn DoidProvider,
    reducer: EvidenceReducer,
    config: EngineConfig,
}

impl<'kb> EvidenceEngine<'kb> {
    /// Build the matchers over `knowledge_base`. Fails on an invalid config.
    pub fn new(
        knowledge_base: &'kb KnowledgeBase,
        doids: &'kb dyn DoidProvider,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        let summary = knowledge_base.summary();
        info!(
            events = summary.total,
            per_category = ?summary.per_category,
            evidence_source = %config.evidence_source,
            external_trial_source = %config.external_trial_source,
            "Evidence engine initialised"
        );
        Ok(Self {
            matcher: ActionabilityMatcher::new(knowledge_base),
            doids,
            reducer: EvidenceReducer::from_config(&config),
            config,
        })
    }

    #[instrument(skip(self, tumor_doids), fields(tumor_doids = ?tumor_doids))]
    pub fn for_patient(&self, tumor_doids: &BTreeSet<OntologyCode>) -> PatientEvidence<'_, 'kb> {
        let expanded_tumor_doids = self.doids.ancestor_closure(tumor_doids);
        debug!(expanded = expanded_tumor_doids.len(), "Tumor DOIDs expanded");
        PatientEvidence { engine: self, expanded_tumor_doids }
    }
}

/// Evidence lookups for one patient's tumor.
pub struct PatientEvidence<'e, 'kb> {
    engine: &'e EvidenceEngine<'kb>,
    expanded_tumor_doids: BTreeSet<OntologyCode>,
}

impl<'e, 'kb> PatientEvidence<'e, 'kb> {
    pub fn expanded_tumor_doids(&self) -> &BTreeSet<OntologyCode> {
        &self.expanded_tumor_doids
    }

    pub fn match_finding(&self, finding: &MolecularFinding) -> ActionabilityMatch<'kb> {
        self.engine.matcher.match_finding(finding, &self.expanded_tumor_doids)
    }

    #[instrument(skip(self, finding), fields(finding = finding.label()))]
    pub fn evidence_for(&self, finding: &MolecularFinding) -> Result<ActionableEvidence> {
        self.engine.reducer.reduce(&self.match_finding(finding))
    }

    /// Combined evidence over all findings. The first failing finding aborts.
    pub fn evidence_for_all(&self, findings: &[MolecularFinding]) -> Result<ActionableEvidence> {
        #[cfg(feature = "parallel")]
        {
            if self.engine.config.parallel && findings.len() > 1 {
                use rayon::prelude::*;
                let per_finding = findings
                    .par_iter()
                    .map(|finding| self.evidence_for(finding))
                    .collect::<Result<Vec<_>>>()?;
                return Ok(per_finding.into_iter().sum());
            }
        }
        findings.iter().map(|finding| self.evidence_for(finding)).sum()
    }
}

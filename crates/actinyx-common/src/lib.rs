//! actinyx-common — Shared types, errors, and configuration used across all Actinyx crates.

pub mod error;
pub mod events;
pub mod criteria;
pub mod evidence;
pub mod config;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::{ActinyxError, Result};
pub use events::{
    ActionableEvent, ActionableEventKind, ActionableFusion, ActionableGene, ActionableHotspot,
    ActionableRange, CharacteristicType, ClinicalTrial, EventCategory, EvidenceDirection,
    EvidenceLevel, GeneEvent, Intervention, Knowledgebase, MutationType, OntologyCode, Treatment,
};
pub use criteria::{
    CodingEffect, CopyNumberCriteria, CopyNumberType, DisruptionCriteria, FusionDriverType,
    FusionMatchCriteria, MolecularFinding, VariantMatchCriteria, VariantType, VirusCriteria,
    VirusType,
};
pub use evidence::{ActionableEvidence, Country, ExternalTrial};

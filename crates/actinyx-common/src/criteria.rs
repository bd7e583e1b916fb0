//! Match criteria for patient molecular findings.
//!
//! These are produced by upstream molecular interpretation and consumed as
//! read-only values by the category matchers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodingEffect {
    NonsenseOrFrameshift,
    Splice,
    Missense,
    Synonymous,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantType {
    Snv,
    Mnv,
    Insert,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantMatchCriteria {
    pub gene: String,
    pub chromosome: String,
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
    pub coding_effect: CodingEffect,
    pub variant_type: VariantType,
    pub is_reportable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyNumberType {
    FullGain,
    PartialGain,
    Loss,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyNumberCriteria {
    pub gene: String,
    pub copy_number_type: CopyNumberType,
}

/// Gene-level disruption; used for both breakend and homozygous disruption matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisruptionCriteria {
    pub gene: String,
    pub is_reportable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionDriverType {
    /// Only the 5' partner is a known promiscuous fusion gene.
    Promiscuous5,
    /// Only the 3' partner is a known promiscuous fusion gene.
    Promiscuous3,
    KnownPair,
    Unclassified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FusionMatchCriteria {
    pub gene_start: String,
    pub gene_end: String,
    pub fused_exon_up: u32,
    pub fused_exon_down: u32,
    pub driver_type: FusionDriverType,
    pub is_reportable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirusType {
    Hpv,
    Ebv,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirusCriteria {
    pub virus_type: VirusType,
    pub is_reportable: bool,
}

/// One patient finding. Signature arms carry the tumor-wide flag they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum MolecularFinding {
    Variant(VariantMatchCriteria),
    CopyNumber(CopyNumberCriteria),
    HomozygousDisruption(DisruptionCriteria),
    Disruption(DisruptionCriteria),
    Fusion(FusionMatchCriteria),
    Virus(VirusCriteria),
    MicrosatelliteInstability { is_microsatellite_unstable: bool },
    HomologousRepairDeficiency { is_homologous_repair_deficient: bool },
    HighTumorMutationalBurden { has_high_tumor_mutational_burden: bool },
    HighTumorMutationalLoad { has_high_tumor_mutational_load: bool },
}

impl MolecularFinding {
    /// Short label for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            MolecularFinding::Variant(_) => "variant",
            MolecularFinding::CopyNumber(_) => "copy_number",
            MolecularFinding::HomozygousDisruption(_) => "homozygous_disruption",
            MolecularFinding::Disruption(_) => "disruption",
            MolecularFinding::Fusion(_) => "fusion",
            MolecularFinding::Virus(_) => "virus",
            MolecularFinding::MicrosatelliteInstability { .. } => "microsatellite_instability",
            MolecularFinding::HomologousRepairDeficiency { .. } => "homologous_repair_deficiency",
            MolecularFinding::HighTumorMutationalBurden { .. } => "high_tumor_mutational_burden",
            MolecularFinding::HighTumorMutationalLoad { .. } => "high_tumor_mutational_load",
        }
    }
}

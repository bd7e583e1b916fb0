//! Finding criteria builders. All findings are reportable.

use actinyx_common::{
    CodingEffect, CopyNumberCriteria, CopyNumberType, DisruptionCriteria, FusionDriverType,
    FusionMatchCriteria, VariantMatchCriteria, VariantType,
};

/// A reportable missense SNV.
pub fn variant(gene: &str, chromosome: &str, position: u64, ref_allele: &str, alt_allele: &str) -> VariantMatchCriteria {
    VariantMatchCriteria {
        gene: gene.to_string(),
        chromosome: chromosome.to_string(),
        position,
        ref_allele: ref_allele.to_string(),
        alt_allele: alt_allele.to_string(),
        coding_effect: CodingEffect::Missense,
        variant_type: VariantType::Snv,
        is_reportable: true,
    }
}

pub fn copy_number(gene: &str, copy_number_type: CopyNumberType) -> CopyNumberCriteria {
    CopyNumberCriteria { gene: gene.to_string(), copy_number_type }
}

pub fn disruption(gene: &str) -> DisruptionCriteria {
    DisruptionCriteria { gene: gene.to_string(), is_reportable: true }
}

pub fn fusion(
    gene_start: &str,
    gene_end: &str,
    fused_exon_up: u32,
    fused_exon_down: u32,
    driver_type: FusionDriverType,
) -> FusionMatchCriteria {
    FusionMatchCriteria {
        gene_start: gene_start.to_string(),
        gene_end: gene_end.to_string(),
        fused_exon_up,
        fused_exon_down,
        driver_type,
        is_reportable: true,
    }
}

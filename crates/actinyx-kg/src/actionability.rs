//! Routes a patient finding to its category matcher and personalizes the result.

use std::collections::BTreeSet;

use actinyx_common::{ActionableEvent, MolecularFinding, OntologyCode};
use tracing::debug;

use crate::knowledgebase::KnowledgeBase;
use crate::matchers::{
    BreakendMatcher, CopyNumberMatcher, FusionMatcher, HomozygousDisruptionMatcher,
    TumorSignatureMatchers, VariantMatcher, VirusMatcher,
};
use crate::personalization::{classify, ActionabilityMatch};

pub struct ActionabilityMatcher<'kb> {
    variants: VariantMatcher<'kb>,
    copy_numbers: CopyNumberMatcher<'kb>,
    homozygous_disruptions: HomozygousDisruptionMatcher<'kb>,
    breakends: BreakendMatcher<'kb>,
    fusions: FusionMatcher<'kb>,
    viruses: VirusMatcher<'kb>,
    signatures: TumorSignatureMatchers<'kb>,
}

impl<'kb> ActionabilityMatcher<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self {
            variants: VariantMatcher::new(knowledge_base),
            copy_numbers: CopyNumberMatcher::new(knowledge_base),
            homozygous_disruptions: HomozygousDisruptionMatcher::new(knowledge_base),
            breakends: BreakendMatcher::new(knowledge_base),
            fusions: FusionMatcher::new(knowledge_base),
            viruses: VirusMatcher::new(knowledge_base),
            signatures: TumorSignatureMatchers::new(knowledge_base),
        }
    }

    /// Raw knowledge-base matches for one finding, before personalization.
    pub fn find_matches(&self, finding: &MolecularFinding) -> Vec<&'kb ActionableEvent> {
        let matches = match finding {
            MolecularFinding::Variant(variant) => self.variants.find_matches(variant),
            MolecularFinding::CopyNumber(copy_number) => self.copy_numbers.find_matches(copy_number),
            MolecularFinding::HomozygousDisruption(disruption) => {
                self.homozygous_disruptions.find_matches(disruption)
            }
            MolecularFinding::Disruption(disruption) => self.breakends.find_matches(disruption),
            MolecularFinding::Fusion(fusion) => self.fusions.find_matches(fusion),
            MolecularFinding::Virus(virus) => self.viruses.find_matches(virus),
            MolecularFinding::MicrosatelliteInstability { is_microsatellite_unstable } => {
                signature_matches(*is_microsatellite_unstable, || {
                    self.signatures.microsatellite_instability.find_matches()
                })
            }
            MolecularFinding::HomologousRepairDeficiency { is_homologous_repair_deficient } => {
                signature_matches(*is_homologous_repair_deficient, || {
                    self.signatures.homologous_repair_deficiency.find_matches()
                })
            }
            MolecularFinding::HighTumorMutationalBurden { has_high_tumor_mutational_burden } => {
                signature_matches(*has_high_tumor_mutational_burden, || {
                    self.signatures.high_tumor_mutational_burden.find_matches()
                })
            }
            MolecularFinding::HighTumorMutationalLoad { has_high_tumor_mutational_load } => {
                signature_matches(*has_high_tumor_mutational_load, || {
                    self.signatures.high_tumor_mutational_load.find_matches()
                })
            }
        };
        debug!(finding = finding.label(), matches = matches.len(), "Knowledge base matches found");
        matches
    }

    /// Matches split into on-label and off-label for an already-expanded tumor.
    pub fn match_finding(
        &self,
        finding: &MolecularFinding,
        expanded_tumor_doids: &BTreeSet<OntologyCode>,
    ) -> ActionabilityMatch<'kb> {
        let personalized = classify(self.find_matches(finding), expanded_tumor_doids);
        debug!(
            finding = finding.label(),
            on_label = personalized.on_label.len(),
            off_label = personalized.off_label.len(),
            "Matches personalized"
        );
        personalized
    }
}

fn signature_matches<'kb>(
    flag: bool,
    matches: impl FnOnce() -> Vec<&'kb ActionableEvent>,
) -> Vec<&'kb ActionableEvent> {
    if flag {
        matches()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actinyx_common::{
        CharacteristicType, CopyNumberType, FusionDriverType, GeneEvent, VirusCriteria, VirusType,
    };
    use actinyx_test_utils::{criteria, fixtures, treatment_names};

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            fixtures::hotspot("BRAF", "7", 140453136, "T", "A")
                .treatment("Vemurafenib")
                .cancer_type("1909")
                .build(),
            fixtures::gene("BRAF", GeneEvent::Activation)
                .treatment("Trametinib")
                .cancer_type("1324")
                .build(),
            fixtures::gene("ERBB2", GeneEvent::Amplification).treatment("Trastuzumab").build(),
            fixtures::gene("PTEN", GeneEvent::Deletion).treatment("Deletion drug").build(),
            fixtures::gene("PTEN", GeneEvent::AnyMutation).treatment("Any drug").build(),
            fixtures::gene("ALK", GeneEvent::Fusion).treatment("Alectinib").build(),
            fixtures::characteristic(CharacteristicType::HpvPositive).treatment("HPV drug").build(),
            fixtures::characteristic(CharacteristicType::MicrosatelliteUnstable)
                .treatment("Pembrolizumab")
                .build(),
            fixtures::characteristic(CharacteristicType::HighTumorMutationalLoad)
                .treatment("TML drug")
                .build(),
        ])
    }

    #[test]
    fn test_routes_each_finding_kind() {
        let kb = kb();
        let matcher = ActionabilityMatcher::new(&kb);
        let cases = vec![
            (
                MolecularFinding::Variant(criteria::variant("BRAF", "7", 140453136, "T", "A")),
                vec!["Vemurafenib", "Trametinib"],
            ),
            (
                MolecularFinding::CopyNumber(criteria::copy_number("ERBB2", CopyNumberType::FullGain)),
                vec!["Trastuzumab"],
            ),
            (
                MolecularFinding::HomozygousDisruption(criteria::disruption("PTEN")),
                vec!["Deletion drug", "Any drug"],
            ),
            (MolecularFinding::Disruption(criteria::disruption("PTEN")), vec!["Any drug"]),
            (
                MolecularFinding::Fusion(criteria::fusion("EML4", "ALK", 6, 20, FusionDriverType::Promiscuous3)),
                vec!["Alectinib"],
            ),
            (
                MolecularFinding::Virus(VirusCriteria { virus_type: VirusType::Hpv, is_reportable: true }),
                vec!["HPV drug"],
            ),
            (
                MolecularFinding::MicrosatelliteInstability { is_microsatellite_unstable: true },
                vec!["Pembrolizumab"],
            ),
            (
                MolecularFinding::HighTumorMutationalLoad { has_high_tumor_mutational_load: true },
                vec!["TML drug"],
            ),
        ];
        for (finding, expected) in cases {
            assert_eq!(treatment_names(&matcher.find_matches(&finding)), expected, "{}", finding.label());
        }
    }

    #[test]
    fn test_false_signature_flag_matches_nothing() {
        let kb = kb();
        let matcher = ActionabilityMatcher::new(&kb);
        let finding = MolecularFinding::MicrosatelliteInstability { is_microsatellite_unstable: false };
        assert!(matcher.find_matches(&finding).is_empty());
    }

    #[test]
    fn test_match_finding_personalizes() {
        let kb = kb();
        let matcher = ActionabilityMatcher::new(&kb);
        let finding = MolecularFinding::Variant(criteria::variant("BRAF", "7", 140453136, "T", "A"));
        let expanded: BTreeSet<OntologyCode> = ["1909", "4159", "162"].iter().map(|s| s.to_string()).collect();
        let result = matcher.match_finding(&finding, &expanded);
        assert_eq!(treatment_names(&result.on_label), vec!["Vemurafenib"]);
        assert_eq!(treatment_names(&result.off_label), vec!["Trametinib"]);
    }
}

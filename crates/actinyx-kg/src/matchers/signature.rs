//! Tumor-wide signature matching (MSI, HRD, high TMB, high TML).
//!
//! Each matcher returns its characteristic events unconditionally; which
//! matcher runs is decided upstream from the patient's signature flags.

use actinyx_common::{ActionableEvent, CharacteristicType};

use crate::knowledgebase::KnowledgeBase;

pub struct SignatureMatcher<'kb> {
    characteristic: CharacteristicType,
    events: Vec<&'kb ActionableEvent>,
}

impl<'kb> SignatureMatcher<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase, characteristic: CharacteristicType) -> Self {
        Self {
            characteristic,
            events: knowledge_base.characteristics(characteristic).collect(),
        }
    }

    pub fn characteristic(&self) -> CharacteristicType {
        self.characteristic
    }

    pub fn find_matches(&self) -> Vec<&'kb ActionableEvent> {
        self.events.clone()
    }
}

/// The four signature matchers, one per tumor-wide flag.
pub struct TumorSignatureMatchers<'kb> {
    pub microsatellite_instability: SignatureMatcher<'kb>,
    pub homologous_repair_deficiency: SignatureMatcher<'kb>,
    pub high_tumor_mutational_burden: SignatureMatcher<'kb>,
    pub high_tumor_mutational_load: SignatureMatcher<'kb>,
}

impl<'kb> TumorSignatureMatchers<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self {
            microsatellite_instability: SignatureMatcher::new(
                knowledge_base,
                CharacteristicType::MicrosatelliteUnstable,
            ),
            homologous_repair_deficiency: SignatureMatcher::new(
                knowledge_base,
                CharacteristicType::HomologousRecombinationDeficient,
            ),
            high_tumor_mutational_burden: SignatureMatcher::new(
                knowledge_base,
                CharacteristicType::HighTumorMutationalBurden,
            ),
            high_tumor_mutational_load: SignatureMatcher::new(
                knowledge_base,
                CharacteristicType::HighTumorMutationalLoad,
            ),
        }
    }
}

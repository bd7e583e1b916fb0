//! Viral integration matching against HPV/EBV characteristic events.

use actinyx_common::{ActionableEvent, CharacteristicType, VirusCriteria, VirusType};

use crate::knowledgebase::KnowledgeBase;

pub struct VirusMatcher<'kb> {
    hpv: Vec<&'kb ActionableEvent>,
    ebv: Vec<&'kb ActionableEvent>,
}

impl<'kb> VirusMatcher<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self {
            hpv: knowledge_base.characteristics(CharacteristicType::HpvPositive).collect(),
            ebv: knowledge_base.characteristics(CharacteristicType::EbvPositive).collect(),
        }
    }

    pub fn find_matches(&self, virus: &VirusCriteria) -> Vec<&'kb ActionableEvent> {
        if !virus.is_reportable {
            return Vec::new();
        }
        match virus.virus_type {
            VirusType::Hpv => self.hpv.clone(),
            VirusType::Ebv => self.ebv.clone(),
            VirusType::Other => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actinyx_test_utils::{fixtures, treatment_names};

    fn virus(virus_type: VirusType, is_reportable: bool) -> VirusCriteria {
        VirusCriteria { virus_type, is_reportable }
    }

    #[test]
    fn test_virus_type_selects_characteristic() {
        let kb = KnowledgeBase::new(vec![
            fixtures::characteristic(CharacteristicType::HpvPositive).treatment("HPV vaccine").build(),
            fixtures::characteristic(CharacteristicType::EbvPositive).treatment("EBV CTL").build(),
        ]);
        let matcher = VirusMatcher::new(&kb);
        assert_eq!(treatment_names(&matcher.find_matches(&virus(VirusType::Hpv, true))), vec!["HPV vaccine"]);
        assert_eq!(treatment_names(&matcher.find_matches(&virus(VirusType::Ebv, true))), vec!["EBV CTL"]);
        assert!(matcher.find_matches(&virus(VirusType::Other, true)).is_empty());
        assert!(matcher.find_matches(&virus(VirusType::Hpv, false)).is_empty());
    }
}

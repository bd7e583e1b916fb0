//! External trial extraction from on-label trial events.

use std::collections::BTreeSet;

use actinyx_common::{
    ActinyxError, ActionableEvent, ClinicalTrial, Country, ExternalTrial, Knowledgebase, Result,
};
use tracing::{debug, warn};

/// Length of an NCT identifier ("NCT" followed by eight digits).
const NCT_ID_LEN: usize = 11;

/// True when the last eleven characters of `url` start with `NCT`.
///
/// Shorter strings never qualify, since they cannot hold a full identifier.
pub fn is_nct_url(url: &str) -> bool {
    url.char_indices()
        .rev()
        .nth(NCT_ID_LEN - 1)
        .is_some_and(|(start, _)| url[start..].starts_with("NCT"))
}

/// First source URL carrying an NCT identifier.
pub fn nct_url(trial: &ClinicalTrial) -> Result<&str> {
    match trial.source_urls.iter().find(|url| is_nct_url(url)) {
        Some(url) => Ok(url),
        None => {
            warn!(
                nct_id = %trial.nct_id,
                source_urls = ?trial.source_urls,
                "Trial event has no NCT source URL"
            );
            Err(ActinyxError::MissingNctUrl {
                nct_id: trial.nct_id.clone(),
                source_urls: trial.source_urls.clone(),
            })
        }
    }
}

pub fn external_trial(trial: &ClinicalTrial) -> Result<ExternalTrial> {
    Ok(ExternalTrial {
        title: trial.title().to_string(),
        countries: trial
            .countries_of_study
            .iter()
            .map(|country| Country::from_study_country(country))
            .collect(),
        url: nct_url(trial)?.to_string(),
        nct_id: trial.nct_id.clone(),
    })
}

/// Trials from responsive `external_trial_source` events in the on-label bucket.
///
/// Fails on the first trial without an NCT source URL.
pub fn external_trials(
    on_label: &[&ActionableEvent],
    external_trial_source: Knowledgebase,
) -> Result<BTreeSet<ExternalTrial>> {
    let mut trials = BTreeSet::new();
    for event in on_label {
        if event.source != external_trial_source || !event.direction.is_responsive() {
            continue;
        }
        match event.clinical_trial() {
            Some(trial) => {
                trials.insert(external_trial(trial)?);
            }
            None => debug!(
                treatment = event.intervention.display_name(),
                "Trial source event without a clinical trial skipped"
            ),
        }
    }
    Ok(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actinyx_common::{EvidenceDirection, GeneEvent};
    use actinyx_test_utils::fixtures;

    fn trial_event(trial: ClinicalTrial) -> ActionableEvent {
        fixtures::gene("KRAS", GeneEvent::Activation).trial(trial).build()
    }

    #[test]
    fn test_is_nct_url() {
        assert!(is_nct_url("https://clinicaltrials.gov/study/NCT00000020"));
        assert!(is_nct_url("NCT00000020"));
        assert!(!is_nct_url("https://ckbhome.jax.org/clinicalTrial/show?nctId=X"));
        assert!(!is_nct_url("NCT0000002"));
        assert!(!is_nct_url(""));
    }

    #[test]
    fn test_is_nct_url_counts_characters() {
        assert!(is_nct_url("https://x.org/NCT0000002é"));
        assert!(is_nct_url("https://x.org/NCT00000é20"));
        assert!(!is_nct_url("https://x.org/NCT000000é20"));
    }

    #[test]
    fn test_short_nct_string_is_not_a_url() {
        assert!(!is_nct_url("NCT1"));
        assert!(!is_nct_url("NCT"));
    }

    #[test]
    fn test_non_ascii_nct_url_resolves() {
        let mut trial = fixtures::clinical_trial("NCT0000002é");
        trial.source_urls = vec!["https://x.org/NCT0000002é".to_string()];
        assert_eq!(nct_url(&trial).unwrap(), "https://x.org/NCT0000002é");
    }

    #[test]
    fn test_first_nct_url_wins() {
        let mut trial = fixtures::clinical_trial("NCT00000020");
        trial.source_urls = vec![
            "https://ckbhome.jax.org/trial/20".to_string(),
            "https://clinicaltrials.gov/study/NCT00000020".to_string(),
            "https://other.org/NCT00000020".to_string(),
        ];
        assert_eq!(nct_url(&trial).unwrap(), "https://clinicaltrials.gov/study/NCT00000020");
    }

    #[test]
    fn test_external_trial_fields() {
        let mut trial = fixtures::clinical_trial("NCT00000020");
        trial.study_acronym = Some("KRASCAN".to_string());
        trial.countries_of_study = ["Netherlands", " belgium ", "Spain"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let external = external_trial(&trial).unwrap();
        assert_eq!(external.title, "KRASCAN");
        assert_eq!(external.nct_id, "NCT00000020");
        assert_eq!(
            external.countries,
            [Country::Netherlands, Country::Belgium, Country::Other].into_iter().collect()
        );
    }

    #[test]
    fn test_missing_nct_url_is_an_error() {
        let mut trial = fixtures::clinical_trial("NCT00000021");
        trial.source_urls = vec!["https://ckbhome.jax.org/trial/21".to_string()];
        let event = trial_event(trial);
        let err = external_trials(&[&event], Knowledgebase::CkbTrial).unwrap_err();
        assert!(matches!(err, ActinyxError::MissingNctUrl { ref nct_id, .. } if nct_id == "NCT00000021"));
        assert!(err.to_string().contains("https://ckbhome.jax.org/trial/21"));
    }

    #[test]
    fn test_only_responsive_trial_source_events_extracted() {
        let included = trial_event(fixtures::clinical_trial("NCT00000001"));
        let resistant = fixtures::gene("KRAS", GeneEvent::Activation)
            .trial(fixtures::clinical_trial("NCT00000002"))
            .direction(EvidenceDirection::Resistant)
            .build();
        let other_source = fixtures::gene("KRAS", GeneEvent::Activation)
            .trial(fixtures::clinical_trial("NCT00000003"))
            .source(Knowledgebase::Iclusion)
            .build();
        let trials = external_trials(&[&included, &resistant, &other_source], Knowledgebase::CkbTrial).unwrap();
        let ids: Vec<&str> = trials.iter().map(|t| t.nct_id.as_str()).collect();
        assert_eq!(ids, vec!["NCT00000001"]);
    }
}

//! Tiered treatment evidence for a single finding.
//!
//! `ActionableEvidence` is a commutative monoid under field-wise set union:
//! `empty()` is the identity and `combine` is associative and commutative, so
//! per-finding evidence can be folded in any order.

use std::collections::BTreeSet;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    Netherlands,
    Belgium,
    Germany,
    Other,
}

impl Country {
    /// Map a free-text country of study; anything unrecognised becomes `Other`.
    pub fn from_study_country(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "netherlands" => Country::Netherlands,
            "belgium" => Country::Belgium,
            "germany" => Country::Germany,
            _ => Country::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExternalTrial {
    pub title: String,
    pub countries: BTreeSet<Country>,
    pub url: String,
    pub nct_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableEvidence {
    #[serde(default)]
    pub approved_treatments: BTreeSet<String>,
    #[serde(default)]
    pub on_label_experimental_treatments: BTreeSet<String>,
    #[serde(default)]
    pub off_label_experimental_treatments: BTreeSet<String>,
    #[serde(default)]
    pub pre_clinical_treatments: BTreeSet<String>,
    #[serde(default)]
    pub known_resistant_treatments: BTreeSet<String>,
    #[serde(default)]
    pub suspect_resistant_treatments: BTreeSet<String>,
    #[serde(default)]
    pub external_eligible_trials: BTreeSet<ExternalTrial>,
}

impl ActionableEvidence {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Field-wise union.
    pub fn combine(mut self, other: ActionableEvidence) -> Self {
        self.approved_treatments.extend(other.approved_treatments);
        self.on_label_experimental_treatments.extend(other.on_label_experimental_treatments);
        self.off_label_experimental_treatments.extend(other.off_label_experimental_treatments);
        self.pre_clinical_treatments.extend(other.pre_clinical_treatments);
        self.known_resistant_treatments.extend(other.known_resistant_treatments);
        self.suspect_resistant_treatments.extend(other.suspect_resistant_treatments);
        self.external_eligible_trials.extend(other.external_eligible_trials);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.approved_treatments.is_empty()
            && self.on_label_experimental_treatments.is_empty()
            && self.off_label_experimental_treatments.is_empty()
            && self.pre_clinical_treatments.is_empty()
            && self.known_resistant_treatments.is_empty()
            && self.suspect_resistant_treatments.is_empty()
            && self.external_eligible_trials.is_empty()
    }

    /// Treatments with responsive evidence in any clinical tier
    /// (approved, on-label experimental, off-label experimental).
    pub fn responsive_clinical_treatments(&self) -> BTreeSet<&str> {
        self.approved_treatments
            .iter()
            .chain(&self.on_label_experimental_treatments)
            .chain(&self.off_label_experimental_treatments)
            .map(String::as_str)
            .collect()
    }

    /// Every treatment name mentioned anywhere in this evidence.
    pub fn treatments(&self) -> BTreeSet<&str> {
        self.approved_treatments
            .iter()
            .chain(&self.on_label_experimental_treatments)
            .chain(&self.off_label_experimental_treatments)
            .chain(&self.pre_clinical_treatments)
            .chain(&self.known_resistant_treatments)
            .chain(&self.suspect_resistant_treatments)
            .map(String::as_str)
            .collect()
    }
}

impl Add for ActionableEvidence {
    type Output = ActionableEvidence;

    fn add(self, rhs: ActionableEvidence) -> ActionableEvidence {
        self.combine(rhs)
    }
}

impl Sum for ActionableEvidence {
    fn sum<I: Iterator<Item = ActionableEvidence>>(iter: I) -> Self {
        iter.fold(ActionableEvidence::empty(), ActionableEvidence::combine)
    }
}

impl FromIterator<ActionableEvidence> for ActionableEvidence {
    fn from_iter<I: IntoIterator<Item = ActionableEvidence>>(iter: I) -> Self {
        iter.into_iter().sum()
    }
}

//! Section composites: the most severe score among a set of domain tests.

use serde::{Deserialize, Serialize};

use inpl_core::models::{AnswerRecord, TestResult, TestScore};

use crate::domains::{motor, neuropsy, nutrition};
use crate::norms::NormativeTable;

/// How a composite treats inputs that could not be scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingScorePolicy {
    /// Unknown inputs are left out. The composite is unknown only when
    /// every input is.
    #[default]
    Skip,
    /// Once any input is known, an unknown input counts as `Bad`. This
    /// matches the historical reports, where a missing sub-score dragged
    /// the section to the worst level.
    CountAsBad,
}

/// Minimum score of `results` under `policy`. Composites never carry text.
pub fn aggregate(results: &[TestResult], policy: MissingScorePolicy) -> TestResult {
    let lowest = results.iter().filter_map(|result| result.score).min();

    let score = match policy {
        MissingScorePolicy::Skip => lowest,
        MissingScorePolicy::CountAsBad => {
            if lowest.is_some() && results.iter().any(TestResult::is_unknown) {
                Some(TestScore::Bad)
            } else {
                lowest
            }
        }
    };

    TestResult { score, text: None }
}

/// Mobility, strength and fracture risk.
pub fn ems_all(answers: &AnswerRecord, policy: MissingScorePolicy) -> TestResult {
    aggregate(
        &[
            motor::ems_mobility(answers),
            motor::ems_strength(answers),
            motor::ems_fracture_risk(answers),
        ],
        policy,
    )
}

/// The four cognitive domains.
pub fn neuro_cognition(
    answers: &AnswerRecord,
    norms: &NormativeTable,
    policy: MissingScorePolicy,
) -> TestResult {
    aggregate(
        &[
            neuropsy::neuro_efficiency(answers, norms),
            neuropsy::neuro_memory(answers, norms),
            neuropsy::neuro_execution(answers, norms),
            neuropsy::neuro_attention(answers, norms),
        ],
        policy,
    )
}

/// Cognition, mood and sleep.
pub fn neuro_all(
    answers: &AnswerRecord,
    norms: &NormativeTable,
    policy: MissingScorePolicy,
) -> TestResult {
    aggregate(
        &[
            neuro_cognition(answers, norms, policy),
            neuropsy::neuro_depression_anxiety(answers),
            neuropsy::neuro_sleep(answers),
        ],
        policy,
    )
}

pub fn nutrition_all(answers: &AnswerRecord, policy: MissingScorePolicy) -> TestResult {
    aggregate(
        &[
            nutrition::nutrition_diversity(answers),
            nutrition::nutrition_protein_intake(answers),
            nutrition::nutrition_calcium_intake(answers),
            nutrition::nutrition_behavior(answers),
        ],
        policy,
    )
}

//! inpl-scoring
//!
//! Normative scoring engine for the inPL health check. Turns one answer
//! record into tri-state clinical results per domain and per section.
//! Pure and synchronous: no I/O beyond optionally loading an alternative
//! normative table.

pub mod aggregate;
pub mod domains;
pub mod error;
pub mod norms;
pub mod report;
pub mod thresholds;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use inpl_core::models::{AnswerRecord, TestResult};

use aggregate::MissingScorePolicy;
use domains::{audition, cardio, densitometry, motor, neuropsy, nutrition, spirometry};
use error::ScoringError;
use norms::NormativeTable;

/// Report section a test belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Densitometry,
    Motor,
    Cardio,
    Audition,
    Spirometry,
    Neuropsy,
    Nutrition,
}

/// A registered domain test or composite.
#[derive(Clone, Copy)]
pub struct TestDefinition {
    /// Stable identifier, e.g. `"demo_rachis"` or `"neuro_all"`.
    pub id: &'static str,
    pub section: Section,
    pub evaluate: fn(&Scorer<'_>, &AnswerRecord) -> TestResult,
}

impl std::fmt::Debug for TestDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestDefinition")
            .field("id", &self.id)
            .field("section", &self.section)
            .finish_non_exhaustive()
    }
}

static TESTS: &[TestDefinition] = &[
    TestDefinition {
        id: "demo_rachis",
        section: Section::Densitometry,
        evaluate: |_, answers| densitometry::demo_rachis(answers),
    },
    TestDefinition {
        id: "demo_femoral_neck",
        section: Section::Densitometry,
        evaluate: |_, answers| densitometry::demo_femoral_neck(answers),
    },
    TestDefinition {
        id: "demo_hip",
        section: Section::Densitometry,
        evaluate: |_, answers| densitometry::demo_hip(answers),
    },
    TestDefinition {
        id: "demo_forearm",
        section: Section::Densitometry,
        evaluate: |_, answers| densitometry::demo_forearm(answers),
    },
    TestDefinition {
        id: "demo_sarcopenia",
        section: Section::Densitometry,
        evaluate: |_, answers| densitometry::demo_sarcopenia(answers),
    },
    TestDefinition {
        id: "ems_mobility",
        section: Section::Motor,
        evaluate: |_, answers| motor::ems_mobility(answers),
    },
    TestDefinition {
        id: "ems_strength",
        section: Section::Motor,
        evaluate: |_, answers| motor::ems_strength(answers),
    },
    TestDefinition {
        id: "ems_fracture_risk",
        section: Section::Motor,
        evaluate: |_, answers| motor::ems_fracture_risk(answers),
    },
    TestDefinition {
        id: "ems_all",
        section: Section::Motor,
        evaluate: |scorer, answers| aggregate::ems_all(answers, scorer.missing_scores()),
    },
    TestDefinition {
        id: "cardio_orthostatic_hypotension",
        section: Section::Cardio,
        evaluate: |_, answers| cardio::cardio_orthostatic_hypotension(answers),
    },
    TestDefinition {
        id: "cardio_rigidity",
        section: Section::Cardio,
        evaluate: |_, answers| cardio::cardio_rigidity(answers),
    },
    TestDefinition {
        id: "surdity_left",
        section: Section::Audition,
        evaluate: |_, answers| audition::surdity_left(answers),
    },
    TestDefinition {
        id: "surdity_right",
        section: Section::Audition,
        evaluate: |_, answers| audition::surdity_right(answers),
    },
    TestDefinition {
        id: "spiro_result",
        section: Section::Spirometry,
        evaluate: |_, answers| spirometry::spiro_result(answers),
    },
    TestDefinition {
        id: "neuro_efficiency",
        section: Section::Neuropsy,
        evaluate: |scorer, answers| neuropsy::neuro_efficiency(answers, scorer.norms()),
    },
    TestDefinition {
        id: "neuro_memory",
        section: Section::Neuropsy,
        evaluate: |scorer, answers| neuropsy::neuro_memory(answers, scorer.norms()),
    },
    TestDefinition {
        id: "neuro_execution",
        section: Section::Neuropsy,
        evaluate: |scorer, answers| neuropsy::neuro_execution(answers, scorer.norms()),
    },
    TestDefinition {
        id: "neuro_attention",
        section: Section::Neuropsy,
        evaluate: |scorer, answers| neuropsy::neuro_attention(answers, scorer.norms()),
    },
    TestDefinition {
        id: "neuro_cognition",
        section: Section::Neuropsy,
        evaluate: |scorer, answers| {
            aggregate::neuro_cognition(answers, scorer.norms(), scorer.missing_scores())
        },
    },
    TestDefinition {
        id: "neuro_depression_anxiety",
        section: Section::Neuropsy,
        evaluate: |_, answers| neuropsy::neuro_depression_anxiety(answers),
    },
    TestDefinition {
        id: "neuro_sleep",
        section: Section::Neuropsy,
        evaluate: |_, answers| neuropsy::neuro_sleep(answers),
    },
    TestDefinition {
        id: "neuro_all",
        section: Section::Neuropsy,
        evaluate: |scorer, answers| {
            aggregate::neuro_all(answers, scorer.norms(), scorer.missing_scores())
        },
    },
    TestDefinition {
        id: "nutrition_diversity",
        section: Section::Nutrition,
        evaluate: |_, answers| nutrition::nutrition_diversity(answers),
    },
    TestDefinition {
        id: "nutrition_protein_intake",
        section: Section::Nutrition,
        evaluate: |_, answers| nutrition::nutrition_protein_intake(answers),
    },
    TestDefinition {
        id: "nutrition_calcium_intake",
        section: Section::Nutrition,
        evaluate: |_, answers| nutrition::nutrition_calcium_intake(answers),
    },
    TestDefinition {
        id: "nutrition_behavior",
        section: Section::Nutrition,
        evaluate: |_, answers| nutrition::nutrition_behavior(answers),
    },
    TestDefinition {
        id: "nutrition_all",
        section: Section::Nutrition,
        evaluate: |scorer, answers| aggregate::nutrition_all(answers, scorer.missing_scores()),
    },
];

/// Return all registered tests, in report order.
pub fn all_tests() -> &'static [TestDefinition] {
    TESTS
}

/// Look up a test by ID.
pub fn get_test(id: &str) -> Option<&'static TestDefinition> {
    TESTS.iter().find(|test| test.id == id)
}

/// Scoring context: the normative table and the composite policy.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    norms: &'a NormativeTable,
    missing_scores: MissingScorePolicy,
}

impl<'a> Scorer<'a> {
    pub fn new(norms: &'a NormativeTable, missing_scores: MissingScorePolicy) -> Self {
        Self {
            norms,
            missing_scores,
        }
    }

    pub fn norms(&self) -> &'a NormativeTable {
        self.norms
    }

    pub fn missing_scores(&self) -> MissingScorePolicy {
        self.missing_scores
    }

    /// Run one registered test.
    pub fn evaluate(&self, id: &str, answers: &AnswerRecord) -> Result<TestResult, ScoringError> {
        let test = get_test(id).ok_or_else(|| ScoringError::UnknownTest(id.to_string()))?;
        Ok((test.evaluate)(self, answers))
    }
}

impl Default for Scorer<'static> {
    fn default() -> Self {
        Self::new(NormativeTable::embedded(), MissingScorePolicy::default())
    }
}

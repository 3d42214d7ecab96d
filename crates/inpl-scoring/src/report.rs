use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use inpl_core::models::{AnswerRecord, TestResult, TestScore};

use crate::domains::spirometry::{self, SpiroQuality};
use crate::domains::{cardio, survey};
use crate::{Scorer, Section, all_tests};

/// Every registered test evaluated against one answer record, plus the
/// measures the report displays without classifying them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringReport {
    pub epices_score: Option<f64>,
    pub spirometry_quality: Option<SpiroQuality>,
    pub systolic_pressure: Option<f64>,
    pub diastolic_pressure: Option<f64>,
    pub results: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportEntry {
    pub id: String,
    pub section: Section,
    pub result: TestResult,
}

impl ScoringReport {
    pub fn result(&self, id: &str) -> Option<&TestResult> {
        self.results
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.result)
    }

    pub fn section(&self, section: Section) -> impl Iterator<Item = &ReportEntry> {
        self.results
            .iter()
            .filter(move |entry| entry.section == section)
    }
}

impl Scorer<'_> {
    /// Evaluate every registered test, in registry order.
    pub fn report(&self, answers: &AnswerRecord) -> ScoringReport {
        let results: Vec<ReportEntry> = all_tests()
            .iter()
            .map(|test| ReportEntry {
                id: test.id.to_string(),
                section: test.section,
                result: (test.evaluate)(self, answers),
            })
            .collect();

        let unknown = results.iter().filter(|e| e.result.is_unknown()).count();
        let bad = results
            .iter()
            .filter(|e| e.result.score == Some(TestScore::Bad))
            .count();
        debug!(tests = results.len(), unknown, bad, "scoring report built");

        ScoringReport {
            epices_score: survey::epices_score(answers),
            spirometry_quality: spirometry::spiro_quality(answers),
            systolic_pressure: cardio::systolic_pressure(answers),
            diastolic_pressure: cardio::diastolic_pressure(answers),
            results,
        }
    }
}

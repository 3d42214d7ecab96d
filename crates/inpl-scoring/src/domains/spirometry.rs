use serde::{Deserialize, Serialize};
use ts_rs::TS;

use inpl_core::models::{AnswerRecord, TestResult, TestScore};

/// FEV1/FVC ratio under which the pattern is obstructive.
const OBSTRUCTIVE_RATIO: f64 = 0.7;

/// Technical quality of the spirometry curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SpiroQuality {
    Good,
    NotInterpretable,
}

impl SpiroQuality {
    pub fn label(self) -> &'static str {
        match self {
            SpiroQuality::Good => "bonne qualité",
            SpiroQuality::NotInterpretable => "non interprétable",
        }
    }
}

/// Curves are usable when the operator marked them as good, or failing
/// that, when an expiratory plateau was reached.
pub fn spiro_quality(answers: &AnswerRecord) -> Option<SpiroQuality> {
    let spiro = &answers.spirometry;
    if spiro.respi_spiro_qualite1? || spiro.respi_presence_plateau? {
        Some(SpiroQuality::Good)
    } else {
        Some(SpiroQuality::NotInterpretable)
    }
}

pub fn spiro_result(answers: &AnswerRecord) -> TestResult {
    let spiro = &answers.spirometry;
    let (
        Some(fev1),
        Some(fev1_limit),
        Some(fvc),
        Some(fvc_limit),
        Some(mef2575),
        Some(mef2575_limit),
    ) = (
        spiro.respi_vems,
        spiro.respi_vems_limite,
        spiro.respi_cvf,
        spiro.respi_cvf_limite,
        spiro.respi_def2575,
        spiro.respi_def2575_limite,
    )
    else {
        return TestResult::unknown();
    };

    let obstructive = fev1 / fvc < OBSTRUCTIVE_RATIO;
    let restrictive = fev1 < fev1_limit || fvc < fvc_limit;

    match (obstructive, restrictive) {
        (true, true) => TestResult::labelled(TestScore::Bad, "trouble mixte"),
        (true, false) => TestResult::labelled(TestScore::Bad, "trouble obstructif"),
        (false, true) => TestResult::labelled(TestScore::Bad, "trouble restrictif"),
        (false, false) if mef2575 < mef2575_limit => TestResult::labelled(
            TestScore::Fragile,
            "anomalie des bronches distales (DEF 25-75)",
        ),
        (false, false) => TestResult::labelled(TestScore::Good, "spirométrie normale"),
    }
}

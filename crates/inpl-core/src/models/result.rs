use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Tri-state clinical classification.
///
/// The ordering is significant: composites keep the minimum, so `Bad` must
/// sort before `Fragile`, which sorts before `Good`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TestScore {
    Bad = 0,
    Fragile = 1,
    Good = 2,
}

impl TestScore {
    /// Numeric code used by the report front-ends (0, 1, 2).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TestScore::Bad),
            1 => Some(TestScore::Fragile),
            2 => Some(TestScore::Good),
            _ => None,
        }
    }
}

/// Outcome of one domain test. A `None` score means the answers were not
/// sufficient to compute it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestResult {
    pub score: Option<TestScore>,
    pub text: Option<String>,
}

impl TestResult {
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn scored(score: TestScore) -> Self {
        Self {
            score: Some(score),
            text: None,
        }
    }

    pub fn labelled(score: TestScore, text: impl Into<String>) -> Self {
        Self {
            score: Some(score),
            text: Some(text.into()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.score.is_none()
    }
}

use inpl_core::models::{AnswerRecord, Sex, TestResult, TestScore};

/// WHO T-score classification of one bone density site.
fn bone_result(t_score: Option<f64>) -> TestResult {
    let Some(t) = t_score else {
        return TestResult::unknown();
    };

    if t <= -2.5 {
        TestResult::labelled(TestScore::Bad, "ostéoporose")
    } else if t <= -1.0 {
        TestResult::labelled(TestScore::Fragile, "ostéopénie")
    } else {
        TestResult::labelled(TestScore::Good, "absence d'ostéopénie/ostéoporose")
    }
}

/// Lumbar spine.
pub fn demo_rachis(answers: &AnswerRecord) -> TestResult {
    bone_result(answers.densitometry.demo_dmo_rachis)
}

pub fn demo_femoral_neck(answers: &AnswerRecord) -> TestResult {
    bone_result(answers.densitometry.demo_dmo_col)
}

/// Total hip.
pub fn demo_hip(answers: &AnswerRecord) -> TestResult {
    bone_result(answers.densitometry.demo_dmo_hanche)
}

/// One-third radius.
pub fn demo_forearm(answers: &AnswerRecord) -> TestResult {
    bone_result(answers.densitometry.demo_dmo_avb1)
}

/// Appendicular muscle mass index at or under the sarcopenia cutoff.
pub(crate) fn low_muscle_mass(sex: Sex, index: f64) -> bool {
    let threshold = match sex {
        Sex::Male => 7.23,
        Sex::Female => 5.67,
    };
    index <= threshold
}

pub fn demo_sarcopenia(answers: &AnswerRecord) -> TestResult {
    let (Some(sex), Some(index)) = (
        answers.demographics.consultant_sexe,
        answers.densitometry.demo_dxa_indice_mm,
    ) else {
        return TestResult::unknown();
    };

    if low_muscle_mass(sex, index) {
        TestResult::labelled(TestScore::Fragile, "sarcopénie")
    } else {
        TestResult::labelled(TestScore::Good, "absence de sarcopénie")
    }
}

use inpl_core::models::{AnswerRecord, TestResult, TestScore};

/// Upper age bound (exclusive) and pulse wave velocity limit in m/s.
const RIGIDITY_LIMITS: [(f64, f64); 5] = [
    (30.0, 7.1),
    (40.0, 8.0),
    (50.0, 8.6),
    (60.0, 10.0),
    (70.0, 13.1),
];
const RIGIDITY_LIMIT_70_PLUS: f64 = 14.6;

/// Resting systolic pressure; the control measurement wins when taken.
pub fn systolic_pressure(answers: &AnswerRecord) -> Option<f64> {
    answers.cardio.explcv2b.or(answers.cardio.explcv2)
}

/// Resting diastolic pressure; the control measurement wins when taken.
pub fn diastolic_pressure(answers: &AnswerRecord) -> Option<f64> {
    answers.cardio.explcv3b.or(answers.cardio.explcv3)
}

pub fn cardio_orthostatic_hypotension(answers: &AnswerRecord) -> TestResult {
    let cardio = &answers.cardio;
    let (
        Some(systolic),
        Some(diastolic),
        Some(standing_systolic_1),
        Some(standing_diastolic_1),
        Some(standing_systolic_3),
        Some(standing_diastolic_3),
    ) = (
        systolic_pressure(answers),
        diastolic_pressure(answers),
        cardio.constantes_explcv8,
        cardio.constantes_explcv9,
        cardio.constantes_explcv11,
        cardio.constantes_explcv12,
    )
    else {
        return TestResult::unknown();
    };

    let lowest_systolic = standing_systolic_1.min(standing_systolic_3);
    let lowest_diastolic = standing_diastolic_1.min(standing_diastolic_3);

    if systolic - lowest_systolic >= 20.0 || diastolic - lowest_diastolic >= 10.0 {
        TestResult::labelled(TestScore::Bad, "hypotension orthostatique")
    } else {
        TestResult::labelled(TestScore::Good, "absence d'hypotension orthostatique")
    }
}

fn pulse_wave_velocity_limit(age: f64) -> f64 {
    RIGIDITY_LIMITS
        .iter()
        .find(|(upper_age, _)| age < *upper_age)
        .map_or(RIGIDITY_LIMIT_70_PLUS, |(_, limit)| *limit)
}

pub fn cardio_rigidity(answers: &AnswerRecord) -> TestResult {
    let (Some(age), Some(velocity)) = (answers.demographics.rdv_age, answers.cardio.explcv17)
    else {
        return TestResult::unknown();
    };

    // A reading taken during hypertension says nothing about rigidity.
    let hypertensive = systolic_pressure(answers).is_some_and(|p| p >= 140.0)
        || diastolic_pressure(answers).is_some_and(|p| p >= 90.0);

    if hypertensive {
        TestResult::labelled(TestScore::Bad, "non pertinent car HTA lors de l'examen")
    } else if velocity >= pulse_wave_velocity_limit(age) {
        TestResult::labelled(
            TestScore::Fragile,
            "rigidité artérielle anormalement élevée avec risque de développer une HTA dans l’avenir",
        )
    } else {
        TestResult::labelled(
            TestScore::Good,
            "absence de rigidité artérielle (VOP dans les normes)",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_limit_follows_age_bands() {
        assert_eq!(pulse_wave_velocity_limit(29.0), 7.1);
        assert_eq!(pulse_wave_velocity_limit(30.0), 8.0);
        assert_eq!(pulse_wave_velocity_limit(59.9), 10.0);
        assert_eq!(pulse_wave_velocity_limit(69.0), 13.1);
        assert_eq!(pulse_wave_velocity_limit(70.0), 14.6);
        assert_eq!(pulse_wave_velocity_limit(95.0), 14.6);
    }
}

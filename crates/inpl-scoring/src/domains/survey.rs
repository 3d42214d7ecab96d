use inpl_core::models::AnswerRecord;

const EPICES_INTERCEPT: f64 = 75.14;

/// EPICES deprivation score (0 = least deprived, 100 = most deprived).
///
/// Unknown unless all eleven items are answered. Rounded to two decimals.
pub fn epices_score(answers: &AnswerRecord) -> Option<f64> {
    let survey = &answers.survey;
    let weighted = [
        (survey.aq1_seco4, 10.06),
        (survey.aq1_seco7, -11.83),
        (survey.aq1_seco10, -8.28),
        (survey.aq1_seco2, -8.28),
        (survey.aq1_seco3, 14.8),
        (survey.aq1_lois2, -6.51),
        (survey.aq1_lois3, -7.1),
        (survey.aq1_lois4, -7.1),
        (survey.aq1_integsoc2, -9.47),
        (survey.aq1_integsoc3, -9.47),
        (survey.aq1_integsoc4, -7.1),
    ];

    let mut score = 0.0;
    for (answer, weight) in weighted {
        if answer? {
            score += weight;
        }
    }

    Some(round_to(score + EPICES_INTERCEPT, 2))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

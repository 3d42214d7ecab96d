use inpl_core::models::{AnswerRecord, TestResult, TestScore};

fn hearing_result(loss_db: Option<f64>) -> TestResult {
    let Some(loss) = loss_db else {
        return TestResult::unknown();
    };

    match loss {
        l if l >= 90.0 => TestResult::labelled(TestScore::Bad, "perte auditive profonde"),
        l if l >= 70.0 => TestResult::labelled(TestScore::Bad, "perte auditive sévère"),
        l if l >= 40.0 => TestResult::labelled(TestScore::Bad, "perte auditive moyenne"),
        l if l >= 20.0 => TestResult::labelled(TestScore::Fragile, "perte auditive légère"),
        _ => TestResult::labelled(TestScore::Good, "audition normale"),
    }
}

pub fn surdity_left(answers: &AnswerRecord) -> TestResult {
    hearing_result(answers.audition.perte_tonale_gauche)
}

pub fn surdity_right(answers: &AnswerRecord) -> TestResult {
    hearing_result(answers.audition.perte_tonale_droite)
}

//! Physical activity and motor performance (EMS section).

use inpl_core::models::{AnswerRecord, PhysicalActivity, Sex, TestResult, TestScore};

use super::densitometry::low_muscle_mass;

/// Seven hours of sitting per day.
const SEDENTARY_MINUTES: f64 = 7.0 * 60.0;

/// Weekly activity points needed to count as active.
const ACTIVE_POINTS: u32 = 4;

/// Points earned by one declared activity: vigorous sessions of 20 min or
/// more, or moderate sessions of 30 min or more, weighted by weekly
/// frequency.
fn activity_points(activity: &PhysicalActivity) -> u32 {
    let (Some(intensity), Some(duration), Some(frequency)) = (
        activity.intensity,
        activity.duration_minutes,
        activity.sessions_per_week,
    ) else {
        return 0;
    };

    if intensity == 3.0 && duration >= 20.0 {
        match frequency {
            f if f >= 3.0 => 4,
            f if f >= 1.0 => 2,
            _ => 0,
        }
    } else if intensity == 2.0 && duration >= 30.0 {
        match frequency {
            f if f >= 5.0 => 4,
            f if f >= 3.0 => 2,
            f if f >= 1.0 => 1,
            _ => 0,
        }
    } else {
        0
    }
}

pub fn ems_mobility(answers: &AnswerRecord) -> TestResult {
    let motor = &answers.motor;
    let (Some(_), Some(sitting), Some(sits_two_hours)) = (
        motor.ems_pratique_activites,
        motor.ems_temps_assis_jour,
        motor.ems_assis_2h_continu,
    ) else {
        return TestResult::unknown();
    };

    let sedentary = sitting >= SEDENTARY_MINUTES || sits_two_hours;
    let points: u32 = motor.activities.iter().map(activity_points).sum();

    if points < ACTIVE_POINTS || sedentary {
        TestResult::scored(TestScore::Fragile)
    } else {
        TestResult::scored(TestScore::Good)
    }
}

pub fn ems_strength(answers: &AnswerRecord) -> TestResult {
    let (Some(sex), Some(handgrip), Some(muscle_index), Some(gait_speed)) = (
        answers.demographics.consultant_sexe,
        answers.motor.ems_test_handgrip,
        answers.densitometry.demo_dxa_indice_mm,
        answers.motor.ems_test_vit4m,
    ) else {
        return TestResult::unknown();
    };

    let weak_grip = match sex {
        Sex::Male => 27.0,
        Sex::Female => 16.0,
    };

    if gait_speed <= 0.8 {
        TestResult::scored(TestScore::Bad)
    } else if handgrip < weak_grip || low_muscle_mass(sex, muscle_index) {
        TestResult::scored(TestScore::Fragile)
    } else {
        TestResult::scored(TestScore::Good)
    }
}

/// The balance test changed with the 2019 questionnaire. Whichever field
/// is filled tells which protocol the subject went through.
enum BalanceProtocol {
    /// Get-up-and-go grade (2019+).
    GetUp(f64),
    /// Timed up-and-go in seconds (2018).
    TimedUpAndGo(f64),
}

pub fn ems_fracture_risk(answers: &AnswerRecord) -> TestResult {
    let motor = &answers.motor;
    let protocol = match (motor.ems_test_getup, motor.ems_test_timeup) {
        (Some(grade), _) => BalanceProtocol::GetUp(grade),
        (None, Some(seconds)) => BalanceProtocol::TimedUpAndGo(seconds),
        (None, None) => return TestResult::unknown(),
    };
    let (Some(unipodal), Some(spine), Some(neck)) = (
        motor.ems_test_unipod,
        answers.densitometry.demo_dmo_rachis,
        answers.densitometry.demo_dmo_col,
    ) else {
        return TestResult::unknown();
    };

    let lowest_t = spine.min(neck);

    let score = match protocol {
        BalanceProtocol::GetUp(grade) => {
            if unipodal < 5.0 || grade >= 3.0 || lowest_t <= -2.5 {
                TestScore::Bad
            } else if unipodal < 30.0 || grade == 2.0 || lowest_t <= -1.0 {
                TestScore::Fragile
            } else {
                TestScore::Good
            }
        }
        BalanceProtocol::TimedUpAndGo(seconds) => {
            if unipodal < 5.0 || seconds >= 14.0 || lowest_t <= -2.5 {
                TestScore::Bad
            } else if unipodal < 30.0 || lowest_t <= -1.0 {
                TestScore::Fragile
            } else {
                TestScore::Good
            }
        }
    };

    TestResult::scored(score)
}

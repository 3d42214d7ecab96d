mod common;

use common::{answers, with};
use inpl_core::models::TestScore;
use inpl_scoring::domains::motor::{ems_fracture_risk, ems_mobility, ems_strength};
use serde_json::json;

#[test]
fn strength_grip_threshold_differs_by_sex() {
    let male = answers(json!({
        "consultant_sexe": "M",
        "ems_test_vit4m": 0.9,
        "ems_test_handgrip": 26,
        "demo_dxa_indice_mm": 8,
    }));
    let female = answers(json!({
        "consultant_sexe": "F",
        "ems_test_vit4m": 0.9,
        "ems_test_handgrip": 15,
        "demo_dxa_indice_mm": 8,
    }));
    let strong_female = answers(json!({
        "consultant_sexe": "F",
        "ems_test_vit4m": 0.9,
        "ems_test_handgrip": 26,
        "demo_dxa_indice_mm": 8,
    }));

    assert_eq!(ems_strength(&male).score, Some(TestScore::Fragile));
    assert_eq!(ems_strength(&female).score, Some(TestScore::Fragile));
    assert_eq!(ems_strength(&strong_female).score, Some(TestScore::Good));
}

#[test]
fn slow_gait_is_bad_whatever_the_grip() {
    let record = answers(json!({
        "consultant_sexe": "M",
        "ems_test_vit4m": 0.8,
        "ems_test_handgrip": 45,
        "demo_dxa_indice_mm": 9,
    }));

    let result = ems_strength(&record);
    assert_eq!(result.score, Some(TestScore::Bad));
    assert_eq!(result.text, None);
}

#[test]
fn strength_flags_low_muscle_mass() {
    let record = answers(json!({
        "consultant_sexe": "M",
        "ems_test_vit4m": 1.2,
        "ems_test_handgrip": 40,
        "demo_dxa_indice_mm": 7.2,
    }));

    assert_eq!(ems_strength(&record).score, Some(TestScore::Fragile));
}

#[test]
fn strength_needs_every_measure() {
    let record = answers(json!({
        "consultant_sexe": "M",
        "ems_test_handgrip": 40,
        "demo_dxa_indice_mm": 9,
    }));

    assert!(ems_strength(&record).is_unknown());
}

fn active_base() -> serde_json::Value {
    json!({
        "ems_pratique_activites": 1,
        "ems_temps_assis_jour": 300,
        "ems_assis_2h_continu": 0,
    })
}

#[test]
fn one_vigorous_activity_three_times_a_week_is_enough() {
    let record = answers(with(
        active_base(),
        json!({
            "ems_act1": "running",
            "ems_act1_intensite": 3,
            "ems_act1_temps": 30,
            "ems_act1_freq": 3,
        }),
    ));

    assert_eq!(ems_mobility(&record).score, Some(TestScore::Good));
}

#[test]
fn moderate_activities_add_up() {
    let one = with(
        active_base(),
        json!({
            "ems_act1": "walking",
            "ems_act1_intensite": 2,
            "ems_act1_temps": 30,
            "ems_act1_freq": 3,
        }),
    );
    let two = with(
        one.clone(),
        json!({
            "ems_act4": "swimming",
            "ems_act4_intensite": 2,
            "ems_act4_temps": 45,
            "ems_act4_freq": 4,
        }),
    );

    assert_eq!(ems_mobility(&answers(one)).score, Some(TestScore::Fragile));
    assert_eq!(ems_mobility(&answers(two)).score, Some(TestScore::Good));
}

#[test]
fn empty_activity_rows_are_ignored() {
    let record = answers(with(
        active_base(),
        json!({
            "ems_act1": null,
            "ems_act1_intensite": 3,
            "ems_act1_temps": 60,
            "ems_act1_freq": 5,
        }),
    ));

    assert_eq!(ems_mobility(&record).score, Some(TestScore::Fragile));
}

#[test]
fn sitting_seven_hours_is_sedentary() {
    let record = answers(json!({
        "ems_pratique_activites": true,
        "ems_temps_assis_jour": 420,
        "ems_assis_2h_continu": false,
        "ems_act1": "cycling",
        "ems_act1_intensite": 3,
        "ems_act1_temps": 60,
        "ems_act1_freq": 4,
    }));

    assert_eq!(ems_mobility(&record).score, Some(TestScore::Fragile));
}

#[test]
fn mobility_needs_the_sedentary_questions() {
    let record = answers(json!({ "ems_pratique_activites": 1, "ems_temps_assis_jour": 100 }));

    assert!(ems_mobility(&record).is_unknown());
}

fn balance(overrides: serde_json::Value) -> inpl_core::models::TestResult {
    let base = json!({
        "ems_test_unipod": 40,
        "demo_dmo_rachis": -0.5,
        "demo_dmo_col": -0.8,
    });
    ems_fracture_risk(&answers(with(base, overrides)))
}

#[test]
fn current_protocol_grades_get_up_test() {
    assert_eq!(balance(json!({ "ems_test_getup": 1 })).score, Some(TestScore::Good));
    assert_eq!(balance(json!({ "ems_test_getup": 2 })).score, Some(TestScore::Fragile));
    assert_eq!(balance(json!({ "ems_test_getup": 3 })).score, Some(TestScore::Bad));
}

#[test]
fn legacy_protocol_uses_timed_up_and_go() {
    assert_eq!(balance(json!({ "ems_test_timeup": 10 })).score, Some(TestScore::Good));
    assert_eq!(balance(json!({ "ems_test_timeup": 14 })).score, Some(TestScore::Bad));
    assert_eq!(
        balance(json!({ "ems_test_timeup": 10, "ems_test_unipod": 20 })).score,
        Some(TestScore::Fragile)
    );
}

#[test]
fn get_up_grade_takes_precedence_over_timed_test() {
    let result = balance(json!({ "ems_test_getup": 1, "ems_test_timeup": 20 }));

    assert_eq!(result.score, Some(TestScore::Good));
}

#[test]
fn fracture_risk_uses_lowest_t_score() {
    assert_eq!(
        balance(json!({ "ems_test_getup": 1, "demo_dmo_col": -2.5 })).score,
        Some(TestScore::Bad)
    );
    assert_eq!(
        balance(json!({ "ems_test_timeup": 8, "demo_dmo_rachis": -1.0 })).score,
        Some(TestScore::Fragile)
    );
}

#[test]
fn fracture_risk_needs_a_balance_protocol() {
    assert!(balance(json!({})).is_unknown());
    assert!(balance(json!({ "ems_test_getup": 1, "demo_dmo_col": null })).is_unknown());
}

mod common;

use common::{answers, typical_battery, with};
use inpl_core::models::{TestResult, TestScore};
use inpl_scoring::domains::neuropsy::{
    neuro_attention, neuro_depression_anxiety, neuro_efficiency, neuro_execution, neuro_memory,
    neuro_sleep,
};
use inpl_scoring::norms::{Metric, NormativeTable};
use serde_json::{Value, json};

fn norms() -> &'static NormativeTable {
    NormativeTable::embedded()
}

fn battery(overrides: Value) -> inpl_core::models::AnswerRecord {
    answers(with(typical_battery(), overrides))
}

#[test]
fn typical_battery_is_within_norms() {
    let record = battery(json!({}));
    let robust = TestResult::labelled(TestScore::Good, "dans les normes (robuste)");

    assert_eq!(neuro_efficiency(&record, norms()), robust);
    assert_eq!(neuro_memory(&record, norms()), robust);
    assert_eq!(neuro_execution(&record, norms()), robust);
    assert_eq!(neuro_attention(&record, norms()), robust);
}

#[test]
fn efficiency_compares_moca_to_stratum() {
    // Age 70, level 2: c5 = 22, c50 = 27.
    assert_eq!(
        neuro_efficiency(&battery(json!({ "neuropsy_moca": 22 })), norms()),
        TestResult::labelled(TestScore::Bad, "en dehors des normes (pathologique)")
    );
    assert_eq!(
        neuro_efficiency(&battery(json!({ "neuropsy_moca": 26 })), norms()),
        TestResult::labelled(TestScore::Fragile, "dans les limites des normes (fragilité)")
    );
    assert_eq!(
        neuro_efficiency(&battery(json!({ "neuropsy_moca": 27 })), norms()).score,
        Some(TestScore::Good)
    );
}

#[test]
fn memory_fails_on_either_recall() {
    assert_eq!(
        neuro_memory(&battery(json!({ "neuropsy_rl": 19.4 })), norms()).score,
        Some(TestScore::Bad)
    );
    assert_eq!(
        neuro_memory(&battery(json!({ "neuropsy_rt": 45 })), norms()).score,
        Some(TestScore::Fragile)
    );
    assert!(neuro_memory(&battery(json!({ "neuropsy_rt": null })), norms()).is_unknown());
}

#[test]
fn execution_needs_two_median_failures_to_be_fragile() {
    let one = battery(json!({ "neuropsy_tmtb": 118 }));
    let two = battery(json!({ "neuropsy_tmtb": 118, "neuropsy_slc": 7 }));

    assert_eq!(neuro_execution(&one, norms()).score, Some(TestScore::Good));
    assert_eq!(neuro_execution(&two, norms()).score, Some(TestScore::Fragile));
}

#[test]
fn execution_is_bad_on_any_fifth_percentile_failure() {
    let slow = battery(json!({ "neuropsy_interf": 197 }));
    let fluency = battery(json!({ "neuropsy_p": 14 }));

    assert_eq!(neuro_execution(&slow, norms()).score, Some(TestScore::Bad));
    assert_eq!(neuro_execution(&fluency, norms()).score, Some(TestScore::Bad));
}

#[test]
fn execution_tolerates_two_missing_metrics() {
    let two_missing = battery(json!({ "neuropsy_tmtb": null, "neuropsy_interf": null }));
    let three_missing = battery(json!({
        "neuropsy_tmtb": null,
        "neuropsy_interf": null,
        "neuropsy_slc": null,
    }));

    assert_eq!(
        neuro_execution(&two_missing, norms()).score,
        Some(TestScore::Good)
    );
    assert!(neuro_execution(&three_missing, norms()).is_unknown());
}

#[test]
fn attention_mixes_both_comparison_directions() {
    let fragile = battery(json!({ "neuropsy_tmta": 51, "neuropsy_deno": 71 }));
    let bad = battery(json!({ "neuropsy_code": 25 }));
    let missing = battery(json!({
        "neuropsy_code": null,
        "neuropsy_tmta": null,
        "neuropsy_lecture": null,
    }));

    assert_eq!(neuro_attention(&fragile, norms()).score, Some(TestScore::Fragile));
    assert_eq!(neuro_attention(&bad, norms()).score, Some(TestScore::Bad));
    assert!(neuro_attention(&missing, norms()).is_unknown());
}

#[test]
fn ages_beyond_the_table_reuse_boundary_norms() {
    let table = norms();
    assert_eq!(table.entry(150.0, 1), table.entry(100.0, 1));
    assert_eq!(table.entry(20.0, 3), table.entry(40.0, 3));
    assert_ne!(table.entry(40.0, 1), table.entry(70.0, 2));

    // Age 100, level 1: MoCA c5 = 20.4.
    let centenarian = answers(json!({ "rdv_age": 150, "neuropsy_nsc": 1, "neuropsy_moca": 20 }));
    assert_eq!(
        neuro_efficiency(&centenarian, table).score,
        Some(TestScore::Bad)
    );
    assert_eq!(
        table.entry(150.0, 1).map(|e| e.metric(Metric::Moca).c5),
        Some(20.4)
    );
}

#[test]
fn missing_stratum_gives_unknown() {
    let unknown_level = battery(json!({ "neuropsy_nsc": 4 }));
    let fractional_age = battery(json!({ "rdv_age": 70.5 }));
    let empty = NormativeTable::default();

    assert!(neuro_efficiency(&unknown_level, norms()).is_unknown());
    assert!(neuro_attention(&fractional_age, norms()).is_unknown());
    assert!(neuro_memory(&battery(json!({})), &empty).is_unknown());
}

fn had(anxiety: [u8; 7], depression: [u8; 7]) -> Value {
    let mut record = serde_json::Map::new();
    for (i, (a, d)) in anxiety.iter().zip(depression.iter()).enumerate() {
        record.insert(format!("aq1_had{}", 2 * i + 1), json!(a));
        record.insert(format!("aq1_had{}", 2 * i + 2), json!(d));
    }
    Value::Object(record)
}

#[test]
fn had_subscales_are_scored_separately() {
    let anxious = answers(had([3, 2, 2, 1, 1, 1, 1], [0; 7]));
    let low_mood = answers(had([0; 7], [2, 1, 1, 1, 1, 1, 1]));
    let calm = answers(had([1; 7], [1; 7]));

    assert_eq!(
        neuro_depression_anxiety(&anxious),
        TestResult::labelled(TestScore::Bad, "thymie ou anxiété pathologique")
    );
    assert_eq!(
        neuro_depression_anxiety(&low_mood),
        TestResult::labelled(TestScore::Fragile, "thymie fragile ou anxiété")
    );
    assert_eq!(neuro_depression_anxiety(&calm).score, Some(TestScore::Good));
}

#[test]
fn had_needs_all_fourteen_items() {
    let incomplete = answers(with(had([0; 7], [0; 7]), json!({ "aq1_had14": null })));

    assert!(neuro_depression_anxiety(&incomplete).is_unknown());
}

#[test]
fn sleep_complaint_is_fragile() {
    let quiet = answers(json!({ "aq1_som1": [0, 0, 0], "neuropsy_plainte_som": 0 }));
    let checklist = answers(json!({ "aq1_som1": [0, 2, 0], "neuropsy_plainte_som": 0 }));
    let complaint = answers(json!({ "aq1_som1": [], "neuropsy_plainte_som": 1 }));

    assert_eq!(
        neuro_sleep(&quiet),
        TestResult::labelled(TestScore::Good, "sommeil normal")
    );
    assert_eq!(
        neuro_sleep(&checklist),
        TestResult::labelled(TestScore::Fragile, "sommeil fragile")
    );
    assert_eq!(neuro_sleep(&complaint).score, Some(TestScore::Fragile));
}

#[test]
fn sleep_is_never_pathological() {
    let worst = answers(json!({ "aq1_som1": [3, 3, 3, 3], "neuropsy_plainte_som": 1 }));

    assert_ne!(neuro_sleep(&worst).score, Some(TestScore::Bad));
    assert!(neuro_sleep(&answers(json!({ "neuropsy_plainte_som": 1 }))).is_unknown());
}

#[test]
fn decimal_education_level_reaches_its_stratum() {
    let decimal = battery(json!({ "neuropsy_nsc": 2.0, "neuropsy_moca": 26 }));
    let between = battery(json!({ "neuropsy_nsc": 2.5 }));

    assert_eq!(neuro_efficiency(&decimal, norms()).score, Some(TestScore::Fragile));
    assert!(neuro_efficiency(&between, norms()).is_unknown());
    assert!(neuro_execution(&between, norms()).is_unknown());
}

#[test]
fn had_items_may_be_decimal() {
    let mut record = had([3, 2, 2, 1, 1, 1, 1], [0; 7]);
    record["aq1_had1"] = json!(3.0);

    assert_eq!(
        neuro_depression_anxiety(&answers(record)).score,
        Some(TestScore::Bad)
    );
}

#[test]
fn unanswered_checklist_entries_are_not_complaints() {
    let gaps = answers(json!({ "aq1_som1": [0, null, 0], "neuropsy_plainte_som": 0 }));
    let gaps_and_complaint = answers(json!({ "aq1_som1": [null, 2], "neuropsy_plainte_som": 0 }));

    assert_eq!(neuro_sleep(&gaps).score, Some(TestScore::Good));
    assert_eq!(neuro_sleep(&gaps_and_complaint).score, Some(TestScore::Fragile));
}

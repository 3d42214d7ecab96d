#![allow(dead_code)]

use inpl_core::models::AnswerRecord;
use serde_json::{Value, json};

pub fn answers(value: Value) -> AnswerRecord {
    AnswerRecord::from_json(value).expect("valid answer record")
}

/// A 70-year-old with education level 2 and a battery that sits on the
/// right side of every median for that stratum.
pub fn typical_battery() -> Value {
    json!({
        "rdv_age": 70,
        "neuropsy_nsc": 2,
        "neuropsy_moca": 28,
        "neuropsy_rl": 31,
        "neuropsy_rt": 47,
        "neuropsy_tmtb": 100,
        "neuropsy_interf": 120,
        "neuropsy_slc": 9,
        "neuropsy_animx": 21,
        "neuropsy_p": 15,
        "neuropsy_code": 45,
        "neuropsy_tmta": 40,
        "neuropsy_lecture": 40,
        "neuropsy_deno": 60,
    })
}

/// `base` with the given keys replaced.
pub fn with(mut base: Value, overrides: Value) -> Value {
    if let (Some(target), Some(source)) = (base.as_object_mut(), overrides.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    base
}

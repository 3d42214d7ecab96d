use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::lenient::value_as_number;

/// Number of physical activity rows on the EMS questionnaire
/// (`ems_act1` … `ems_act10`).
pub const ACTIVITY_SLOTS: u8 = 10;

/// One declared physical activity. Only filled rows are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalActivity {
    pub slot: u8,
    /// 1 = light, 2 = moderate, 3 = vigorous (`ems_actN_intensite`).
    pub intensity: Option<f64>,
    /// Minutes per session (`ems_actN_temps`).
    pub duration_minutes: Option<f64>,
    /// Sessions per week (`ems_actN_freq`).
    pub sessions_per_week: Option<f64>,
}

/// Collects the `ems_actN*` keys of a flattened answer record.
pub(crate) fn slots<'de, D>(deserializer: D) -> Result<Vec<PhysicalActivity>, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = BTreeMap::<String, Value>::deserialize(deserializer)?;
    let number = |key: String| fields.get(&key).and_then(value_as_number);

    let activities = (1..=ACTIVITY_SLOTS)
        .filter(|slot| {
            fields
                .get(&format!("ems_act{slot}"))
                .is_some_and(|value| !value.is_null())
        })
        .map(|slot| PhysicalActivity {
            slot,
            intensity: number(format!("ems_act{slot}_intensite")),
            duration_minutes: number(format!("ems_act{slot}_temps")),
            sessions_per_week: number(format!("ems_act{slot}_freq")),
        })
        .collect();

    Ok(activities)
}

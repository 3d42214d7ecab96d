//! The answer record: one subject's questionnaire responses and
//! demographic covariates, as submitted by the form layer.
//!
//! Field names are the form keys verbatim. They are grouped by
//! questionnaire section, and every section is flattened back into the
//! single flat record on deserialization. A missing key and an explicit
//! `null` both read as `None`; keys no section knows about are ignored.

use serde::Deserialize;

use crate::error::CoreError;
use crate::lenient;
use crate::models::activity::{self, PhysicalActivity};
use crate::models::sex::Sex;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerRecord {
    #[serde(flatten)]
    pub demographics: Demographics,
    #[serde(flatten)]
    pub survey: Survey,
    #[serde(flatten)]
    pub densitometry: Densitometry,
    #[serde(flatten)]
    pub motor: Motor,
    #[serde(flatten)]
    pub cardio: Cardio,
    #[serde(flatten)]
    pub audition: Audition,
    #[serde(flatten)]
    pub spirometry: Spirometry,
    #[serde(flatten)]
    pub neuropsy: Neuropsy,
    #[serde(flatten)]
    pub mood: Mood,
    #[serde(flatten)]
    pub sleep: Sleep,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

impl AnswerRecord {
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        // Checked before the serde pass so the category error keeps its type.
        if let Some(code) = value.get(Sex::FIELD).and_then(serde_json::Value::as_str) {
            code.parse::<Sex>()?;
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, CoreError> {
        Self::from_json(serde_json::from_str(s)?)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Demographics {
    /// Age in whole years at the appointment.
    pub rdv_age: Option<f64>,
    pub consultant_sexe: Option<Sex>,
}

/// EPICES deprivation questionnaire items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Survey {
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_seco2: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_seco3: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_seco4: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_seco7: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_seco10: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_lois2: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_lois3: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_lois4: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_integsoc2: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_integsoc3: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub aq1_integsoc4: Option<bool>,
}

/// Bone densitometry T-scores and DXA body composition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Densitometry {
    pub demo_dmo_rachis: Option<f64>,
    pub demo_dmo_col: Option<f64>,
    pub demo_dmo_hanche: Option<f64>,
    pub demo_dmo_avb1: Option<f64>,
    /// Appendicular skeletal muscle mass index (kg/m²).
    pub demo_dxa_indice_mm: Option<f64>,
}

/// Physical activity questionnaire and motor performance tests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Motor {
    #[serde(deserialize_with = "lenient::flag")]
    pub ems_pratique_activites: Option<bool>,
    /// Daily sitting time in minutes.
    pub ems_temps_assis_jour: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub ems_assis_2h_continu: Option<bool>,
    #[serde(flatten, deserialize_with = "activity::slots")]
    pub activities: Vec<PhysicalActivity>,
    /// Grip strength in kg.
    pub ems_test_handgrip: Option<f64>,
    /// Gait speed over 4 m, in m/s.
    pub ems_test_vit4m: Option<f64>,
    /// Unipodal stance duration in seconds.
    pub ems_test_unipod: Option<f64>,
    /// Timed up-and-go in seconds (2018 protocol).
    pub ems_test_timeup: Option<f64>,
    /// Get-up-and-go grade (2019+ protocol).
    pub ems_test_getup: Option<f64>,
}

/// Blood pressure and arterial measurements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Cardio {
    pub explcv2: Option<f64>,
    pub explcv2b: Option<f64>,
    pub explcv3: Option<f64>,
    pub explcv3b: Option<f64>,
    pub constantes_explcv8: Option<f64>,
    pub constantes_explcv9: Option<f64>,
    pub constantes_explcv11: Option<f64>,
    pub constantes_explcv12: Option<f64>,
    /// Pulse wave velocity (m/s).
    pub explcv17: Option<f64>,
}

/// Mean tonal hearing loss per ear, in dB.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Audition {
    pub perte_tonale_gauche: Option<f64>,
    pub perte_tonale_droite: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Spirometry {
    #[serde(deserialize_with = "lenient::flag")]
    pub respi_spiro_qualite1: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub respi_presence_plateau: Option<bool>,
    pub respi_vems: Option<f64>,
    pub respi_vems_limite: Option<f64>,
    pub respi_cvf: Option<f64>,
    pub respi_cvf_limite: Option<f64>,
    pub respi_def2575: Option<f64>,
    pub respi_def2575_limite: Option<f64>,
}

/// Neuropsychological battery raw scores.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Neuropsy {
    /// Education level (1–3), second half of the normative key.
    #[serde(deserialize_with = "lenient::number")]
    pub neuropsy_nsc: Option<f64>,
    pub neuropsy_moca: Option<f64>,
    pub neuropsy_rl: Option<f64>,
    pub neuropsy_rt: Option<f64>,
    pub neuropsy_p: Option<f64>,
    pub neuropsy_animx: Option<f64>,
    pub neuropsy_tmta: Option<f64>,
    pub neuropsy_tmtb: Option<f64>,
    pub neuropsy_deno: Option<f64>,
    pub neuropsy_lecture: Option<f64>,
    pub neuropsy_interf: Option<f64>,
    pub neuropsy_code: Option<f64>,
    pub neuropsy_slc: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub neuropsy_plainte_som: Option<f64>,
}

/// Hospital Anxiety and Depression scale, items rated 0–3.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Mood {
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had1: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had2: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had3: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had4: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had5: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had6: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had7: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had8: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had9: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had10: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had11: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had12: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had13: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub aq1_had14: Option<f64>,
}

impl Mood {
    /// Items in questionnaire order (item 1 first).
    pub fn items(&self) -> [Option<f64>; 14] {
        [
            self.aq1_had1,
            self.aq1_had2,
            self.aq1_had3,
            self.aq1_had4,
            self.aq1_had5,
            self.aq1_had6,
            self.aq1_had7,
            self.aq1_had8,
            self.aq1_had9,
            self.aq1_had10,
            self.aq1_had11,
            self.aq1_had12,
            self.aq1_had13,
            self.aq1_had14,
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sleep {
    /// Frequency ratings of the sleep complaint checklist. Unanswered
    /// entries are kept as `None`.
    pub aq1_som1: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    /// Weight in kg.
    pub constantes_poids: Option<f64>,
    /// Height in cm.
    pub constantes_taille: Option<f64>,
    /// Estimated weight six months ago, in kg.
    pub diet_poids_estime_6mois: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub diet_diversite_alimentaire: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub diet_apports_proteines: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub diet_apports_calcium: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub diet_tendances_adaptees: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub diet_tendances_inadaptees: Option<f64>,
    /// Serum albumin in g/L.
    pub bio_albuminemie: Option<f64>,
}

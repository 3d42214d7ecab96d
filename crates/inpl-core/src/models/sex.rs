use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Sex as recorded on the consultation form (`consultant_sexe`).
///
/// Several thresholds differ between men and women; no other value has a
/// defined threshold, so anything but `M`/`F` is rejected when the record
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const FIELD: &'static str = "consultant_sexe";

    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Sex::Male),
            "F" => Ok(Sex::Female),
            other => Err(CoreError::UnhandledCategory {
                field: Self::FIELD,
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Sex> for &'static str {
    fn from(sex: Sex) -> Self {
        sex.code()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

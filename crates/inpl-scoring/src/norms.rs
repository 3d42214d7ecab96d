//! Population norms for the neuropsychological battery, stratified by age
//! and education level.
//!
//! The reference table ships as `data/neuro_norms.csv` and is embedded in
//! the binary. An alternative table with the same columns can be loaded
//! with [`NormativeTable::from_path`].

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ScoringError;

const EMBEDDED_NORMS: &str = include_str!("../data/neuro_norms.csv");

pub const MIN_AGE: u16 = 40;
pub const MAX_AGE: u16 = 100;

/// A scored sub-test of the battery. The column prefix in the table is
/// given by [`Metric::column_prefix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Montreal Cognitive Assessment.
    Moca,
    /// Free recall (RL/RI-16).
    FreeRecall,
    /// Total recall (RL/RI-16).
    TotalRecall,
    /// Phonemic fluency, letter P.
    PhonemicFluency,
    /// Category fluency, animals.
    CategoryFluency,
    /// Trail Making Test part A, seconds.
    TrailMakingA,
    /// Trail Making Test part B, seconds.
    TrailMakingB,
    /// Stroop colour naming, seconds.
    StroopNaming,
    /// Stroop word reading, seconds.
    StroopReading,
    /// Stroop interference, seconds.
    StroopInterference,
    /// Stroop interference minus naming, seconds.
    StroopInterferenceIndex,
    /// Digit symbol coding.
    DigitSymbol,
    /// Letter-number sequencing.
    LetterNumberSequence,
}

impl Metric {
    pub const ALL: [Metric; 13] = [
        Metric::Moca,
        Metric::FreeRecall,
        Metric::TotalRecall,
        Metric::PhonemicFluency,
        Metric::CategoryFluency,
        Metric::TrailMakingA,
        Metric::TrailMakingB,
        Metric::StroopNaming,
        Metric::StroopReading,
        Metric::StroopInterference,
        Metric::StroopInterferenceIndex,
        Metric::DigitSymbol,
        Metric::LetterNumberSequence,
    ];

    pub fn column_prefix(self) -> &'static str {
        match self {
            Metric::Moca => "moca",
            Metric::FreeRecall => "rl",
            Metric::TotalRecall => "rt",
            Metric::PhonemicFluency => "p",
            Metric::CategoryFluency => "animx",
            Metric::TrailMakingA => "tmta",
            Metric::TrailMakingB => "tmtb",
            Metric::StroopNaming => "deno",
            Metric::StroopReading => "lecture",
            Metric::StroopInterference => "interf",
            Metric::StroopInterferenceIndex => "int_deno",
            Metric::DigitSymbol => "code",
            Metric::LetterNumberSequence => "slc",
        }
    }
}

/// Reference points of one metric for one stratum. `mean`/`sd` are not
/// published for every metric; the cutoffs always are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricNorms {
    pub mean: Option<f64>,
    pub sd: Option<f64>,
    /// 50th percentile cutoff.
    pub c50: f64,
    /// 5th percentile cutoff.
    pub c5: f64,
}

/// All metric norms for one (age, education level) stratum.
#[derive(Debug, Clone, PartialEq)]
pub struct NormativeEntry {
    // Aligned with `Metric::ALL`.
    metrics: Vec<MetricNorms>,
}

impl NormativeEntry {
    pub fn metric(&self, metric: Metric) -> &MetricNorms {
        &self.metrics[metric as usize]
    }
}

/// Lookup key: `age * 10 + education_level`, with age clamped to
/// [`MIN_AGE`, `MAX_AGE`] so subjects outside the band reuse the boundary
/// norms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormativeKey(u16);

impl NormativeKey {
    /// Returns `None` when no key can exist for these inputs: a fractional
    /// age, or an education level that is not a single digit.
    pub fn new(age: f64, education_level: u8) -> Option<Self> {
        let age = age.clamp(f64::from(MIN_AGE), f64::from(MAX_AGE));
        if age.fract() != 0.0 || education_level > 9 {
            return None;
        }
        Some(Self(age as u16 * 10 + u16::from(education_level)))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

static EMBEDDED: LazyLock<NormativeTable> = LazyLock::new(|| {
    NormativeTable::from_reader(EMBEDDED_NORMS.as_bytes())
        .expect("embedded normative table is well-formed")
});

#[derive(Debug, Clone, Default)]
pub struct NormativeTable {
    entries: BTreeMap<NormativeKey, NormativeEntry>,
}

impl NormativeTable {
    /// The reference table shipped with the crate.
    pub fn embedded() -> &'static NormativeTable {
        &EMBEDDED
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        let table = Self::from_reader(File::open(path)?)?;
        info!(path = %path.display(), entries = table.len(), "loaded normative table");
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScoringError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = Columns::resolve(csv_reader.headers()?)?;
        let mut entries = BTreeMap::new();

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let (key, entry) = columns.parse_row(&record, line)?;
            if entries.insert(key, entry).is_some() {
                return Err(ScoringError::InvalidNorms {
                    line,
                    message: format!("duplicate stratum {}", key.value()),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Norms for a subject, or `None` when the table has no matching
    /// stratum.
    pub fn entry(&self, age: f64, education_level: u8) -> Option<&NormativeEntry> {
        let found = NormativeKey::new(age, education_level).and_then(|key| self.get(key));
        if found.is_none() {
            debug!(age, education_level, "no normative data for subject");
        }
        found
    }

    pub fn get(&self, key: NormativeKey) -> Option<&NormativeEntry> {
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct MetricColumns {
    mean: Option<usize>,
    sd: Option<usize>,
    c50: usize,
    c5: usize,
}

struct Columns {
    age: usize,
    education_level: usize,
    metrics: Vec<MetricColumns>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, ScoringError> {
        let index: HashMap<&str, usize> = headers.iter().enumerate().map(|(i, h)| (h, i)).collect();
        let required = |name: &str| {
            index.get(name).copied().ok_or_else(|| ScoringError::InvalidNorms {
                line: 1,
                message: format!("missing column '{name}'"),
            })
        };

        let metrics = Metric::ALL
            .iter()
            .map(|metric| -> Result<MetricColumns, ScoringError> {
                let prefix = metric.column_prefix();
                Ok(MetricColumns {
                    mean: index.get(format!("{prefix}_mean").as_str()).copied(),
                    sd: index.get(format!("{prefix}_sd").as_str()).copied(),
                    c50: required(&format!("{prefix}_c50"))?,
                    c5: required(&format!("{prefix}_c5"))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            age: required("age")?,
            education_level: required("education_level")?,
            metrics,
        })
    }

    fn parse_row(
        &self,
        record: &csv::StringRecord,
        line: u64,
    ) -> Result<(NormativeKey, NormativeEntry), ScoringError> {
        let invalid = |message: String| ScoringError::InvalidNorms { line, message };
        let cell = |column: usize| record.get(column).unwrap_or("");
        let number = |column: usize| {
            cell(column)
                .parse::<f64>()
                .map_err(|_| invalid(format!("'{}' is not a number", cell(column))))
        };
        let optional = |column: Option<usize>| match column.map(cell) {
            None | Some("") => Ok(None),
            Some(_) => column.map(number).transpose(),
        };

        let age: u16 = cell(self.age)
            .parse()
            .map_err(|_| invalid(format!("invalid age '{}'", cell(self.age))))?;
        let education_level: u8 = cell(self.education_level).parse().map_err(|_| {
            invalid(format!(
                "invalid education level '{}'",
                cell(self.education_level)
            ))
        })?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(invalid(format!(
                "age {age} outside [{MIN_AGE}, {MAX_AGE}]"
            )));
        }
        let key = NormativeKey::new(f64::from(age), education_level)
            .ok_or_else(|| invalid(format!("invalid education level {education_level}")))?;

        let metrics = self
            .metrics
            .iter()
            .map(|columns| -> Result<MetricNorms, ScoringError> {
                Ok(MetricNorms {
                    mean: optional(columns.mean)?,
                    sd: optional(columns.sd)?,
                    c50: number(columns.c50)?,
                    c5: number(columns.c5)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((key, NormativeEntry { metrics }))
    }
}

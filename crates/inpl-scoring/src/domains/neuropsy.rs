//! Neuropsychological battery, mood and sleep.
//!
//! The four cognitive domains compare raw scores against the normative
//! table for the subject's age and education level. A score at or beyond
//! the 5th percentile is pathological; a score on the wrong side of the
//! median is a fragility sign.

use inpl_core::models::{AnswerRecord, TestResult, TestScore};

use crate::norms::{Metric, NormativeEntry, NormativeTable};
use crate::thresholds::{above_50th, above_or_equal_5th, below_50th, below_or_equal_5th};

/// Multi-metric domains are still scored with this many metrics missing.
const MISSING_METRICS_TOLERATED: usize = 2;

/// Median failures needed to call a multi-metric domain fragile.
const FRAGILE_MEDIAN_FAILURES: usize = 2;

/// HAD subscale cutoffs.
const HAD_PATHOLOGICAL: f64 = 11.0;
const HAD_DOUBTFUL: f64 = 8.0;

fn norm_result(score: TestScore) -> TestResult {
    match score {
        TestScore::Bad => TestResult::labelled(score, "en dehors des normes (pathologique)"),
        TestScore::Fragile => {
            TestResult::labelled(score, "dans les limites des normes (fragilité)")
        }
        TestScore::Good => TestResult::labelled(score, "dans les normes (robuste)"),
    }
}

/// A level code that is not a single whole digit matches no stratum.
fn education_level(code: f64) -> Option<u8> {
    (code.fract() == 0.0 && (0.0..=9.0).contains(&code)).then_some(code as u8)
}

fn subject_norms<'a>(answers: &AnswerRecord, norms: &'a NormativeTable) -> Option<&'a NormativeEntry> {
    let age = answers.demographics.rdv_age?;
    let education_level = education_level(answers.neuropsy.neuropsy_nsc?)?;
    norms.entry(age, education_level)
}

fn missing(measures: &[Option<f64>]) -> usize {
    measures.iter().filter(|m| m.is_none()).count()
}

fn failures(checks: &[bool]) -> usize {
    checks.iter().filter(|&&failed| failed).count()
}

/// Any 5th percentile failure is pathological; several median failures
/// make the domain fragile.
fn classify_failures(c5_failures: usize, c50_failures: usize) -> TestScore {
    if c5_failures > 0 {
        TestScore::Bad
    } else if c50_failures >= FRAGILE_MEDIAN_FAILURES {
        TestScore::Fragile
    } else {
        TestScore::Good
    }
}

/// Global efficiency (MoCA).
pub fn neuro_efficiency(answers: &AnswerRecord, norms: &NormativeTable) -> TestResult {
    let moca = answers.neuropsy.neuropsy_moca;
    if moca.is_none() {
        return TestResult::unknown();
    }
    let Some(entry) = subject_norms(answers, norms) else {
        return TestResult::unknown();
    };

    let moca_norms = entry.metric(Metric::Moca);
    let score = if below_or_equal_5th(moca, moca_norms.c5) {
        TestScore::Bad
    } else if below_50th(moca, moca_norms.c50) {
        TestScore::Fragile
    } else {
        TestScore::Good
    };
    norm_result(score)
}

/// Episodic memory (free and total recall).
pub fn neuro_memory(answers: &AnswerRecord, norms: &NormativeTable) -> TestResult {
    let neuropsy = &answers.neuropsy;
    let (free, total) = (neuropsy.neuropsy_rl, neuropsy.neuropsy_rt);
    if missing(&[free, total]) > 0 {
        return TestResult::unknown();
    }
    let Some(entry) = subject_norms(answers, norms) else {
        return TestResult::unknown();
    };

    let free_norms = entry.metric(Metric::FreeRecall);
    let total_norms = entry.metric(Metric::TotalRecall);
    let score = if below_or_equal_5th(free, free_norms.c5)
        || below_or_equal_5th(total, total_norms.c5)
    {
        TestScore::Bad
    } else if below_50th(free, free_norms.c50) || below_50th(total, total_norms.c50) {
        TestScore::Fragile
    } else {
        TestScore::Good
    };
    norm_result(score)
}

/// Executive functions: TMT B, Stroop interference, letter-number
/// sequencing, category and phonemic fluency.
pub fn neuro_execution(answers: &AnswerRecord, norms: &NormativeTable) -> TestResult {
    let neuropsy = &answers.neuropsy;
    let tmtb = neuropsy.neuropsy_tmtb;
    let interference = neuropsy.neuropsy_interf;
    let sequencing = neuropsy.neuropsy_slc;
    let animals = neuropsy.neuropsy_animx;
    let letter_p = neuropsy.neuropsy_p;

    if answers.demographics.rdv_age.is_none()
        || neuropsy.neuropsy_nsc.is_none()
        || missing(&[tmtb, interference, sequencing, animals, letter_p]) > MISSING_METRICS_TOLERATED
    {
        return TestResult::unknown();
    }
    let Some(entry) = subject_norms(answers, norms) else {
        return TestResult::unknown();
    };

    let tmtb_norms = entry.metric(Metric::TrailMakingB);
    let interference_norms = entry.metric(Metric::StroopInterference);
    let sequencing_norms = entry.metric(Metric::LetterNumberSequence);
    let animals_norms = entry.metric(Metric::CategoryFluency);
    let letter_p_norms = entry.metric(Metric::PhonemicFluency);

    let c5_failures = failures(&[
        above_or_equal_5th(tmtb, tmtb_norms.c5),
        above_or_equal_5th(interference, interference_norms.c5),
        below_or_equal_5th(sequencing, sequencing_norms.c5),
        below_or_equal_5th(animals, animals_norms.c5),
        below_or_equal_5th(letter_p, letter_p_norms.c5),
    ]);
    let c50_failures = failures(&[
        above_50th(tmtb, tmtb_norms.c50),
        above_50th(interference, interference_norms.c50),
        below_50th(sequencing, sequencing_norms.c50),
        below_50th(animals, animals_norms.c50),
        below_50th(letter_p, letter_p_norms.c50),
    ]);

    norm_result(classify_failures(c5_failures, c50_failures))
}

/// Attention and processing speed: digit symbol coding, TMT A, Stroop
/// reading and naming.
pub fn neuro_attention(answers: &AnswerRecord, norms: &NormativeTable) -> TestResult {
    let neuropsy = &answers.neuropsy;
    let coding = neuropsy.neuropsy_code;
    let tmta = neuropsy.neuropsy_tmta;
    let reading = neuropsy.neuropsy_lecture;
    let naming = neuropsy.neuropsy_deno;

    if answers.demographics.rdv_age.is_none()
        || neuropsy.neuropsy_nsc.is_none()
        || missing(&[coding, tmta, reading, naming]) > MISSING_METRICS_TOLERATED
    {
        return TestResult::unknown();
    }
    let Some(entry) = subject_norms(answers, norms) else {
        return TestResult::unknown();
    };

    let coding_norms = entry.metric(Metric::DigitSymbol);
    let tmta_norms = entry.metric(Metric::TrailMakingA);
    let reading_norms = entry.metric(Metric::StroopReading);
    let naming_norms = entry.metric(Metric::StroopNaming);

    let c5_failures = failures(&[
        below_or_equal_5th(coding, coding_norms.c5),
        above_or_equal_5th(tmta, tmta_norms.c5),
        above_or_equal_5th(reading, reading_norms.c5),
        above_or_equal_5th(naming, naming_norms.c5),
    ]);
    let c50_failures = failures(&[
        below_50th(coding, coding_norms.c50),
        above_50th(tmta, tmta_norms.c50),
        above_50th(reading, reading_norms.c50),
        above_50th(naming, naming_norms.c50),
    ]);

    norm_result(classify_failures(c5_failures, c50_failures))
}

/// Hospital Anxiety and Depression scale: odd items measure anxiety, even
/// items depression.
pub fn neuro_depression_anxiety(answers: &AnswerRecord) -> TestResult {
    let items = answers.mood.items();
    if items.iter().any(Option::is_none) {
        return TestResult::unknown();
    }

    let subscale = |first: usize| -> f64 { items.iter().skip(first).step_by(2).flatten().sum() };
    let anxiety = subscale(0);
    let depression = subscale(1);

    if anxiety >= HAD_PATHOLOGICAL || depression >= HAD_PATHOLOGICAL {
        TestResult::labelled(TestScore::Bad, "thymie ou anxiété pathologique")
    } else if anxiety >= HAD_DOUBTFUL || depression >= HAD_DOUBTFUL {
        TestResult::labelled(TestScore::Fragile, "thymie fragile ou anxiété")
    } else {
        TestResult::labelled(
            TestScore::Good,
            "absence de trouble thymique ou d'anxiété",
        )
    }
}

pub fn neuro_sleep(answers: &AnswerRecord) -> TestResult {
    let (Some(checklist), Some(complaint)) = (
        answers.sleep.aq1_som1.as_deref(),
        answers.neuropsy.neuropsy_plainte_som,
    ) else {
        return TestResult::unknown();
    };

    // TODO: define which answers make sleep pathological once the clinical
    // team settles on the variables; until then this branch is never taken.
    let pathological = false;
    let complains = checklist
        .iter()
        .flatten()
        .any(|&rating| rating > 0.0)
        || complaint == 1.0;

    if pathological {
        TestResult::labelled(TestScore::Bad, "sommeil pathologique")
    } else if complains {
        TestResult::labelled(TestScore::Fragile, "sommeil fragile")
    } else {
        TestResult::labelled(TestScore::Good, "sommeil normal")
    }
}

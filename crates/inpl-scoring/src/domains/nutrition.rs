use inpl_core::models::{AnswerRecord, TestResult, TestScore};

use super::densitometry::low_muscle_mass;

/// Relative weight change over six months considered significant.
const WEIGHT_CHANGE: f64 = 0.1;

/// Serum albumin (g/L) under which intake is considered deficient.
const HYPOALBUMINEMIA: f64 = 35.0;

const NOT_DIVERSE: &str = "alimentation non diversifiée";
const INSUFFICIENT_DIVERSITY: &str = "diversité alimentaire insuffisante";
const INSUFFICIENT_PROTEIN: &str = "apports protéiques insuffisants";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Subjects aged 65 and over use the geriatric cutoffs.
fn bmi_class(age: f64, bmi: f64) -> BmiClass {
    let (normal, overweight, obese) = if age < 65.0 {
        (18.5, 25.0, 30.0)
    } else {
        (21.0, 28.0, 33.0)
    };

    if bmi < normal {
        BmiClass::Underweight
    } else if bmi < overweight {
        BmiClass::Normal
    } else if bmi < obese {
        BmiClass::Overweight
    } else {
        BmiClass::Obese
    }
}

pub fn nutrition_diversity(answers: &AnswerRecord) -> TestResult {
    let nutrition = &answers.nutrition;
    let (Some(age), Some(diversity), Some(weight), Some(height_cm), Some(weight_6_months)) = (
        answers.demographics.rdv_age,
        nutrition.diet_diversite_alimentaire,
        nutrition.constantes_poids,
        nutrition.constantes_taille,
        nutrition.diet_poids_estime_6mois,
    ) else {
        return TestResult::unknown();
    };

    let relative_weight = weight / weight_6_months - 1.0;
    let bmi = weight / (height_cm / 100.0).powi(2);
    let class = bmi_class(age, bmi);

    let not_diverse = || TestResult::labelled(TestScore::Bad, NOT_DIVERSE);
    let insufficient = || TestResult::labelled(TestScore::Fragile, INSUFFICIENT_DIVERSITY);

    if relative_weight > WEIGHT_CHANGE {
        match class {
            BmiClass::Underweight | BmiClass::Obese => not_diverse(),
            BmiClass::Normal | BmiClass::Overweight => insufficient(),
        }
    } else if relative_weight < -WEIGHT_CHANGE {
        match class {
            BmiClass::Underweight => not_diverse(),
            BmiClass::Normal | BmiClass::Overweight | BmiClass::Obese => insufficient(),
        }
    } else if diversity == 0.0 {
        insufficient()
    } else {
        TestResult::labelled(TestScore::Good, "bonne diversité alimentaire")
    }
}

pub fn nutrition_protein_intake(answers: &AnswerRecord) -> TestResult {
    let (Some(protein), Some(sex), Some(muscle_index), Some(albumin)) = (
        answers.nutrition.diet_apports_proteines,
        answers.demographics.consultant_sexe,
        answers.densitometry.demo_dxa_indice_mm,
        answers.nutrition.bio_albuminemie,
    ) else {
        return TestResult::unknown();
    };

    if albumin < HYPOALBUMINEMIA {
        TestResult::labelled(TestScore::Bad, "hypoalbuminémie")
    } else if protein == 0.0 || low_muscle_mass(sex, muscle_index) {
        TestResult::labelled(TestScore::Fragile, INSUFFICIENT_PROTEIN)
    } else {
        TestResult::labelled(TestScore::Good, "bons apports protéiques")
    }
}

pub fn nutrition_calcium_intake(answers: &AnswerRecord) -> TestResult {
    match answers.nutrition.diet_apports_calcium {
        None => TestResult::unknown(),
        Some(calcium) if calcium == 0.0 => {
            TestResult::labelled(TestScore::Fragile, "apports calciques insuffisants")
        }
        Some(_) => TestResult::labelled(TestScore::Good, "bons apports calciques"),
    }
}

pub fn nutrition_behavior(answers: &AnswerRecord) -> TestResult {
    let (Some(adapted), Some(maladapted)) = (
        answers.nutrition.diet_tendances_adaptees,
        answers.nutrition.diet_tendances_inadaptees,
    ) else {
        return TestResult::unknown();
    };

    if adapted == 0.0 && maladapted == 1.0 {
        TestResult::labelled(TestScore::Bad, "comportement alimentaire pathologique")
    } else if adapted == 0.0 && maladapted == 0.0 {
        TestResult::labelled(TestScore::Fragile, "comportement alimentaire inadapté")
    } else {
        TestResult::labelled(TestScore::Good, "bon comportement alimentaire")
    }
}

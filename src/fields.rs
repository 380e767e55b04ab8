//! The fixed set of patient fields and their generating distributions.
//!
//! Each field in a synthetic patient record is drawn according to one of a
//! small number of shapes: a synthetic name, an integer or real measurement
//! around a typical clinical value, or a choice among category labels with
//! given probabilities. The table in [`PATIENT_FIELDS`] pins down the shape
//! and parameters for every field, so the record layout lives in one place
//! and the generator just walks it.

/// How one field's value is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// A synthetic full name. Names are always present.
    Name,
    /// Integer roughly normally distributed around `center`, clipped below
    /// at zero.
    Int { center: i64, scale: i64 },
    /// Real number roughly normally distributed around `center`, rounded to
    /// `dp` decimal places and clipped below at zero.
    Real { center: f64, scale: f64, dp: i32 },
    /// One of a fixed set of category labels, picked with the given
    /// probabilities (which sum to one before missingness is applied).
    Choice {
        choices: &'static [&'static str],
        weights: &'static [f64],
    },
}

/// A named field together with its generating distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// All fields of a synthetic patient record, in record order.
///
/// The fields cover the items needed to assess bleeding risk in patients
/// undergoing percutaneous coronary intervention:
///
/// * basic attributes (name, age, gender)
/// * laboratory measurements (haemoglobin, platelet count, eGFR)
/// * medication and history flags (oral anticoagulant use, NSAID use,
///   prior bleeding, cirrhosis with portal hypertension, cancer,
///   prior ICH or ischaemic stroke, recent surgery or trauma,
///   planned surgery)
///
/// Distribution parameters are chosen to give plausible-looking values,
/// not to reproduce any real population.
pub const PATIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        kind: FieldKind::Name,
    },
    FieldSpec {
        name: "age",
        kind: FieldKind::Int {
            center: 70,
            scale: 10,
        },
    },
    FieldSpec {
        name: "oac",
        kind: FieldKind::Choice {
            choices: &["Yes", "No"],
            weights: &[0.05, 0.95],
        },
    },
    FieldSpec {
        name: "gender",
        kind: FieldKind::Choice {
            choices: &["Male", "Female"],
            weights: &[0.5, 0.5],
        },
    },
    FieldSpec {
        name: "hb",
        kind: FieldKind::Real {
            center: 12.0,
            scale: 2.0,
            dp: 1,
        },
    },
    FieldSpec {
        name: "platelets",
        kind: FieldKind::Int {
            center: 150,
            scale: 70,
        },
    },
    FieldSpec {
        name: "egfr",
        kind: FieldKind::Int {
            center: 90,
            scale: 50,
        },
    },
    FieldSpec {
        name: "prior_bleeding",
        kind: FieldKind::Choice {
            choices: &["< 6 months or recurrent", "< 12 months", "No bleeding"],
            weights: &[0.025, 0.025, 0.95],
        },
    },
    FieldSpec {
        name: "cirrhosis_ptl_hyp",
        kind: FieldKind::Choice {
            choices: &["Yes", "No"],
            weights: &[0.05, 0.95],
        },
    },
    FieldSpec {
        name: "nsaid",
        kind: FieldKind::Choice {
            choices: &["Yes", "No"],
            weights: &[0.05, 0.95],
        },
    },
    FieldSpec {
        name: "cancer",
        kind: FieldKind::Choice {
            choices: &["Yes", "No"],
            weights: &[0.05, 0.95],
        },
    },
    FieldSpec {
        name: "prior_ich_stroke",
        kind: FieldKind::Choice {
            choices: &[
                "bAVM, ICH, or moderate/severe ischaemic stroke < 6 months",
                "Any prior ischaemic stroke",
                "No ICH/ischaemic stroke",
            ],
            weights: &[0.025, 0.025, 0.95],
        },
    },
    FieldSpec {
        name: "prior_surgery_trauma",
        kind: FieldKind::Choice {
            choices: &["Yes", "No"],
            weights: &[0.05, 0.95],
        },
    },
    FieldSpec {
        name: "planned_surgery",
        kind: FieldKind::Choice {
            choices: &["Yes", "No"],
            weights: &[0.05, 0.95],
        },
    },
];

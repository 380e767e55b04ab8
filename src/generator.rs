//! Seeded generation of synthetic patient records.
//!
//! The [`PatientGenerator`] stands in for the backend data sources that
//! would normally supply patient attributes, laboratory results and
//! history flags. It produces plausible-looking values from fixed
//! distributions, with a configurable fraction reported missing, so that
//! consuming code can be exercised without access to real data.
//!
//! All output is a pure function of the seed. Two generators built with
//! the same seed and missingness produce identical sequences of records,
//! which makes test failures reproducible.

use crate::fields::{FieldKind, PATIENT_FIELDS};
use crate::patient::{FieldValue, PatientRecord};
use crate::seeded_rng::stream_rng;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Normal, NormalError};

/// Stream id for the draws behind field values and trust numbers.
const VALUE_STREAM: &str = "patient_values";
/// Stream id for synthetic name generation.
const NAME_STREAM: &str = "patient_names";

/// A generation parameter that cannot produce valid draws.
///
/// These are raised when the generator is configured, or when a draw is
/// requested with unusable parameters; they never occur for valid inputs,
/// so a caller using the built-in patient fields can treat them as bugs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missingness must lie in the range [0, 1], got {0}")]
    MissingnessOutOfRange(f64),
    #[error("expected one weight per choice, got {choices} choices and {weights} weights")]
    ChoiceWeightMismatch { choices: usize, weights: usize },
    #[error("scale must be non-negative, got {0}")]
    ScaleOutOfRange(f64),
    #[error("unusable choice weights: {0}")]
    InvalidWeights(#[from] WeightedError),
    #[error("unusable normal distribution parameters: {0}")]
    InvalidDistribution(#[from] NormalError),
}

/// Source of synthetic patient records and the individual values inside
/// them.
///
/// The generator owns two independent random streams derived from the
/// seed, one for field values and one for names. Drawing names therefore
/// never shifts the sequence of numeric and categorical draws, and vice
/// versa.
///
/// Every non-name draw passes through the missingness mechanism: with
/// probability equal to the configured missingness the value is reported
/// absent, and the remaining probability is shared among the real
/// outcomes in their original proportions. Missingness 0.0 means every
/// value is present; 1.0 means every value except the name is absent.
///
/// The generator is not synchronized. Code generating records on several
/// threads should build one generator per thread, giving each its own
/// seed.
#[derive(Debug)]
pub struct PatientGenerator {
    seed: u64,
    missingness: f64,
    value_rng: ChaCha8Rng,
    name_rng: ChaCha8Rng,
}

impl PatientGenerator {
    /// Fraction of draws reported missing when none is chosen explicitly.
    pub const DEFAULT_MISSINGNESS: f64 = 0.2;

    /// Make a generator with the default missingness.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            missingness: Self::DEFAULT_MISSINGNESS,
            value_rng: stream_rng(seed, VALUE_STREAM),
            name_rng: stream_rng(seed, NAME_STREAM),
        }
    }

    /// Make a generator with a chosen missingness.
    ///
    /// The missingness is a probability, so values outside [0, 1] (and
    /// NaN) are rejected.
    pub fn with_missingness(seed: u64, missingness: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&missingness) {
            return Err(ConfigError::MissingnessOutOfRange(missingness));
        }
        let mut generator = Self::new(seed);
        generator.missingness = missingness;
        Ok(generator)
    }

    /// The seed this generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The fraction of draws reported missing.
    pub fn missingness(&self) -> f64 {
        self.missingness
    }

    /// Generate a synthetic full name.
    ///
    /// Names model the patient identity fetched alongside clinical data,
    /// so they are always present; missingness does not apply to them.
    pub fn make_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.name_rng)
    }

    /// Generate a synthetic hospital trust number.
    ///
    /// The trust number identifies a patient within one hospital trust.
    /// The synthetic form is the letter T followed by seven digits,
    /// zero-padded, e.g. T0345113.
    pub fn make_tnumber(&mut self) -> String {
        let num: u32 = self.value_rng.gen_range(0..9_999_999);
        format!("T{num:07}")
    }

    /// Draw one of `choices` with the given relative weights, or report
    /// the value absent.
    ///
    /// The weights describe the distribution among the real outcomes.
    /// Before drawing, the configured missingness is prepended as the
    /// weight of the absent outcome and the real weights are scaled by
    /// one minus the missingness, so the present values keep their
    /// relative proportions.
    ///
    /// Fails if the number of weights does not match the number of
    /// choices, or if the weights are unusable (negative, NaN, or all
    /// zero with no missingness to absorb the draw).
    pub fn make_choice<T: Clone>(
        &mut self,
        choices: &[T],
        weights: &[f64],
    ) -> Result<Option<T>, ConfigError> {
        if choices.len() != weights.len() {
            return Err(ConfigError::ChoiceWeightMismatch {
                choices: choices.len(),
                weights: weights.len(),
            });
        }

        let mut augmented = Vec::with_capacity(weights.len() + 1);
        augmented.push(self.missingness);
        augmented.extend(weights.iter().map(|w| w * (1.0 - self.missingness)));

        let outcome = WeightedIndex::new(&augmented)?;
        match outcome.sample(&mut self.value_rng) {
            0 => Ok(None),
            n => Ok(Some(choices[n - 1].clone())),
        }
    }

    /// Draw an integer measurement around `center`, or report it absent.
    ///
    /// The value is normally distributed with the given scale, truncated
    /// to an integer and clipped below at zero, since the measurements
    /// being modelled (ages, counts, rates) cannot be negative.
    ///
    /// Fails if `scale` is negative.
    pub fn make_int(&mut self, center: i64, scale: i64) -> Result<Option<i64>, ConfigError> {
        if scale < 0 {
            return Err(ConfigError::ScaleOutOfRange(scale as f64));
        }
        let normal = Normal::new(center as f64, scale as f64)?;
        let value = (normal.sample(&mut self.value_rng) as i64).max(0);
        self.make_choice(&[value], &[1.0])
    }

    /// Draw a real-valued measurement around `center`, rounded to `dp`
    /// decimal places, or report it absent.
    ///
    /// The value is normally distributed with the given scale and clipped
    /// below at zero after rounding.
    ///
    /// Fails if `scale` is negative or not finite.
    pub fn make_real(
        &mut self,
        center: f64,
        scale: f64,
        dp: i32,
    ) -> Result<Option<f64>, ConfigError> {
        if scale < 0.0 {
            return Err(ConfigError::ScaleOutOfRange(scale));
        }
        let normal = Normal::new(center, scale)?;
        let factor = 10f64.powi(dp);
        let value = ((normal.sample(&mut self.value_rng) * factor).round() / factor).max(0.0);
        self.make_choice(&[value], &[1.0])
    }

    /// Generate one complete synthetic patient record.
    ///
    /// The record contains every field in [`PATIENT_FIELDS`], in order,
    /// drawn according to its distribution. Apart from the name, each
    /// field is absent with probability equal to the missingness. This
    /// simulates the data that might be fetched for one patient from
    /// backend sources.
    pub fn make_patient(&mut self) -> Result<PatientRecord, ConfigError> {
        let mut fields = Vec::with_capacity(PATIENT_FIELDS.len());
        for spec in PATIENT_FIELDS {
            let value = match spec.kind {
                FieldKind::Name => FieldValue::String(self.make_name()),
                FieldKind::Int { center, scale } => {
                    FieldValue::from(self.make_int(center, scale)?)
                }
                FieldKind::Real { center, scale, dp } => {
                    FieldValue::from(self.make_real(center, scale, dp)?)
                }
                FieldKind::Choice { choices, weights } => {
                    FieldValue::from(self.make_choice(choices, weights)?)
                }
            };
            fields.push((spec.name, value));
        }
        Ok(PatientRecord::new(fields))
    }

    /// Generate a batch of synthetic patient records.
    pub fn make_patients(&mut self, count: usize) -> Result<Vec<PatientRecord>, ConfigError> {
        (0..count).map(|_| self.make_patient()).collect()
    }
}

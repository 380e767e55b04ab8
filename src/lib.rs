//! Synthetic patient records for developing and testing bleeding-risk
//! tools without access to real data.
//!
//! The entry point is [`PatientGenerator`], which is built from an integer
//! seed and produces names, hospital trust numbers, individual measurements
//! and complete patient records. All output is reproducible: the same seed
//! and missingness give the same sequence of draws, run after run, so
//! downstream code and tests can rely on fixed data.
//!
//! Real clinical data arrives with gaps, and code consuming it has to cope
//! with absent values. The generator models this directly: every value
//! apart from the patient name is reported absent with a configurable
//! probability (the missingness, 0.2 unless chosen otherwise), and absent
//! values appear as [`FieldValue::Missing`] in the record rather than being
//! dropped.
//!
//! Generators are cheap to build and are not synchronized; when records are
//! needed on several threads, build one generator per thread with its own
//! seed (a base seed plus the thread index keeps the whole run
//! reproducible).

pub use fields::{FieldKind, FieldSpec, PATIENT_FIELDS};
pub use generator::{ConfigError, PatientGenerator};
pub use patient::{FieldValue, PatientRecord};
pub use seeded_rng::stream_rng;

mod fields;
mod generator;
mod patient;
mod seeded_rng;

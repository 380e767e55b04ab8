//! Serialize one synthetic patient to JSON, the shape a backend data
//! source might return. Absent fields appear as null.
//!
//! Run with: cargo run --example patient_json

use mock_patient::PatientGenerator;

fn main() -> Result<(), anyhow::Error> {
    let mut generator = PatientGenerator::with_missingness(42, 0.3)?;
    let patient = generator.make_patient()?;

    println!("{}", serde_json::to_string_pretty(&patient)?);

    Ok(())
}

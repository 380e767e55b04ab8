//! Generate a handful of synthetic patients and print their fields.
//!
//! Run with: cargo run --example generate_patients

use mock_patient::PatientGenerator;

fn main() -> Result<(), anyhow::Error> {
    let mut generator = PatientGenerator::new(3);
    println!("patients generated from seed {}\n", generator.seed());

    for (n, patient) in generator.make_patients(5)?.iter().enumerate() {
        println!("--- patient {n} ---");
        for (field, value) in patient.iter() {
            println!("{field}: {value}");
        }
        println!();
    }

    Ok(())
}

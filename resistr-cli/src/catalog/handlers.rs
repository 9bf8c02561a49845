use resistr_core::catalog::{SAMPLE_SEQUENCES, antibiotic_catalog};

use crate::output::{antibiotics_table, samples_table};

pub fn run_samples() {
    println!("{}", samples_table(&SAMPLE_SEQUENCES));
}

pub fn run_antibiotics() {
    let catalog = antibiotic_catalog();
    println!("{}", antibiotics_table(&catalog));
    println!("Number of antibiotics: {}", catalog.len());
}

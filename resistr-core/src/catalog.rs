//! Display metadata for the antibiotics and a handful of ready-made example
//! sequences.

use serde::Serialize;

use crate::models::Antibiotic;

/// Human-facing description of an antibiotic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AntibioticInfo {
    pub antibiotic: Antibiotic,
    pub name: &'static str,
    pub class: &'static str,
    pub description: &'static str,
}

impl Antibiotic {
    pub fn info(&self) -> AntibioticInfo {
        let (name, class, description) = match self {
            Antibiotic::Amikacin => (
                "Amikacin",
                "Aminoglycoside",
                "Broad-spectrum antibiotic used for serious infections",
            ),
            Antibiotic::Amoxicillin => (
                "Amoxicillin",
                "Beta-lactam",
                "Common antibiotic for various bacterial infections",
            ),
            Antibiotic::Capreomycin => ("Capreomycin", "Polypeptide", "Used to treat tuberculosis"),
            Antibiotic::Ciprofloxacin => {
                ("Ciprofloxacin", "Fluoroquinolone", "Broad-spectrum antibiotic")
            }
            Antibiotic::Ethambutol => (
                "Ethambutol",
                "Antimycobacterial",
                "First-line treatment for tuberculosis",
            ),
            Antibiotic::Isoniazid => (
                "Isoniazid",
                "Antimycobacterial",
                "Primary treatment for tuberculosis",
            ),
            Antibiotic::Kanamycin => (
                "Kanamycin",
                "Aminoglycoside",
                "Used for serious bacterial infections",
            ),
            Antibiotic::Moxifloxacin => (
                "Moxifloxacin",
                "Fluoroquinolone",
                "Fourth-generation fluoroquinolone",
            ),
            Antibiotic::Pyrazinamide => (
                "Pyrazinamide",
                "Antimycobacterial",
                "Essential tuberculosis medication",
            ),
            Antibiotic::Rifampin => (
                "Rifampin",
                "Rifamycin",
                "Key antibiotic for tuberculosis treatment",
            ),
            Antibiotic::Streptomycin => (
                "Streptomycin",
                "Aminoglycoside",
                "First antibiotic effective against tuberculosis",
            ),
        };
        AntibioticInfo {
            antibiotic: *self,
            name,
            class,
            description,
        }
    }
}

/// Full catalog in key order.
pub fn antibiotic_catalog() -> Vec<AntibioticInfo> {
    Antibiotic::ALL.iter().map(Antibiotic::info).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleSequence {
    pub name: &'static str,
    pub sequence: &'static str,
    pub description: &'static str,
}

pub const SAMPLE_SEQUENCES: [SampleSequence; 4] = [
    SampleSequence {
        name: "Example 1 - Mixed Resistance",
        sequence: "ESSALAAAQAMASAAAFETA",
        description: "Shows resistance to rifampin",
    },
    SampleSequence {
        name: "Example 2 - Common Sequence",
        sequence: "MTEYKLVVVGAGGVGKSALTIQLIQ",
        description: "K-Ras protein sequence fragment",
    },
    SampleSequence {
        name: "Example 3 - Short Epitope",
        sequence: "SIINFEKL",
        description: "Common immunogenic peptide",
    },
    SampleSequence {
        name: "Example 4 - Longer Sequence",
        sequence: "MSTNPKPQKTNQLSTLLNGFAPHSSSQVTNVTGPWKQYFFVDAQTEEDAIVVSI",
        description: "Bacterial protein fragment",
    },
];

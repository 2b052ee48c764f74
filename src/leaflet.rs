use std::path::Path;

use serde::Serialize;

use crate::error::{LeafletError, Result};
use crate::ranges::{compress_ranges, ResidueRange};

/// Side of the bilayer midplane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Leaflet {
    Upper,
    Lower,
}

/// Assign a z coordinate to a leaflet. The midplane itself belongs to the upper leaflet.
pub fn classify(z: f64, center: f64) -> Leaflet {
    if z < center {
        Leaflet::Lower
    } else {
        Leaflet::Upper
    }
}

/// One matching atom and the leaflet it was placed in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafletAssignment {
    pub residue_number: i32,
    pub residue_name: String,
    pub atom_name: String,
    pub z: f64,
    pub leaflet: Leaflet,
}

/// Residue numbers of each leaflet, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafletSets {
    pub upper: Vec<i32>,
    pub lower: Vec<i32>,
}

impl LeafletSets {
    pub fn from_assignments(assignments: &[LeafletAssignment]) -> Self {
        let mut sets = Self::default();
        for assignment in assignments {
            sets.push(assignment.leaflet, assignment.residue_number);
        }
        sets
    }

    pub fn push(&mut self, leaflet: Leaflet, residue_number: i32) {
        match leaflet {
            Leaflet::Upper => self.upper.push(residue_number),
            Leaflet::Lower => self.lower.push(residue_number),
        }
    }

    /// Total number of classified atoms across both leaflets
    pub fn total(&self) -> usize {
        self.upper.len() + self.lower.len()
    }

    pub fn upper_ranges(&self) -> Vec<ResidueRange> {
        compress_ranges(&self.upper)
    }

    pub fn lower_ranges(&self) -> Vec<ResidueRange> {
        compress_ranges(&self.lower)
    }
}

/// Save per-atom leaflet assignments to a CSV file
pub fn save_assignments_to_csv(assignments: &[LeafletAssignment], output_path: &Path) -> Result<()> {
    let csv_error = |source: csv::Error| LeafletError::Csv {
        path: output_path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(output_path).map_err(csv_error)?;
    for assignment in assignments {
        writer.serialize(assignment).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| csv_error(e.into()))?;

    Ok(())
}

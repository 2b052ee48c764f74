use std::path::PathBuf;

use thiserror::Error;

use crate::structure::Selector;

pub type Result<T> = std::result::Result<T, LeafletError>;

/// Failures while scanning a structure file or exporting results.
#[derive(Debug, Error)]
pub enum LeafletError {
    #[error("Failed to read structure file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid {field} {text:?}")]
    Format {
        line: usize,
        field: &'static str,
        text: String,
    },

    #[error("No matches found for residue {:?} atom {:?}. Check res_name and atom_name.", .0.residue_name, .0.atom_name)]
    NoMatch(Selector),

    #[error("Failed to write CSV file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl LeafletError {
    /// Attach a line number to a parse failure raised by the line parser.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            LeafletError::Format { field, text, .. } => LeafletError::Format { line, field, text },
            other => other,
        }
    }
}

/// A required command-line input that was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingArgument {
    #[error("Error: 3D structure (gro) is required.")]
    Structure,
    #[error("Error: Reference residue name is required.")]
    ResidueName,
    #[error("Error: Atom name is required.")]
    AtomName,
}

use crate::error::{LeafletError, Result};

/// Byte length a line must reach to hold the z column.
pub const MIN_RECORD_LEN: usize = 44;

/// One atom line of a GRO file, reduced to the fields used for leaflet assignment
#[derive(Debug, Clone, PartialEq)]
pub struct StructureRecord {
    pub residue_number: i32,
    pub residue_name: String,
    pub atom_name: String,
    pub z: f64,
}

/// Residue/atom name pair selecting the reference atoms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub residue_name: String,
    pub atom_name: String,
}

impl Selector {
    pub fn new(residue_name: impl Into<String>, atom_name: impl Into<String>) -> Self {
        Self {
            residue_name: residue_name.into(),
            atom_name: atom_name.into(),
        }
    }

    /// True when the record carries both the selected residue and atom name
    pub fn matches(&self, record: &StructureRecord) -> bool {
        record.residue_name == self.residue_name && record.atom_name == self.atom_name
    }
}

/// Outcome of decoding a single line
#[derive(Debug, Clone, PartialEq)]
pub enum GroLine {
    Record(StructureRecord),
    /// Blank or short line: no more atom data follows.
    EndOfData,
}

/// Decode one fixed-column GRO line (terminator already stripped).
///
/// Columns are byte ranges: residue number `[0,5)`, residue name `[5,10)`,
/// atom name `[10,15)` and z `[36,44)`. Lines shorter than [`MIN_RECORD_LEN`]
/// mark the end of the atom block. Non-numeric text in the numeric columns
/// yields [`LeafletError::Format`] with line number 0; callers that know the
/// position attach it with `at_line`.
pub fn parse_gro_line(line: &str) -> Result<GroLine> {
    if line.len() < MIN_RECORD_LEN {
        return Ok(GroLine::EndOfData);
    }

    let residue_number = column(line, 0, 5, "residue number")?
        .trim()
        .parse::<i32>()
        .map_err(|_| format_error(line, 0, 5, "residue number"))?;
    let residue_name = column(line, 5, 10, "residue name")?.trim().to_string();
    let atom_name = column(line, 10, 15, "atom name")?.trim().to_string();
    let z = column(line, 36, 44, "z coordinate")?
        .trim()
        .parse::<f64>()
        .map_err(|_| format_error(line, 36, 44, "z coordinate"))?;

    Ok(GroLine::Record(StructureRecord {
        residue_number,
        residue_name,
        atom_name,
        z,
    }))
}

fn column<'a>(line: &'a str, start: usize, end: usize, field: &'static str) -> Result<&'a str> {
    // Fails only when a multi-byte character straddles a column boundary.
    line.get(start..end).ok_or_else(|| format_error(line, start, end, field))
}

fn format_error(line: &str, start: usize, end: usize, field: &'static str) -> LeafletError {
    let text = String::from_utf8_lossy(&line.as_bytes()[start..end]).into_owned();
    LeafletError::Format { line: 0, field, text }
}

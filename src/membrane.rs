use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::error::{LeafletError, Result};
use crate::leaflet::{classify, LeafletAssignment, LeafletSets};
use crate::structure::{parse_gro_line, GroLine, Selector, StructureRecord};

/// Number of header lines (title, atom count) preceding the atom block
const HEADER_LINES: usize = 2;

/// Trait for dividing a membrane structure into leaflets
pub trait Membrane {
    /// Mean z coordinate of all atoms matching `selector`.
    ///
    /// # Errors
    /// * [`LeafletError::NoMatch`] when no atom matches the selector
    /// * [`LeafletError::Format`] when an atom line has non-numeric fields
    fn find_center(&self, selector: &Selector) -> Result<f64>;

    /// Place every matching atom in the upper or lower leaflet relative to `center`.
    ///
    /// Atoms lying exactly on the midplane go to the upper leaflet.
    fn assign_leaflets(&self, selector: &Selector, center: f64) -> Result<Vec<LeafletAssignment>>;

    /// Residue numbers of the two leaflets, in file order
    fn divide_leaflets(&self, selector: &Selector, center: f64) -> Result<LeafletSets> {
        let assignments = self.assign_leaflets(selector, center)?;
        Ok(LeafletSets::from_assignments(&assignments))
    }
}

/// Implementation of Membrane trait for GRO files
pub struct GroMembrane {
    file_path: PathBuf,
    show_progress: bool,
}

impl GroMembrane {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            show_progress: false,
        }
    }

    /// Show a spinner on stderr while scanning
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Read the atom block once, handing every record that matches `selector` to `visit`.
    ///
    /// Returns the number of matching records. The scan stops at the atom count
    /// given in the header when it is readable, otherwise at the first short line.
    fn scan_matching<F>(&self, selector: &Selector, pass: &str, mut visit: F) -> Result<usize>
    where
        F: FnMut(StructureRecord),
    {
        let io_error = |source: std::io::Error| LeafletError::Io {
            path: self.file_path.clone(),
            source,
        };

        let file = File::open(&self.file_path).map_err(io_error)?;
        let mut lines = BufReader::new(file).lines();

        let _title = lines.next().transpose().map_err(io_error)?;
        let atom_limit = match lines.next().transpose().map_err(io_error)? {
            Some(header) => parse_atom_count(&header),
            None => {
                debug!(path = %self.file_path.display(), "no atom count header, nothing to scan");
                return Ok(0);
            }
        };
        if atom_limit.is_none() {
            warn!(
                path = %self.file_path.display(),
                "atom count header is not a number, reading atoms until the first short line"
            );
        }

        let pb = self.progress_bar(pass);
        let mut scanned = 0usize;
        let mut matched = 0usize;

        for (idx, line_result) in lines.enumerate() {
            if atom_limit.is_some_and(|limit| scanned >= limit) {
                break;
            }
            let line = line_result.map_err(io_error)?;
            let line_number = idx + HEADER_LINES + 1;

            let record = match parse_gro_line(line.trim_end_matches('\r')) {
                Ok(GroLine::Record(record)) => record,
                Ok(GroLine::EndOfData) => break,
                Err(e) => {
                    pb.abandon();
                    return Err(e.at_line(line_number));
                }
            };
            scanned += 1;
            pb.inc(1);

            if selector.matches(&record) {
                matched += 1;
                visit(record);
            }
        }
        pb.finish_and_clear();

        if let Some(limit) = atom_limit {
            if scanned < limit {
                warn!(expected = limit, found = scanned, "atom block is shorter than the header count");
            }
        }
        debug!(pass, scanned, matched, "finished scan of {}", self.file_path.display());

        Ok(matched)
    }

    fn progress_bar(&self, pass: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}: {pos} atoms")
        {
            pb.set_style(style);
        }
        pb.set_message(pass.to_string());
        pb
    }
}

impl Membrane for GroMembrane {
    fn find_center(&self, selector: &Selector) -> Result<f64> {
        let mut z_sum = 0.0;
        let matched = self.scan_matching(selector, "Locating midplane", |record| {
            z_sum += record.z;
        })?;

        if matched == 0 {
            return Err(LeafletError::NoMatch(selector.clone()));
        }

        let center = z_sum / matched as f64;
        info!(matched, center, "computed midplane");
        Ok(center)
    }

    fn assign_leaflets(&self, selector: &Selector, center: f64) -> Result<Vec<LeafletAssignment>> {
        let mut assignments = Vec::new();
        self.scan_matching(selector, "Dividing leaflets", |record| {
            let leaflet = classify(record.z, center);
            assignments.push(LeafletAssignment {
                residue_number: record.residue_number,
                residue_name: record.residue_name,
                atom_name: record.atom_name,
                z: record.z,
                leaflet,
            });
        })?;
        Ok(assignments)
    }
}

/// Atom count from the second header line, if it is a plain integer
fn parse_atom_count(header: &str) -> Option<usize> {
    header.trim().parse::<usize>().ok()
}

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::MissingArgument;
use crate::structure::Selector;

/// Membrane leaflet divider
///
/// Splits the residues of a GRO structure into upper and lower leaflets by
/// comparing the z coordinate of a reference atom with the bilayer midplane.
#[derive(Debug, Parser)]
#[command(name = "leaflet-div", version)]
#[command(override_usage = "leaflet-div -i mol.gro -r POPC -a P")]
pub struct CliArgs {
    /// Input 3D structure (gro)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Residue membrane component (e.g. POPC)
    #[arg(short = 'r', long = "residue")]
    pub residue_name: Option<String>,

    /// Atom name for distance calculation (e.g. P)
    #[arg(short = 'a', long = "atom")]
    pub atom_name: Option<String>,

    /// Optional CSV file receiving the leaflet of every matching atom
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not draw the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub selector: Selector,
    pub output: Option<PathBuf>,
    pub show_progress: bool,
    pub verbosity: u8,
}

impl RunConfig {
    /// Check that the structure file and both selector names were given.
    ///
    /// Inputs are checked in the order file, residue, atom; the first missing one is reported.
    pub fn validate(args: CliArgs) -> Result<Self, MissingArgument> {
        let input = args.input.ok_or(MissingArgument::Structure)?;
        let residue_name = args.residue_name.ok_or(MissingArgument::ResidueName)?;
        let atom_name = args.atom_name.ok_or(MissingArgument::AtomName)?;

        Ok(Self {
            input,
            selector: Selector::new(residue_name, atom_name),
            output: args.output,
            show_progress: !args.quiet,
            verbosity: args.verbose,
        })
    }

    /// Default log filter directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(argv: &[&str]) -> Result<RunConfig, MissingArgument> {
        let args = CliArgs::try_parse_from(std::iter::once("leaflet-div").chain(argv.iter().copied())).unwrap();
        RunConfig::validate(args)
    }

    #[test]
    fn test_validate_complete() {
        let config = validate(&["-i", "mol.gro", "-r", "POPC", "-a", "P"]).unwrap();
        assert_eq!(config.input, PathBuf::from("mol.gro"));
        assert_eq!(config.selector, Selector::new("POPC", "P"));
        assert_eq!(config.output, None);
        assert!(config.show_progress);
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn test_validate_reports_first_missing() {
        assert_eq!(validate(&[]).unwrap_err(), MissingArgument::Structure);
        assert_eq!(validate(&["-r", "POPC", "-a", "P"]).unwrap_err(), MissingArgument::Structure);
        assert_eq!(validate(&["-i", "mol.gro", "-a", "P"]).unwrap_err(), MissingArgument::ResidueName);
        assert_eq!(validate(&["-i", "mol.gro", "-r", "POPC"]).unwrap_err(), MissingArgument::AtomName);
    }

    #[test]
    fn test_missing_messages() {
        assert_eq!(MissingArgument::AtomName.to_string(), "Error: Atom name is required.");
        assert_eq!(MissingArgument::Structure.to_string(), "Error: 3D structure (gro) is required.");
    }

    #[test]
    fn test_optional_flags() {
        let config = validate(&["-i", "m.gro", "-r", "DPPC", "-a", "PO4", "-o", "out.csv", "-q", "-vv"]).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("out.csv")));
        assert!(!config.show_progress);
        assert_eq!(config.log_level(), "debug");
    }
}

pub mod config;
pub mod error;
pub mod leaflet;
pub mod membrane;
pub mod ranges;
pub mod report;
pub mod structure;

#[cfg(feature = "python")]
pub mod python_bindings;

#[cfg(test)]
mod test_support;

// Re-export commonly used types and traits
pub use config::{CliArgs, RunConfig};
pub use error::{LeafletError, MissingArgument};
pub use leaflet::{classify, save_assignments_to_csv, Leaflet, LeafletAssignment, LeafletSets};
pub use membrane::{GroMembrane, Membrane};
pub use ranges::{compress_ranges, ResidueRange};
pub use report::LeafletReport;
pub use structure::{parse_gro_line, GroLine, Selector, StructureRecord};

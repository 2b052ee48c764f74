use std::fmt::Write;

use crate::leaflet::LeafletSets;
use crate::ranges::ResidueRange;

/// Outcome of a full leaflet division, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct LeafletReport {
    pub center: f64,
    pub sets: LeafletSets,
}

impl LeafletReport {
    pub fn new(center: f64, sets: LeafletSets) -> Self {
        Self { center, sets }
    }

    /// Render the human-readable summary printed on stdout
    pub fn render(&self) -> String {
        let mut out = String::new();
        write_leaflet(&mut out, "Upper", self.sets.upper.len(), &self.sets.upper_ranges());
        write_leaflet(&mut out, "Lower", self.sets.lower.len(), &self.sets.lower_ranges());
        let _ = writeln!(out, "\nCenter at z = {:.3}\n", self.center);
        out
    }
}

fn write_leaflet(out: &mut String, label: &str, count: usize, ranges: &[ResidueRange]) {
    let _ = writeln!(out, "\n{} leaflet ({} residues):\n", label, count);
    if ranges.is_empty() {
        let _ = writeln!(out, "(no residues)\n");
        return;
    }
    for range in ranges {
        let _ = writeln!(out, "{}", range);
    }
    out.push('\n');
}

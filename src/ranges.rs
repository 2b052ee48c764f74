use std::fmt;

/// Inclusive run of consecutive residue numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueRange {
    pub low: i32,
    pub high: i32,
}

impl ResidueRange {
    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }
}

impl fmt::Display for ResidueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl From<ResidueRange> for (i32, i32) {
    fn from(range: ResidueRange) -> Self {
        (range.low, range.high)
    }
}

/// Collapse residue numbers into runs of consecutive values.
///
/// A value extends the current run only when it is exactly one past the last
/// value seen; anything else (gap, repeat, step back) closes the run and opens
/// a new one. Input order is preserved. An empty slice gives no ranges.
pub fn compress_ranges(residues: &[i32]) -> Vec<ResidueRange> {
    let Some((&first, rest)) = residues.split_first() else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let mut low = first;
    let mut current = first;

    for &next in rest {
        if current.checked_add(1) == Some(next) {
            current = next;
        } else {
            ranges.push(ResidueRange::new(low, current));
            low = next;
            current = next;
        }
    }
    ranges.push(ResidueRange::new(low, current));

    ranges
}

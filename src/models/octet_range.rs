//! The single octet that varies across a block.

/// Which octet varies, its bounds, and what surrounds it.
///
/// Octets before `index` are fixed to `fixed`; the `wildcards` octets after it
/// can take any value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetRange {
    /// Zero-based position of the variable octet (0-3).
    pub index: usize,
    /// Values of the octets before `index`.
    pub fixed: Vec<u8>,
    /// Lowest value of the variable octet.
    pub lower: u8,
    /// Highest value of the variable octet, `lower <= upper`.
    pub upper: u8,
    /// Number of fully free octets after `index`.
    pub wildcards: usize,
}

impl OctetRange {
    /// Number of values the variable octet takes.
    pub fn value_count(&self) -> usize {
        usize::from(self.upper - self.lower) + 1
    }
}

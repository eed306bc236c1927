//! Joins fixed octets, encoded patterns and wildcards into glob lines.

use crate::models::{DigitPattern, GlobPattern, OctetRange};

/// One [`GlobPattern`] per digit pattern, in the order given.
pub fn assemble(range: &OctetRange, patterns: Vec<DigitPattern>) -> Vec<GlobPattern> {
    patterns
        .into_iter()
        .map(|variable| GlobPattern {
            fixed: range.fixed.clone(),
            variable,
            wildcards: range.wildcards,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::encode_range;

    #[test]
    fn test_assemble_middle_octet() {
        let range = OctetRange {
            index: 1,
            fixed: vec![172],
            lower: 16,
            upper: 31,
            wildcards: 2,
        };
        let globs: Vec<String> = assemble(&range, encode_range(range.lower, range.upper))
            .iter()
            .map(|g| g.to_string())
            .collect();
        assert_eq!(
            globs,
            [
                "172.1[6-9].[0-9]*.[0-9]*",
                "172.2[0-9].[0-9]*.[0-9]*",
                "172.3[0-1].[0-9]*.[0-9]*"
            ]
        );
    }

    #[test]
    fn test_assemble_last_octet() {
        let range = OctetRange {
            index: 3,
            fixed: vec![10, 0, 0],
            lower: 8,
            upper: 15,
            wildcards: 0,
        };
        let globs: Vec<String> = assemble(&range, encode_range(range.lower, range.upper))
            .iter()
            .map(|g| g.to_string())
            .collect();
        assert_eq!(globs, ["10.0.0.[8-9]", "10.0.0.1[0-5]"]);
    }

    #[test]
    fn test_assemble_nothing() {
        let range = OctetRange {
            index: 0,
            fixed: vec![],
            lower: 0,
            upper: 0,
            wildcards: 3,
        };
        assert!(assemble(&range, Vec::new()).is_empty());
    }
}

//! Pattern output.

use crate::models::GlobPattern;
use std::io::{self, Write};

/// Write one pattern per line, returning how many were written.
pub fn write_patterns<W: Write>(out: &mut W, patterns: &[GlobPattern]) -> io::Result<usize> {
    for pattern in patterns {
        writeln!(out, "{pattern}")?;
    }
    Ok(patterns.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DigitPattern;

    #[test]
    fn test_write_patterns() {
        let patterns = vec![
            GlobPattern {
                fixed: vec![10, 0, 0],
                variable: DigitPattern::range(0, 7),
                wildcards: 0,
            },
            GlobPattern {
                fixed: vec![],
                variable: DigitPattern::literal(10),
                wildcards: 3,
            },
        ];
        let mut out = Vec::new();
        assert_eq!(write_patterns(&mut out, &patterns).unwrap(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "10.0.0.[0-7]\n10.[0-9]*.[0-9]*.[0-9]*\n"
        );
    }

    #[test]
    fn test_write_nothing() {
        let mut out = Vec::new();
        assert_eq!(write_patterns(&mut out, &[]).unwrap(), 0);
        assert!(out.is_empty());
    }
}

//! Lines written to the diagnostic stream.

use crate::models::AddressBlock;
use std::fmt;

/// A per-input message that never goes to the pattern output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The input could not be converted and was skipped.
    Skip { input: String },
    /// The input had host bits set (or non-canonical text) and was replaced.
    Changed {
        input: String,
        normalized: AddressBlock,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::Skip { input } => write!(f, "skip: {input}"),
            Diagnostic::Changed { input, normalized } => {
                write!(f, "warning: {input} changes to {normalized}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_line() {
        let diagnostic = Diagnostic::Skip {
            input: "::1/128".to_string(),
        };
        assert_eq!(diagnostic.to_string(), "skip: ::1/128");
    }

    #[test]
    fn test_changed_line() {
        let diagnostic = Diagnostic::Changed {
            input: "192.168.1.5/24".to_string(),
            normalized: "192.168.1.0/24".parse().unwrap(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "warning: 192.168.1.5/24 changes to 192.168.1.0/24"
        );
    }
}

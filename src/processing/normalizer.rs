//! Parsing and normalization of block specifications.

use crate::error::ParseError;
use crate::models::AddressBlock;
use colored::Colorize;

/// A parsed block with its host bits cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBlock {
    /// The specification as it was given.
    pub input: String,
    /// The network block derived from it.
    pub block: AddressBlock,
}

impl NormalizedBlock {
    /// True when the canonical rendering differs from the input text.
    pub fn changed(&self) -> bool {
        self.block.to_string() != self.input
    }
}

/// Parse `spec` as an IPv4 CIDR block and clear its host bits.
///
/// # Errors
/// Any [`ParseError`]: malformed text, a non-IPv4 address, a prefix longer
/// than 32 bits, or a `/0` block.
pub fn normalize_block(spec: &str) -> Result<NormalizedBlock, ParseError> {
    let requested: AddressBlock = spec.parse()?;
    if requested.prefix() == 0 {
        return Err(ParseError::ZeroPrefix(spec.to_string()));
    }

    let block = requested.network();
    if block != requested {
        log::debug!(
            "host bits set in {spec}, using {block}",
            spec = spec.yellow(),
            block = block.to_string().green()
        );
    }

    Ok(NormalizedBlock {
        input: spec.to_string(),
        block,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_canonical_is_unchanged() {
        for spec in ["10.0.0.0/8", "192.168.1.0/24", "172.16.0.0/12", "1.2.3.4/32"] {
            let normalized = normalize_block(spec).unwrap();
            assert_eq!(normalized.block.to_string(), spec);
            assert!(!normalized.changed(), "{spec} should not change");

            let again = normalize_block(&normalized.block.to_string()).unwrap();
            assert_eq!(again, normalized);
        }
    }

    #[test]
    fn test_normalize_clears_host_bits() {
        let normalized = normalize_block("192.168.1.5/24").unwrap();
        assert!(normalized.changed());
        assert_eq!(normalized.input, "192.168.1.5/24");
        assert_eq!(normalized.block.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_normalize_non_canonical_prefix_text() {
        let normalized = normalize_block("10.0.0.0/08").unwrap();
        assert!(normalized.changed());
        assert_eq!(normalized.block.to_string(), "10.0.0.0/8");
    }

    #[test]
    fn test_normalize_rejects() {
        assert_eq!(
            normalize_block("0.0.0.0/0"),
            Err(ParseError::ZeroPrefix("0.0.0.0/0".to_string()))
        );
        assert_eq!(
            normalize_block("10.1.1.1/0"),
            Err(ParseError::ZeroPrefix("10.1.1.1/0".to_string()))
        );
        assert_eq!(
            normalize_block("::1/128"),
            Err(ParseError::NotIpv4("::1/128".to_string()))
        );
        assert!(matches!(
            normalize_block("not a block"),
            Err(ParseError::Malformed(_))
        ));
    }
}

//! Error types for block parsing.

/// Reasons a block specification is skipped.
///
/// None of these abort a batch; the offending input is reported and the next
/// one is processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid block specification: {0}")]
    Malformed(String),

    #[error("not an IPv4 block: {0}")]
    NotIpv4(String),

    #[error("prefix length {prefix} out of range in {spec}")]
    PrefixOutOfRange { spec: String, prefix: String },

    #[error("degenerate /0 block: {0}")]
    ZeroPrefix(String),
}

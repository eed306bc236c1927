//! Domain models for CIDR to glob conversion.
//!
//! This module contains the core data structures used throughout the application:
//! - [`AddressBlock`] - IPv4 address with a prefix length
//! - [`OctetRange`] - the varying octet of a block and its bounds
//! - [`DigitPattern`] and [`GlobPattern`] - the encoded output

mod block;
mod octet_range;
mod pattern;

// Re-export public types
pub use block::{cut_addr, get_cidr_mask, AddressBlock, MAX_LENGTH};
pub use octet_range::OctetRange;
pub use pattern::{DigitPattern, Fragment, GlobPattern, WILDCARD_OCTET};

//! IPv4 address blocks in CIDR notation.
//!
//! Provides [`AddressBlock`] for representing an address with a prefix length,
//! along with the mask arithmetic needed to normalize it.

use crate::error::ParseError;
use regex::Regex;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum prefix length for an IPv4 block (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Splits `address/prefix`, the prefix being plain decimal digits.
static BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_block_regex() -> &'static Regex {
    BLOCK_REGEX.get_or_init(|| Regex::new(r"^([^/\s]+)/([0-9]+)$").expect("Invalid Regex"))
}

/// Convert a prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are treated as [`MAX_LENGTH`].
///
/// # Examples
/// ```
/// use cidr_glob::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// IPv4 address with a prefix length.
///
/// Parsing accepts host bits; [`AddressBlock::network`] clears them.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddressBlock {
    addr: Ipv4Addr,
    prefix: u8,
}

impl AddressBlock {
    /// Create a block, rejecting prefix lengths above [`MAX_LENGTH`].
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<AddressBlock, ParseError> {
        if prefix > MAX_LENGTH {
            return Err(ParseError::PrefixOutOfRange {
                spec: format!("{addr}/{prefix}"),
                prefix: prefix.to_string(),
            });
        }
        Ok(AddressBlock { addr, prefix })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn octets(&self) -> [u8; 4] {
        self.addr.octets()
    }

    /// The same block with every bit beyond the prefix cleared.
    pub fn network(&self) -> AddressBlock {
        AddressBlock {
            addr: cut_addr(self.addr, self.prefix),
            prefix: self.prefix,
        }
    }

    /// True when no host bits are set.
    pub fn is_network(&self) -> bool {
        self.network() == *self
    }
}

impl FromStr for AddressBlock {
    type Err = ParseError;

    fn from_str(spec: &str) -> Result<AddressBlock, ParseError> {
        let caps = get_block_regex()
            .captures(spec)
            .ok_or_else(|| ParseError::Malformed(spec.to_string()))?;
        let (addr, prefix) = (&caps[1], &caps[2]);

        let addr = match Ipv4Addr::from_str(addr) {
            Ok(addr) => addr,
            Err(_) if Ipv6Addr::from_str(addr).is_ok() => {
                return Err(ParseError::NotIpv4(spec.to_string()))
            }
            Err(_) => return Err(ParseError::Malformed(spec.to_string())),
        };

        let out_of_range = || ParseError::PrefixOutOfRange {
            spec: spec.to_string(),
            prefix: prefix.to_string(),
        };
        let prefix: u8 = prefix.parse().map_err(|_| out_of_range())?;
        if prefix > MAX_LENGTH {
            return Err(out_of_range());
        }

        Ok(AddressBlock { addr, prefix })
    }
}

impl fmt::Display for AddressBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

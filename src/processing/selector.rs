//! Locates the varying octet of a block.

use crate::error::ParseError;
use crate::models::{AddressBlock, OctetRange};

/// Find the octet that varies across `block` and its value bounds.
///
/// Host bits are cleared first, so the bounds always stay within 0-255.
/// A `/0` block has no single varying octet and is rejected.
pub fn select_octet_range(block: &AddressBlock) -> Result<OctetRange, ParseError> {
    let prefix = usize::from(block.prefix());
    if prefix == 0 {
        return Err(ParseError::ZeroPrefix(block.to_string()));
    }
    let octets = block.network().octets();

    let index = (prefix - 1) / 8;
    let free_bits = (index + 1) * 8 - prefix;
    let lower = octets[index];
    let upper = lower | ((1u16 << free_bits) - 1) as u8;

    log::trace!(
        "{block}: octet {index} spans {lower}..={upper} ({free_bits} free bits)"
    );

    Ok(OctetRange {
        index,
        fixed: octets[..index].to_vec(),
        lower,
        upper,
        wildcards: 3 - index,
    })
}

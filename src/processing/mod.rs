//! The conversion pipeline.
//!
//! Each block specification flows through these stages in order:
//! - [`normalizer`] - parse and clear host bits
//! - [`selector`] - find the varying octet and its bounds
//! - [`encoder`] - decompose the bounds into digit patterns
//! - [`assembler`] - build the final dotted glob patterns

mod assembler;
mod encoder;
mod normalizer;
mod selector;

// Re-export public functions
pub use assembler::assemble;
pub use encoder::encode_range;
pub use normalizer::{normalize_block, NormalizedBlock};
pub use selector::select_octet_range;

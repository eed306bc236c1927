//! Output formatting.
//!
//! - [`patterns`] - glob lines on the primary output
//! - [`diagnostic`] - skip and warning lines on the diagnostic stream

mod diagnostic;
mod patterns;

pub use diagnostic::Diagnostic;
pub use patterns::write_patterns;

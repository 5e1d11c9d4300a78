//! Numeric plumbing shared by the octasphere crates.

mod float;
mod index;
mod macros;

pub use float::*;
pub use index::*;

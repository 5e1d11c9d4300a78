#![doc = include_str!("../README.md")]

mod attribute;
mod color;
mod error;
mod mesh;

pub use attribute::*;
pub use color::*;
pub use error::*;
pub use mesh::*;

static_assertions::assert_impl_all!(Mesh<f32, u16>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Mesh: Send, Sync, Clone);

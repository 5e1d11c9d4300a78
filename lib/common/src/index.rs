use std::hash::Hash;

use num_traits::{AsPrimitive, PrimInt, Unsigned};

// TODO :: convert to trait alias once https://github.com/rust-lang/rfcs/pull/1733 is stabilized
/// Trait for types which can act as indices into a mesh's vertex list.
pub trait ArrayIndex:
    PrimInt + Unsigned + AsPrimitive<usize> + From<u8> + Hash + std::fmt::Debug + Send + Sync + 'static
{
    /// Convert a vertex-list position into an index, if it fits.
    #[inline]
    fn from_usize(n: usize) -> Option<Self> {
        <Self as num_traits::NumCast>::from(n)
    }

    /// The position this index refers to.
    #[inline]
    fn index(self) -> usize {
        self.as_()
    }

    /// How many distinct elements this index type can address, saturating at `usize::MAX`.
    fn capacity() -> usize {
        Self::max_value()
            .to_usize()
            .map_or(usize::MAX, |max| max.saturating_add(1))
    }
}

impl<P> ArrayIndex for P where
    P: PrimInt
        + Unsigned
        + AsPrimitive<usize>
        + From<u8>
        + Hash
        + std::fmt::Debug
        + Send
        + Sync
        + 'static
{
}

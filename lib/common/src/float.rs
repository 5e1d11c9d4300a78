use crate::item_with;

/// Floating-point scalar used for vertex positions and texture coordinates.
///
/// Everything that touches geometry is generic over this, so a mesh can be built in `f32` for
/// upload or in `f64` for checking.
pub trait Float: simba::scalar::RealField + Copy + Send + Sync {
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;

    /// Largest accepted distance between a vector's length and `1` for it to still count as a
    /// unit vector.
    const UNIT_TOLERANCE: Self;

    /// Lossy conversion used when reporting values in errors and logs.
    fn as_f64(self) -> f64;

    /// `v` as `Self`, rounding to the nearest representable value.
    fn lossy_from_f64(v: f64) -> Self;

    /// `n` as `Self`, rounding if `n` is too large to represent exactly.
    fn from_count(n: usize) -> Self;
}

item_with! {Real: f32, f64 => impl Float for Real {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;

    // f32 normalization is good to ~1e-7; keep some headroom for accumulated midpoint error
    const UNIT_TOLERANCE: Self = if std::mem::size_of::<Real>() == 4 { 1e-5 } else { 1e-9 };

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn lossy_from_f64(v: f64) -> Self {
        v as Real
    }

    #[inline]
    fn from_count(n: usize) -> Self {
        n as Real
    }
}}

use octasphere_common::{ArrayIndex, Float};
use quickcheck_macros::quickcheck;

/// Ensure that every unsigned index type with width <= `size_of::<usize>()` is an ArrayIndex
#[test]
#[allow(clippy::just_underscores_and_digits)]
fn array_index() {
    fn takes<Idx: ArrayIndex>() -> usize {
        Idx::capacity()
    }
    assert_eq!(takes::<u8>(), 256);
    assert_eq!(takes::<u16>(), 65536);
    #[cfg(not(target_pointer_width = "16"))]
    {
        assert_eq!(takes::<u32>(), 1 << 32);
        #[cfg(not(target_pointer_width = "32"))]
        {
            assert_eq!(takes::<u64>(), usize::MAX);
        }
    }
    assert_eq!(takes::<usize>(), usize::MAX);
}

#[test]
fn index_conversion() {
    assert_eq!(u8::from_usize(255), Some(255u8));
    assert_eq!(u8::from_usize(256), None);
    assert_eq!(u16::from_usize(70_000), None);
    assert_eq!(ArrayIndex::index(42u16), 42usize);
}

#[test]
fn tolerance_by_width() {
    assert!(<f32 as Float>::UNIT_TOLERANCE > <f64 as Float>::UNIT_TOLERANCE as f32);
    assert_eq!(<f64 as Float>::UNIT_TOLERANCE, 1e-9);
}

#[quickcheck]
fn f64_conversion_is_identity(v: f64) -> bool {
    let back = <f64 as Float>::lossy_from_f64(v).as_f64();
    back == v || (v.is_nan() && back.is_nan())
}

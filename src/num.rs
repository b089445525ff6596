//! Arithmetic bounds for the summing queries.

/// Addition that reports overflow instead of wrapping or panicking.
///
/// Implemented for every primitive integer type.
pub trait CheckedAdd: Sized {
    /// Adds `rhs` to `self`, returning `None` if the result does not fit.
    fn checked_add(&self, rhs: &Self) -> Option<Self>;
}

macro_rules! checked_add_impl {
    ($($t:ty)*) => {$(
        impl CheckedAdd for $t {
            fn checked_add(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_add(*self, *rhs)
            }
        }
    )*};
}

checked_add_impl!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

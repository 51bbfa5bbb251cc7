/// A value that maps onto a dense, zero-based bucket index relative to some minimum.
///
/// `offset_from` and `from_offset` must be inverses of one another for every `value` in
/// `[min, max]`:
///
/// ```ignore
/// assert_eq!(value.offset_from(min).map(|o| T::from_offset(min, o)), Some(value));
/// ```
///
/// Implemented for all of the primitive integer types. Signed types are handled with wrapping
/// arithmetic so that a range such as `[i8::MIN, i8::MAX]` maps onto `0..=255`.
pub trait BucketKey: Copy + PartialOrd {
    /// Distance of `self` above `min`, or `None` if that distance does not fit in a `usize`.
    /// Only called with `self >= min`.
    fn offset_from(self, min: Self) -> Option<usize>;

    /// The value that sits `offset` above `min`.
    fn from_offset(min: Self, offset: usize) -> Self;
}

macro_rules! impl_bucket_key {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl BucketKey for $t {
                #[inline]
                fn offset_from(self, min: Self) -> Option<usize> {
                    usize::try_from(self.wrapping_sub(min) as $u).ok()
                }

                #[inline]
                fn from_offset(min: Self, offset: usize) -> Self {
                    min.wrapping_add(offset as $t)
                }
            }
        )*
    };
}

impl_bucket_key! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}

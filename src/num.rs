use std::{
    fmt::Debug,
    ops::{Add, Mul, Rem, Sub},
};

/// Number types usable with `range` and the arithmetic helpers.
pub trait Numeric:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Rem<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// `self + rhs`, or `None` if the sum does not fit in `Self`.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer {
    ($($t:ty),*) => {
        $(impl Numeric for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }
        })*
    };
}

macro_rules! float {
    ($($t:ty),*) => {
        $(impl Numeric for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            // floats saturate to infinity instead of overflowing
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
        })*
    };
}

integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_reports_overflow() {
        assert_eq!(Numeric::checked_add(250u8, 5), Some(255));
        assert_eq!(Numeric::checked_add(250u8, 10), None);
        assert_eq!(Numeric::checked_add(i8::MIN, -1), None);
        assert_eq!(Numeric::checked_add(0.5f64, 0.25), Some(0.75));
    }
}

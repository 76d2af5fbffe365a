//! Small arithmetic and predicate helpers that pair well with the combinators.

use crate::num::Numeric;

pub fn identity<T>(value: T) -> T {
    value
}

pub fn increment<T: Numeric>(value: T) -> T {
    value + T::ONE
}

pub fn decrement<T: Numeric>(value: T) -> T {
    value - T::ONE
}

pub fn is_even<T: Numeric>(value: T) -> bool {
    value % (T::ONE + T::ONE) == T::ZERO
}

pub fn is_odd<T: Numeric>(value: T) -> bool {
    !is_even(value)
}

/// `a + b`, shaped for `reduce`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(reduce(sum, &between(1, 11), None), Ok(55));
/// assert_eq!(reduce(multiply, &between(1, 6), None), Ok(120));
/// ```
pub fn sum<T: Numeric>(a: T, b: T) -> T {
    a + b
}

pub fn multiply<T: Numeric>(a: T, b: T) -> T {
    a * b
}

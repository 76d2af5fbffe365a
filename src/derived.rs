//! Operators built purely out of the primitive combinators.
//!
//! None of these add generator state of their own. Operators returning two
//! sequences traverse the source once per half.

use crate::{
    build::repeat,
    callable::complement,
    compose::{drop_while, filter, interleave, take_while},
    sequence::Sequence,
};

/// The first `n` elements.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(to_vec(&take(3, &count_from(7))).unwrap(), vec![7, 8, 9]);
/// ```
pub fn take<T: 'static>(n: usize, sequence: &Sequence<T>) -> Sequence<T> {
    take_while(move |_, index| index < n, sequence)
}

/// Everything after the first `n` elements.
pub fn drop<T: 'static>(n: usize, sequence: &Sequence<T>) -> Sequence<T> {
    drop_while(move |_, index| index < n, sequence)
}

/// Elements up to, not including, the first one matching `predicate`.
pub fn take_until<T, P>(predicate: P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool + 'static,
{
    take_while(complement(predicate), sequence)
}

/// Elements from the first one matching `predicate` onward.
pub fn drop_until<T, P>(predicate: P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool + 'static,
{
    drop_while(complement(predicate), sequence)
}

/// `(take(n, sequence), drop(n, sequence))`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let (head, tail) = split_at(2, &up_to(5));
/// assert_eq!(to_vec(&head).unwrap(), vec![0, 1]);
/// assert_eq!(to_vec(&tail).unwrap(), vec![2, 3, 4]);
/// ```
pub fn split_at<T: 'static>(n: usize, sequence: &Sequence<T>) -> (Sequence<T>, Sequence<T>) {
    (take(n, sequence), drop(n, sequence))
}

/// `(take_while(predicate, sequence), drop_while(predicate, sequence))`.
pub fn split_with<T, P>(predicate: P, sequence: &Sequence<T>) -> (Sequence<T>, Sequence<T>)
where
    T: 'static,
    P: Fn(&T, usize) -> bool + Clone + 'static,
{
    (
        take_while(predicate.clone(), sequence),
        drop_while(predicate, sequence),
    )
}

/// `separator` between every pair of consecutive elements.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let spaced = interpose(0, &between(1, 4));
/// assert_eq!(to_vec(&spaced).unwrap(), vec![1, 0, 2, 0, 3]);
/// ```
pub fn interpose<T>(separator: T, sequence: &Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    drop(1, &interleave(&[repeat(separator), sequence.clone()]))
}

/// The elements `predicate` rejects.
pub fn remove<T, P>(predicate: P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool + 'static,
{
    filter(complement(predicate), sequence)
}

//! Forcing operations: the only places values are actually pulled.
//!
//! Each one starts a fresh traversal, drains it, and reports the first
//! failure the traversal hit. Whatever prefix was produced before a failure
//! is discarded.

use log::{debug, warn};

use crate::{
    config::ForceConfig,
    error::{Result, SeqError},
    generator::Generator,
    sequence::Sequence,
    step::Step,
};

/// Drive one traversal to the end, folding every value into `acc` with `step`.
fn drain<T, A, F>(
    sequence: &Sequence<T>,
    config: &ForceConfig,
    mut acc: A,
    mut step: F,
) -> Result<A>
where
    T: 'static,
    F: FnMut(A, T) -> A,
{
    config.validate()?;
    let mut generator = sequence.generator();
    let mut produced = 0;
    loop {
        match generator.next() {
            Step::Yielded(item) => {
                if let Some(limit) = config.max_pulls {
                    if produced >= limit {
                        warn!("abandoning traversal after {limit} values");
                        return Err(SeqError::InfiniteSequence { limit });
                    }
                }
                produced += 1;
                acc = step(acc, item.value);
            }
            Step::Complete(outcome) => {
                outcome?;
                debug!("traversal finished after {produced} values");
                return Ok(acc);
            }
        }
    }
}

/// Collect every element of `sequence`.
///
/// Only terminates if `sequence` does; bound infinite sources with `take` or
/// `take_while` first, or use [`to_vec_with`] and a pull limit.
pub fn to_vec<T: 'static>(sequence: &Sequence<T>) -> Result<Vec<T>> {
    to_vec_with(sequence, &ForceConfig::default())
}

/// [`to_vec`] under the limits in `config`.
pub fn to_vec_with<T: 'static>(sequence: &Sequence<T>, config: &ForceConfig) -> Result<Vec<T>> {
    drain(sequence, config, Vec::new(), |mut values, value| {
        values.push(value);
        values
    })
}

/// Left fold with an explicit seed, which may differ in type from the elements.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let text = fold(|acc: String, c| acc + &c.to_string(), &up_to(4u8), String::new());
/// assert_eq!(text.unwrap(), "0123");
/// ```
pub fn fold<T, A, F>(f: F, sequence: &Sequence<T>, initial: A) -> Result<A>
where
    T: 'static,
    F: Fn(A, T) -> A,
{
    fold_with(f, sequence, initial, &ForceConfig::default())
}

/// [`fold`] under the limits in `config`.
pub fn fold_with<T, A, F>(
    f: F,
    sequence: &Sequence<T>,
    initial: A,
    config: &ForceConfig,
) -> Result<A>
where
    T: 'static,
    F: Fn(A, T) -> A,
{
    drain(sequence, config, initial, f)
}

/// Left fold; without `initial` the first element seeds the accumulator.
///
/// Fails with [`SeqError::EmptySequence`] when `initial` is `None` and the
/// sequence is empty.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(reduce(|a, b| a + b, &between(1, 5), None), Ok(10));
/// assert_eq!(reduce(|a, b| a + b, &empty::<i32>(), Some(0)), Ok(0));
/// assert_eq!(reduce(|a, b| a + b, &empty::<i32>(), None), Err(SeqError::EmptySequence));
/// ```
pub fn reduce<T, F>(f: F, sequence: &Sequence<T>, initial: Option<T>) -> Result<T>
where
    T: 'static,
    F: Fn(T, T) -> T,
{
    reduce_with(f, sequence, initial, &ForceConfig::default())
}

/// [`reduce`] under the limits in `config`.
pub fn reduce_with<T, F>(
    f: F,
    sequence: &Sequence<T>,
    initial: Option<T>,
    config: &ForceConfig,
) -> Result<T>
where
    T: 'static,
    F: Fn(T, T) -> T,
{
    let acc = drain(sequence, config, initial, |acc, value| {
        Some(match acc {
            Some(a) => f(a, value),
            None => value,
        })
    })?;
    acc.ok_or(SeqError::EmptySequence)
}

/// Call `f` with every element of `sequence`, collected in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let longest = |values: Vec<&str>| values.iter().map(|s| s.len()).max();
/// let widest = apply(longest, &from_vec(vec!["a", "abc"]));
/// assert_eq!(widest, Ok(Some(3)));
/// ```
pub fn apply<T, R, F>(f: F, sequence: &Sequence<T>) -> Result<R>
where
    T: 'static,
    F: FnOnce(Vec<T>) -> R,
{
    to_vec(sequence).map(f)
}

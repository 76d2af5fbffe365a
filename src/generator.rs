//! The generator protocol every sequence source satisfies.
//!
//! A [`Generator`] is a single-pass cursor: each call to [`Generator::next`]
//! either yields the next [`Indexed`] value or completes with the traversal's
//! [`Outcome`]. Generators are owned by exactly one traversal and are never
//! shared; a [`Sequence`] hands out a fresh one per traversal.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut cursor = generator_of(vec![10, 20]);
//! assert_eq!(cursor.next().unwrap_yielded(), Indexed::new(0, 10));
//! assert_eq!(cursor.next().unwrap_yielded(), Indexed::new(1, 20));
//! assert_eq!(cursor.next().unwrap_complete(), Ok(()));
//! // Exhaustion is sticky
//! assert_eq!(cursor.next().unwrap_complete(), Ok(()));
//! ```

use std::{marker::PhantomData, rc::Rc};

use either::Either;

use crate::{
    build::ArrayGenerator,
    sequence::Sequence,
    step::{Indexed, Outcome, Pull, Step},
};

/// Core trait for single-pass, pull-based cursors over a sequence.
pub trait Generator {
    /// Type of the values produced.
    type Item;

    /// Produce the next value, or complete once the traversal is over.
    ///
    /// After the first `Complete`, further calls must keep completing.
    fn next(&mut self) -> Pull<Self::Item>;

    fn boxed(self) -> BoxGenerator<Self::Item>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// An owned, type-erased generator.
pub type BoxGenerator<T> = Box<dyn Generator<Item = T>>;

impl<G> Generator for Box<G>
where
    G: Generator + ?Sized,
{
    type Item = G::Item;

    fn next(&mut self) -> Pull<Self::Item> {
        (**self).next()
    }
}

impl<G> Generator for &'_ mut G
where
    G: Generator + ?Sized,
{
    type Item = G::Item;

    fn next(&mut self) -> Pull<Self::Item> {
        (**self).next()
    }
}

impl<L, R> Generator for Either<L, R>
where
    L: Generator,
    R: Generator<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Pull<Self::Item> {
        match self {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }
}

/// A generator that is exhausted from the start.
///
/// The identity element for concatenation and the fallback for sources that
/// have already been consumed.
pub struct NullGenerator<T>(PhantomData<fn() -> T>);

impl<T> Generator for NullGenerator<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        Step::Complete(Ok(()))
    }
}

/// Create a generator that completes immediately.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut empty = null_generator::<i32>();
/// assert!(empty.next().is_complete());
/// ```
pub fn null_generator<T>() -> NullGenerator<T> {
    NullGenerator(PhantomData)
}

/// Remembers how the wrapped generator finished and replays it on every later pull.
///
/// The inner generator is dropped as soon as it completes.
pub struct Fuse<G: Generator> {
    inner: Option<G>,
    outcome: Option<Outcome>,
}

impl<G: Generator> Fuse<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner: Some(inner),
            outcome: None,
        }
    }

    /// Check whether the wrapped generator has completed.
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }
}

impl<G: Generator> Generator for Fuse<G> {
    type Item = G::Item;

    fn next(&mut self) -> Pull<Self::Item> {
        if let Some(outcome) = &self.outcome {
            return Step::Complete(outcome.clone());
        }
        match self.inner.as_mut() {
            Some(inner) => match inner.next() {
                Step::Yielded(item) => Step::Yielded(item),
                Step::Complete(outcome) => {
                    self.inner = None;
                    self.outcome = Some(outcome.clone());
                    Step::Complete(outcome)
                }
            },
            None => Step::Complete(Ok(())),
        }
    }
}

/// Zero-based output counter shared by generators that renumber what they emit.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Position(usize);

impl Position {
    /// Tag `value` with the current position and advance.
    pub(crate) fn emit<T>(&mut self, value: T) -> Pull<T> {
        let index = self.0;
        self.0 += 1;
        Step::Yielded(Indexed::new(index, value))
    }
}

/// Anything [`generator_of`] knows how to turn into a generator.
pub enum Source<T> {
    /// An existing cursor, passed through untouched
    Generator(BoxGenerator<T>),
    /// A finite, ordered container
    Array(Rc<[T]>),
    /// A sequence description; a fresh traversal is started
    Sequence(Sequence<T>),
}

impl<T> From<Vec<T>> for Source<T> {
    fn from(items: Vec<T>) -> Self {
        Source::Array(items.into())
    }
}

impl<T: Clone> From<&[T]> for Source<T> {
    fn from(items: &[T]) -> Self {
        Source::Array(items.into())
    }
}

impl<T> From<Sequence<T>> for Source<T> {
    fn from(sequence: Sequence<T>) -> Self {
        Source::Sequence(sequence)
    }
}

impl<T> From<&Sequence<T>> for Source<T> {
    fn from(sequence: &Sequence<T>) -> Self {
        Source::Sequence(sequence.clone())
    }
}

impl<T> From<BoxGenerator<T>> for Source<T> {
    fn from(generator: BoxGenerator<T>) -> Self {
        Source::Generator(generator)
    }
}

/// Normalize a generator, array, or sequence into a generator.
///
/// Generators pass through unchanged, arrays get a fresh cursor, and
/// sequences start a new traversal.
pub fn generator_of<T>(source: impl Into<Source<T>>) -> BoxGenerator<T>
where
    T: Clone + 'static,
{
    match source.into() {
        Source::Generator(generator) => generator,
        Source::Array(items) => ArrayGenerator::new(items).boxed(),
        Source::Sequence(sequence) => sequence.generator(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(u32);

    impl Generator for Countdown {
        type Item = u32;

        fn next(&mut self) -> Pull<u32> {
            if self.0 == 0 {
                return Step::Complete(Ok(()));
            }
            self.0 -= 1;
            Step::Yielded(Indexed::new(0, self.0))
        }
    }

    #[test]
    fn test_generator_of_passes_generators_through() {
        let mut generator = generator_of(Countdown(2).boxed());
        assert_eq!(generator.next().unwrap_yielded().value, 1);
        assert_eq!(generator.next().unwrap_yielded().value, 0);
        assert!(generator.next().is_complete());
    }

    #[test]
    fn test_generator_of_array_is_fresh_each_time() {
        let items: Rc<[i32]> = vec![1, 2].into();
        let mut first = generator_of(Source::Array(items.clone()));
        first.next();
        let mut second = generator_of(Source::Array(items));
        assert_eq!(second.next().unwrap_yielded(), Indexed::new(0, 1));
    }

    #[test]
    fn test_generator_of_sequence_starts_independent_traversals() {
        let seq = crate::build::from_vec(vec!['a', 'b', 'c']);
        let mut first = generator_of(&seq);
        let mut second = generator_of(&seq);

        assert_eq!(first.next().unwrap_yielded(), Indexed::new(0, 'a'));
        assert_eq!(first.next().unwrap_yielded(), Indexed::new(1, 'b'));
        assert_eq!(second.next().unwrap_yielded(), Indexed::new(0, 'a'));
        assert_eq!(first.next().unwrap_yielded(), Indexed::new(2, 'c'));
        assert!(first.next().is_complete());
        assert_eq!(second.next().unwrap_yielded(), Indexed::new(1, 'b'));
    }

    #[test]
    fn test_fuse_replays_failure() {
        struct Failing;
        impl Generator for Failing {
            type Item = ();
            fn next(&mut self) -> Pull<()> {
                Step::Complete(Err(crate::SeqError::EmptySequence))
            }
        }

        let mut fused = Fuse::new(Failing);
        assert!(!fused.is_complete());
        assert_eq!(fused.next().unwrap_complete(), Err(crate::SeqError::EmptySequence));
        assert!(fused.is_complete());
        assert_eq!(fused.next().unwrap_complete(), Err(crate::SeqError::EmptySequence));
    }

    #[test]
    fn test_either_dispatches_to_active_side() {
        let mut left: Either<Countdown, NullGenerator<u32>> = Either::Left(Countdown(1));
        assert!(!left.next().is_complete());

        let mut right: Either<Countdown, NullGenerator<u32>> = Either::Right(null_generator());
        assert!(right.next().is_complete());
    }

    #[test]
    fn test_position_counts_from_zero() {
        let mut position = Position::default();
        assert_eq!(position.emit('a').unwrap_yielded(), Indexed::new(0, 'a'));
        assert_eq!(position.emit('b').unwrap_yielded(), Indexed::new(1, 'b'));
    }
}

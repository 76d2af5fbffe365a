//! Iterator adapter over one traversal of a [`Sequence`].
//!
//! [`SeqIter`] lets sequences plug into `for` loops and the standard
//! [`Iterator`] toolbox. Because `Iterator::next` has no room for errors, the
//! adapter stops at the first failure and keeps the [`Outcome`] so it can be
//! inspected afterwards.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = Sequence::range(0, Some(6), 0).into_iter();
//! assert_eq!(iter.next(), None);
//! assert!(matches!(iter.outcome(), Some(Err(SeqError::InvalidArgument { .. }))));
//!
//! let mut iter = Sequence::up_to(3).into_iter();
//! let values: Vec<_> = iter.by_ref().collect();
//! assert_eq!(values, vec![0, 1, 2]);
//! assert_eq!(iter.into_outcome(), Some(Ok(())));
//! ```

use crate::{
    generator::{BoxGenerator, Generator},
    sequence::Sequence,
    step::{Outcome, Step},
};

/// Iterator over the values of one traversal.
///
/// Both `SeqIter` and `&mut SeqIter` implement `Iterator`, so the outcome is
/// still available after iterating by reference.
pub struct SeqIter<T> {
    state: SeqIterState<T>,
}

enum SeqIterState<T> {
    Active(BoxGenerator<T>),
    Complete(Outcome),
    Invalid,
}

impl<T> SeqIterState<T> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, SeqIterState::Invalid)
    }
}

impl<T> SeqIter<T> {
    /// Iterate over the values `generator` produces.
    pub fn new(generator: BoxGenerator<T>) -> Self {
        Self {
            state: SeqIterState::Active(generator),
        }
    }

    /// Check if the traversal has ended, successfully or not.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SeqIterState::Complete(_))
    }

    /// How the traversal ended, or `None` while it is still running.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            SeqIterState::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Consume the iterator and return how the traversal ended.
    pub fn into_outcome(self) -> Option<Outcome> {
        match self.state {
            SeqIterState::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl<T> Iterator for SeqIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.state.take() {
            SeqIterState::Active(mut generator) => match generator.next() {
                Step::Yielded(item) => {
                    self.state = SeqIterState::Active(generator);
                    Some(item.value)
                }
                Step::Complete(outcome) => {
                    self.state = SeqIterState::Complete(outcome);
                    None
                }
            },
            SeqIterState::Complete(outcome) => {
                self.state = SeqIterState::Complete(outcome);
                None
            }
            SeqIterState::Invalid => None,
        }
    }
}

impl<T: 'static> Sequence<T> {
    /// Start a traversal as a standard iterator.
    pub fn iter(&self) -> SeqIter<T> {
        SeqIter::new(self.generator())
    }
}

impl<T: 'static> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SeqError, build::count_from};

    #[test]
    fn test_for_loop_over_reference() {
        let seq = Sequence::from(vec![1, 2]);
        let mut values = Vec::new();
        for value in &seq {
            values.push(value);
        }
        assert_eq!(values, vec![1, 2]);
        // the sequence is still usable
        assert_eq!(seq.iter().count(), 2);
    }

    #[test]
    fn test_iterating_infinite_sequence_with_std_take() {
        let mut iter = count_from(1u32).iter();
        let values: Vec<_> = (&mut iter).take(3).collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(!iter.is_complete());
        assert_eq!(iter.outcome(), None);
    }

    #[test]
    fn test_outcome_after_failure() {
        let mut iter = Sequence::<i32>::up_to(10).partition(0, 1).iter();
        assert!(iter.next().is_none());
        assert!(iter.is_complete());
        assert_eq!(
            iter.into_outcome(),
            Some(Err(SeqError::invalid("size", "must be at least 1")))
        );
    }

    #[test]
    fn test_exhausted_iterator_stays_exhausted() {
        let mut iter = Sequence::from(vec!['z']).iter();
        assert_eq!(iter.next(), Some('z'));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}

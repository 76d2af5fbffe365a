//! The result of pulling a generator once.

use crate::error::SeqError;

/// Result of a generator pull: either a produced value or the end of the traversal.
///
/// `Step` plays the role `Option` plays for [`Iterator`], except that the
/// completed side carries the traversal's [`Outcome`] so failures surface at
/// the exact pull that hit them.
///
/// # Examples
///
/// ```rust
/// use lazyseq::{Indexed, Step};
///
/// let produced: Step<Indexed<i32>, ()> = Step::Yielded(Indexed::new(0, 42));
/// let doubled = produced.map_yielded(|item| item.map(|v| v * 2));
/// assert_eq!(doubled.unwrap_yielded().value, 84);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// The generator produced a value and can be pulled again
    Yielded(Y),
    /// The generator is exhausted
    Complete(D),
}

/// How a traversal ended: `Ok(())` for ordinary exhaustion, `Err` when a pull failed.
pub type Outcome = Result<(), SeqError>;

/// What a single [`Generator::next`](crate::Generator::next) call returns.
pub type Pull<T> = Step<Indexed<T>, Outcome>;

/// A produced value tagged with its zero-based position in the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Indexed<T> {
    pub index: usize,
    pub value: T,
}

impl<T> Indexed<T> {
    #[inline]
    pub const fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }

    /// Transform the value, keeping the index.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Indexed<U>
    where
        F: FnOnce(T) -> U,
    {
        Indexed {
            index: self.index,
            value: f(self.value),
        }
    }
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Maps a `Step<Y, D>` to `Step<Y2, D>` by applying a function to the yielded value.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Returns the contained `Yielded` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Complete`.
    ///
    /// ```should_panic
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Complete("exhausted");
    /// x.unwrap_yielded(); // panics
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the contained `Complete` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

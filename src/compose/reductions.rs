use std::rc::Rc;

use crate::{
    generator::{BoxGenerator, Generator, Position},
    sequence::Sequence,
    step::{Pull, Step},
};

enum ReductionsState<T> {
    Start(Option<T>),
    Running(T),
    Invalid,
}

impl<T> ReductionsState<T> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, ReductionsState::Invalid)
    }
}

/// Emits every intermediate accumulator of a left fold.
pub struct Reductions<T> {
    source: BoxGenerator<T>,
    f: Rc<dyn Fn(T, T) -> T>,
    state: ReductionsState<T>,
    position: Position,
}

impl<T: Clone> Generator for Reductions<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        let acc = match self.state.take() {
            ReductionsState::Start(Some(initial)) => initial,
            ReductionsState::Start(None) => match self.source.next() {
                Step::Yielded(item) => item.value,
                Step::Complete(outcome) => return Step::Complete(outcome),
            },
            ReductionsState::Running(acc) => match self.source.next() {
                Step::Yielded(item) => (self.f)(acc, item.value),
                Step::Complete(outcome) => return Step::Complete(outcome),
            },
            ReductionsState::Invalid => return Step::Complete(Ok(())),
        };
        self.state = ReductionsState::Running(acc.clone());
        self.position.emit(acc)
    }
}

/// Lazily produce every accumulator value `reduce` would pass through.
///
/// The first element is the seed (`initial`, or the first element of
/// `sequence` when `initial` is `None`), and the last is the final result.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let totals = reductions(|a, b| a + b, &between(1, 5), None);
/// assert_eq!(to_vec(&totals).unwrap(), vec![1, 3, 6, 10]);
///
/// let seeded = reductions(|a, b| a + b, &between(1, 5), Some(100));
/// assert_eq!(to_vec(&seeded).unwrap(), vec![100, 101, 103, 106, 110]);
/// ```
pub fn reductions<T, F>(f: F, sequence: &Sequence<T>, initial: Option<T>) -> Sequence<T>
where
    T: Clone + 'static,
    F: Fn(T, T) -> T + 'static,
{
    let f: Rc<dyn Fn(T, T) -> T> = Rc::new(f);
    let sequence = sequence.clone();
    Sequence::from_factory(move || Reductions {
        source: sequence.generator(),
        f: f.clone(),
        state: ReductionsState::Start(initial.clone()),
        position: Position::default(),
    })
}

//! Predicate-driven selection: `filter`, `take_while`, `drop_while`.
//!
//! Every predicate receives the value together with the index it had in the
//! input sequence, not its index in the output.

use std::rc::Rc;

use crate::{
    generator::{BoxGenerator, Generator, Position},
    sequence::Sequence,
    step::{Indexed, Pull, Step},
};

type Predicate<T> = Rc<dyn Fn(&T, usize) -> bool>;

/// Keeps the elements a predicate accepts.
pub struct Filter<T> {
    source: BoxGenerator<T>,
    predicate: Predicate<T>,
    position: Position,
}

impl<T> Generator for Filter<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        loop {
            match self.source.next() {
                Step::Yielded(Indexed { index, value }) => {
                    if (self.predicate)(&value, index) {
                        return self.position.emit(value);
                    }
                }
                Step::Complete(outcome) => return Step::Complete(outcome),
            }
        }
    }
}

/// Keep the elements of `sequence` for which `predicate(value, index)` holds.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let every_other = filter(|_, i| i % 2 == 0, &from_vec(vec!['a', 'b', 'c', 'd']));
/// assert_eq!(to_vec(&every_other).unwrap(), vec!['a', 'c']);
/// ```
pub fn filter<T, P>(predicate: P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool + 'static,
{
    let predicate: Predicate<T> = Rc::new(predicate);
    let sequence = sequence.clone();
    Sequence::from_factory(move || Filter {
        source: sequence.generator(),
        predicate: predicate.clone(),
        position: Position::default(),
    })
}

/// Yields a prefix, ending at the first element the predicate rejects.
pub struct TakeWhile<T> {
    source: BoxGenerator<T>,
    predicate: Predicate<T>,
    done: bool,
}

impl<T> Generator for TakeWhile<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        if self.done {
            return Step::Complete(Ok(()));
        }
        match self.source.next() {
            Step::Yielded(item) if (self.predicate)(&item.value, item.index) => Step::Yielded(item),
            Step::Yielded(_) => {
                self.done = true;
                Step::Complete(Ok(()))
            }
            Step::Complete(outcome) => Step::Complete(outcome),
        }
    }
}

/// Yield elements while `predicate(value, index)` holds; the first rejected element is discarded
/// together with everything after it.
pub fn take_while<T, P>(predicate: P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool + 'static,
{
    let predicate: Predicate<T> = Rc::new(predicate);
    let sequence = sequence.clone();
    Sequence::from_factory(move || TakeWhile {
        source: sequence.generator(),
        predicate: predicate.clone(),
        done: false,
    })
}

/// Skips a prefix, then passes everything through.
pub struct DropWhile<T> {
    source: BoxGenerator<T>,
    predicate: Predicate<T>,
    dropping: bool,
    position: Position,
}

impl<T> Generator for DropWhile<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        loop {
            match self.source.next() {
                Step::Yielded(Indexed { index, value }) => {
                    if self.dropping && (self.predicate)(&value, index) {
                        continue;
                    }
                    self.dropping = false;
                    return self.position.emit(value);
                }
                Step::Complete(outcome) => return Step::Complete(outcome),
            }
        }
    }
}

/// Discard elements while `predicate(value, index)` holds, then yield the rest unconditionally.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let tail = drop_while(|v, _| *v < 3, &from_vec(vec![1, 2, 3, 1, 2]));
/// assert_eq!(to_vec(&tail).unwrap(), vec![3, 1, 2]);
/// ```
pub fn drop_while<T, P>(predicate: P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool + 'static,
{
    let predicate: Predicate<T> = Rc::new(predicate);
    let sequence = sequence.clone();
    Sequence::from_factory(move || DropWhile {
        source: sequence.generator(),
        predicate: predicate.clone(),
        dropping: true,
        position: Position::default(),
    })
}

use crate::{
    generator::{BoxGenerator, Generator, Position},
    sequence::Sequence,
    step::{Pull, Step},
};

/// Restarts its input from scratch every time it runs out.
pub struct Cycle<T> {
    sequence: Sequence<T>,
    current: BoxGenerator<T>,
    produced_this_pass: bool,
    position: Position,
}

impl<T: 'static> Generator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        loop {
            match self.current.next() {
                Step::Yielded(item) => {
                    self.produced_this_pass = true;
                    return self.position.emit(item.value);
                }
                Step::Complete(Err(e)) => return Step::Complete(Err(e)),
                // a pass that produced nothing would loop forever
                Step::Complete(Ok(())) if !self.produced_this_pass => {
                    return Step::Complete(Ok(()));
                }
                Step::Complete(Ok(())) => {
                    self.current = self.sequence.generator();
                    self.produced_this_pass = false;
                }
            }
        }
    }
}

/// Repeat the elements of a finite sequence forever, in order.
///
/// Each pass is a fresh traversal of `sequence`. An empty input gives an empty
/// result instead of spinning.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let looped = cycle(&from_vec(vec![1, 2, 3]));
/// assert_eq!(to_vec(&take(7, &looped)).unwrap(), vec![1, 2, 3, 1, 2, 3, 1]);
/// ```
pub fn cycle<T: 'static>(sequence: &Sequence<T>) -> Sequence<T> {
    let sequence = sequence.clone();
    Sequence::from_factory(move || Cycle {
        current: sequence.generator(),
        sequence: sequence.clone(),
        produced_this_pass: false,
        position: Position::default(),
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{
        build::{empty, from_vec, repeat_with},
        derived::take,
        force::to_vec,
    };

    #[test]
    fn test_cycle_three_passes() {
        let base = from_vec(vec!['a', 'b']);
        let looped = to_vec(&take(6, &cycle(&base))).unwrap();
        let once = to_vec(&base).unwrap();
        assert_eq!(looped, [once.clone(), once.clone(), once].concat());
    }

    #[test]
    fn test_cycle_of_empty_is_empty() {
        assert!(to_vec(&cycle(&empty::<i32>())).unwrap().is_empty());
    }

    #[test]
    fn test_cycle_restarts_source_per_pass() {
        let traversals = Rc::new(Cell::new(0));
        let counter = traversals.clone();
        let base = take(
            2,
            &repeat_with(move || {
                counter.set(counter.get() + 1);
                0
            }),
        );

        to_vec(&take(6, &cycle(&base))).unwrap();
        // three full passes of 2 values plus 1 rejected pull, then the
        // seventh value is drawn from a fourth pass before take rejects it
        assert_eq!(traversals.get(), 10);
    }

    #[test]
    fn test_cycle_restartable_across_traversals() {
        let looped = take(4, &cycle(&from_vec(vec![1, 2, 3])));
        assert_eq!(to_vec(&looped).unwrap(), to_vec(&looped).unwrap());
    }
}

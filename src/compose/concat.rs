use std::{collections::VecDeque, rc::Rc};

use crate::{
    generator::{BoxGenerator, Generator, Position},
    sequence::Sequence,
    step::{Pull, Step},
};

/// Runs each input to exhaustion before starting the next.
///
/// An input's traversal only begins once the previous one has completed.
pub struct Concat<T> {
    sequences: Rc<[Sequence<T>]>,
    next_input: usize,
    current: Option<BoxGenerator<T>>,
    position: Position,
}

impl<T: 'static> Generator for Concat<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        loop {
            let step = match self.current.as_mut() {
                Some(current) => current.next(),
                None => match self.sequences.get(self.next_input) {
                    Some(sequence) => {
                        self.current = Some(sequence.generator());
                        self.next_input += 1;
                        continue;
                    }
                    None => return Step::Complete(Ok(())),
                },
            };
            match step {
                Step::Yielded(item) => return self.position.emit(item.value),
                Step::Complete(Ok(())) => self.current = None,
                Step::Complete(Err(e)) => return Step::Complete(Err(e)),
            }
        }
    }
}

/// Yield all of the first sequence, then all of the second, and so on.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let joined = concat(&[from_vec(vec![4]), between(1, 4)]);
/// assert_eq!(to_vec(&joined).unwrap(), vec![4, 1, 2, 3]);
/// ```
pub fn concat<T: 'static>(sequences: &[Sequence<T>]) -> Sequence<T> {
    let sequences: Rc<[Sequence<T>]> = sequences.into();
    Sequence::from_factory(move || Concat {
        sequences: sequences.clone(),
        next_input: 0,
        current: None,
        position: Position::default(),
    })
}

/// Takes one element from each input per round.
///
/// A round is pulled completely before any of it is yielded, so a round that
/// runs into an exhausted input produces nothing.
pub struct Interleave<T> {
    sources: Vec<BoxGenerator<T>>,
    round: VecDeque<T>,
    position: Position,
}

impl<T> Generator for Interleave<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        if self.round.is_empty() {
            if self.sources.is_empty() {
                return Step::Complete(Ok(()));
            }
            for source in &mut self.sources {
                match source.next() {
                    Step::Yielded(item) => self.round.push_back(item.value),
                    Step::Complete(outcome) => {
                        self.round.clear();
                        return Step::Complete(outcome);
                    }
                }
            }
        }
        match self.round.pop_front() {
            Some(value) => self.position.emit(value),
            None => Step::Complete(Ok(())),
        }
    }
}

/// Round-robin over the inputs, in order, until a round hits an exhausted input.
///
/// The result always holds `inputs × shortest input length` elements.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mixed = interleave(&[
///     from_vec(vec![0, 1, 2]),
///     between(3, 9),
///     from_vec(vec![9, 10, 11, 12]),
/// ]);
/// assert_eq!(to_vec(&mixed).unwrap(), vec![0, 3, 9, 1, 4, 10, 2, 5, 11]);
/// ```
pub fn interleave<T: 'static>(sequences: &[Sequence<T>]) -> Sequence<T> {
    let sequences: Rc<[Sequence<T>]> = sequences.into();
    Sequence::from_factory(move || Interleave {
        sources: sequences.iter().map(Sequence::generator).collect(),
        round: VecDeque::with_capacity(sequences.len()),
        position: Position::default(),
    })
}

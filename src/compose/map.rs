//! Element-wise transforms over one or several sequences.
//!
//! The multi-sequence forms pull their inputs left to right on every step and
//! stop as soon as any input is exhausted.

use std::rc::Rc;

use crate::{
    generator::{BoxGenerator, Generator, Position},
    sequence::Sequence,
    step::{Indexed, Pull, Step},
};

/// Applies a `(value, index)` transform to every element.
pub struct Map<T, U> {
    source: BoxGenerator<T>,
    f: Rc<dyn Fn(T, usize) -> U>,
}

impl<T, U> Generator for Map<T, U> {
    type Item = U;

    fn next(&mut self) -> Pull<U> {
        let f = &self.f;
        self.source
            .next()
            .map_yielded(|Indexed { index, value }| Indexed::new(index, f(value, index)))
    }
}

/// Transform every element of `sequence` with `f(value, index)`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let scaled = map(|v, i| v * i, &from_vec(vec![5, 5, 5]));
/// assert_eq!(to_vec(&scaled).unwrap(), vec![0, 5, 10]);
/// ```
pub fn map<T, U, F>(f: F, sequence: &Sequence<T>) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T, usize) -> U + 'static,
{
    let f: Rc<dyn Fn(T, usize) -> U> = Rc::new(f);
    let sequence = sequence.clone();
    Sequence::from_factory(move || Map {
        source: sequence.generator(),
        f: f.clone(),
    })
}

/// Combines two sequences pairwise.
pub struct Map2<A, B, U> {
    left: BoxGenerator<A>,
    right: BoxGenerator<B>,
    f: Rc<dyn Fn(A, B) -> U>,
    position: Position,
}

impl<A, B, U> Generator for Map2<A, B, U> {
    type Item = U;

    fn next(&mut self) -> Pull<U> {
        let a = match self.left.next() {
            Step::Yielded(item) => item.value,
            Step::Complete(outcome) => return Step::Complete(outcome),
        };
        let b = match self.right.next() {
            Step::Yielded(item) => item.value,
            Step::Complete(outcome) => return Step::Complete(outcome),
        };
        self.position.emit((self.f)(a, b))
    }
}

/// Combine `left` and `right` element by element, stopping with the shorter one.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = map2(|n, c| format!("{n}{c}"), &count_from(1), &from_vec(vec!['a', 'b']));
/// assert_eq!(to_vec(&pairs).unwrap(), vec!["1a", "2b"]);
/// ```
pub fn map2<A, B, U, F>(f: F, left: &Sequence<A>, right: &Sequence<B>) -> Sequence<U>
where
    A: 'static,
    B: 'static,
    U: 'static,
    F: Fn(A, B) -> U + 'static,
{
    let f: Rc<dyn Fn(A, B) -> U> = Rc::new(f);
    let (left, right) = (left.clone(), right.clone());
    Sequence::from_factory(move || Map2 {
        left: left.generator(),
        right: right.generator(),
        f: f.clone(),
        position: Position::default(),
    })
}

/// Combines any number of same-typed sequences column by column.
pub struct MapN<T, U> {
    sources: Vec<BoxGenerator<T>>,
    f: Rc<dyn Fn(Vec<T>) -> U>,
    position: Position,
}

impl<T, U> Generator for MapN<T, U> {
    type Item = U;

    fn next(&mut self) -> Pull<U> {
        if self.sources.is_empty() {
            return Step::Complete(Ok(()));
        }
        let mut column = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            match source.next() {
                Step::Yielded(item) => column.push(item.value),
                Step::Complete(outcome) => return Step::Complete(outcome),
            }
        }
        self.position.emit((self.f)(column))
    }
}

/// Apply `f` to the tuple of current values of every sequence, shortest-wins.
///
/// With no sequences the result is empty.
pub fn map_n<T, U, F>(f: F, sequences: &[Sequence<T>]) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    F: Fn(Vec<T>) -> U + 'static,
{
    let f: Rc<dyn Fn(Vec<T>) -> U> = Rc::new(f);
    let sequences: Rc<[Sequence<T>]> = sequences.into();
    Sequence::from_factory(move || MapN {
        sources: sequences.iter().map(Sequence::generator).collect(),
        f: f.clone(),
        position: Position::default(),
    })
}

use std::{cell::RefCell, rc::Rc};

use either::Either;

use crate::{
    generator::{Generator, null_generator},
    sequence::Sequence,
    step::{Indexed, Pull, Step},
};

/// Cursor over a shared, immutable slice.
///
/// Every traversal of an array-backed sequence gets its own cursor over the
/// same `Rc<[T]>`, so arrays replay identically.
pub struct ArrayGenerator<T> {
    items: Rc<[T]>,
    position: usize,
}

impl<T> ArrayGenerator<T> {
    pub fn new(items: Rc<[T]>) -> Self {
        Self { items, position: 0 }
    }
}

impl<T: Clone> Generator for ArrayGenerator<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        match self.items.get(self.position) {
            Some(value) => {
                let index = self.position;
                self.position += 1;
                Step::Yielded(Indexed::new(index, value.clone()))
            }
            None => Step::Complete(Ok(())),
        }
    }
}

/// Create a finite sequence over the elements of `items`, in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let letters = from_vec(vec!['a', 'b']);
/// assert_eq!(to_vec(&letters).unwrap(), vec!['a', 'b']);
/// // Re-traversal replays the same values
/// assert_eq!(to_vec(&letters).unwrap(), vec!['a', 'b']);
/// ```
pub fn from_vec<T>(items: Vec<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    let items: Rc<[T]> = items.into();
    Sequence::from_factory(move || ArrayGenerator::new(items.clone()))
}

/// Create a sequence with no elements.
pub fn empty<T: 'static>() -> Sequence<T> {
    Sequence::from_factory(null_generator::<T>)
}

/// Wrap a one-shot generator as a sequence.
///
/// The first traversal drives `generator` itself; every later traversal sees
/// an empty sequence, because the values have already been consumed.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let once = from_generator(generator_of(vec![1, 2, 3]));
/// assert_eq!(to_vec(&once).unwrap(), vec![1, 2, 3]);
/// assert_eq!(to_vec(&once).unwrap(), Vec::<i32>::new());
/// ```
pub fn from_generator<T, G>(generator: G) -> Sequence<T>
where
    T: 'static,
    G: Generator<Item = T> + 'static,
{
    let slot = Rc::new(RefCell::new(Some(generator)));
    Sequence::from_factory(move || match slot.borrow_mut().take() {
        Some(generator) => Either::Left(generator),
        None => Either::Right(null_generator()),
    })
}

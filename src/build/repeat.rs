use std::rc::Rc;

use crate::{
    callable::{Callable, callable},
    generator::{Generator, Position},
    sequence::Sequence,
    step::Pull,
};

/// Yields the result of calling a thunk, forever.
pub struct Repeat<T> {
    thunk: Rc<dyn Fn(()) -> T>,
    position: Position,
}

impl<T> Generator for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        let value = (self.thunk)(());
        self.position.emit(value)
    }
}

/// Create an infinite sequence from a constant or a thunk re-invoked on every pull.
pub fn repeat_callable<T>(value: Callable<(), T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    let thunk = callable(value);
    Sequence::from_factory(move || Repeat {
        thunk: thunk.clone(),
        position: Position::default(),
    })
}

/// Create an infinite sequence yielding `value` forever.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(to_vec(&take(3, &repeat("ab"))).unwrap(), vec!["ab", "ab", "ab"]);
/// ```
pub fn repeat<T>(value: T) -> Sequence<T>
where
    T: Clone + 'static,
{
    repeat_callable(Callable::constant(value))
}

/// Create an infinite sequence by calling `f` for each element.
pub fn repeat_with<T, F>(f: F) -> Sequence<T>
where
    T: Clone + 'static,
    F: Fn() -> T + 'static,
{
    repeat_callable(Callable::function(move |()| f()))
}

/// Yields `seed, f(seed), f(f(seed)), …`.
///
/// `f` is only applied when the next element is actually pulled.
pub struct Iterate<T> {
    f: Rc<dyn Fn(&T) -> T>,
    seed: T,
    previous: Option<T>,
    position: Position,
}

impl<T: Clone> Generator for Iterate<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        let value = match &self.previous {
            None => self.seed.clone(),
            Some(previous) => (self.f)(previous),
        };
        self.previous = Some(value.clone());
        self.position.emit(value)
    }
}

/// Create the infinite sequence `seed, f(seed), f(f(seed)), …`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let powers = iterate(|x: &u64| x * 2, 1);
/// assert_eq!(to_vec(&take(5, &powers)).unwrap(), vec![1, 2, 4, 8, 16]);
/// ```
pub fn iterate<T, F>(f: F, seed: T) -> Sequence<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    let f: Rc<dyn Fn(&T) -> T> = Rc::new(f);
    Sequence::from_factory(move || Iterate {
        f: f.clone(),
        seed: seed.clone(),
        previous: None,
        position: Position::default(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{derived::take, force::to_vec};

    #[test]
    fn test_repeat_with_calls_thunk_per_pull() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let seq = repeat_with(move || {
            counter.set(counter.get() + 1);
            counter.get()
        });

        assert_eq!(calls.get(), 0);
        let mut cursor = seq.generator();
        assert_eq!(cursor.next().unwrap_yielded().value, 1);
        assert_eq!(cursor.next().unwrap_yielded().value, 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_iterate_does_not_apply_ahead_of_demand() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let seq = iterate(
            move |x: &i32| {
                counter.set(counter.get() + 1);
                x + 1
            },
            0,
        );

        assert_eq!(to_vec(&take(1, &seq)).unwrap(), vec![0]);
        // take(1) pulls a second element to see the predicate fail
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_iterate_restarts_from_seed() {
        let seq = iterate(|s: &String| format!("{s}!"), "hi".to_string());
        let first = to_vec(&take(3, &seq)).unwrap();
        let second = to_vec(&take(3, &seq)).unwrap();
        assert_eq!(first, vec!["hi", "hi!", "hi!!"]);
        assert_eq!(first, second);
    }
}

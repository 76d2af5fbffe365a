//! Normalizing "a function or a plain value" into a function.

use std::rc::Rc;

/// Either a constant or a function producing values of type `R` from `A`.
///
/// Normalized once with [`callable`] so combinators only ever deal with the
/// function form.
pub enum Callable<A, R> {
    Constant(R),
    Function(Rc<dyn Fn(A) -> R>),
}

impl<A, R> Callable<A, R> {
    pub fn constant(value: R) -> Self {
        Callable::Constant(value)
    }

    pub fn function<F>(f: F) -> Self
    where
        F: Fn(A) -> R + 'static,
    {
        Callable::Function(Rc::new(f))
    }
}

impl<A, R: Clone> Clone for Callable<A, R> {
    fn clone(&self) -> Self {
        match self {
            Callable::Constant(value) => Callable::Constant(value.clone()),
            Callable::Function(f) => Callable::Function(f.clone()),
        }
    }
}

/// Turn a [`Callable`] into a function, wrapping constants as `move |_| value.clone()`.
///
/// ```rust
/// use lazyseq::{Callable, callable};
///
/// let seven = callable(Callable::<(), _>::constant(7));
/// assert_eq!(seven(()), 7);
///
/// let double = callable(Callable::function(|x: i32| x * 2));
/// assert_eq!(double(4), 8);
/// ```
pub fn callable<A, R>(c: Callable<A, R>) -> Rc<dyn Fn(A) -> R>
where
    A: 'static,
    R: Clone + 'static,
{
    match c {
        Callable::Function(f) => f,
        Callable::Constant(value) => Rc::new(move |_: A| value.clone()),
    }
}

/// Negate a `(value, index)` predicate.
///
/// ```rust
/// use lazyseq::complement;
///
/// let odd = complement(|v: &i32, _| v % 2 == 0);
/// assert!(odd(&3, 0));
/// assert!(!odd(&4, 1));
/// ```
pub fn complement<T, P>(predicate: P) -> impl Fn(&T, usize) -> bool
where
    P: Fn(&T, usize) -> bool,
{
    move |value: &T, index: usize| !predicate(value, index)
}

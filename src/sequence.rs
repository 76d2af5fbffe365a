//! The chainable [`Sequence`] handle.
//!
//! A `Sequence` is a description, not data: it owns a factory that builds a
//! fresh generator chain for every traversal. Cloning one is cheap, and every
//! method returns a new description while leaving the receiver untouched.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let looped = Sequence::from(vec![1, 2, 3]).cycle().take(10);
//! assert_eq!(looped.to_vec().unwrap(), vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
//!
//! let squares: Vec<u64> = Sequence::up_to(5u64).map(|x, _| x * x).into_iter().collect();
//! assert_eq!(squares, vec![0, 1, 4, 9, 16]);
//! ```

use std::{fmt, rc::Rc};

use log::trace;

use crate::{
    build,
    callable::Callable,
    compose,
    config::ForceConfig,
    derived,
    error::Result,
    force,
    generator::{BoxGenerator, Fuse, Generator},
    num::Numeric,
};

/// A lazy, possibly infinite, re-playable sequence of `T`.
pub struct Sequence<T> {
    factory: Rc<dyn Fn() -> BoxGenerator<T>>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
        }
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("item", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Sequence<T> {
    /// Describe a sequence by the function that starts one traversal of it.
    ///
    /// `factory` is called once per traversal and must hand out an
    /// independent generator every time for the sequence to be re-playable.
    pub fn from_factory<G, F>(factory: F) -> Self
    where
        G: Generator<Item = T> + 'static,
        F: Fn() -> G + 'static,
    {
        Self {
            factory: Rc::new(move || factory().boxed()),
        }
    }

    /// Start a new traversal.
    pub fn generator(&self) -> BoxGenerator<T> {
        trace!("starting traversal of Sequence<{}>", std::any::type_name::<T>());
        Fuse::new((self.factory)()).boxed()
    }

    /// Wrap a one-shot generator; see [`from_generator`](crate::from_generator).
    pub fn from_generator<G>(generator: G) -> Self
    where
        G: Generator<Item = T> + 'static,
    {
        build::from_generator(generator)
    }

    pub fn empty() -> Self {
        build::empty()
    }

    /// Concatenate any number of sequences.
    pub fn concat_all(sequences: &[Sequence<T>]) -> Self {
        compose::concat(sequences)
    }

    /// Round-robin over any number of sequences.
    pub fn interleave_all(sequences: &[Sequence<T>]) -> Self {
        compose::interleave(sequences)
    }

    pub fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T, usize) -> U + 'static,
    {
        compose::map(f, self)
    }

    /// Pairwise combination with `other`, shortest-wins.
    pub fn map2<B, U, F>(&self, other: &Sequence<B>, f: F) -> Sequence<U>
    where
        B: 'static,
        U: 'static,
        F: Fn(T, B) -> U + 'static,
    {
        compose::map2(f, self, other)
    }

    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'static,
    {
        compose::filter(predicate, self)
    }

    pub fn remove<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'static,
    {
        derived::remove(predicate, self)
    }

    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'static,
    {
        compose::take_while(predicate, self)
    }

    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'static,
    {
        compose::drop_while(predicate, self)
    }

    pub fn take_until<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'static,
    {
        derived::take_until(predicate, self)
    }

    pub fn drop_until<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'static,
    {
        derived::drop_until(predicate, self)
    }

    pub fn take(&self, n: usize) -> Self {
        derived::take(n, self)
    }

    pub fn drop(&self, n: usize) -> Self {
        derived::drop(n, self)
    }

    pub fn split_at(&self, n: usize) -> (Self, Self) {
        derived::split_at(n, self)
    }

    pub fn split_with<P>(&self, predicate: P) -> (Self, Self)
    where
        P: Fn(&T, usize) -> bool + Clone + 'static,
    {
        derived::split_with(predicate, self)
    }

    /// This sequence followed by `other`.
    pub fn concat(&self, other: &Sequence<T>) -> Self {
        compose::concat(&[self.clone(), other.clone()])
    }

    /// Round-robin between this sequence and `others`, in that order.
    pub fn interleave(&self, others: &[Sequence<T>]) -> Self {
        let mut all = Vec::with_capacity(others.len() + 1);
        all.push(self.clone());
        all.extend_from_slice(others);
        compose::interleave(&all)
    }

    pub fn cycle(&self) -> Self {
        compose::cycle(self)
    }

    /// Collect every element; see [`to_vec`](crate::to_vec).
    pub fn to_vec(&self) -> Result<Vec<T>> {
        force::to_vec(self)
    }

    pub fn to_vec_with(&self, config: &ForceConfig) -> Result<Vec<T>> {
        force::to_vec_with(self, config)
    }

    pub fn reduce<F>(&self, f: F, initial: Option<T>) -> Result<T>
    where
        F: Fn(T, T) -> T,
    {
        force::reduce(f, self, initial)
    }

    pub fn fold<A, F>(&self, f: F, initial: A) -> Result<A>
    where
        F: Fn(A, T) -> A,
    {
        force::fold(f, self, initial)
    }

    pub fn apply<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(Vec<T>) -> R,
    {
        force::apply(f, self)
    }
}

impl<T: Clone + 'static> Sequence<T> {
    /// A finite sequence over `items`.
    pub fn from_vec(items: Vec<T>) -> Self {
        build::from_vec(items)
    }

    pub fn repeat(value: T) -> Self {
        build::repeat(value)
    }

    pub fn repeat_with<F>(f: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        build::repeat_with(f)
    }

    /// Repeat a constant or a thunk; see [`Callable`].
    pub fn repeat_callable(value: Callable<(), T>) -> Self {
        build::repeat_callable(value)
    }

    pub fn iterate<F>(f: F, seed: T) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        build::iterate(f, seed)
    }

    pub fn reductions<F>(&self, f: F, initial: Option<T>) -> Self
    where
        F: Fn(T, T) -> T + 'static,
    {
        compose::reductions(f, self, initial)
    }

    /// Windows of `size` elements whose starts are `step` apart.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let windows = Sequence::up_to(10).partition(4, 2).map(|w, _| w.to_vec().unwrap());
    /// assert_eq!(
    ///     windows.to_vec().unwrap(),
    ///     vec![vec![0, 1, 2, 3], vec![2, 3, 4, 5], vec![4, 5, 6, 7], vec![6, 7, 8, 9]]
    /// );
    /// ```
    pub fn partition(&self, size: usize, step: usize) -> Sequence<Sequence<T>> {
        compose::partition(size, Some(step), None, self)
    }

    /// Like [`partition`](Self::partition), completing a short final window from `pad`.
    pub fn partition_padded(
        &self,
        size: usize,
        step: usize,
        pad: &Sequence<T>,
    ) -> Sequence<Sequence<T>> {
        compose::partition(size, Some(step), Some(pad), self)
    }

    /// Adjacent, non-overlapping windows of `size` elements.
    pub fn chunks(&self, size: usize) -> Sequence<Sequence<T>> {
        compose::partition(size, None, None, self)
    }

    pub fn interpose(&self, separator: T) -> Self {
        derived::interpose(separator, self)
    }
}

impl<T: Numeric> Sequence<T> {
    /// See [`range`](crate::range).
    pub fn range(start: T, stop: Option<T>, step: T) -> Self {
        build::range(start, stop, step)
    }

    pub fn up_to(stop: T) -> Self {
        build::up_to(stop)
    }

    pub fn between(start: T, stop: T) -> Self {
        build::between(start, stop)
    }

    pub fn count_from(start: T) -> Self {
        build::count_from(start)
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        build::from_vec(items)
    }
}

impl<T: Clone + 'static> FromIterator<T> for Sequence<T> {
    /// Collects eagerly; the resulting sequence replays the collected values.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        build::from_vec(iter.into_iter().collect())
    }
}

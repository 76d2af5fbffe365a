//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{
    BoxGenerator, Callable, ForceConfig, Generator, Indexed, Outcome, SeqError, SeqIter, Sequence,
    Step,
};

// Generator protocol
pub use crate::callable::{callable, complement};
pub use crate::{generator_of, null_generator};

// Sources
pub use crate::build::{
    between, count_from, empty, from_generator, from_vec, iterate, range, repeat, repeat_with,
    up_to,
};

// Combinators
pub use crate::compose::{
    concat, cycle, drop_while, filter, interleave, map, map_n, map2, partition, reductions,
    take_while,
};

// Derived operators
pub use crate::{drop, drop_until, interpose, remove, split_at, split_with, take, take_until};

// Forcing
pub use crate::{apply, fold, reduce, to_vec, to_vec_with};

// Helpers
pub use crate::{decrement, identity, increment, is_even, is_odd, multiply, sum};

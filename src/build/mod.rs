//! Building sequences from scratch
//!
//! Sources that do not consume another sequence: containers, one-shot
//! generators, numeric ranges, and infinite repetition.

mod range;
mod repeat;
mod source;

pub use range::{RangeGenerator, between, count_from, range, up_to};
pub use repeat::{Iterate, Repeat, iterate, repeat, repeat_callable, repeat_with};
pub use source::{ArrayGenerator, empty, from_generator, from_vec};

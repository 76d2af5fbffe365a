//! # Lazyseq: Restartable Lazy Sequences
//!
//! Describe potentially infinite sequences and transform them without ever
//! materializing more than a caller asks for.
//!
//! ## Core Types
//!
//! - **[`Generator`]**: Single-pass cursor pulled one [`Step`] at a time
//! - **[`Sequence`]**: Re-playable description that builds a fresh generator per traversal
//!
//! ## Key Features
//!
//! - **Lazy**: Nothing is computed until a forcing operation pulls values
//! - **Restartable**: Traversing a sequence twice yields the same values
//! - **Index-aware**: Transforms and predicates see `(value, index)`
//! - **Chainable**: Every combinator is also a method on [`Sequence`]
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let mixed = interleave(&[
//!     from_vec(vec![0, 1, 2]),
//!     between(3, 9),
//!     from_vec(vec![9, 10, 11, 12]),
//! ]);
//! assert_eq!(to_vec(&mixed).unwrap(), vec![0, 3, 9, 1, 4, 10, 2, 5, 11]);
//!
//! let looped = Sequence::from(vec![1, 2, 3]).cycle().take(10);
//! assert_eq!(looped.to_vec().unwrap(), vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`range`], [`up_to`], [`repeat`], [`iterate`], [`from_vec`]
//!
//! **Combinators:**
//! - [`map`], [`filter`], [`concat`], [`interleave`], [`cycle`], [`partition`], [`reductions`]
//! - [`take_while`], [`drop_while`] and the operators derived from them:
//!   [`take`], [`drop`], [`split_at`], …
//!
//! **Forcing:**
//! - [`to_vec`], [`reduce`], [`fold`], [`apply`]

pub mod build;
mod callable;
pub mod compose;
mod config;
mod derived;
mod error;
mod force;
mod functions;
mod generator;
mod iter;
mod num;
pub mod prelude;
pub mod registry;
mod sequence;
mod step;

pub use build::*;
pub use callable::*;
pub use compose::*;
pub use config::*;
pub use derived::*;
pub use error::*;
pub use force::*;
pub use functions::*;
pub use generator::*;
pub use iter::*;
pub use num::*;
pub use sequence::*;
pub use step::*;

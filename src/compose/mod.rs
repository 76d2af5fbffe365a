//! Combining and transforming sequences
//!
//! Each combinator here takes one or more sequences and describes a new one.
//! Nothing is pulled until the result is traversed.

mod concat;
mod cycle;
mod filter;
mod map;
mod partition;
mod reductions;

pub use concat::{Concat, Interleave, concat, interleave};
pub use cycle::{Cycle, cycle};
pub use filter::{DropWhile, Filter, TakeWhile, drop_while, filter, take_while};
pub use map::{Map, Map2, MapN, map, map2, map_n};
pub use partition::{Partition, partition};
pub use reductions::{Reductions, reductions};

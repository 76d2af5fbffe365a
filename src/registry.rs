//! Named groups of the library's operations.
//!
//! Each [`Signature`] names a set of operations that share a calling shape
//! (scalar helpers, sequence sources, forcing operations, …). The groups exist
//! for documentation and export grouping only; combinator behaviour never
//! consults them. [`functions`] flattens every group into one namespace.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::registry::{Operation, functions, signature};
//!
//! assert_eq!(functions().get("interleave"), Some(&Operation::Interleave));
//! assert!(signature("forcing").unwrap().contains(Operation::Reduce));
//! ```

use std::collections::BTreeMap;

macro_rules! operations {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Every operation the library exports, by name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Operation {
            $($variant),*
        }

        impl Operation {
            pub const ALL: &'static [Operation] = &[$(Operation::$variant),*];

            /// The exported name of the operation.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name),*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Operation::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

operations! {
    Identity => "identity",
    Increment => "increment",
    Decrement => "decrement",
    IsEven => "is_even",
    IsOdd => "is_odd",
    Sum => "sum",
    Multiply => "multiply",
    Apply => "apply",
    Complement => "complement",
    GeneratorOf => "generator_of",
    Callable => "callable",
    Iterate => "iterate",
    Repeat => "repeat",
    Range => "range",
    Map => "map",
    Concat => "concat",
    Cycle => "cycle",
    ToVec => "to_vec",
    Reduce => "reduce",
    SplitAt => "split_at",
    SplitWith => "split_with",
    Interleave => "interleave",
    Interpose => "interpose",
    Filter => "filter",
    Remove => "remove",
    Reductions => "reductions",
    Partition => "partition",
    Take => "take",
    TakeWhile => "take_while",
    TakeUntil => "take_until",
    Drop => "drop",
    DropWhile => "drop_while",
    DropUntil => "drop_until",
}

/// A named group of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub operations: &'static [Operation],
}

impl Signature {
    pub fn contains(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }
}

/// The library's operation groups. An operation may sit in more than one.
pub const SIGNATURES: &[Signature] = &[
    Signature {
        name: "scalar",
        operations: &[
            Operation::Identity,
            Operation::Increment,
            Operation::Decrement,
            Operation::IsEven,
            Operation::IsOdd,
            Operation::Sum,
            Operation::Multiply,
            Operation::Apply,
        ],
    },
    Signature {
        name: "logic",
        operations: &[Operation::Complement],
    },
    Signature {
        name: "sources",
        operations: &[
            Operation::GeneratorOf,
            Operation::Callable,
            Operation::Iterate,
            Operation::Repeat,
            Operation::Range,
            Operation::Map,
            Operation::Concat,
            Operation::Cycle,
        ],
    },
    Signature {
        name: "forcing",
        operations: &[
            Operation::ToVec,
            Operation::Reduce,
            Operation::SplitAt,
            Operation::SplitWith,
        ],
    },
    Signature {
        name: "merging",
        operations: &[Operation::Concat, Operation::Interleave],
    },
    Signature {
        name: "transforming",
        operations: &[
            Operation::Interpose,
            Operation::Filter,
            Operation::Remove,
            Operation::Map,
            Operation::Reductions,
            Operation::Cycle,
            Operation::Partition,
            Operation::Take,
            Operation::TakeWhile,
            Operation::TakeUntil,
            Operation::Drop,
            Operation::DropWhile,
            Operation::DropUntil,
        ],
    },
];

/// Look up a group by name.
pub fn signature(name: &str) -> Option<&'static Signature> {
    SIGNATURES.iter().find(|s| s.name == name)
}

/// Every group flattened into a single name → operation namespace.
pub fn functions() -> BTreeMap<&'static str, Operation> {
    SIGNATURES
        .iter()
        .flat_map(|s| s.operations.iter())
        .map(|&op| (op.name(), op))
        .collect()
}

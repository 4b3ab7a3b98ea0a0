#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod equality;
mod error;
mod macros;
pub mod matcher;
mod option;
pub mod repr;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod tag;
mod union;

pub use self::{
    error::{EmptyOptionError, InvalidCaseError, MatchError},
    matcher::{ActionMatcher, FuncMatcher, Matcher},
    option::{Absent, Option, OptionMatcher},
    tag::Variant,
    union::{Active, HasCase3, HasCase4, IntoUnion, TaggedUnion, Union2, Union3, Union4},
};

/// The traits needed to call union accessors, matchers and `into_union`.
pub mod prelude {
    pub use crate::{IntoUnion, TaggedUnion};
}

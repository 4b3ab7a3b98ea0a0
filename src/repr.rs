//! The owned representation shared by every union arity.
//!
//! # Implementation details
//!
//! Every union stores a four-slot enum. A union of arity 2 or 3 fills the
//! slots it does not have with [`Nil`], which has no values, so those slots
//! can never be constructed and reading them always fails:
//!
//! ```rust,no_run
//! # use caseunion::repr::{Nil, Slots};
//! // For example only. `Union2<i32, String>` stores this.
//! type Storage = Slots<i32, String, Nil, Nil>;
//! ```
//!
//! Equality, ordering and hashing are implemented once on [`Slots`], see the
//! `equality` module.

use core::fmt;

use crate::{
    tag::{Index, Variant, U0, U1, U2, U3},
    union::Active,
};

/// The filler type of unreachable slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nil {}

impl fmt::Display for Nil {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

/// Four slots of which exactly one holds a value.
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Slots<T1, T2, T3, T4> {
    Case1(T1),
    Case2(T2),
    Case3(T3),
    Case4(T4),
}

impl<T1, T2, T3, T4> Slots<T1, T2, T3, T4> {
    pub fn variant(&self) -> Variant {
        self.active().variant()
    }

    pub fn active(&self) -> Active<'_, T1, T2, T3, T4> {
        match self {
            Slots::Case1(value) => Active::Case1(value),
            Slots::Case2(value) => Active::Case2(value),
            Slots::Case3(value) => Active::Case3(value),
            Slots::Case4(value) => Active::Case4(value),
        }
    }
}

impl<T1: fmt::Debug, T2: fmt::Debug, T3: fmt::Debug, T4: fmt::Debug> fmt::Debug
    for Slots<T1, T2, T3, T4>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.active(), f)
    }
}

impl<T1: fmt::Display, T2: fmt::Display, T3: fmt::Display, T4: fmt::Display> fmt::Display
    for Slots<T1, T2, T3, T4>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slots::Case1(value) => fmt::Display::fmt(value, f),
            Slots::Case2(value) => fmt::Display::fmt(value, f),
            Slots::Case3(value) => fmt::Display::fmt(value, f),
            Slots::Case4(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// Maps a value of type `T` to the slot marked by index `I`.
///
/// The index is normally inferred: when `T` appears in exactly one slot the
/// compiler finds the only matching implementation. When two slots share a
/// type the inference is ambiguous and the explicit `from_caseN`
/// constructors have to be used instead.
pub trait Inject<T, I: Index>: Sized {
    fn inject(value: T) -> Self;

    fn project(&self) -> Option<&T>;

    /// Moves the value out of its slot, or gives `self` back if another slot
    /// is active.
    fn try_project(self) -> Result<T, Self>;
}

macro_rules! inject_slot {
    ($($index:ty => $variant:ident($t:ident)),* $(,)?) => {$(
        impl<T1, T2, T3, T4> Inject<$t, $index> for Slots<T1, T2, T3, T4> {
            fn inject(value: $t) -> Self {
                Slots::$variant(value)
            }

            fn project(&self) -> Option<&$t> {
                match self {
                    Slots::$variant(value) => Some(value),
                    _ => None,
                }
            }

            fn try_project(self) -> Result<$t, Self> {
                match self {
                    Slots::$variant(value) => Ok(value),
                    other => Err(other),
                }
            }
        }
    )*};
}

inject_slot! {
    U0 => Case1(T1),
    U1 => Case2(T2),
    U2 => Case3(T3),
    U3 => Case4(T4),
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};

    use super::*;

    type S = Slots<u32, String, Nil, Nil>;

    #[test]
    fn inject_infers_slot() {
        let slots: S = Inject::inject(7u32);
        assert_eq!(slots.variant(), Variant::Case1);

        let slots: S = Inject::inject("seven".to_string());
        assert_eq!(slots.variant(), Variant::Case2);
        assert_eq!(<S as Inject<String, _>>::project(&slots).map(String::as_str), Some("seven"));
        assert_eq!(<S as Inject<u32, _>>::project(&slots), None);
    }

    #[test]
    fn try_project_returns_other_slots() {
        let slots: S = Slots::Case1(3);
        let slots = <S as Inject<String, _>>::try_project(slots).unwrap_err();
        assert_eq!(<S as Inject<u32, _>>::try_project(slots).ok(), Some(3));
    }
}

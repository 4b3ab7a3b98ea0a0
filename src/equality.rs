//! Per-variant equality, ordering and hashing.
//!
//! Two slot sets are equal when the same slot is active and the active values
//! are equal. Ordering compares the tag first and the active values second.
//! The hash covers the active value only, so unions holding equal values in
//! different slots may collide, but equal unions always hash equal.
//!
//! The unions derive their impls from these, and [`Option`](crate::Option)
//! derives from its union.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::repr::Slots;

impl<T1, T2, T3, T4> PartialEq for Slots<T1, T2, T3, T4>
where
    T1: PartialEq,
    T2: PartialEq,
    T3: PartialEq,
    T4: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Slots::Case1(a), Slots::Case1(b)) => a == b,
            (Slots::Case2(a), Slots::Case2(b)) => a == b,
            (Slots::Case3(a), Slots::Case3(b)) => a == b,
            (Slots::Case4(a), Slots::Case4(b)) => a == b,
            _ => false,
        }
    }
}

impl<T1: Eq, T2: Eq, T3: Eq, T4: Eq> Eq for Slots<T1, T2, T3, T4> {}

impl<T1, T2, T3, T4> PartialOrd for Slots<T1, T2, T3, T4>
where
    T1: PartialOrd,
    T2: PartialOrd,
    T3: PartialOrd,
    T4: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Slots::Case1(a), Slots::Case1(b)) => a.partial_cmp(b),
            (Slots::Case2(a), Slots::Case2(b)) => a.partial_cmp(b),
            (Slots::Case3(a), Slots::Case3(b)) => a.partial_cmp(b),
            (Slots::Case4(a), Slots::Case4(b)) => a.partial_cmp(b),
            _ => Some(self.variant().cmp(&other.variant())),
        }
    }
}

impl<T1: Ord, T2: Ord, T3: Ord, T4: Ord> Ord for Slots<T1, T2, T3, T4> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Slots::Case1(a), Slots::Case1(b)) => a.cmp(b),
            (Slots::Case2(a), Slots::Case2(b)) => a.cmp(b),
            (Slots::Case3(a), Slots::Case3(b)) => a.cmp(b),
            (Slots::Case4(a), Slots::Case4(b)) => a.cmp(b),
            _ => self.variant().cmp(&other.variant()),
        }
    }
}

impl<T1: Hash, T2: Hash, T3: Hash, T4: Hash> Hash for Slots<T1, T2, T3, T4> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Slots::Case1(value) => value.hash(state),
            Slots::Case2(value) => value.hash(state),
            Slots::Case3(value) => value.hash(state),
            Slots::Case4(value) => value.hash(state),
        }
    }
}

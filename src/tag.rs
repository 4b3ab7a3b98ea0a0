//! Variant tags, both as runtime values and as type-level slot indices.

use core::{fmt, marker::PhantomData};

/// The tag naming which slot of a tagged union is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Case1,
    Case2,
    Case3,
    Case4,
}

impl Variant {
    /// Every tag, in ordinal order.
    pub const ALL: [Variant; 4] = [Variant::Case1, Variant::Case2, Variant::Case3, Variant::Case4];

    /// The zero-based position of the slot.
    pub const fn ordinal(self) -> u8 {
        match self {
            Variant::Case1 => 0,
            Variant::Case2 => 1,
            Variant::Case3 => 2,
            Variant::Case4 => 3,
        }
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Variant::Case1),
            1 => Some(Variant::Case2),
            2 => Some(Variant::Case3),
            3 => Some(Variant::Case4),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Case1 => "Case1",
            Variant::Case2 => "Case2",
            Variant::Case3 => "Case3",
            Variant::Case4 => "Case4",
        };
        f.write_str(name)
    }
}

pub struct UTerm;

pub struct UInt<U>(PhantomData<U>);

/// A type-level slot index.
///
/// Only used to let the compiler pick the slot a value belongs to, see
/// [`Union2::new`](crate::Union2::new).
pub trait Index {
    const VARIANT: Variant;
}

pub type U0 = UTerm;
pub type U1 = UInt<U0>;
pub type U2 = UInt<U1>;
pub type U3 = UInt<U2>;

impl Index for U0 {
    const VARIANT: Variant = Variant::Case1;
}

impl Index for U1 {
    const VARIANT: Variant = Variant::Case2;
}

impl Index for U2 {
    const VARIANT: Variant = Variant::Case3;
}

impl Index for U3 {
    const VARIANT: Variant = Variant::Case4;
}

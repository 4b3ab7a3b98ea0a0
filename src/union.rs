//! The tagged union family and the maximal contract they share.

use core::{any::Any, fmt};

use crate::{
    error::InvalidCaseError,
    matcher::{ActionMatcher, FuncMatcher, Matcher},
    repr::{Inject, Nil, Slots},
    tag::{Index, Variant},
};

/// A borrowed view of the active slot of a union.
///
/// Matching on it is checked for exhaustiveness by the compiler, unlike the
/// fluent [`Matcher`].
#[derive(Debug)]
pub enum Active<'a, T1, T2, T3, T4> {
    Case1(&'a T1),
    Case2(&'a T2),
    Case3(&'a T3),
    Case4(&'a T4),
}

impl<T1, T2, T3, T4> Clone for Active<'_, T1, T2, T3, T4> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T1, T2, T3, T4> Copy for Active<'_, T1, T2, T3, T4> {}

impl<'a, T1, T2, T3, T4> Active<'a, T1, T2, T3, T4> {
    pub fn variant(&self) -> Variant {
        match self {
            Active::Case1(_) => Variant::Case1,
            Active::Case2(_) => Variant::Case2,
            Active::Case3(_) => Variant::Case3,
            Active::Case4(_) => Variant::Case4,
        }
    }

    /// Erases the slot type of the active value.
    pub fn as_any(self) -> &'a dyn Any
    where
        T1: Any,
        T2: Any,
        T3: Any,
        T4: Any,
    {
        match self {
            Active::Case1(value) => value,
            Active::Case2(value) => value,
            Active::Case3(value) => value,
            Active::Case4(value) => value,
        }
    }
}

/// The maximal four-slot interface implemented by every union arity.
///
/// Slots a union does not have are typed [`Nil`] and reading them always
/// fails, so code written against this trait works for any arity.
pub trait TaggedUnion {
    type T1;
    type T2;
    type T3;
    type T4;

    fn active(&self) -> Active<'_, Self::T1, Self::T2, Self::T3, Self::T4>;

    fn case(&self) -> Variant {
        self.active().variant()
    }

    fn case1(&self) -> Result<&Self::T1, InvalidCaseError> {
        match self.active() {
            Active::Case1(value) => Ok(value),
            other => Err(InvalidCaseError::new(Variant::Case1, other.variant())),
        }
    }

    fn case2(&self) -> Result<&Self::T2, InvalidCaseError> {
        match self.active() {
            Active::Case2(value) => Ok(value),
            other => Err(InvalidCaseError::new(Variant::Case2, other.variant())),
        }
    }

    fn case3(&self) -> Result<&Self::T3, InvalidCaseError> {
        match self.active() {
            Active::Case3(value) => Ok(value),
            other => Err(InvalidCaseError::new(Variant::Case3, other.variant())),
        }
    }

    fn case4(&self) -> Result<&Self::T4, InvalidCaseError> {
        match self.active() {
            Active::Case4(value) => Ok(value),
            other => Err(InvalidCaseError::new(Variant::Case4, other.variant())),
        }
    }

    /// Starts a match that produces an `R` upon [`Matcher::result`].
    fn matcher<R>(&self) -> FuncMatcher<'_, Self, R>
    where
        Self: Sized,
    {
        Matcher::new(self)
    }

    /// Starts a match that runs a side effect upon [`Matcher::exec`].
    fn action_matcher(&self) -> ActionMatcher<'_, Self>
    where
        Self: Sized,
    {
        Matcher::new(self)
    }
}

/// Unions whose third slot can hold a value.
pub trait HasCase3: TaggedUnion {}

/// Unions whose fourth slot can hold a value.
pub trait HasCase4: HasCase3 {}

/// Turns an alternative value into the union that has a slot for it.
///
/// # Examples
///
/// ```rust
/// use caseunion::{IntoUnion, TaggedUnion, Union2};
///
/// let u: Union2<i32, &str> = "ok".into_union();
/// assert_eq!(u.case2(), Ok(&"ok"));
/// ```
pub trait IntoUnion<U, I> {
    fn into_union(self) -> U;
}

impl<T, U, I> IntoUnion<U, I> for T
where
    U: Inject<T, I>,
    I: Index,
{
    fn into_union(self) -> U {
        U::inject(self)
    }
}

macro_rules! tagged_union {
    (
        $(#[$attr:meta])*
        $name:ident<$($param:ident),+>: Slots<$s1:ty, $s2:ty, $s3:ty, $s4:ty> {
            $($ctor:ident($variant:ident: $ty:ident)),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        pub struct $name<$($param),+> {
            slots: Slots<$s1, $s2, $s3, $s4>,
        }

        impl<$($param),+> $name<$($param),+> {
            $(
                #[doc = concat!("Creates a union holding its `", stringify!($variant), "` alternative.")]
                pub const fn $ctor(value: $ty) -> Self {
                    $name { slots: Slots::$variant(value) }
                }
            )+

            /// Creates a union from any of its alternatives, picking the slot
            /// by the type of `value`.
            ///
            /// Does not compile when two slots share the type of `value`; use
            /// the `from_caseN` constructors then.
            pub fn new<T, I: Index>(value: T) -> Self
            where
                Slots<$s1, $s2, $s3, $s4>: Inject<T, I>,
            {
                $name { slots: <Slots<$s1, $s2, $s3, $s4> as Inject<T, I>>::inject(value) }
            }

            /// Returns the value of type `T` if its slot is the active one.
            pub fn get<T, I: Index>(&self) -> Option<&T>
            where
                Slots<$s1, $s2, $s3, $s4>: Inject<T, I>,
            {
                <Slots<$s1, $s2, $s3, $s4> as Inject<T, I>>::project(&self.slots)
            }

            /// Moves the value of type `T` out, or returns the union
            /// unchanged if another slot is active.
            pub fn try_unwrap<T, I: Index>(self) -> Result<T, Self>
            where
                Slots<$s1, $s2, $s3, $s4>: Inject<T, I>,
            {
                <Slots<$s1, $s2, $s3, $s4> as Inject<T, I>>::try_project(self.slots)
                    .map_err(|slots| $name { slots })
            }
        }

        impl<$($param),+> TaggedUnion for $name<$($param),+> {
            type T1 = $s1;
            type T2 = $s2;
            type T3 = $s3;
            type T4 = $s4;

            fn active(&self) -> Active<'_, $s1, $s2, $s3, $s4> {
                self.slots.active()
            }
        }

        impl<T, I: Index, $($param),+> Inject<T, I> for $name<$($param),+>
        where
            Slots<$s1, $s2, $s3, $s4>: Inject<T, I>,
        {
            fn inject(value: T) -> Self {
                Self::new::<T, I>(value)
            }

            fn project(&self) -> Option<&T> {
                self.get::<T, I>()
            }

            fn try_project(self) -> Result<T, Self> {
                self.try_unwrap::<T, I>()
            }
        }

        impl<$($param: fmt::Debug),+> fmt::Debug for $name<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.slots).finish()
            }
        }

        impl<$($param: fmt::Display),+> fmt::Display for $name<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.slots, f)
            }
        }
    };
}

tagged_union! {
    /// A value holding exactly one of two alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use caseunion::{TaggedUnion, Union2, Variant};
    ///
    /// let u = Union2::<i32, String>::new(42);
    /// assert_eq!(u.case(), Variant::Case1);
    /// assert_eq!(u.case1(), Ok(&42));
    /// assert!(u.case2().is_err());
    /// ```
    Union2<T1, T2>: Slots<T1, T2, Nil, Nil> {
        from_case1(Case1: T1),
        from_case2(Case2: T2),
    }
}

tagged_union! {
    /// A value holding exactly one of three alternatives.
    Union3<T1, T2, T3>: Slots<T1, T2, T3, Nil> {
        from_case1(Case1: T1),
        from_case2(Case2: T2),
        from_case3(Case3: T3),
    }
}

tagged_union! {
    /// A value holding exactly one of four alternatives.
    Union4<T1, T2, T3, T4>: Slots<T1, T2, T3, T4> {
        from_case1(Case1: T1),
        from_case2(Case2: T2),
        from_case3(Case3: T3),
        from_case4(Case4: T4),
    }
}

impl<T1, T2, T3> HasCase3 for Union3<T1, T2, T3> {}

impl<T1, T2, T3, T4> HasCase3 for Union4<T1, T2, T3, T4> {}

impl<T1, T2, T3, T4> HasCase4 for Union4<T1, T2, T3, T4> {}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        format,
        hash::{Hash, Hasher},
        string::{String, ToString},
    };

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn basic() {
        let u: Union2<u32, String> = Union2::new(12345);
        assert_eq!(u.case(), Variant::Case1);
        assert_eq!(u.case1(), Ok(&12345));
        assert_eq!(u.get::<u32, _>(), Some(&12345));
        assert_eq!(u.get::<String, _>(), None);

        let u: Union2<u32, String> = "Hello World!".to_string().into_union();
        assert_eq!(u.case2().map(String::as_str), Ok("Hello World!"));
        let u = u.try_unwrap::<u32, _>().unwrap_err();
        assert_eq!(u.try_unwrap::<String, _>().ok().as_deref(), Some("Hello World!"));
    }

    #[test]
    fn reading_inactive_slot_fails() {
        let u = Union3::<u8, char, bool>::from_case3(true);
        let err = u.case1().unwrap_err();
        assert_eq!(err.requested(), Variant::Case1);
        assert_eq!(err.actual(), Variant::Case3);
        assert_eq!(u.case2().unwrap_err().requested(), Variant::Case2);
        assert_eq!(u.case3(), Ok(&true));
    }

    #[test]
    fn unreachable_slots_always_fail() {
        let u = Union2::<u8, u16>::from_case2(7);
        assert_eq!(
            u.case3(),
            Err(InvalidCaseError::new(Variant::Case3, Variant::Case2))
        );
        assert_eq!(
            u.case4(),
            Err(InvalidCaseError::new(Variant::Case4, Variant::Case2))
        );
    }

    #[test]
    fn same_type_in_two_slots() {
        let a = Union2::<i32, i32>::from_case1(1);
        let b = Union2::<i32, i32>::from_case2(1);
        assert_ne!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a, Union2::from_case1(1));
    }

    #[test]
    fn nested_unions_compare_structurally() {
        type Inner = Union2<u8, String>;
        let a = Union2::<Inner, bool>::new(Inner::new(3u8));
        let b = Union2::<Inner, bool>::new(Inner::new(3u8));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Union2::new(Inner::new(4u8)));
    }

    #[test]
    fn four_slots() {
        type U = Union4<u8, i64, String, char>;
        let values = [
            U::new(1u8),
            U::new(-1i64),
            U::new("x".to_string()),
            U::new('x'),
        ];
        for (variant, u) in Variant::ALL.into_iter().zip(&values) {
            assert_eq!(u.case(), variant);
        }
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values[3].case4(), Ok(&'x'));
    }

    #[test]
    fn native_match_on_active() {
        let u = Union3::<u8, &str, bool>::new("three");
        let len = match u.active() {
            Active::Case1(_) | Active::Case3(_) => 0,
            Active::Case2(s) => s.len(),
            Active::Case4(nil) => match *nil {},
        };
        assert_eq!(len, 5);
        assert_eq!(u.active().as_any().downcast_ref::<&str>(), Some(&"three"));
    }

    #[test]
    fn formatting() {
        let u = Union2::<u8, &str>::new("hi");
        assert_eq!(format!("{u:?}"), "Union2(Case2(\"hi\"))");
        assert_eq!(u.to_string(), "hi");
    }
}

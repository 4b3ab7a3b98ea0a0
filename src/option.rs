//! An optional value built on [`Union2`].
//!
//! The name deliberately mirrors [`core::option::Option`]; the standard type
//! is called `StdOption` throughout this module.

use core::fmt;

use crate::{
    error::{EmptyOptionError, MatchError},
    matcher::{Action, Func, Matcher},
    tag::U0,
    union::{TaggedUnion, Union2},
};

type StdOption<T> = core::option::Option<T>;

/// The payload of an absent [`Option`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Absent;

/// Either a `T` or nothing.
///
/// # Examples
///
/// ```rust
/// use caseunion::Option;
///
/// let some: Option<i32> = 5.into();
/// assert!(some.has_value());
/// assert_eq!(some.value(), Ok(&5));
///
/// let none = Option::<i32>::none();
/// assert!(none.value().is_err());
/// assert_ne!(none, Option::some(0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Option<T> {
    union: Union2<T, Absent>,
}

impl<T> Option<T> {
    /// The absent value. [`Option::none`] hands out this constant.
    pub const NONE: Self = Option { union: Union2::from_case2(Absent) };

    pub const fn none() -> Self {
        Self::NONE
    }

    pub const fn some(value: T) -> Self {
        Option { union: Union2::from_case1(value) }
    }

    /// Whether this option was created by [`Option::some`].
    pub fn has_value(&self) -> bool {
        self.union.case1().is_ok()
    }

    pub fn value(&self) -> Result<&T, EmptyOptionError> {
        Ok(self.union.case1()?)
    }

    pub fn into_value(self) -> Result<T, EmptyOptionError> {
        self.union
            .try_unwrap::<T, U0>()
            .map_err(|_| EmptyOptionError)
    }

    pub fn as_std(&self) -> StdOption<&T> {
        self.union.case1().ok()
    }

    pub fn into_std(self) -> StdOption<T> {
        self.into_value().ok()
    }

    pub fn from_std(value: StdOption<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::none(),
        }
    }

    /// Compares against a value that may have failed to load.
    ///
    /// `Err` stands for "did not load" and `Ok(None)` for "loaded as absent".
    /// An absent option equals both, a present option equals only
    /// `Ok(Some(v))` with an equal `v`. This is not an equivalence relation;
    /// use `==` for plain comparisons.
    pub fn eq_loaded<E>(&self, loaded: &Result<StdOption<T>, E>) -> bool
    where
        T: PartialEq,
    {
        match (self.as_std(), loaded) {
            (Some(value), Ok(Some(other))) => value == other,
            (None, Ok(None) | Err(_)) => true,
            _ => false,
        }
    }

    /// Starts a match that produces an `R` upon [`OptionMatcher::result`].
    pub fn matcher<R>(&self) -> OptionMatcher<'_, T, R, Func> {
        OptionMatcher {
            option: self,
            inner: Matcher::new(&self.union),
        }
    }

    /// Starts a match that runs a side effect upon [`OptionMatcher::exec`].
    pub fn action_matcher(&self) -> OptionMatcher<'_, T, (), Action> {
        OptionMatcher {
            option: self,
            inner: Matcher::new(&self.union),
        }
    }
}

impl<T> From<T> for Option<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T: PartialEq> PartialEq<StdOption<T>> for Option<T> {
    fn eq(&self, other: &StdOption<T>) -> bool {
        self.as_std() == other.as_ref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_std() {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

/// The [`Matcher`] of an [`Option`], with `some`/`none` in place of case
/// numbers.
#[must_use = "a matcher does nothing until `result` or `exec` is called"]
pub struct OptionMatcher<'a, T, R, K = Func> {
    option: &'a Option<T>,
    inner: Matcher<'a, Union2<T, Absent>, R, K>,
}

impl<'a, T: 'a, R, K> OptionMatcher<'a, T, R, K> {
    pub fn on_some<F>(self, handler: F) -> Self
    where
        F: FnOnce(&'a T) -> R + 'a,
    {
        OptionMatcher {
            option: self.option,
            inner: self.inner.on_case1(handler),
        }
    }

    pub fn on_none<F>(self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        OptionMatcher {
            option: self.option,
            inner: self.inner.on_case2(move |_| handler()),
        }
    }

    pub fn on_default<F>(self, handler: F) -> Self
    where
        F: FnOnce(&'a Option<T>) -> R + 'a,
    {
        let option = self.option;
        OptionMatcher {
            option,
            inner: self.inner.on_default(move |_| handler(option)),
        }
    }
}

impl<'a, T: 'a, R> OptionMatcher<'a, T, R, Func> {
    pub fn result(self) -> Result<R, MatchError> {
        self.inner.result()
    }
}

impl<'a, T: 'a> OptionMatcher<'a, T, (), Action> {
    pub fn exec(self) -> Result<(), MatchError> {
        self.inner.exec()
    }
}

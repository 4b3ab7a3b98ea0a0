//! Fluent, runtime-checked case analysis over a [`TaggedUnion`].
//!
//! A matcher collects at most one handler per case, optionally a handler
//! keyed by the type of the active value, and optionally a default. The
//! terminal call ([`Matcher::result`] or [`Matcher::exec`]) runs the first
//! applicable handler in that order, or fails with [`MatchError::NoMatch`]
//! when the active case is left unhandled. Completeness is therefore checked
//! when the match runs, not when it compiles.
//!
//! # Examples
//!
//! ```rust
//! use caseunion::{TaggedUnion, Union2};
//!
//! let describe = |u: &Union2<i32, String>| {
//!     u.matcher()
//!         .on_case1(|n| n * 2)
//!         .on_case2(|s| s.len() as i32)
//!         .result()
//! };
//!
//! assert_eq!(describe(&Union2::new(42)), Ok(84));
//! assert_eq!(describe(&Union2::new("ok".to_owned())), Ok(2));
//! ```

use alloc::boxed::Box;
use core::{any::Any, marker::PhantomData};

use crate::{
    error::MatchError,
    tag::Variant,
    union::{Active, HasCase3, HasCase4, TaggedUnion},
};

/// Marks a matcher whose handlers compute a result.
pub struct Func;

/// Marks a matcher whose handlers only perform side effects.
pub struct Action;

type Handler<'a, T, R> = Box<dyn FnOnce(&'a T) -> R + 'a>;

pub type FuncMatcher<'a, U, R> = Matcher<'a, U, R, Func>;

pub type ActionMatcher<'a, U> = Matcher<'a, U, (), Action>;

/// A single-use builder dispatching on the active case of `U`.
///
/// Registering the same case (or the default) twice is reported by the
/// terminal call as [`MatchError::DuplicateCase`] or
/// [`MatchError::DuplicateDefault`], before any handler runs.
#[must_use = "a matcher does nothing until `result` or `exec` is called"]
pub struct Matcher<'a, U: TaggedUnion, R, K = Func> {
    subject: &'a U,
    case1: Option<Handler<'a, U::T1, R>>,
    case2: Option<Handler<'a, U::T2, R>>,
    case3: Option<Handler<'a, U::T3, R>>,
    case4: Option<Handler<'a, U::T4, R>>,
    typed: Option<Box<dyn FnOnce() -> R + 'a>>,
    default: Option<Handler<'a, U, R>>,
    misuse: Option<MatchError>,
    _kind: PhantomData<K>,
}

fn register<H>(
    slot: &mut Option<H>,
    handler: H,
    misuse: &mut Option<MatchError>,
    err: MatchError,
) {
    if slot.is_some() {
        misuse.get_or_insert(err);
    } else {
        *slot = Some(handler);
    }
}

impl<'a, U: TaggedUnion + 'a, R, K> Matcher<'a, U, R, K> {
    pub(crate) fn new(subject: &'a U) -> Self {
        Matcher {
            subject,
            case1: None,
            case2: None,
            case3: None,
            case4: None,
            typed: None,
            default: None,
            misuse: None,
            _kind: PhantomData,
        }
    }

    pub fn on_case1<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(&'a U::T1) -> R + 'a,
    {
        let handler: Handler<'a, U::T1, R> = Box::new(handler);
        let err = MatchError::DuplicateCase(Variant::Case1);
        register(&mut self.case1, handler, &mut self.misuse, err);
        self
    }

    pub fn on_case2<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(&'a U::T2) -> R + 'a,
    {
        let handler: Handler<'a, U::T2, R> = Box::new(handler);
        let err = MatchError::DuplicateCase(Variant::Case2);
        register(&mut self.case2, handler, &mut self.misuse, err);
        self
    }

    /// Handles whichever case currently holds a value of type `X`.
    ///
    /// This fires only when the active case has no handler of its own. If
    /// several registrations match, the first one wins.
    pub fn on_type<X, F>(mut self, handler: F) -> Self
    where
        X: Any,
        U::T1: Any,
        U::T2: Any,
        U::T3: Any,
        U::T4: Any,
        F: FnOnce(&'a X) -> R + 'a,
    {
        if self.typed.is_none() {
            let subject: &'a U = self.subject;
            if let Some(value) = subject.active().as_any().downcast_ref::<X>() {
                let typed: Box<dyn FnOnce() -> R + 'a> = Box::new(move || handler(value));
                self.typed = Some(typed);
            }
        }
        self
    }

    /// Handles every case without a handler of its own.
    pub fn on_default<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(&'a U) -> R + 'a,
    {
        let handler: Handler<'a, U, R> = Box::new(handler);
        register(&mut self.default, handler, &mut self.misuse, MatchError::DuplicateDefault);
        self
    }

    fn dispatch(self) -> Result<R, MatchError> {
        if let Some(err) = self.misuse {
            tracing::debug!(error = %err, "matcher misused");
            return Err(err);
        }

        let subject = self.subject;
        let active = subject.active();
        let variant = active.variant();
        tracing::trace!(case = %variant, "dispatching match");

        let matched = match active {
            Active::Case1(value) => self.case1.map(|handler| handler(value)),
            Active::Case2(value) => self.case2.map(|handler| handler(value)),
            Active::Case3(value) => self.case3.map(|handler| handler(value)),
            Active::Case4(value) => self.case4.map(|handler| handler(value)),
        };
        if let Some(result) = matched {
            return Ok(result);
        }
        if let Some(handler) = self.typed {
            return Ok(handler());
        }
        if let Some(handler) = self.default {
            return Ok(handler(subject));
        }

        tracing::debug!(case = %variant, "no handler for active case");
        Err(MatchError::NoMatch(variant))
    }
}

impl<'a, U: HasCase3 + 'a, R, K> Matcher<'a, U, R, K> {
    pub fn on_case3<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(&'a U::T3) -> R + 'a,
    {
        let handler: Handler<'a, U::T3, R> = Box::new(handler);
        let err = MatchError::DuplicateCase(Variant::Case3);
        register(&mut self.case3, handler, &mut self.misuse, err);
        self
    }
}

impl<'a, U: HasCase4 + 'a, R, K> Matcher<'a, U, R, K> {
    pub fn on_case4<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(&'a U::T4) -> R + 'a,
    {
        let handler: Handler<'a, U::T4, R> = Box::new(handler);
        let err = MatchError::DuplicateCase(Variant::Case4);
        register(&mut self.case4, handler, &mut self.misuse, err);
        self
    }
}

impl<'a, U: TaggedUnion + 'a, R> Matcher<'a, U, R, Func> {
    /// Runs the handler for the active case and returns its result.
    pub fn result(self) -> Result<R, MatchError> {
        self.dispatch()
    }
}

impl<'a, U: TaggedUnion + 'a> Matcher<'a, U, (), Action> {
    /// Runs the handler for the active case.
    pub fn exec(self) -> Result<(), MatchError> {
        self.dispatch()
    }
}

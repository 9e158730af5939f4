//! outcome
//!
//! The [`Outcome`] type: an immutable success/failure union with a fluent
//! combinator API.
//!
//! # Design
//!
//! `Outcome<T, E>` carries exactly one of a success value (`Ok`) or an error
//! value (`Err`), fixed at construction. Every by-value operation on the type
//! is a thin composition over a single dispatch primitive, [`Outcome::fold`],
//! which invokes exactly one of two handlers exactly once. Getting `fold`
//! right makes the rest of the surface correct by construction, so the
//! combinators contain no variant logic of their own.
//!
//! Two operations step outside the pure-combinator contract on purpose:
//!
//! - [`Outcome::unwrap`] panics when called on `Err`. That panic signals a
//!   logic error at the call site, not a recoverable failure; prefer `fold`
//!   or [`Outcome::unwrap_or`] in library code.
//! - [`Outcome::into_result`] hands the error payload to `std::result::Result`
//!   so callers can propagate it with `?`.
//!
//! # Early return
//!
//! [`Outcome::branch`] exposes the early-return shape via
//! [`std::ops::ControlFlow`]: `Break` wraps the failure recast as
//! `Outcome<Infallible, E>`, `Continue` carries the unwrapped success value.
//! `branch` performs no control transfer itself; the caller checks the
//! discriminant and returns the `Break` payload from its own
//! `Outcome`-returning routine.
//!
//! # Example
//!
//! ```
//! use verdict::outcome::Outcome;
//!
//! fn parse(input: &str) -> Outcome<u32, String> {
//!     match input.parse() {
//!         Ok(n) => Outcome::Ok(n),
//!         Err(e) => Outcome::Err(e.to_string()),
//!     }
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Outcome::Ok(42));
//!
//! let label = parse("nope").fold(|n| n.to_string(), |e| format!("bad: {e}"));
//! assert!(label.starts_with("bad:"));
//! ```

use std::convert::Infallible;
use std::future::IntoFuture;
use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

/// A success/failure union with combinator methods.
///
/// Unlike `std::result::Result` this type is serde-capable out of the box and
/// exposes its dispatch primitive ([`fold`]) directly. Instances are immutable
/// value types: combinators consume the receiver and build a new `Outcome`,
/// never mutating variant or payload in place, so shared references are safe
/// across threads without synchronization (given `Send`/`Sync` payloads).
///
/// [`fold`]: Outcome::fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// Contains the success value.
    Ok(T),
    /// Contains the error value.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Dispatch on the active variant.
    ///
    /// Invokes `on_ok` with the success value or `on_err` with the error
    /// value, and returns the handler's result. Exactly one handler runs,
    /// exactly once; the handler for the inactive variant is never called.
    ///
    /// This is the primitive every other by-value operation is defined
    /// through.
    ///
    /// # Example
    ///
    /// ```
    /// use verdict::outcome::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::Ok(3);
    /// assert_eq!(ok.fold(|n| n, |_| 0), 3);
    ///
    /// let err: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(err.fold(|n| n.to_string(), |e| e.to_string()), "boom");
    /// ```
    pub fn fold<A>(self, on_ok: impl FnOnce(T) -> A, on_err: impl FnOnce(E) -> A) -> A {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Err(error) => on_err(error),
        }
    }

    /// Borrowed view of the payload, `Outcome<&T, &E>`.
    ///
    /// Companion to [`fold`] for callers that must not consume the receiver.
    ///
    /// [`fold`]: Outcome::fold
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Mutably borrowed view of the payload, `Outcome<&mut T, &mut E>`.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// True iff this is the success variant.
    pub fn is_ok(&self) -> bool {
        self.as_ref().fold(|_| true, |_| false)
    }

    /// True iff this is the success variant and `pred` holds for its value.
    ///
    /// `pred` is never invoked on the failure variant.
    pub fn is_ok_and(self, pred: impl FnOnce(T) -> bool) -> bool {
        self.fold(pred, |_| false)
    }

    /// True iff this is the failure variant.
    pub fn is_err(&self) -> bool {
        self.as_ref().fold(|_| false, |_| true)
    }

    /// True iff this is the failure variant and `pred` holds for its error.
    ///
    /// `pred` is never invoked on the success variant.
    pub fn is_err_and(self, pred: impl FnOnce(E) -> bool) -> bool {
        self.fold(|_| false, pred)
    }

    /// Success payload as an `Option`, discarding the error.
    ///
    /// `None` here means "failure variant", never "success with an empty
    /// payload": a success whose payload is itself an `Option` projects to
    /// `Some(None)`, which stays distinguishable by type.
    ///
    /// # Example
    ///
    /// ```
    /// use verdict::outcome::Outcome;
    ///
    /// let absent: Outcome<Option<i32>, &str> = Outcome::Ok(None);
    /// assert_eq!(absent.ok(), Some(None));
    ///
    /// let failed: Outcome<Option<i32>, &str> = Outcome::Err("x");
    /// assert_eq!(failed.ok(), None);
    /// ```
    pub fn ok(self) -> Option<T> {
        self.fold(Some, |_| None)
    }

    /// Error payload as an `Option`, discarding the success value.
    pub fn err(self) -> Option<E> {
        self.fold(|_| None, Some)
    }

    /// Apply `f` to the success value, carrying a failure through unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        self.fold(|v| Outcome::Ok(f(v)), Outcome::Err)
    }

    /// Apply `f` to the error value, carrying a success through unchanged.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        self.fold(Outcome::Ok, |e| Outcome::Err(f(e)))
    }

    /// Apply `f` to the success value, or return `default` on failure.
    ///
    /// `default` is eagerly evaluated; use [`map_or_else`] for a lazy
    /// fallback.
    ///
    /// [`map_or_else`]: Outcome::map_or_else
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        self.fold(f, |_| default)
    }

    /// Apply `f` to the success value, or `default_fn` to the error value.
    pub fn map_or_else<U>(self, default_fn: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        self.fold(f, default_fn)
    }

    /// Return `other` on success, or the failure unchanged.
    ///
    /// Short-circuits: a failure is never replaced by `other`.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        self.fold(|_| other, Outcome::Err)
    }

    /// Chain a fallible continuation over the success value.
    ///
    /// # Example
    ///
    /// ```
    /// use verdict::outcome::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Err("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::<_, &str>::Ok(8).and_then(halve), Outcome::Ok(4));
    /// assert_eq!(Outcome::<_, &str>::Ok(3).and_then(halve), Outcome::Err("odd"));
    /// assert_eq!(Outcome::Err("early").and_then(halve), Outcome::Err("early"));
    /// ```
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        self.fold(f, Outcome::Err)
    }

    /// Return the success unchanged, or `other` on failure.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        self.fold(Outcome::Ok, |_| other)
    }

    /// Chain a recovery function over the error value.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        self.fold(Outcome::Ok, f)
    }

    /// Run `f` against the success value for its side effect, passing the
    /// receiver through unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        self.fold(
            |v| {
                f(&v);
                Outcome::Ok(v)
            },
            Outcome::Err,
        )
    }

    /// Run `f` against the error value for its side effect, passing the
    /// receiver through unchanged.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        self.fold(Outcome::Ok, |e| {
            f(&e);
            Outcome::Err(e)
        })
    }

    /// Success payload, or `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        self.fold(|v| v, |_| default)
    }

    /// Success payload, or `default_fn(error)` on failure.
    pub fn unwrap_or_else(self, default_fn: impl FnOnce(E) -> T) -> T {
        self.fold(|v| v, default_fn)
    }

    /// Convert into `std::result::Result`, handing the error payload to the
    /// host propagation channel.
    ///
    /// This is the supported way to re-raise the error itself: the payload
    /// crosses into `Result` untouched, so a caller inside a
    /// `Result`-returning function can propagate with `?`.
    ///
    /// # Example
    ///
    /// ```
    /// use verdict::outcome::Outcome;
    ///
    /// fn run() -> Result<i32, String> {
    ///     let n = Outcome::<i32, String>::Ok(2).into_result()?;
    ///     Ok(n * 10)
    /// }
    ///
    /// assert_eq!(run(), Ok(20));
    /// ```
    pub fn into_result(self) -> Result<T, E> {
        self.fold(Ok, Err)
    }

    /// Expose the early-return shape of this value.
    ///
    /// `Ok(v)` becomes `Continue(v)`; `Err(e)` becomes `Break` carrying the
    /// failure recast as `Outcome<Infallible, E>`, ready to be widened into
    /// the caller's own error type and returned. No control transfer happens
    /// here; acting on the discriminant is the caller's job.
    ///
    /// # Example
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use verdict::outcome::Outcome;
    ///
    /// fn checked_div(n: i32, d: i32) -> Outcome<i32, String> {
    ///     if d == 0 {
    ///         Outcome::Err("division by zero".into())
    ///     } else {
    ///         Outcome::Ok(n / d)
    ///     }
    /// }
    ///
    /// fn ratio_sum(pairs: &[(i32, i32)]) -> Outcome<i32, String> {
    ///     let mut total = 0;
    ///     for &(n, d) in pairs {
    ///         match checked_div(n, d).branch() {
    ///             ControlFlow::Continue(q) => total += q,
    ///             ControlFlow::Break(failure) => return failure.widen(),
    ///         }
    ///     }
    ///     Outcome::Ok(total)
    /// }
    ///
    /// assert_eq!(ratio_sum(&[(6, 2), (9, 3)]), Outcome::Ok(6));
    /// assert!(ratio_sum(&[(6, 2), (1, 0)]).is_err());
    /// ```
    pub fn branch(self) -> ControlFlow<Outcome<Infallible, E>, T> {
        self.fold(ControlFlow::Continue, |e| {
            ControlFlow::Break(Outcome::Err(e))
        })
    }

    /// Panicking extraction of the success payload.
    ///
    /// # Panics
    ///
    /// Panics if this is the failure variant, with the error rendered into
    /// the panic message. An `unwrap` on a path not proven successful is a
    /// programmer error; callers that can fail should use [`fold`],
    /// [`unwrap_or`], or [`into_result`] instead.
    ///
    /// [`fold`]: Outcome::fold
    /// [`unwrap_or`]: Outcome::unwrap_or
    /// [`into_result`]: Outcome::into_result
    pub fn unwrap(self) -> T
    where
        E: std::fmt::Debug,
    {
        self.fold(
            |v| v,
            |e| panic!("called `Outcome::unwrap()` on an `Err` value: {e:?}"),
        )
    }
}

impl<T, E> Outcome<T, E>
where
    T: IntoFuture,
    E: IntoFuture,
{
    /// Resolve a pending payload, keeping the variant.
    ///
    /// Which variant the returned `Outcome` carries is decided before any
    /// suspension; only the inner payload is awaited. An already-resolved
    /// payload is lifted with [`std::future::ready`], making the call shape
    /// uniform across pending and ready values.
    ///
    /// A failure *inside* the pending payload is deliberately not converted
    /// to the `Err` variant: a payload future that resolves to an inner
    /// `Result::Err` yields `Ok(Err(..))`, and one that panics unwinds
    /// through this call. Capturing those here would silently change which
    /// variant callers observe.
    ///
    /// # Example
    ///
    /// ```
    /// use std::future::{ready, Ready};
    /// use verdict::outcome::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let pending: Outcome<_, Ready<String>> = Outcome::Ok(ready(5));
    /// assert_eq!(pending.awaited().await, Outcome::Ok(5));
    /// # });
    /// ```
    pub async fn awaited(self) -> Outcome<T::Output, E::Output> {
        // Not expressible through `fold` on stable: the await point must
        // live outside a closure.
        match self {
            Outcome::Ok(pending) => Outcome::Ok(pending.await),
            Outcome::Err(pending) => Outcome::Err(pending.await),
        }
    }
}

impl<E> Outcome<Infallible, E> {
    /// Rewrite the uninhabited success type of a propagated failure.
    ///
    /// The payload of [`branch`]'s `Break` arm can never be `Ok`, so it
    /// converts losslessly into an `Outcome` with any success type.
    ///
    /// [`branch`]: Outcome::branch
    pub fn widen<T>(self) -> Outcome<T, E> {
        match self {
            Outcome::Ok(never) => match never {},
            Outcome::Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

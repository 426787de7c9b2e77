// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A value that went one of two ways.
//!
//! [`Outcome`] holds either a success payload or a failure payload. Never
//! both, never neither. The discriminant is a real enum variant, so the
//! inactive slot does not exist: there is nothing to read by accident and no
//! flag to forget to check.
//!
//! Every combinator consumes the container and hands back a new one; nothing
//! here mutates in place. Which side a supplied callback runs on is part of
//! each method's contract, not an implementation detail:
//!
//! | Method              | on `Success(v)`            | on `Failure(e)`              |
//! |---------------------|----------------------------|------------------------------|
//! | `map(f)`            | `Success(f(v))`            | `Failure(e)`, `f` not run    |
//! | `map_err(f)`        | `Success(v)`, `f` not run  | `Failure(f(e))`              |
//! | `map_or(f, d)`      | `Success(f(v))`            | `Success(f(d))`              |
//! | `map_or_else(f, g)` | `Success(f(v))`            | `Success(f(g()))`            |
//! | `and_then(f)`       | `f(v)`                     | `Failure(e)`, `f` not run    |
//! | `or_else(f)`        | `Success(v)`, `f` not run  | `f(e)`                       |
//! | `unwrap_or(d)`      | `v`                        | `d`                          |
//! | `unwrap_or_else(f)` | `v`                        | `f(e)`                       |
//!
//! Note the third and fourth rows: `map_or` and `map_or_else` feed the
//! fallback *through the transform* and always come out on the success side.
//! That asymmetry is contractual; tests and proofs pin it. If you want the
//! raw default untransformed, that operation is [`Outcome::unwrap_or`].
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Exclusivity**: `is_ok() != is_err()` for every value, always.
//! - **Short-circuit**: a callback never runs on the branch its method
//!   ignores. The property tests count invocations to hold the line.
//! - **Misuse aborts**: unwrapping the wrong variant panics. A panic is not
//!   a `Failure(E)` and no combinator will ever turn one into the other.
//!
//! Runtime checkers for these live in [`crate::contracts`]; the
//! model-checking proofs live in `kani-proofs/`.

use std::ptr;

/// Two-variant container for the result of a fallible computation.
///
/// An `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. Both variants
/// are plain public tuple constructors, so building one is just
/// `Success(value)` or `Failure(error)`. Construction cannot fail and there
/// is no third state.
///
/// Equality, ordering and hashing are structural over the variant and its
/// payload (two `Success(3)` values are equal). The one deliberate exception
/// is [`Outcome::contains`], which compares by address (see its docs).
///
/// # Examples
///
/// ```
/// use bivium::{Outcome, Success, Failure};
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     match raw.parse::<u16>() {
///         Ok(p) if p >= 1024 => Success(p),
///         Ok(p) => Failure(format!("port {} is reserved", p)),
///         Err(_) => Failure(format!("not a port: {:?}", raw)),
///     }
/// }
///
/// let port = parse_port("8080").map(|p| p + 1).unwrap_or(9000);
/// assert_eq!(port, 8081);
///
/// let fallback = parse_port("root").map(|p| p + 1).unwrap_or(9000);
/// assert_eq!(fallback, 9000);
/// ```
// INVARIANT: exclusivity
// Exactly one variant is inhabited; the enum representation makes the
// inactive payload slot unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Holds the success payload.
    Success(T),
    /// Holds the failure payload.
    Failure(E),
}

pub use Outcome::{Failure, Success};

/// Diagnostic carried by [`Outcome::unwrap`] when it aborts.
const UNWRAP_VALUE_MSG: &str = "could not unwrap value";
/// Diagnostic carried by [`Outcome::unwrap_err`] when it aborts.
const UNWRAP_ERROR_MSG: &str = "could not unwrap error";

impl<T, E> Outcome<T, E> {
    // ========================================================================
    // STATE QUERIES
    // ========================================================================

    /// Returns `true` if this is the success variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let x: Outcome<i32, &str> = Success(-3);
    /// assert!(x.is_ok());
    ///
    /// let x: Outcome<i32, &str> = Failure("some failure message");
    /// assert!(!x.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if this is the failure variant. Always the complement
    /// of [`Outcome::is_ok`].
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if this is a success whose payload satisfies
    /// `predicate`.
    ///
    /// A failure is `false` without the predicate ever running.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let x: Outcome<u32, &str> = Success(2);
    /// assert!(x.is_ok_and(|v| v > 1));
    ///
    /// let x: Outcome<u32, &str> = Success(0);
    /// assert!(!x.is_ok_and(|v| v > 1));
    ///
    /// let x: Outcome<u32, &str> = Failure("hey");
    /// assert!(!x.is_ok_and(|v| v > 1));
    /// ```
    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub fn is_ok_and<F: FnOnce(T) -> bool>(self, predicate: F) -> bool {
        match self {
            Success(value) => predicate(value),
            Failure(_) => false,
        }
    }

    /// Returns `true` if this is a failure whose payload satisfies
    /// `predicate`. A success is `false` without the predicate running.
    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub fn is_err_and<F: FnOnce(E) -> bool>(self, predicate: F) -> bool {
        match self {
            Success(_) => false,
            Failure(error) => predicate(error),
        }
    }

    // ========================================================================
    // OPTIONAL VIEWS
    // ========================================================================

    /// Converts into an [`Option`] over the success payload, discarding a
    /// failure payload if there was one.
    ///
    /// A success always produces `Some`, including when `T` is itself an
    /// `Option` and happens to hold `None`. The container never conflates
    /// "succeeded with an empty value" with "failed".
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let x: Outcome<u32, &str> = Success(2);
    /// assert_eq!(x.ok(), Some(2));
    ///
    /// let x: Outcome<u32, &str> = Failure("nothing here");
    /// assert_eq!(x.ok(), None);
    ///
    /// let empty_success: Outcome<Option<u32>, &str> = Success(None);
    /// assert_eq!(empty_success.ok(), Some(None));
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Converts into an [`Option`] over the failure payload, discarding a
    /// success payload if there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let x: Outcome<u32, &str> = Failure("nothing here");
    /// assert_eq!(x.err(), Some("nothing here"));
    ///
    /// let x: Outcome<u32, &str> = Success(2);
    /// assert_eq!(x.err(), None);
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    // ========================================================================
    // REFERENCE ADAPTER
    // ========================================================================

    /// Produces an `Outcome<&T, &E>` borrowing from this one, leaving it in
    /// place.
    ///
    /// This is the only way to hold a reference to the stored payload, which
    /// also makes it the only way [`Outcome::contains`] can ever answer
    /// `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success};
    ///
    /// let x: Outcome<String, u8> = Success("hearty".to_string());
    /// assert_eq!(x.as_ref().map(|s| s.len()), Success(6));
    /// assert!(x.is_ok()); // untouched
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    // ========================================================================
    // TRANSFORMS
    // ========================================================================

    /// Applies `transform` to a success payload, producing a new success; a
    /// failure passes through untouched and `transform` never runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let x: Outcome<u32, &str> = Success(21);
    /// assert_eq!(x.map(|v| v * 2), Success(42));
    ///
    /// let x: Outcome<u32, &str> = Failure("stuck");
    /// assert_eq!(x.map(|v| v * 2), Failure("stuck"));
    /// ```
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, transform: F) -> Outcome<U, E> {
        match self {
            Success(value) => Success(transform(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Applies `transform` to the success payload, or to `default` when this
    /// is a failure. Either way the product lands in a success variant.
    ///
    /// The fallback is transformed too: a failure does *not* come back as a
    /// raw `default`, and this method never returns a failure. Callers who
    /// want the untransformed default should use [`Outcome::unwrap_or`]
    /// instead.
    ///
    /// `default` is eagerly evaluated; for a lazily-produced fallback use
    /// [`Outcome::map_or_else`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let hit: Outcome<i32, &str> = Success(3);
    /// assert_eq!(hit.map_or(|x| x + 1, 5), Success(4));
    ///
    /// // The default goes through the transform: 5 + 1, on the success side.
    /// let miss: Outcome<i32, &str> = Failure("boom");
    /// assert_eq!(miss.map_or(|x| x + 1, 5), Success(6));
    /// ```
    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, transform: F, default: T) -> Outcome<U, E> {
        // INVARIANT: defaulted transforms are total. Both arms re-wrap as
        // Success, and both feed their payload through `transform`.
        match self {
            Success(value) => Success(transform(value)),
            Failure(_) => Success(transform(default)),
        }
    }

    /// Like [`Outcome::map_or`], but the fallback payload is produced by
    /// `fallback`, which runs only when this is a failure.
    ///
    /// The supplier takes no arguments (the failure payload is dropped, not
    /// handed to it) and its product is passed through `transform` exactly
    /// as a success payload would be. The result is always a success
    /// variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let hit: Outcome<i32, &str> = Success(3);
    /// assert_eq!(hit.map_or_else(|x| x * 10, || 7), Success(30));
    ///
    /// let miss: Outcome<i32, &str> = Failure("boom");
    /// assert_eq!(miss.map_or_else(|x| x * 10, || 7), Success(70));
    /// ```
    #[inline]
    pub fn map_or_else<U, F, D>(self, transform: F, fallback: D) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        D: FnOnce() -> T,
    {
        match self {
            Success(value) => Success(transform(value)),
            Failure(_) => Success(transform(fallback())),
        }
    }

    /// Applies `transform` to a failure payload, producing a new failure; a
    /// success passes through untouched and `transform` never runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// fn describe(code: u32) -> String {
    ///     format!("exit code {}", code)
    /// }
    ///
    /// let x: Outcome<u32, u32> = Success(2);
    /// assert_eq!(x.map_err(describe), Success(2));
    ///
    /// let x: Outcome<u32, u32> = Failure(13);
    /// assert_eq!(x.map_err(describe), Failure("exit code 13".to_string()));
    /// ```
    #[inline]
    pub fn map_err<F, O: FnOnce(E) -> F>(self, transform: O) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(transform(error)),
        }
    }

    // ========================================================================
    // INSPECTION
    // ========================================================================

    /// Runs `action` against a borrowed success payload, then hands the
    /// container back unchanged. On a failure the action never runs.
    ///
    /// Panics raised inside `action` are not caught here; they propagate to
    /// the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success};
    ///
    /// let mut seen = None;
    /// let x: Outcome<i32, &str> = Success(4);
    /// let x = x.inspect(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(4));
    /// assert_eq!(x, Success(4));
    /// ```
    #[inline]
    pub fn inspect<F: FnOnce(&T)>(self, action: F) -> Self {
        if let Success(ref value) = self {
            action(value);
        }
        self
    }

    /// Runs `action` against a borrowed failure payload, then hands the
    /// container back unchanged. On a success the action never runs.
    #[inline]
    pub fn inspect_err<F: FnOnce(&E)>(self, action: F) -> Self {
        if let Failure(ref error) = self {
            action(error);
        }
        self
    }

    // ========================================================================
    // UNWRAPPING (misuse aborts)
    // ========================================================================

    /// Returns the success payload.
    ///
    /// Unwrapping a failure is a contract violation by the caller, not a
    /// recoverable condition: it panics with exactly `message`. The failure
    /// payload is not formatted into the diagnostic, which is why no
    /// `E: Debug` bound is required here.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is the failure variant.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use bivium::{Outcome, Failure};
    ///
    /// let x: Outcome<u32, &str> = Failure("emergency failure");
    /// x.expect("the port table should already be validated"); // panics
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Success(value) => value,
            Failure(_) => panic!("{}", message),
        }
    }

    /// [`Outcome::expect`] with the fixed diagnostic
    /// `"could not unwrap value"`.
    ///
    /// # Panics
    ///
    /// Panics if this is the failure variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success};
    ///
    /// let x: Outcome<u32, &str> = Success(2);
    /// assert_eq!(x.unwrap(), 2);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        self.expect(UNWRAP_VALUE_MSG)
    }

    /// Returns the failure payload, panicking with exactly `message` on a
    /// success.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is the success variant.
    #[inline]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Success(_) => panic!("{}", message),
            Failure(error) => error,
        }
    }

    /// [`Outcome::expect_err`] with the fixed diagnostic
    /// `"could not unwrap error"`.
    ///
    /// # Panics
    ///
    /// Panics if this is the success variant.
    #[inline]
    pub fn unwrap_err(self) -> E {
        self.expect_err(UNWRAP_ERROR_MSG)
    }

    // ========================================================================
    // CHAINING
    // ========================================================================

    /// Returns `other` if this is a success, otherwise forwards this
    /// failure.
    ///
    /// `other` is eagerly evaluated at the call site; if it is the product
    /// of a computation worth skipping, use [`Outcome::and_then`], which is
    /// lazy.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let x: Outcome<u32, &str> = Success(2);
    /// let y: Outcome<&str, &str> = Failure("late error");
    /// assert_eq!(x.and(y), Failure("late error"));
    ///
    /// let x: Outcome<u32, &str> = Failure("early error");
    /// let y: Outcome<&str, &str> = Success("foo");
    /// assert_eq!(x.and(y), Failure("early error"));
    ///
    /// let x: Outcome<u32, &str> = Success(2);
    /// let y: Outcome<&str, &str> = Success("different payload type");
    /// assert_eq!(x.and(y), Success("different payload type"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => other,
            Failure(error) => Failure(error),
        }
    }

    /// Monadic bind: feeds a success payload to `bind` and returns whatever
    /// it produces, directly. A failure short-circuits; `bind` never runs
    /// and the original failure payload is forwarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// fn halve(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 { Success(n / 2) } else { Failure("odd") }
    /// }
    ///
    /// assert_eq!(Success(8).and_then(halve), Success(4));
    /// assert_eq!(Success(8).and_then(halve).and_then(halve), Success(2));
    /// assert_eq!(Success(3).and_then(halve), Failure("odd"));
    /// assert_eq!(Failure("upstream").and_then(halve), Failure("upstream"));
    /// ```
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, bind: F) -> Outcome<U, E> {
        match self {
            Success(value) => bind(value),
            Failure(error) => Failure(error),
        }
    }

    /// Returns `other` if this is a failure, otherwise forwards this
    /// success.
    ///
    /// `other` is eagerly evaluated at the call site; for a lazily-built
    /// alternative use [`Outcome::or_else`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let x: Outcome<u32, &str> = Success(2);
    /// let y: Outcome<u32, i32> = Failure(-1);
    /// assert_eq!(x.or(y), Success(2));
    ///
    /// let x: Outcome<u32, &str> = Failure("early error");
    /// let y: Outcome<u32, i32> = Success(5);
    /// assert_eq!(x.or(y), Success(5));
    /// ```
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(_) => other,
        }
    }

    /// Feeds a failure payload to `bind` and returns whatever it produces,
    /// directly. A success short-circuits; `bind` never runs and the
    /// original success payload is forwarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// fn square(n: u32) -> Outcome<u32, u32> { Success(n * n) }
    /// fn fail(n: u32) -> Outcome<u32, u32> { Failure(n) }
    ///
    /// assert_eq!(Success(2).or_else(square).or_else(square), Success(2));
    /// assert_eq!(Failure(3).or_else(square).or_else(fail), Success(9));
    /// assert_eq!(Failure(3).or_else(fail).or_else(fail), Failure(3));
    /// ```
    #[inline]
    pub fn or_else<F, O: FnOnce(E) -> Outcome<T, F>>(self, bind: O) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => bind(error),
        }
    }

    // ========================================================================
    // DEFAULTED EXTRACTION
    // ========================================================================

    /// Returns the success payload, or `default` on a failure.
    ///
    /// Unlike [`Outcome::map_or`], the default comes back exactly as
    /// supplied, with no transform involved. Eagerly evaluated; for a
    /// computed fallback use [`Outcome::unwrap_or_else`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let x: Outcome<u32, &str> = Success(9);
    /// assert_eq!(x.unwrap_or(2), 9);
    ///
    /// let x: Outcome<u32, &str> = Failure("error");
    /// assert_eq!(x.unwrap_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success payload, or the product of `fallback` applied to
    /// the failure payload. `fallback` runs only on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// fn count(err: &str) -> usize { err.len() }
    ///
    /// assert_eq!(Success::<usize, &str>(2).unwrap_or_else(count), 2);
    /// assert_eq!(Failure::<usize, &str>("foo").unwrap_or_else(count), 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, fallback: F) -> T {
        match self {
            Success(value) => value,
            Failure(error) => fallback(error),
        }
    }

    // ========================================================================
    // ADDRESS CONTAINMENT
    // ========================================================================

    /// Returns `true` iff this is a success and `candidate` is *the very
    /// same object* as the stored payload, compared by address rather than
    /// by `PartialEq`.
    ///
    /// # Caveats
    ///
    /// Two equal values at different addresses do not match, so this says
    /// nothing useful about payloads you hold copies of; the only reference
    /// that can match is one borrowed out of this same container via
    /// [`Outcome::as_ref`]. For zero-sized payloads the address check is
    /// degenerate and the answer is not meaningful. Value-based comparison
    /// is what `==` on the whole container is for.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success, Failure};
    ///
    /// let held: Outcome<Box<i32>, &str> = Success(Box::new(7));
    /// let inside = held.as_ref().unwrap();
    /// assert!(held.contains(inside));
    ///
    /// // Equal payload, different object: no match.
    /// assert!(!held.contains(&Box::new(7)));
    ///
    /// let failed: Outcome<Box<i32>, &str> = Failure("no payload");
    /// assert!(!failed.contains(&Box::new(7)));
    /// ```
    // INVARIANT: containment is address identity (`addr_eq`, not `==`); a
    // failure variant answers false before any comparison happens.
    #[inline]
    pub fn contains<U: ?Sized>(&self, candidate: &U) -> bool {
        match self {
            Success(value) => ptr::addr_eq(value, candidate),
            Failure(_) => false,
        }
    }

    /// Address-identity check against the failure payload; the mirror image
    /// of [`Outcome::contains`], with the same caveats.
    #[inline]
    pub fn contains_err<F: ?Sized>(&self, candidate: &F) -> bool {
        match self {
            Success(_) => false,
            Failure(error) => ptr::addr_eq(error, candidate),
        }
    }
}

// ============================================================================
// STD RESULT INTEROP
// ============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Lossless, variant-to-variant: `Ok` becomes `Success`, `Err` becomes
    /// `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bivium::{Outcome, Success};
    ///
    /// let parsed: Result<i32, String> = Ok(5);
    /// assert_eq!(Outcome::from(parsed), Success(5));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// The reverse of `Outcome::from`; the two conversions compose to the
    /// identity in both directions.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

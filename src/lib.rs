//! Two-variant outcome container with a law-checked combinator surface.
//!
//! This crate provides [`Outcome`], a `Success`-or-`Failure` container with
//! the full set of transforming, chaining and unwrapping combinators. Every
//! combinator's behavior is pinned by a small set of laws and verified via
//! property testing and model checking.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────┐
//! │   outcome.rs     │─────▶│   contracts.rs   │
//! │ (Outcome, the    │      │ (check_*, debug- │
//! │  combinators)    │      │  mode law checks)│
//! └──────────────────┘      └──────────────────┘
//!          │                         │
//!          ▼                         ▼
//! ┌─────────────────────────────────────────────┐
//! │      tests/ · fuzz/ · kani-proofs/          │
//! │  (property suites, corpus fuzzing, proofs)  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Laws
//!
//! Each law is enforced three times over: by a runtime checker in
//! [`contracts`], by the property suites, and by a proof harness.
//!
//! | Law                  | Statement                                          |
//! |----------------------|----------------------------------------------------|
//! | Exclusivity          | `is_ok() != is_err()`, always                      |
//! | Projection agreement | `ok()` / `err()` presence tracks the variant       |
//! | Pass-through         | `map` keeps failures intact, `map_err` successes   |
//! | Short-circuit        | no callback runs on the branch its method ignores  |
//! | Defaulted transform  | `map_or` / `map_or_else` always land on `Success`  |
//! | Unwrap contract      | wrong-variant unwrap panics, with a fixed message  |
//! | Identity containment | `contains` is address identity, never `==`         |
//! | Interop round trip   | the detour through [`Result`] is the identity      |
//!
//! # Usage
//!
//! ```
//! use bivium::{Outcome, Success, Failure};
//!
//! fn lookup(key: &str) -> Outcome<u32, String> {
//!     match key {
//!         "answer" => Success(42),
//!         other => Failure(format!("no entry for {:?}", other)),
//!     }
//! }
//!
//! let doubled = lookup("answer").map(|v| v * 2);
//! assert_eq!(doubled, Success(84));
//!
//! let recovered = lookup("question").map(|v| v * 2).unwrap_or(0);
//! assert_eq!(recovered, 0);
//! ```

// Module declarations
pub mod contracts;
mod outcome;
pub mod testing;

// Re-exports for public API
pub use outcome::{Failure, Outcome, Success};

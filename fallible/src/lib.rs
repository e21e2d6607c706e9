//! Two-variant success/failure container
//!
//! [`Outcome`] models an operation that either succeeded with a value or
//! failed with an error value, so fallible steps can be passed around and
//! composed as ordinary values.
//!
//! # Combinators
//!
//! - **Transformation**: [`map`](Outcome::map), [`map_error`](Outcome::map_error),
//!   [`map_or_else`](Outcome::map_or_else)
//! - **Chaining**: [`and`](Outcome::and), [`and_then`](Outcome::and_then),
//!   [`or`](Outcome::or), [`or_else`](Outcome::or_else)
//! - **Extraction**: [`unwrap_or`](Outcome::unwrap_or),
//!   [`unwrap_or_else`](Outcome::unwrap_or_else), and the partial
//!   [`unwrap`](Outcome::unwrap) / [`expect`](Outcome::expect) /
//!   [`unwrap_error`](Outcome::unwrap_error) / [`expect_error`](Outcome::expect_error),
//!   which report a wrong variant as [`OutcomeError::DiscriminantMismatch`]
//!   instead of panicking
//! - **Sequence view**: [`iter`](Outcome::iter) and `IntoIterator`
//!
//! # Example
//!
//! ```rust
//! use fallible::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::success(1);
//! assert_eq!(parsed.map(|i| i + 1).unwrap_or(0), 2);
//!
//! let failed: Outcome<i32, String> = Outcome::failure("bad input".to_string());
//! assert_eq!(failed.map(|i| i + 1).unwrap_or(0), 0);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod iter;
pub mod outcome;

pub use error::{OutcomeError, Result};
pub use iter::{IntoIter, Iter};
pub use outcome::{Discriminant, Outcome};

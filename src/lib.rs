//! # attest
//!
//! A fluent assertion library with rich, human-readable failure messages.
//!
//! This library provides a chainable API for expressing expectations inside
//! Rust's native `#[test]` framework, with failure messages that render the
//! values involved - truncated deterministically when they are large, and
//! pointing at your test code instead of library internals.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use attest::assert_that;
//!
//! #[test]
//! fn frodo_checks() {
//!     assert_that("Frodo").starts_with("Fro").ends_with("do");
//!
//!     assert_that(vec!["sam", "merry", "pippin"])
//!         .has_size(3)
//!         .contains(&"sam")
//!         .does_not_contain(&"sauron");
//! }
//! ```
//!
//! ## Soft Assertions
//!
//! Collect every failure instead of stopping at the first:
//!
//! ```rust,should_panic
//! use attest::SoftAssertions;
//!
//! let softly = SoftAssertions::new();
//! softly.assert_that(1i32).is_equal_to(2);           // collected
//! softly.assert_that("ring").contains("ing");     // passes
//! softly.assert_that(vec![1]).is_empty();         // collected
//! softly.assert_all();                            // reports both failures
//! ```
//!
//! ## Custom Types
//!
//! ```rust
//! use attest::assert_that_value;
//! use attest::presentation::{Describe, StandardRepresentation};
//!
//! #[derive(PartialEq)]
//! struct Version(u32, u32);
//!
//! impl Describe for Version {
//!     fn describe_to(&self, _rep: &StandardRepresentation) -> String {
//!         format!("v{}.{}", self.0, self.1)
//!     }
//! }
//!
//! assert_that_value(Version(1, 2)).is_equal_to(Version(1, 2));
//! ```

pub mod config;
pub mod error;
pub mod fluent;
pub mod presentation;
pub mod util;

// Core entry points
pub use fluent::{assert_that, assert_that_value, IntoAssert, SoftAssertions};

// Typed builders
pub use fluent::{
    IterableAssert, MapAssert, OptionAssert, PathAssert, ResultAssert, StringAssert, ValueAssert,
};

// Failure types
pub use error::{AssertionFailure, MultipleFailuresError};

// Presentation
pub use presentation::{
    register_formatter_for_type, remove_all_registered_formatters, Describe,
    StandardRepresentation,
};

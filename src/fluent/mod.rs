//! Fluent assertion API.
//!
//! This module provides the chainable assertion surface:
//! - `assert_that()` / `assert_that_value()` - entry points
//! - typed builders (`StringAssert`, `IterableAssert`, `MapAssert`,
//!   `OptionAssert`, `ResultAssert`, `PathAssert`, `ValueAssert`)
//! - `SoftAssertions` - collect failures instead of stopping at the first
//!
//! Assertion methods evaluate immediately (panic on failure); every one
//! has a `check_*` variant that evaluates non-destructively and returns
//! the failure instead.
//!
//! # Example
//!
//! ```rust
//! use attest::{assert_that, SoftAssertions};
//!
//! assert_that(vec![1, 2, 3]).contains(&2).has_size(3);
//!
//! let softly = SoftAssertions::new();
//! softly.assert_that("frodo").starts_with("fro");
//! softly.assert_that(33i32).is_equal_to(33);
//! softly.assert_all();
//! ```

mod builder;
mod iterable;
mod map;
mod matchers;
mod option;
mod path;
mod result;
mod soft;
mod string;

pub use builder::{assert_that, assert_that_value, AssertionInfo, IntoAssert, ValueAssert};
pub use iterable::IterableAssert;
pub use map::MapAssert;
pub use matchers::{glob_match, matches_pattern, regex_match, MatcherError};
pub use option::OptionAssert;
pub use path::PathAssert;
pub use result::ResultAssert;
pub use soft::{ErrorCollector, SoftAssertions};
pub use string::StringAssert;

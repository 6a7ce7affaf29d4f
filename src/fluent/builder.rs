//! Core fluent assertion builder.
//!
//! This module provides the entry points and the shared plumbing every
//! typed builder uses:
//! - `assert_that()` - entry point, dispatching to the builder for the
//!   subject's type
//! - `assert_that_value()` - entry point for arbitrary custom types
//! - `AssertionInfo` - per-chain state (description, representation,
//!   optional soft-assertion collector)
//! - `ValueAssert` - builder for plain comparable values

use std::any::Any;

use crate::error::AssertionFailure;
use crate::presentation::{Describe, StandardRepresentation};

use super::soft::ErrorCollector;

/// Per-chain assertion state shared by every typed builder.
///
/// Carries the optional description (rendered as a `[...]` prefix in
/// failure messages), the representation driver, and the soft-assertion
/// collector when the chain was started from a [`super::SoftAssertions`]
/// session.
#[derive(Debug, Clone, Default)]
pub struct AssertionInfo {
    description: Option<String>,
    representation: StandardRepresentation,
    collector: Option<ErrorCollector>,
}

impl AssertionInfo {
    /// State for a hard assertion chain: failures panic immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a soft assertion chain: failures are collected.
    pub(crate) fn soft(collector: ErrorCollector) -> Self {
        Self {
            description: None,
            representation: StandardRepresentation::new(),
            collector: Some(collector),
        }
    }

    pub(crate) fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub(crate) fn set_representation(&mut self, representation: StandardRepresentation) {
        self.representation = representation;
    }

    pub(crate) fn rep(&self) -> &StandardRepresentation {
        &self.representation
    }

    /// Build a failure from a message body, applying the description
    /// prefix.
    pub(crate) fn failure(&self, body: impl Into<String>) -> AssertionFailure {
        let body = body.into();
        let message = match &self.description {
            Some(description) => format!("[{}] \n{}", description, body),
            None => body,
        };
        AssertionFailure::new(message)
    }

    /// Route a failure: collect it in soft mode, panic otherwise.
    pub(crate) fn report(&self, failure: AssertionFailure) {
        match &self.collector {
            Some(collector) => collector.collect(failure),
            None => panic!("{}", failure),
        }
    }
}

/// Types that have a dedicated assertion builder.
///
/// Implemented for strings, vectors, slices, maps, `Option`, `Result`,
/// paths, and the primitive types; [`assert_that`] dispatches through it.
/// Implement it for your own types to plug them into the same entry point.
pub trait IntoAssert: Sized {
    /// The builder type assertions on this subject use.
    type Assert;

    /// Wrap the subject in its builder.
    fn into_assert(self, info: AssertionInfo) -> Self::Assert;
}

/// Start an assertion chain on a subject.
///
/// This is the entry point of the fluent API: it hands back the builder
/// matching the subject's type, so string subjects get string assertions,
/// vectors get collection assertions, and so on.
///
/// # Example
///
/// ```rust
/// use attest::assert_that;
///
/// assert_that("hello world").contains("world");
/// assert_that(vec![1, 2, 3]).has_size(3);
/// assert_that(Some(5)).contains_value(&5);
/// ```
pub fn assert_that<S: IntoAssert>(subject: S) -> S::Assert {
    subject.into_assert(AssertionInfo::new())
}

/// Start an assertion chain on a value of an arbitrary type.
///
/// Use this for custom types that do not implement [`IntoAssert`]; the
/// resulting [`ValueAssert`] offers equality and predicate assertions.
///
/// # Example
///
/// ```rust
/// use attest::assert_that_value;
///
/// #[derive(PartialEq, Debug)]
/// struct Point(i32, i32);
/// # use attest::presentation::{Describe, StandardRepresentation};
/// # impl Describe for Point {
/// #     fn describe_to(&self, _rep: &StandardRepresentation) -> String {
/// #         format!("({}, {})", self.0, self.1)
/// #     }
/// # }
///
/// assert_that_value(Point(1, 2)).is_equal_to(Point(1, 2));
/// ```
pub fn assert_that_value<T>(actual: T) -> ValueAssert<T> {
    ValueAssert::with_info(actual, AssertionInfo::new())
}

/// Builder for assertions on a plain value.
///
/// Assertion methods evaluate immediately and panic on failure (or record
/// the failure when the chain belongs to a soft-assertion session). The
/// `check_*` variants evaluate without panicking and return the failure.
#[derive(Debug, Clone)]
pub struct ValueAssert<T> {
    actual: T,
    info: AssertionInfo,
}

impl<T> ValueAssert<T> {
    pub(crate) fn with_info(actual: T, info: AssertionInfo) -> Self {
        Self { actual, info }
    }

    /// Prefix failure messages of this chain with `[description]`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// assert_that_value(age)
    ///     .described_as("age of the captain")
    ///     .is_equal_to(42);
    /// ```
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.info.set_description(description);
        self
    }

    /// Render values in this chain with a custom representation driver.
    pub fn with_representation(mut self, representation: StandardRepresentation) -> Self {
        self.info.set_representation(representation);
        self
    }

    /// The value under test.
    pub fn actual(&self) -> &T {
        &self.actual
    }
}

impl<T: PartialEq + Describe + Any> ValueAssert<T> {
    /// Assert the value equals `expected`.
    ///
    /// # Panics
    ///
    /// Panics with a message showing both values; when their plain
    /// representations collide, both are disambiguated with their type
    /// name.
    pub fn is_equal_to(self, expected: T) -> Self {
        if let Err(failure) = self.check_is_equal_to(&expected) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the value does not equal `other`.
    ///
    /// # Panics
    ///
    /// Panics when both values are equal.
    pub fn is_not_equal_to(self, other: T) -> Self {
        if let Err(failure) = self.check_is_not_equal_to(&other) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the value satisfies `predicate`, described by `description`
    /// in the failure message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::assert_that_value;
    ///
    /// assert_that_value(8).satisfies(|n| n % 2 == 0, "an even number");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when the predicate returns `false`.
    pub fn satisfies(self, predicate: impl FnOnce(&T) -> bool, description: &str) -> Self {
        if let Err(failure) = self.check_satisfies(predicate, description) {
            self.info.report(failure);
        }
        self
    }

    /// Evaluate equality without panicking.
    pub fn check_is_equal_to(&self, expected: &T) -> Result<(), AssertionFailure> {
        if self.actual == *expected {
            return Ok(());
        }
        let rep = self.info.rep();
        let mut actual = rep.to_string_of(&self.actual);
        let mut wanted = rep.to_string_of(expected);
        if actual == wanted {
            actual = rep.unambiguous_string_of(&self.actual);
            wanted = rep.unambiguous_string_of(expected);
        }
        Err(self
            .info
            .failure(format!("expected: {}\n but was: {}", wanted, actual)))
    }

    /// Evaluate inequality without panicking.
    pub fn check_is_not_equal_to(&self, other: &T) -> Result<(), AssertionFailure> {
        if self.actual != *other {
            return Ok(());
        }
        let rep = self.info.rep();
        Err(self.info.failure(format!(
            "Expecting actual:\n  {}\nnot to be equal to:\n  {}",
            rep.to_string_of(&self.actual),
            rep.to_string_of(other)
        )))
    }

    /// Evaluate a predicate without panicking.
    pub fn check_satisfies(
        &self,
        predicate: impl FnOnce(&T) -> bool,
        description: &str,
    ) -> Result<(), AssertionFailure> {
        if predicate(&self.actual) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  {}\nto satisfy: {}",
            self.info.rep().to_string_of(&self.actual),
            description
        )))
    }
}

macro_rules! value_subject {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoAssert for $t {
                type Assert = ValueAssert<$t>;

                fn into_assert(self, info: AssertionInfo) -> Self::Assert {
                    ValueAssert::with_info(self, info)
                }
            }
        )*
    };
}

value_subject!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(feature = "json")]
impl IntoAssert for serde_json::Value {
    type Assert = ValueAssert<serde_json::Value>;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert {
        ValueAssert::with_info(self, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_equal_to_passes() {
        assert_that(5i32).is_equal_to(5);
        assert_that(true).is_equal_to(true);
        assert_that('x').is_equal_to('x');
    }

    #[test]
    #[should_panic(expected = "expected: 6\n but was: 5")]
    fn test_is_equal_to_fails_with_both_values() {
        assert_that(5i32).is_equal_to(6);
    }

    #[test]
    fn test_is_not_equal_to_passes() {
        assert_that(5i32).is_not_equal_to(6);
    }

    #[test]
    #[should_panic(expected = "not to be equal to")]
    fn test_is_not_equal_to_fails() {
        assert_that(5i32).is_not_equal_to(5);
    }

    #[test]
    #[should_panic(expected = "[age of the captain] ")]
    fn test_description_prefixes_the_message() {
        assert_that(41i32).described_as("age of the captain").is_equal_to(42);
    }

    #[test]
    fn test_satisfies() {
        assert_that(8i32).satisfies(|n| n % 2 == 0, "an even number");
    }

    #[test]
    #[should_panic(expected = "to satisfy: an even number")]
    fn test_satisfies_fails_with_description() {
        assert_that(7i32).satisfies(|n| n % 2 == 0, "an even number");
    }

    #[test]
    fn test_check_variant_does_not_panic() {
        let failure = assert_that(1i32).check_is_equal_to(&2).unwrap_err();
        assert_eq!(failure.message(), "expected: 2\n but was: 1");
        assert!(assert_that(1i32).check_is_equal_to(&1).is_ok());
    }

    #[test]
    fn test_chaining_multiple_assertions() {
        assert_that(10i32).is_equal_to(10).is_not_equal_to(11);
    }

    #[test]
    fn test_custom_type_via_assert_that_value() {
        #[derive(PartialEq)]
        struct Version(u32, u32);

        impl Describe for Version {
            fn describe_to(&self, _rep: &StandardRepresentation) -> String {
                format!("v{}.{}", self.0, self.1)
            }
        }

        assert_that_value(Version(1, 2)).is_equal_to(Version(1, 2));
        let failure = assert_that_value(Version(1, 2))
            .check_is_equal_to(&Version(2, 0))
            .unwrap_err();
        assert_eq!(failure.message(), "expected: v2.0\n but was: v1.2");
    }
}

//! Fluent assertion builder for `Option` values.

use std::any::Any;

use crate::error::AssertionFailure;
use crate::presentation::{Describe, StandardRepresentation};

use super::builder::{AssertionInfo, IntoAssert};

/// Builder for assertions on an `Option`.
///
/// # Example
///
/// ```rust
/// use attest::assert_that;
///
/// assert_that(Some(5)).is_some().contains_value(&5);
/// assert_that(None::<i32>).is_none();
/// ```
#[derive(Debug, Clone)]
pub struct OptionAssert<T> {
    actual: Option<T>,
    info: AssertionInfo,
}

impl<T> OptionAssert<T> {
    pub(crate) fn with_info(actual: Option<T>, info: AssertionInfo) -> Self {
        Self { actual, info }
    }

    /// Prefix failure messages of this chain with `[description]`.
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.info.set_description(description);
        self
    }

    /// Render values in this chain with a custom representation driver.
    pub fn with_representation(mut self, representation: StandardRepresentation) -> Self {
        self.info.set_representation(representation);
        self
    }

    /// The option under test.
    pub fn actual(&self) -> Option<&T> {
        self.actual.as_ref()
    }
}

impl<T: Describe + Any> OptionAssert<T> {
    /// Assert the option holds a value.
    pub fn is_some(self) -> Self {
        if let Err(failure) = self.check_is_some() {
            self.info.report(failure);
        }
        self
    }

    /// Assert the option is `None`.
    pub fn is_none(self) -> Self {
        if let Err(failure) = self.check_is_none() {
            self.info.report(failure);
        }
        self
    }

    /// Evaluate presence without panicking.
    pub fn check_is_some(&self) -> Result<(), AssertionFailure> {
        if self.actual.is_some() {
            return Ok(());
        }
        Err(self
            .info
            .failure("Expecting Option to contain a value but it was None."))
    }

    /// Evaluate absence without panicking.
    pub fn check_is_none(&self) -> Result<(), AssertionFailure> {
        if self.actual.is_none() {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting None but was: {}",
            self.info.rep().to_string_of(&self.actual)
        )))
    }
}

impl<T: PartialEq + Describe + Any> OptionAssert<T> {
    /// Assert the option holds exactly `expected`.
    pub fn contains_value(self, expected: &T) -> Self {
        if let Err(failure) = self.check_contains_value(expected) {
            self.info.report(failure);
        }
        self
    }

    /// Evaluate the held value without panicking.
    pub fn check_contains_value(&self, expected: &T) -> Result<(), AssertionFailure> {
        if self.actual.as_ref() == Some(expected) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting:\n  {}\nto contain:\n  {}\nbut did not.",
            self.info.rep().to_string_of(&self.actual),
            self.info.rep().to_string_of(expected)
        )))
    }
}

impl<T> IntoAssert for Option<T> {
    type Assert = OptionAssert<T>;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert {
        OptionAssert::with_info(self, info)
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::assert_that;

    #[test]
    fn test_is_some_and_is_none() {
        assert_that(Some(1)).is_some();
        assert_that(None::<i32>).is_none();
    }

    #[test]
    #[should_panic(expected = "Expecting Option to contain a value but it was None.")]
    fn test_is_some_fails() {
        assert_that(None::<i32>).is_some();
    }

    #[test]
    #[should_panic(expected = "Expecting None but was: Some(3)")]
    fn test_is_none_fails() {
        assert_that(Some(3)).is_none();
    }

    #[test]
    fn test_contains_value() {
        assert_that(Some("a")).contains_value(&"a");
    }

    #[test]
    #[should_panic(expected = "Expecting:\n  Some(2)\nto contain:\n  3\nbut did not.")]
    fn test_contains_value_fails() {
        assert_that(Some(2)).contains_value(&3);
    }

    #[test]
    #[should_panic(expected = "Expecting:\n  None\nto contain:\n  3\nbut did not.")]
    fn test_contains_value_fails_on_none() {
        assert_that(None::<i32>).contains_value(&3);
    }
}

//! Fluent assertion builder for `Result` values.

use std::any::Any;

use crate::error::AssertionFailure;
use crate::presentation::{Describe, StandardRepresentation};

use super::builder::{AssertionInfo, IntoAssert};

/// Builder for assertions on a `Result`.
///
/// # Example
///
/// ```rust
/// use attest::assert_that;
///
/// let ok: Result<i32, String> = Ok(5);
/// assert_that(ok).is_ok().ok_contains(&5);
/// ```
#[derive(Debug, Clone)]
pub struct ResultAssert<T, E> {
    actual: Result<T, E>,
    info: AssertionInfo,
}

impl<T, E> ResultAssert<T, E> {
    pub(crate) fn with_info(actual: Result<T, E>, info: AssertionInfo) -> Self {
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

    /// The result under test.
    pub fn actual(&self) -> Result<&T, &E> {
        self.actual.as_ref()
    }
}

impl<T: Describe + Any, E: Describe + Any> ResultAssert<T, E> {
    /// Assert the result is `Ok`.
    pub fn is_ok(self) -> Self {
        if let Err(failure) = self.check_is_ok() {
            self.info.report(failure);
        }
        self
    }

    /// Assert the result is `Err`.
    pub fn is_err(self) -> Self {
        if let Err(failure) = self.check_is_err() {
            self.info.report(failure);
        }
        self
    }

    /// Evaluate success without panicking.
    pub fn check_is_ok(&self) -> Result<(), AssertionFailure> {
        if self.actual.is_ok() {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting Ok but was:\n  {}",
            self.info.rep().to_string_of(&self.actual)
        )))
    }

    /// Evaluate failure without panicking.
    pub fn check_is_err(&self) -> Result<(), AssertionFailure> {
        if self.actual.is_err() {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting Err but was:\n  {}",
            self.info.rep().to_string_of(&self.actual)
        )))
    }
}

impl<T: PartialEq + Describe + Any, E: PartialEq + Describe + Any> ResultAssert<T, E> {
    /// Assert the result is `Ok` holding exactly `expected`.
    pub fn ok_contains(self, expected: &T) -> Self {
        if let Err(failure) = self.check_ok_contains(expected) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the result is `Err` holding exactly `expected`.
    pub fn err_contains(self, expected: &E) -> Self {
        if let Err(failure) = self.check_err_contains(expected) {
            self.info.report(failure);
        }
        self
    }

    /// Evaluate the `Ok` value without panicking.
    pub fn check_ok_contains(&self, expected: &T) -> Result<(), AssertionFailure> {
        if matches!(&self.actual, Ok(value) if value == expected) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting:\n  {}\nto be Ok containing:\n  {}",
            self.info.rep().to_string_of(&self.actual),
            self.info.rep().to_string_of(expected)
        )))
    }

    /// Evaluate the `Err` value without panicking.
    pub fn check_err_contains(&self, expected: &E) -> Result<(), AssertionFailure> {
        if matches!(&self.actual, Err(error) if error == expected) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting:\n  {}\nto be Err containing:\n  {}",
            self.info.rep().to_string_of(&self.actual),
            self.info.rep().to_string_of(expected)
        )))
    }
}

impl<T, E> IntoAssert for Result<T, E> {
    type Assert = ResultAssert<T, E>;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert {
        ResultAssert::with_info(self, info)
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::assert_that;

    #[test]
    fn test_is_ok_and_is_err() {
        assert_that(Ok::<_, String>(1)).is_ok();
        assert_that(Err::<i32, _>("boom".to_string())).is_err();
    }

    #[test]
    #[should_panic(expected = "Expecting Ok but was:\n  Err(\"boom\")")]
    fn test_is_ok_fails() {
        assert_that(Err::<i32, _>("boom".to_string())).is_ok();
    }

    #[test]
    #[should_panic(expected = "Expecting Err but was:\n  Ok(1)")]
    fn test_is_err_fails() {
        assert_that(Ok::<_, String>(1)).is_err();
    }

    #[test]
    fn test_ok_contains() {
        assert_that(Ok::<_, String>(5)).ok_contains(&5);
    }

    #[test]
    #[should_panic(expected = "Expecting:\n  Ok(5)\nto be Ok containing:\n  6")]
    fn test_ok_contains_fails() {
        assert_that(Ok::<_, String>(5)).ok_contains(&6);
    }

    #[test]
    fn test_err_contains() {
        assert_that(Err::<i32, _>("boom".to_string())).err_contains(&"boom".to_string());
    }
}

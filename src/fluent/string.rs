//! Fluent assertion builder for strings.

use crate::error::AssertionFailure;
use crate::presentation::StandardRepresentation;

use super::builder::{AssertionInfo, IntoAssert};
use super::matchers;

/// Builder for assertions on string content.
///
/// Assertion methods evaluate immediately and panic on failure (or record
/// the failure in a soft-assertion session); `check_*` variants evaluate
/// without panicking.
///
/// # Example
///
/// ```rust
/// use attest::assert_that;
///
/// assert_that("hello world")
///     .starts_with("hello")
///     .contains("o w")
///     .has_length(11);
/// ```
#[derive(Debug, Clone)]
pub struct StringAssert {
    actual: String,
    info: AssertionInfo,
}

impl StringAssert {
    pub(crate) fn with_info(actual: String, info: AssertionInfo) -> Self {
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

    /// The string under test.
    pub fn actual(&self) -> &str {
        &self.actual
    }

    // =========================================================================
    // Assertion methods (panic on failure)
    // =========================================================================

    /// Assert the string equals `expected`.
    pub fn is_equal_to(self, expected: impl Into<String>) -> Self {
        if let Err(failure) = self.check_is_equal_to(&expected.into()) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string is empty.
    pub fn is_empty(self) -> Self {
        if let Err(failure) = self.check_is_empty() {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string is not empty.
    pub fn is_not_empty(self) -> Self {
        if let Err(failure) = self.check_is_not_empty() {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string has exactly `expected` characters.
    pub fn has_length(self, expected: usize) -> Self {
        if let Err(failure) = self.check_has_length(expected) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string contains `expected`.
    pub fn contains(self, expected: &str) -> Self {
        if let Err(failure) = self.check_contains(expected) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string does not contain `unexpected`.
    pub fn does_not_contain(self, unexpected: &str) -> Self {
        if let Err(failure) = self.check_does_not_contain(unexpected) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string starts with `prefix`.
    pub fn starts_with(self, prefix: &str) -> Self {
        if let Err(failure) = self.check_starts_with(prefix) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string ends with `suffix`.
    pub fn ends_with(self, suffix: &str) -> Self {
        if let Err(failure) = self.check_ends_with(suffix) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string matches the regex `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex (API misuse, regardless of
    /// soft-assertion mode), or if the string does not match.
    pub fn matches(self, pattern: &str) -> Self {
        if let Err(failure) = self.check_matches(pattern) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string does not match the regex `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex, or if the string matches.
    pub fn does_not_match(self, pattern: &str) -> Self {
        if let Err(failure) = self.check_does_not_match(pattern) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the string matches the glob `pattern` (e.g. `*.txt`).
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid glob, or if the string does not
    /// match.
    pub fn matches_glob(self, pattern: &str) -> Self {
        if let Err(failure) = self.check_matches_glob(pattern) {
            self.info.report(failure);
        }
        self
    }

    // =========================================================================
    // Non-panicking evaluation
    // =========================================================================

    /// Evaluate equality without panicking.
    pub fn check_is_equal_to(&self, expected: &str) -> Result<(), AssertionFailure> {
        if self.actual == expected {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "expected: \"{}\"\n but was: \"{}\"",
            expected, self.actual
        )))
    }

    /// Evaluate emptiness without panicking.
    pub fn check_is_empty(&self) -> Result<(), AssertionFailure> {
        if self.actual.is_empty() {
            return Ok(());
        }
        Err(self
            .info
            .failure(format!("Expecting empty but was: \"{}\"", self.actual)))
    }

    /// Evaluate non-emptiness without panicking.
    pub fn check_is_not_empty(&self) -> Result<(), AssertionFailure> {
        if !self.actual.is_empty() {
            return Ok(());
        }
        Err(self.info.failure("Expecting actual not to be empty"))
    }

    /// Evaluate the character count without panicking.
    pub fn check_has_length(&self, expected: usize) -> Result<(), AssertionFailure> {
        let actual = self.actual.chars().count();
        if actual == expected {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expected size: {} but was: {} in:\n\"{}\"",
            expected, actual, self.actual
        )))
    }

    /// Evaluate containment without panicking.
    pub fn check_contains(&self, expected: &str) -> Result<(), AssertionFailure> {
        if self.actual.contains(expected) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  \"{}\"\nto contain:\n  \"{}\"",
            self.actual, expected
        )))
    }

    /// Evaluate absence without panicking.
    pub fn check_does_not_contain(&self, unexpected: &str) -> Result<(), AssertionFailure> {
        if !self.actual.contains(unexpected) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  \"{}\"\nnot to contain:\n  \"{}\"",
            self.actual, unexpected
        )))
    }

    /// Evaluate the prefix without panicking.
    pub fn check_starts_with(&self, prefix: &str) -> Result<(), AssertionFailure> {
        if self.actual.starts_with(prefix) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  \"{}\"\nto start with:\n  \"{}\"",
            self.actual, prefix
        )))
    }

    /// Evaluate the suffix without panicking.
    pub fn check_ends_with(&self, suffix: &str) -> Result<(), AssertionFailure> {
        if self.actual.ends_with(suffix) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  \"{}\"\nto end with:\n  \"{}\"",
            self.actual, suffix
        )))
    }

    /// Evaluate a regex match without panicking on the assertion itself.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex.
    pub fn check_matches(&self, pattern: &str) -> Result<(), AssertionFailure> {
        let matched = matchers::regex_match(pattern, &self.actual)
            .unwrap_or_else(|error| panic!("{}", error));
        if matched {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  \"{}\"\nto match pattern:\n  \"{}\"",
            self.actual, pattern
        )))
    }

    /// Evaluate a negated regex match without panicking on the assertion
    /// itself.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex.
    pub fn check_does_not_match(&self, pattern: &str) -> Result<(), AssertionFailure> {
        let matched = matchers::regex_match(pattern, &self.actual)
            .unwrap_or_else(|error| panic!("{}", error));
        if !matched {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  \"{}\"\nnot to match pattern:\n  \"{}\"",
            self.actual, pattern
        )))
    }

    /// Evaluate a glob match without panicking on the assertion itself.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid glob.
    pub fn check_matches_glob(&self, pattern: &str) -> Result<(), AssertionFailure> {
        let matched = matchers::glob_match(pattern, &self.actual)
            .unwrap_or_else(|error| panic!("{}", error));
        if matched {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  \"{}\"\nto match glob:\n  \"{}\"",
            self.actual, pattern
        )))
    }
}

impl IntoAssert for String {
    type Assert = StringAssert;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert {
        StringAssert::with_info(self, info)
    }
}

impl IntoAssert for &str {
    type Assert = StringAssert;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert {
        StringAssert::with_info(self.to_string(), info)
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::assert_that;

    #[test]
    fn test_is_equal_to() {
        assert_that("abc").is_equal_to("abc");
    }

    #[test]
    #[should_panic(expected = "expected: \"bcd\"\n but was: \"abc\"")]
    fn test_is_equal_to_fails() {
        assert_that("abc").is_equal_to("bcd");
    }

    #[test]
    fn test_emptiness() {
        assert_that("").is_empty();
        assert_that("x").is_not_empty();
    }

    #[test]
    #[should_panic(expected = "Expecting empty but was: \"abc\"")]
    fn test_is_empty_fails() {
        assert_that("abc").is_empty();
    }

    #[test]
    fn test_has_length_counts_characters() {
        assert_that("hello").has_length(5);
        assert_that("日本語").has_length(3);
    }

    #[test]
    #[should_panic(expected = "Expected size: 3 but was: 5 in:\n\"hello\"")]
    fn test_has_length_fails() {
        assert_that("hello").has_length(3);
    }

    #[test]
    fn test_contains_and_absence() {
        assert_that("hello world")
            .contains("o w")
            .does_not_contain("mars");
    }

    #[test]
    #[should_panic(expected = "to contain:\n  \"mars\"")]
    fn test_contains_fails() {
        assert_that("hello world").contains("mars");
    }

    #[test]
    fn test_prefix_and_suffix() {
        assert_that("hello world").starts_with("hello").ends_with("world");
    }

    #[test]
    #[should_panic(expected = "to start with:\n  \"world\"")]
    fn test_starts_with_fails() {
        assert_that("hello world").starts_with("world");
    }

    #[test]
    fn test_regex_matching() {
        assert_that("Success: 42 items")
            .matches(r"Success: \d+ items")
            .does_not_match(r"error|fail");
    }

    #[test]
    #[should_panic(expected = "to match pattern:\n  \"\\d{4}\"")]
    fn test_matches_fails() {
        assert_that("no digits here").matches(r"\d{4}");
    }

    #[test]
    #[should_panic(expected = "invalid regex '(unclosed'")]
    fn test_invalid_regex_is_misuse() {
        assert_that("anything").matches("(unclosed");
    }

    #[test]
    fn test_glob_matching() {
        assert_that("notes.txt").matches_glob("*.txt");
    }

    #[test]
    #[should_panic(expected = "to match glob:\n  \"*.rs\"")]
    fn test_glob_fails() {
        assert_that("main.py").matches_glob("*.rs");
    }

    #[test]
    fn test_owned_and_borrowed_subjects() {
        assert_that("abc".to_string()).is_equal_to("abc");
        assert_that("abc").is_equal_to("abc".to_string());
    }
}

//! Fluent assertion builder for filesystem paths.

use std::path::{Path, PathBuf};

use crate::error::AssertionFailure;
use crate::presentation::StandardRepresentation;

use super::builder::{AssertionInfo, IntoAssert};

/// Builder for assertions on a filesystem path.
///
/// # Example
///
/// ```rust,ignore
/// use attest::assert_that;
/// use std::path::Path;
///
/// assert_that(Path::new("/etc/hosts")).exists().is_file();
/// ```
#[derive(Debug, Clone)]
pub struct PathAssert {
    actual: PathBuf,
    info: AssertionInfo,
}

impl PathAssert {
    pub(crate) fn with_info(actual: PathBuf, info: AssertionInfo) -> Self {
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

    /// The path under test.
    pub fn actual(&self) -> &Path {
        &self.actual
    }

    /// Assert the path exists.
    pub fn exists(self) -> Self {
        if let Err(failure) = self.check_exists() {
            self.info.report(failure);
        }
        self
    }

    /// Assert the path does not exist.
    pub fn does_not_exist(self) -> Self {
        if let Err(failure) = self.check_does_not_exist() {
            self.info.report(failure);
        }
        self
    }

    /// Assert the path is an existing regular file.
    pub fn is_file(self) -> Self {
        if let Err(failure) = self.check_is_file() {
            self.info.report(failure);
        }
        self
    }

    /// Assert the path is an existing directory.
    pub fn is_directory(self) -> Self {
        if let Err(failure) = self.check_is_directory() {
            self.info.report(failure);
        }
        self
    }

    /// Assert the final path component is `expected`.
    pub fn has_file_name(self, expected: &str) -> Self {
        if let Err(failure) = self.check_has_file_name(expected) {
            self.info.report(failure);
        }
        self
    }

    /// Evaluate existence without panicking.
    pub fn check_exists(&self) -> Result<(), AssertionFailure> {
        if self.actual.exists() {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting path:\n  {}\nto exist.",
            self.actual.display()
        )))
    }

    /// Evaluate absence without panicking.
    pub fn check_does_not_exist(&self) -> Result<(), AssertionFailure> {
        if !self.actual.exists() {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting path:\n  {}\nnot to exist.",
            self.actual.display()
        )))
    }

    /// Evaluate the file check without panicking.
    pub fn check_is_file(&self) -> Result<(), AssertionFailure> {
        if self.actual.is_file() {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting path:\n  {}\nto be an existing regular file.",
            self.actual.display()
        )))
    }

    /// Evaluate the directory check without panicking.
    pub fn check_is_directory(&self) -> Result<(), AssertionFailure> {
        if self.actual.is_dir() {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting path:\n  {}\nto be an existing directory.",
            self.actual.display()
        )))
    }

    /// Evaluate the file name without panicking.
    pub fn check_has_file_name(&self, expected: &str) -> Result<(), AssertionFailure> {
        let actual_name = self
            .actual
            .file_name()
            .map(|name| name.to_string_lossy().to_string());
        if actual_name.as_deref() == Some(expected) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting path:\n  {}\nto have file name:\n  \"{}\"\nbut had:\n  {}",
            self.actual.display(),
            expected,
            match actual_name {
                Some(name) => format!("\"{}\"", name),
                None => "no file name".to_string(),
            }
        )))
    }
}

impl IntoAssert for PathBuf {
    type Assert = PathAssert;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert {
        PathAssert::with_info(self, info)
    }
}

impl IntoAssert for &Path {
    type Assert = PathAssert;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert {
        PathAssert::with_info(self.to_path_buf(), info)
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::assert_that;
    use std::path::Path;

    #[test]
    fn test_existing_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let file = dir.path().join("data.txt");
        std::fs::write(&file, "content").expect("failed to write temp file");

        assert_that(file.as_path())
            .exists()
            .is_file()
            .has_file_name("data.txt");
        assert_that(dir.path()).exists().is_directory();
    }

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        assert_that(dir.path().join("nope.txt")).does_not_exist();
    }

    #[test]
    #[should_panic(expected = "to exist.")]
    fn test_exists_fails() {
        assert_that(Path::new("/definitely/not/here/attest")).exists();
    }

    #[test]
    #[should_panic(expected = "to be an existing regular file.")]
    fn test_is_file_fails_on_directory() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        assert_that(dir.path()).is_file();
    }

    #[test]
    fn test_has_file_name_failure_message() {
        let failure = assert_that(Path::new("/tmp/data.txt"))
            .check_has_file_name("other.txt")
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "Expecting path:\n  /tmp/data.txt\nto have file name:\n  \"other.txt\"\nbut had:\n  \"data.txt\""
        );
    }
}

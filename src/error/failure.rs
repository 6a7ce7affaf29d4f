//! A single failed expectation.

use super::stack::{self, Frame};

/// A failed assertion, carrying its precomputed descriptive message and
/// the backtrace captured where it was built.
///
/// The backtrace is filtered so its first frame points at the caller's
/// test code (see [`crate::config::set_remove_library_frames`]).
///
/// # Example
///
/// ```rust
/// use attest::assert_that;
///
/// let failure = assert_that(2i32).check_is_equal_to(&3).unwrap_err();
/// assert_eq!(failure.message(), "expected: 3\n but was: 2");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
    frames: Vec<Frame>,
}

impl AssertionFailure {
    /// Build a failure with the given message, capturing the current
    /// backtrace.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            frames: stack::capture(),
        }
    }

    /// The descriptive failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The captured (filtered) backtrace frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The message followed by up to `max_frames` leading backtrace frames.
    ///
    /// [`crate::config::max_stacktrace_frames_displayed`] is the limit used
    /// when failures are aggregated.
    pub fn message_with_location(&self, max_frames: usize) -> String {
        let rendered = stack::render_frames(&self.frames, max_frames);
        if rendered.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n{}", self.message, rendered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_displayed() {
        let failure = AssertionFailure::new("expected: 2\n but was: 1");
        assert_eq!(failure.to_string(), "expected: 2\n but was: 1");
        assert_eq!(failure.message(), "expected: 2\n but was: 1");
    }

    #[test]
    fn test_backtrace_excludes_library_frames_by_default() {
        let failure = AssertionFailure::new("boom");
        assert!(failure
            .frames()
            .iter()
            .all(|frame| !frame.symbol.contains("attest::")));
    }
}

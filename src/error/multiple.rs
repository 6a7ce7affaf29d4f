//! Aggregation of several failures into one error.

use std::fmt;

use super::AssertionFailure;

/// An ordered collection of assertion failures reported as one error.
///
/// The message numbers each failure and shows its leading backtrace
/// frames, so a soft-assertion session reads as a single report:
///
/// ```text
/// Multiple Failures (2 failures)
/// -- failure 1 --
/// expected: 2
///  but was: 1
/// at my_crate::tests::test_numbers (./tests/numbers.rs:12:5)
/// -- failure 2 --
/// ...
/// ```
#[derive(Debug, Clone)]
pub struct MultipleFailuresError {
    heading: Option<String>,
    object_under_test: Option<String>,
    failures: Vec<AssertionFailure>,
}

impl MultipleFailuresError {
    /// Wrap the given failures, in order.
    pub fn new(failures: Vec<AssertionFailure>) -> Self {
        Self {
            heading: None,
            object_under_test: None,
            failures,
        }
    }

    /// Replace the default `Multiple Failures` heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Name the object under test; rendered as a `For <object>,` line above
    /// the heading.
    pub fn with_object_under_test(mut self, rendered: impl Into<String>) -> Self {
        self.object_under_test = Some(rendered.into());
        self
    }

    /// The collected failures, in insertion order.
    pub fn failures(&self) -> &[AssertionFailure] {
        &self.failures
    }

    /// Number of collected failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Whether no failure was collected.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// The aggregated, numbered message, showing
    /// [`crate::config::max_stacktrace_frames_displayed`] backtrace frames
    /// per failure.
    pub fn message(&self) -> String {
        self.message_with_max_frames(crate::config::max_stacktrace_frames_displayed())
    }

    /// The aggregated message with an explicit per-failure frame limit.
    pub fn message_with_max_frames(&self, max_frames: usize) -> String {
        let mut out = String::from("\n");
        if let Some(object) = &self.object_under_test {
            out.push_str(&format!("For {},\n", object));
        }
        let heading = self.heading.as_deref().unwrap_or("Multiple Failures");
        let count = self.failures.len();
        let plural = if count == 1 { "" } else { "s" };
        out.push_str(&format!("{} ({} failure{})", heading, count, plural));
        for (index, failure) in self.failures.iter().enumerate() {
            out.push_str(&format!("\n-- failure {} --\n", index + 1));
            out.push_str(&failure.message_with_location(max_frames));
        }
        out
    }
}

impl fmt::Display for MultipleFailuresError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for MultipleFailuresError {}

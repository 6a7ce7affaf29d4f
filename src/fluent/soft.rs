//! Soft assertions: collect failures instead of stopping at the first.
//!
//! A [`SoftAssertions`] session hands out the same builders as
//! [`super::assert_that`], but failures are recorded instead of panicking;
//! `assert_all` reports everything that was collected at once.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{AssertionFailure, MultipleFailuresError};
use crate::presentation::{Describe, StandardRepresentation};

use super::builder::{AssertionInfo, IntoAssert, ValueAssert};

/// Shared sink the builders of one soft-assertion session report into.
///
/// Cloning is cheap; every clone points at the same collected failures.
/// Collection is single-threaded by construction.
#[derive(Clone, Default)]
pub struct ErrorCollector {
    state: Rc<RefCell<CollectorState>>,
}

#[derive(Default)]
struct CollectorState {
    failures: Vec<AssertionFailure>,
    on_failure: Option<Box<dyn Fn(&AssertionFailure)>>,
}

impl ErrorCollector {
    pub(crate) fn collect(&self, failure: AssertionFailure) {
        let mut state = self.state.borrow_mut();
        if let Some(callback) = &state.on_failure {
            callback(&failure);
        }
        state.failures.push(failure);
    }

    fn failures(&self) -> Vec<AssertionFailure> {
        self.state.borrow().failures.clone()
    }

    fn len(&self) -> usize {
        self.state.borrow().failures.len()
    }
}

impl std::fmt::Debug for ErrorCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorCollector")
            .field("failures", &self.len())
            .finish()
    }
}

/// A soft-assertion session.
///
/// Assertions started from it record their failures instead of panicking;
/// [`assert_all`](SoftAssertions::assert_all) then reports every recorded
/// failure in one aggregated, numbered message.
///
/// # Example
///
/// ```rust
/// use attest::SoftAssertions;
///
/// let softly = SoftAssertions::new();
/// softly.assert_that(1i32 + 1).is_equal_to(2);
/// softly.assert_that("mani").contains("ani");
/// softly.assert_all(); // nothing collected, does not panic
/// ```
#[derive(Debug, Default)]
pub struct SoftAssertions {
    collector: ErrorCollector,
    heading: Option<String>,
    object_under_test: Option<String>,
}

impl SoftAssertions {
    /// Start a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `heading` instead of `Multiple Failures` in the aggregated
    /// message.
    pub fn described_as(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Name the object under test; shown as a `For <object>,` line above
    /// the aggregated message.
    pub fn on_object<T: Describe + Any>(mut self, object: &T) -> Self {
        self.object_under_test = Some(StandardRepresentation::new().to_string_of(object));
        self
    }

    /// Register a callback observing each failure as it is collected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::SoftAssertions;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let seen = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&seen);
    ///
    /// let softly = SoftAssertions::new();
    /// softly.set_after_failure_collected(move |_| counter.set(counter.get() + 1));
    /// softly.assert_that(1i32).is_equal_to(2);
    /// assert_eq!(seen.get(), 1);
    /// ```
    pub fn set_after_failure_collected(&self, callback: impl Fn(&AssertionFailure) + 'static) {
        self.collector.state.borrow_mut().on_failure = Some(Box::new(callback));
    }

    /// Start an assertion chain whose failures are collected by this
    /// session.
    pub fn assert_that<S: IntoAssert>(&self, subject: S) -> S::Assert {
        subject.into_assert(AssertionInfo::soft(self.collector.clone()))
    }

    /// Start a collected assertion chain on a value of an arbitrary type.
    pub fn assert_that_value<T>(&self, actual: T) -> ValueAssert<T> {
        ValueAssert::with_info(actual, AssertionInfo::soft(self.collector.clone()))
    }

    /// Number of failures collected so far.
    pub fn error_count(&self) -> usize {
        self.collector.len()
    }

    /// Whether no failure was collected so far.
    pub fn was_success(&self) -> bool {
        self.collector.len() == 0
    }

    /// The failures collected so far, in insertion order.
    pub fn failures(&self) -> Vec<AssertionFailure> {
        self.collector.failures()
    }

    /// Evaluate the session without panicking.
    ///
    /// # Errors
    ///
    /// Returns a [`MultipleFailuresError`] aggregating every collected
    /// failure when at least one was recorded.
    pub fn check_all(&self) -> Result<(), MultipleFailuresError> {
        let failures = self.collector.failures();
        if failures.is_empty() {
            return Ok(());
        }
        let mut error = MultipleFailuresError::new(failures);
        if let Some(heading) = &self.heading {
            error = error.with_heading(heading.clone());
        }
        if let Some(object) = &self.object_under_test {
            error = error.with_object_under_test(object.clone());
        }
        Err(error)
    }

    /// Report every collected failure.
    ///
    /// Does nothing when the session is clean; panics with the single
    /// failure's own message when exactly one was collected, and with the
    /// aggregated numbered message otherwise.
    ///
    /// # Panics
    ///
    /// Panics when at least one failure was collected.
    pub fn assert_all(&self) {
        match self.error_count() {
            0 => {}
            1 => {
                let failures = self.collector.failures();
                panic!("{}", failures[0]);
            }
            _ => match self.check_all() {
                Ok(()) => {}
                Err(error) => panic!("{}", error),
            },
        }
    }
}

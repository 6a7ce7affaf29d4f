//! Process-wide presentation and error-reporting settings.
//!
//! These are simple global settings mutated via setter calls; the atomics
//! exist only because Rust statics must be `Sync`. Defaults can be
//! overridden once at startup through environment variables
//! (`ATTEST_MAX_ELEMENTS`, `ATTEST_MAX_SINGLE_LINE`, `ATTEST_MAX_FRAMES`),
//! which are read on first access.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Maximum number of elements of a collection to render before truncating.
pub const DEFAULT_MAX_ELEMENTS_FOR_PRINTING: usize = 1000;
/// Maximum rendered length for a collection to stay on a single line.
pub const DEFAULT_MAX_LENGTH_FOR_SINGLE_LINE: usize = 80;
/// Number of leading backtrace frames shown per collected failure.
pub const DEFAULT_MAX_STACKTRACE_FRAMES_DISPLAYED: usize = 3;

// Sentinel meaning "not explicitly set, fall back to the (env-adjusted)
// default".
const UNSET: usize = usize::MAX;

static MAX_ELEMENTS_FOR_PRINTING: AtomicUsize = AtomicUsize::new(UNSET);
static MAX_LENGTH_FOR_SINGLE_LINE: AtomicUsize = AtomicUsize::new(UNSET);
static MAX_STACKTRACE_FRAMES_DISPLAYED: AtomicUsize = AtomicUsize::new(UNSET);
static REMOVE_LIBRARY_FRAMES: AtomicBool = AtomicBool::new(true);

struct EnvDefaults {
    max_elements: usize,
    max_single_line: usize,
    max_frames: usize,
}

/// Environment overrides, parsed once on first access.
fn env_defaults() -> &'static EnvDefaults {
    static DEFAULTS: OnceLock<EnvDefaults> = OnceLock::new();
    DEFAULTS.get_or_init(|| EnvDefaults {
        max_elements: env_override("ATTEST_MAX_ELEMENTS", 1)
            .unwrap_or(DEFAULT_MAX_ELEMENTS_FOR_PRINTING),
        max_single_line: env_override("ATTEST_MAX_SINGLE_LINE", 1)
            .unwrap_or(DEFAULT_MAX_LENGTH_FOR_SINGLE_LINE),
        max_frames: env_override("ATTEST_MAX_FRAMES", 0)
            .unwrap_or(DEFAULT_MAX_STACKTRACE_FRAMES_DISPLAYED),
    })
}

fn env_override(name: &str, min: usize) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    Some(parse_setting(name, &raw, min))
}

/// Parse and validate a setting value coming from the environment.
///
/// # Panics
///
/// Panics with a descriptive message when the value is not an integer, is
/// negative, or is below `min`.
fn parse_setting(name: &str, raw: &str, min: usize) -> usize {
    let value: i64 = raw
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("{} must be an integer, but was \"{}\"", name, raw));
    if value < 0 {
        panic!("{} must not be negative, but was {}", name, value);
    }
    let value = value as usize;
    if value < min {
        panic!("{} must be >= {}, but was {}", name, min, value);
    }
    value
}

/// Maximum number of elements of a collection to render before truncating.
pub fn max_elements_for_printing() -> usize {
    match MAX_ELEMENTS_FOR_PRINTING.load(Ordering::Relaxed) {
        UNSET => env_defaults().max_elements,
        value => value,
    }
}

/// Change the maximum number of elements rendered per collection.
///
/// # Panics
///
/// Panics if `value` is zero.
pub fn set_max_elements_for_printing(value: usize) {
    assert!(
        value >= 1,
        "max_elements_for_printing must be >= 1, but was {}",
        value
    );
    MAX_ELEMENTS_FOR_PRINTING.store(value, Ordering::Relaxed);
}

/// Maximum rendered length for a collection to stay on a single line.
pub fn max_length_for_single_line() -> usize {
    match MAX_LENGTH_FOR_SINGLE_LINE.load(Ordering::Relaxed) {
        UNSET => env_defaults().max_single_line,
        value => value,
    }
}

/// Change the single-line length threshold.
///
/// # Panics
///
/// Panics if `value` is zero.
pub fn set_max_length_for_single_line(value: usize) {
    assert!(
        value >= 1,
        "max_length_for_single_line must be >= 1, but was {}",
        value
    );
    MAX_LENGTH_FOR_SINGLE_LINE.store(value, Ordering::Relaxed);
}

/// Number of leading backtrace frames shown per collected failure.
///
/// Zero disables per-failure backtrace display.
pub fn max_stacktrace_frames_displayed() -> usize {
    match MAX_STACKTRACE_FRAMES_DISPLAYED.load(Ordering::Relaxed) {
        UNSET => env_defaults().max_frames,
        value => value,
    }
}

/// Change the number of backtrace frames shown per collected failure.
pub fn set_max_stacktrace_frames_displayed(value: usize) {
    MAX_STACKTRACE_FRAMES_DISPLAYED.store(value, Ordering::Relaxed);
}

/// Whether library-internal frames are filtered out of captured backtraces.
pub fn remove_library_frames() -> bool {
    REMOVE_LIBRARY_FRAMES.load(Ordering::Relaxed)
}

/// Enable or disable backtrace filtering.
pub fn set_remove_library_frames(enabled: bool) {
    REMOVE_LIBRARY_FRAMES.store(enabled, Ordering::Relaxed);
}

/// Restore every setting to its (env-adjusted) default.
pub fn reset_defaults() {
    MAX_ELEMENTS_FOR_PRINTING.store(UNSET, Ordering::Relaxed);
    MAX_LENGTH_FOR_SINGLE_LINE.store(UNSET, Ordering::Relaxed);
    MAX_STACKTRACE_FRAMES_DISPLAYED.store(UNSET, Ordering::Relaxed);
    REMOVE_LIBRARY_FRAMES.store(true, Ordering::Relaxed);
}

//! Backtrace capture and filtering.
//!
//! Failure messages point at the caller's test code, not at this library:
//! frames belonging to the library's own call chain are removed, along
//! with the std/core machinery the library invoked on the way.

use std::backtrace::Backtrace;
use std::sync::OnceLock;

use regex::Regex;

use crate::config;

// Frames whose symbol starts with this belong to the library itself.
const LIBRARY_PREFIX: &str = "attest::";

// Runtime frames are only dropped once the library has appeared in the
// stack; everything below the first library frame is caller code and is
// kept untouched.
const RUNTIME_PREFIXES: &[&str] = &["std::", "core::", "alloc::", "__rust", "rust_"];

/// One captured backtrace frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The demangled symbol name.
    pub symbol: String,
    /// Source location (`file:line:column`), when resolvable.
    pub location: Option<String>,
}

impl Frame {
    /// A frame with a symbol and no source location.
    pub fn named(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            location: None,
        }
    }
}

/// Capture the current backtrace, filtered according to
/// [`config::remove_library_frames`].
pub fn capture() -> Vec<Frame> {
    let frames = parse_backtrace(&Backtrace::force_capture().to_string());
    if config::remove_library_frames() {
        filter_library_frames(frames)
    } else {
        frames
    }
}

/// Remove the library's own frames from a captured backtrace.
///
/// Walks the stack from its root (the outermost caller): everything before
/// the library first appears is caller code and is kept; from there on,
/// library frames and the runtime frames they invoked are dropped, so the
/// innermost remaining frame points at the caller's assertion line.
pub fn filter_library_frames(frames: Vec<Frame>) -> Vec<Frame> {
    let mut purged: Vec<Frame> = Vec::with_capacity(frames.len());
    let mut library_seen = false;
    for frame in frames.into_iter().rev() {
        if is_library_frame(&frame) {
            library_seen = true;
            continue;
        }
        if !library_seen || !is_runtime_frame(&frame) {
            purged.push(frame);
        }
    }
    purged.reverse();
    purged
}

/// Render up to `max` leading frames, one `at ...` line each.
///
/// Appends a marker naming how many lines were left out when the trace is
/// longer than `max`; returns an empty string when `max` is zero.
pub fn render_frames(frames: &[Frame], max: usize) -> String {
    if max == 0 || frames.is_empty() {
        return String::new();
    }
    let mut lines: Vec<String> = frames
        .iter()
        .take(max)
        .map(|frame| match &frame.location {
            Some(location) => format!("at {} ({})", frame.symbol, location),
            None => format!("at {}", frame.symbol),
        })
        .collect();
    if frames.len() > max {
        lines.push(format!(
            "...({} remaining lines not displayed - this can be changed with config::set_max_stacktrace_frames_displayed)",
            frames.len() - max
        ));
    }
    lines.join("\n")
}

fn is_library_frame(frame: &Frame) -> bool {
    frame.symbol.contains(LIBRARY_PREFIX)
}

fn is_runtime_frame(frame: &Frame) -> bool {
    RUNTIME_PREFIXES
        .iter()
        .any(|prefix| frame.symbol.starts_with(prefix) || frame.symbol.starts_with('<'))
}

/// Parse the display form of [`std::backtrace::Backtrace`] into frames.
///
/// Lines look like:
///
/// ```text
///    4: attest::fluent::builder::ValueAssert<T>::is_equal_to
///              at ./src/fluent/builder.rs:120:13
/// ```
fn parse_backtrace(rendered: &str) -> Vec<Frame> {
    static FRAME_LINE: OnceLock<Regex> = OnceLock::new();
    static LOCATION_LINE: OnceLock<Regex> = OnceLock::new();
    let frame_line = FRAME_LINE.get_or_init(|| {
        Regex::new(r"^\s*\d+:\s+(.+?)\s*$").unwrap_or_else(|e| panic!("invalid frame regex: {}", e))
    });
    let location_line = LOCATION_LINE.get_or_init(|| {
        Regex::new(r"^\s+at\s+(.+?)\s*$")
            .unwrap_or_else(|e| panic!("invalid location regex: {}", e))
    });

    let mut frames: Vec<Frame> = Vec::new();
    for line in rendered.lines() {
        if let Some(captures) = frame_line.captures(line) {
            frames.push(Frame::named(&captures[1]));
        } else if let Some(captures) = location_line.captures(line) {
            if let Some(last) = frames.last_mut() {
                last.location = Some(captures[1].to_string());
            }
        }
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(symbol: &str) -> Frame {
        Frame::named(symbol)
    }

    #[test]
    fn test_filter_keeps_caller_frames() {
        let frames = vec![
            frame("attest::fluent::builder::ValueAssert<i32>::is_equal_to"),
            frame("my_crate::tests::test_numbers"),
            frame("core::ops::function::FnOnce::call_once"),
            frame("std::rt::lang_start"),
        ];
        let filtered = filter_library_frames(frames);
        assert_eq!(
            filtered,
            vec![
                frame("my_crate::tests::test_numbers"),
                frame("core::ops::function::FnOnce::call_once"),
                frame("std::rt::lang_start"),
            ]
        );
    }

    #[test]
    fn test_filter_drops_runtime_frames_invoked_by_the_library() {
        let frames = vec![
            frame("std::panicking::begin_panic"),
            frame("core::fmt::write"),
            frame("attest::error::failure::AssertionFailure::new"),
            frame("attest::fluent::string::StringAssert::contains"),
            frame("my_crate::tests::test_strings"),
            frame("std::rt::lang_start"),
        ];
        let filtered = filter_library_frames(frames);
        // The runtime frames above the caller came from the library and are
        // gone; the ones below the first library frame survive.
        assert_eq!(
            filtered,
            vec![
                frame("my_crate::tests::test_strings"),
                frame("std::rt::lang_start"),
            ]
        );
    }

    #[test]
    fn test_filter_without_library_frames_is_identity() {
        let frames = vec![
            frame("my_crate::deep::helper"),
            frame("my_crate::tests::test_it"),
            frame("std::rt::lang_start"),
        ];
        assert_eq!(filter_library_frames(frames.clone()), frames);
    }

    #[test]
    fn test_first_remaining_frame_is_the_caller() {
        let frames = vec![
            frame("attest::fluent::iterable::IterableAssert<i32>::contains"),
            frame("my_crate::tests::test_contains"),
        ];
        let filtered = filter_library_frames(frames);
        assert_eq!(filtered[0].symbol, "my_crate::tests::test_contains");
    }

    #[test]
    fn test_parse_backtrace_lines() {
        let rendered = "   0: attest::error::stack::capture\n             at ./src/error/stack.rs:40:5\n   1: my_crate::tests::boom\n             at ./tests/boom.rs:12:9\n   2: unresolved_frame\n";
        let frames = parse_backtrace(rendered);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].symbol, "attest::error::stack::capture");
        assert_eq!(frames[0].location.as_deref(), Some("./src/error/stack.rs:40:5"));
        assert_eq!(frames[1].symbol, "my_crate::tests::boom");
        assert_eq!(frames[2].location, None);
    }

    #[test]
    fn test_render_frames_caps_output() {
        let frames = vec![frame("a"), frame("b"), frame("c"), frame("d")];
        let rendered = render_frames(&frames, 2);
        assert_eq!(
            rendered,
            "at a\nat b\n...(2 remaining lines not displayed - this can be changed with config::set_max_stacktrace_frames_displayed)"
        );
    }

    #[test]
    fn test_render_frames_zero_max_is_empty() {
        let frames = vec![frame("a")];
        assert_eq!(render_frames(&frames, 0), "");
    }

    #[test]
    fn test_render_frames_includes_location() {
        let frames = vec![Frame {
            symbol: "my_crate::tests::boom".to_string(),
            location: Some("./tests/boom.rs:12:9".to_string()),
        }];
        assert_eq!(
            render_frames(&frames, 3),
            "at my_crate::tests::boom (./tests/boom.rs:12:9)"
        );
    }
}

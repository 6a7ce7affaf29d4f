//! The standard representation driver.
//!
//! Renders containers with a deterministic layout: a single line while the
//! joined form stays below a length threshold, one element per line with
//! 4-space indentation otherwise, and symmetric head/tail truncation once
//! a collection exceeds the configured element limit.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use crate::config;
use crate::util::HeadTailAccumulator;

use super::Describe;

const ELEMENT_SEPARATOR: &str = ",";
const ELEMENT_SEPARATOR_WITH_NEWLINE: &str = ",\n";
// 4-space indentation after a newline, single space within one line.
const INDENTATION_AFTER_NEWLINE: &str = "    ";
const INDENTATION_FOR_SINGLE_LINE: &str = " ";
const MAX_ELEMENTS_EXCEEDED: &str = "...";

/// Token rendered in place of a container that contains itself.
pub(crate) const SELF_REFERENCE: &str = "(this instance)";

type FormatterFn = Box<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>;

fn registry() -> &'static RwLock<HashMap<TypeId, FormatterFn>> {
    static REGISTRY: OnceLock<RwLock<HashMap<TypeId, FormatterFn>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Register a display formatter for every value of type `T`.
///
/// The formatter overrides the default representation for that exact type,
/// process-wide, until [`remove_all_registered_formatters`] is called.
///
/// # Example
///
/// ```rust
/// use attest::presentation::{register_formatter_for_type, StandardRepresentation};
///
/// register_formatter_for_type::<u8, _>(|byte| format!("0x{:02x}", byte));
/// let rep = StandardRepresentation::new();
/// assert_eq!(rep.to_string_of(&255u8), "0xff");
/// # attest::presentation::remove_all_registered_formatters();
/// ```
pub fn register_formatter_for_type<T, F>(formatter: F)
where
    T: 'static,
    F: Fn(&T) -> String + Send + Sync + 'static,
{
    let erased: FormatterFn = Box::new(move |any| any.downcast_ref::<T>().map(&formatter));
    let mut formatters = match registry().write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    formatters.insert(TypeId::of::<T>(), erased);
}

/// Clear all formatters registered with [`register_formatter_for_type`].
pub fn remove_all_registered_formatters() {
    let mut formatters = match registry().write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    formatters.clear();
}

fn custom_format<T: Any>(value: &T) -> Option<String> {
    let formatters = match registry().read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    formatters.get(&TypeId::of::<T>()).and_then(|f| f(value))
}

/// The default representation driver.
///
/// Stateless apart from optional per-instance overrides of the global
/// limits, so a fresh instance is cheap and the [`Default`] one can be
/// shared freely.
///
/// # Example
///
/// ```rust
/// use attest::presentation::StandardRepresentation;
///
/// let rep = StandardRepresentation::new().with_max_elements(4);
/// let formatted = rep.to_string_of(&(1..=10).collect::<Vec<_>>());
/// assert_eq!(formatted, "[1, 2, ... 9, 10]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandardRepresentation {
    max_elements: Option<usize>,
    max_single_line: Option<usize>,
}

impl StandardRepresentation {
    /// Create a driver using the process-wide limits.
    pub const fn new() -> Self {
        Self {
            max_elements: None,
            max_single_line: None,
        }
    }

    /// Override the element limit for this instance only.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    pub fn with_max_elements(mut self, value: usize) -> Self {
        assert!(value >= 1, "max_elements must be >= 1, but was {}", value);
        self.max_elements = Some(value);
        self
    }

    /// Override the single-line length threshold for this instance only.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    pub fn with_max_single_line(mut self, value: usize) -> Self {
        assert!(value >= 1, "max_single_line must be >= 1, but was {}", value);
        self.max_single_line = Some(value);
        self
    }

    fn max_elements(&self) -> usize {
        self.max_elements
            .unwrap_or_else(config::max_elements_for_printing)
    }

    fn max_single_line(&self) -> usize {
        self.max_single_line
            .unwrap_or_else(config::max_length_for_single_line)
    }

    /// Render a value, honoring any formatter registered for its type.
    pub fn to_string_of<T: Describe + Any>(&self, value: &T) -> String {
        if let Some(formatted) = custom_format(value) {
            return formatted;
        }
        value.describe_to(self)
    }

    /// Render a value with its type name appended, so that two values whose
    /// plain representations collide can still be told apart.
    ///
    /// ```rust
    /// use attest::presentation::StandardRepresentation;
    ///
    /// let rep = StandardRepresentation::new();
    /// assert_eq!(rep.unambiguous_string_of(&1i32), "1 (i32)");
    /// ```
    pub fn unambiguous_string_of<T: Describe + Any>(&self, value: &T) -> String {
        format!(
            "{} ({})",
            self.to_string_of(value),
            short_type_name(std::any::type_name::<T>())
        )
    }

    /// Render a sequence of elements as a group (`[a, b, c]`).
    ///
    /// The group stays on a single line while its joined form is within the
    /// length threshold, and is truncated symmetrically around a `...`
    /// marker once it exceeds the element limit. `root` is the shared
    /// address of the container being formatted, if any; elements backed by
    /// the same allocation render as a back-reference instead of recursing.
    pub fn format_iterable<'a, T, I>(&self, items: I, root: Option<*const ()>) -> String
    where
        T: Describe + Any,
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        // Cap memory before rendering: only the head and tail of a huge
        // collection can ever be displayed.
        let region_cap = self.max_elements() / 2 + 1;
        let mut accumulator = HeadTailAccumulator::new(region_cap, region_cap);
        for item in items {
            accumulator.add(item);
        }
        if accumulator.is_empty() {
            return "[]".to_string();
        }
        let rendered: Vec<String> = accumulator
            .iter()
            .map(|element| self.safe_string_of(*element, root))
            .collect();

        let single_line = self.represent_group(
            &rendered,
            "[",
            "]",
            ELEMENT_SEPARATOR,
            INDENTATION_FOR_SINGLE_LINE,
        );
        if single_line.len() <= self.max_single_line() {
            single_line
        } else {
            self.represent_group(
                &rendered,
                "[",
                "]",
                ELEMENT_SEPARATOR_WITH_NEWLINE,
                INDENTATION_AFTER_NEWLINE,
            )
        }
    }

    /// Render map entries as `{k=v, ...}`, truncating past the element
    /// limit.
    ///
    /// Entries are rendered in the order given; callers sort them when the
    /// key type supports it so the output is deterministic.
    pub fn format_map<'a, K, V, I>(&self, entries: I) -> String
    where
        K: Describe + Any,
        V: Describe + Any,
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: 'a,
        V: 'a,
    {
        let max = self.max_elements();
        let mut iter = entries.into_iter().peekable();
        if iter.peek().is_none() {
            return "{}".to_string();
        }
        let mut out = String::from("{");
        let mut printed = 0;
        while let Some((key, value)) = iter.next() {
            if printed == max {
                out.push_str(MAX_ELEMENTS_EXCEEDED);
                break;
            }
            out.push_str(&self.to_string_of(key));
            out.push('=');
            out.push_str(&self.to_string_of(value));
            printed += 1;
            if iter.peek().is_some() {
                out.push_str(", ");
            }
        }
        out.push('}');
        out
    }

    fn safe_string_of<T: Describe + Any>(&self, element: &T, root: Option<*const ()>) -> String {
        match (element.shared_ptr(), root) {
            (Some(element_ptr), Some(root_ptr)) if element_ptr == root_ptr => {
                SELF_REFERENCE.to_string()
            }
            _ => self.to_string_of(element),
        }
    }

    // Joins pre-rendered elements; only deals with how many to display.
    fn represent_group(
        &self,
        elements: &[String],
        start: &str,
        end: &str,
        separator: &str,
        indentation: &str,
    ) -> String {
        let max = self.max_elements();
        let size = elements.len();
        let mut out = String::from(start);
        if size <= max {
            for (i, element) in elements.iter().enumerate() {
                if i != 0 {
                    out.push_str(indentation);
                }
                out.push_str(element);
                if i != size - 1 {
                    out.push_str(separator);
                }
            }
            out.push_str(end);
            return out;
        }
        // Too many elements: keep the first (max+1)/2 and last max/2, one
        // more leading than trailing element when max is odd.
        let head = (max + 1) / 2;
        let tail = max / 2;
        for element in &elements[..head] {
            out.push_str(element);
            out.push_str(separator);
            out.push_str(indentation);
        }
        out.push_str(MAX_ELEMENTS_EXCEEDED);
        // A newline after the marker, but no separator: the last head
        // element already carries one.
        if separator.contains('\n') {
            out.push('\n');
        }
        for (i, element) in elements[size - tail..].iter().enumerate() {
            if i != 0 {
                out.push_str(separator);
            }
            out.push_str(indentation);
            out.push_str(element);
        }
        out.push_str(end);
        out
    }
}

/// Strip module paths from a type name, keeping the generic structure:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::new();
    let mut segment = String::new();
    for c in full.chars() {
        match c {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(&segment);
    out
}

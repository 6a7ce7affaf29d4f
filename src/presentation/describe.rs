//! The `Describe` trait and its implementations for common types.

use std::any::Any;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{
    AtomicBool, AtomicI32, AtomicI64, AtomicIsize, AtomicU32, AtomicU64, AtomicUsize, Ordering,
};
use std::time::Duration;

use super::StandardRepresentation;

/// How a value renders itself in failure messages.
///
/// Implement this for your own types to control how they appear; the
/// driver handles container layout, truncation, and back-references.
///
/// # Example
///
/// ```rust
/// use attest::presentation::{Describe, StandardRepresentation};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Describe for Point {
///     fn describe_to(&self, _rep: &StandardRepresentation) -> String {
///         format!("({}, {})", self.x, self.y)
///     }
/// }
/// ```
pub trait Describe {
    /// Render this value using the given representation driver.
    fn describe_to(&self, rep: &StandardRepresentation) -> String;

    /// Address of the shared allocation backing this value, if any.
    ///
    /// Containers living behind a shared pointer report it so the driver
    /// can render a back-reference to the container currently being
    /// formatted instead of recursing into it.
    fn shared_ptr(&self) -> Option<*const ()> {
        None
    }
}

macro_rules! describe_with_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Describe for $t {
                fn describe_to(&self, _rep: &StandardRepresentation) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

describe_with_display!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Debug formatting keeps the decimal point on round floats (1.0, not 1).
impl Describe for f32 {
    fn describe_to(&self, _rep: &StandardRepresentation) -> String {
        format!("{:?}", self)
    }
}

impl Describe for f64 {
    fn describe_to(&self, _rep: &StandardRepresentation) -> String {
        format!("{:?}", self)
    }
}

impl Describe for char {
    fn describe_to(&self, _rep: &StandardRepresentation) -> String {
        format!("'{}'", self)
    }
}

impl Describe for String {
    fn describe_to(&self, _rep: &StandardRepresentation) -> String {
        format!("\"{}\"", self)
    }
}

impl Describe for &str {
    fn describe_to(&self, _rep: &StandardRepresentation) -> String {
        format!("\"{}\"", self)
    }
}

impl Describe for Duration {
    fn describe_to(&self, _rep: &StandardRepresentation) -> String {
        format!("{:?}", self)
    }
}

impl Describe for PathBuf {
    fn describe_to(&self, _rep: &StandardRepresentation) -> String {
        self.display().to_string()
    }
}

impl Describe for &Path {
    fn describe_to(&self, _rep: &StandardRepresentation) -> String {
        self.display().to_string()
    }
}

impl<T: Describe + Any> Describe for Option<T> {
    fn describe_to(&self, rep: &StandardRepresentation) -> String {
        match self {
            Some(value) => format!("Some({})", rep.to_string_of(value)),
            None => "None".to_string(),
        }
    }
}

impl<T: Describe + Any, E: Describe + Any> Describe for Result<T, E> {
    fn describe_to(&self, rep: &StandardRepresentation) -> String {
        match self {
            Ok(value) => format!("Ok({})", rep.to_string_of(value)),
            Err(error) => format!("Err({})", rep.to_string_of(error)),
        }
    }
}

impl<T: Describe + Any> Describe for Vec<T> {
    fn describe_to(&self, rep: &StandardRepresentation) -> String {
        rep.format_iterable(self.iter(), None)
    }
}

impl<T: Describe + Any, const N: usize> Describe for [T; N] {
    fn describe_to(&self, rep: &StandardRepresentation) -> String {
        rep.format_iterable(self.iter(), None)
    }
}

/// Entries are sorted by natural key order so the rendering stays
/// deterministic across runs.
impl<K: Describe + Ord + Any, V: Describe + Any> Describe for HashMap<K, V> {
    fn describe_to(&self, rep: &StandardRepresentation) -> String {
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        rep.format_map(entries)
    }
}

impl<K: Describe + Any, V: Describe + Any> Describe for BTreeMap<K, V> {
    fn describe_to(&self, rep: &StandardRepresentation) -> String {
        rep.format_map(self.iter())
    }
}

/// A shared, mutable list: the one container shape that can legitimately
/// contain itself. Reports its allocation address so the driver renders
/// the back-reference instead of recursing forever.
impl<T: Describe + Any> Describe for Rc<RefCell<Vec<T>>> {
    fn describe_to(&self, rep: &StandardRepresentation) -> String {
        let items = self.borrow();
        rep.format_iterable(items.iter(), self.shared_ptr())
    }

    fn shared_ptr(&self) -> Option<*const ()> {
        Some(Rc::as_ptr(self) as *const ())
    }
}

macro_rules! describe_atomic {
    ($($t:ident),* $(,)?) => {
        $(
            impl Describe for $t {
                fn describe_to(&self, _rep: &StandardRepresentation) -> String {
                    format!("{}[{}]", stringify!($t), self.load(Ordering::Relaxed))
                }
            }
        )*
    };
}

describe_atomic!(
    AtomicBool,
    AtomicI32,
    AtomicI64,
    AtomicIsize,
    AtomicU32,
    AtomicU64,
    AtomicUsize,
);

macro_rules! describe_tuple {
    ($(($($name:ident : $idx:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Describe + Any),+> Describe for ($($name,)+) {
                fn describe_to(&self, rep: &StandardRepresentation) -> String {
                    let parts = vec![$(rep.to_string_of(&self.$idx)),+];
                    format!("({})", parts.join(", "))
                }
            }
        )*
    };
}

describe_tuple!(
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
);

#[cfg(feature = "json")]
impl Describe for serde_json::Value {
    fn describe_to(&self, rep: &StandardRepresentation) -> String {
        match self {
            serde_json::Value::Null => "null".to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => format!("\"{}\"", s),
            serde_json::Value::Array(values) => rep.format_iterable(values.iter(), None),
            serde_json::Value::Object(map) => {
                rep.format_map(map.iter().map(|(k, v)| (k, v)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<T: Describe + Any>(value: &T) -> String {
        StandardRepresentation::new().to_string_of(value)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(rendered(&true), "true");
        assert_eq!(rendered(&42i32), "42");
        assert_eq!(rendered(&1.0f64), "1.0");
        assert_eq!(rendered(&1.5f32), "1.5");
        assert_eq!(rendered(&'a'), "'a'");
    }

    #[test]
    fn test_strings_are_quoted() {
        assert_eq!(rendered(&"hello"), "\"hello\"");
        assert_eq!(rendered(&"hello".to_string()), "\"hello\"");
    }

    #[test]
    fn test_option_and_result() {
        assert_eq!(rendered(&Some(3)), "Some(3)");
        assert_eq!(rendered(&None::<i32>), "None");
        assert_eq!(rendered(&Ok::<_, String>(3)), "Ok(3)");
        assert_eq!(
            rendered(&Err::<i32, _>("boom".to_string())),
            "Err(\"boom\")"
        );
    }

    #[test]
    fn test_nested_containers() {
        assert_eq!(rendered(&vec![vec![1, 2], vec![3]]), "[[1, 2], [3]]");
        assert_eq!(rendered(&[Some("a"), None]), "[Some(\"a\"), None]");
    }

    #[test]
    fn test_atomics_render_as_type_and_value() {
        assert_eq!(rendered(&AtomicBool::new(true)), "AtomicBool[true]");
        assert_eq!(rendered(&AtomicI64::new(-3)), "AtomicI64[-3]");
        assert_eq!(rendered(&AtomicUsize::new(7)), "AtomicUsize[7]");
    }

    #[test]
    fn test_tuples() {
        assert_eq!(rendered(&(1, "a")), "(1, \"a\")");
        assert_eq!(rendered(&(1, 2.5f64, 'x')), "(1, 2.5, 'x')");
    }

    #[test]
    fn test_duration() {
        assert_eq!(rendered(&Duration::from_millis(1500)), "1.5s");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_values() {
        let value: serde_json::Value = serde_json::json!({
            "name": "attest",
            "tags": ["a", "b"],
            "count": 2,
            "extra": null
        });
        let formatted = rendered(&value);
        assert!(formatted.contains("\"name\"=\"attest\""));
        assert!(formatted.contains("\"tags\"=[\"a\", \"b\"]"));
        assert!(formatted.contains("\"count\"=2"));
        assert!(formatted.contains("\"extra\"=null"));
    }
}

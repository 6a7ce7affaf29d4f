//! Fluent assertion builder for maps.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};

use crate::error::AssertionFailure;
use crate::presentation::{Describe, StandardRepresentation};

use super::builder::{AssertionInfo, IntoAssert};

/// Builder for assertions on map contents.
///
/// Entries are snapshotted when the chain starts; `HashMap` subjects are
/// sorted by key so failure messages stay deterministic.
///
/// # Example
///
/// ```rust
/// use attest::assert_that;
/// use std::collections::HashMap;
///
/// let mut scores = HashMap::new();
/// scores.insert("alice", 10);
/// scores.insert("bob", 7);
///
/// assert_that(scores)
///     .has_size(2)
///     .contains_key(&"alice")
///     .contains_entry(&"bob", &7);
/// ```
#[derive(Debug, Clone)]
pub struct MapAssert<K, V> {
    entries: Vec<(K, V)>,
    info: AssertionInfo,
}

impl<K, V> MapAssert<K, V> {
    pub(crate) fn with_info(entries: Vec<(K, V)>, info: AssertionInfo) -> Self {
        Self { entries, info }
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

    /// The entries under test, in rendering order.
    pub fn actual(&self) -> &[(K, V)] {
        &self.entries
    }
}

impl<K: Describe + Any, V: Describe + Any> MapAssert<K, V> {
    /// Assert the map has exactly `expected` entries.
    pub fn has_size(self, expected: usize) -> Self {
        if let Err(failure) = self.check_has_size(expected) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the map is empty.
    pub fn is_empty(self) -> Self {
        if let Err(failure) = self.check_is_empty() {
            self.info.report(failure);
        }
        self
    }

    /// Evaluate the entry count without panicking.
    pub fn check_has_size(&self, expected: usize) -> Result<(), AssertionFailure> {
        let actual = self.entries.len();
        if actual == expected {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expected size: {} but was: {} in:\n{}",
            expected,
            actual,
            self.rendered()
        )))
    }

    /// Evaluate emptiness without panicking.
    pub fn check_is_empty(&self) -> Result<(), AssertionFailure> {
        if self.entries.is_empty() {
            return Ok(());
        }
        Err(self
            .info
            .failure(format!("Expecting empty but was: {}", self.rendered())))
    }

    fn rendered(&self) -> String {
        self.info
            .rep()
            .format_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

impl<K: PartialEq + Describe + Any, V: PartialEq + Describe + Any> MapAssert<K, V> {
    /// Assert the map contains `key`.
    pub fn contains_key(self, key: &K) -> Self {
        if let Err(failure) = self.check_contains_key(key) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the map does not contain `key`.
    pub fn does_not_contain_key(self, key: &K) -> Self {
        if let Err(failure) = self.check_does_not_contain_key(key) {
            self.info.report(failure);
        }
        self
    }

    /// Assert the map contains the `key`/`value` entry.
    pub fn contains_entry(self, key: &K, value: &V) -> Self {
        if let Err(failure) = self.check_contains_entry(key, value) {
            self.info.report(failure);
        }
        self
    }

    /// Evaluate key presence without panicking.
    pub fn check_contains_key(&self, key: &K) -> Result<(), AssertionFailure> {
        if self.entries.iter().any(|(k, _)| k == key) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  {}\nto contain key:\n  {}",
            self.rendered(),
            self.info.rep().to_string_of(key)
        )))
    }

    /// Evaluate key absence without panicking.
    pub fn check_does_not_contain_key(&self, key: &K) -> Result<(), AssertionFailure> {
        if !self.entries.iter().any(|(k, _)| k == key) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  {}\nnot to contain key:\n  {}",
            self.rendered(),
            self.info.rep().to_string_of(key)
        )))
    }

    /// Evaluate entry presence without panicking.
    pub fn check_contains_entry(&self, key: &K, value: &V) -> Result<(), AssertionFailure> {
        if self.entries.iter().any(|(k, v)| k == key && v == value) {
            return Ok(());
        }
        Err(self.info.failure(format!(
            "Expecting actual:\n  {}\nto contain entry:\n  {}={}",
            self.rendered(),
            self.info.rep().to_string_of(key),
            self.info.rep().to_string_of(value)
        )))
    }
}

impl<K: Ord, V> IntoAssert for HashMap<K, V> {
    type Assert = MapAssert<K, V>;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert {
        let mut entries: Vec<(K, V)> = self.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        MapAssert::with_info(entries, info)
    }
}

impl<K, V> IntoAssert for BTreeMap<K, V> {
    type Assert = MapAssert<K, V>;

    fn into_assert(self, info: AssertionInfo) -> Self::Assert {
        MapAssert::with_info(self.into_iter().collect(), info)
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::assert_that;
    use std::collections::{BTreeMap, HashMap};

    fn sample() -> HashMap<&'static str, i32> {
        let mut map = HashMap::new();
        map.insert("alice", 10);
        map.insert("bob", 7);
        map
    }

    #[test]
    fn test_has_size() {
        assert_that(sample()).has_size(2);
    }

    #[test]
    #[should_panic(expected = "Expected size: 3 but was: 2 in:\n{\"alice\"=10, \"bob\"=7}")]
    fn test_has_size_fails_with_sorted_rendering() {
        assert_that(sample()).has_size(3);
    }

    #[test]
    fn test_is_empty() {
        assert_that(HashMap::<i32, i32>::new()).is_empty();
    }

    #[test]
    fn test_contains_key() {
        assert_that(sample())
            .contains_key(&"alice")
            .does_not_contain_key(&"carol");
    }

    #[test]
    #[should_panic(expected = "to contain key:\n  \"carol\"")]
    fn test_contains_key_fails() {
        assert_that(sample()).contains_key(&"carol");
    }

    #[test]
    fn test_contains_entry() {
        assert_that(sample()).contains_entry(&"bob", &7);
    }

    #[test]
    #[should_panic(expected = "to contain entry:\n  \"bob\"=8")]
    fn test_contains_entry_fails_on_wrong_value() {
        assert_that(sample()).contains_entry(&"bob", &8);
    }

    #[test]
    fn test_btreemap_subject() {
        let mut map = BTreeMap::new();
        map.insert(1, "a");
        map.insert(2, "b");
        assert_that(map).has_size(2).contains_key(&1);
    }
}

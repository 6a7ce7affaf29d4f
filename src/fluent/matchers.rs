//! String pattern matching shared by the assertion builders.
//!
//! Three matching modes are supported: glob (e.g. `*.txt`), regex
//! (e.g. `^v\d+\.\d+$`), and exact comparison. [`matches_pattern`] tries
//! them in that order; the explicit `regex_match`/`glob_match` functions
//! fail fast on an invalid pattern instead of falling through.

use glob::Pattern;
use regex::Regex;

/// Error type for malformed matcher patterns.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("invalid regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Match `actual` against `pattern`, trying glob, then regex, then exact
/// comparison.
///
/// Malformed patterns simply fall through to the next mode, so any string
/// is a usable pattern.
///
/// # Example
///
/// ```rust
/// use attest::fluent::matches_pattern;
///
/// assert!(matches_pattern("*.txt", "notes.txt"));
/// assert!(matches_pattern(r"^v\d+$", "v42"));
/// assert!(matches_pattern("literal", "literal"));
/// ```
pub fn matches_pattern(pattern: &str, actual: &str) -> bool {
    if let Ok(glob) = Pattern::new(pattern) {
        if glob.matches(actual) {
            return true;
        }
    }
    if let Ok(re) = Regex::new(pattern) {
        if re.is_match(actual) {
            return true;
        }
    }
    actual == pattern
}

/// Match `actual` against a regex `pattern`.
///
/// # Errors
///
/// Returns [`MatcherError::InvalidRegex`] naming the pattern when it does
/// not compile.
pub fn regex_match(pattern: &str, actual: &str) -> Result<bool, MatcherError> {
    let re = Regex::new(pattern).map_err(|source| MatcherError::InvalidRegex {
        pattern: pattern.to_string(),
        source: Box::new(source),
    })?;
    Ok(re.is_match(actual))
}

/// Match `actual` against a glob `pattern`.
///
/// # Errors
///
/// Returns [`MatcherError::InvalidGlob`] naming the pattern when it does
/// not parse.
pub fn glob_match(pattern: &str, actual: &str) -> Result<bool, MatcherError> {
    let glob = Pattern::new(pattern).map_err(|source| MatcherError::InvalidGlob {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(glob.matches(actual))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_matching() {
        assert!(matches_pattern("*.env", ".env"));
        assert!(matches_pattern("*.env", "test.env"));
        assert!(!matches_pattern("*.env", "test.txt"));
    }

    #[test]
    fn test_regex_matching() {
        assert!(matches_pattern(r"^npm (install|i)$", "npm install"));
        assert!(matches_pattern(r"^npm (install|i)$", "npm i"));
        assert!(!matches_pattern(r"^npm (install|i)$", "npm run"));
    }

    #[test]
    fn test_exact_matching_fallback() {
        assert!(matches_pattern("/tmp/test.txt", "/tmp/test.txt"));
        assert!(!matches_pattern("/tmp/test.txt", "/tmp/other.txt"));
    }

    #[test]
    fn test_regex_match_rejects_invalid_pattern() {
        let err = regex_match("(unclosed", "anything").unwrap_err();
        assert!(err.to_string().contains("invalid regex '(unclosed'"));
    }

    #[test]
    fn test_glob_match_rejects_invalid_pattern() {
        let err = glob_match("[unclosed", "anything").unwrap_err();
        assert!(err.to_string().contains("invalid glob pattern '[unclosed'"));
    }

    #[test]
    fn test_explicit_modes() {
        assert!(regex_match(r"\d+", "abc123").unwrap());
        assert!(!glob_match("*.rs", "main.py").unwrap());
    }
}

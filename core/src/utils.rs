//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret-ish string for `Debug` output.
///
/// - Empty input prints `EMPTY`.
/// - Input with fewer than 12 characters is fully masked.
/// - Longer input keeps its first and last three characters, so two redacted
///   consumer keys can still be told apart in logs.
///
/// Works on characters rather than bytes, consumer keys are not guaranteed to be ASCII.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars = self.0.chars().count();
        if chars == 0 {
            return f.write_str("EMPTY");
        }
        if chars < 12 {
            return f.write_str("***");
        }

        let head: String = self.0.chars().take(3).collect();
        let tail: String = self.0.chars().skip(chars - 3).collect();
        write!(f, "{head}***{tail}")
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference matchers used as test oracles and as an explicit differential
//! fallback path.
//!
//! [`RegexMatcher`] wraps `regex::bytes::Regex` configured for byte-exact,
//! full-match, dot-matches-newline semantics — the mandatory production
//! reference backend (linear-time on adversarial patterns). The
//! `pcre2-backend` feature additionally exposes [`BacktrackingMatcher`],
//! kept only for differential testing against the DFA/NFA backend above;
//! spec.md explicitly forbids shipping a backtracking engine on the
//! production path.

use regex::bytes::{Regex, RegexBuilder};

use crate::pattern::translator::translate_pattern_to_regex;

/// Errors raised while compiling a reference regex.
///
/// Kept separate from [`crate::error::Error`]: this is a test/fallback
/// surface, not the hot compile path, and its failures are regex-backend
/// failures rather than LIKE-grammar failures.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// The translated pattern was not a valid LIKE pattern.
    #[error(transparent)]
    Pattern(#[from] crate::error::Error),

    /// The regex backend rejected the translated pattern.
    #[error("invalid reference regex: {0}")]
    Regex(#[from] regex::Error),

    /// The translated pattern was not valid UTF-8.
    ///
    /// Unreachable in practice: [`translate_pattern_to_regex`] hex-escapes
    /// every byte outside printable ASCII, so its output is always ASCII.
    /// Surfaced as an error rather than assumed so this module never
    /// silently re-encodes bytes it can't represent.
    #[error("translated regex source is not valid UTF-8")]
    NotUtf8,
}

/// A `regex::bytes::Regex`-backed reference matcher, anchored for full match.
///
/// This defines the semantics that [`crate::pattern::matcher::LikeMatcher`]
/// must agree with byte-for-byte, including on invalid UTF-8.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile a LIKE `pattern` into a full-match, byte-exact regex matcher.
    pub fn new(pattern: &[u8]) -> Result<Self, ReferenceError> {
        let body = translate_pattern_to_regex(pattern)?;
        let anchored = anchor(&body);
        let source = String::from_utf8(anchored).map_err(|_| ReferenceError::NotUtf8)?;

        let regex = RegexBuilder::new(&source)
            .unicode(false)
            .dot_matches_new_line(true)
            .build()?;

        Ok(RegexMatcher { regex })
    }

    /// Evaluate the matcher against `s`, returning `true` iff `s` is a full match.
    pub fn matches(&self, s: &[u8]) -> bool {
        self.regex.is_match(s)
    }
}

fn anchor(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + 6);
    out.extend_from_slice(b"\\A(?:");
    out.extend_from_slice(body);
    out.extend_from_slice(b")\\z");
    out
}

#[cfg(feature = "pcre2-backend")]
mod backtracking {
    use super::ReferenceError;
    use crate::pattern::translator::translate_pattern_to_regex;
    use pcre2::bytes::RegexBuilder;

    /// A `pcre2`-backed reference matcher, retained only for differential
    /// testing against [`super::RegexMatcher`]. Never on the production path.
    #[derive(Debug)]
    pub struct BacktrackingMatcher {
        regex: pcre2::bytes::Regex,
    }

    impl BacktrackingMatcher {
        /// Compile a LIKE `pattern` into a full-match, byte-exact backtracking matcher.
        pub fn new(pattern: &[u8]) -> Result<Self, ReferenceError> {
            let body = translate_pattern_to_regex(pattern)?;
            let source = String::from_utf8(body).map_err(|_| ReferenceError::NotUtf8)?;
            let anchored = format!("\\A(?:{source})\\z");

            let regex = RegexBuilder::new()
                .dotall(true)
                .utf(false)
                .ucp(false)
                .build(&anchored)
                .map_err(|e| ReferenceError::Regex(regex::Error::Syntax(e.to_string())))?;

            Ok(BacktrackingMatcher { regex })
        }

        /// Evaluate the matcher against `s`, returning `true` iff `s` is a full match.
        pub fn matches(&self, s: &[u8]) -> bool {
            self.regex.is_match(s).unwrap_or(false)
        }
    }
}

#[cfg(feature = "pcre2-backend")]
pub use backtracking::BacktrackingMatcher;

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;

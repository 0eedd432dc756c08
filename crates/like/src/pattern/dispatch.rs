// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Automatic selection between fast-path matchers and the general segment matcher.
//!
//! Generalizes the teacher's `CompiledPattern` dispatcher: a handful of LIKE
//! patterns reduce to a cheaper check than the full segment walk (no
//! wildcards at all, or a single leading/trailing `%`). `SmartMatcher`
//! recognizes those shapes at compile time and falls back to
//! [`LikeMatcher`] for everything else.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pattern::matcher::LikeMatcher;

/// Runtime knobs for [`SmartMatcher`] construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOptions {
    /// Force the general segment matcher even for patterns that would
    /// otherwise take a fast path. Exists so differential tests can compare
    /// the fast path against the general path on the same pattern.
    #[serde(default)]
    pub force_general: bool,
}

/// The fast-path shape a compiled pattern was recognized as, or the general
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Strategy {
    /// No unescaped wildcard at all: plain byte-for-byte equality.
    Literal(Vec<u8>),
    /// A single trailing `%` with no other wildcard: a prefix check.
    Prefix(Vec<u8>),
    /// A single leading `%` with no other wildcard: a suffix check.
    Suffix(Vec<u8>),
    /// Anything else: defer to the general segment matcher.
    General(LikeMatcher),
}

/// A LIKE matcher that picks the cheapest applicable strategy at compile time.
#[derive(Debug, Clone)]
pub struct SmartMatcher {
    strategy: Strategy,
}

impl SmartMatcher {
    /// Compile `pattern` into a [`SmartMatcher`], selecting a fast path when
    /// `options.force_general` is `false` and the pattern qualifies.
    pub fn new(pattern: &[u8], options: DispatchOptions) -> Result<Self> {
        let general = LikeMatcher::new(pattern)?;

        if options.force_general {
            return Ok(SmartMatcher { strategy: Strategy::General(general) });
        }

        let strategy = classify(&general).unwrap_or_else(|| {
            tracing::warn!(
                pattern_len = pattern.len(),
                "LIKE pattern did not match a fast-path shape, using general matcher"
            );
            Strategy::General(general)
        });

        Ok(SmartMatcher { strategy })
    }

    /// Evaluate the matcher against `s`, returning `true` iff `s` is a full match.
    pub fn matches(&self, s: &[u8]) -> bool {
        match &self.strategy {
            Strategy::Literal(lit) => s == lit.as_slice(),
            Strategy::Prefix(prefix) => s.starts_with(prefix.as_slice()),
            Strategy::Suffix(suffix) => s.ends_with(suffix.as_slice()),
            Strategy::General(m) => m.matches(s),
        }
    }

    /// Type-erased entry point, mirroring [`LikeMatcher::matches_operand`].
    pub fn matches_operand(&self, operand: &dyn Any) -> bool {
        if let Some(s) = operand.downcast_ref::<String>() {
            return self.matches(s.as_bytes());
        }
        if let Some(s) = operand.downcast_ref::<&str>() {
            return self.matches(s.as_bytes());
        }
        if let Some(b) = operand.downcast_ref::<Vec<u8>>() {
            return self.matches(b);
        }
        if let Some(b) = operand.downcast_ref::<&[u8]>() {
            return self.matches(b);
        }
        false
    }
}

/// Recognize a pattern as one of the fast-path shapes from `general`'s
/// already-compiled segments, so classification never re-parses the pattern
/// or disagrees with [`LikeMatcher`] on escape handling.
fn classify(general: &LikeMatcher) -> Option<Strategy> {
    let segments = general.segments();

    if segments.len() != 1 {
        return None;
    }
    let seg = &segments[0];
    if !seg.underscore_positions.is_empty() {
        return None;
    }

    match (general.leading_wildcard(), general.trailing_wildcard()) {
        (false, false) => Some(Strategy::Literal(seg.literal_bytes.clone())),
        (false, true) => Some(Strategy::Prefix(seg.literal_bytes.clone())),
        (true, false) => Some(Strategy::Suffix(seg.literal_bytes.clone())),
        (true, true) => None,
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;

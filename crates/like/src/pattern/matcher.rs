// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation and evaluation of SQL LIKE patterns.
//!
//! See the crate-level docs for the grammar. The short version: `%` matches
//! zero or more bytes, `_` matches exactly one byte, `\` escapes the byte
//! that follows it, and everything else is a literal.

use std::any::Any;

use crate::error::{Error, Result};
use crate::pattern::segment::Segment;

/// A compiled SQL LIKE pattern, ready to evaluate against input byte strings.
///
/// Construction is the only fallible, allocating step. Once built, a
/// `LikeMatcher` is immutable, `Send + Sync`, and safe to share across
/// threads; [`LikeMatcher::matches`] never allocates and never panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeMatcher {
    segments: Vec<Segment>,
    leading_wildcard: bool,
    trailing_wildcard: bool,
    min_required_length: usize,
}

impl LikeMatcher {
    /// Compile `pattern` into a [`LikeMatcher`].
    ///
    /// Fails only if `pattern` ends with a lone, unescaped `\`.
    pub fn new(pattern: &[u8]) -> Result<Self> {
        let (segments, leading_wildcard, trailing_wildcard) = compile_segments(pattern)?;
        let min_required_length =
            compute_min_required_length(&segments, leading_wildcard, trailing_wildcard);

        tracing::debug!(
            segments = segments.len(),
            min_required_length,
            leading_wildcard,
            trailing_wildcard,
            "compiled LIKE pattern"
        );

        Ok(LikeMatcher {
            segments,
            leading_wildcard,
            trailing_wildcard,
            min_required_length,
        })
    }

    /// The compiled segments, in pattern order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the pattern begins with an unescaped `%`.
    pub fn leading_wildcard(&self) -> bool {
        self.leading_wildcard
    }

    /// Whether the pattern ends with an unescaped `%`.
    pub fn trailing_wildcard(&self) -> bool {
        self.trailing_wildcard
    }

    /// Byte lower bound on any input this matcher can match.
    pub fn min_required_length(&self) -> usize {
        self.min_required_length
    }

    /// Evaluate the matcher against `s`, returning `true` iff `s` is a full match.
    pub fn matches(&self, s: &[u8]) -> bool {
        let n = s.len();

        if self.segments.is_empty() {
            // Unreachable in practice: compilation always emits at least one
            // (possibly empty) segment. Kept as a defensive equivalent of
            // the empty-pattern case, which the fast path below also covers.
            return n == 0;
        }
        if n < self.min_required_length {
            return false;
        }

        // Fast path: one segment, anchored on both ends.
        if self.segments.len() == 1 && !self.leading_wildcard && !self.trailing_wildcard {
            let seg = &self.segments[0];
            return n == seg.total_length && seg.matches_at(s, 0);
        }

        let last = self.segments.len() - 1;
        let mut pos = 0usize;

        for (i, seg) in self.segments.iter().enumerate() {
            if seg.is_empty() {
                continue;
            }

            let is_first = i == 0;
            let is_last = i == last;

            if is_first && !self.leading_wildcard {
                // `is_last && !trailing_wildcard` can't also hold here: that
                // combination is the single-segment anchored-both-ends case,
                // already handled by the fast path above.
                if !seg.matches_at(s, 0) {
                    return false;
                }
                pos = seg.total_length;
                continue;
            }

            if is_last && !self.trailing_wildcard {
                // end_pos cannot underflow: min_required_length already
                // accounted for this segment's length.
                let end_pos = n - seg.total_length;
                if end_pos < pos {
                    return false;
                }
                if !seg.matches_at(s, end_pos) {
                    return false;
                }
                continue;
            }

            match seg.find(s, pos) {
                Some(found) => pos = found + 1,
                None => return false,
            }
        }

        true
    }

    /// Type-erased entry point for heterogeneous predicate evaluation.
    ///
    /// The query engine plugs matchers into generic predicate slots that
    /// carry heterogeneously typed column values. Returns `false` — never an
    /// error — for any operand that is not a byte sequence (`&str`,
    /// `String`, `&[u8]`, or `Vec<u8>`).
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

/// Compute a safe lower bound on the length of any input this pattern can
/// match.
///
/// This is *not* simply the sum of segment lengths: U3 permits adjacent
/// segments to overlap by up to one byte short of the trailing segment's
/// length, so the true minimum can be smaller than that sum. This mirrors
/// [`LikeMatcher::matches`]'s traversal, tracking only the minimal cursor
/// position reachable at each step instead of doing real byte comparisons.
fn compute_min_required_length(
    segments: &[Segment],
    leading_wildcard: bool,
    trailing_wildcard: bool,
) -> usize {
    if segments.len() == 1 && !leading_wildcard && !trailing_wildcard {
        return segments[0].total_length;
    }

    let last = segments.len().saturating_sub(1);
    let mut pos = 0usize;
    let mut need = 0usize;

    for (i, seg) in segments.iter().enumerate() {
        if seg.is_empty() {
            continue;
        }
        let is_first = i == 0;
        let is_last = i == last;

        if is_first && !leading_wildcard {
            need = need.max(seg.total_length);
            pos = seg.total_length;
            continue;
        }
        if is_last && !trailing_wildcard {
            need = need.max(pos + seg.total_length);
            continue;
        }
        need = need.max(pos + seg.total_length);
        pos += 1;
    }

    need
}

/// Partition `pattern` on unescaped `%`, yielding segments plus the
/// leading/trailing-wildcard flags. Shared by [`LikeMatcher::new`] and
/// [`crate::pattern::prefix::extract_fixed_prefix`]'s sibling walk.
fn compile_segments(pattern: &[u8]) -> Result<(Vec<Segment>, bool, bool)> {
    let mut segments = Vec::new();
    let mut literal_bytes = Vec::new();
    let mut underscore_positions = Vec::new();
    let mut current_len = 0usize;

    let mut leading_wildcard = false;
    let mut trailing_wildcard = false;
    let mut saw_any_token = false;
    let mut last_token_was_percent = false;

    let mut i = 0;
    while i < pattern.len() {
        match pattern[i] {
            b'%' => {
                segments.push(Segment {
                    literal_bytes: std::mem::take(&mut literal_bytes),
                    underscore_positions: std::mem::take(&mut underscore_positions),
                    total_length: current_len,
                });
                current_len = 0;
                if !saw_any_token {
                    leading_wildcard = true;
                }
                last_token_was_percent = true;
                saw_any_token = true;
                i += 1;
            }
            b'_' => {
                underscore_positions.push(current_len);
                current_len += 1;
                last_token_was_percent = false;
                saw_any_token = true;
                i += 1;
            }
            b'\\' => {
                if i + 1 >= pattern.len() {
                    return Err(Error::trailing_escape());
                }
                literal_bytes.push(pattern[i + 1]);
                current_len += 1;
                last_token_was_percent = false;
                saw_any_token = true;
                i += 2;
            }
            b => {
                literal_bytes.push(b);
                current_len += 1;
                last_token_was_percent = false;
                saw_any_token = true;
                i += 1;
            }
        }
    }

    segments.push(Segment {
        literal_bytes,
        underscore_positions,
        total_length: current_len,
    });
    trailing_wildcard = last_token_was_percent;

    Ok((segments, leading_wildcard, trailing_wildcard))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

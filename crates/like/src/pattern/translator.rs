// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translate a LIKE pattern into an equivalent regex pattern string.
//!
//! The output is consumed by [`crate::pattern::reference::RegexMatcher`] and
//! exists to define the reference semantics that [`crate::pattern::matcher::LikeMatcher`]
//! must agree with byte-for-byte (spec.md invariant 1).

use std::any::Any;

use crate::error::{Error, Result};

/// Any byte that is one of regex's metacharacters and must be escaped when
/// copied into the translated pattern verbatim.
fn is_regex_metachar(b: u8) -> bool {
    matches!(
        b,
        b'\\' | b'.' | b'+' | b'*' | b'?' | b'(' | b')' | b'|' | b'[' | b']' | b'{' | b'}' | b'^'
            | b'$'
    )
}

/// Bytes outside this range either aren't valid standalone UTF-8 or aren't
/// printable; emit them as a `\xHH` hex escape instead of copying them
/// verbatim, so the translated pattern is always ASCII and never needs
/// lossy re-encoding before a regex engine compiles it (spec.md invariant 1
/// must hold for non-UTF-8-valid patterns too).
fn push_escaped(out: &mut Vec<u8>, b: u8) {
    if !(0x20..=0x7e).contains(&b) {
        out.extend_from_slice(format!("\\x{b:02x}").as_bytes());
        return;
    }
    if is_regex_metachar(b) {
        out.push(b'\\');
    }
    out.push(b);
}

/// Translate a LIKE `pattern` into an equivalent regex pattern.
///
/// `%` becomes `(?s:.)*`, `_` becomes `(?s:.)`, escaped bytes are copied
/// literally (re-escaped if they are themselves regex metacharacters), and
/// everything else is copied verbatim or escaped as needed. Any byte outside
/// printable ASCII (including invalid-UTF-8 and non-ASCII-but-valid-UTF-8
/// bytes) is emitted as a `\xHH` hex escape rather than copied raw, so the
/// output is always itself valid ASCII/UTF-8 regardless of the input bytes —
/// a pattern is "an ordered sequence of bytes" with no UTF-8 requirement, and
/// the translated regex must still agree with the byte-level matcher on it.
/// The caller is responsible for compiling the result with full-match and
/// dot-matches-newline semantics; see [`crate::pattern::reference::RegexMatcher`].
pub fn translate_pattern_to_regex(pattern: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < pattern.len() {
        match pattern[i] {
            b'%' => {
                out.extend_from_slice(b"(?s:.)*");
                i += 1;
            }
            b'_' => {
                out.extend_from_slice(b"(?s:.)");
                i += 1;
            }
            b'\\' => {
                if i + 1 >= pattern.len() {
                    return Err(Error::trailing_escape());
                }
                push_escaped(&mut out, pattern[i + 1]);
                i += 2;
            }
            b => {
                push_escaped(&mut out, b);
                i += 1;
            }
        }
    }

    Ok(out)
}

/// Type-erased entry point for translation, mirroring
/// [`crate::pattern::matcher::LikeMatcher::matches_operand`]'s `&dyn Any`
/// approach. Unlike the matcher's query path, translation is a compile-time
/// operation, so a non-byte-sequence operand here is a caller bug rather
/// than a value to silently reject: it fails with `UnsupportedOperand`
/// instead of returning a sentinel.
pub fn translate_operand_to_regex(operand: &dyn Any) -> Result<Vec<u8>> {
    if let Some(s) = operand.downcast_ref::<String>() {
        return translate_pattern_to_regex(s.as_bytes());
    }
    if let Some(s) = operand.downcast_ref::<&str>() {
        return translate_pattern_to_regex(s.as_bytes());
    }
    if let Some(b) = operand.downcast_ref::<Vec<u8>>() {
        return translate_pattern_to_regex(b);
    }
    if let Some(b) = operand.downcast_ref::<&[u8]>() {
        return translate_pattern_to_regex(b);
    }
    Err(Error::UnsupportedOperand { found: "non-byte-sequence operand" })
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;

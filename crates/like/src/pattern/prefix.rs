// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-prefix extraction for query-planner index range scans.
//!
//! The planner needs the longest literal byte prefix that every matching
//! input must start with, so it can seed an index range scan before falling
//! back to [`crate::pattern::matcher::LikeMatcher`] for the full predicate.
//! This must stop at the first unescaped wildcard even when continuing would
//! (in some cases) still produce a valid prefix of matching inputs — the
//! planner relies on that exact stopping rule.

use crate::error::{Error, Result};

/// Return the longest literal byte prefix implied by `pattern`.
///
/// Walks `pattern` left to right, copying unescaped literal bytes (escapes
/// resolved) to the output, and stops at the first unescaped `%` or `_`. If
/// `pattern` contains no unescaped wildcard, the result is the fully
/// escape-resolved pattern.
pub fn extract_fixed_prefix(pattern: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut i = 0;
    let mut stopped = false;

    while i < pattern.len() {
        match pattern[i] {
            b'%' | b'_' => {
                stopped = true;
                i += 1;
            }
            b'\\' => {
                if i + 1 >= pattern.len() {
                    return Err(Error::trailing_escape());
                }
                if !stopped {
                    out.push(pattern[i + 1]);
                }
                i += 2;
            }
            b => {
                if !stopped {
                    out.push(b);
                }
                i += 1;
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;

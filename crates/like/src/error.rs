// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Crate-wide error type.
//!
//! Compilation of a LIKE pattern is the only place this crate can fail.
//! Evaluation (`LikeMatcher::matches`) never fails; see `pattern::matcher`.

/// Errors raised while compiling a LIKE pattern or translating it.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern ends in a lone, unescaped `\` with no following byte.
    #[error("invalid pattern: {reason}")]
    InvalidPattern {
        /// Human-readable description of what made the pattern invalid.
        reason: String,
    },

    /// A type-erased compile-time entry point was invoked on a non-byte-sequence operand.
    #[error("unsupported operand: expected a byte string, found {found}")]
    UnsupportedOperand {
        /// Name of the operand's actual type, for diagnostics.
        found: &'static str,
    },
}

impl Error {
    pub(crate) fn trailing_escape() -> Self {
        Error::InvalidPattern {
            reason: "trailing unescaped '\\' with no following byte".to_string(),
        }
    }
}

/// Result type using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

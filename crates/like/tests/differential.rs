// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Differential tests asserting that the fast matcher, the reference regex
//! matcher, and the smart dispatcher agree on every input, including
//! invalid UTF-8 byte strings.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use like_match::pattern::dispatch::{DispatchOptions, SmartMatcher};
use like_match::pattern::reference::RegexMatcher;
use like_match::{LikeMatcher, extract_fixed_prefix};
use proptest::prelude::*;

/// Patterns restricted to a small alphabet plus the three meta-bytes, so
/// proptest spends its budget exploring wildcard/escape interactions rather
/// than mostly-literal noise.
fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![
        Just(b'%'),
        Just(b'_'),
        Just(b'\\'),
        Just(b'a'),
        Just(b'b'),
        Just(b'c'),
    ], 0..12)
}

fn input_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..16)
}

/// Like [`pattern_strategy`], but literal positions draw from the full byte
/// range instead of `{a, b, c}`, so invalid-UTF-8 and non-ASCII literal bytes
/// in the pattern itself get exercised against the regex reference backend.
fn pattern_strategy_with_arbitrary_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![
        Just(b'%'),
        Just(b'_'),
        Just(b'\\'),
        any::<u8>(),
    ], 0..12)
}

/// `pattern` may be invalid (e.g. end in a lone `\`); skip those cases rather
/// than asserting anything about them.
fn compile(pattern: &[u8]) -> Option<(LikeMatcher, RegexMatcher, SmartMatcher)> {
    let fast = LikeMatcher::new(pattern).ok()?;
    let reference = RegexMatcher::new(pattern).ok()?;
    let smart = SmartMatcher::new(pattern, DispatchOptions::default()).ok()?;
    Some((fast, reference, smart))
}

proptest! {
    #[test]
    fn fast_matcher_agrees_with_regex_reference(pattern in pattern_strategy(), input in input_strategy()) {
        if let Some((fast, reference, smart)) = compile(&pattern) {
            let expected = reference.matches(&input);
            prop_assert_eq!(fast.matches(&input), expected);
            prop_assert_eq!(smart.matches(&input), expected);
        }
    }

    #[test]
    fn fixed_prefix_is_a_prefix_of_every_match(pattern in pattern_strategy(), input in input_strategy()) {
        if let Some((fast, _, _)) = compile(&pattern) {
            if fast.matches(&input) {
                let prefix = extract_fixed_prefix(&pattern).expect("already compiled above");
                prop_assert!(input.starts_with(prefix.as_slice()));
            }
        }
    }

    #[test]
    fn percent_runs_collapse_to_a_single_percent(pattern in pattern_strategy(), input in input_strategy()) {
        let collapsed = collapse_percent_runs(&pattern);
        if let (Some((fast, _, _)), Some((collapsed_fast, _, _))) =
            (compile(&pattern), compile(&collapsed))
        {
            prop_assert_eq!(fast.matches(&input), collapsed_fast.matches(&input));
        }
    }

    #[test]
    fn fast_matcher_agrees_with_regex_reference_on_arbitrary_byte_patterns(
        pattern in pattern_strategy_with_arbitrary_bytes(),
        input in input_strategy(),
    ) {
        if let Some((fast, reference, smart)) = compile(&pattern) {
            let expected = reference.matches(&input);
            prop_assert_eq!(fast.matches(&input), expected);
            prop_assert_eq!(smart.matches(&input), expected);
        }
    }
}

fn collapse_percent_runs(pattern: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(pattern.len());
    let mut i = 0;
    let mut prev_was_percent = false;
    while i < pattern.len() {
        match pattern[i] {
            b'%' => {
                if !prev_was_percent {
                    out.push(b'%');
                }
                prev_was_percent = true;
                i += 1;
            }
            b'\\' if i + 1 < pattern.len() => {
                out.push(pattern[i]);
                out.push(pattern[i + 1]);
                prev_was_percent = false;
                i += 2;
            }
            b => {
                out.push(b);
                prev_was_percent = false;
                i += 1;
            }
        }
    }
    out
}

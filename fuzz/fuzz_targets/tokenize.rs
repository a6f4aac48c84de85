// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tokenization and canonicalization.
//!
//! Emoji, RTL text, null bytes and combining marks must all come out as
//! well-formed tokens or nothing at all.

#![no_main]

use libfuzzer_sys::fuzz_target;
use newsglide::{canonicalize, normalize_key, tokenize};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let tokens = tokenize(&text);
    for (i, token) in tokens.iter().enumerate() {
        assert!(token.chars().count() > 1, "Single-char token {:?}", token);
        assert!(!tokens[..i].contains(token), "Duplicate token {:?}", token);
    }

    match canonicalize(&text) {
        Some(canonical) => {
            assert_eq!(canonical.key, normalize_key(&text));
            assert_eq!(canonical.tokens, tokens);
            // Canonical labels canonicalize to themselves
            let again = canonicalize(&canonical.label).map(|c| c.key);
            assert_eq!(again.as_deref(), Some(canonical.key.as_str()));
        }
        None => assert!(tokens.is_empty()),
    }
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-only invariant checks. Every function here is a no-op in release
//! builds; they exist to fail loudly and immediately in tests and debug
//! builds rather than let a violated invariant surface as a confusing bug
//! three layers away.

use crate::codec::{MAX_WIDTH, MIN_WIDTH};
use crate::types::Category;

/// A key produced by [`crate::codec::encode`] must be at least
/// `width + 2` bytes: one byte of text, one kind marker, `width` offset
/// bytes.
pub fn check_encoded_key_len(key: &[u8], width: u8) {
    debug_assert!(
        key.len() >= width as usize + 2,
        "encoded key shorter than width+2: len={} width={}",
        key.len(),
        width
    );
}

/// The offset width chosen by the planner must always land in `[1, 8]`.
pub fn check_width_in_range(width: u8) {
    debug_assert!(
        (MIN_WIDTH..=MAX_WIDTH).contains(&width),
        "width {width} out of range [{MIN_WIDTH}, {MAX_WIDTH}]"
    );
}

/// Every keyset named here must resolve to one of the four real categories.
///
/// Category exclusivity (P4) is about routing: each ring/object occurrence
/// resolves to exactly one category at the call site in
/// [`crate::build::keyset`], which pushes its key into exactly one of the
/// four `Vec`s. It is not about byte-uniqueness of the encoded keys
/// themselves — two distinct ring occurrences with the same text, kind, and
/// area offset (e.g. a park ring and an administrative-region ring sharing
/// one area) legitimately encode to identical bytes while still routing to
/// different categories, so this only sanity-checks that callers didn't
/// pass the same category twice.
pub fn check_categories_disjoint(keys_by_category: &[(Category, &[Vec<u8>])]) {
    if !cfg!(debug_assertions) {
        return;
    }
    use std::collections::HashSet;
    let mut seen_categories: HashSet<Category> = HashSet::new();
    for (category, _keys) in keys_by_category {
        debug_assert!(
            seen_categories.insert(*category),
            "category {category:?} listed more than once"
        );
    }
}

/// A trie built from a sorted, deduplicated keyset must itself report no
/// more entries than unique keys went in.
pub fn check_trie_len_matches(built_len: u64, unique_key_count: usize) {
    debug_assert_eq!(
        built_len, unique_key_count as u64,
        "trie length diverged from the deduplicated keyset size"
    );
}

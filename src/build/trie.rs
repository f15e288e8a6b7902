// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorting, deduplicating, and persisting one category's keyset as an
//! on-disk trie.
//!
//! [`fst::SetBuilder`] requires keys to arrive in strictly increasing order,
//! which is how "the underlying trie deduplicates identical keys" from the
//! keyset builder's contract is actually realized: a keyset can and does
//! contain the same key twice (two rings sharing a name, a node reachable
//! under both `name` and `name_alt`), so this module sorts and dedupes
//! before ever touching the builder.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use fst::SetBuilder;

use crate::build::keyset::Keysets;
use crate::codec;
use crate::error::{Error, Result};
use crate::types::Category;

/// Build and write the trie for a single category to `dest_dir/<filename>`.
fn build_one(keysets: &Keysets, category: Category, dest_dir: &Path, width: u8) -> Result<()> {
    let mut keys: Vec<Vec<u8>> = keysets.get(category).clone();
    keys.push(codec::sentinel_key(width));
    keys.sort_unstable();
    keys.dedup();

    let path = dest_dir.join(category.filename());
    let file = File::create(&path).map_err(Error::Io)?;
    let writer = BufWriter::new(file);

    let unique_key_count = keys.len();
    let mut builder = SetBuilder::new(writer).map_err(|e| Error::BuildFailed {
        category: category_name(category),
        reason: e.to_string(),
    })?;
    for key in &keys {
        builder.insert(key).map_err(|e| Error::BuildFailed {
            category: category_name(category),
            reason: e.to_string(),
        })?;
    }
    builder.finish().map_err(|e| Error::WriteFailed {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if let Ok(bytes) = std::fs::read(&path) {
        if let Ok(set) = fst::Set::new(bytes) {
            crate::contracts::check_trie_len_matches(set.len() as u64, unique_key_count);
        }
    }
    Ok(())
}

/// Build and write all four category tries to `dest_dir`.
///
/// Aborts on the first failure, leaving whatever files were already written
/// on disk — cleanup is the caller's responsibility, matching the
/// propagation policy for a fatal import step.
pub fn build_all(keysets: &Keysets, dest_dir: &Path, width: u8) -> Result<()> {
    for category in Category::ALL {
        build_one(keysets, category, dest_dir, width)?;
    }
    Ok(())
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Poi => "poi",
        Category::Location => "location",
        Category::Region => "region",
        Category::Other => "other",
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a built text index back into memory for querying.
//!
//! Opens each category file in the fixed order POI, Location, Region, Other;
//! a category that fails to open is not fatal on its own — it's downgraded
//! to a warning — but the index as a whole needs at least one working
//! category and a recoverable sentinel to be usable.

use std::fs;
use std::path::Path;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};

use crate::codec::{parse_sentinel_payload, SENTINEL_PREFIX};
use crate::error::{Error, Result};
use crate::types::Category;

/// A loaded text index, ready for [`crate::search::search`].
///
/// `Index` owns its trie bytes and never mutates them after load, so it is
/// `Send + Sync` and may be shared across threads for concurrent queries.
pub struct Index {
    width: u8,
    tries: Vec<(Category, Set<Vec<u8>>)>,
    warnings: Vec<String>,
}

fn load_one(path: &Path) -> std::result::Result<Set<Vec<u8>>, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    Set::new(bytes).map_err(|e| e.to_string())
}

fn recover_width(tries: &[(Category, Set<Vec<u8>>)]) -> Option<u8> {
    let prefix = (SENTINEL_PREFIX as char).to_string();
    for (_, set) in tries {
        let mut stream = set.search(Str::new(&prefix).starts_with()).into_stream();
        if let Some(key) = stream.next() {
            if let Some(width) = parse_sentinel_payload(&key[1..]) {
                return Some(width);
            }
        }
    }
    None
}

impl Index {
    /// Open an index by reading all four category files fully into memory.
    pub fn open(dir: &Path) -> Result<Self> {
        let mut tries = Vec::new();
        let mut warnings = Vec::new();
        for category in Category::ALL {
            let path = dir.join(category.filename());
            match load_one(&path) {
                Ok(set) => tries.push((category, set)),
                Err(reason) => warnings.push(format!("{}: {reason}", category.filename())),
            }
        }
        if tries.is_empty() {
            return Err(Error::NoCategoriesAvailable);
        }
        let width = recover_width(&tries).ok_or(Error::MissingSentinel)?;
        Ok(Index {
            width,
            tries,
            warnings,
        })
    }

    /// The offset width this index's keys were encoded with.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Diagnostics for categories that failed to open but didn't prevent
    /// the index as a whole from loading.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub(crate) fn trie_for(&self, category: Category) -> Option<&Set<Vec<u8>>> {
        self.tries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, set)| set)
    }
}

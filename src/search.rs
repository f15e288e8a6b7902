// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resolving a prefix query against a loaded [`Index`].
//!
//! Walks each requested category in the fixed order POI, Location, Region,
//! Other, collects every key starting with `query`, decodes each hit back
//! into `(text, ObjectRef)`, and groups by text preserving the order texts
//! were first seen. No scoring, no truncation — the CLI applies its own
//! display caps on top of this.

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Streamer};
use indexmap::IndexMap;

use crate::codec;
use crate::error::{Error, Result};
use crate::index::Index;
use crate::types::{Category, ObjectRef};

/// Which categories to search. `Category::ALL` order is always the visit
/// order; a category absent here is simply skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFlags {
    pub poi: bool,
    pub location: bool,
    pub region: bool,
    pub other: bool,
}

impl SearchFlags {
    pub const ALL: SearchFlags = SearchFlags {
        poi: true,
        location: true,
        region: true,
        other: true,
    };

    fn includes(self, category: Category) -> bool {
        match category {
            Category::Poi => self.poi,
            Category::Location => self.location,
            Category::Region => self.region,
            Category::Other => self.other,
        }
    }
}

impl Default for SearchFlags {
    fn default() -> Self {
        Self::ALL
    }
}

/// Search `index` for `query` across the categories selected by `flags`.
///
/// An empty `query` returns an empty map without touching any trie — an
/// empty prefix is not a request to enumerate the whole index.
pub fn search(
    index: &Index,
    query: &str,
    flags: SearchFlags,
) -> Result<IndexMap<String, Vec<ObjectRef>>> {
    let mut results: IndexMap<String, Vec<ObjectRef>> = IndexMap::new();
    if query.is_empty() {
        return Ok(results);
    }

    let width = index.width();

    for category in Category::ALL {
        if !flags.includes(category) {
            continue;
        }
        let Some(set) = index.trie_for(category) else {
            continue;
        };
        let mut stream = set.search(Str::new(query).starts_with()).into_stream();
        while let Some(key) = stream.next() {
            if key.first() == Some(&codec::SENTINEL_PREFIX) {
                continue;
            }
            let (text, kind, offset) =
                codec::decode(key, width).map_err(|e| downgrade_to_search_failed(category, e))?;
            results
                .entry(text.to_string())
                .or_default()
                .push(ObjectRef::new(kind, offset));
        }
    }

    Ok(results)
}

fn downgrade_to_search_failed(category: Category, err: Error) -> Error {
    match err {
        Error::IndexCorrupt(reason) => Error::IndexCorrupt(reason),
        other => Error::SearchFailed {
            category: category_name(category),
            reason: other.to_string(),
        },
    }
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Poi => "poi",
        Category::Location => "location",
        Category::Region => "region",
        Category::Other => "other",
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning object records into the four per-category sets of trie keys.
//!
//! For every name field on an object, resolve the object's type to a
//! category and append `codec::encode(name, kind, offset, width)` to that
//! category's keyset. Empty names are skipped; an object whose type is
//! ignored contributes nothing at all.

use crate::codec;
use crate::error::Result;
use crate::objects::{AreaRecord, Nameable, NodeRecord, WayRecord};
use crate::types::{Category, Kind, TypeConfig};

/// The four per-category sets of trie keys, unsorted and possibly containing
/// duplicates — [`crate::build::trie`] sorts and dedupes before handing them
/// to the trie builder.
#[derive(Debug, Default)]
pub struct Keysets {
    pub poi: Vec<Vec<u8>>,
    pub location: Vec<Vec<u8>>,
    pub region: Vec<Vec<u8>>,
    pub other: Vec<Vec<u8>>,
}

impl Keysets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &Vec<Vec<u8>> {
        match category {
            Category::Poi => &self.poi,
            Category::Location => &self.location,
            Category::Region => &self.region,
            Category::Other => &self.other,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<Vec<u8>> {
        match category {
            Category::Poi => &mut self.poi,
            Category::Location => &mut self.location,
            Category::Region => &mut self.region,
            Category::Other => &mut self.other,
        }
    }

    fn add_names(
        &mut self,
        category: Category,
        kind: Kind,
        offset: u64,
        width: u8,
        names: &[&str],
    ) -> Result<()> {
        for &name in names {
            if name.is_empty() {
                continue;
            }
            let key = codec::encode(name, kind, offset, width)?;
            self.get_mut(category).push(key);
        }
        Ok(())
    }
}

fn add_simple<T: Nameable>(
    keysets: &mut Keysets,
    record: &T,
    type_config: &dyn TypeConfig,
    width: u8,
) -> Result<()> {
    let type_id = record.type_id_for_category()[0];
    let Some(category) = type_config.category(type_id) else {
        return Ok(());
    };
    let names = record.names();
    keysets.add_names(category, T::kind(), record.offset(), width, &names)
}

/// Fold `nodes` into `keysets`.
pub fn add_nodes(
    keysets: &mut Keysets,
    nodes: &[NodeRecord],
    type_config: &dyn TypeConfig,
    width: u8,
) -> Result<()> {
    for node in nodes {
        add_simple(keysets, node, type_config, width)?;
    }
    Ok(())
}

/// Fold `ways` into `keysets`.
pub fn add_ways(
    keysets: &mut Keysets,
    ways: &[WayRecord],
    type_config: &dyn TypeConfig,
    width: u8,
) -> Result<()> {
    for way in ways {
        add_simple(keysets, way, type_config, width)?;
    }
    Ok(())
}

/// Fold `areas` into `keysets`.
///
/// Each ring is resolved to a category independently by its own `type_id`,
/// but every key produced for an area — across all its rings — carries the
/// *area's* offset, never a per-ring offset: rings have no standalone
/// on-disk position of their own.
pub fn add_areas(
    keysets: &mut Keysets,
    areas: &[AreaRecord],
    type_config: &dyn TypeConfig,
    width: u8,
) -> Result<()> {
    for area in areas {
        for ring in &area.rings {
            let Some(category) = type_config.category(ring.type_id) else {
                continue;
            };
            let names = [ring.name.as_str(), ring.name_alt.as_str()];
            keysets.add_names(category, Kind::Area, area.offset, width, &names)?;
        }
    }
    Ok(())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test-only helpers shared between unit tests and the integration test
//! suites under `tests/`. Not part of the crate's real public surface —
//! hidden from docs, but exported so integration tests (which compile as a
//! separate crate) can reach it.
#![doc(hidden)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::{Category, TypeConfig, TypeHint};

/// A [`TypeConfig`] built entirely from an explicit `type_id -> TypeHint`
/// table, with everything else falling back to a chosen default.
#[derive(Debug, Clone)]
pub struct StaticTypeConfig {
    hints: HashMap<u32, TypeHint>,
    fallback: TypeHint,
}

const IGNORED_HINT: TypeHint = TypeHint {
    ignored: true,
    poi: false,
    location: false,
    region: false,
};

impl StaticTypeConfig {
    /// Every unlisted `type_id` is ignored.
    pub fn new() -> Self {
        StaticTypeConfig {
            hints: HashMap::new(),
            fallback: IGNORED_HINT,
        }
    }

    pub fn with_fallback(fallback: TypeHint) -> Self {
        StaticTypeConfig {
            hints: HashMap::new(),
            fallback,
        }
    }

    pub fn insert(mut self, type_id: u32, category: Category) -> Self {
        let hint = match category {
            Category::Poi => TypeHint {
                ignored: false,
                poi: true,
                location: false,
                region: false,
            },
            Category::Location => TypeHint {
                ignored: false,
                poi: false,
                location: true,
                region: false,
            },
            Category::Region => TypeHint {
                ignored: false,
                poi: false,
                location: false,
                region: true,
            },
            Category::Other => TypeHint {
                ignored: false,
                poi: false,
                location: false,
                region: false,
            },
        };
        self.hints.insert(type_id, hint);
        self
    }

    pub fn ignore(mut self, type_id: u32) -> Self {
        self.hints.insert(type_id, IGNORED_HINT);
        self
    }
}

impl Default for StaticTypeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeConfig for StaticTypeConfig {
    fn hint(&self, type_id: u32) -> TypeHint {
        self.hints.get(&type_id).copied().unwrap_or(self.fallback)
    }
}

/// Write a minimal `nodes.dat` / `ways.dat` / `areas.dat` triple (all empty
/// but well-formed) into `dir`, for tests that only care about one kind.
pub fn write_empty_object_files(dir: &Path) -> Result<()> {
    fs::write(dir.join("nodes.dat"), 0u32.to_le_bytes())?;
    fs::write(dir.join("ways.dat"), 0u32.to_le_bytes())?;
    fs::write(dir.join("areas.dat"), 0u32.to_le_bytes())?;
    Ok(())
}

/// Byte-builder for synthesizing `nodes.dat` / `ways.dat` / `areas.dat`
/// fixtures without going through a real map toolkit.
pub struct DatBuilder {
    bytes: Vec<u8>,
    count: u32,
}

impl DatBuilder {
    pub fn new() -> Self {
        DatBuilder {
            bytes: Vec::new(),
            count: 0,
        }
    }

    fn push_string(&mut self, s: &str) {
        self.bytes
            .extend_from_slice(&(s.len() as u32).to_le_bytes());
        self.bytes.extend_from_slice(s.as_bytes());
    }

    pub fn node(mut self, type_id: u32, name: &str, name_alt: &str) -> Self {
        self.bytes.extend_from_slice(&type_id.to_le_bytes());
        self.push_string(name);
        self.push_string(name_alt);
        self.count += 1;
        self
    }

    pub fn way(mut self, type_id: u32, name: &str, name_alt: &str, ref_name: &str) -> Self {
        self.bytes.extend_from_slice(&type_id.to_le_bytes());
        self.push_string(name);
        self.push_string(name_alt);
        self.push_string(ref_name);
        self.count += 1;
        self
    }

    pub fn area(mut self, rings: &[(u32, &str, &str)]) -> Self {
        self.bytes
            .extend_from_slice(&(rings.len() as u32).to_le_bytes());
        for &(type_id, name, name_alt) in rings {
            self.bytes.extend_from_slice(&type_id.to_le_bytes());
            self.push_string(name);
            self.push_string(name_alt);
        }
        self.count += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = self.count.to_le_bytes().to_vec();
        out.extend_from_slice(&self.bytes);
        out
    }
}

impl Default for DatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_type_config_honors_overrides_and_fallback() {
        let config = StaticTypeConfig::with_fallback(TypeHint {
            ignored: false,
            poi: false,
            location: false,
            region: false,
        })
        .insert(1, Category::Poi)
        .ignore(2);

        assert_eq!(config.category(1), Some(Category::Poi));
        assert_eq!(config.category(2), None);
        assert_eq!(config.category(99), Some(Category::Other));
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a text index: what an object reference is, how
//! objects sort into categories, and the four files a built index lives in.
//!
//! # Invariants
//!
//! - **Category**: exclusive and total — every indexable object lands in
//!   exactly one of `{Poi, Location, Region, Other}`, by the precedence
//!   `Poi > Location > Region > Other`.
//! - **Kind marker**: `Node = 1, Way = 2, Area = 3`; these are also the exact
//!   bytes written into a trie key, so this enum must never
//!   reorder or add variants without updating [`crate::codec`].

use std::fmt;

/// The geometric class of a map object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Kind {
    Node = 1,
    Way = 2,
    Area = 3,
}

impl Kind {
    /// Decode a kind marker byte.
    #[inline]
    pub fn from_marker(byte: u8) -> Option<Kind> {
        match byte {
            1 => Some(Kind::Node),
            2 => Some(Kind::Way),
            3 => Some(Kind::Area),
            _ => None,
        }
    }

    #[inline]
    pub fn marker(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Node => write!(f, "N"),
            Kind::Way => write!(f, "W"),
            Kind::Area => write!(f, "A"),
        }
    }
}

/// The four disjoint buckets a named object's type sorts into.
///
/// Order here is also the fixed category-visit order at query time
/// at query time: POI, Location, Region, Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Poi,
    Location,
    Region,
    Other,
}

impl Category {
    /// All four categories, in the fixed visit/build order.
    pub const ALL: [Category; 4] = [
        Category::Poi,
        Category::Location,
        Category::Region,
        Category::Other,
    ];

    /// The base filename (without directory) this category's trie lives at.
    pub fn filename(self) -> &'static str {
        match self {
            Category::Poi => "textpoi.dat",
            Category::Location => "textloc.dat",
            Category::Region => "textregion.dat",
            Category::Other => "textother.dat",
        }
    }
}

/// A `(kind, offset)` pointer into one of `nodes.dat` / `ways.dat` / `areas.dat`.
///
/// Offsets are unique within a kind but not across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub kind: Kind,
    pub offset: u64,
}

impl ObjectRef {
    pub fn new(kind: Kind, offset: u64) -> Self {
        ObjectRef { kind, offset }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.offset)
    }
}

/// What a type config tells the keyset builder about one `type_id`.
///
/// This is the external type-metadata collaborator — a full map toolkit
/// defines its own type registry; this crate only needs the three yes/no
/// facts below, surfaced through [`TypeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeHint {
    pub ignored: bool,
    pub poi: bool,
    pub location: bool,
    pub region: bool,
}

/// The external type-metadata collaborator: given a `type_id`, say whether
/// the type is ignored entirely, and if not, which category it belongs to.
///
/// A full map toolkit implements this against its real type registry; the
/// text-index core only depends on this trait.
pub trait TypeConfig {
    fn hint(&self, type_id: u32) -> TypeHint;

    /// Convenience: resolve a `type_id` straight to a category, or `None` if
    /// the type is ignored for indexing purposes.
    fn category(&self, type_id: u32) -> Option<Category> {
        let hint = self.hint(type_id);
        if hint.ignored {
            return None;
        }
        Some(if hint.poi {
            Category::Poi
        } else if hint.location {
            Category::Location
        } else if hint.region {
            Category::Region
        } else {
            Category::Other
        })
    }
}

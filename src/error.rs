// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The error taxonomy for building and querying text indexes.
//!
//! Hand-rolled rather than derived: the crate's core has no external
//! error-derive dependency, so each variant gets its own `Display` arm.

use std::fmt;
use std::io;

/// Everything that can go wrong building or querying a text index.
#[derive(Debug)]
pub enum Error {
    /// A read/write/open/close failure on the underlying file system.
    Io(io::Error),
    /// The trie library refused the keyset during `build`.
    BuildFailed { category: &'static str, reason: String },
    /// The trie library refused to persist a built trie.
    WriteFailed { path: std::path::PathBuf, reason: String },
    /// `Index::open` found no openable category trie.
    NoCategoriesAvailable,
    /// No category trie contained the width sentinel.
    MissingSentinel,
    /// A decoded key violated the expected shape.
    IndexCorrupt(CorruptReason),
    /// The trie library reported an internal failure during prefix traversal.
    SearchFailed { category: &'static str, reason: String },
    /// `codec::encode` was asked to encode an empty display string.
    EmptyText,
}

/// The specific way a key failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptReason {
    /// The key was shorter than `width + 2` bytes.
    Truncated,
    /// The byte preceding the offset was not 1, 2, or 3.
    BadKind(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::BuildFailed { category, reason } => {
                write!(f, "failed to build '{category}' trie: {reason}")
            }
            Error::WriteFailed { path, reason } => {
                write!(f, "failed to write '{}': {reason}", path.display())
            }
            Error::NoCategoriesAvailable => {
                write!(f, "no category trie could be opened")
            }
            Error::MissingSentinel => {
                write!(f, "no category trie contained the offset-width sentinel")
            }
            Error::IndexCorrupt(reason) => match reason {
                CorruptReason::Truncated => write!(f, "index corrupt: key shorter than width+2"),
                CorruptReason::BadKind(b) => {
                    write!(f, "index corrupt: bad kind marker byte 0x{b:02x}")
                }
            },
            Error::SearchFailed { category, reason } => {
                write!(f, "search failed in '{category}': {reason}")
            }
            Error::EmptyText => write!(f, "cannot encode an empty display string"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

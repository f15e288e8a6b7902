// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command-line entry points: `geotext build` and `geotext search`.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::search::SearchFlags;

#[derive(Debug, Parser)]
#[command(name = "geotext", about = "Prefix-search text index over offline map objects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a text index from a directory of object files.
    Build {
        /// Directory containing nodes.dat, ways.dat, areas.dat.
        src_dir: PathBuf,
        /// Directory to write textpoi.dat / textloc.dat / textregion.dat / textother.dat into.
        dest_dir: PathBuf,
    },
    /// Query a built text index. Omit QUERY to start an interactive prompt.
    Search {
        /// Directory containing the built category trie files.
        index_dir: PathBuf,
        /// The prefix to search for. If omitted, starts an interactive prompt.
        query: Option<String>,
        /// Restrict to POI results.
        #[arg(long)]
        poi: bool,
        /// Restrict to Location results.
        #[arg(long = "loc")]
        location: bool,
        /// Restrict to Region results.
        #[arg(long)]
        region: bool,
        /// Restrict to Other results.
        #[arg(long)]
        other: bool,
    },
}

/// Resolve the four `--poi`/`--loc`/`--region`/`--other` flags into
/// [`SearchFlags`]: if none were passed, search every category.
pub fn resolve_flags(poi: bool, location: bool, region: bool, other: bool) -> SearchFlags {
    if !poi && !location && !region && !other {
        SearchFlags::ALL
    } else {
        SearchFlags {
            poi,
            location,
            region,
            other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_all_categories() {
        assert_eq!(resolve_flags(false, false, false, false), SearchFlags::ALL);
    }

    #[test]
    fn explicit_flags_restrict_to_themselves() {
        let flags = resolve_flags(true, false, false, false);
        assert!(flags.poi);
        assert!(!flags.location);
        assert!(!flags.region);
        assert!(!flags.other);
    }
}

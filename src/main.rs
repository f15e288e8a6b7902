// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `geotext` binary: build and query a prefix-search text index.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use geotext::build::run_build;
use geotext::cli::{resolve_flags, Cli, Command};
use geotext::index::Index;
use geotext::search::search;
use geotext::types::{TypeConfig, TypeHint};

/// A type config with no knowledge of any real map toolkit's type registry:
/// type 0 is ignored, everything else sorts into `Other`. Standalone runs of
/// the binary have no richer information to work with; embedders link
/// `geotext` as a library and supply their own `TypeConfig` instead.
struct DefaultTypeConfig;

impl TypeConfig for DefaultTypeConfig {
    fn hint(&self, type_id: u32) -> TypeHint {
        TypeHint {
            ignored: type_id == 0,
            poi: false,
            location: false,
            region: false,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> geotext::error::Result<()> {
    match cli.command {
        Command::Build { src_dir, dest_dir } => {
            let width = run_build(&src_dir, &dest_dir, &DefaultTypeConfig)?;
            println!("built index in {} (offset width {width})", dest_dir.display());
            Ok(())
        }
        Command::Search {
            index_dir,
            query,
            poi,
            location,
            region,
            other,
        } => {
            let index = Index::open(&index_dir)?;
            for warning in index.warnings() {
                eprintln!("warning: {warning}");
            }
            let flags = resolve_flags(poi, location, region, other);
            let use_color = atty::is(atty::Stream::Stdout);

            match query {
                Some(query) => {
                    let results = search(&index, &query, flags)?;
                    geotext::cli::display::print_results(&results, use_color);
                    Ok(())
                }
                None => run_repl(&index, flags, use_color),
            }
        }
    }
}

/// Interactive prompt loop: at least 3 characters per query, `q`/`Q` to quit.
fn run_repl(
    index: &Index,
    flags: geotext::search::SearchFlags,
    use_color: bool,
) -> geotext::error::Result<()> {
    let mut input = String::new();
    loop {
        print!("search> ");
        io::stdout().flush().ok();
        input.clear();
        if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
            break; // EOF
        }
        let query = input.trim();
        if query.eq_ignore_ascii_case("q") {
            break;
        }
        if query.len() < 3 {
            println!("enter at least 3 characters, or 'q' to quit");
            continue;
        }
        let results = search(index, query, flags)?;
        geotext::cli::display::print_results(&results, use_color);
    }
    Ok(())
}


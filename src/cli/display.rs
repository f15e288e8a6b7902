// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering search results to a terminal.
//!
//! Caps shown here (10 distinct texts, 5 object references each) are a
//! display concern only; [`crate::search::search`] itself never truncates.

use indexmap::IndexMap;

use crate::types::ObjectRef;

const MAX_TEXTS: usize = 10;
const MAX_REFS_PER_TEXT: usize = 5;

fn colorize(on: bool, code: &str, text: &str) -> String {
    if on {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Print `results` to stdout, capped the way the reference lookup demo
/// caps its console output.
pub fn print_results(results: &IndexMap<String, Vec<ObjectRef>>, use_color: bool) {
    if results.is_empty() {
        println!("{}", colorize(use_color, "2", "(no matches)"));
        return;
    }

    let shown = results.iter().take(MAX_TEXTS);
    let omitted_texts = results.len().saturating_sub(MAX_TEXTS);

    for (text, refs) in shown {
        println!("{}", colorize(use_color, "1", text));
        for object_ref in refs.iter().take(MAX_REFS_PER_TEXT) {
            println!("    {object_ref}");
        }
        let omitted_refs = refs.len().saturating_sub(MAX_REFS_PER_TEXT);
        if omitted_refs > 0 {
            println!("    ... and {omitted_refs} more");
        }
    }

    if omitted_texts > 0 {
        println!("... and {omitted_texts} more matching texts");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Kind;

    #[test]
    fn empty_results_print_without_panicking() {
        let results: IndexMap<String, Vec<ObjectRef>> = IndexMap::new();
        print_results(&results, false);
    }

    #[test]
    fn colorize_plain_leaves_text_untouched() {
        assert_eq!(colorize(false, "1", "Cafe Luna"), "Cafe Luna");
    }

    #[test]
    fn colorize_color_wraps_in_ansi() {
        let colored = colorize(true, "1", "Cafe Luna");
        assert!(colored.starts_with("\x1b[1m"));
        assert!(colored.ends_with("\x1b[0m"));
    }

    #[test]
    fn caps_are_respected() {
        let mut results: IndexMap<String, Vec<ObjectRef>> = IndexMap::new();
        for i in 0..15 {
            results.insert(format!("text{i}"), vec![ObjectRef::new(Kind::Node, i)]);
        }
        // Just exercises the capped path without panicking; exact console
        // output isn't asserted here.
        print_results(&results, false);
    }
}

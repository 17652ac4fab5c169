// src/releases/render.rs
// =============================================================================
// This module renders the filtered release list for the terminal.
//
// Two mutually exclusive modes:
// - table: header + separator + one fixed-width row per release
// - short: bare tag names, one per line, nothing else
//
// Both functions build and return a String instead of printing directly.
// That keeps them trivially unit-testable and guarantees the caller emits
// either the whole output or (on an earlier error) none of it.
//
// Rust concepts:
// - String building with push_str and format!
// - Width specifiers in format strings ({:<20} = left-align, pad to 20)
// =============================================================================

use super::Release;

// Renders the full table: header {"tag_name", "pre-release", "name"},
// separator, one row per release in filtered order
//
// Columns are 20 / 13 / rest. Tags or names longer than their column
// simply push the row wider; alignment matters more than strict grid
// edges for a list skimmed by a human.
pub fn render_table(releases: &[Release]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<20} {:<13} {}\n",
        "tag_name", "pre-release", "name"
    ));
    out.push_str(&format!("{}\n", "=".repeat(60)));

    for release in releases {
        out.push_str(&format!(
            "{:<20} {:<13} {}\n",
            release.tag_name, release.prerelease, release.name
        ));
    }

    out
}

// Renders the short mode: each tag name on its own line
//
// No header, no padding - this output is meant for pipes, e.g.
// `release-scout list <url> --short | head -1`
pub fn render_short(releases: &[Release]) -> String {
    let mut out = String::new();

    for release in releases {
        out.push_str(&release.tag_name);
        out.push('\n');
    }

    out
}

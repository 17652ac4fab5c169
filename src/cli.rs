// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "release-scout",
    version = "0.1.0",
    about = "A CLI tool to list the releases of a GitHub repository",
    long_about = "release-scout fetches the release list of a GitHub repository and prints it \
                  as a table, or as bare tag names for piping into other tools."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (currently just `list`)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the release list of a repository
    ///
    /// Example: release-scout list https://github.com/golang/go
    List {
        /// Repository URL in the form SCHEME://HOST/PATH
        /// (e.g., https://github.com/golang/go)
        ///
        /// This is a positional argument (required, no flag needed).
        /// clap itself rejects an invocation without it.
        repo_url: String,

        /// Whether to include pre-releases: "true" or "false"
        ///
        /// Kept as a string on purpose - the accepted values are the
        /// literals "true" and "false", and anything else is reported as
        /// a validation error before any network call happens.
        #[arg(long, default_value = "false")]
        prerelease: String,

        /// Print only tag names without the table formatting
        ///
        /// This is an optional flag: --short
        /// #[arg(long)] creates a flag from the field name
        #[arg(long)]
        short: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is --prerelease a String and not a bool?
//    - A bool flag in clap is either present or absent (like --short)
//    - We need three outcomes: "true", "false", and "you typed something
//      invalid" - so we take a string and validate it ourselves in main.rs
//
// 2. What does default_value = "false" do?
//    - If the user doesn't pass --prerelease at all, clap fills in "false"
//    - That means pre-releases are excluded by default
//
// 3. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------

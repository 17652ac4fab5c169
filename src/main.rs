// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the flag values and the repository URL prefix
// 3. Run the pipeline: split URL -> build endpoint -> fetch -> decode ->
//    filter -> render
// 4. Exit with proper code (0 = success, 1 = any error)
//
// Error policy: every failure - bad flag, bad URL, network error, decode
// error - prints one diagnostic to stderr and exits 1. Nothing is written
// to stdout until the whole pipeline has succeeded, so a failing run never
// leaves a partial table behind.
//
// Rust concepts used:
// - async/await: The one network request is async (tokio runtime)
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod releases;      // src/releases/ - fetching, decoding and rendering
mod repo;          // src/repo/ - repository URL handling

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{bail, Result};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Any error ends the run here with a single diagnostic
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = release list printed
//   Err = anything went wrong (printed in main, exit code 1)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, a missing
    // subcommand or a missing positional argument (clap exits non-zero)
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::List { repo_url, prerelease, short } => {
            handle_list(&repo_url, &prerelease, short).await
        }
    }
}

// Handles the 'list' subcommand
// Parameters:
//   repo_url: repository URL (e.g., "https://github.com/golang/go")
//   prerelease: raw --prerelease flag value, validated here
//   short: whether to print bare tag names instead of a table
async fn handle_list(repo_url: &str, prerelease: &str, short: bool) -> Result<i32> {
    // Flag validation comes first - an invalid value must fail before
    // any network traffic happens
    if !(prerelease == "true" || prerelease == "false") {
        bail!("the prerelease flag must be either true or false (default is false)");
    }

    // The URL splitter needs a scheme to parse properly, so insist on one
    // up front instead of letting a relative path produce a stranger error
    if !repo_url.starts_with("http") {
        bail!(
            "scheme missing - provide a git repo in the format https://github.com/abcd/xyz, got '{}'",
            repo_url
        );
    }

    // Split the URL into scheme/host/path; the query string is parsed
    // too but the list command has no use for it
    let (repo, _query) = repo::split_repo_url(repo_url)?;

    // Build the provider endpoint and fetch the first page of releases
    let endpoint = repo::releases_endpoint(&repo);
    let body = releases::fetch_releases(&endpoint).await?;

    // Decode the JSON array and drop pre-releases unless asked for
    let all = releases::decode_releases(&body)?;
    let visible = releases::filter_releases(all, prerelease);

    // Only now, with every fallible step behind us, touch stdout
    let output = if short {
        releases::render_short(&visible)
    } else {
        releases::render_table(&visible)
    };
    print!("{}", output);

    Ok(0)
}

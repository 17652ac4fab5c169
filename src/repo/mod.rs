// src/repo/mod.rs
// =============================================================================
// This module turns a repository URL into the API endpoint we fetch from.
//
// Submodules:
// - split: Decomposes a URL into scheme, host, path and query, and builds
//   the release-listing endpoint from those parts
//
// This file (mod.rs) is the module root - it exports the public API that
// other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod split;

// Re-export public items from submodules
// This lets users write `repo::split_repo_url()` instead of
// `repo::split::split_repo_url()`
pub use split::{releases_endpoint, split_repo_url, RepoRef};

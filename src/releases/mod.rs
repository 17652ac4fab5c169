// src/releases/mod.rs
// =============================================================================
// This module contains everything that happens after we know the endpoint:
// fetching, decoding, filtering and rendering the release list.
//
// Submodules:
// - fetch: Makes the single HTTP GET request and returns the body bytes
// - decode: Parses the JSON array and filters by pre-release status
// - render: Formats releases as a table or as bare tag names
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod decode;
mod fetch;
mod render;

// Re-export public items from submodules
// This lets users write `releases::decode_releases()` instead of
// `releases::decode::decode_releases()`
pub use decode::{decode_releases, filter_releases, Release};
pub use fetch::fetch_releases;
pub use render::{render_short, render_table};

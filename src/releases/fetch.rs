// src/releases/fetch.rs
// =============================================================================
// This module fetches the release list from the GitHub API.
//
// Strategy:
// - One GET request against the prebuilt endpoint, default client settings
// - No authentication header, so the anonymous rate limit applies
// - No retries and no pagination - one request per invocation, that's it
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// - The ? operator: Error propagation without boilerplate
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;

// Fetches the raw response body from the releases endpoint
//
// Parameters:
//   endpoint: fully built URL, e.g.
//             "https://api.github.com/repos/golang/go/releases?per_page=20"
//
// Returns: Result<Vec<u8>>
//   Success: the full response body bytes
//   Error: request failed, non-success HTTP status, or body read failed
//
// Every failure propagates to the caller. We never try to read a body
// after a failed request, and nothing is printed from here - the caller
// decides what reaches the terminal.
pub async fn fetch_releases(endpoint: &str) -> Result<Vec<u8>> {
    // Default client: no timeout override, follows redirects, nothing fancy
    let client = Client::new();

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| anyhow!("request to {} failed: {}", endpoint, e))?;

    // GitHub answers 404 for unknown repos and 403 when the anonymous
    // rate limit is exhausted; both would otherwise surface as confusing
    // JSON decode errors further down
    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("GET {} returned HTTP {}", endpoint, status));
    }

    // Reading the body consumes the response, so the connection is
    // released on every path out of this function
    let body = response
        .bytes()
        .await
        .map_err(|e| anyhow!("failed to read response body from {}: {}", endpoint, e))?;

    Ok(body.to_vec())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is map_err?
//    - Converts the error inside a Result into a different error
//    - Here we wrap reqwest's error with the endpoint URL so the message
//      printed at exit tells the user which request failed
//
// 2. Why Vec<u8> and not String?
//    - The body is JSON bytes; serde_json can parse from bytes directly
//    - Converting to String first would force a UTF-8 check we don't need
//
// 3. Why is there no timeout?
//    - The default client has no overall request timeout
//    - For a short-lived CLI doing one request, Ctrl-C is the timeout
// -----------------------------------------------------------------------------

// src/repo/split.rs
// =============================================================================
// This module parses the repository URL and builds the releases endpoint.
//
// Strategy:
// - Parse the URL with the `url` crate to get scheme, host, path and query
// - Build the GitHub REST endpoint by prefixing "api." to the host and
//   "/repos" to the path
//
// Why hard-code the "api." / "/repos" convention?
// - Only one provider's URL shape is in scope for this tool
// - Supporting another provider would mean keying this convention by host,
//   which is an additive change on top of this module
//
// Rust concepts:
// - Structs: RepoRef groups the parts of a parsed URL
// - Result: For error handling
// - HashMap: For the (unused but parsed) query string parameters
// =============================================================================

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use url::Url;

// The parts of a repository URL we keep after parsing
//
// Derived once from the input URL and never mutated afterwards.
// For "https://github.com/golang/go" this is:
//   scheme = "https", host = "github.com", path = "/golang/go"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub scheme: String,
    pub host: String,
    pub path: String,
}

// Splits a repository URL into its parts plus the query string map
//
// Parameters:
//   repo_url: absolute URL string, e.g. "https://github.com/golang/go"
//
// Returns: (RepoRef, query map) or an error when the string is not a
// parseable absolute URL or carries no host.
//
// Note: this function does NOT insist on an http(s) scheme - the command
// argument validator has already rejected anything not starting with "http"
// before we get here.
pub fn split_repo_url(repo_url: &str) -> Result<(RepoRef, HashMap<String, Vec<String>>)> {
    let parsed = Url::parse(repo_url)
        .map_err(|e| anyhow!("invalid repository URL '{}': {}", repo_url, e))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| anyhow!("invalid repository URL '{}': no host", repo_url))?
        .to_string();

    // Collect query parameters into a multimap. The list command ignores
    // them, but the splitter reports everything it found.
    let mut query: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in parsed.query_pairs() {
        query
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    let repo = RepoRef {
        scheme: parsed.scheme().to_string(),
        host,
        path: parsed.path().to_string(),
    };

    Ok((repo, query))
}

// Builds the release-listing endpoint for a parsed repository URL
//
// Shape: {scheme}://api.{host}/repos{path}/releases?per_page=20
//
// Example:
//   "https://github.com/golang/go" ->
//   "https://api.github.com/repos/golang/go/releases?per_page=20"
//
// Ref: https://docs.github.com/en/rest/releases/releases#list-releases
// per_page=20 asks for the first 20 releases; there is no loop to fetch
// further pages.
pub fn releases_endpoint(repo: &RepoRef) -> String {
    format!(
        "{}://api.{}/repos{}/releases?per_page=20",
        repo.scheme, repo.host, repo.path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_repo_url() {
        let (repo, query) = split_repo_url("https://github.com/golang/go").unwrap();
        assert_eq!(repo.scheme, "https");
        assert_eq!(repo.host, "github.com");
        assert_eq!(repo.path, "/golang/go");
        assert!(query.is_empty());
    }

    #[test]
    fn test_split_repo_url_with_query() {
        let (repo, query) = split_repo_url("http://github.com/user/repo?tab=readme").unwrap();
        assert_eq!(repo.scheme, "http");
        assert_eq!(query.get("tab"), Some(&vec!["readme".to_string()]));
    }

    #[test]
    fn test_split_invalid_url() {
        // No scheme at all - url::Url refuses to parse relative strings
        assert!(split_repo_url("github.com/user/repo").is_err());
        assert!(split_repo_url("http://").is_err());
    }

    #[test]
    fn test_releases_endpoint() {
        let (repo, _) = split_repo_url("https://github.com/golang/go").unwrap();
        assert_eq!(
            releases_endpoint(&repo),
            "https://api.github.com/repos/golang/go/releases?per_page=20"
        );
    }

    #[test]
    fn test_releases_endpoint_shape_holds_for_any_owner_repo() {
        // For scheme://host/owner/repo the endpoint must always be
        // scheme://api.host/repos/owner/repo/releases?per_page=20
        for (input, expected) in [
            (
                "http://example.com/a/b",
                "http://api.example.com/repos/a/b/releases?per_page=20",
            ),
            (
                "https://github.com/rust-lang/rust",
                "https://api.github.com/repos/rust-lang/rust/releases?per_page=20",
            ),
        ] {
            let (repo, _) = split_repo_url(input).unwrap();
            assert_eq!(releases_endpoint(&repo), expected);
        }
    }
}

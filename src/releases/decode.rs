// src/releases/decode.rs
// =============================================================================
// This module decodes the JSON release list and filters it.
//
// Key functionality:
// - Parses the body as a JSON array of loosely-typed objects
// - Extracts three fields per entry: tag_name, prerelease, name
// - Coerces each field to a display string (booleans become "true"/"false")
// - Drops pre-releases unless the user asked for them
//
// Why loosely typed?
// - The GitHub API sends dozens of fields per release; we care about three
// - A serde_json::Value lets us pick those three and ignore the rest
//   without modelling the whole response
//
// Rust concepts:
// - serde_json::Value: A dynamically-typed JSON tree
// - match: Exhaustive handling of the JSON types we accept
// - Iterator chains: For the filtering step
// =============================================================================

use anyhow::{anyhow, Result};
use serde_json::Value;

// One release entry reduced to the fields we display
//
// All three fields are display strings. `prerelease` arrives as a JSON
// boolean and is kept as "true"/"false" because both the filter rule and
// the table render it as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    pub prerelease: String,
    pub name: String,
}

// Decodes the response body into a list of releases
//
// Parameters:
//   body: raw response bytes, expected to be a JSON array of objects
//
// Returns: Result<Vec<Release>>
//   Success: one Release per array entry, in response order
//            (the API sends newest first)
//   Error: the body is not a JSON array of objects, or a field has a
//          type we can't display
pub fn decode_releases(body: &[u8]) -> Result<Vec<Release>> {
    let data: Vec<Value> = serde_json::from_slice(body)
        .map_err(|e| anyhow!("failed to decode release list: {}", e))?;

    let mut releases = Vec::with_capacity(data.len());

    for entry in &data {
        let record = entry
            .as_object()
            .ok_or_else(|| anyhow!("release entry is not a JSON object: {}", entry))?;

        releases.push(Release {
            tag_name: field_as_string(record.get("tag_name"), "tag_name")?,
            prerelease: field_as_string(record.get("prerelease"), "prerelease")?,
            name: field_as_string(record.get("name"), "name")?,
        });
    }

    Ok(releases)
}

// Coerces one extracted field to a display string
//
// Accepted types:
// - string: passes through unchanged
// - boolean: rendered as "true" / "false"
// - missing field (None) or JSON null: empty string
//
// Anything else (numbers, arrays, objects) is an error. The tool only
// ever displays these fields, so there is no meaningful rendering for a
// structured value and guessing one would hide a malformed response.
fn field_as_string(value: Option<&Value>, key: &str) -> Result<String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(anyhow!(
            "unsupported type for field '{}': {}",
            key,
            other
        )),
    }
}

// Applies the pre-release filter
//
// Parameters:
//   releases: decoded releases, in response order
//   prerelease: the validated --prerelease flag value ("true" or "false")
//
// Rule: a release is kept unless the flag is "false" AND the release is
// marked "true". Everything else - including releases whose prerelease
// field was missing - survives. Order is preserved.
//
// Applying the same filter twice yields the same list, so callers may
// re-filter freely.
pub fn filter_releases(releases: Vec<Release>, prerelease: &str) -> Vec<Release> {
    releases
        .into_iter()
        .filter(|r| !(prerelease == "false" && r.prerelease == "true"))
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is serde_json::Value?
//    - An enum covering every JSON type: Null, Bool, Number, String,
//      Array, Object
//    - Perfect when you only care about a few fields of a big response
//
// 2. Why compare strings in the filter instead of booleans?
//    - The flag arrives from the command line as the literal text "true"
//      or "false", and the field was already coerced to the same text
//    - Comparing the two strings keeps the rule in one representation
//
// 3. Why does a missing field become ""?
//    - A release without a name still has a tag worth showing
//    - An empty cell in the table is more useful than refusing the row
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_release() {
        let body = br#"[{"tag_name":"v1.0","prerelease":false,"name":"First"}]"#;
        let releases = decode_releases(body).unwrap();
        assert_eq!(
            releases,
            vec![Release {
                tag_name: "v1.0".to_string(),
                prerelease: "false".to_string(),
                name: "First".to_string(),
            }]
        );
    }

    #[test]
    fn test_decode_ignores_extra_keys_and_keeps_order() {
        let body = br#"[
            {"tag_name":"v2.0","prerelease":false,"name":"Second","draft":false,"id":42},
            {"tag_name":"v1.0","prerelease":false,"name":"First","assets":[]}
        ]"#;
        let releases = decode_releases(body).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].tag_name, "v2.0");
        assert_eq!(releases[1].tag_name, "v1.0");
    }

    #[test]
    fn test_decode_missing_fields_become_empty() {
        let body = br#"[{"tag_name":"v1.0","prerelease":false,"name":null}]"#;
        let releases = decode_releases(body).unwrap();
        assert_eq!(releases[0].name, "");
    }

    #[test]
    fn test_decode_unsupported_field_type_is_an_error_not_a_panic() {
        let body = br#"[{"tag_name":7,"prerelease":false,"name":"Seven"}]"#;
        let err = decode_releases(body).unwrap_err();
        assert!(err.to_string().contains("tag_name"));
    }

    #[test]
    fn test_decode_rejects_non_array_body() {
        // GitHub sends an error object (not an array) for unknown repos
        let body = br#"{"message":"Not Found"}"#;
        assert!(decode_releases(body).is_err());
        assert!(decode_releases(b"not json at all").is_err());
    }

    #[test]
    fn test_filter_excludes_prereleases_by_default() {
        let releases = vec![
            release("v1.1-rc", "true", "RC"),
            release("v1.0", "false", "First"),
        ];
        let kept = filter_releases(releases, "false");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].tag_name, "v1.0");
    }

    #[test]
    fn test_filter_keeps_prereleases_when_asked() {
        let releases = vec![release("v1.1-rc", "true", "RC")];
        let kept = filter_releases(releases, "true");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].tag_name, "v1.1-rc");
    }

    #[test]
    fn test_filter_keeps_records_with_missing_prerelease_field() {
        let releases = vec![release("v0.9", "", "")];
        assert_eq!(filter_releases(releases, "false").len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let releases = vec![
            release("v1.1-rc", "true", "RC"),
            release("v1.0", "false", "First"),
            release("v0.9-beta", "true", "Beta"),
        ];
        let once = filter_releases(releases, "false");
        let twice = filter_releases(once.clone(), "false");
        assert_eq!(once, twice);
    }

    fn release(tag: &str, pre: &str, name: &str) -> Release {
        Release {
            tag_name: tag.to_string(),
            prerelease: pre.to_string(),
            name: name.to_string(),
        }
    }
}

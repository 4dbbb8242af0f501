//! RFC 3986 reference resolution
//!
//! Shared by the reader (resolving relative IRIs in parsed documents) and
//! the writer (expanding terms under a declared base).

use crate::error::{RdfError, Result};

/// Resolve a potentially relative IRI reference against an optional base.
///
/// Implements the reference resolution algorithm from RFC 3986 Section 5.
/// Absolute references pass through untouched; relative references without
/// a base fail.
pub fn resolve(base: Option<&str>, reference: &str) -> Result<String> {
    // Empty reference = base
    if reference.is_empty() {
        return match base {
            Some(base) => Ok(base.to_string()),
            None => Err(RdfError::IriResolution(
                "empty IRI reference without base".to_string(),
            )),
        };
    }

    if is_absolute(reference) {
        return Ok(reference.to_string());
    }

    let base = match base {
        Some(b) => b,
        None => {
            return Err(RdfError::IriResolution(format!(
                "relative IRI '{reference}' without base"
            )));
        }
    };

    let (base_scheme, base_authority, base_path, _base_query) = parse_components(base);

    // RFC3986 Section 5.2.2 - Transform References
    let (scheme, authority, path, query) = if let Some(rest) = reference.strip_prefix("//") {
        // Reference has authority - use base scheme only
        let (ref_authority, ref_path, ref_query) = parse_hier_part(rest);
        (
            base_scheme.to_string(),
            Some(ref_authority),
            remove_dot_segments(&ref_path),
            ref_query,
        )
    } else if reference.starts_with('/') {
        // Absolute path reference
        let (ref_path, ref_query) = split_path_query(reference);
        (
            base_scheme.to_string(),
            base_authority.map(|s| s.to_string()),
            remove_dot_segments(ref_path),
            ref_query.map(|s| s.to_string()),
        )
    } else if let Some(query) = reference.strip_prefix('?') {
        // Query-only reference
        (
            base_scheme.to_string(),
            base_authority.map(|s| s.to_string()),
            base_path.to_string(),
            Some(query.to_string()),
        )
    } else if let Some(fragment) = reference.strip_prefix('#') {
        // Fragment-only reference keeps the whole base
        return Ok(format!("{base}#{fragment}"));
    } else {
        // Relative path reference - merge with base
        let (ref_path, ref_query) = split_path_query(reference);
        let merged = if base_authority.is_some() && base_path.is_empty() {
            format!("/{ref_path}")
        } else {
            // Remove last segment of base path and append reference
            let base_dir = match base_path.rfind('/') {
                Some(pos) => &base_path[..=pos],
                None => "",
            };
            format!("{base_dir}{ref_path}")
        };
        (
            base_scheme.to_string(),
            base_authority.map(|s| s.to_string()),
            remove_dot_segments(&merged),
            ref_query.map(|s| s.to_string()),
        )
    };

    let mut result = scheme;
    result.push(':');
    if let Some(auth) = authority {
        result.push_str("//");
        result.push_str(&auth);
    }
    result.push_str(&path);
    if let Some(q) = query {
        result.push('?');
        result.push_str(&q);
    }

    Ok(result)
}

/// True if the reference carries a scheme
pub fn is_absolute(reference: &str) -> bool {
    if let Some(colon_pos) = reference.find(':') {
        let potential_scheme = &reference[..colon_pos];
        if let Some(first) = potential_scheme.chars().next() {
            return first.is_ascii_alphabetic()
                && potential_scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.');
        }
    }
    false
}

/// Parse an IRI into (scheme, authority, path, query) components.
fn parse_components(iri: &str) -> (&str, Option<&str>, &str, Option<&str>) {
    let (scheme, rest) = match iri.find(':') {
        Some(pos) => (&iri[..pos], &iri[pos + 1..]),
        None => return ("", None, iri, None),
    };

    let (authority, path_query) = if let Some(after_slashes) = rest.strip_prefix("//") {
        // Authority ends at /, ?, or #
        let auth_end = after_slashes
            .find(['/', '?', '#'])
            .unwrap_or(after_slashes.len());
        (
            Some(&after_slashes[..auth_end]),
            &after_slashes[auth_end..],
        )
    } else {
        (None, rest)
    };

    let (path, query) = split_path_query(path_query);

    (scheme, authority, path, query)
}

/// Parse hierarchical part after "//" - returns (authority, path, query).
fn parse_hier_part(s: &str) -> (String, String, Option<String>) {
    let auth_end = s.find(['/', '?', '#']).unwrap_or(s.len());
    let authority = s[..auth_end].to_string();
    let rest = &s[auth_end..];

    let (path, query) = split_path_query(rest);
    (authority, path.to_string(), query.map(|q| q.to_string()))
}

/// Split a path from its query component.
fn split_path_query(s: &str) -> (&str, Option<&str>) {
    let s = match s.find('#') {
        Some(pos) => &s[..pos],
        None => s,
    };

    match s.find('?') {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    }
}

/// Remove dot segments from a path (RFC3986 Section 5.2.4).
fn remove_dot_segments(path: &str) -> String {
    let mut output: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "." => {}
            ".." => {
                output.pop();
            }
            s => {
                output.push(s);
            }
        }
    }

    let result = output.join("/");
    if path.starts_with('/') && !result.starts_with('/') {
        format!("/{result}")
    } else {
        result
    }
}

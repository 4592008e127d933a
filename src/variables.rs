//! Variable substitution and URI resolution (§4.5 of the specification this crate implements).
//!
//! HLS variables are defined via `EXT-X-DEFINE` and referenced as `{$NAME}` inside URIs and
//! attribute values. This module also resolves a (possibly variable-substituted) URI against the
//! playlist's base URL, using [RFC 3986] resolution via the `url` crate — the same crate
//! `emarsden-dash-mpd-rs` in this workspace's lineage uses for its manifest-relative URIs.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986

use crate::error::Warning;
use std::collections::HashMap;
use url::Url;

/// The three variable scopes consulted, in order, when resolving a `{$NAME}` reference (§4.3.3,
/// `EXT-X-DEFINE`, and §4.5).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableScope {
    /// Variables defined inline via `EXT-X-DEFINE:NAME=...,VALUE=...`.
    pub name: HashMap<String, String>,
    /// Variables imported from the caller-supplied base scope via
    /// `EXT-X-DEFINE:IMPORT=...` (only meaningful for a playlist that is itself the result of an
    /// `EXT-X-DEFINE:IMPORT`, e.g. a media playlist loaded from a multivariant playlist that
    /// declared the import).
    pub import: HashMap<String, String>,
    /// Variables extracted from the playlist's base URL query string via
    /// `EXT-X-DEFINE:QUERYPARAM=...`.
    pub query_param: HashMap<String, String>,
}

impl VariableScope {
    pub(crate) fn lookup(&self, name: &str) -> Option<&str> {
        self.name
            .get(name)
            .or_else(|| self.import.get(name))
            .or_else(|| self.query_param.get(name))
            .map(String::as_str)
    }
}

/// Replaces every `{$NAME}` occurrence in `input` using `scope`. A reference with no definition is
/// left as the literal `{$NAME}` text (never partially replaced) and reported once per occurrence
/// via `warn`.
pub fn substitute(input: &str, scope: &VariableScope, warn: &mut impl FnMut(Warning)) -> String {
    let mut output = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'{' && bytes.get(i + 1) == Some(&b'$') {
            if let Some(close) = input[i..].find('}') {
                let name = &input[i + 2..i + close];
                if is_valid_variable_name(name) {
                    match scope.lookup(name) {
                        Some(value) => {
                            output.push_str(value);
                            i += close + 1;
                            continue;
                        }
                        None => {
                            warn(Warning::MissingVariable {
                                name: name.to_string(),
                            });
                            output.push_str(&input[i..i + close + 1]);
                            i += close + 1;
                            continue;
                        }
                    }
                }
            }
        }
        let ch_len = input[i..].chars().next().map(char::len_utf8).unwrap_or(1);
        output.push_str(&input[i..i + ch_len]);
        i += ch_len;
    }
    output
}

fn is_valid_variable_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Resolves `uri` against `base_url` per RFC 3986. Returns `None` (signaling the caller to fall
/// back to the raw, unresolved value) if `base_url` is empty or either URL fails to parse.
pub fn resolve_uri(uri: &str, base_url: &str) -> Option<String> {
    if base_url.is_empty() {
        return None;
    }
    let base = Url::parse(base_url).ok()?;
    base.join(uri).ok().map(|u| u.into())
}

/// Extracts `{name: value}` pairs from `base_url`'s query string, for `EXT-X-DEFINE:QUERYPARAM`.
pub fn query_params(base_url: &str) -> HashMap<String, String> {
    let Ok(url) = Url::parse(base_url) else {
        return HashMap::new();
    };
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn substitutes_known_variable() {
        let mut scope = VariableScope::default();
        scope.name.insert("host".to_string(), "https://cdn.example/".to_string());
        let mut warnings = Vec::new();
        let result = substitute("{$host}a.ts", &scope, &mut |w| warnings.push(w));
        assert_eq!("https://cdn.example/a.ts", result);
        assert!(warnings.is_empty());
    }

    #[test]
    fn leaves_unknown_variable_literal_and_warns_once() {
        let scope = VariableScope::default();
        let mut warnings = Vec::new();
        let result = substitute("{$missing}/a.ts", &scope, &mut |w| warnings.push(w));
        assert_eq!("{$missing}/a.ts", result);
        assert_eq!(1, warnings.len());
    }

    #[test]
    fn import_scope_is_consulted_after_name_scope() {
        let mut scope = VariableScope::default();
        scope.import.insert("host".to_string(), "https://imported/".to_string());
        let mut warnings = Vec::new();
        let result = substitute("{$host}", &scope, &mut |w| warnings.push(w));
        assert_eq!("https://imported/", result);
    }

    #[test]
    fn resolves_relative_uri_against_base() {
        let resolved = resolve_uri("a.ts", "https://cdn.example/video/index.m3u8").unwrap();
        assert_eq!("https://cdn.example/video/a.ts", resolved);
    }

    #[test]
    fn empty_base_url_fails_to_resolve() {
        assert_eq!(None, resolve_uri("a.ts", ""));
    }

    #[test]
    fn extracts_query_params() {
        let params = query_params("https://cdn.example/index.m3u8?token=abc&region=eu");
        assert_eq!(Some(&"abc".to_string()), params.get("token"));
        assert_eq!(Some(&"eu".to_string()), params.get("region"));
    }
}

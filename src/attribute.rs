//! The attribute-list lexer (§4.2 of the specification this crate implements).
//!
//! Splits the body of an attribute-tag (everything after the `:`, before the line break) into a
//! mapping of attribute name to an already-unquoted string value. Quoted strings may contain
//! commas and equals signs; those are ordinary characters while a `"` toggles the quoted state.
//!
//! This module intentionally does not try to guess whether a tag body *is* an attribute list
//! versus a bare value — the [`crate::registry`] already knows which shape each known tag expects,
//! so that ambiguity (mentioned as an implementation option in the specification) is resolved by
//! dispatch rather than by a speculative parse.

use crate::error::AttributeListParsingError;
use std::collections::HashMap;

/// Parses an attribute-list tag body into a map of attribute name to unquoted string value.
///
/// Hex values (`0x...`) and decimal numbers are left as strings at this layer; numeric coercion
/// happens in the per-tag processors that know what type each attribute should hold.
pub fn parse_attribute_list(raw: &str) -> Result<HashMap<String, String>, AttributeListParsingError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mode {
        Key,
        Value,
    }

    let mut map = HashMap::new();
    let mut quoted = false;
    let mut mode = Mode::Key;
    let mut key_start = 0usize;
    let mut value_start = 0usize;
    let mut current_key: Option<String> = None;

    for (i, b) in raw.bytes().enumerate() {
        match b {
            b'"' => quoted = !quoted,
            b'=' if !quoted && mode == Mode::Key => {
                let name = raw[key_start..i].trim();
                if name.is_empty() {
                    return Err(AttributeListParsingError::EmptyAttributeName);
                }
                current_key = Some(name.to_string());
                mode = Mode::Value;
                value_start = i + 1;
            }
            b',' if !quoted && mode == Mode::Value => {
                let key = current_key
                    .take()
                    .ok_or(AttributeListParsingError::UnexpectedEndOfLineReadingName)?;
                map.insert(key, unquote(&raw[value_start..i]));
                mode = Mode::Key;
                key_start = i + 1;
            }
            _ => {}
        }
    }
    if quoted {
        return Err(AttributeListParsingError::UnterminatedQuotedString);
    }
    match mode {
        Mode::Key => {
            let trailing = raw[key_start..].trim();
            if !trailing.is_empty() {
                return Err(AttributeListParsingError::UnexpectedEndOfLineReadingName);
            }
        }
        Mode::Value => {
            let key = current_key.take().expect("mode is only Value once a key is set");
            map.insert(key, unquote(&raw[value_start..]));
        }
    }
    Ok(map)
}

/// Strips a single surrounding pair of double quotes, if present; otherwise returns the trimmed
/// input unchanged.
fn unquote(value: &str) -> String {
    let value = value.trim();
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_simple_list() {
        let map = parse_attribute_list(r#"BANDWIDTH=1200000,RESOLUTION=640x360"#).unwrap();
        assert_eq!(Some(&"1200000".to_string()), map.get("BANDWIDTH"));
        assert_eq!(Some(&"640x360".to_string()), map.get("RESOLUTION"));
    }

    #[test]
    fn quoted_comma_does_not_split_attribute() {
        let map =
            parse_attribute_list(r#"BANDWIDTH=1200000,CODECS="avc1.4d401e,mp4a.40.2""#).unwrap();
        assert_eq!(2, map.len());
        assert_eq!(
            Some(&"avc1.4d401e,mp4a.40.2".to_string()),
            map.get("CODECS")
        );
    }

    #[test]
    fn quoted_equals_does_not_start_new_attribute() {
        let map = parse_attribute_list(r#"URI="http://example.com/key?x=1",METHOD=AES-128"#).unwrap();
        assert_eq!(Some(&"http://example.com/key?x=1".to_string()), map.get("URI"));
        assert_eq!(Some(&"AES-128".to_string()), map.get("METHOD"));
    }

    #[test]
    fn trailing_comma_is_tolerated() {
        let map = parse_attribute_list("A=1,B=2,").unwrap();
        assert_eq!(2, map.len());
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let result = parse_attribute_list(r#"A="unterminated"#);
        assert_eq!(Err(AttributeListParsingError::UnterminatedQuotedString), result);
    }

    #[test]
    fn empty_attribute_name_is_an_error() {
        let result = parse_attribute_list("=1");
        assert_eq!(Err(AttributeListParsingError::EmptyAttributeName), result);
    }
}

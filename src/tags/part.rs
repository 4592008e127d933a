//! `EXT-X-PART`.

use super::parse_bool_attribute;
use crate::error::Warning;
use crate::model::{ByteRange, Playlist, PartialSegment};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["URI", "DURATION"],
    process,
};

/// Parses a `length[@offset]` `BYTERANGE` value, inheriting a missing offset from the end of the
/// previous part's byte range plus one (§4.3.3).
fn parse_byte_range(
    raw: &str,
    previous: Option<ByteRange>,
    warn: &mut dyn FnMut(Warning),
) -> Option<ByteRange> {
    let (length_str, offset_str) = match raw.split_once('@') {
        Some((l, o)) => (l, Some(o)),
        None => (raw, None),
    };
    let length: u64 = match length_str.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn(Warning::UnparsableValue {
                tag: "EXT-X-PART".to_string(),
                detail: format!("BYTERANGE length was not a valid integer: {raw}"),
            });
            return None;
        }
    };
    let start = match offset_str {
        Some(offset) => match offset.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn(Warning::UnparsableValue {
                    tag: "EXT-X-PART".to_string(),
                    detail: format!("BYTERANGE offset was not a valid integer: {raw}"),
                });
                return None;
            }
        },
        None => match previous {
            Some(previous) => previous.end + 1,
            None => {
                warn(Warning::FallbackUsed {
                    detail: "EXT-X-PART BYTERANGE had no offset and no previous part to continue from, using 0".to_string(),
                });
                0
            }
        },
    };
    if length == 0 {
        return Some(ByteRange { start, end: start });
    }
    Some(ByteRange {
        start,
        end: start + length - 1,
    })
}

fn process(
    attributes: &HashMap<String, String>,
    _playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let Some(duration) = super::parse_f64("EXT-X-PART", "DURATION", &attributes["DURATION"], warn) else {
        return;
    };
    let uri = &attributes["URI"];
    let resolved_uri = super::resolve(uri, &shared.base_url, warn);
    let previous_byte_range = shared.current_parts.last().and_then(|p| p.byte_range);
    let byte_range = attributes
        .get("BYTERANGE")
        .and_then(|raw| parse_byte_range(raw, previous_byte_range, warn));
    shared.current_parts.push(PartialSegment {
        uri: uri.clone(),
        resolved_uri,
        duration,
        independent: parse_bool_attribute(attributes, "INDEPENDENT"),
        byte_range,
        gap: parse_bool_attribute(attributes, "GAP"),
    });
}

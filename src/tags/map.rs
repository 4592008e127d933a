//! `EXT-X-MAP`.

use crate::error::Warning;
use crate::model::{ByteRange, MediaInitializationSection, Playlist};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["URI"],
    process,
};

/// Parses the `BYTERANGE` attribute, a quoted `length@offset` string.
fn parse_byte_range(raw: &str, warn: &mut dyn FnMut(Warning)) -> Option<ByteRange> {
    let (length_str, offset_str) = raw.split_once('@')?;
    let length: u64 = match length_str.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn(Warning::UnparsableValue {
                tag: "EXT-X-MAP".to_string(),
                detail: format!("BYTERANGE length was not a valid integer: {raw}"),
            });
            return None;
        }
    };
    let offset: u64 = match offset_str.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn(Warning::UnparsableValue {
                tag: "EXT-X-MAP".to_string(),
                detail: format!("BYTERANGE offset was not a valid integer: {raw}"),
            });
            return None;
        }
    };
    if length == 0 {
        return Some(ByteRange { start: offset, end: offset });
    }
    Some(ByteRange {
        start: offset,
        end: offset + length - 1,
    })
}

fn process(
    attributes: &HashMap<String, String>,
    _playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let uri = &attributes["URI"];
    let resolved_uri = super::resolve(uri, &shared.base_url, warn);
    let byte_range = attributes
        .get("BYTERANGE")
        .and_then(|raw| parse_byte_range(raw, warn));
    shared.current_map = Some(MediaInitializationSection {
        uri: uri.clone(),
        resolved_uri,
        byte_range,
    });
}

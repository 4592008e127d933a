//! `EXT-X-PRELOAD-HINT`.

use crate::error::Warning;
use crate::model::{ByteRangeEnd, Playlist, PreloadHintResource};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["TYPE", "URI"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let uri = &attributes["URI"];
    let resolved_uri = super::resolve(uri, &shared.base_url, warn);
    let byte_range_start = match attributes.get("BYTE-RANGE-START") {
        Some(raw) => match super::parse_u64("EXT-X-PRELOAD-HINT", "BYTE-RANGE-START", raw, warn) {
            Some(v) => v,
            None => return,
        },
        None => 0,
    };
    let byte_range_end = match attributes.get("BYTE-RANGE-LENGTH") {
        Some(raw) => match super::parse_u64("EXT-X-PRELOAD-HINT", "BYTE-RANGE-LENGTH", raw, warn) {
            Some(0) => ByteRangeEnd::Closed(byte_range_start),
            Some(length) => ByteRangeEnd::Closed(byte_range_start + length - 1),
            None => return,
        },
        // A start with no length is an explicit open-ended range (§9 design notes).
        None => ByteRangeEnd::Open,
    };
    let resource = PreloadHintResource {
        uri: uri.clone(),
        resolved_uri,
        byte_range_start,
        byte_range_end,
    };
    match attributes["TYPE"].as_str() {
        "PART" => playlist.preload_hints.part = Some(resource),
        "MAP" => playlist.preload_hints.map = Some(resource),
        other => warn(Warning::UnsupportedEnumValue {
            tag: "EXT-X-PRELOAD-HINT".to_string(),
            attribute: "TYPE".to_string(),
            value: other.to_string(),
        }),
    }
}

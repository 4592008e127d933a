//! `EXT-X-START`.

use super::parse_bool_attribute;
use crate::error::Warning;
use crate::model::{Playlist, Start};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["TIME-OFFSET"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let Some(time_offset) = fast_float2::parse::<f64, _>(attributes["TIME-OFFSET"].trim()).ok() else {
        warn(Warning::UnparsableValue {
            tag: "EXT-X-START".to_string(),
            detail: format!("TIME-OFFSET was not a valid number: {}", attributes["TIME-OFFSET"]),
        });
        return;
    };
    playlist.start = Some(Start {
        time_offset,
        precise: parse_bool_attribute(attributes, "PRECISE"),
    });
}

//! `EXT-X-PART-INF`.

use crate::error::Warning;
use crate::model::{Playlist, PartInf};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["PART-TARGET"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    match fast_float2::parse::<f64, _>(attributes["PART-TARGET"].trim()) {
        Ok(part_target) => playlist.part_inf = Some(PartInf { part_target }),
        Err(_) => warn(Warning::UnparsableValue {
            tag: "EXT-X-PART-INF".to_string(),
            detail: format!("PART-TARGET was not a valid number: {}", attributes["PART-TARGET"]),
        }),
    }
}

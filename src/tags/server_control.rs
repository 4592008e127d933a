//! `EXT-X-SERVER-CONTROL`.

use super::parse_bool_attribute;
use crate::error::Warning;
use crate::model::{Playlist, ServerControl};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag. None of its attributes are required; every field is
/// optional and defaults are applied by [`ServerControl::default`].
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &[],
    process,
};

fn parse_optional_f64(
    attributes: &HashMap<String, String>,
    key: &str,
    warn: &mut dyn FnMut(Warning),
) -> Option<f64> {
    let raw = attributes.get(key)?;
    match fast_float2::parse(raw.trim()) {
        Ok(v) => Some(v),
        Err(_) => {
            warn(Warning::UnparsableValue {
                tag: "EXT-X-SERVER-CONTROL".to_string(),
                detail: format!("{key} was not a valid number: {raw}"),
            });
            None
        }
    }
}

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    playlist.server_control = Some(ServerControl {
        can_skip_until: parse_optional_f64(attributes, "CAN-SKIP-UNTIL", warn),
        can_skip_dateranges: parse_bool_attribute(attributes, "CAN-SKIP-DATERANGES"),
        can_block_reload: parse_bool_attribute(attributes, "CAN-BLOCK-RELOAD"),
        hold_back: parse_optional_f64(attributes, "HOLD-BACK", warn),
        part_hold_back: parse_optional_f64(attributes, "PART-HOLD-BACK", warn),
    });
}

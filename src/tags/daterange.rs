//! `EXT-X-DATERANGE`.

use crate::error::Warning;
use crate::model::{DateRange, Playlist};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["ID"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let start_date = attributes.get("START-DATE").and_then(|v| match crate::date::parse(v) {
        Ok(dt) => Some(dt),
        Err(err) => {
            warn(Warning::UnparsableValue {
                tag: "EXT-X-DATERANGE".to_string(),
                detail: format!("START-DATE: {err}"),
            });
            None
        }
    });
    let end_date = attributes.get("END-DATE").and_then(|v| match crate::date::parse(v) {
        Ok(dt) => Some(dt),
        Err(err) => {
            warn(Warning::UnparsableValue {
                tag: "EXT-X-DATERANGE".to_string(),
                detail: format!("END-DATE: {err}"),
            });
            None
        }
    });

    let client_attributes = attributes
        .iter()
        .filter(|(key, _)| key.starts_with("X-"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let date_range = DateRange {
        id: attributes["ID"].clone(),
        class: attributes.get("CLASS").cloned(),
        start_date,
        cue: attributes
            .get("CUE")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default(),
        end_date,
        duration: attributes
            .get("DURATION")
            .and_then(|v| super::parse_f64("EXT-X-DATERANGE", "DURATION", v, warn)),
        planned_duration: attributes
            .get("PLANNED-DURATION")
            .and_then(|v| super::parse_f64("EXT-X-DATERANGE", "PLANNED-DURATION", v, warn)),
        client_attributes,
        scte35_cmd: attributes
            .get("SCTE35-CMD")
            .and_then(|v| super::parse_hex_sequence("EXT-X-DATERANGE", "SCTE35-CMD", v, warn)),
        scte35_out: attributes
            .get("SCTE35-OUT")
            .and_then(|v| super::parse_hex_sequence("EXT-X-DATERANGE", "SCTE35-OUT", v, warn)),
        scte35_in: attributes
            .get("SCTE35-IN")
            .and_then(|v| super::parse_hex_sequence("EXT-X-DATERANGE", "SCTE35-IN", v, warn)),
        end_on_next: super::parse_bool_attribute(attributes, "END-ON-NEXT"),
    };

    playlist.date_ranges.push(date_range);
}

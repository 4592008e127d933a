//! `EXT-X-STREAM-INF`.
//!
//! Populates [`SharedState::current_variant`], committed by the assembler once the following URI
//! line is seen (§4.4).

use crate::error::Warning;
use crate::model::{ClosedCaptionsGroup, Playlist};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["BANDWIDTH"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    _playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let Some(bandwidth) = super::parse_u64("EXT-X-STREAM-INF", "BANDWIDTH", &attributes["BANDWIDTH"], warn) else {
        return;
    };

    let closed_captions = attributes.get("CLOSED-CAPTIONS").map(|v| {
        if v == "NONE" {
            ClosedCaptionsGroup::None
        } else {
            ClosedCaptionsGroup::GroupId(v.clone())
        }
    });

    shared.is_multivariant_playlist = true;
    shared.current_variant.bandwidth = bandwidth;
    shared.current_variant.average_bandwidth = attributes
        .get("AVERAGE-BANDWIDTH")
        .and_then(|v| super::parse_u64("EXT-X-STREAM-INF", "AVERAGE-BANDWIDTH", v, warn));
    shared.current_variant.codecs = attributes
        .get("CODECS")
        .map(|v| super::split_comma_list(v))
        .unwrap_or_default();
    shared.current_variant.resolution = attributes
        .get("RESOLUTION")
        .and_then(|v| super::parse_resolution("EXT-X-STREAM-INF", v, warn));
    shared.current_variant.frame_rate = attributes
        .get("FRAME-RATE")
        .and_then(|v| super::parse_f64("EXT-X-STREAM-INF", "FRAME-RATE", v, warn));
    shared.current_variant.hdcp_level = attributes.get("HDCP-LEVEL").cloned();
    shared.current_variant.audio = attributes.get("AUDIO").cloned();
    shared.current_variant.video = attributes.get("VIDEO").cloned();
    shared.current_variant.subtitles = attributes.get("SUBTITLES").cloned();
    shared.current_variant.closed_captions = closed_captions;
    shared.current_variant.video_range = attributes.get("VIDEO-RANGE").cloned();
    shared.current_variant.score = attributes
        .get("SCORE")
        .and_then(|v| super::parse_f64("EXT-X-STREAM-INF", "SCORE", v, warn));
    shared.current_variant.pathway_id = attributes.get("PATHWAY-ID").cloned();
    shared.current_variant.stable_variant_id = attributes.get("STABLE-VARIANT-ID").cloned();
}

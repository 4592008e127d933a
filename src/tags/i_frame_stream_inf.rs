//! `EXT-X-I-FRAME-STREAM-INF`.
//!
//! Unlike `EXT-X-STREAM-INF`, the URI is carried in the attribute list itself rather than a
//! following line, so this processor pushes a complete [`crate::model::IFramePlaylist`] directly.

use crate::error::Warning;
use crate::model::{IFramePlaylist, Playlist};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["BANDWIDTH", "URI"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let Some(bandwidth) =
        super::parse_u64("EXT-X-I-FRAME-STREAM-INF", "BANDWIDTH", &attributes["BANDWIDTH"], warn)
    else {
        return;
    };

    let uri = attributes["URI"].clone();
    let resolved_uri = super::resolve(&uri, &shared.base_url, warn);

    shared.is_multivariant_playlist = true;
    playlist.i_frame_playlists.push(IFramePlaylist {
        bandwidth,
        average_bandwidth: attributes
            .get("AVERAGE-BANDWIDTH")
            .and_then(|v| super::parse_u64("EXT-X-I-FRAME-STREAM-INF", "AVERAGE-BANDWIDTH", v, warn)),
        codecs: attributes
            .get("CODECS")
            .map(|v| super::split_comma_list(v))
            .unwrap_or_default(),
        resolution: attributes
            .get("RESOLUTION")
            .and_then(|v| super::parse_resolution("EXT-X-I-FRAME-STREAM-INF", v, warn)),
        hdcp_level: attributes.get("HDCP-LEVEL").cloned(),
        video: attributes.get("VIDEO").cloned(),
        score: attributes
            .get("SCORE")
            .and_then(|v| super::parse_f64("EXT-X-I-FRAME-STREAM-INF", "SCORE", v, warn)),
        video_range: attributes.get("VIDEO-RANGE").cloned(),
        uri,
        resolved_uri,
    });
}

//! `EXT-X-MEDIA`.

use crate::error::Warning;
use crate::model::{MediaType, Playlist, Rendition};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["TYPE", "GROUP-ID", "NAME"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let media_type = match attributes["TYPE"].as_str() {
        "AUDIO" => MediaType::Audio,
        "VIDEO" => MediaType::Video,
        "SUBTITLES" => MediaType::Subtitles,
        "CLOSED-CAPTIONS" => MediaType::ClosedCaptions,
        other => {
            warn(Warning::UnparsableValue {
                tag: "EXT-X-MEDIA".to_string(),
                detail: format!("unrecognized TYPE: {other}"),
            });
            return;
        }
    };

    if media_type != MediaType::ClosedCaptions && attributes.contains_key("INSTREAM-ID") {
        warn(Warning::UnparsableValue {
            tag: "EXT-X-MEDIA".to_string(),
            detail: "INSTREAM-ID is only valid when TYPE=CLOSED-CAPTIONS".to_string(),
        });
    }
    if media_type == MediaType::ClosedCaptions && attributes.contains_key("URI") {
        warn(Warning::UnparsableValue {
            tag: "EXT-X-MEDIA".to_string(),
            detail: "URI must not be present when TYPE=CLOSED-CAPTIONS".to_string(),
        });
        return;
    }

    let group_id = attributes["GROUP-ID"].clone();
    let uri = attributes.get("URI").cloned();
    let resolved_uri = uri
        .as_ref()
        .map(|uri| super::resolve(uri, &shared.base_url, warn));

    let rendition = Rendition {
        uri,
        resolved_uri,
        language: attributes.get("LANGUAGE").cloned(),
        assoc_language: attributes.get("ASSOC-LANGUAGE").cloned(),
        name: attributes["NAME"].clone(),
        stable_rendition_id: attributes.get("STABLE-RENDITION-ID").cloned(),
        default: super::parse_bool_attribute(attributes, "DEFAULT"),
        autoselect: super::parse_bool_attribute(attributes, "AUTOSELECT"),
        forced: super::parse_bool_attribute(attributes, "FORCED"),
        instream_id: attributes.get("INSTREAM-ID").cloned(),
        characteristics: attributes
            .get("CHARACTERISTICS")
            .map(|v| super::split_comma_list(v))
            .unwrap_or_default(),
        channels: attributes.get("CHANNELS").cloned(),
    };

    shared.is_multivariant_playlist = true;
    let groups = match media_type {
        MediaType::Audio => &mut playlist.rendition_groups.audio,
        MediaType::Video => &mut playlist.rendition_groups.video,
        MediaType::Subtitles => &mut playlist.rendition_groups.subtitles,
        MediaType::ClosedCaptions => &mut playlist.rendition_groups.closed_captions,
    };
    groups.entry(group_id).or_default().push(rendition);
}

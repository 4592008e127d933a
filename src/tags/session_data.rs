//! `EXT-X-SESSION-DATA`.

use crate::error::Warning;
use crate::model::{Playlist, SessionData};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["DATA-ID"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    _warn: &mut dyn FnMut(Warning),
) {
    let data_id = attributes["DATA-ID"].clone();
    playlist.session_data.insert(
        data_id,
        SessionData {
            value: attributes.get("VALUE").cloned(),
            uri: attributes.get("URI").cloned(),
            format: Some(attributes.get("FORMAT").cloned().unwrap_or_else(|| "JSON".to_string())),
            language: attributes.get("LANGUAGE").cloned(),
        },
    );
}

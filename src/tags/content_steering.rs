//! `EXT-X-CONTENT-STEERING`.

use crate::error::Warning;
use crate::model::{ContentSteering, Playlist};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["SERVER-URI"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let server_uri = attributes["SERVER-URI"].clone();
    let resolved_server_uri = super::resolve(&server_uri, &shared.base_url, warn);
    playlist.content_steering = Some(ContentSteering {
        server_uri,
        resolved_server_uri,
        pathway_id: attributes.get("PATHWAY-ID").cloned(),
    });
}

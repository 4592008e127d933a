//! `EXT-X-RENDITION-REPORT`.

use crate::error::Warning;
use crate::model::{Playlist, RenditionReport};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["URI"],
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
    let last_msn = match attributes.get("LAST-MSN") {
        Some(raw) => super::parse_u64("EXT-X-RENDITION-REPORT", "LAST-MSN", raw, warn),
        None => None,
    };
    let last_part = match attributes.get("LAST-PART") {
        Some(raw) => super::parse_u64("EXT-X-RENDITION-REPORT", "LAST-PART", raw, warn),
        None => None,
    };
    playlist.rendition_reports.push(RenditionReport {
        uri: uri.clone(),
        resolved_uri,
        last_msn,
        last_part,
    });
}

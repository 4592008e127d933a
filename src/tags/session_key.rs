//! `EXT-X-SESSION-KEY`.
//!
//! Same attribute shape as `EXT-X-KEY` (§4.3.3), but appended to
//! [`crate::model::Playlist::session_keys`] rather than carried forward in the shared state.

use super::key::{build_encryption, parse_method};
use crate::error::Warning;
use crate::model::{EncryptionMethod, Playlist};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["METHOD"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let method = parse_method(&attributes["METHOD"]);
    if method != EncryptionMethod::None && !attributes.contains_key("URI") {
        warn(Warning::MissingRequiredAttribute {
            tag: "EXT-X-SESSION-KEY".to_string(),
            attribute: "URI".to_string(),
        });
        return;
    }
    playlist
        .session_keys
        .push(build_encryption(attributes, &shared.base_url, warn));
}

//! `EXT-X-KEY`.

use crate::error::Warning;
use crate::model::{Encryption, EncryptionMethod, Playlist};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag. `URI` is conditionally required (absent only when
/// `METHOD=NONE`), so it is validated inside [`process`] rather than declared here.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["METHOD"],
    process,
};

/// Parses the `METHOD` attribute common to `EXT-X-KEY` and `EXT-X-SESSION-KEY`.
pub(super) fn parse_method(value: &str) -> EncryptionMethod {
    match value {
        "NONE" => EncryptionMethod::None,
        "AES-128" => EncryptionMethod::Aes128,
        "SAMPLE-AES" => EncryptionMethod::SampleAes,
        "SAMPLE-AES-CTR" => EncryptionMethod::SampleAesCtr,
        other => EncryptionMethod::Other(other.to_string()),
    }
}

/// Parses `KEYFORMATVERSIONS`, a `/`-delimited list of integers, defaulting to `[1]` per
/// `SPEC_FULL.md` §2.5.
pub(super) fn parse_key_format_versions(attributes: &HashMap<String, String>) -> Vec<u32> {
    match attributes.get("KEYFORMATVERSIONS") {
        Some(raw) => raw.split('/').filter_map(|v| v.trim().parse().ok()).collect(),
        None => vec![1],
    }
}

/// Builds the common `Encryption` value shared by `EXT-X-KEY` and `EXT-X-SESSION-KEY`, after the
/// conditional-URI requirement (URI required unless `METHOD=NONE`) has already been checked.
pub(super) fn build_encryption(
    attributes: &HashMap<String, String>,
    base_url: &str,
    warn: &mut dyn FnMut(Warning),
) -> Encryption {
    let method = parse_method(&attributes["METHOD"]);
    let resolved_uri = attributes
        .get("URI")
        .map(|uri| super::resolve(uri, base_url, warn));
    Encryption {
        method,
        uri: attributes.get("URI").cloned(),
        resolved_uri,
        iv: attributes.get("IV").cloned(),
        key_format: attributes.get("KEYFORMAT").cloned(),
        key_format_versions: parse_key_format_versions(attributes),
    }
}

fn process(
    attributes: &HashMap<String, String>,
    _playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let method = parse_method(&attributes["METHOD"]);
    if method != EncryptionMethod::None && !attributes.contains_key("URI") {
        warn(Warning::MissingRequiredAttribute {
            tag: "EXT-X-KEY".to_string(),
            attribute: "URI".to_string(),
        });
        return;
    }
    shared.current_encryption = Some(build_encryption(attributes, &shared.base_url, warn));
}

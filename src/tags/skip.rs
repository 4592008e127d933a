//! `EXT-X-SKIP`.

use crate::error::Warning;
use crate::model::{Playlist, Skip};
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag.
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &["SKIPPED-SEGMENTS"],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    let Some(skipped_segments) =
        super::parse_u64("EXT-X-SKIP", "SKIPPED-SEGMENTS", &attributes["SKIPPED-SEGMENTS"], warn)
    else {
        return;
    };
    // Per the specification (resolving the open question noted in `SPEC_FULL.md` §2.5): split on
    // tab when the attribute is present, else an empty list, regardless of whether the resulting
    // list would itself be empty.
    let recently_removed_dateranges = match attributes.get("RECENTLY-REMOVED-DATERANGES") {
        Some(raw) => raw.split('\t').map(str::to_string).collect(),
        None => Vec::new(),
    };
    playlist.skip = Some(Skip {
        skipped_segments,
        recently_removed_dateranges,
    });
}

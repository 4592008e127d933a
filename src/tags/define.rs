//! `EXT-X-DEFINE`.
//!
//! Exactly one of `NAME` (with `VALUE`), `IMPORT`, or `QUERYPARAM` is expected per occurrence;
//! each populates a distinct scope of [`crate::model::Define`] and, when resolved successfully,
//! the matching scope of [`SharedState::variables`] so later `{$NAME}` references see it.

use crate::error::Warning;
use crate::model::Playlist;
use crate::registry::AttributeTagProcessor;
use crate::shared_state::SharedState;
use std::collections::HashMap;

/// The registered processor for this tag. None of `NAME`/`IMPORT`/`QUERYPARAM` is unconditionally
/// required, so the three forms are distinguished inside [`process`].
pub const PROCESSOR: AttributeTagProcessor = AttributeTagProcessor {
    required_attributes: &[],
    process,
};

fn process(
    attributes: &HashMap<String, String>,
    playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    if let Some(name) = attributes.get("NAME") {
        let Some(value) = attributes.get("VALUE") else {
            warn(Warning::MissingRequiredAttribute {
                tag: "EXT-X-DEFINE".to_string(),
                attribute: "VALUE".to_string(),
            });
            return;
        };
        playlist.define.name.insert(name.clone(), value.clone());
        shared.variables.name.insert(name.clone(), value.clone());
        shared.has_variables_for_substitution = true;
        return;
    }

    if let Some(name) = attributes.get("IMPORT") {
        match shared.base_define.lookup(name) {
            Some(value) => {
                let value = value.to_string();
                playlist.define.import.insert(name.clone(), value.clone());
                shared.variables.import.insert(name.clone(), value);
                shared.has_variables_for_substitution = true;
            }
            None => warn(Warning::MissingVariable { name: name.clone() }),
        }
        return;
    }

    if let Some(name) = attributes.get("QUERYPARAM") {
        let found = shared.variables.query_param.get(name).cloned();
        if found.is_some() {
            shared.has_variables_for_substitution = true;
        } else {
            warn(Warning::MissingVariable { name: name.clone() });
        }
        playlist.define.query_param.insert(name.clone(), found);
        return;
    }

    warn(Warning::MissingRequiredAttribute {
        tag: "EXT-X-DEFINE".to_string(),
        attribute: "NAME, IMPORT or QUERYPARAM".to_string(),
    });
}

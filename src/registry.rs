//! The tag-processor registry and dispatcher (§4.3 of the specification this crate implements).
//!
//! Three small maps, one per tag shape (empty, value, attribute), keyed by tag name, plus the
//! caller-supplied custom map. [`dispatch`] is the single entry point the parser calls for every
//! tag the scanner recognizes; it owns the precedence order described in §4.3 and is the only
//! place that order is encoded.

use crate::attribute::parse_attribute_list;
use crate::config::ParserOptions;
use crate::error::Warning;
use crate::model::Playlist;
use crate::shared_state::SharedState;
use crate::tags;
use crate::variables::substitute;
use std::collections::HashMap;

/// A processor for a tag with no value or attributes (e.g. `EXT-X-ENDLIST`).
pub type EmptyTagProcessor = fn(&mut Playlist, &mut SharedState);

/// A processor for a tag whose body is a bare value (e.g. `EXT-X-VERSION`).
pub type ValueTagProcessor =
    fn(&str, &mut Playlist, &mut SharedState, &mut dyn FnMut(Warning));

/// A processor for a tag whose body is an attribute list (e.g. `EXT-X-STREAM-INF`).
#[derive(Clone, Copy)]
pub struct AttributeTagProcessor {
    /// Attribute keys that must be present (after variable substitution) or the tag is skipped
    /// with [`Warning::MissingRequiredAttribute`].
    pub required_attributes: &'static [&'static str],
    /// The processor body, invoked once every required attribute is present.
    pub process: fn(&HashMap<String, String>, &mut Playlist, &mut SharedState, &mut dyn FnMut(Warning)),
}

/// The full set of known-tag processors, built once and reused across parses.
pub struct Registry {
    empty: HashMap<&'static str, EmptyTagProcessor>,
    value: HashMap<&'static str, ValueTagProcessor>,
    attribute: HashMap<&'static str, AttributeTagProcessor>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Builds the registry covering every tag enumerated in §6.1.
    pub fn new() -> Self {
        let mut empty: HashMap<&'static str, EmptyTagProcessor> = HashMap::new();
        empty.insert("EXTM3U", tags::empty::m3u);
        empty.insert("EXT-X-INDEPENDENT-SEGMENTS", tags::empty::independent_segments);
        empty.insert("EXT-X-ENDLIST", tags::empty::end_list);
        empty.insert("EXT-X-I-FRAMES-ONLY", tags::empty::i_frames_only);
        empty.insert("EXT-X-DISCONTINUITY", tags::empty::discontinuity);
        empty.insert("EXT-X-GAP", tags::empty::gap);

        let mut value: HashMap<&'static str, ValueTagProcessor> = HashMap::new();
        value.insert("EXT-X-VERSION", tags::value::version);
        value.insert("EXT-X-TARGETDURATION", tags::value::target_duration);
        value.insert("EXT-X-MEDIA-SEQUENCE", tags::value::media_sequence);
        value.insert("EXT-X-DISCONTINUITY-SEQUENCE", tags::value::discontinuity_sequence);
        value.insert("EXT-X-PLAYLIST-TYPE", tags::value::playlist_type);
        value.insert("EXTINF", tags::value::extinf);
        value.insert("EXT-X-BYTERANGE", tags::value::byte_range);
        value.insert("EXT-X-BITRATE", tags::value::bitrate);
        value.insert("EXT-X-PROGRAM-DATE-TIME", tags::value::program_date_time);

        let mut attribute: HashMap<&'static str, AttributeTagProcessor> = HashMap::new();
        attribute.insert("EXT-X-START", tags::start::PROCESSOR);
        attribute.insert("EXT-X-PART-INF", tags::part_inf::PROCESSOR);
        attribute.insert("EXT-X-SERVER-CONTROL", tags::server_control::PROCESSOR);
        attribute.insert("EXT-X-KEY", tags::key::PROCESSOR);
        attribute.insert("EXT-X-MAP", tags::map::PROCESSOR);
        attribute.insert("EXT-X-PART", tags::part::PROCESSOR);
        attribute.insert("EXT-X-MEDIA", tags::media::PROCESSOR);
        attribute.insert("EXT-X-STREAM-INF", tags::stream_inf::PROCESSOR);
        attribute.insert("EXT-X-SKIP", tags::skip::PROCESSOR);
        attribute.insert("EXT-X-I-FRAME-STREAM-INF", tags::i_frame_stream_inf::PROCESSOR);
        attribute.insert("EXT-X-DATERANGE", tags::daterange::PROCESSOR);
        attribute.insert("EXT-X-PRELOAD-HINT", tags::preload_hint::PROCESSOR);
        attribute.insert("EXT-X-RENDITION-REPORT", tags::rendition_report::PROCESSOR);
        attribute.insert("EXT-X-SESSION-DATA", tags::session_data::PROCESSOR);
        attribute.insert("EXT-X-SESSION-KEY", tags::session_key::PROCESSOR);
        attribute.insert("EXT-X-CONTENT-STEERING", tags::content_steering::PROCESSOR);
        attribute.insert("EXT-X-DEFINE", tags::define::PROCESSOR);

        Self { empty, value, attribute }
    }
}

/// Dispatches a single recognized tag, following the precedence order of §4.3: ignore list, empty
/// map, value map, attribute map, custom map, else an unsupported-tag warning.
pub fn dispatch(
    registry: &Registry,
    name: &str,
    raw_value: Option<String>,
    playlist: &mut Playlist,
    shared: &mut SharedState,
    options: &mut ParserOptions,
) {
    (options.debug_callback)(format!("dispatching tag {name} (value={raw_value:?})"));

    if options.ignore_tags.contains(name) {
        (options.warn_callback)(Warning::IgnoredTag { tag: name.to_string() });
        return;
    }

    if let Some(processor) = registry.empty.get(name) {
        processor(playlist, shared);
        return;
    }

    if let Some(processor) = registry.value.get(name) {
        let transformed = match (&mut options.transform_tag_value, raw_value.as_deref()) {
            (Some(transform), Some(raw)) => transform(name, raw),
            (None, Some(raw)) => Some(raw.to_string()),
            (_, None) => None,
        };
        let Some(value) = transformed else {
            (options.warn_callback)(Warning::MissingTagValue { tag: name.to_string() });
            return;
        };
        processor(&value, playlist, shared, options.warn_callback.as_mut());
        return;
    }

    if let Some(processor) = registry.attribute.get(name) {
        let raw = raw_value.as_deref().unwrap_or("");
        let mut attributes = match parse_attribute_list(raw) {
            Ok(attributes) => attributes,
            Err(err) => {
                (options.warn_callback)(Warning::UnparsableValue {
                    tag: name.to_string(),
                    detail: err.to_string(),
                });
                return;
            }
        };
        if let Some(transform) = &mut options.transform_tag_attributes {
            transform(name, &mut attributes);
        }
        if shared.has_variables_for_substitution {
            let warn = &mut *options.warn_callback;
            for value in attributes.values_mut() {
                *value = substitute(value, &shared.variables, warn);
            }
        }
        for required in processor.required_attributes {
            if !attributes.contains_key(*required) {
                (options.warn_callback)(Warning::MissingRequiredAttribute {
                    tag: name.to_string(),
                    attribute: required.to_string(),
                });
                return;
            }
        }
        (processor.process)(&attributes, playlist, shared, options.warn_callback.as_mut());
        return;
    }

    if let Some(handler) = options.custom_tag_map.get_mut(name) {
        handler(name, raw_value.as_deref(), &mut playlist.custom);
        return;
    }

    (options.warn_callback)(Warning::UnsupportedTag { tag: name.to_string() });
}

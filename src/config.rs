//! Parser configuration (§4.3 / §4.6 of the specification this crate implements).
//!
//! Two option structs are used, mirroring the parser's two lifetimes: [`ParserOptions`] is built
//! once and reused across many parses of related playlists (the warn callback, the custom tag
//! map, tag transforms), while [`ParseOptions`] is supplied fresh to each individual parse (the
//! base URL, the imported variable scope, the start-time offset for a playlist that continues a
//! timeline the caller is already tracking).
//!
//! Both follow the builder pattern the rest of this crate's lineage uses for options structs.

use crate::error::Warning;
use crate::model::CustomValue;
use crate::variables::VariableScope;
use std::collections::{HashMap, HashSet};

/// A caller-supplied handler for a tag this crate does not recognize.
///
/// Receives the tag name, the raw (pre-substitution) value or attribute list text, and mutable
/// access to [`crate::model::Playlist::custom`] to stash whatever representation the caller wants.
pub type CustomTagHandler = Box<dyn FnMut(&str, Option<&str>, &mut HashMap<String, CustomValue>)>;

/// A caller-supplied transform applied to a value-tag's raw value before it is parsed. Returning
/// `None` diverts to [`Warning::MissingTagValue`], the same as if the tag had carried no value.
pub type TagValueTransform = Box<dyn FnMut(&str, &str) -> Option<String>>;

/// A caller-supplied transform applied to an attribute-tag's attribute map before it is parsed.
pub type TagAttributesTransform = Box<dyn FnMut(&str, &mut HashMap<String, String>)>;

/// Options that apply across every parse performed with a given [`crate::Parser`] (§4.3.1, §4.6).
pub struct ParserOptions {
    /// Invoked for every [`Warning`] raised while parsing. Defaults to a no-op.
    pub warn_callback: Box<dyn FnMut(Warning)>,
    /// Invoked with a human-readable trace of parser progress, useful for debugging a playlist
    /// that produces unexpected results. Defaults to a no-op.
    pub debug_callback: Box<dyn FnMut(String)>,
    /// Tag names that should be silently skipped (reported as [`Warning::IgnoredTag`]) rather
    /// than dispatched to their processor, even if one is registered.
    pub ignore_tags: HashSet<String>,
    /// Handlers for tags this crate does not itself recognize, keyed by tag name.
    pub custom_tag_map: HashMap<String, CustomTagHandler>,
    /// A transform run on every value-tag's raw value before it is parsed (after variable
    /// substitution).
    pub transform_tag_value: Option<TagValueTransform>,
    /// A transform run on every attribute-tag's attribute map before it is parsed (after variable
    /// substitution).
    pub transform_tag_attributes: Option<TagAttributesTransform>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            warn_callback: Box::new(|_| {}),
            debug_callback: Box::new(|_| {}),
            ignore_tags: HashSet::new(),
            custom_tag_map: HashMap::new(),
            transform_tag_value: None,
            transform_tag_attributes: None,
        }
    }
}

impl std::fmt::Debug for ParserOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserOptions")
            .field("ignore_tags", &self.ignore_tags)
            .field("custom_tag_map", &self.custom_tag_map.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// A builder for [`ParserOptions`].
#[derive(Default)]
pub struct ParserOptionsBuilder {
    options: ParserOptions,
}

impl ParserOptionsBuilder {
    /// Instantiates the builder with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finishes building, consuming the builder.
    pub fn build(self) -> ParserOptions {
        self.options
    }

    /// Sets the callback invoked for every [`Warning`] raised while parsing.
    pub fn with_warn_callback(mut self, callback: impl FnMut(Warning) + 'static) -> Self {
        self.options.warn_callback = Box::new(callback);
        self
    }

    /// Sets the callback invoked with a human-readable trace of parser progress.
    pub fn with_debug_callback(mut self, callback: impl FnMut(String) + 'static) -> Self {
        self.options.debug_callback = Box::new(callback);
        self
    }

    /// Adds a tag name to the ignore list.
    pub fn ignoring_tag(mut self, tag: impl Into<String>) -> Self {
        self.options.ignore_tags.insert(tag.into());
        self
    }

    /// Registers a handler for a tag this crate does not itself recognize.
    pub fn with_custom_tag(
        mut self,
        tag: impl Into<String>,
        handler: impl FnMut(&str, Option<&str>, &mut HashMap<String, CustomValue>) + 'static,
    ) -> Self {
        self.options.custom_tag_map.insert(tag.into(), Box::new(handler));
        self
    }

    /// Sets a transform run on every value-tag's raw value before it is parsed. Returning `None`
    /// diverts to [`Warning::MissingTagValue`].
    pub fn with_tag_value_transform(
        mut self,
        transform: impl FnMut(&str, &str) -> Option<String> + 'static,
    ) -> Self {
        self.options.transform_tag_value = Some(Box::new(transform));
        self
    }

    /// Sets a transform run on every attribute-tag's attribute map before it is parsed.
    pub fn with_tag_attributes_transform(
        mut self,
        transform: impl FnMut(&str, &mut HashMap<String, String>) + 'static,
    ) -> Self {
        self.options.transform_tag_attributes = Some(Box::new(transform));
        self
    }
}

/// Options specific to a single parse (§4.6).
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// The base URL used to resolve every relative URI in the playlist. Empty means no resolution
    /// is attempted and raw URIs are used verbatim.
    pub base_url: String,
    /// Variables available for `EXT-X-DEFINE:IMPORT=...` to pull from, typically forwarded from
    /// the parent multivariant playlist's own variable scope.
    pub base_define: VariableScope,
    /// The offset, in seconds, added to the first segment's `start_time` (§3.3); defaults to `0.0`.
    /// Used when this playlist is a continuation of a longer timeline the caller is tracking
    /// across separate parses (e.g. a discontinuity-joined stream).
    pub base_time: f64,
}

/// A builder for [`ParseOptions`].
#[derive(Default)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Instantiates the builder with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finishes building, consuming the builder.
    pub fn build(self) -> ParseOptions {
        self.options
    }

    /// Sets the base URL used to resolve relative URIs.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.base_url = base_url.into();
        self
    }

    /// Sets the variables available for `EXT-X-DEFINE:IMPORT=...`.
    pub fn with_base_define(mut self, base_define: VariableScope) -> Self {
        self.options.base_define = base_define;
        self
    }

    /// Sets the offset, in seconds, added to the first segment's `start_time`.
    pub fn with_base_time(mut self, base_time: f64) -> Self {
        self.options.base_time = base_time;
        self
    }
}

//! Mutable state threaded through a single parse (§3.3 of the specification this crate
//! implements).
//!
//! Tag processors in [`crate::tags`] don't see the whole [`crate::model::Playlist`] under
//! construction; they see this smaller, focused `SharedState` plus whichever one field of the
//! playlist they are responsible for. `SharedState` carries everything that applies to a tag but
//! is only resolved once later tags (or the following URI line) are seen: the accumulating
//! segment and variant under construction, the encryption/init-section/bitrate state carried
//! forward from the most recent applicable tag, and the base URL/variables used to resolve every
//! URI and `{$NAME}` reference.

use crate::model::{Encryption, MediaInitializationSection, PartialSegment, Segment, Variant};
use crate::variables::VariableScope;

/// State carried across tags within a single parse, reset at the boundaries described per field.
#[derive(Debug, Clone, Default)]
pub struct SharedState {
    /// The base URL used to resolve every relative URI encountered (§4.5). Supplied by
    /// [`crate::config::ParseOptions::base_url`] and never changed mid-parse.
    pub base_url: String,
    /// The variable substitution scope, built up as `EXT-X-DEFINE` tags are processed. Seeded only
    /// with the base URL's query string (`QUERYPARAM` lookups read straight off it); `NAME` and
    /// `IMPORT` entries are populated one at a time as the corresponding `EXT-X-DEFINE` tags are
    /// successfully processed, never copied wholesale from [`Self::base_define`].
    pub variables: VariableScope,
    /// The caller-supplied scope `EXT-X-DEFINE:IMPORT=...` resolves against (§4.5), typically
    /// forwarded from the parent multivariant playlist's own variable scope. Left untouched for
    /// the whole parse.
    pub base_define: VariableScope,
    /// The offset, in seconds, added to the first committed segment's `start_time` (§3.3).
    /// Supplied by [`crate::config::ParseOptions::base_time`]; defaults to `0.0`.
    pub base_time: f64,

    /// The segment fields accumulated since the last committed segment, reset to `Segment::default`
    /// every time a URI line resolves one (§4.4).
    pub current_segment: Segment,
    /// `EXT-X-PART` entries accumulated since the last committed segment.
    pub current_parts: Vec<PartialSegment>,

    /// The variant-stream fields accumulated since the last committed variant, reset every time a
    /// URI line resolves one.
    pub current_variant: Variant,

    /// The encryption state in effect, carried forward across segments until a new `EXT-X-KEY` (or
    /// one with `METHOD=NONE`) replaces it.
    pub current_encryption: Option<Encryption>,
    /// The media initialization section in effect, carried forward across segments until a new
    /// `EXT-X-MAP` replaces it.
    pub current_map: Option<MediaInitializationSection>,
    /// The bitrate declared by the most recent `EXT-X-BITRATE`, carried forward until a segment
    /// that itself declares a byte range (§4.4).
    pub current_bitrate: Option<u64>,

    /// Set once the playlist is recognized as a multivariant playlist (the first
    /// `EXT-X-STREAM-INF` or `EXT-X-I-FRAME-STREAM-INF` tag, or any `EXT-X-MEDIA` tag). Used only
    /// for diagnostics; this crate does not reject a playlist that mixes both shapes (see
    /// `SPEC_FULL.md` §2.5).
    pub is_multivariant_playlist: bool,

    /// Enables the variable-substitution pass (§4.3.3, `EXT-X-DEFINE`). Set the first time an
    /// `EXT-X-DEFINE` tag is successfully processed; substitution is skipped entirely until then,
    /// so a playlist with no variables pays no cost scanning for `{$NAME}` patterns.
    pub has_variables_for_substitution: bool,
}

impl SharedState {
    /// Builds the initial shared state for a parse from the supplied options.
    pub fn new(base_url: String, base_time: f64, base_define: VariableScope) -> Self {
        let query_param = if base_url.is_empty() {
            std::collections::HashMap::new()
        } else {
            crate::variables::query_params(&base_url)
        };
        let variables = VariableScope {
            query_param,
            ..Default::default()
        };
        Self {
            base_url,
            base_time,
            variables,
            base_define,
            ..Default::default()
        }
    }

    /// Takes the accumulated segment state, replacing it with a fresh default. Called by
    /// [`crate::assembler`] when a URI line resolves a segment.
    pub fn take_segment(&mut self) -> (Segment, Vec<PartialSegment>) {
        let segment = std::mem::take(&mut self.current_segment);
        let parts = std::mem::take(&mut self.current_parts);
        (segment, parts)
    }

    /// Takes the accumulated variant state, replacing it with a fresh default. Called by
    /// [`crate::assembler`] when a URI line resolves a variant stream.
    pub fn take_variant(&mut self) -> Variant {
        std::mem::take(&mut self.current_variant)
    }
}

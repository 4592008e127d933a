//! The parsed playlist data model (§3 of the specification this crate implements).
//!
//! Every type here is an owned, mutable aggregate populated incrementally by the tag processors in
//! [`crate::tags`] as the parser works through the input. Unlike the zero-copy SAX reader this
//! crate grew from, nothing here borrows from the input: a [`Playlist`] is meant to outlive the
//! text it was built from.

use crate::date::DateTime;
use std::collections::HashMap;

/// The top-level output of a parse: either a media playlist (`segments` populated) or a
/// multivariant playlist (`variant_streams`/`i_frame_playlists`/`rendition_groups` populated).
///
/// The specification leaves it as an open question whether a playlist that populates both shapes
/// at once should be rejected; this crate tolerates it (see `SPEC_FULL.md` §2.5) in keeping with
/// the teacher library's general philosophy of not getting in the way of extracting meaningful
/// information from input that a real player might still accept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    /// Whether the leading `#EXTM3U` line was seen.
    pub m3u: bool,
    /// `EXT-X-VERSION`.
    pub version: Option<u64>,
    /// `EXT-X-INDEPENDENT-SEGMENTS`.
    pub independent_segments: bool,
    /// `EXT-X-ENDLIST`.
    pub end_list: bool,
    /// `EXT-X-I-FRAMES-ONLY`.
    pub i_frames_only: bool,
    /// `EXT-X-PLAYLIST-TYPE`.
    pub playlist_type: Option<PlaylistType>,
    /// `EXT-X-TARGETDURATION`, in seconds.
    pub target_duration: Option<u64>,
    /// `EXT-X-MEDIA-SEQUENCE`; defaults to `0`.
    pub media_sequence: u64,
    /// `EXT-X-DISCONTINUITY-SEQUENCE`; defaults to `0`.
    pub discontinuity_sequence: u64,
    /// `EXT-X-START`.
    pub start: Option<Start>,
    /// `EXT-X-PART-INF`.
    pub part_inf: Option<PartInf>,
    /// `EXT-X-SERVER-CONTROL`.
    pub server_control: Option<ServerControl>,
    /// `EXT-X-SKIP`.
    pub skip: Option<Skip>,
    /// `EXT-X-PRELOAD-HINT` (the tag may appear at most once for `PART` and once for `MAP`).
    pub preload_hints: PreloadHints,
    /// `EXT-X-RENDITION-REPORT`, in declaration order.
    pub rendition_reports: Vec<RenditionReport>,
    /// `EXT-X-DEFINE` variables, across all three scopes.
    pub define: Define,
    /// `EXT-X-SESSION-KEY`, in declaration order.
    pub session_keys: Vec<Encryption>,
    /// `EXT-X-SESSION-DATA`, keyed by `DATA-ID`.
    pub session_data: HashMap<String, SessionData>,
    /// `EXT-X-CONTENT-STEERING`.
    pub content_steering: Option<ContentSteering>,
    /// Media playlist segments, in order. See the module invariants enforced by
    /// [`crate::assembler`].
    pub segments: Vec<Segment>,
    /// `EXT-X-DATERANGE`, in declaration order.
    pub date_ranges: Vec<DateRange>,
    /// Multivariant playlist variant streams, in declaration order.
    pub variant_streams: Vec<Variant>,
    /// `EXT-X-I-FRAME-STREAM-INF` playlists.
    pub i_frame_playlists: Vec<IFramePlaylist>,
    /// `EXT-X-MEDIA` renditions, grouped by type and then by `GROUP-ID`.
    pub rendition_groups: RenditionGroups,
    /// Opaque storage mutated only by caller-supplied custom tag handlers
    /// (see [`crate::config::ParserOptions::custom_tag_map`]).
    pub custom: HashMap<String, CustomValue>,
}

/// `EXT-X-PLAYLIST-TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistType {
    /// No further segments will be added beyond `EXT-X-ENDLIST`.
    Vod,
    /// The playlist may grow over time.
    Event,
}

/// `EXT-X-START`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Start {
    /// `TIME-OFFSET`, in seconds (may be negative, meaning relative to the end of the playlist).
    pub time_offset: f64,
    /// `PRECISE`; defaults to `false`.
    pub precise: bool,
}

/// `EXT-X-PART-INF`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartInf {
    /// `PART-TARGET`, in seconds.
    pub part_target: f64,
}

/// `EXT-X-SERVER-CONTROL`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ServerControl {
    /// `CAN-SKIP-UNTIL`, in seconds.
    pub can_skip_until: Option<f64>,
    /// `CAN-SKIP-DATERANGES`; defaults to `false`.
    pub can_skip_dateranges: bool,
    /// `CAN-BLOCK-RELOAD`; defaults to `false`.
    pub can_block_reload: bool,
    /// `HOLD-BACK`, in seconds.
    pub hold_back: Option<f64>,
    /// `PART-HOLD-BACK`, in seconds.
    pub part_hold_back: Option<f64>,
}

/// `EXT-X-SKIP`.
#[derive(Debug, Clone, PartialEq)]
pub struct Skip {
    /// `SKIPPED-SEGMENTS`.
    pub skipped_segments: u64,
    /// `RECENTLY-REMOVED-DATERANGES`, split on the tab character, or empty if the attribute was
    /// absent (see `SPEC_FULL.md` §2.5 for why this follows the specification rather than the
    /// original implementation's truthiness check on the constant name).
    pub recently_removed_dateranges: Vec<String>,
}

/// A byte range resource reference, used by both [`Segment::byte_range`] and
/// [`PartialSegment::byte_range`]. The range is inclusive of both `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// The first byte (inclusive).
    pub start: u64,
    /// The last byte (inclusive).
    pub end: u64,
}

/// The end of an `EXT-X-PRELOAD-HINT` byte range, which may be left open (no `LENGTH` supplied).
///
/// The source this crate's behavior is grounded on uses `Number.MAX_SAFE_INTEGER` as a sentinel for
/// this case; per the specification's own design notes, this crate models it as an explicit
/// variant instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRangeEnd {
    /// The range ends at this byte (inclusive).
    Closed(u64),
    /// The range is open-ended (continues to the end of the resource).
    Open,
}

/// A resource reference inside `EXT-X-PRELOAD-HINT`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreloadHintResource {
    /// `URI`.
    pub uri: String,
    /// `URI`, resolved against the playlist's base URL.
    pub resolved_uri: String,
    /// `BYTE-RANGE-START`; defaults to `0` when absent.
    pub byte_range_start: u64,
    /// The end of the byte range, or `Open` if `BYTE-RANGE-LENGTH` was absent.
    pub byte_range_end: ByteRangeEnd,
}

/// `EXT-X-PRELOAD-HINT`. The tag carries a `TYPE` of either `PART` or `MAP`; at most one of each
/// may be active at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreloadHints {
    /// The `PART` preload hint, if any.
    pub part: Option<PreloadHintResource>,
    /// The `MAP` preload hint, if any.
    pub map: Option<PreloadHintResource>,
}

/// `EXT-X-RENDITION-REPORT`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenditionReport {
    /// `URI`.
    pub uri: String,
    /// `URI`, resolved against the playlist's base URL.
    pub resolved_uri: String,
    /// `LAST-MSN`, if present.
    pub last_msn: Option<u64>,
    /// `LAST-PART`, if present.
    pub last_part: Option<u64>,
}

/// `EXT-X-DEFINE` variables, across the three scopes described in §4.5.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Define {
    /// Variables declared with `NAME`/`VALUE`.
    pub name: HashMap<String, String>,
    /// Variables declared with `IMPORT`, resolved against the caller-supplied base scope.
    pub import: HashMap<String, String>,
    /// Variables declared with `QUERYPARAM`, resolved against the playlist's base URL query
    /// string. `None` when the named query parameter was not present.
    pub query_param: HashMap<String, Option<String>>,
}

/// `METHOD` of `EXT-X-KEY` / `EXT-X-SESSION-KEY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptionMethod {
    /// Segments are not encrypted.
    None,
    /// AES-128 CBC encryption of the whole segment.
    Aes128,
    /// Sample-level AES encryption ('cbcs' for fMP4).
    SampleAes,
    /// Sample-level AES-CTR encryption ('cenc' for fMP4).
    SampleAesCtr,
    /// An encryption method not recognized by this crate, preserved verbatim.
    Other(String),
}

/// `EXT-X-KEY` / `EXT-X-SESSION-KEY`.
#[derive(Debug, Clone, PartialEq)]
pub struct Encryption {
    /// `METHOD`.
    pub method: EncryptionMethod,
    /// `URI`; required unless `METHOD` is `NONE`.
    pub uri: Option<String>,
    /// `URI`, resolved against the playlist's base URL.
    pub resolved_uri: Option<String>,
    /// `IV`, an explicit initialization vector (hex string, as given).
    pub iv: Option<String>,
    /// `KEYFORMAT`.
    pub key_format: Option<String>,
    /// `KEYFORMATVERSIONS`, split on `/`. Defaults to `[1]` when absent (§9 Open Question,
    /// resolved in `SPEC_FULL.md` §2.5).
    pub key_format_versions: Vec<u32>,
}

/// `EXT-X-MAP`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaInitializationSection {
    /// `URI`.
    pub uri: String,
    /// `URI`, resolved against the playlist's base URL.
    pub resolved_uri: String,
    /// `BYTERANGE`, if present.
    pub byte_range: Option<ByteRange>,
}

/// `EXT-X-PART`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialSegment {
    /// `URI`.
    pub uri: String,
    /// `URI`, resolved against the playlist's base URL.
    pub resolved_uri: String,
    /// `DURATION`, in seconds.
    pub duration: f64,
    /// `INDEPENDENT`; defaults to `false`.
    pub independent: bool,
    /// `BYTERANGE`, if present.
    pub byte_range: Option<ByteRange>,
    /// `GAP`; defaults to `false`.
    pub gap: bool,
}

/// `EXT-X-DATERANGE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    /// `ID`.
    pub id: String,
    /// `CLASS`.
    pub class: Option<String>,
    /// `START-DATE`.
    pub start_date: Option<DateTime>,
    /// `CUE`, split on whitespace (`PRE`, `POST`, `ONCE`).
    pub cue: Vec<String>,
    /// `END-DATE`.
    pub end_date: Option<DateTime>,
    /// `DURATION`, in seconds.
    pub duration: Option<f64>,
    /// `PLANNED-DURATION`, in seconds.
    pub planned_duration: Option<f64>,
    /// Every attribute whose key starts with `X-` (a "client attribute"), with the `X-` prefix
    /// retained.
    pub client_attributes: HashMap<String, String>,
    /// `SCTE35-CMD`, parsed as a hex byte array.
    pub scte35_cmd: Option<Vec<u8>>,
    /// `SCTE35-OUT`, parsed as a hex byte array.
    pub scte35_out: Option<Vec<u8>>,
    /// `SCTE35-IN`, parsed as a hex byte array.
    pub scte35_in: Option<Vec<u8>>,
    /// `END-ON-NEXT`; defaults to `false`.
    pub end_on_next: bool,
}

/// `EXT-X-SESSION-DATA`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    /// `VALUE`.
    pub value: Option<String>,
    /// `URI`.
    pub uri: Option<String>,
    /// `FORMAT`; defaults to `JSON`.
    pub format: Option<String>,
    /// `LANGUAGE`.
    pub language: Option<String>,
}

/// `EXT-X-CONTENT-STEERING`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSteering {
    /// `SERVER-URI`.
    pub server_uri: String,
    /// `SERVER-URI`, resolved against the playlist's base URL.
    pub resolved_server_uri: String,
    /// `PATHWAY-ID`.
    pub pathway_id: Option<String>,
}

/// A resolution in pixels, from the `RESOLUTION` attribute of `EXT-X-STREAM-INF` /
/// `EXT-X-I-FRAME-STREAM-INF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Width, in pixels.
    pub width: u64,
    /// Height, in pixels.
    pub height: u64,
}

/// `CLOSED-CAPTIONS` of `EXT-X-STREAM-INF`, which is either a quoted `GROUP-ID` or the literal
/// enumerated string `NONE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosedCaptionsGroup {
    /// `NONE`: there are no closed captions renditions for this variant.
    None,
    /// The `GROUP-ID` of the closed-captions rendition group.
    GroupId(String),
}

/// `EXT-X-STREAM-INF` plus the following URI line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
    /// `BANDWIDTH`, in bits per second.
    pub bandwidth: u64,
    /// `AVERAGE-BANDWIDTH`, in bits per second.
    pub average_bandwidth: Option<u64>,
    /// `CODECS`, split on comma.
    pub codecs: Vec<String>,
    /// `RESOLUTION`.
    pub resolution: Option<Resolution>,
    /// `FRAME-RATE`.
    pub frame_rate: Option<f64>,
    /// `HDCP-LEVEL`.
    pub hdcp_level: Option<String>,
    /// `AUDIO` group id.
    pub audio: Option<String>,
    /// `VIDEO` group id.
    pub video: Option<String>,
    /// `SUBTITLES` group id.
    pub subtitles: Option<String>,
    /// `CLOSED-CAPTIONS`.
    pub closed_captions: Option<ClosedCaptionsGroup>,
    /// `VIDEO-RANGE`.
    pub video_range: Option<String>,
    /// `SCORE`.
    pub score: Option<f64>,
    /// `PATHWAY-ID`.
    pub pathway_id: Option<String>,
    /// `STABLE-VARIANT-ID`.
    pub stable_variant_id: Option<String>,
    /// The URI line following the tag.
    pub uri: String,
    /// The URI, resolved against the playlist's base URL.
    pub resolved_uri: String,
}

/// `EXT-X-I-FRAME-STREAM-INF`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IFramePlaylist {
    /// `BANDWIDTH`, in bits per second.
    pub bandwidth: u64,
    /// `AVERAGE-BANDWIDTH`, in bits per second.
    pub average_bandwidth: Option<u64>,
    /// `CODECS`, split on comma.
    pub codecs: Vec<String>,
    /// `RESOLUTION`.
    pub resolution: Option<Resolution>,
    /// `HDCP-LEVEL`.
    pub hdcp_level: Option<String>,
    /// `VIDEO` group id.
    pub video: Option<String>,
    /// `SCORE`.
    pub score: Option<f64>,
    /// `VIDEO-RANGE`.
    pub video_range: Option<String>,
    /// `URI`.
    pub uri: String,
    /// `URI`, resolved against the playlist's base URL.
    pub resolved_uri: String,
}

/// `TYPE` of `EXT-X-MEDIA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// An audio rendition.
    Audio,
    /// A video rendition.
    Video,
    /// A subtitles rendition.
    Subtitles,
    /// A closed-captions rendition (does not carry its own media, see [`Rendition::uri`]).
    ClosedCaptions,
}

/// `EXT-X-MEDIA`: an alternate audio/video/subtitle/closed-captions rendition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendition {
    /// `URI`; absent for closed-captions renditions and for renditions carried inside the
    /// variant's own segments (e.g. audio multiplexed with video).
    pub uri: Option<String>,
    /// `URI`, resolved against the playlist's base URL.
    pub resolved_uri: Option<String>,
    /// `LANGUAGE`.
    pub language: Option<String>,
    /// `ASSOC-LANGUAGE`.
    pub assoc_language: Option<String>,
    /// `NAME`.
    pub name: String,
    /// `STABLE-RENDITION-ID`.
    pub stable_rendition_id: Option<String>,
    /// `DEFAULT`; defaults to `false`.
    pub default: bool,
    /// `AUTOSELECT`; defaults to `false`.
    pub autoselect: bool,
    /// `FORCED`; defaults to `false` (only meaningful for `TYPE=SUBTITLES`).
    pub forced: bool,
    /// `INSTREAM-ID` (only meaningful for `TYPE=CLOSED-CAPTIONS`).
    pub instream_id: Option<String>,
    /// `CHARACTERISTICS`, split on comma.
    pub characteristics: Vec<String>,
    /// `CHANNELS`.
    pub channels: Option<String>,
}

/// `EXT-X-MEDIA` renditions, grouped by type and then by `GROUP-ID`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenditionGroups {
    /// `TYPE=AUDIO` groups.
    pub audio: HashMap<String, Vec<Rendition>>,
    /// `TYPE=VIDEO` groups.
    pub video: HashMap<String, Vec<Rendition>>,
    /// `TYPE=SUBTITLES` groups.
    pub subtitles: HashMap<String, Vec<Rendition>>,
    /// `TYPE=CLOSED-CAPTIONS` groups.
    pub closed_captions: HashMap<String, Vec<Rendition>>,
}

/// A value stashed by a caller-supplied custom tag handler into [`Playlist::custom`].
#[derive(Debug, Clone, PartialEq)]
pub enum CustomValue {
    /// The tag had no value (an empty tag).
    Empty,
    /// The tag's raw value string (for a value tag).
    Value(String),
    /// The tag's attribute list (for an attribute tag).
    Attributes(HashMap<String, String>),
}

/// A single media segment (§3.2 of the specification this crate implements).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    /// The segment's URI, exactly as it appeared (after variable substitution).
    pub uri: String,
    /// The segment's URI, resolved against the playlist's base URL.
    pub resolved_uri: String,
    /// `EXTINF` duration, in (fractional) seconds.
    pub duration: f64,
    /// `EXTINF` title, which may be empty.
    pub title: String,
    /// `EXT-X-BYTERANGE`, if present.
    pub byte_range: Option<ByteRange>,
    /// `EXT-X-BITRATE` carried forward from a preceding tag, only populated when the segment has
    /// no explicit byte range (see §4.4).
    pub bitrate: Option<u64>,
    /// Whether an `EXT-X-DISCONTINUITY` tag preceded this segment.
    pub is_discontinuity: bool,
    /// Whether an `EXT-X-GAP` tag preceded this segment.
    pub is_gap: bool,
    /// The encryption state in effect for this segment (carried forward from the most recent
    /// `EXT-X-KEY`).
    pub encryption: Option<Encryption>,
    /// The media initialization section in effect for this segment (carried forward from the
    /// most recent `EXT-X-MAP`).
    pub map: Option<MediaInitializationSection>,
    /// `EXT-X-PART` entries preceding this segment's URI line, in order.
    pub parts: Vec<PartialSegment>,
    /// The segment's program date-time, either declared via `EXT-X-PROGRAM-DATE-TIME` or
    /// extrapolated from the previous segment (§3.1 invariants).
    pub program_date_time_start: Option<DateTime>,
    /// `program_date_time_start + duration`.
    pub program_date_time_end: Option<DateTime>,
    /// The media sequence number of this segment.
    pub media_sequence: u64,
    /// The discontinuity sequence number in effect for this segment.
    pub discontinuity_sequence: u64,
    /// The offset, in seconds, from the start of the playlist to the start of this segment.
    pub start_time: f64,
    /// `start_time + duration`.
    pub end_time: f64,
}

//! Value-tag processors: tags whose body is a single bare value (§4.3.3 of the specification this
//! crate implements).

use super::{parse_f64, parse_u64};
use crate::error::Warning;
use crate::model::{ByteRange, Playlist, PlaylistType};
use crate::shared_state::SharedState;

/// `#EXT-X-VERSION:<n>`.
pub fn version(value: &str, playlist: &mut Playlist, _shared: &mut SharedState, warn: &mut dyn FnMut(Warning)) {
    if let Some(v) = parse_u64("EXT-X-VERSION", "value", value, warn) {
        playlist.version = Some(v);
    }
}

/// `#EXT-X-TARGETDURATION:<n>`.
pub fn target_duration(
    value: &str,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    if let Some(v) = parse_u64("EXT-X-TARGETDURATION", "value", value, warn) {
        playlist.target_duration = Some(v);
    }
}

/// `#EXT-X-MEDIA-SEQUENCE:<n>`.
pub fn media_sequence(
    value: &str,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    if let Some(v) = parse_u64("EXT-X-MEDIA-SEQUENCE", "value", value, warn) {
        playlist.media_sequence = v;
    }
}

/// `#EXT-X-DISCONTINUITY-SEQUENCE:<n>`.
pub fn discontinuity_sequence(
    value: &str,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    if let Some(v) = parse_u64("EXT-X-DISCONTINUITY-SEQUENCE", "value", value, warn) {
        playlist.discontinuity_sequence = v;
    }
}

/// `#EXT-X-PLAYLIST-TYPE:<VOD|EVENT>`.
pub fn playlist_type(
    value: &str,
    playlist: &mut Playlist,
    _shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    playlist.playlist_type = match value.trim() {
        "VOD" => Some(PlaylistType::Vod),
        "EVENT" => Some(PlaylistType::Event),
        other => {
            warn(Warning::UnsupportedEnumValue {
                tag: "EXT-X-PLAYLIST-TYPE".to_string(),
                attribute: "value".to_string(),
                value: other.to_string(),
            });
            None
        }
    };
}

/// `#EXTINF:<duration>[,<title>]`.
pub fn extinf(value: &str, _playlist: &mut Playlist, shared: &mut SharedState, warn: &mut dyn FnMut(Warning)) {
    let (duration_str, title) = match value.split_once(',') {
        Some((d, t)) => (d, t),
        None => (value, ""),
    };
    if let Some(duration) = parse_f64("EXTINF", "duration", duration_str, warn) {
        shared.current_segment.duration = duration;
    }
    shared.current_segment.title = title.to_string();
}

/// `#EXT-X-BYTERANGE:<length>[@<offset>]`.
pub fn byte_range(value: &str, playlist: &mut Playlist, shared: &mut SharedState, warn: &mut dyn FnMut(Warning)) {
    let (length_str, offset_str) = match value.split_once('@') {
        Some((l, o)) => (l, Some(o)),
        None => (value, None),
    };
    let Some(length) = parse_u64("EXT-X-BYTERANGE", "length", length_str, warn) else {
        return;
    };
    let start = match offset_str {
        Some(offset) => match parse_u64("EXT-X-BYTERANGE", "offset", offset, warn) {
            Some(v) => v,
            None => return,
        },
        None => match playlist.segments.last().and_then(|s| s.byte_range) {
            Some(previous) => previous.end + 1,
            None => {
                warn(Warning::FallbackUsed {
                    detail: "EXT-X-BYTERANGE had no offset and no previous segment byte range to continue from, using 0".to_string(),
                });
                0
            }
        },
    };
    if length == 0 {
        shared.current_segment.byte_range = Some(ByteRange { start, end: start });
        return;
    }
    shared.current_segment.byte_range = Some(ByteRange {
        start,
        end: start + length - 1,
    });
}

/// `#EXT-X-BITRATE:<kbps>`.
pub fn bitrate(value: &str, _playlist: &mut Playlist, shared: &mut SharedState, warn: &mut dyn FnMut(Warning)) {
    if let Some(v) = parse_u64("EXT-X-BITRATE", "value", value, warn) {
        shared.current_bitrate = Some(v);
    }
}

/// `#EXT-X-PROGRAM-DATE-TIME:<date-time>`.
pub fn program_date_time(
    value: &str,
    _playlist: &mut Playlist,
    shared: &mut SharedState,
    warn: &mut dyn FnMut(Warning),
) {
    match crate::date::parse(value.trim()) {
        Ok(date_time) => shared.current_segment.program_date_time_start = Some(date_time),
        Err(err) => warn(Warning::UnparsableValue {
            tag: "EXT-X-PROGRAM-DATE-TIME".to_string(),
            detail: err.to_string(),
        }),
    }
}

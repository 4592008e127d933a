//! Empty-tag processors: tags with no value or attributes, carrying only the fact of their own
//! presence.

use crate::model::Playlist;
use crate::shared_state::SharedState;

/// `#EXTM3U`.
pub fn m3u(playlist: &mut Playlist, _shared: &mut SharedState) {
    playlist.m3u = true;
}

/// `#EXT-X-INDEPENDENT-SEGMENTS`.
pub fn independent_segments(playlist: &mut Playlist, _shared: &mut SharedState) {
    playlist.independent_segments = true;
}

/// `#EXT-X-ENDLIST`.
pub fn end_list(playlist: &mut Playlist, _shared: &mut SharedState) {
    playlist.end_list = true;
}

/// `#EXT-X-I-FRAMES-ONLY`.
pub fn i_frames_only(playlist: &mut Playlist, _shared: &mut SharedState) {
    playlist.i_frames_only = true;
}

/// `#EXT-X-DISCONTINUITY`.
pub fn discontinuity(_playlist: &mut Playlist, shared: &mut SharedState) {
    shared.current_segment.is_discontinuity = true;
}

/// `#EXT-X-GAP`.
pub fn gap(_playlist: &mut Playlist, shared: &mut SharedState) {
    shared.current_segment.is_gap = true;
}

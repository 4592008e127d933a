//! Segment / variant assembly on a recognized URI line (§4.4).
//!
//! Tag processors only ever populate [`SharedState::current_segment`] /
//! [`SharedState::current_variant`]; it is [`assemble`] that decides, at each URI line, whether the
//! accumulated fields describe a media segment or a multivariant playlist's variant stream, commits
//! one to the growing [`Playlist`], and advances the running sequence counters.

use crate::config::ParserOptions;
use crate::error::Warning;
use crate::model::Playlist;
use crate::shared_state::SharedState;
use crate::variables::substitute;

/// Commits the accumulated segment or variant state to `playlist` for the URI line `uri`.
pub fn assemble(uri: String, playlist: &mut Playlist, shared: &mut SharedState, options: &mut ParserOptions) {
    (options.debug_callback)(format!("assembling uri line {uri:?}"));
    let uri = if shared.has_variables_for_substitution {
        substitute(&uri, &shared.variables, options.warn_callback.as_mut())
    } else {
        uri
    };
    let resolved_uri = crate::tags::resolve(&uri, &shared.base_url, options.warn_callback.as_mut());

    if shared.is_multivariant_playlist {
        let mut variant = shared.take_variant();
        variant.uri = uri;
        variant.resolved_uri = resolved_uri;
        playlist.variant_streams.push(variant);
        return;
    }

    if let Some(target_duration) = playlist.target_duration {
        if shared.current_segment.duration > target_duration as f64 {
            (options.warn_callback)(Warning::SegmentDurationExceedsTarget {
                duration: shared.current_segment.duration,
                target: target_duration,
            });
        }
    }

    let is_discontinuity = shared.current_segment.is_discontinuity;
    let duration = shared.current_segment.duration;

    let (mut segment, parts) = shared.take_segment();
    segment.encryption = shared.current_encryption.clone();
    segment.map = shared.current_map.clone();
    segment.uri = uri;
    segment.resolved_uri = resolved_uri;
    segment.parts = parts;
    if segment.byte_range.is_none() {
        segment.bitrate = shared.current_bitrate;
    }

    let prev_extrapolated_pdt = playlist.segments.last().and_then(|prev| {
        prev.program_date_time_start
            .map(|pdt| pdt.plus_millis((prev.duration * 1000.0) as i64))
    });

    match playlist.segments.last() {
        Some(prev) => {
            segment.media_sequence = prev.media_sequence + 1;
            segment.start_time = prev.end_time;
            segment.discontinuity_sequence = prev.discontinuity_sequence + u64::from(is_discontinuity);
        }
        None => {
            segment.start_time = shared.base_time;
            segment.media_sequence = playlist.media_sequence;
            segment.discontinuity_sequence = playlist.discontinuity_sequence;
        }
    }
    segment.end_time = segment.start_time + duration;

    if segment.program_date_time_start.is_none() {
        segment.program_date_time_start = prev_extrapolated_pdt;
    }
    segment.program_date_time_end = segment
        .program_date_time_start
        .map(|pdt| pdt.plus_millis((duration * 1000.0) as i64));

    playlist.segments.push(segment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserOptionsBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_time_offsets_only_the_first_segment_start_time() {
        let mut playlist = Playlist::default();
        let mut shared = SharedState::new(String::new(), 30.0, Default::default());
        let mut options = ParserOptionsBuilder::new().build();

        shared.current_segment.duration = 5.0;
        assemble("a.ts".to_string(), &mut playlist, &mut shared, &mut options);
        shared.current_segment.duration = 5.0;
        assemble("b.ts".to_string(), &mut playlist, &mut shared, &mut options);

        assert_eq!(30.0, playlist.segments[0].start_time);
        assert_eq!(35.0, playlist.segments[0].end_time);
        assert_eq!(35.0, playlist.segments[1].start_time);
        assert_eq!(40.0, playlist.segments[1].end_time);
    }

    #[test]
    fn first_segment_program_date_time_is_not_extrapolated_from_base_time() {
        let mut playlist = Playlist::default();
        let mut shared = SharedState::new(String::new(), 30.0, Default::default());
        let mut options = ParserOptionsBuilder::new().build();

        shared.current_segment.duration = 5.0;
        assemble("a.ts".to_string(), &mut playlist, &mut shared, &mut options);

        assert_eq!(None, playlist.segments[0].program_date_time_start);
    }
}

//! The two-mode parser façade (§4.6 of the specification this crate implements).
//!
//! [`Parser`] is the single public entry point, built once per caller with [`ParserOptions`] that
//! apply across every parse it performs, and driven in one of two ways:
//!
//! - [`Parser::parse_full`] consumes an entire playlist in one call.
//! - [`Parser::push`]/[`Parser::done`] consume a playlist incrementally as chunks arrive (e.g. over
//!   a network response body), with no requirement that a chunk align to a line boundary. The
//!   underlying [`Scanner`] and accumulating [`Playlist`]/[`SharedState`] are created lazily on the
//!   first [`Parser::push`] call and retained until [`Parser::done`] is called.
//!
//! Both modes dispatch every scanner event through the same [`registry::dispatch`] /
//! [`assembler::assemble`] pair, so the two modes are guaranteed to produce identical playlists for
//! the same input regardless of how it is chunked (see the scanner's own re-entrancy guarantee).

use crate::assembler;
use crate::config::{ParseOptions, ParserOptions};
use crate::model::Playlist;
use crate::registry::{self, Registry};
use crate::scanner::{ScanEvent, Scanner};
use crate::shared_state::SharedState;

/// State retained across [`Parser::push`] calls for one progressive parse.
struct ProgressiveState {
    scanner: Scanner,
    playlist: Playlist,
    shared: SharedState,
}

/// Parses HLS multivariant and media playlists (§2, §4.6).
///
/// One `Parser` may be reused for any number of [`Parser::parse_full`] calls, and for any number of
/// progressive parses performed in sequence via [`Parser::push`]/[`Parser::done`].
pub struct Parser {
    options: ParserOptions,
    registry: Registry,
    progressive: Option<ProgressiveState>,
}

impl Parser {
    /// Creates a new parser with the given options, applied to every parse performed with it.
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            registry: Registry::new(),
            progressive: None,
        }
    }

    /// Parses a complete playlist in one call.
    pub fn parse_full(&mut self, input: &str, parse_options: ParseOptions) -> Playlist {
        let mut scanner = Scanner::new();
        let mut playlist = Playlist::default();
        let mut shared = SharedState::new(
            parse_options.base_url,
            parse_options.base_time,
            parse_options.base_define,
        );
        let registry = &self.registry;
        let options = &mut self.options;
        scanner.feed_str(input, |event| {
            dispatch_event(event, registry, options, &mut playlist, &mut shared)
        });
        scanner.finish(|event| dispatch_event(event, registry, options, &mut playlist, &mut shared));
        playlist
    }

    /// Feeds one chunk of a progressive parse. The first call after construction, or after a
    /// preceding [`Parser::done`], starts a new parse and seeds it from `parse_options`; later
    /// calls append to the parse already in progress and ignore `parse_options` (the base URL,
    /// variable scope, and base time are fixed for the whole parse at its start, matching the
    /// one-`ParseOptions`-per-parse model of [`Parser::parse_full`]).
    pub fn push(&mut self, chunk: &str, parse_options: ParseOptions) {
        if self.progressive.is_none() {
            self.progressive = Some(ProgressiveState {
                scanner: Scanner::new(),
                playlist: Playlist::default(),
                shared: SharedState::new(
                    parse_options.base_url,
                    parse_options.base_time,
                    parse_options.base_define,
                ),
            });
        }
        let registry = &self.registry;
        let options = &mut self.options;
        let ProgressiveState {
            scanner,
            playlist,
            shared,
        } = self.progressive.as_mut().expect("just inserted above");
        scanner.feed_str(chunk, |event| dispatch_event(event, registry, options, playlist, shared));
    }

    /// Finishes the progressive parse started by [`Parser::push`], injecting the synthetic trailing
    /// newline, and returns the accumulated playlist. The next [`Parser::push`] call starts a new
    /// parse. Calling `done` without a preceding `push` returns an empty default playlist.
    pub fn done(&mut self) -> Playlist {
        let ProgressiveState {
            mut scanner,
            mut playlist,
            mut shared,
        } = self.progressive.take().unwrap_or_else(|| ProgressiveState {
            scanner: Scanner::new(),
            playlist: Playlist::default(),
            shared: SharedState::default(),
        });
        let registry = &self.registry;
        let options = &mut self.options;
        scanner.finish(|event| dispatch_event(event, registry, options, &mut playlist, &mut shared));
        playlist
    }
}

fn dispatch_event(
    event: ScanEvent,
    registry: &Registry,
    options: &mut ParserOptions,
    playlist: &mut Playlist,
    shared: &mut SharedState,
) {
    match event {
        ScanEvent::TagRecognized { name, raw_value } => {
            registry::dispatch(registry, &name, raw_value, playlist, shared, options)
        }
        ScanEvent::UriRecognized(uri) => assembler::assemble(uri, playlist, shared, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ParseOptionsBuilder, ParserOptionsBuilder};
    use pretty_assertions::assert_eq;

    const MINIMAL_VOD: &str = "#EXTM3U\n\
        #EXT-X-TARGETDURATION:10\n\
        #EXT-X-VERSION:3\n\
        #EXTINF:9.009,\n\
        first.ts\n\
        #EXTINF:9.009,\n\
        second.ts\n\
        #EXT-X-ENDLIST\n";

    #[test]
    fn parses_minimal_vod_playlist() {
        let mut parser = Parser::new(ParserOptionsBuilder::new().build());
        let playlist = parser.parse_full(MINIMAL_VOD, ParseOptionsBuilder::new().build());
        assert!(playlist.m3u);
        assert_eq!(Some(3), playlist.version);
        assert_eq!(Some(10), playlist.target_duration);
        assert!(playlist.end_list);
        assert_eq!(2, playlist.segments.len());
        assert_eq!("first.ts", playlist.segments[0].uri);
        assert_eq!(0, playlist.segments[0].media_sequence);
        assert_eq!(1, playlist.segments[1].media_sequence);
        assert_eq!(0.0, playlist.segments[0].start_time);
        assert_eq!(9.009, playlist.segments[0].end_time);
        assert_eq!(playlist.segments[0].end_time, playlist.segments[1].start_time);
        assert!((playlist.segments[1].end_time - 18.018).abs() < 1e-9);
    }

    #[test]
    fn discontinuity_increments_discontinuity_sequence_only_for_the_flagged_segment() {
        let input = "#EXTM3U\n#EXTINF:4,\na.ts\n#EXT-X-DISCONTINUITY\n#EXTINF:4,\nb.ts\n#EXTINF:4,\nc.ts\n";
        let mut parser = Parser::new(ParserOptionsBuilder::new().build());
        let playlist = parser.parse_full(input, ParseOptionsBuilder::new().build());
        assert_eq!(0, playlist.segments[0].discontinuity_sequence);
        assert_eq!(1, playlist.segments[1].discontinuity_sequence);
        assert_eq!(1, playlist.segments[2].discontinuity_sequence);
        assert!(!playlist.segments[0].is_discontinuity);
        assert!(playlist.segments[1].is_discontinuity);
        assert!(!playlist.segments[2].is_discontinuity);
    }

    #[test]
    fn multivariant_playlist_populates_variant_streams_not_segments() {
        let input = "#EXTM3U\n\
            #EXT-X-STREAM-INF:BANDWIDTH=1200000,CODECS=\"avc1.4d401e,mp4a.40.2\"\n\
            low.m3u8\n\
            #EXT-X-STREAM-INF:BANDWIDTH=2400000\n\
            high.m3u8\n";
        let mut parser = Parser::new(ParserOptionsBuilder::new().build());
        let playlist = parser.parse_full(input, ParseOptionsBuilder::new().build());
        assert!(playlist.segments.is_empty());
        assert_eq!(2, playlist.variant_streams.len());
        assert_eq!("low.m3u8", playlist.variant_streams[0].uri);
        assert_eq!(1_200_000, playlist.variant_streams[0].bandwidth);
        assert_eq!(
            vec!["avc1.4d401e".to_string(), "mp4a.40.2".to_string()],
            playlist.variant_streams[0].codecs
        );
        assert_eq!(2_400_000, playlist.variant_streams[1].bandwidth);
    }

    #[test]
    fn byte_range_with_no_offset_continues_from_previous_segment() {
        let input = "#EXTM3U\n\
            #EXTINF:4,\n#EXT-X-BYTERANGE:1000@0\nfmp4.mp4\n\
            #EXTINF:4,\n#EXT-X-BYTERANGE:500\nfmp4.mp4\n";
        let mut parser = Parser::new(ParserOptionsBuilder::new().build());
        let playlist = parser.parse_full(input, ParseOptionsBuilder::new().build());
        let second = playlist.segments[1].byte_range.unwrap();
        assert_eq!(1000, second.start);
        assert_eq!(1499, second.end);
    }

    #[test]
    fn variable_substitution_applies_to_uri_and_attribute_values() {
        let input = "#EXTM3U\n\
            #EXT-X-DEFINE:NAME=\"host\",VALUE=\"https://cdn.example\"\n\
            #EXTINF:4,\n{$host}/a.ts\n";
        let mut parser = Parser::new(ParserOptionsBuilder::new().build());
        let playlist = parser.parse_full(input, ParseOptionsBuilder::new().build());
        assert_eq!("https://cdn.example/a.ts", playlist.segments[0].uri);
    }

    #[test]
    fn progressive_push_done_matches_full_parse() {
        let mut full_parser = Parser::new(ParserOptionsBuilder::new().build());
        let full = full_parser.parse_full(MINIMAL_VOD, ParseOptionsBuilder::new().build());

        let mut progressive_parser = Parser::new(ParserOptionsBuilder::new().build());
        for chunk in [
            "#EXTM3U\n#EXT-X-TARGETDURATION:10\n",
            "#EXT-X-VERSION:3\n#EXTINF:9.0",
            "09,\nfirst.ts\n#EXTINF:9.009,\nsecond.ts\n",
            "#EXT-X-ENDLIST\n",
        ] {
            progressive_parser.push(chunk, ParseOptionsBuilder::new().build());
        }
        let progressive = progressive_parser.done();

        assert_eq!(full, progressive);
    }

    #[test]
    fn unsupported_tag_is_reported_but_does_not_abort_the_parse() {
        let input = "#EXTM3U\n#EXT-X-SOME-UNKNOWN-TAG:1\n#EXTINF:4,\na.ts\n";
        let mut warnings = Vec::new();
        let mut parser = Parser::new(
            ParserOptionsBuilder::new()
                .with_warn_callback(|w| warnings.push(w))
                .build(),
        );
        let playlist = parser.parse_full(input, ParseOptionsBuilder::new().build());
        assert_eq!(1, playlist.segments.len());
        assert_eq!(1, warnings.len());
    }
}

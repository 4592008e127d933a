#![warn(missing_docs)]

//! # hls-playlist-core
//!
//! A streaming, event-driven core for parsing HLS multivariant and media playlists
//! ([draft-pantos-hls-rfc8216bis]). Rather than handing back a lazy line-by-line reader, this crate
//! runs a tag-processor dispatch loop over a character scanner and hands back one fully assembled
//! [`model::Playlist`] aggregate — built incrementally, tag by tag, the same way a player's own
//! manifest loader would build one up while downloading it.
//!
//! The core is organized in layers, each with a single job:
//!
//! - [`scanner`]: turns raw characters into tag/URI line events, one character at a time, re-entrant
//!   across chunk boundaries so the same events come out however the input is chunked.
//! - [`attribute`]: lexes an attribute-list tag's body into a `key → value` map, respecting quoted
//!   strings that may themselves contain commas and equals signs.
//! - [`registry`]: dispatches a recognized tag to the processor registered for it, in a fixed
//!   precedence order, never failing the whole parse over one bad tag.
//! - [`tags`]: one processor per known tag, each mutating [`model::Playlist`] or
//!   [`shared_state::SharedState`] directly rather than building its own intermediate type.
//! - [`assembler`]: commits the state accumulated since the last URI line into a segment or variant
//!   stream, maintaining the running sequence counters and timing invariants.
//! - [`variables`]: `{$NAME}` substitution and RFC 3986 URI resolution.
//! - [`parser`]: the public façade tying the above together, in both a whole-input and a
//!   progressive push/done mode.
//!
//! This crate is deliberately lenient: a malformed or unrecognized tag is reported through
//! [`config::ParserOptions::warn_callback`] and skipped, never aborting the parse. The philosophy is
//! the same one a permissive player would apply — don't get in the way of extracting meaningful
//! information from input a real client might still accept. For example, the
//! [EXT-X-TARGETDURATION] rounding requirement is tracked purely as an informational warning
//! ([`error::Warning::SegmentDurationExceedsTarget`]) rather than a hard validation failure.
//!
//! # Usage
//!
//! ```
//! use hls_playlist_core::config::{ParseOptionsBuilder, ParserOptionsBuilder};
//! use hls_playlist_core::parser::Parser;
//!
//! const EXAMPLE_MANIFEST: &str = "#EXTM3U\n\
//!     #EXT-X-TARGETDURATION:10\n\
//!     #EXT-X-VERSION:3\n\
//!     #EXTINF:9.009,\n\
//!     first.ts\n\
//!     #EXTINF:9.009,\n\
//!     second.ts\n\
//!     #EXTINF:3.003,\n\
//!     third.ts\n\
//!     #EXT-X-ENDLIST\n";
//!
//! let mut parser = Parser::new(ParserOptionsBuilder::new().build());
//! let playlist = parser.parse_full(EXAMPLE_MANIFEST, ParseOptionsBuilder::new().build());
//!
//! assert_eq!(Some(3), playlist.version);
//! assert_eq!(3, playlist.segments.len());
//! assert_eq!("first.ts", playlist.segments[0].uri);
//! assert!(playlist.end_list);
//! ```
//!
//! A playlist that can only be fetched incrementally (e.g. a streamed HTTP response body) is
//! parsed the same way, one chunk at a time:
//!
//! ```
//! use hls_playlist_core::config::{ParseOptionsBuilder, ParserOptionsBuilder};
//! use hls_playlist_core::parser::Parser;
//!
//! let mut parser = Parser::new(ParserOptionsBuilder::new().build());
//! parser.push("#EXTM3U\n#EXT-X-TARGETDURATION:6\n", ParseOptionsBuilder::new().build());
//! parser.push("#EXTINF:6.0,\na.ts\n#EXT-X-ENDLIST\n", ParseOptionsBuilder::new().build());
//! let playlist = parser.done();
//!
//! assert_eq!(1, playlist.segments.len());
//! assert!(playlist.end_list);
//! ```
//!
//! Diagnostics for malformed input never abort a parse; they are reported through the warn
//! callback instead:
//!
//! ```
//! use hls_playlist_core::config::{ParseOptionsBuilder, ParserOptionsBuilder};
//! use hls_playlist_core::parser::Parser;
//!
//! let mut warnings = Vec::new();
//! let mut parser = Parser::new(
//!     ParserOptionsBuilder::new()
//!         .with_warn_callback(|w| warnings.push(w.to_string()))
//!         .build(),
//! );
//! let playlist = parser.parse_full(
//!     "#EXTM3U\n#EXT-X-SOME-FUTURE-TAG:1\n#EXTINF:4,\na.ts\n",
//!     ParseOptionsBuilder::new().build(),
//! );
//!
//! assert_eq!(1, playlist.segments.len());
//! assert_eq!(1, warnings.len());
//! ```
//!
//! [draft-pantos-hls-rfc8216bis]: https://datatracker.ietf.org/doc/draft-pantos-hls-rfc8216bis/
//! [EXT-X-TARGETDURATION]: https://datatracker.ietf.org/doc/html/draft-pantos-hls-rfc8216bis-17#section-4.4.3.1

pub mod assembler;
pub mod attribute;
pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod parser;
pub mod registry;
pub mod scanner;
pub mod shared_state;
pub mod tags;
pub mod variables;

pub use config::{ParseOptions, ParserOptions};
pub use model::Playlist;
pub use parser::Parser;

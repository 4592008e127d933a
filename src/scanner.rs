//! The character scanner (§4.1 of the specification this crate implements).
//!
//! A single-character-at-a-time state machine that turns raw input characters into a sequence of
//! structural events: tag recognitions and URI lines. It does not know anything about which HLS
//! tags are valid, what an attribute list looks like, or how to interpret a value — that is the
//! job of [`crate::attribute`] and [`crate::registry`]. The scanner's only concerns are line
//! boundaries and the `#EXT` prefix that distinguishes a tag line from a comment.
//!
//! The state machine is re-entrant: [`Scanner::feed_char`] may be called once per character across
//! any chunking of the input (one call for the whole input, or many calls for one character each,
//! or anything in between) and produces the same sequence of events either way, because all
//! progress is carried in `self` between calls.

/// A structural event produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// A tag line was recognized (a line beginning with `#EXT`).
    TagRecognized {
        /// The tag name, with the leading `#` stripped (e.g. `EXT-X-VERSION`).
        name: String,
        /// Everything after the tag's `:` and before the line break, or `None` if the tag had no
        /// `:` (an "empty" tag, such as `#EXT-X-ENDLIST`).
        raw_value: Option<String>,
    },
    /// A URI line was recognized: any non-blank line that does not start with `#`.
    UriRecognized(String),
}

/// Strips a single trailing `\r`, so a line terminated by `\r\n` is treated the same as one
/// terminated by a bare `\n`.
fn strip_trailing_cr(mut s: String) -> String {
    if s.ends_with('\r') {
        s.pop();
    }
    s
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    /// S0: start of input, or just after a newline.
    LineStart,
    /// S1: accumulating characters after a `#`, deciding tag vs. comment.
    TagStartMaybe { buf: String },
    /// S2: confirmed `#EXT` prefix, accumulating the tag name before `:` or newline.
    TagName { buf: String },
    /// Consuming the remainder of a comment line (content discarded).
    Comment,
    /// S3: after the tag's `:`, accumulating the raw body before the newline.
    TagBody { name: String, buf: String },
    /// S4: accumulating a URI line.
    UriAccumulate { buf: String },
}

/// The scanner state machine.
///
/// Create one with [`Scanner::new`], feed it characters with [`Scanner::feed_char`] (or a whole
/// chunk with [`Scanner::feed_str`]), and call [`Scanner::finish`] once at the true end of input to
/// flush a final line that was not terminated by a trailing newline (the synthetic trailing
/// newline described in §4.1 and §4.6).
#[derive(Debug, Clone, PartialEq)]
pub struct Scanner {
    state: State,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Creates a new scanner, starting at line-start.
    pub fn new() -> Self {
        Self {
            state: State::LineStart,
        }
    }

    /// Feeds an entire string chunk through the scanner, one character at a time, invoking
    /// `on_event` for every event produced. Chunk boundaries never need special handling: if a
    /// chunk ends mid-line, the accumulator is retained in `self` until the next `feed_str` (or
    /// `feed_char`) call.
    pub fn feed_str(&mut self, chunk: &str, mut on_event: impl FnMut(ScanEvent)) {
        for c in chunk.chars() {
            if let Some(event) = self.feed_char(c) {
                on_event(event);
            }
        }
    }

    /// Feeds a single character through the scanner, returning at most one event.
    pub fn feed_char(&mut self, c: char) -> Option<ScanEvent> {
        match &mut self.state {
            State::LineStart => {
                if c == '#' {
                    self.state = State::TagStartMaybe { buf: String::new() };
                    None
                } else if c == '\n' {
                    None
                } else if c.is_whitespace() {
                    None
                } else {
                    self.state = State::UriAccumulate {
                        buf: String::from(c),
                    };
                    None
                }
            }
            State::TagStartMaybe { buf } => {
                if c == '\n' {
                    self.state = State::LineStart;
                    return None;
                }
                buf.push(c);
                if buf == "EXT" {
                    let buf = std::mem::take(buf);
                    self.state = State::TagName { buf };
                } else if !"EXT".starts_with(buf.as_str()) {
                    self.state = State::Comment;
                }
                None
            }
            State::Comment => {
                if c == '\n' {
                    self.state = State::LineStart;
                }
                None
            }
            State::TagName { buf } => {
                if c == ':' {
                    let name = std::mem::take(buf);
                    self.state = State::TagBody {
                        name,
                        buf: String::new(),
                    };
                    None
                } else if c == '\n' {
                    let name = strip_trailing_cr(std::mem::take(buf));
                    self.state = State::LineStart;
                    Some(ScanEvent::TagRecognized {
                        name,
                        raw_value: None,
                    })
                } else {
                    buf.push(c);
                    None
                }
            }
            State::TagBody { name, buf } => {
                if c == '\n' {
                    let name = std::mem::take(name);
                    let raw_value = Some(strip_trailing_cr(std::mem::take(buf)));
                    self.state = State::LineStart;
                    Some(ScanEvent::TagRecognized { name, raw_value })
                } else {
                    buf.push(c);
                    None
                }
            }
            State::UriAccumulate { buf } => {
                if c == '\n' {
                    let line = std::mem::take(buf);
                    self.state = State::LineStart;
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(ScanEvent::UriRecognized(trimmed.to_string()))
                    }
                } else {
                    buf.push(c);
                    None
                }
            }
        }
    }

    /// Injects the synthetic trailing newline described in §4.1/§4.6, flushing any line that was
    /// not terminated by a real newline, then resets to [`State::LineStart`].
    pub fn finish(&mut self, mut on_event: impl FnMut(ScanEvent)) {
        if let Some(event) = self.feed_char('\n') {
            on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan_all(input: &str) -> Vec<ScanEvent> {
        let mut scanner = Scanner::new();
        let mut events = Vec::new();
        scanner.feed_str(input, |e| events.push(e));
        scanner.finish(|e| events.push(e));
        events
    }

    #[test]
    fn recognizes_empty_tag() {
        let events = scan_all("#EXT-X-ENDLIST\n");
        assert_eq!(
            vec![ScanEvent::TagRecognized {
                name: "EXT-X-ENDLIST".to_string(),
                raw_value: None
            }],
            events
        );
    }

    #[test]
    fn recognizes_value_tag() {
        let events = scan_all("#EXT-X-TARGETDURATION:6\n");
        assert_eq!(
            vec![ScanEvent::TagRecognized {
                name: "EXT-X-TARGETDURATION".to_string(),
                raw_value: Some("6".to_string())
            }],
            events
        );
    }

    #[test]
    fn recognizes_uri_line() {
        let events = scan_all("a.ts\n");
        assert_eq!(vec![ScanEvent::UriRecognized("a.ts".to_string())], events);
    }

    #[test]
    fn skips_comment_and_blank_lines() {
        let events = scan_all("# just a comment\n\n#EXTM3U\n");
        assert_eq!(
            vec![ScanEvent::TagRecognized {
                name: "EXTM3U".to_string(),
                raw_value: None
            }],
            events
        );
    }

    #[test]
    fn quoted_comma_does_not_break_tag_body_accumulation() {
        let events = scan_all(
            r#"#EXT-X-STREAM-INF:BANDWIDTH=1200000,CODECS="avc1.4d401e,mp4a.40.2""#.to_string()
                + "\n"
                + "low.m3u8\n",
        );
        assert_eq!(2, events.len());
        match &events[0] {
            ScanEvent::TagRecognized { name, raw_value } => {
                assert_eq!("EXT-X-STREAM-INF", name);
                assert_eq!(
                    Some(r#"BANDWIDTH=1200000,CODECS="avc1.4d401e,mp4a.40.2""#.to_string()),
                    *raw_value
                );
            }
            other => panic!("expected tag event, got {other:?}"),
        }
    }

    #[test]
    fn trailing_newline_is_synthesized_at_end_of_input() {
        let events = scan_all("a.ts");
        assert_eq!(vec![ScanEvent::UriRecognized("a.ts".to_string())], events);
    }

    #[test]
    fn chunking_does_not_change_result() {
        let input = "#EXTM3U\n#EXT-X-TARGETDURATION:6\n#EXTINF:5.0,\na.ts\n#EXT-X-ENDLIST\n";
        let whole = scan_all(input);
        for chunk_size in [1usize, 3, 7, 1024] {
            let mut scanner = Scanner::new();
            let mut events = Vec::new();
            for chunk in input
                .as_bytes()
                .chunks(chunk_size)
                .map(|c| std::str::from_utf8(c).unwrap())
            {
                scanner.feed_str(chunk, |e| events.push(e));
            }
            scanner.finish(|e| events.push(e));
            assert_eq!(whole, events, "chunk_size={chunk_size}");
        }
    }

    #[test]
    fn crlf_terminated_empty_tag_is_recognized() {
        let events = scan_all("#EXT-X-ENDLIST\r\n");
        assert_eq!(
            vec![ScanEvent::TagRecognized {
                name: "EXT-X-ENDLIST".to_string(),
                raw_value: None
            }],
            events
        );
    }

    #[test]
    fn crlf_terminated_value_tag_has_no_trailing_cr() {
        let events = scan_all("#EXTINF:5.0,title\r\n");
        assert_eq!(
            vec![ScanEvent::TagRecognized {
                name: "EXTINF".to_string(),
                raw_value: Some("5.0,title".to_string())
            }],
            events
        );
    }

    #[test]
    fn crlf_terminated_uri_line_has_no_trailing_cr() {
        let events = scan_all("a.ts\r\n");
        assert_eq!(vec![ScanEvent::UriRecognized("a.ts".to_string())], events);
    }
}

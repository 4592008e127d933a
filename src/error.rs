//! Error and diagnostic types exposed by the crate.
//!
//! Per the design of the parser (see the crate-level documentation), a malformed or unrecognized
//! tag never aborts a parse. Defects encountered while processing the input are instead reported
//! through [`crate::config::ParserOptions::warn_callback`] as a [`Warning`]. The types in this
//! module that return a `Result` (date parsing, number parsing, attribute-list lexing) are small,
//! local parsing helpers; their errors are always caught by the caller and converted into a
//! [`Warning`] rather than propagated to the library's own caller.

use std::fmt::{Display, Formatter};

/// A single recoverable diagnostic raised while parsing a playlist.
///
/// This enumerates the nine categories of §7 of the specification this crate implements. Every
/// variant is reported through the warn callback and never causes the parse itself to fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A tag was encountered that has no processor registered for it (and is not present in the
    /// custom tag map either).
    UnsupportedTag {
        /// The tag name (without the leading `#EXT` prefix removed; e.g. `EXT-X-FOO`).
        tag: String,
    },
    /// A tag present in [`crate::config::ParserOptions::ignore_tags`] was skipped.
    IgnoredTag {
        /// The tag name.
        tag: String,
    },
    /// A value-tag processor was dispatched but the value was `None` after
    /// [`crate::config::ParserOptions::transform_tag_value`] ran (or no value was present at
    /// all).
    MissingTagValue {
        /// The tag name.
        tag: String,
    },
    /// An attribute-tag processor required an attribute that was not present in the attribute
    /// list (after variable substitution).
    MissingRequiredAttribute {
        /// The tag name.
        tag: String,
        /// The missing attribute's key.
        attribute: String,
    },
    /// A tag value or attribute could not be coerced to the type the processor expected.
    UnparsableValue {
        /// The tag name.
        tag: String,
        /// Human-readable detail of what failed to parse.
        detail: String,
    },
    /// An enumerated attribute or value held a string that is not one of the known enumeration
    /// members.
    UnsupportedEnumValue {
        /// The tag name.
        tag: String,
        /// The attribute (or value position) holding the unrecognized enumeration member.
        attribute: String,
        /// The unrecognized value.
        value: String,
    },
    /// A default value was substituted for one that was missing or invalid.
    FallbackUsed {
        /// Human-readable detail of the fallback that was applied.
        detail: String,
    },
    /// A URI (segment URI or an attribute carrying a URI) could not be resolved against the base
    /// URL; the raw, unresolved value was retained instead.
    UriResolutionFailed {
        /// The URI that failed to resolve.
        uri: String,
    },
    /// A `{$NAME}` variable reference had no definition in scope; the literal text was left
    /// unsubstituted.
    MissingVariable {
        /// The variable name (without the `{$` `}` delimiters).
        name: String,
    },
    /// A media segment's `EXTINF` duration exceeded the playlist's `EXT-X-TARGETDURATION`.
    ///
    /// This is purely informational; the specification explicitly permits players to tolerate
    /// this (see the crate-level documentation's discussion of lenient parsing).
    SegmentDurationExceedsTarget {
        /// The segment's declared duration, in seconds.
        duration: f64,
        /// The playlist's target duration, in seconds.
        target: u64,
    },
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedTag { tag } => write!(f, "unsupported tag {tag}, skipping"),
            Self::IgnoredTag { tag } => write!(f, "tag {tag} is in the ignore list, skipping"),
            Self::MissingTagValue { tag } => write!(f, "tag {tag} had no value, skipping"),
            Self::MissingRequiredAttribute { tag, attribute } => {
                write!(f, "tag {tag} is missing required attribute {attribute}, skipping")
            }
            Self::UnparsableValue { tag, detail } => {
                write!(f, "tag {tag} had an unparsable value: {detail}")
            }
            Self::UnsupportedEnumValue {
                tag,
                attribute,
                value,
            } => write!(
                f,
                "tag {tag} attribute {attribute} had unrecognized enumerated value {value}"
            ),
            Self::FallbackUsed { detail } => write!(f, "fallback value used: {detail}"),
            Self::UriResolutionFailed { uri } => {
                write!(f, "could not resolve uri {uri} against base url, using raw value")
            }
            Self::MissingVariable { name } => {
                write!(f, "variable {{${name}}} is not defined, leaving literal")
            }
            Self::SegmentDurationExceedsTarget { duration, target } => write!(
                f,
                "segment duration {duration} exceeds target duration {target}"
            ),
        }
    }
}

/// Error experienced while lexing an attribute-list tag value (see §4.2 of the specification).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeListParsingError {
    /// The input ended while still reading an attribute name.
    UnexpectedEndOfLineReadingName,
    /// The input ended while still inside a quoted string value.
    UnterminatedQuotedString,
    /// An attribute name was empty (e.g. `,=VALUE` or a stray leading comma).
    EmptyAttributeName,
}

impl Display for AttributeListParsingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfLineReadingName => {
                write!(f, "attribute list ended unexpectedly while reading a name")
            }
            Self::UnterminatedQuotedString => {
                write!(f, "attribute list had an unterminated quoted string")
            }
            Self::EmptyAttributeName => write!(f, "attribute list had an empty attribute name"),
        }
    }
}

/// Error experienced while parsing a [`crate::date::DateTime`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateTimeSyntaxError {
    /// The input was not valid UTF-8.
    InvalidUtf8,
    /// The input ended before a complete date-time could be read.
    UnexpectedEndOfInput,
    /// A character was found where a specific delimiter (`-`, `:`, `T`) was expected.
    UnexpectedCharacter,
    /// The `T` (or `t`) date/time separator was missing.
    InvalidDateTimeSeparator,
    /// The seconds component could not be parsed as a floating point number.
    InvalidSecondsValue,
    /// Neither `Z` nor a `+HH:MM`/`-HH:MM` offset followed the seconds component.
    MissingTimezone,
}

impl Display for DateTimeSyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUtf8 => write!(f, "date-time was not valid utf-8"),
            Self::UnexpectedEndOfInput => write!(f, "date-time ended unexpectedly"),
            Self::UnexpectedCharacter => write!(f, "date-time had an unexpected character"),
            Self::InvalidDateTimeSeparator => write!(f, "date-time was missing the 'T' separator"),
            Self::InvalidSecondsValue => write!(f, "date-time had an invalid seconds component"),
            Self::MissingTimezone => write!(f, "date-time was missing a timezone"),
        }
    }
}

/// Error experienced while parsing a decimal integer or floating point number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseNumberError;

impl Display for ParseNumberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not parse value as a number")
    }
}

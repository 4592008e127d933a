//! One module per known HLS tag (§6.1 of the specification this crate implements), grouped by
//! shape: [`empty`] and [`value`] hold every empty-tag and value-tag processor as a plain
//! function each, while every attribute tag gets its own module exposing a `PROCESSOR` constant
//! of type [`crate::registry::AttributeTagProcessor`] — attribute tags carry enough
//! tag-specific parsing (enumerations, nested structures, required-attribute sets) to earn their
//! own file, the same granularity the tag processors this crate is modeled on use.

pub mod empty;
pub mod value;

pub mod content_steering;
pub mod daterange;
pub mod define;
pub mod i_frame_stream_inf;
pub mod key;
pub mod map;
pub mod media;
pub mod part;
pub mod part_inf;
pub mod preload_hint;
pub mod rendition_report;
pub mod server_control;
pub mod session_data;
pub mod session_key;
pub mod skip;
pub mod start;
pub mod stream_inf;

/// Parses a decimal unsigned integer attribute value, reporting [`crate::error::Warning::UnparsableValue`]
/// through `warn` on failure rather than returning a `Result` the caller would have to thread
/// through.
pub(crate) fn parse_u64(
    tag: &str,
    attribute: &str,
    value: &str,
    warn: &mut dyn FnMut(crate::error::Warning),
) -> Option<u64> {
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn(crate::error::Warning::UnparsableValue {
                tag: tag.to_string(),
                detail: format!("attribute {attribute} was not a valid integer: {value}"),
            });
            None
        }
    }
}

/// Parses a floating point attribute value, reporting [`crate::error::Warning::UnparsableValue`]
/// through `warn` on failure.
pub(crate) fn parse_f64(
    tag: &str,
    attribute: &str,
    value: &str,
    warn: &mut dyn FnMut(crate::error::Warning),
) -> Option<f64> {
    match fast_float2::parse(value.trim()) {
        Ok(v) => Some(v),
        Err(_) => {
            warn(crate::error::Warning::UnparsableValue {
                tag: tag.to_string(),
                detail: format!("attribute {attribute} was not a valid number: {value}"),
            });
            None
        }
    }
}

/// Parses a `YES`/`NO` enumerated boolean attribute, defaulting to `false` when absent.
pub(crate) fn parse_bool_attribute(attributes: &std::collections::HashMap<String, String>, key: &str) -> bool {
    attributes.get(key).map(String::as_str) == Some("YES")
}

/// Splits a `CODECS`-style comma-separated attribute value into its component strings, skipping
/// empty entries.
pub(crate) fn split_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a `<width>x<height>` resolution attribute value.
pub(crate) fn parse_resolution(
    tag: &str,
    value: &str,
    warn: &mut dyn FnMut(crate::error::Warning),
) -> Option<crate::model::Resolution> {
    let mut split = value.splitn(2, 'x');
    let (Some(width_str), Some(height_str)) = (split.next(), split.next()) else {
        warn(crate::error::Warning::UnparsableValue {
            tag: tag.to_string(),
            detail: format!("RESOLUTION was not of the form <width>x<height>: {value}"),
        });
        return None;
    };
    match (width_str.trim().parse(), height_str.trim().parse()) {
        (Ok(width), Ok(height)) => Some(crate::model::Resolution { width, height }),
        _ => {
            warn(crate::error::Warning::UnparsableValue {
                tag: tag.to_string(),
                detail: format!("RESOLUTION dimensions were not valid integers: {value}"),
            });
            None
        }
    }
}

/// Parses a `0x`/`0X`-prefixed hexadecimal-sequence attribute value into its raw bytes.
pub(crate) fn parse_hex_sequence(
    tag: &str,
    attribute: &str,
    value: &str,
    warn: &mut dyn FnMut(crate::error::Warning),
) -> Option<Vec<u8>> {
    let digits = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X"));
    let Some(digits) = digits else {
        warn(crate::error::Warning::UnparsableValue {
            tag: tag.to_string(),
            detail: format!("attribute {attribute} was not a valid hexadecimal sequence: {value}"),
        });
        return None;
    };
    if digits.is_empty() || digits.len() % 2 != 0 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        warn(crate::error::Warning::UnparsableValue {
            tag: tag.to_string(),
            detail: format!("attribute {attribute} was not a valid hexadecimal sequence: {value}"),
        });
        return None;
    }
    let bytes = (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).unwrap())
        .collect();
    Some(bytes)
}

/// Resolves a URI attribute value against the playlist's base URL, falling back to the raw value
/// and reporting [`crate::error::Warning::UriResolutionFailed`] when resolution fails.
pub(crate) fn resolve(
    uri: &str,
    base_url: &str,
    warn: &mut dyn FnMut(crate::error::Warning),
) -> String {
    match crate::variables::resolve_uri(uri, base_url) {
        Some(resolved) => resolved,
        None => {
            if !base_url.is_empty() {
                warn(crate::error::Warning::UriResolutionFailed { uri: uri.to_string() });
            }
            uri.to_string()
        }
    }
}

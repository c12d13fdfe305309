//! The provider's embedded-epoch date format.
//!
//! Timestamps arrive as `/Date(1518787726000+0100)/`: milliseconds since the
//! Unix epoch followed by a textual offset suffix. The suffix is unreliable
//! upstream (it does not track the actual zone of the instant), so decoding
//! ignores it and exposes every instant in the provider's fixed `+01:00`
//! offset — the same constant the encoder writes. This is a documented
//! upstream inconsistency, not something to correct silently; during CEST
//! the exposed wall-clock is an hour off provider-local time.

use chrono::{DateTime, FixedOffset};

/// The fixed offset used for every decoded and encoded instant.
pub fn provider_offset() -> FixedOffset {
    FixedOffset::east_opt(3600).expect("+01:00 is a valid offset")
}

/// Decodes a `/Date(<millis>[+-]<offset>)/` string.
///
/// Extraction is tolerant: the leading digit run after the `/Date(` marker
/// is taken as milliseconds and everything from the first sign character on
/// is discarded. Malformed input yields `None` rather than an error — the
/// caller drops such records.
pub fn decode(s: &str) -> Option<DateTime<FixedOffset>> {
    let rest = s.strip_prefix("/Date(").unwrap_or(s);
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let millis: i64 = rest[..end].parse().ok()?;
    Some(DateTime::from_timestamp_millis(millis)?.with_timezone(&provider_offset()))
}

/// Convenience for optional fields: absent input stays absent.
pub fn decode_opt(s: Option<&str>) -> Option<DateTime<FixedOffset>> {
    s.and_then(decode)
}

/// Encodes an instant back into the provider format.
///
/// The offset is always rendered as the literal `+0100` regardless of the
/// instant's own offset, matching the provider convention. Consequently
/// `encode(decode(x))` is not bit-for-bit `x`, but the millisecond count
/// always survives.
pub fn encode(t: DateTime<FixedOffset>) -> String {
    format!("/Date({}+0100)/", t.timestamp_millis())
}

//! Flat key/value input: `Name='John Doe';Count=5;When="25-01-2026"`

use super::types::{CandidateValueSet, InputError, InputResult};

/// Parse `;`-separated `key=value` pairs.
///
/// The first `=` splits key from value. Surrounding whitespace is trimmed and
/// a matching pair of single or double quotes around the value is removed.
/// Empty segments are skipped; a later duplicate key replaces an earlier one.
pub fn parse_kv(input: &str) -> InputResult<CandidateValueSet> {
    let mut values = CandidateValueSet::new();

    for (index, segment) in input.split(';').enumerate() {
        let pair = segment.trim();
        if pair.is_empty() {
            continue;
        }

        let malformed = |reason: &'static str| InputError::MalformedKeyValuePair {
            position: index + 1,
            segment: pair.to_string(),
            reason,
        };

        let (key, value) = pair.split_once('=').ok_or_else(|| malformed("missing '='"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed("empty key"));
        }

        values.insert(key, unquote(value.trim()));
    }

    tracing::debug!(pairs = values.len(), "Key/value input parsed");
    Ok(values)
}

fn unquote(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

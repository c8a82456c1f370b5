//! Placeholder and explicit cast detection over raw query text.
//!
//! Matches `?` optionally followed by `::` markers and a type word, e.g.
//! `?`, `?::text`, `?::INT8`. No SQL parsing happens here: every `?` in the
//! text is a placeholder and anything else is ignored. An annotation the
//! catalog does not know falls back to `None` (implicit typing), never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::{debug, trace};

use crate::datatype::catalog;
use crate::datatype::mapper::native_to_canonical;
use crate::types::CanonicalType;

// Only the word after the `::` markers is captured; markers may repeat or be absent.
static PLACEHOLDER_WITH_CAST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\?(?:::)*([A-Za-z_][A-Za-z0-9_]*)?").expect("placeholder pattern is a valid regex")
});

/// One `?` occurrence and whatever annotation followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch {
    /// Byte span of the placeholder including its annotation.
    pub span: Range<usize>,
    /// Raw annotation word as written, if any.
    pub annotation: Option<String>,
    /// Recognized explicit cast.
    pub cast: Option<CanonicalType>,
}

impl PlaceholderMatch {
    /// True when text after the `?` was consumed (markers and/or a word).
    pub fn has_suffix(&self) -> bool {
        self.span.len() > 1
    }

    /// Normalized catalog name of a recognized annotation.
    pub fn native_name(&self) -> Option<String> {
        self.cast?;
        self.annotation.as_deref().map(normalize_annotation)
    }
}

#[inline]
fn normalize_annotation(word: &str) -> String {
    word.trim().to_ascii_lowercase()
}

fn resolve_annotation(word: &str) -> Option<CanonicalType> {
    let name = normalize_annotation(word);
    if catalog::is_supported(&name) {
        native_to_canonical(&name)
    } else {
        trace!("scan: unsupported cast annotation '{}', using implicit typing", word);
        None
    }
}

/// Every placeholder occurrence in source order.
pub fn scan_placeholders(query: &str) -> Vec<PlaceholderMatch> {
    PLACEHOLDER_WITH_CAST
        .captures_iter(query)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let annotation = cap.get(1).map(|m| m.as_str().to_string());
            let cast = annotation.as_deref().and_then(resolve_annotation);
            Some(PlaceholderMatch { span: whole.range(), annotation, cast })
        })
        .collect()
}

/// One entry per placeholder, in order: the explicit cast when recognized, else `None`.
pub fn scan_placeholder_casts(query: &str) -> Vec<Option<CanonicalType>> {
    let casts: Vec<Option<CanonicalType>> = scan_placeholders(query).into_iter().map(|m| m.cast).collect();
    debug!(
        "scan: {} placeholder(s), {} with explicit cast",
        casts.len(),
        casts.iter().filter(|c| c.is_some()).count()
    );
    casts
}

pub fn count_placeholders(query: &str) -> usize {
    query.matches('?').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use CanonicalType::*;

    #[test]
    fn bare_placeholder() {
        assert_eq!(scan_placeholder_casts("?"), vec![None]);
    }

    #[test]
    fn recognized_cast() {
        assert_eq!(scan_placeholder_casts("?::int4"), vec![Some(Integer)]);
        assert_eq!(scan_placeholder_casts("?::int"), vec![Some(Integer)]);
        assert_eq!(scan_placeholder_casts("?::float8"), vec![Some(Double)]);
        assert_eq!(scan_placeholder_casts("?::decimal"), vec![Some(Float)]);
    }

    #[test]
    fn unsupported_cast_falls_back() {
        assert_eq!(scan_placeholder_casts("?::bogus"), vec![None]);
        assert_eq!(scan_placeholder_casts("?::timestamp"), vec![None]);
        assert_eq!(scan_placeholder_casts("?::"), vec![None]);
    }

    #[test]
    fn mixed_sequence_keeps_order() {
        assert_eq!(
            scan_placeholder_casts("?, ?::text, ?::int8"),
            vec![None, Some(String), Some(Long)]
        );
    }

    #[test]
    fn case_insensitive_annotation() {
        assert_eq!(scan_placeholder_casts("?::INT4"), scan_placeholder_casts("?::int4"));
        assert_eq!(scan_placeholder_casts("?::VarChar"), vec![Some(String)]);
    }

    #[test]
    fn underscore_words_are_captured_whole() {
        let m = scan_placeholders("?::_int4, ?::int_4");
        assert_eq!(m[0].annotation.as_deref(), Some("_int4"));
        assert_eq!(m[1].annotation.as_deref(), Some("int_4"));
        assert_eq!(scan_placeholder_casts("?::_int4"), vec![None]);
    }

    #[test]
    fn marker_repetition_is_tolerated() {
        assert_eq!(scan_placeholder_casts("?::::bool"), vec![Some(Boolean)]);
        assert_eq!(scan_placeholder_casts("?date"), vec![Some(Date)]);
    }

    #[test]
    fn surrounding_sql_is_ignored() {
        let q = "SELECT * FROM t WHERE a = ?::int8 AND b IN (?, ?::time) OR c = ? LIMIT 10";
        assert_eq!(scan_placeholder_casts(q), vec![Some(Long), None, Some(Time), None]);
        assert!(scan_placeholder_casts("SELECT 1").is_empty());
        assert!(scan_placeholder_casts("").is_empty());
    }

    #[test]
    fn adjacent_placeholders() {
        assert_eq!(scan_placeholder_casts("??::text?"), vec![None, Some(String), None]);
    }

    #[test]
    fn spans_and_annotations() {
        let q = "a = ?::Bogus, b = ?::TEXT";
        let m = scan_placeholders(q);
        assert_eq!(m.len(), 2);
        assert_eq!(&q[m[0].span.clone()], "?::Bogus");
        assert_eq!(m[0].annotation.as_deref(), Some("Bogus"));
        assert_eq!(m[0].native_name(), None);
        assert_eq!(&q[m[1].span.clone()], "?::TEXT");
        assert_eq!(m[1].native_name().as_deref(), Some("text"));
        assert!(m[1].has_suffix());

        let bare = scan_placeholders("? , ?:: int4");
        assert!(!bare[0].has_suffix());
        assert!(bare[1].has_suffix());
        assert_eq!(bare[1].annotation, None);
    }

    #[test]
    fn length_matches_placeholder_count() {
        for q in ["", "?", "??", "?::int4, ?::x, ?", "no params", "a ? b ?::date c ?::: d", "?::?::int8"] {
            assert_eq!(scan_placeholder_casts(q).len(), count_placeholders(q), "query: {}", q);
        }
    }
}

//! Numeric primitives: locale-ambiguous text parsing and float sanitization.
//!
//! The ingestion boundary hands the engine raw text whose decimal separator
//! depends on the user's locale. Unparseable, empty, or non-finite input maps
//! to 0 rather than an error — a malformed cell must not poison a pass.

/// Decimal separator convention of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalSeparator {
    /// `1,234.5` — point decimal, comma thousands.
    #[default]
    Point,
    /// `1.234,5` — comma decimal, point thousands.
    Comma,
}

impl DecimalSeparator {
    /// Parse numeric text under this separator convention.
    ///
    /// Thousands separators are stripped before parsing. Anything that still
    /// fails to parse, and any non-finite result, yields 0.
    pub fn parse(self, text: &str) -> f64 {
        let cleaned: String = match self {
            DecimalSeparator::Point => text.chars().filter(|c| *c != ',').collect(),
            DecimalSeparator::Comma => text
                .chars()
                .filter(|c| *c != '.')
                .map(|c| if c == ',' { '.' } else { c })
                .collect(),
        };
        match cleaned.trim().parse::<f64>() {
            Ok(v) => sanitize(v),
            Err(_) => 0.0,
        }
    }
}

/// Map NaN and infinities to 0; finite values pass through.
#[inline]
pub fn sanitize(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Sanitize and clamp to non-negative.
#[inline]
pub fn sanitize_nonneg(v: f64) -> f64 {
    let v = sanitize(v);
    if v > 0.0 {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Parsing --

    #[test]
    fn point_locale_plain_value() {
        assert_eq!(DecimalSeparator::Point.parse("12.5"), 12.5);
    }

    #[test]
    fn point_locale_strips_thousands_commas() {
        assert_eq!(DecimalSeparator::Point.parse("1,234.5"), 1234.5);
    }

    #[test]
    fn comma_locale_swaps_separators() {
        assert_eq!(DecimalSeparator::Comma.parse("1.234,5"), 1234.5);
        assert_eq!(DecimalSeparator::Comma.parse("12,5"), 12.5);
    }

    #[test]
    fn empty_and_garbage_map_to_zero() {
        assert_eq!(DecimalSeparator::Point.parse(""), 0.0);
        assert_eq!(DecimalSeparator::Point.parse("abc"), 0.0);
        assert_eq!(DecimalSeparator::Comma.parse("--"), 0.0);
    }

    #[test]
    fn textual_nan_and_inf_map_to_zero() {
        // f64::from_str accepts "NaN" and "inf"; the sanitize pass catches them.
        assert_eq!(DecimalSeparator::Point.parse("NaN"), 0.0);
        assert_eq!(DecimalSeparator::Point.parse("inf"), 0.0);
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(DecimalSeparator::Point.parse("  7.25 "), 7.25);
    }

    // -- Sanitization --

    #[test]
    fn sanitize_passes_finite() {
        assert_eq!(sanitize(-3.5), -3.5);
        assert_eq!(sanitize(0.0), 0.0);
    }

    #[test]
    fn sanitize_clamps_non_finite() {
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(f64::INFINITY), 0.0);
        assert_eq!(sanitize(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn sanitize_nonneg_floors_negatives() {
        assert_eq!(sanitize_nonneg(-1.0), 0.0);
        assert_eq!(sanitize_nonneg(f64::NAN), 0.0);
        assert_eq!(sanitize_nonneg(2.0), 2.0);
    }
}

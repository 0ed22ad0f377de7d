//! Text formatting utilities for the claimline viewer.

use claimline::{Claim, HighlightSpan};

/// Formats a claim period, using an en dash with no end year for ongoing
/// claims.
pub fn format_year_span(span: &HighlightSpan) -> String {
    if span.open_ended {
        format!("{}–", span.from)
    } else if span.from == span.to {
        format!("{}", span.from)
    } else {
        format!("{}–{}", span.from, span.to)
    }
}

/// One-line claim summary used in the claims panel gutter.
pub fn format_claim_summary(claim: &Claim) -> String {
    format!("{} ({})", claim.movement, format_year_span(&claim.span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimline::TimeRange;

    #[test]
    fn test_year_span_formats() {
        let closed = HighlightSpan::closed(1961, 1969, None, false);
        assert_eq!(format_year_span(&closed), "1961–1969");

        let single = HighlightSpan::closed(1969, 1969, None, false);
        assert_eq!(format_year_span(&single), "1969");

        let ongoing = HighlightSpan::ongoing(1991, TimeRange::new(1945, 2020), None, false);
        assert_eq!(format_year_span(&ongoing), "1991–");
    }
}

//! ISO-8601 Durations
//!
//! Promotions may carry a validity window such as `P1Y2M3D` or `PT1H`, which is
//! measured from the promotion's start. Calendar units (years, months, weeks
//! and days) are applied in UTC so the result does not depend on the host
//! time zone.

use jiff::{Span, Timestamp, fmt::temporal::SpanParser, tz::TimeZone};
use thiserror::Error;

/// Errors raised while parsing or applying a duration.
#[derive(Debug, Error)]
pub enum DurationError {
    /// The string is not a valid ISO-8601 duration.
    #[error("invalid ISO-8601 duration {input:?}: {source}")]
    Parse {
        /// Offending input
        input: String,

        /// Underlying parser error
        #[source]
        source: jiff::Error,
    },

    /// The duration is negative.
    #[error("negative ISO-8601 duration {input:?}")]
    Negative {
        /// Offending input
        input: String,
    },

    /// Adding the duration to the start instant overflowed the supported range.
    #[error("duration {input:?} overflows when added to {start}")]
    Overflow {
        /// Duration being applied
        input: String,

        /// Start instant
        start: Timestamp,

        /// Underlying arithmetic error
        #[source]
        source: jiff::Error,
    },
}

static PARSER: SpanParser = SpanParser::new();

/// Parse an ISO-8601 duration string (e.g. `P1Y2M3D`, `P2W`, `PT1H30M`).
///
/// Only the ISO-8601 grammar is accepted, so friendly forms such as `1 day`
/// or `2h 30m` are rejected.
///
/// # Errors
///
/// - [`DurationError::Parse`]: the string is not an ISO-8601 duration.
/// - [`DurationError::Negative`]: the duration is signed negative.
pub fn parse_duration(input: &str) -> Result<Span, DurationError> {
    let span = PARSER
        .parse_span(input.trim())
        .map_err(|source| DurationError::Parse {
            input: input.to_string(),
            source,
        })?;

    if span.is_negative() {
        return Err(DurationError::Negative {
            input: input.to_string(),
        });
    }

    Ok(span)
}

/// Return the instant reached by adding the ISO-8601 `duration` to `start`.
///
/// # Errors
///
/// - [`DurationError::Parse`]: the duration string is malformed.
/// - [`DurationError::Negative`]: the duration is negative.
/// - [`DurationError::Overflow`]: the resulting instant is out of range.
pub fn end_of(duration: &str, start: Timestamp) -> Result<Timestamp, DurationError> {
    let span = parse_duration(duration)?;

    start
        .to_zoned(TimeZone::UTC)
        .checked_add(span)
        .map(|zoned| zoned.timestamp())
        .map_err(|source| DurationError::Overflow {
            input: duration.to_string(),
            start,
            source,
        })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn ts(s: &str) -> Result<Timestamp, jiff::Error> {
        s.parse()
    }

    #[test]
    fn end_of_adds_days() -> TestResult {
        let end = end_of("P1D", ts("2024-03-01T12:00:00Z")?)?;

        assert_eq!(end, ts("2024-03-02T12:00:00Z")?);

        Ok(())
    }

    #[test]
    fn end_of_adds_calendar_months_and_years() -> TestResult {
        let end = end_of("P1Y2M3D", ts("2023-01-31T00:00:00Z")?)?;

        // 2023-01-31 + 1Y = 2024-01-31, + 2M = 2024-03-31, + 3D = 2024-04-03
        assert_eq!(end, ts("2024-04-03T00:00:00Z")?);

        Ok(())
    }

    #[test]
    fn end_of_adds_weeks_and_time_units() -> TestResult {
        let start = ts("2024-01-01T00:00:00Z")?;

        assert_eq!(end_of("P2W", start)?, ts("2024-01-15T00:00:00Z")?);
        assert_eq!(end_of("PT1H30M", start)?, ts("2024-01-01T01:30:00Z")?);
        assert_eq!(end_of("PT45S", start)?, ts("2024-01-01T00:00:45Z")?);

        Ok(())
    }

    #[test]
    fn parse_duration_rejects_garbage() {
        let result = parse_duration("one day");

        assert!(matches!(result, Err(DurationError::Parse { input, .. }) if input == "one day"));
    }

    #[test]
    fn parse_duration_rejects_friendly_formats() {
        for input in ["1 day", "1d", "2h 30m", "1 year ago"] {
            assert!(
                matches!(parse_duration(input), Err(DurationError::Parse { .. })),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_duration_rejects_negative_spans() {
        let result = parse_duration("-P1D");

        assert!(matches!(result, Err(DurationError::Negative { input }) if input == "-P1D"));
    }

    #[test]
    fn end_of_reports_overflow() {
        let result = end_of("P100Y", Timestamp::MAX);

        assert!(matches!(result, Err(DurationError::Overflow { .. })));
    }
}

//! Timestamp extraction and date inference.
//!
//! Report rows often carry a time of day without a calendar date; the date is
//! implied by the last dated row above them. Rows that appear before any
//! dated row are assumed to belong to the day before the first dated row.

use chrono::{Local, NaiveDate, NaiveTime};

use super::patterns;

/// A timestamp pattern match: an optional explicit date plus a time of day.
/// `time` is `None` when the digits do not form a valid time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimestampMatch {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

/// Find the first timestamp pattern in `text`, or `None` if there is none.
pub(crate) fn match_timestamp(text: &str) -> Option<TimestampMatch> {
    let caps = patterns::timestamp().captures(text)?;

    let date = match (caps.get(1), caps.get(2), caps.get(3)) {
        (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(
            y.as_str().parse().unwrap_or(0),
            m.as_str().parse().unwrap_or(0),
            d.as_str().parse().unwrap_or(0),
        ),
        _ => None,
    };

    // Group digit counts are bounded by the pattern, so parse cannot fail;
    // from_hms_opt rejects impossible times like 25:00:00.
    let time = NaiveTime::from_hms_opt(
        caps[4].parse().unwrap_or(99),
        caps[5].parse().unwrap_or(99),
        caps[6].parse().unwrap_or(99),
    );

    Some(TimestampMatch { date, time })
}

/// Date-inference accumulator threaded through line-by-line parsing.
#[derive(Debug)]
pub(crate) struct DateContext {
    last_seen: Option<NaiveDate>,
    previous_day: Option<NaiveDate>,
    today: NaiveDate,
}

impl DateContext {
    /// `previous_day` comes from pre-scanning the input for the first
    /// explicitly dated timestamp (that date minus one day).
    pub fn new(previous_day: Option<NaiveDate>) -> Self {
        Self {
            last_seen: None,
            previous_day,
            today: Local::now().date_naive(),
        }
    }

    /// Resolve the date for one row, carrying explicit dates forward.
    ///
    /// The log is assumed to continue on the same day until a new date
    /// appears. Without any date seen yet, fall back to the pre-scanned
    /// previous day, then to the current local date.
    pub fn resolve(&mut self, explicit: Option<NaiveDate>) -> NaiveDate {
        if let Some(date) = explicit {
            self.last_seen = Some(date);
            return date;
        }
        if let Some(date) = self.last_seen {
            return date;
        }
        if let Some(date) = self.previous_day {
            return date;
        }
        self.today
    }
}

/// Pre-scan lines or cells for the first explicitly dated timestamp and
/// return the day before it.
pub(crate) fn scan_previous_day<'a, I>(texts: I) -> Option<NaiveDate>
where
    I: IntoIterator<Item = &'a str>,
{
    texts.into_iter().find_map(|text| {
        let matched = match_timestamp(text)?;
        matched.date?.pred_opt()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_explicit_date_and_time() {
        let m = match_timestamp("2025-08-25 08:00:00").unwrap();
        assert_eq!(m.date, NaiveDate::from_ymd_opt(2025, 8, 25));
        assert_eq!(m.time, NaiveTime::from_hms_opt(8, 0, 0));
    }

    #[test]
    fn matches_time_only() {
        let m = match_timestamp("8:30:00").unwrap();
        assert!(m.date.is_none());
        assert_eq!(m.time, NaiveTime::from_hms_opt(8, 30, 0));
    }

    #[test]
    fn rejects_impossible_time() {
        let m = match_timestamp("25:61:61").unwrap();
        assert!(m.time.is_none());
    }

    #[test]
    fn no_match_on_dateless_text() {
        assert!(match_timestamp("Report generated").is_none());
    }

    #[test]
    fn resolve_carries_last_seen_date_forward() {
        let mut ctx = DateContext::new(None);
        let dated = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
        assert_eq!(ctx.resolve(Some(dated)), dated);
        // A later time-only row continues on the same day
        assert_eq!(ctx.resolve(None), dated);
    }

    #[test]
    fn resolve_uses_previous_day_before_any_dated_row() {
        let first_dated = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
        let mut ctx = DateContext::new(first_dated.pred_opt());
        assert_eq!(
            ctx.resolve(None),
            NaiveDate::from_ymd_opt(2025, 8, 24).unwrap()
        );
    }

    #[test]
    fn resolve_falls_back_to_today() {
        let mut ctx = DateContext::new(None);
        assert_eq!(ctx.resolve(None), Local::now().date_naive());
    }

    #[test]
    fn scan_finds_first_dated_line() {
        let lines = [
            "POWER USAGE",
            "08:15:00\tActive\t90 %",
            "2025-08-25 09:00:00\tActive\t85 %",
        ];
        assert_eq!(
            scan_previous_day(lines),
            NaiveDate::from_ymd_opt(2025, 8, 24)
        );
    }
}

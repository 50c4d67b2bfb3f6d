use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use sanctuary_stats_shared_kernel::{DomainError, DomainResult};

/// Template used when a `date_created` timestamp stands in for `date`.
pub const SUBMISSION_DATE_TEMPLATE: &str = "%m/%d/%Y";

/// Absolute point in time as found in a `date_created` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Textual timestamp (RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`).
    Text(String),
}

impl Timestamp {
    pub fn to_datetime(&self) -> DomainResult<DateTime<Utc>> {
        match self {
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms).ok_or_else(|| invalid(&ms.to_string())),
            Self::Text(text) => parse_text(text),
        }
    }

    /// Render the calendar date as `MM/DD/YYYY`, in local time unless `utc`.
    pub fn to_submission_date(&self, utc: bool) -> DomainResult<String> {
        let instant = self.to_datetime()?;
        Ok(if utc {
            format_template(&instant, SUBMISSION_DATE_TEMPLATE)
        } else {
            format_template(&instant.with_timezone(&Local), SUBMISSION_DATE_TEMPLATE)
        })
    }
}

fn parse_text(text: &str) -> DomainResult<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(ms) = text.parse::<i64>() {
        return Timestamp::Millis(ms).to_datetime();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Date-time without an offset is wall-clock local time.
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| invalid(text));
        }
    }
    // Bare dates are midnight UTC.
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()).ok_or_else(|| invalid(text));
    }
    Err(invalid(text))
}

fn invalid(value: &str) -> DomainError {
    DomainError::InvalidTimestamp { value: value.to_string() }
}

/// Expand `%Y %m %d %H %M %S` in `template`.
///
/// `%Y` is written as-is, the other fields are zero-padded to two digits.
/// Any other `%x` sequence is emitted as `x`; a trailing `%` is kept.
pub fn format_template<T>(instant: &T, template: &str) -> String
where
    T: Datelike + Timelike,
{
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('Y') => out.push_str(&instant.year().to_string()),
            Some('m') => out.push_str(&format!("{:02}", instant.month())),
            Some('d') => out.push_str(&format!("{:02}", instant.day())),
            Some('H') => out.push_str(&format!("{:02}", instant.hour())),
            Some('M') => out.push_str(&format!("{:02}", instant.minute())),
            Some('S') => out.push_str(&format!("{:02}", instant.second())),
            Some(other) => out.push(other),
            None => out.push('%'),
        }
    }
    out
}

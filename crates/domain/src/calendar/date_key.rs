use std::fmt;

use sanctuary_stats_shared_kernel::{DomainError, DomainResult};

/// Sortable form of a US `M/D/YYYY` date: `YYYYMMDD`.
///
/// Only used for ordering; the report always shows the original text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// Normalize `M/D/YYYY` (month and day with or without a leading zero).
    ///
    /// Rejects anything that does not have exactly three numeric components,
    /// a four digit year, a month in `1..=12` and a day in `1..=31`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let mut parts = raw.trim().split('/');
        let (Some(month), Some(day), Some(year), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed(raw, "expected three '/'-separated components"));
        };

        let month = component(raw, "month", month, 1..=2, 1..=12)?;
        let day = component(raw, "day", day, 1..=2, 1..=31)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(raw, "year must have four digits"));
        }

        Ok(Self(format!("{year}{month:0>2}{day:0>2}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn component<'a>(
    raw: &str,
    field: &str,
    value: &'a str,
    width: std::ops::RangeInclusive<usize>,
    range: std::ops::RangeInclusive<u32>,
) -> DomainResult<&'a str> {
    if !width.contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(raw, &format!("{field} '{value}' is not numeric")));
    }
    let number: u32 = value.parse().map_err(|_| malformed(raw, &format!("{field} '{value}' is not numeric")))?;
    if !range.contains(&number) {
        return Err(malformed(raw, &format!("{field} {number} out of range")));
    }
    Ok(value)
}

fn malformed(raw: &str, reason: &str) -> DomainError {
    DomainError::MalformedDate { value: raw.to_string(), reason: reason.to_string() }
}

/// Sort date strings chronologically (ascending), in place.
///
/// Strings that do not parse as a [`DateKey`] sort before every valid date.
pub fn sort_dates<S: AsRef<str>>(dates: &mut [S]) {
    dates.sort_by_cached_key(|d| DateKey::parse(d.as_ref()).ok());
}

/// Chronologically earliest and latest of `dates`, skipping malformed values.
pub fn date_range<'a, I>(dates: I) -> Option<(&'a str, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keyed: Vec<(DateKey, &str)> =
        dates.into_iter().filter_map(|d| DateKey::parse(d).ok().map(|key| (key, d))).collect();
    keyed.sort();
    let first = keyed.first()?.1;
    let last = keyed.last()?.1;
    Some((first, last))
}

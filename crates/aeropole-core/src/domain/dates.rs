use std::fmt::{Display, Formatter};

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::ValidationError;

/// Calendar travel date in `YYYY-MM-DD` form.
///
/// Parsing enforces both the textual shape (zero-padded, dash-separated)
/// and that the components form a real calendar date, so `2026-02-30` is
/// rejected rather than rolled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelDate(Date);

impl TravelDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        parse_calendar_date(input)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }
}

impl Display for TravelDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

fn parse_calendar_date(input: &str) -> Option<Date> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(index, byte)| matches!(index, 4 | 7) || byte.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year: i32 = input[..4].parse().ok()?;
    let month: u8 = input[5..7].parse().ok()?;
    let day: u8 = input[8..10].parse().ok()?;

    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Minutes between two provider timestamps, rounded to the nearest minute.
///
/// Provider segment times are usually offset-less local datetimes
/// (`2026-02-10T08:10:00`), but an RFC3339 form with an offset is accepted
/// too. Returns `None` when either side fails to parse or the difference
/// is not positive.
pub fn elapsed_minutes(depart_at: &str, arrive_at: &str) -> Option<u32> {
    let depart = parse_offer_timestamp(depart_at)?;
    let arrive = parse_offer_timestamp(arrive_at)?;

    let millis = (arrive - depart).whole_milliseconds();
    if millis <= 0 {
        return None;
    }

    u32::try_from((millis + 30_000) / 60_000).ok()
}

fn parse_offer_timestamp(value: &str) -> Option<PrimitiveDateTime> {
    if let Ok(with_offset) = OffsetDateTime::parse(value, &Rfc3339) {
        let utc = with_offset.to_offset(UtcOffset::UTC);
        return Some(PrimitiveDateTime::new(utc.date(), utc.time()));
    }

    PrimitiveDateTime::parse(value, &Iso8601::DEFAULT).ok()
}

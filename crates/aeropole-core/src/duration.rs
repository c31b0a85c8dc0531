//! ISO-8601 duration parsing for itinerary durations.
//!
//! Fare providers report itinerary length as `P[n]DT[n]H[n]M[n]S` with every
//! component optional (`PT14H15M`, `P1DT2H`, `PT90S`). The parser is pure and
//! kept apart from the offer normalizer so the grammar can be tested on its
//! own.

/// Parse a provider duration into whole minutes.
///
/// Seconds are rounded to the nearest minute, half up. Returns `None` for
/// anything outside the grammar; a bare `P` or `PT` parses to zero minutes.
pub fn parse_duration_minutes(input: &str) -> Option<u32> {
    let rest = input.strip_prefix('P')?;
    let (days, rest) = take_component(rest, b'D')?;

    let (hours, minutes, seconds) = match rest.strip_prefix('T') {
        Some(time_part) => {
            let (hours, time_part) = take_component(time_part, b'H')?;
            let (minutes, time_part) = take_component(time_part, b'M')?;
            let (seconds, time_part) = take_component(time_part, b'S')?;
            if !time_part.is_empty() {
                return None;
            }
            (hours, minutes, seconds)
        }
        None => {
            if !rest.is_empty() {
                return None;
            }
            (0, 0, 0)
        }
    };

    let total = u64::from(days) * 24 * 60
        + u64::from(hours) * 60
        + u64::from(minutes)
        + (u64::from(seconds) + 30) / 60;
    u32::try_from(total).ok()
}

/// Consume a `<digits><unit>` component if the digits are followed by the
/// expected unit letter; digits belonging to a later component are left
/// untouched. `None` only on numeric overflow.
fn take_component(input: &str, unit: u8) -> Option<(u32, &str)> {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || input.as_bytes().get(digits) != Some(&unit) {
        return Some((0, input));
    }

    let value = input[..digits].parse().ok()?;
    Some((value, &input[digits + 1..]))
}

use time::OffsetDateTime;

/// Millisecond clock seam for credential expiry checks.
///
/// Production code uses [`SystemClock`]; tests drive expiry with a manual
/// implementation instead of sleeping.
pub trait Clock: Send + Sync {
    fn epoch_ms(&self) -> i64;
}

/// Wall clock backed by the system time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_ms(&self) -> i64 {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
        (nanos / 1_000_000) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_reports_a_recent_epoch() {
        // 2020-01-01 in epoch milliseconds; anything earlier means the
        // conversion lost magnitude.
        assert!(SystemClock.epoch_ms() > 1_577_836_800_000);
    }
}

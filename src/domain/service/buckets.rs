// src/domain/service/buckets.rs
// Time bucket generation for the settlement day

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::domain::errors::{ReportError, ReportResult};
use crate::domain::model::TimeBucket;

/// Generates the ordered hourly buckets of the settlement day for `date`.
///
/// The settlement day runs from 23:00 local time on the previous calendar
/// day for 24 local hours. Both bounds are converted to UTC through the
/// governing timezone, and the bucket count is the number of whole hours
/// between the two UTC instants. Because the local/UTC offset differs
/// between the bounds on a DST transition day, the count self-adjusts to
/// 23 (spring forward) or 25 (fall back); otherwise it is 24.
pub fn generate_buckets(date: NaiveDate, timezone: Tz) -> ReportResult<Vec<TimeBucket>> {
    let local_start = date.and_time(NaiveTime::MIN) - Duration::hours(1);
    let local_end = local_start + Duration::hours(24);

    let start_utc = to_utc(local_start, timezone);
    let end_utc = to_utc(local_end, timezone);

    let hours = (end_utc - start_utc).num_hours();
    if hours <= 0 {
        return Err(ReportError::EmptyBucketRange(date));
    }

    Ok((0..hours)
        .map(|i| TimeBucket {
            index: i as u32 + 1,
            start_utc: start_utc + Duration::hours(i),
        })
        .collect())
}

// Resolves a local wall-clock time to UTC. An ambiguous time (fall-back
// overlap) resolves to the earlier instant; a skipped time (spring-forward
// gap) resolves one hour later, past the gap.
fn to_utc(local: NaiveDateTime, timezone: Tz) -> DateTime<Utc> {
    match timezone.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => to_utc(local + Duration::hours(1), timezone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Berlin;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn regular_day_has_24_buckets() {
        let buckets = generate_buckets(date(2026, 2, 2), Berlin).unwrap();

        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[0].index, 1);
        assert_eq!(buckets[23].index, 24);
    }

    #[test]
    fn first_bucket_starts_at_23_local_on_previous_day() {
        let buckets = generate_buckets(date(2026, 2, 2), Berlin).unwrap();

        // 2026-02-01 23:00 Berlin is CET (UTC+1)
        let expected = Utc.with_ymd_and_hms(2026, 2, 1, 22, 0, 0).unwrap();
        assert_eq!(buckets[0].start_utc, expected);

        let local = buckets[0].start_utc.with_timezone(&Berlin);
        assert_eq!(local.format("%H:%M").to_string(), "23:00");
    }

    #[test]
    fn buckets_are_hourly_and_ascending() {
        let buckets = generate_buckets(date(2026, 2, 2), Berlin).unwrap();

        for pair in buckets.windows(2) {
            assert_eq!(pair[1].index, pair[0].index + 1);
            assert_eq!(pair[1].start_utc - pair[0].start_utc, Duration::hours(1));
        }
    }

    #[test]
    fn spring_forward_day_has_23_buckets() {
        // Berlin switches CET -> CEST on 2026-03-29 at 02:00 local
        let buckets = generate_buckets(date(2026, 3, 29), Berlin).unwrap();
        assert_eq!(buckets.len(), 23);
    }

    #[test]
    fn fall_back_day_has_25_buckets() {
        // Berlin switches CEST -> CET on 2026-10-25 at 03:00 local
        let buckets = generate_buckets(date(2026, 10, 25), Berlin).unwrap();
        assert_eq!(buckets.len(), 25);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_buckets(date(2026, 10, 25), Berlin).unwrap();
        let b = generate_buckets(date(2026, 10, 25), Berlin).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn timezone_is_an_explicit_parameter() {
        // London local 23:00 is an hour behind Berlin local 23:00 in winter
        let berlin = generate_buckets(date(2026, 2, 2), Berlin).unwrap();
        let london = generate_buckets(date(2026, 2, 2), chrono_tz::Europe::London).unwrap();

        assert_eq!(berlin.len(), 24);
        assert_eq!(london.len(), 24);
        assert_eq!(
            london[0].start_utc - berlin[0].start_utc,
            Duration::hours(1)
        );
    }
}

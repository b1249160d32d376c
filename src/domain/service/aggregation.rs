// src/domain/service/aggregation.rs
// Volume aggregation and report assembly

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::domain::errors::{ReportError, ReportResult};
use crate::domain::model::{AggregatedPeriod, AggregatedReport, PowerTrade, TimeBucket};

/// Sums trade volume per settlement-period index. Indices with no records
/// are absent from the result; an empty input yields an empty map.
pub fn aggregate_volumes(trades: &[PowerTrade]) -> HashMap<u32, f64> {
    let mut volume_by_period = HashMap::new();
    for trade in trades {
        for entry in &trade.periods {
            *volume_by_period.entry(entry.period).or_insert(0.0) += entry.volume;
        }
    }
    volume_by_period
}

/// Merges the aggregated volumes into the bucket list, producing exactly one
/// `AggregatedPeriod` per bucket in bucket order. Buckets without a matching
/// period index carry `None` rather than zero, so an unobserved hour stays
/// distinguishable from an observed zero volume.
pub fn assemble_report(
    buckets: &[TimeBucket],
    volume_by_period: &HashMap<u32, f64>,
    reference: NaiveDateTime,
) -> ReportResult<AggregatedReport> {
    if buckets.is_empty() {
        return Err(ReportError::EmptyBucketRange(reference.date()));
    }

    let periods = buckets
        .iter()
        .map(|bucket| AggregatedPeriod {
            start_utc: bucket.start_utc,
            volume: volume_by_period.get(&bucket.index).copied(),
        })
        .collect();

    Ok(AggregatedReport {
        timestamp: reference,
        periods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TradePeriod;
    use crate::domain::service::buckets::generate_buckets;
    use chrono::NaiveDate;
    use chrono_tz::Europe::Berlin;

    fn trade(entries: &[(u32, f64)]) -> PowerTrade {
        PowerTrade {
            periods: entries
                .iter()
                .map(|&(period, volume)| TradePeriod { period, volume })
                .collect(),
        }
    }

    #[test]
    fn sums_volumes_sharing_a_period() {
        let trades = vec![trade(&[(1, 10.0), (1, 5.0)]), trade(&[(3, 7.0)])];

        let result = aggregate_volumes(&trades);

        assert_eq!(result.len(), 2);
        assert_eq!(result[&1], 15.0);
        assert_eq!(result[&3], 7.0);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(aggregate_volumes(&[]).is_empty());
    }

    #[test]
    fn negative_volumes_are_summed() {
        let trades = vec![trade(&[(2, 100.0), (2, -175.5)])];
        assert_eq!(aggregate_volumes(&trades)[&2], -75.5);
    }

    #[test]
    fn assembled_report_covers_every_bucket() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let reference = date.and_hms_opt(13, 30, 0).unwrap();
        let buckets = generate_buckets(date, Berlin).unwrap();
        let volumes = HashMap::from([(1, 15.0)]);

        let report = assemble_report(&buckets, &volumes, reference).unwrap();

        assert_eq!(report.timestamp, reference);
        assert_eq!(report.periods.len(), 24);
        assert_eq!(report.periods[0].volume, Some(15.0));
        assert!(report.periods[1..].iter().all(|p| p.volume.is_none()));
    }

    #[test]
    fn zero_volume_is_not_no_data() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let reference = date.and_hms_opt(8, 0, 0).unwrap();
        let buckets = generate_buckets(date, Berlin).unwrap();
        let volumes = HashMap::from([(4, 0.0)]);

        let report = assemble_report(&buckets, &volumes, reference).unwrap();

        assert_eq!(report.periods[3].volume, Some(0.0));
        assert_eq!(report.periods[4].volume, None);
    }

    #[test]
    fn empty_bucket_list_is_rejected() {
        let reference = NaiveDate::from_ymd_opt(2026, 2, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let result = assemble_report(&[], &HashMap::new(), reference);

        assert!(matches!(result, Err(ReportError::EmptyBucketRange(_))));
    }
}

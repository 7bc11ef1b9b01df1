//! Groups observations by calendar day and reduces each group to a [`DayStatistic`].

use crate::calendar::calendar_index::CalendarIndex;
use crate::rainfall_data::error::AggregateError;
use crate::types::day_statistic::DayStatistic;
use crate::types::raw_record::RawRecord;
use crate::types::traits::types::MonthDay;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Collects rainfall amounts into one bucket per calendar day of a [`CalendarIndex`].
///
/// Buckets are indexed by day offset, so finalizing walks them in calendar order.
/// Every ingested record contributes one amount; nothing is deduplicated.
#[derive(Debug, Clone)]
pub struct BucketAggregator<'c> {
    calendar: &'c CalendarIndex,
    buckets: Vec<Vec<f64>>,
    ingested: usize,
}

impl<'c> BucketAggregator<'c> {
    pub fn new(calendar: &'c CalendarIndex) -> Self {
        Self {
            calendar,
            buckets: vec![Vec::new(); calendar.len()],
            ingested: 0,
        }
    }

    /// Appends `record.amount` to the bucket of its calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::UnknownCalendarDay`] if `(record.month, record.day)` is
    /// not a day of the reference calendar, e.g. a value in a February 30th column or a
    /// February 29th value against a reference year with a 28-day February.
    pub fn ingest(&mut self, record: &RawRecord) -> Result<(), AggregateError> {
        let offset = self
            .calendar
            .day_offset(record.month, record.day)
            .map_err(|source| AggregateError::UnknownCalendarDay {
                year: record.year,
                month: record.month,
                day: record.day,
                source,
            })?;
        self.buckets[offset].push(record.amount);
        self.ingested += 1;
        Ok(())
    }

    pub fn ingest_all<'r>(
        &mut self,
        records: impl IntoIterator<Item = &'r RawRecord>,
    ) -> Result<(), AggregateError> {
        records
            .into_iter()
            .try_for_each(|record| self.ingest(record))
    }

    /// Number of amounts ingested so far.
    pub fn ingested(&self) -> usize {
        self.ingested
    }

    /// Amounts collected for `(month, day)`, if that is a calendar day.
    pub fn bucket(&self, month: u32, day: u32) -> Option<&[f64]> {
        let offset = self.calendar.day_offset(month, day).ok()?;
        self.buckets.get(offset).map(Vec::as_slice)
    }

    /// Reduces every bucket to its statistic, in day-of-year order.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::EmptyBucket`] for the first calendar day that has no
    /// observation in any year.
    pub fn finalize(self) -> Result<DailyStatistics, AggregateError> {
        let mut days = Vec::with_capacity(self.buckets.len());
        for ((offset, amounts), month_day) in
            self.buckets.iter().enumerate().zip(self.calendar.days())
        {
            match DayStatistic::from_amounts(offset, month_day, amounts) {
                Some(statistic) => days.push(statistic),
                None => {
                    warn!("Calendar day {} has no observations in any year", month_day);
                    return Err(AggregateError::EmptyBucket {
                        month: month_day.month,
                        day: month_day.day,
                    });
                }
            }
        }
        info!(
            "Finalized {} calendar days from {} observations",
            days.len(),
            self.ingested
        );
        Ok(DailyStatistics { days })
    }
}

/// Finalized statistics for every calendar day, ordered by day offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatistics {
    days: Vec<DayStatistic>,
}

impl DailyStatistics {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The statistic at day offset `offset`.
    pub fn get(&self, offset: usize) -> Option<&DayStatistic> {
        self.days.get(offset)
    }

    pub fn find(&self, month_day: MonthDay) -> Option<&DayStatistic> {
        self.days.iter().find(|day| day.month_day() == month_day)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayStatistic> + '_ {
        self.days.iter()
    }

    pub fn as_slice(&self) -> &[DayStatistic] {
        &self.days
    }

    pub fn mean_rainfall(&self) -> Vec<f64> {
        self.days.iter().map(|day| day.mean_rainfall).collect()
    }

    pub fn rain_probability(&self) -> Vec<f64> {
        self.days.iter().map(|day| day.rain_probability).collect()
    }
}

impl<'a> IntoIterator for &'a DailyStatistics {
    type Item = &'a DayStatistic;
    type IntoIter = std::slice::Iter<'a, DayStatistic>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::error::CalendarError;

    /// One record per calendar day per year, amount derived from year and offset.
    fn full_years(calendar: &CalendarIndex, years: std::ops::Range<i32>) -> Vec<RawRecord> {
        years
            .flat_map(|year| {
                calendar.days().enumerate().map(move |(offset, month_day)| {
                    let amount = ((year as usize * 7 + offset * 13) % 11) as f64 * 0.5;
                    RawRecord::new(year, month_day.month, month_day.day, amount)
                })
            })
            .collect()
    }

    #[test]
    fn test_finalize_orders_by_day_offset() -> Result<(), AggregateError> {
        let calendar = CalendarIndex::shared();
        let mut aggregator = BucketAggregator::new(calendar);
        aggregator.ingest_all(&full_years(calendar, 1961..1965))?;
        assert_eq!(aggregator.ingested(), 4 * 366);

        let statistics = aggregator.finalize()?;
        assert_eq!(statistics.len(), 366);
        for (offset, statistic) in statistics.iter().enumerate() {
            assert_eq!(statistic.day_offset, offset);
            assert_eq!(statistic.observations, 4);
            assert!((0.0..=1.0).contains(&statistic.rain_probability));
            assert!(statistic.mean_rainfall >= 0.0);
        }
        assert_eq!(statistics.get(0).map(|d| d.month_day()), Some(MonthDay::new(1, 1)));
        assert_eq!(statistics.get(365).map(|d| d.month_day()), Some(MonthDay::new(12, 31)));
        Ok(())
    }

    #[test]
    fn test_skipped_days_do_not_count() -> Result<(), AggregateError> {
        let calendar = CalendarIndex::shared();
        let mut aggregator = BucketAggregator::new(calendar);
        let mut records = full_years(calendar, 1961..1962);
        // Jan 1 observed in three more years, skipped in two
        records.retain(|record| record.month_day() != MonthDay::new(1, 1));
        for (year, amount) in [(1961, 1.0), (1963, 0.0), (1965, 3.0)] {
            records.push(RawRecord::new(year, 1, 1, amount));
        }
        aggregator.ingest_all(&records)?;

        let statistics = aggregator.finalize()?;
        let jan_1 = statistics.get(0).expect("Jan 1 statistic");
        assert_eq!(jan_1.observations, 3);
        assert!((jan_1.mean_rainfall - 4.0 / 3.0).abs() < 1e-12);
        assert!((jan_1.rain_probability - 2.0 / 3.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_ingestion_order_is_irrelevant() -> Result<(), AggregateError> {
        let calendar = CalendarIndex::shared();
        let records = full_years(calendar, 1950..1980);

        let mut forward = BucketAggregator::new(calendar);
        forward.ingest_all(&records)?;

        let mut backward = BucketAggregator::new(calendar);
        backward.ingest_all(records.iter().rev())?;

        // Interleave from both ends
        let mut shuffled = BucketAggregator::new(calendar);
        let (front, back) = records.split_at(records.len() / 2);
        for (a, b) in front.iter().zip(back.iter().rev()) {
            shuffled.ingest(b)?;
            shuffled.ingest(a)?;
        }

        let expected = forward.finalize()?;
        assert_eq!(backward.finalize()?, expected);
        assert_eq!(shuffled.finalize()?, expected);
        Ok(())
    }

    #[test]
    fn test_empty_bucket_is_fatal() -> Result<(), AggregateError> {
        let calendar = CalendarIndex::shared();
        let mut aggregator = BucketAggregator::new(calendar);
        let mut records = full_years(calendar, 1961..1963);
        records.retain(|record| record.month_day() != MonthDay::new(1, 2));
        aggregator.ingest_all(&records)?;

        assert_eq!(
            aggregator.finalize(),
            Err(AggregateError::EmptyBucket { month: 1, day: 2 })
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_records_are_kept() -> Result<(), AggregateError> {
        let calendar = CalendarIndex::shared();
        let mut aggregator = BucketAggregator::new(calendar);
        let record = RawRecord::new(1961, 6, 1, 2.0);
        aggregator.ingest(&record)?;
        aggregator.ingest(&record)?;
        assert_eq!(aggregator.bucket(6, 1), Some(&[2.0, 2.0][..]));
        Ok(())
    }

    #[test]
    fn test_record_outside_calendar_is_rejected() {
        let calendar = CalendarIndex::build(2001).expect("valid reference year");
        let mut aggregator = BucketAggregator::new(&calendar);
        assert_eq!(
            aggregator.ingest(&RawRecord::new(1964, 2, 29, 1.0)),
            Err(AggregateError::UnknownCalendarDay {
                year: 1964,
                month: 2,
                day: 29,
                source: CalendarError::InvalidCalendarInput {
                    month: 2,
                    day: 29,
                    reference_year: 2001
                }
            })
        );
        assert_eq!(aggregator.ingested(), 0);
    }
}

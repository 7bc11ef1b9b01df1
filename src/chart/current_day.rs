use crate::calendar::calendar_index::CalendarIndex;
use crate::chart::error::ChartError;
use crate::rainfall_data::bucket_aggregator::DailyStatistics;
use crate::types::day_statistic::DayStatistic;
use crate::types::traits::any_month_day::AnyMonthDay;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A point to annotate on the chart: where a calendar day sits on the time axis and
/// its mean rainfall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub day_offset: usize,
    pub timestamp: i64,
    pub mean_rainfall: f64,
}

/// Looks up the finalized statistic of a given calendar day.
pub struct CurrentDayLocator<'a> {
    calendar: &'a CalendarIndex,
    statistics: &'a DailyStatistics,
}

impl<'a> CurrentDayLocator<'a> {
    pub fn new(calendar: &'a CalendarIndex, statistics: &'a DailyStatistics) -> Self {
        Self {
            calendar,
            statistics,
        }
    }

    /// Resolves `day` to its offset and the statistic stored there.
    ///
    /// # Errors
    ///
    /// * [`ChartError::DayParsing`] if `day` cannot be read as a month and day.
    /// * [`ChartError::Calendar`] if the calendar has no such day. With a reference
    ///   year whose February has 28 days this includes February 29th, which is
    ///   reported rather than moved to February 28th.
    /// * [`ChartError::NoStatisticAtOffset`] if the statistics do not cover the offset.
    pub fn locate(&self, day: impl AnyMonthDay) -> Result<(usize, &'a DayStatistic), ChartError> {
        let month_day = day.get_month_day().ok_or(ChartError::DayParsing)?;
        let offset = self.calendar.day_offset(month_day.month, month_day.day)?;
        let statistic = self
            .statistics
            .get(offset)
            .ok_or(ChartError::NoStatisticAtOffset(offset))?;
        Ok((offset, statistic))
    }

    /// Chart marker for `day`.
    pub fn marker(&self, day: impl AnyMonthDay) -> Result<Marker, ChartError> {
        let (offset, statistic) = self.locate(day)?;
        Ok(Marker {
            day_offset: offset,
            timestamp: self.calendar.timestamp_ms(offset)?,
            mean_rainfall: statistic.mean_rainfall,
        })
    }

    /// Chart marker for the current local date.
    pub fn today(&self) -> Result<Marker, ChartError> {
        let now: DateTime<Local> = Local::now();
        self.marker(now.date_naive())
    }
}

//! The payload handed to a chart renderer.

use crate::calendar::calendar_index::CalendarIndex;
use crate::chart::axis_ticks::month_ticks;
use crate::chart::current_day::{CurrentDayLocator, Marker};
use crate::chart::error::ChartError;
use crate::rainfall_data::bucket_aggregator::DailyStatistics;
use crate::types::traits::any_month_day::AnyMonthDay;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw the day-of-year rainfall chart.
///
/// `timestamps`, `months`, `mean_rainfall` and `rain_probability` are parallel: entry
/// `i` describes the calendar day at offset `i`. Timestamps are epoch milliseconds
/// within the reference year, so every real year lands on the same axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub timestamps: Vec<i64>,
    /// Month (1-12) of each day, for per-month colouring.
    pub months: Vec<u32>,
    pub mean_rainfall: Vec<f64>,
    pub rain_probability: Vec<f64>,
    pub ticks: Vec<i64>,
    pub today: Marker,
}

impl ChartData {
    /// Assembles the chart payload, with the marker placed on `today`.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::NoStatisticAtOffset`] if `statistics` does not cover every
    /// day of `calendar`, and any error of [`CurrentDayLocator::marker`] for `today`.
    pub fn build(
        calendar: &CalendarIndex,
        statistics: &DailyStatistics,
        today: impl AnyMonthDay,
    ) -> Result<Self, ChartError> {
        let mut timestamps = Vec::with_capacity(calendar.len());
        let mut months = Vec::with_capacity(calendar.len());
        for offset in 0..calendar.len() {
            let statistic = statistics
                .get(offset)
                .ok_or(ChartError::NoStatisticAtOffset(offset))?;
            timestamps.push(calendar.timestamp_ms(offset)?);
            months.push(statistic.month);
        }

        let today = CurrentDayLocator::new(calendar, statistics).marker(today)?;

        Ok(Self {
            timestamps,
            months,
            mean_rainfall: statistics.mean_rainfall(),
            rain_probability: statistics.rain_probability(),
            ticks: month_ticks(calendar).to_vec(),
            today,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

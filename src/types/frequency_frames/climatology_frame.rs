// climatology_frame.rs

//! Polars view of finalized daily rainfall statistics.

use crate::calendar::calendar_index::CalendarIndex;
use crate::chart::error::ChartError;
use crate::filtering::ClimatologyFrameFilterExt;
use crate::rainfall_data::bucket_aggregator::DailyStatistics;
use crate::types::traits::any_month_day::AnyMonthDay;
use crate::RainfallError;
use polars::df;
use polars::prelude::{DataFrame, Expr, IntoLazy, LazyFrame};

const COL_DATE: &str = "date"; // reference-year date, YYYY-MM-DD
const COL_TIMESTAMP: &str = "timestamp"; // epoch milliseconds
const COL_DAY_OFFSET: &str = "day_offset";
const COL_MONTH: &str = "month";
const COL_DAY: &str = "day";
const COL_MEAN: &str = "mean_rainfall";
const COL_PROBABILITY: &str = "rain_probability";
const COL_OBSERVATIONS: &str = "observations";
const COL_MAX: &str = "max_rainfall";

/// Collects the statistics into a `DataFrame`, one row per calendar day in offset
/// order.
///
/// Columns: `date` (str), `timestamp` (i64), `day_offset`, `month`, `day`,
/// `observations` (u32), `mean_rainfall`, `rain_probability`, `max_rainfall` (f64).
pub fn statistics_frame(
    calendar: &CalendarIndex,
    statistics: &DailyStatistics,
) -> Result<DataFrame, RainfallError> {
    let len = statistics.len();
    let mut dates = Vec::with_capacity(len);
    let mut timestamps = Vec::with_capacity(len);
    let mut offsets = Vec::with_capacity(len);
    let mut months = Vec::with_capacity(len);
    let mut days = Vec::with_capacity(len);
    let mut means = Vec::with_capacity(len);
    let mut probabilities = Vec::with_capacity(len);
    let mut observations = Vec::with_capacity(len);
    let mut maxima = Vec::with_capacity(len);

    for statistic in statistics {
        let offset = statistic.day_offset;
        dates.push(calendar.date(offset)?.format("%Y-%m-%d").to_string());
        timestamps.push(calendar.timestamp_ms(offset)?);
        offsets.push(offset as u32);
        months.push(statistic.month);
        days.push(statistic.day);
        means.push(statistic.mean_rainfall);
        probabilities.push(statistic.rain_probability);
        observations.push(statistic.observations as u32);
        maxima.push(statistic.max_rainfall);
    }

    let frame = df!(
        COL_DATE => dates,
        COL_TIMESTAMP => timestamps,
        COL_DAY_OFFSET => offsets,
        COL_MONTH => months,
        COL_DAY => days,
        COL_OBSERVATIONS => observations,
        COL_MEAN => means,
        COL_PROBABILITY => probabilities,
        COL_MAX => maxima
    )?;
    Ok(frame)
}

/// A wrapper around a Polars `LazyFrame` holding per-calendar-day rainfall statistics.
///
/// Instances are typically obtained via [`crate::Climatology::frame`]. Filtering
/// methods return new frames and leave `self` untouched; nothing is computed until
/// `.frame.collect()`.
///
/// # Example
///
/// ```
/// use rainfall_normals::Climatology;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let month_lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
/// let mut dataset = String::new();
/// for (month, length) in (1..=12).zip(month_lengths) {
///     dataset.push_str(&format!("1961,{month}{}\n", ",0.5".repeat(length)));
/// }
/// let climatology = Climatology::from_text()
///     .text(&dataset)
///     .header_lines(0)
///     .reference_year(2001)
///     .call()?;
///
/// let march = climatology.frame()?.get_month(3)?.frame.collect()?;
/// assert_eq!(march.height(), 31);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClimatologyLazyFrame {
    /// The underlying Polars LazyFrame containing the daily statistics.
    pub frame: LazyFrame,
    calendar: CalendarIndex,
}

impl ClimatologyLazyFrame {
    /// Creates a new `ClimatologyLazyFrame` from a frame laid out by
    /// [`statistics_frame`] for `calendar`.
    pub fn new(frame: LazyFrame, calendar: CalendarIndex) -> Self {
        Self { frame, calendar }
    }

    /// Builds the lazy frame straight from finalized statistics.
    pub fn from_statistics(
        calendar: &CalendarIndex,
        statistics: &DailyStatistics,
    ) -> Result<Self, RainfallError> {
        Ok(Self::new(
            statistics_frame(calendar, statistics)?.lazy(),
            calendar.clone(),
        ))
    }

    /// Filters the statistics with an arbitrary Polars predicate.
    pub fn filter(&self, predicate: Expr) -> ClimatologyLazyFrame {
        ClimatologyLazyFrame::new(self.frame.clone().filter(predicate), self.calendar.clone())
    }

    fn map_frame(&self, apply: impl FnOnce(LazyFrame) -> LazyFrame) -> ClimatologyLazyFrame {
        ClimatologyLazyFrame::new(apply(self.frame.clone()), self.calendar.clone())
    }

    /// Keeps the days of `month`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CalendarError::InvalidCalendarInput`] (wrapped) if `month` is outside
    /// 1-12.
    pub fn get_month(&self, month: u32) -> Result<ClimatologyLazyFrame, RainfallError> {
        self.calendar.month_bounds(month)?;
        Ok(self.map_frame(|frame| frame.filter_month(month)))
    }

    /// Keeps the single row of calendar day `day`.
    pub fn get_at(&self, day: impl AnyMonthDay) -> Result<ClimatologyLazyFrame, RainfallError> {
        let offset = self.resolve(day)?;
        Ok(self.map_frame(|frame| frame.filter_offsets(offset, offset)))
    }

    /// Keeps the calendar days from `start` through `end`, both inclusive. A `start`
    /// later in the year than `end` yields an empty frame.
    pub fn get_range(
        &self,
        start: impl AnyMonthDay,
        end: impl AnyMonthDay,
    ) -> Result<ClimatologyLazyFrame, RainfallError> {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;
        Ok(self.map_frame(|frame| frame.filter_offsets(start, end)))
    }

    /// Keeps days on which it rained in at least `min_probability` of the years.
    pub fn rainy_days(&self, min_probability: f64) -> ClimatologyLazyFrame {
        self.map_frame(|frame| frame.filter_rain_probability(min_probability))
    }

    fn resolve(&self, day: impl AnyMonthDay) -> Result<usize, RainfallError> {
        let month_day = day.get_month_day().ok_or(ChartError::DayParsing)?;
        Ok(self.calendar.day_offset(month_day.month, month_day.day)?)
    }
}

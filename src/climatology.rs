//! This module provides the main entry point of the crate: turning a station's daily
//! rainfall dataset into per-calendar-day climatology statistics.
//!
//! A [`Climatology`] is built once from the dataset text (or file) and then answers
//! every chart question from its finalized statistics: the per-day series, the month
//! ticks, the marker for a given day and a Polars view of the whole table.

use crate::calendar::calendar_index::{CalendarIndex, DEFAULT_REFERENCE_YEAR};
use crate::chart::axis_ticks::month_ticks;
use crate::chart::chart_data::ChartData;
use crate::chart::current_day::{CurrentDayLocator, Marker};
use crate::error::RainfallError;
use crate::rainfall_data::bucket_aggregator::{BucketAggregator, DailyStatistics};
use crate::rainfall_data::data_loader::DatasetLoader;
use crate::rainfall_data::record_ingestor::{RecordIngestor, DEFAULT_DELIMITER};
use crate::types::day_statistic::DayStatistic;
use crate::types::frequency_frames::climatology_frame::{statistics_frame, ClimatologyLazyFrame};
use crate::types::traits::any_month_day::AnyMonthDay;
use crate::utils::{data_rows, DEFAULT_HEADER_LINES};
use bon::bon;
use log::{debug, info, warn};
use polars::prelude::DataFrame;
use std::path::Path;

/// Daily rainfall climatology of one station: for every day of the reference calendar,
/// the mean rainfall and the probability of rain across all years of the dataset.
///
/// Create an instance using [`Climatology::from_text()`] for data already in memory or
/// [`Climatology::from_path()`] to read a dataset file.
///
/// # Examples
///
/// ```rust
/// # use rainfall_normals::{Climatology, RainfallError};
/// # fn main() -> Result<(), RainfallError> {
/// let month_lengths = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
/// let mut dataset = String::from("station\nperiod\nunit\nyear,month,days\n");
/// for (month, length) in (1..=12).zip(month_lengths) {
///     dataset.push_str(&format!("2000,{month}{}\n", ",2.5".repeat(length)));
///     dataset.push_str(&format!("2001,{month}{}\n", ",0.0".repeat(length)));
/// }
///
/// let climatology = Climatology::from_text().text(&dataset).call()?;
/// assert_eq!(climatology.statistics().len(), 366);
///
/// let (offset, statistic) = climatology.locate((3, 10))?;
/// assert_eq!(offset, 69);
/// assert_eq!(statistic.mean_rainfall, 1.25);
/// assert_eq!(statistic.rain_probability, 0.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Climatology {
    calendar: CalendarIndex,
    statistics: DailyStatistics,
}

#[bon]
impl Climatology {
    /// Runs the whole pipeline over dataset text.
    ///
    /// Every data row is parsed by a [`RecordIngestor`], its observed amounts are fed
    /// to a [`BucketAggregator`] and the buckets are finalized into one statistic per
    /// calendar day.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.text(&str)`: **Required.** The dataset contents.
    /// * `.reference_year(i32)`: Optional. Year whose calendar lays out the days. Defaults to `2000`.
    /// * `.header_lines(usize)`: Optional. Leading metadata lines to skip. Defaults to `4`.
    /// * `.delimiter(char)`: Optional. Field separator of the data rows. Defaults to `','`.
    ///
    /// # Errors
    ///
    /// Returns [`RainfallError::Ingest`] with the 1-based line number for the first row
    /// that cannot be parsed, [`RainfallError::Placement`] with the line number for a
    /// value on a day the calendar does not have, [`RainfallError::Aggregate`] for a
    /// calendar day without any observation, and
    /// [`RainfallError::Calendar`] if the reference year is unsupported. No partial
    /// result is returned.
    #[builder]
    pub fn from_text(
        text: &str,
        reference_year: Option<i32>,
        header_lines: Option<usize>,
        delimiter: Option<char>,
    ) -> Result<Self, RainfallError> {
        let calendar = CalendarIndex::build(reference_year.unwrap_or(DEFAULT_REFERENCE_YEAR))?;
        let ingestor = RecordIngestor::new(delimiter.unwrap_or(DEFAULT_DELIMITER));
        let header_lines = header_lines.unwrap_or(DEFAULT_HEADER_LINES);

        let mut aggregator = BucketAggregator::new(&calendar);
        let mut rows = 0usize;
        let mut skipped = 0usize;
        for (line, content) in data_rows(text, header_lines) {
            let row = ingestor.parse(content).map_err(|source| {
                warn!("Rejecting dataset at line {}: {}", line, source);
                RainfallError::Ingest { line, source }
            })?;
            aggregator.ingest_all(row.records()).map_err(|source| {
                warn!("Rejecting dataset at line {}: {}", line, source);
                RainfallError::Placement { line, source }
            })?;
            debug!(
                "Line {}: {}-{:02} with {} readings",
                line,
                row.year,
                row.month,
                row.readings.len()
            );
            rows += 1;
            skipped += row.skipped();
        }
        info!(
            "Ingested {} rows ({} observations, {} empty fields)",
            rows,
            aggregator.ingested(),
            skipped
        );

        let statistics = aggregator.finalize()?;
        Ok(Self {
            calendar,
            statistics,
        })
    }

    /// Reads a dataset file and runs the pipeline over it.
    ///
    /// Takes the same optional settings as [`Climatology::from_text()`].
    ///
    /// # Errors
    ///
    /// Returns [`RainfallError::DatasetRead`] if the file cannot be read, and any error
    /// of [`Climatology::from_text()`] otherwise.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use rainfall_normals::{Climatology, RainfallError};
    /// # use std::path::Path;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), RainfallError> {
    /// let climatology = Climatology::from_path()
    ///     .path(Path::new("data/praha-klementinum.csv"))
    ///     .delimiter(';')
    ///     .call()
    ///     .await?;
    /// println!("{}", climatology.chart_data((6, 1))?.to_json().unwrap_or_default());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn from_path(
        path: &Path,
        reference_year: Option<i32>,
        header_lines: Option<usize>,
        delimiter: Option<char>,
    ) -> Result<Self, RainfallError> {
        let text = DatasetLoader::new(path).read().await?;
        Self::from_text()
            .text(&text)
            .maybe_reference_year(reference_year)
            .maybe_header_lines(header_lines)
            .maybe_delimiter(delimiter)
            .call()
    }

    pub fn calendar(&self) -> &CalendarIndex {
        &self.calendar
    }

    /// Statistics for every calendar day, in day-of-year order.
    pub fn statistics(&self) -> &DailyStatistics {
        &self.statistics
    }

    /// Month tick timestamps for the chart's x axis.
    pub fn ticks(&self) -> [i64; 12] {
        month_ticks(&self.calendar)
    }

    pub fn locator(&self) -> CurrentDayLocator<'_> {
        CurrentDayLocator::new(&self.calendar, &self.statistics)
    }

    /// Offset and statistic of calendar day `day`.
    pub fn locate(&self, day: impl AnyMonthDay) -> Result<(usize, &DayStatistic), RainfallError> {
        Ok(self.locator().locate(day)?)
    }

    /// Chart marker for the current local date.
    pub fn today(&self) -> Result<Marker, RainfallError> {
        Ok(self.locator().today()?)
    }

    /// Chart payload with the marker on `today`.
    pub fn chart_data(&self, today: impl AnyMonthDay) -> Result<ChartData, RainfallError> {
        Ok(ChartData::build(&self.calendar, &self.statistics, today)?)
    }

    /// The statistics as a lazily filterable Polars frame.
    pub fn frame(&self) -> Result<ClimatologyLazyFrame, RainfallError> {
        ClimatologyLazyFrame::from_statistics(&self.calendar, &self.statistics)
    }

    pub fn to_frame(&self) -> Result<DataFrame, RainfallError> {
        statistics_frame(&self.calendar, &self.statistics)
    }
}

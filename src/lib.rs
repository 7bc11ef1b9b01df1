mod calendar;
mod chart;
mod climatology;
mod error;
mod filtering;
mod rainfall_data;
mod types;
mod utils;

pub use climatology::*;
pub use error::RainfallError;

pub use calendar::calendar_index::{CalendarIndex, DAY_IN_MS, DEFAULT_REFERENCE_YEAR};
pub use calendar::error::CalendarError;

pub use rainfall_data::bucket_aggregator::{BucketAggregator, DailyStatistics};
pub use rainfall_data::data_loader::DatasetLoader;
pub use rainfall_data::error::{AggregateError, IngestError};
pub use rainfall_data::record_ingestor::{RecordIngestor, DEFAULT_DELIMITER};

pub use chart::axis_ticks::month_ticks;
pub use chart::chart_data::ChartData;
pub use chart::current_day::{CurrentDayLocator, Marker};
pub use chart::error::ChartError;

pub use types::day_statistic::DayStatistic;
pub use types::raw_record::{DayReading, ParsedRow, RawRecord};
pub use types::traits::any_month_day::AnyMonthDay;
pub use types::traits::types::MonthDay;

pub use filtering::ClimatologyFrameFilterExt;
pub use types::frequency_frames::climatology_frame::*;

pub use utils::{data_rows, DEFAULT_HEADER_LINES};

use crate::calendar::error::CalendarError;
use crate::chart::error::ChartError;
use crate::rainfall_data::error::{AggregateError, IngestError};
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RainfallError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("Failed to ingest dataset line {line}")]
    Ingest {
        line: usize,
        #[source]
        source: IngestError,
    },

    #[error("Failed to place observations of dataset line {line}")]
    Placement {
        line: usize,
        #[source]
        source: AggregateError,
    },

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Failed to read rainfall dataset '{0}'")]
    DatasetRead(PathBuf, #[source] std::io::Error),

    #[error("Failed processing statistics frame: {0}")]
    Frame(#[from] PolarsError),
}

use crate::calendar::error::CalendarError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("Delimiter '{0}' is not a single ASCII character")]
    UnsupportedDelimiter(char),

    #[error("Malformed CSV row: {0}")]
    MalformedRow(String),

    #[error("Malformed row header: {field} field '{value}' is not valid")]
    MalformedHeader { field: &'static str, value: String },

    #[error("Malformed rainfall amount '{value}' for {year:04}-{month:02}-{day:02}")]
    MalformedAmount {
        year: i32,
        month: u32,
        day: u32,
        value: String,
    },

    #[error("Row for {year:04}-{month:02} has {found} amount fields, more than any month has days")]
    TooManyDays { year: i32, month: u32, found: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregateError {
    #[error("Observation for {year:04}-{month:02}-{day:02} does not fit the reference calendar")]
    UnknownCalendarDay {
        year: i32,
        month: u32,
        day: u32,
        #[source]
        source: CalendarError,
    },

    #[error("No observations at all for calendar day {month:02}-{day:02}")]
    EmptyBucket { month: u32, day: u32 },
}

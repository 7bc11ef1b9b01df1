use crate::calendar::error::CalendarError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("No finalized statistic at day offset {0}")]
    NoStatisticAtOffset(usize),

    #[error("Could not resolve the requested day to a month and day-of-month")]
    DayParsing,
}

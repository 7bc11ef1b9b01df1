use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// `day` is 0 when only a month was requested.
    #[error("Invalid calendar input: {month:02}-{day:02} is not a day of reference year {reference_year:04}")]
    InvalidCalendarInput {
        month: u32,
        day: u32,
        reference_year: i32,
    },

    #[error("Day offset {offset} is outside the {len}-day reference calendar")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Reference year {0} cannot be represented by the calendar")]
    UnsupportedReferenceYear(i32),
}

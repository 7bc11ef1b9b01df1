//! The reference-year calendar every observation is folded onto.
//!
//! Real years disagree on where March 1st falls, so all day-of-year arithmetic goes
//! through a single [`CalendarIndex`] built from one fixed reference year. Each
//! calendar day `(month, day)` gets a zero-based offset, and the same offsets are used
//! for bucket ordering, chart timestamps, axis ticks and the "today" marker.

use crate::calendar::error::CalendarError;
use crate::types::traits::types::MonthDay;
use crate::types::traits::utils::{days_in_month, midnight_utc_ms};
use chrono::{Duration, NaiveDate};
use std::ops::Range;
use std::sync::OnceLock;

/// Reference year used unless another one is configured. 2000 is a leap year, so
/// February 29th has its own slot and the calendar spans 366 days.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2000;

/// Milliseconds in one calendar day.
pub const DAY_IN_MS: i64 = 86_400_000;

/// Immutable lookup table between calendar days and day-of-year offsets.
///
/// Offsets are contiguous and strictly increasing from January 1st (offset 0) to
/// December 31st (offset `len() - 1`). Month bounds are half-open: the end of one
/// month is the start of the next.
///
/// # Examples
///
/// ```
/// use rainfall_normals::CalendarIndex;
///
/// let calendar = CalendarIndex::build(2000)?;
/// assert_eq!(calendar.len(), 366);
/// assert_eq!(calendar.day_offset(3, 1)?, 60);
/// assert_eq!(calendar.month_bounds(2)?, 31..60);
///
/// // A non-leap reference year has no February 29th.
/// let strict = CalendarIndex::build(2001)?;
/// assert!(strict.day_offset(2, 29).is_err());
/// # Ok::<(), rainfall_normals::CalendarError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarIndex {
    reference_year: i32,
    /// `month_starts[m - 1]` is the first offset of month `m`; the last entry is the
    /// total number of days.
    month_starts: [usize; 13],
    year_start_ms: i64,
}

impl CalendarIndex {
    /// Builds the index from the calendar rules of `reference_year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedReferenceYear`] if chrono cannot represent
    /// January 1st of `reference_year` or of the year after it.
    pub fn build(reference_year: i32) -> Result<Self, CalendarError> {
        let unsupported = || CalendarError::UnsupportedReferenceYear(reference_year);

        let mut month_starts = [0usize; 13];
        for month in 1..=12u32 {
            let length = days_in_month(reference_year, month).ok_or_else(unsupported)?;
            month_starts[month as usize] = month_starts[month as usize - 1] + length as usize;
        }

        let first_day = NaiveDate::from_ymd_opt(reference_year, 1, 1).ok_or_else(unsupported)?;
        let year_start_ms = midnight_utc_ms(first_day).ok_or_else(unsupported)?;

        Ok(Self {
            reference_year,
            month_starts,
            year_start_ms,
        })
    }

    /// The index for [`DEFAULT_REFERENCE_YEAR`], built once per process.
    pub fn shared() -> &'static CalendarIndex {
        static SHARED: OnceLock<CalendarIndex> = OnceLock::new();
        SHARED.get_or_init(|| {
            CalendarIndex::build(DEFAULT_REFERENCE_YEAR)
                .expect("the default reference year is representable")
        })
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Number of calendar days (slots) in the reference year.
    pub fn len(&self) -> usize {
        self.month_starts[12]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn month_length(&self, month: u32) -> Result<u32, CalendarError> {
        let bounds = self.month_bounds(month)?;
        Ok((bounds.end - bounds.start) as u32)
    }

    /// Half-open offset range `[start, end)` covered by `month`.
    ///
    /// A month outside 1-12 is reported as [`CalendarError::InvalidCalendarInput`]
    /// with `day` 0.
    pub fn month_bounds(&self, month: u32) -> Result<Range<usize>, CalendarError> {
        self.bounds(month).ok_or(self.invalid(month, 0))
    }

    /// Zero-based day-of-year offset of `(month, day)` in the reference year.
    pub fn day_offset(&self, month: u32, day: u32) -> Result<usize, CalendarError> {
        let bounds = self.bounds(month).ok_or(self.invalid(month, day))?;
        let length = bounds.end - bounds.start;
        if day == 0 || day as usize > length {
            return Err(self.invalid(month, day));
        }
        Ok(bounds.start + day as usize - 1)
    }

    fn bounds(&self, month: u32) -> Option<Range<usize>> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let index = month as usize;
        Some(self.month_starts[index - 1]..self.month_starts[index])
    }

    fn invalid(&self, month: u32, day: u32) -> CalendarError {
        CalendarError::InvalidCalendarInput {
            month,
            day,
            reference_year: self.reference_year,
        }
    }

    /// Reverse of [`CalendarIndex::day_offset`].
    pub fn month_day(&self, offset: usize) -> Result<MonthDay, CalendarError> {
        if offset >= self.len() {
            return Err(CalendarError::OffsetOutOfRange {
                offset,
                len: self.len(),
            });
        }
        // month_starts[0] == 0 <= offset, so a month always matches
        let month = (1..=12u32)
            .rev()
            .find(|&month| self.month_starts[month as usize - 1] <= offset)
            .unwrap_or(1);
        let day = offset - self.month_starts[month as usize - 1] + 1;
        Ok(MonthDay::new(month, day as u32))
    }

    /// Every calendar day of the reference year, in offset order.
    pub fn days(&self) -> impl Iterator<Item = MonthDay> + '_ {
        (1..=12u32).flat_map(move |month| {
            let index = month as usize;
            let length = self.month_starts[index] - self.month_starts[index - 1];
            (1..=length as u32).map(move |day| MonthDay::new(month, day))
        })
    }

    /// The reference-year date at `offset`.
    pub fn date(&self, offset: usize) -> Result<NaiveDate, CalendarError> {
        let month_day = self.month_day(offset)?;
        NaiveDate::from_ymd_opt(self.reference_year, month_day.month, month_day.day).ok_or(
            CalendarError::InvalidCalendarInput {
                month: month_day.month,
                day: month_day.day,
                reference_year: self.reference_year,
            },
        )
    }

    /// UTC midnight of the day at `offset`, in milliseconds since the Unix epoch.
    pub fn timestamp_ms(&self, offset: usize) -> Result<i64, CalendarError> {
        if offset >= self.len() {
            return Err(CalendarError::OffsetOutOfRange {
                offset,
                len: self.len(),
            });
        }
        Ok(self.boundary_ms(offset))
    }

    /// January 1st of the reference year, in milliseconds since the Unix epoch.
    pub fn year_start_ms(&self) -> i64 {
        self.year_start_ms
    }

    /// January 1st of the year after the reference year, in milliseconds since the
    /// Unix epoch.
    pub fn year_end_ms(&self) -> i64 {
        self.boundary_ms(self.len())
    }

    /// Timestamp of an offset boundary; `offset == len()` is the end of the year.
    pub(crate) fn boundary_ms(&self, offset: usize) -> i64 {
        self.year_start_ms + Duration::days(offset as i64).num_milliseconds()
    }
}

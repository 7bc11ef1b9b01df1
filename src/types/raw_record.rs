use crate::types::traits::types::MonthDay;
use serde::{Deserialize, Serialize};

/// One observed daily rainfall amount (mm) for one calendar day of one year.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct RawRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub amount: f64,
}

impl RawRecord {
    pub fn new(year: i32, month: u32, day: u32, amount: f64) -> Self {
        Self {
            year,
            month,
            day,
            amount,
        }
    }

    pub fn month_day(&self) -> MonthDay {
        MonthDay::new(self.month, self.day)
    }
}

/// What a single amount field of a dataset row turned out to be.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DayReading {
    /// A value was recorded for this day.
    Observed(RawRecord),
    /// The field was empty: no observation exists for this day. This is *not* zero
    /// rainfall and must never enter the statistics.
    Skip { year: i32, month: u32, day: u32 },
}

/// All readings of one dataset row (one month of one year).
#[derive(Debug, PartialEq, Clone)]
pub struct ParsedRow {
    pub year: i32,
    pub month: u32,
    pub readings: Vec<DayReading>,
}

impl ParsedRow {
    /// The observed records of this row, skipped days left out.
    pub fn records(&self) -> impl Iterator<Item = &RawRecord> + '_ {
        self.readings.iter().filter_map(|reading| match reading {
            DayReading::Observed(record) => Some(record),
            DayReading::Skip { .. } => None,
        })
    }

    pub fn skipped(&self) -> usize {
        self.readings
            .iter()
            .filter(|reading| matches!(reading, DayReading::Skip { .. }))
            .count()
    }
}

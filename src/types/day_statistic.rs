use crate::types::traits::types::MonthDay;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Aggregate rainfall figures for one calendar day across every year of a dataset.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DayStatistic {
    /// Zero-based day-of-year offset in the reference calendar.
    pub day_offset: usize,
    pub month: u32,
    pub day: u32,
    /// Arithmetic mean of the observed amounts (mm).
    pub mean_rainfall: f64,
    /// Fraction of observed years with strictly positive rainfall, in `[0, 1]`.
    pub rain_probability: f64,
    /// Number of years with an observation for this day.
    pub observations: usize,
    /// Largest observed amount (mm).
    pub max_rainfall: f64,
}

impl DayStatistic {
    /// Summarises the observed `amounts` of one calendar day.
    ///
    /// Returns `None` for an empty slice: mean and probability are undefined without
    /// observations. Amounts are summed in ascending order, so the result does not
    /// depend on the order in which they were collected.
    pub(crate) fn from_amounts(
        day_offset: usize,
        month_day: MonthDay,
        amounts: &[f64],
    ) -> Option<Self> {
        if amounts.is_empty() {
            return None;
        }
        let mut sorted: Vec<OrderedFloat<f64>> =
            amounts.iter().copied().map(OrderedFloat).collect();
        sorted.sort_unstable();

        let observations = sorted.len();
        let total: f64 = sorted.iter().map(|amount| amount.0).sum();
        let rainy_days = sorted.iter().filter(|amount| amount.0 > 0.0).count();
        let max_rainfall = sorted.last().map(|amount| amount.0)?;

        Some(Self {
            day_offset,
            month: month_day.month,
            day: month_day.day,
            mean_rainfall: total / observations as f64,
            rain_probability: rainy_days as f64 / observations as f64,
            observations,
            max_rainfall,
        })
    }

    pub fn month_day(&self) -> MonthDay {
        MonthDay::new(self.month, self.day)
    }
}

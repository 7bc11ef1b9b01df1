use polars::prelude::{col, lit, LazyFrame};

/// Filters over a climatology frame (see [`crate::ClimatologyLazyFrame`] for the
/// column layout).
pub trait ClimatologyFrameFilterExt {
    /// Keeps the days of one month (1-12).
    fn filter_month(self, month: u32) -> LazyFrame;

    /// Keeps days whose `day_offset` lies in `start..=end`.
    ///
    /// # Arguments
    /// * `start`: The first day offset (inclusive).
    /// * `end`: The last day offset (inclusive).
    fn filter_offsets(self, start: usize, end: usize) -> LazyFrame;

    /// Keeps days on which it rained in at least `min_probability` of the years.
    fn filter_rain_probability(self, min_probability: f64) -> LazyFrame;
}

impl ClimatologyFrameFilterExt for LazyFrame {
    fn filter_month(self, month: u32) -> LazyFrame {
        self.filter(col("month").eq(lit(month)))
    }

    fn filter_offsets(self, start: usize, end: usize) -> LazyFrame {
        self.filter(
            col("day_offset")
                .gt_eq(lit(start as u32))
                .and(col("day_offset").lt_eq(lit(end as u32))),
        )
    }

    fn filter_rain_probability(self, min_probability: f64) -> LazyFrame {
        self.filter(col("rain_probability").gt_eq(lit(min_probability)))
    }
}

use crate::types::traits::types::MonthDay;
use chrono::{Datelike, NaiveDate};

/// Anything that names a calendar day independent of its year.
///
/// Implemented for [`MonthDay`], `(month, day)` tuples, [`NaiveDate`] (the year is
/// dropped) and strings in either `MM-DD` or `YYYY-MM-DD` form.
///
/// ```
/// use rainfall_normals::{AnyMonthDay, MonthDay};
///
/// assert_eq!("03-10".get_month_day(), Some(MonthDay::new(3, 10)));
/// assert_eq!("1987-03-10".get_month_day(), Some(MonthDay::new(3, 10)));
/// assert_eq!((12, 31).get_month_day(), Some(MonthDay::new(12, 31)));
/// assert_eq!("tomorrow".get_month_day(), None);
/// ```
pub trait AnyMonthDay {
    fn get_month_day(self) -> Option<MonthDay>;
}

impl AnyMonthDay for MonthDay {
    fn get_month_day(self) -> Option<MonthDay> {
        Some(self)
    }
}

impl AnyMonthDay for (u32, u32) {
    fn get_month_day(self) -> Option<MonthDay> {
        Some(MonthDay::new(self.0, self.1))
    }
}

impl AnyMonthDay for NaiveDate {
    fn get_month_day(self) -> Option<MonthDay> {
        Some(MonthDay::new(self.month(), self.day()))
    }
}

impl AnyMonthDay for &str {
    fn get_month_day(self) -> Option<MonthDay> {
        let trimmed = self.trim();
        // Full dates go through chrono so impossible dates are rejected
        if let Ok(naive_date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return naive_date.get_month_day();
        }
        let (month, day) = trimmed.split_once('-')?;
        Some(MonthDay::new(month.parse().ok()?, day.parse().ok()?))
    }
}

impl AnyMonthDay for String {
    fn get_month_day(self) -> Option<MonthDay> {
        self.as_str().get_month_day()
    }
}

pub mod any_month_day;
pub mod types;
pub mod utils;

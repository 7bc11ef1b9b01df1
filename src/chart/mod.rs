pub mod axis_ticks;
pub mod chart_data;
pub mod current_day;
pub mod error;

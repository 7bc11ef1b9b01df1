pub mod calendar_index;
pub mod error;

pub mod day_statistic;
pub mod frequency_frames;
pub mod raw_record;
pub mod traits;

pub mod bucket_aggregator;
pub mod data_loader;
pub mod error;
pub mod record_ingestor;

//! Services for dataset loading and KPI aggregation

pub mod aggregator;
pub mod data_loader;
pub mod series;

pub use aggregator::Aggregator;
pub use data_loader::DatasetLoader;
pub use series::{AlignedSeries, SeriesBuilder};

// Service exports
pub mod dataset;

pub use dataset::{parse_dataset, DatasetError, DatasetSource, FileDataset, InlineDataset};

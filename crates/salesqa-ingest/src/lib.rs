pub mod dataset;
pub mod profile;

pub use dataset::read_dataset;
pub use profile::{ColumnProfile, profile};

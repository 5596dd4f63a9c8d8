pub mod use_cases;

pub use use_cases::batch_runner::{BatchSummary, CatalogExporter};
pub use use_cases::record_transformer::transform;

pub mod batch_runner;
pub mod date_interpreter;
pub mod material_splitter;
pub mod record_transformer;
pub mod title_extractor;

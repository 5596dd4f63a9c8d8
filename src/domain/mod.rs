pub mod error;

// Catalog record types
pub mod catalog;

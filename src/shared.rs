pub mod errors;
pub mod settings;
pub mod types;

// Re-export ConversionError for convenience
pub use errors::{ConversionError, EngineResult};

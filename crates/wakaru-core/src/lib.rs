pub mod language;
pub mod types;

pub use language::{FrequencyProvider, ScriptVariants, WordValidity};
pub use types::{WordMatch, WordStatus};

pub mod frequency;
pub mod lexicon;
pub mod script;
pub mod transforms;

pub use frequency::{FrequencyLevel, JapaneseFrequency};
pub use lexicon::{LexiconError, WordList};
pub use script::JapaneseScript;
pub use transforms::descriptor;

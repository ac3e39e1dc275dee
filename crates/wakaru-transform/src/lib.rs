pub mod descriptor;
pub mod error;
pub mod transformer;

pub use descriptor::{ConditionSpec, LanguageDescriptor, RuleKind, RuleSpec, TransformSpec};
pub use error::RegistrationError;
pub use transformer::{LanguageTransformer, TraceFrame, TransformedText};

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("maximum number of primitive conditions (32) exceeded at '{0}'")]
    ConditionLimitExceeded(String),

    #[error("conditions could not be resolved (cyclic or missing references): {0}")]
    UnresolvableConditions(String),

    #[error("transform '{transform}' references unknown condition '{condition}'")]
    UnknownCondition {
        transform: String,
        condition: String,
    },
}

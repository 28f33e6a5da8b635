use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("chain id {0} is registered more than once")]
    DuplicateChainId(u64),

    #[error("frontend path `{field}` must not be empty")]
    EmptyPath { field: &'static str },

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: &'static str, reason: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

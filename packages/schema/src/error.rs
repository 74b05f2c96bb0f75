use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("invalid field address: {0}")]
    Address(String),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("evaluation error: {0}")]
    Eval(#[from] formweave_evaluator::EvalError),

    #[error("schema error: {0}")]
    Schema(#[from] formweave_schema::SchemaError),
}

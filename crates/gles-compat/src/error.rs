//! Error types for gles-compat

use thiserror::Error;

use crate::value::Value;

pub type CallResult = std::result::Result<Value, CallError>;

/// Invocation-time failures. Resolution and injection are total and
/// never surface these; only calling an installed entry can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallError {
    #[error("OpenGL API call \"{0}\" is not available")]
    Unavailable(String),

    #[error("no symbol named \"{symbol}\" in this namespace")]
    NotBound { symbol: String },

    #[error("{symbol}: integer type name \"{type_name}\" is not defined by the runtime")]
    UnknownTypeName { symbol: String, type_name: String },

    #[error("{symbol}: expected {expected} arguments, got {got}")]
    ArgumentCount {
        symbol: String,
        expected: usize,
        got: usize,
    },

    #[error("{symbol}: argument {index} must be {expected}")]
    ArgumentType {
        symbol: String,
        index: usize,
        expected: &'static str,
    },
}

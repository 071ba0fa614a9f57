use std::fmt::Display;
use std::num::ParseFloatError;

#[derive(Debug)]
pub enum Error {
    ParseError(String),
    SerializationError(String),
    ///Operation called before the state it needs exists,
    /// e.g. `get_result` before `graph_part`
    InvalidState(String),
    ///Value has the right Rust type but violates a field constraint,
    /// e.g. a NaN learning rate
    TypeConstraint(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ParseError(msg) => write!(f, "parse error: {msg}"),
            Error::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            Error::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            Error::TypeConstraint(msg) => write!(f, "type constraint: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Self {
        Error::ParseError(err.to_string())
    }
}
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

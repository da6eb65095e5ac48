use crate::{hwaddr::HardwareAddrError, record::Field};
use std::net::AddrParseError;
use std::num::ParseIntError;
use thiserror::Error;

/// Why a log line could not be decoded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// the line doesn't have the fixed number of columns
    #[error("expected {expected} fields, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("parsing {field}: {value:?}")]
    MalformedField {
        field: Field,
        value: String,
        #[source]
        cause: FieldError,
    },
}

impl DecodeError {
    /// The offending column, `None` for structural errors
    pub fn field(&self) -> Option<Field> {
        match self {
            DecodeError::FieldCount { .. } => None,
            DecodeError::MalformedField { field, .. } => Some(*field),
        }
    }

    pub fn cause(&self) -> Option<&FieldError> {
        match self {
            DecodeError::FieldCount { .. } => None,
            DecodeError::MalformedField { cause, .. } => Some(cause),
        }
    }
}

/// Grammar violation within a single column
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("missing leading separator")]
    MissingSeparator,

    #[error("timestamp doesn't match layout YYYY-MM-DD HH:MM:SS.ffffff +HHMM")]
    TimeLayout,

    #[error("invalid timestamp: {0}")]
    Time(#[from] chrono::ParseError),

    #[error("invalid hardware address: {0}")]
    HardwareAddr(#[from] HardwareAddrError),

    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("flag can only be 0 or 1, got {0}")]
    Flag(i64),

    #[error("invalid IP address: {0}")]
    Ip(#[from] AddrParseError),
}

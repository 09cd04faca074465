use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    #[error("destination is not a mutable reference: {0}")]
    NotAReference(&'static str),

    #[error("destination should be a mutable reference to a record, got {0}")]
    NotARecord(&'static str),

    #[error("required field missing: {0}")]
    RequiredFieldMissing(String),

    #[error("cannot convert to {target}: {value}")]
    TypeNotConvertible { target: &'static str, value: String },

    #[error("unsupported field type{}: {type_name}", default_suffix(.for_default))]
    UnsupportedFieldType {
        type_name: &'static str,
        for_default: bool,
    },

    #[error("integer {value} is out of range for {target}")]
    IntegerOutOfRange { value: i64, target: &'static str },

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    #[error(transparent)]
    ParseBool(#[from] ParseBoolError),
}

fn default_suffix(for_default: &bool) -> &'static str {
    if *for_default {
        " for default value"
    } else {
        ""
    }
}

//! Error model for cast resolution.
//! Every failure is local and returned to the immediate caller; none is fatal to the process.

use thiserror::Error;

use crate::types::CanonicalType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    /// The canonical type has no native spelling usable in an explicit cast.
    #[error("{}", unsupported_message(.0))]
    UnsupportedCastTarget(CanonicalType),

    #[error("mismatch parameter count: expected {expected} got {got}")]
    ParamCountMismatch { expected: usize, got: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn unsupported_message(ty: &CanonicalType) -> String {
    match ty {
        CanonicalType::Array => "unsupported cast target ARRAY: arrays of arrays are not supported".to_string(),
        other => format!("unsupported cast target {}: no native type to cast to", other),
    }
}

impl CastError {
    pub fn code_str(&self) -> &'static str {
        match self {
            CastError::UnsupportedCastTarget(_) => "unsupported_cast_target",
            CastError::ParamCountMismatch { .. } => "param_count_mismatch",
            CastError::InvalidInput(_) => "invalid_input",
        }
    }

    /// Pgwire mapping: return (sqlstate, severity, message)
    pub fn pgwire_fields(&self) -> (&'static str, &'static str, String) {
        let msg = self.to_string();
        match self {
            CastError::UnsupportedCastTarget(_) => ("42846", "ERROR", msg), // cannot_coerce
            CastError::ParamCountMismatch { .. } => ("08P01", "ERROR", msg), // protocol_violation
            CastError::InvalidInput(_) => ("22023", "ERROR", msg),           // invalid_parameter_value
        }
    }
}

pub type CastResult<T> = Result<T, CastError>;

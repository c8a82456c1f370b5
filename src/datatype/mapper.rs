use tracing::trace;

use crate::datatype::catalog::{self, BOOL, DATE, DECIMAL, FLOAT8, INT4, INT8, TIME, VARCHAR};
use crate::datatype::infer::infer_type;
use crate::datatype::value::BindValue;
use crate::error::{CastError, CastResult};
use crate::types::CanonicalType;

/// Canonical type of a supported native name. `None` when `name` is not in the catalog.
pub fn native_to_canonical(name: &str) -> Option<CanonicalType> {
    catalog::lookup(name).map(|nt| nt.canonical)
}

/// Authoritative native spelling used when emitting a cast for `ty`.
pub fn canonical_to_native(ty: CanonicalType) -> CastResult<&'static str> {
    match ty {
        CanonicalType::Long => Ok(INT8),
        CanonicalType::Integer => Ok(INT4),
        CanonicalType::Float => Ok(DECIMAL),
        CanonicalType::String => Ok(VARCHAR),
        CanonicalType::Boolean => Ok(BOOL),
        CanonicalType::Date => Ok(DATE),
        CanonicalType::Time => Ok(TIME),
        CanonicalType::Double => Ok(FLOAT8),
        CanonicalType::Array
        | CanonicalType::Null
        | CanonicalType::Timestamp
        | CanonicalType::JsonObject => Err(CastError::UnsupportedCastTarget(ty)),
    }
}

/// Native array spelling for a list, typed by its first non-null element.
///
/// Yields `Ok(None)` (bind without a cast) for empty or all-null lists and for
/// element types that have no native spelling. Only nested arrays are an error.
pub fn array_cast(items: &[BindValue]) -> CastResult<Option<String>> {
    let elem = match items.iter().map(infer_type).find(|t| *t != CanonicalType::Null) {
        Some(t) => t,
        None => return Ok(None),
    };
    trace!("array cast: element type {} over {} item(s)", elem, items.len());
    match elem {
        CanonicalType::Array => Err(CastError::UnsupportedCastTarget(CanonicalType::Array)),
        CanonicalType::JsonObject | CanonicalType::Timestamp => Ok(None),
        scalar => Ok(Some(format!("{}[]", canonical_to_native(scalar)?))),
    }
}

//! Implicit typing of bound values that carry no explicit cast.
//! Classification never fails: anything unrecognized is a STRING.

use crate::datatype::value::BindValue;
use crate::types::CanonicalType;

pub fn infer_type(value: &BindValue) -> CanonicalType {
    match value {
        BindValue::Null => CanonicalType::Null,
        // the literal text "null" is treated as an absent value
        BindValue::Text(s) if s == "null" => CanonicalType::Null,
        BindValue::Text(_) => CanonicalType::String,
        BindValue::List(_) => CanonicalType::Array,
        BindValue::Object(_) => CanonicalType::JsonObject,
        BindValue::Int(_) => CanonicalType::Integer,
        BindValue::Long(_) => CanonicalType::Long,
        BindValue::Float(_) => CanonicalType::Float,
        BindValue::Double(_) => CanonicalType::Double,
        BindValue::Bool(_) => CanonicalType::Boolean,
        BindValue::Timestamp(_) => CanonicalType::Timestamp,
        BindValue::Date(_) => CanonicalType::Date,
        BindValue::Time(_) => CanonicalType::Time,
        BindValue::Bytes(_) => CanonicalType::String,
    }
}

/// Same classification applied directly to a JSON value.
pub fn infer_json_type(value: &serde_json::Value) -> CanonicalType {
    use serde_json::Value;
    match value {
        Value::Null => CanonicalType::Null,
        Value::String(s) if s == "null" => CanonicalType::Null,
        Value::String(_) => CanonicalType::String,
        Value::Array(_) => CanonicalType::Array,
        Value::Object(_) => CanonicalType::JsonObject,
        Value::Number(n) => match n.as_i64() {
            Some(i) if i32::try_from(i).is_ok() => CanonicalType::Integer,
            Some(_) => CanonicalType::Long,
            None if n.is_u64() => CanonicalType::String,
            None => CanonicalType::Double,
        },
        Value::Bool(_) => CanonicalType::Boolean,
    }
}

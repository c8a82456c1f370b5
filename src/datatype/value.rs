//! Runtime values bound to placeholders.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Null,
    Text(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Ordered or unordered collection; sets are flattened in iteration order.
    List(Vec<BindValue>),
    /// Key/value mapping; unordered maps are re-keyed in sorted order.
    Object(BTreeMap<String, BindValue>),
    /// Raw bytes. No canonical class of its own.
    Bytes(Vec<u8>),
}

impl BindValue {
    pub fn is_null(&self) -> bool {
        matches!(self, BindValue::Null)
    }
}

macro_rules! bind_value_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(impl From<$t> for BindValue {
            fn from(v: $t) -> Self { BindValue::$variant(v) }
        })*
    };
}

bind_value_from! {
    String => Text,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    NaiveDateTime => Timestamp,
    NaiveDate => Date,
    NaiveTime => Time,
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self { BindValue::Text(v.to_string()) }
}

impl From<i16> for BindValue {
    fn from(v: i16) -> Self { BindValue::Int(v as i32) }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => BindValue::Null,
        }
    }
}

impl<T: Into<BindValue>> From<Vec<T>> for BindValue {
    fn from(v: Vec<T>) -> Self {
        BindValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<BindValue>> From<HashSet<T>> for BindValue {
    fn from(v: HashSet<T>) -> Self {
        BindValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<BindValue>> From<BTreeMap<String, T>> for BindValue {
    fn from(v: BTreeMap<String, T>) -> Self {
        BindValue::Object(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<BindValue>> From<HashMap<String, T>> for BindValue {
    fn from(v: HashMap<String, T>) -> Self {
        BindValue::Object(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for BindValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => BindValue::Null,
            Value::Bool(b) => BindValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    match i32::try_from(i) {
                        Ok(small) => BindValue::Int(small),
                        Err(_) => BindValue::Long(i),
                    }
                } else if n.is_u64() {
                    // above i64::MAX; kept as text to avoid losing precision
                    BindValue::Text(n.to_string())
                } else {
                    BindValue::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => BindValue::Text(s),
            Value::Array(items) => BindValue::List(items.into_iter().map(BindValue::from).collect()),
            Value::Object(map) => BindValue::Object(map.into_iter().map(|(k, v)| (k, BindValue::from(v))).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_pick_narrowest_integer() {
        assert_eq!(BindValue::from(json!(42)), BindValue::Int(42));
        assert_eq!(BindValue::from(json!(-7)), BindValue::Int(-7));
        assert_eq!(BindValue::from(json!(5_000_000_000i64)), BindValue::Long(5_000_000_000));
        assert_eq!(BindValue::from(json!(3.5)), BindValue::Double(3.5));
        assert_eq!(BindValue::from(json!(u64::MAX)), BindValue::Text(u64::MAX.to_string()));
    }

    #[test]
    fn json_containers() {
        let v = BindValue::from(json!({"a": [1, "x", null], "b": true}));
        let mut expected = BTreeMap::new();
        expected.insert("a".to_string(), BindValue::List(vec![BindValue::Int(1), BindValue::Text("x".into()), BindValue::Null]));
        expected.insert("b".to_string(), BindValue::Bool(true));
        assert_eq!(v, BindValue::Object(expected));
    }

    #[test]
    fn rust_conversions() {
        assert_eq!(BindValue::from(None::<i32>), BindValue::Null);
        assert_eq!(BindValue::from(Some(3i64)), BindValue::Long(3));
        assert_eq!(BindValue::from(vec![1i32, 2]), BindValue::List(vec![BindValue::Int(1), BindValue::Int(2)]));
        let mut set = HashSet::new();
        set.insert(9i32);
        assert_eq!(BindValue::from(set), BindValue::List(vec![BindValue::Int(9)]));
        let mut m = HashMap::new();
        m.insert("k".to_string(), "v");
        assert!(matches!(BindValue::from(m), BindValue::Object(_)));
        assert!(BindValue::Null.is_null());
        assert!(!BindValue::from("null").is_null());
    }
}

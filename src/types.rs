//! Canonical (backend independent) type tags shared with the data-model layer.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalType {
    Null,
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Date,
    Time,
    Timestamp,
    Array,
    JsonObject,
}

impl CanonicalType {
    pub const ALL: [CanonicalType; 12] = [
        CanonicalType::Null,
        CanonicalType::String,
        CanonicalType::Integer,
        CanonicalType::Long,
        CanonicalType::Float,
        CanonicalType::Double,
        CanonicalType::Boolean,
        CanonicalType::Date,
        CanonicalType::Time,
        CanonicalType::Timestamp,
        CanonicalType::Array,
        CanonicalType::JsonObject,
    ];

    /// Upper-case tag as used on the wire and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalType::Null => "NULL",
            CanonicalType::String => "STRING",
            CanonicalType::Integer => "INTEGER",
            CanonicalType::Long => "LONG",
            CanonicalType::Float => "FLOAT",
            CanonicalType::Double => "DOUBLE",
            CanonicalType::Boolean => "BOOLEAN",
            CanonicalType::Date => "DATE",
            CanonicalType::Time => "TIME",
            CanonicalType::Timestamp => "TIMESTAMP",
            CanonicalType::Array => "ARRAY",
            CanonicalType::JsonObject => "JSON_OBJECT",
        }
    }
}

impl Display for CanonicalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalType {
    type Err = crate::error::CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        CanonicalType::ALL
            .iter()
            .copied()
            .find(|ct| ct.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| crate::error::CastError::InvalidInput(format!("unknown canonical type '{}'", t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        for t in CanonicalType::ALL {
            assert_eq!(t.to_string().parse::<CanonicalType>().unwrap(), t);
        }
        assert_eq!("json_object".parse::<CanonicalType>().unwrap(), CanonicalType::JsonObject);
        assert!("varchar".parse::<CanonicalType>().is_err());
    }

    #[test]
    fn serde_uses_upper_snake_tags() {
        let s = serde_json::to_string(&CanonicalType::JsonObject).unwrap();
        assert_eq!(s, "\"JSON_OBJECT\"");
        let back: CanonicalType = serde_json::from_str("\"TIMESTAMP\"").unwrap();
        assert_eq!(back, CanonicalType::Timestamp);
    }
}

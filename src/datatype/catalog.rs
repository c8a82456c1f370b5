//! Native postgres type names accepted in explicit `::type` casts.
//!
//! The set is a compile-time table with no runtime initialization; lookups
//! scan it directly.

use crate::types::CanonicalType;

pub const INT8: &str = "int8";
pub const INT4: &str = "int4";
pub const DECIMAL: &str = "decimal";
pub const VARCHAR: &str = "varchar";
pub const BOOL: &str = "bool";
pub const DATE: &str = "date";
pub const TIME: &str = "time";
pub const FLOAT8: &str = "float8";
pub const TEXT: &str = "text";
pub const INT: &str = "int";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeType {
    pub name: &'static str,
    pub canonical: CanonicalType,
    /// pg_type OID used in Parse/RowDescription messages.
    pub oid: i32,
}

static NATIVE_TYPES: [NativeType; 10] = [
    NativeType { name: INT8, canonical: CanonicalType::Long, oid: 20 },
    NativeType { name: INT4, canonical: CanonicalType::Integer, oid: 23 },
    NativeType { name: DECIMAL, canonical: CanonicalType::Float, oid: 1700 },
    NativeType { name: VARCHAR, canonical: CanonicalType::String, oid: 1043 },
    NativeType { name: BOOL, canonical: CanonicalType::Boolean, oid: 16 },
    NativeType { name: DATE, canonical: CanonicalType::Date, oid: 1082 },
    NativeType { name: TIME, canonical: CanonicalType::Time, oid: 1083 },
    NativeType { name: FLOAT8, canonical: CanonicalType::Double, oid: 701 },
    NativeType { name: TEXT, canonical: CanonicalType::String, oid: 25 },
    NativeType { name: INT, canonical: CanonicalType::Integer, oid: 23 },
];

/// Case-sensitive membership test; callers lowercase first.
#[inline]
pub fn is_supported(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn lookup(name: &str) -> Option<&'static NativeType> {
    NATIVE_TYPES.iter().find(|nt| nt.name == name)
}

pub fn oid_of(name: &str) -> Option<i32> {
    lookup(name).map(|nt| nt.oid)
}

/// All supported native types, in declaration order.
pub fn native_types() -> impl Iterator<Item = &'static NativeType> {
    NATIVE_TYPES.iter()
}

/// Array type OID for a scalar element OID (e.g. int4 -> int4[]).
pub fn array_oid_of(elem_oid: i32) -> Option<i32> {
    match elem_oid {
        16 => Some(1000),   // bool[]
        20 => Some(1016),   // int8[]
        23 => Some(1007),   // int4[]
        25 => Some(1009),   // text[]
        701 => Some(1022),  // float8[]
        1043 => Some(1015), // varchar[]
        1082 => Some(1182), // date[]
        1083 => Some(1183), // time[]
        1700 => Some(1231), // numeric[]
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_set_is_exact() {
        let names: Vec<&str> = native_types().map(|nt| nt.name).collect();
        assert_eq!(names, vec!["int8", "int4", "decimal", "varchar", "bool", "date", "time", "float8", "text", "int"]);
        for n in &names { assert!(is_supported(n)); }
        assert!(!is_supported("bogus"));
        assert!(!is_supported(""));
        assert!(!is_supported("timestamp"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(is_supported("int4"));
        assert!(!is_supported("INT4"));
        assert!(!is_supported(" int4"));
    }

    #[test]
    fn oids_match_pg_type() {
        assert_eq!(oid_of("int8"), Some(20));
        assert_eq!(oid_of("int"), Some(23));
        assert_eq!(oid_of("int4"), Some(23));
        assert_eq!(oid_of("varchar"), Some(1043));
        assert_eq!(oid_of("text"), Some(25));
        assert_eq!(oid_of("nope"), None);
        assert_eq!(array_oid_of(23), Some(1007));
        assert_eq!(array_oid_of(2249), None);
    }

    #[test]
    fn concurrent_readers_see_full_set() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| native_types().filter(|nt| is_supported(nt.name)).count()))
            .collect();
        for h in handles { assert_eq!(h.join().unwrap(), 10); }
    }
}

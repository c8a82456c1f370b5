pub mod types;
pub mod error;
pub mod datatype;
pub mod config;
pub mod cli;

pub use datatype::{
    canonical_to_native, count_placeholders, infer_json_type, infer_type, native_to_canonical, plan_binds,
    scan_placeholder_casts, BindPlan, BindValue, ResolvedParam,
};
pub use datatype::catalog::is_supported;
pub use error::{CastError, CastResult};
pub use types::CanonicalType;

// Test-only printing helper: expands to eprintln! in debug/test builds and is absent otherwise.
#[cfg(any(test, debug_assertions))]
#[macro_export]
macro_rules! tprintln {
    ($($arg:tt)*) => ( eprintln!($($arg)*) );
}

// In non-test builds, provide a no-op tprintln! so calls compile without effect.
#[cfg(not(any(test, debug_assertions)))]
#[macro_export]
macro_rules! tprintln {
    ($($arg:tt)*) => ({
        // Preserve formatting checks in release without producing code
        if false { let _ = format!($($arg)*); }
    });
}

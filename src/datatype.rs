//! Placeholder cast resolution for parameterized postgres statements.
//!
//! Query text flows through [`scan`] to one optional explicit cast per `?`
//! placeholder; placeholders without a usable cast are typed from their bound
//! value by [`infer`]; [`mapper`] turns the resolved canonical type into the
//! native spelling emitted in the final `$n::type` clause. [`bind`] wires the
//! three together for callers that hold the query and its values at once.

pub mod catalog;
pub mod mapper;
pub mod scan;
pub mod value;
pub mod infer;
pub mod bind;


pub use bind::{plan_binds, BindPlan, ResolvedParam};
pub use infer::{infer_json_type, infer_type};
pub use mapper::{array_cast, canonical_to_native, native_to_canonical};
pub use scan::{count_placeholders, scan_placeholder_casts};
pub use value::BindValue;

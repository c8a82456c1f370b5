//! Combine scanned casts with bound values into a per-parameter bind plan.
//!
//! For placeholder *i* the explicit cast wins; otherwise the type comes from
//! value *i*. The plan can rewrite the `?` query into postgres `$n` form with
//! the resolved casts, and report the parameter OIDs for a Parse message.

use serde::Serialize;
use tracing::debug;

use crate::datatype::catalog;
use crate::datatype::infer::infer_type;
use crate::datatype::mapper::{array_cast, canonical_to_native};
use crate::datatype::scan::{scan_placeholders, PlaceholderMatch};
use crate::datatype::value::BindValue;
use crate::error::{CastError, CastResult};
use crate::types::CanonicalType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedParam {
    /// 1-based position, as in `$n`.
    pub index: usize,
    pub explicit: Option<CanonicalType>,
    pub canonical: CanonicalType,
    /// Native spelling for the cast clause; `None` binds without a cast.
    pub native: Option<String>,
    /// pg_type OID, 0 when unspecified.
    pub oid: i32,
}

#[derive(Debug, Clone)]
pub struct BindPlan {
    sql: String,
    matches: Vec<PlaceholderMatch>,
    params: Vec<ResolvedParam>,
}

pub fn plan_binds(query: &str, values: &[BindValue]) -> CastResult<BindPlan> {
    let matches = scan_placeholders(query);
    if matches.len() != values.len() {
        return Err(CastError::ParamCountMismatch { expected: matches.len(), got: values.len() });
    }
    let mut params = Vec::with_capacity(values.len());
    for (i, (m, value)) in matches.iter().zip(values).enumerate() {
        params.push(resolve_param(i + 1, m, value)?);
    }
    debug!(
        "bind plan: {} parameter(s), natives={:?}",
        params.len(),
        params.iter().map(|p| p.native.as_deref().unwrap_or("-")).collect::<Vec<_>>()
    );
    Ok(BindPlan { sql: query.to_string(), matches, params })
}

fn resolve_param(index: usize, m: &PlaceholderMatch, value: &BindValue) -> CastResult<ResolvedParam> {
    let canonical = m.cast.unwrap_or_else(|| infer_type(value));
    let native = if let Some(written) = m.native_name() {
        Some(written)
    } else if m.has_suffix() {
        // the user's own trailing text stays in the statement and governs the type
        None
    } else {
        match canonical {
            CanonicalType::Array => match value {
                BindValue::List(items) => array_cast(items)?,
                _ => None,
            },
            CanonicalType::Null | CanonicalType::JsonObject | CanonicalType::Timestamp => None,
            scalar => Some(canonical_to_native(scalar)?.to_string()),
        }
    };
    let oid = native.as_deref().map(native_oid).unwrap_or(0);
    Ok(ResolvedParam { index, explicit: m.cast, canonical, native, oid })
}

fn native_oid(native: &str) -> i32 {
    match native.strip_suffix("[]") {
        Some(elem) => catalog::oid_of(elem).and_then(catalog::array_oid_of).unwrap_or(0),
        None => catalog::oid_of(native).unwrap_or(0),
    }
}

impl BindPlan {
    pub fn params(&self) -> &[ResolvedParam] {
        &self.params
    }

    pub fn param_oids(&self) -> Vec<i32> {
        self.params.iter().map(|p| p.oid).collect()
    }

    /// Rewrite `?` placeholders into `$n[::native]`.
    /// Anything after a `?` that is not a recognized cast is left in place exactly as written.
    pub fn to_positional_sql(&self) -> String {
        let sql = &self.sql;
        let mut out = String::with_capacity(sql.len() + self.params.len() * 8);
        let mut last = 0usize;
        for (m, p) in self.matches.iter().zip(&self.params) {
            out.push_str(&sql[last..m.span.start]);
            out.push('$');
            out.push_str(&p.index.to_string());
            if m.cast.is_none() && m.has_suffix() {
                // skip the '?' itself, keep the user's trailing text
                out.push_str(&sql[m.span.start + 1..m.span.end]);
            } else if let Some(native) = &p.native {
                out.push_str("::");
                out.push_str(native);
            }
            last = m.span.end;
        }
        out.push_str(&sql[last..]);
        out
    }
}

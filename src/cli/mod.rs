//! Command-line front end: resolve placeholder bind types for one statement.

pub mod outputformatter;

use std::io::{self, Read};

use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::datatype::bind::plan_binds;
use crate::datatype::scan::count_placeholders;
use crate::datatype::value::BindValue;
use crate::error::{CastError, CastResult};

pub fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} --query \"<SQL>\" [--params '<json array>'] [--json | --table]\n  {program} [--params '<json array>']    # reads query text from stdin\n\nFlags:\n  -q, --query <SQL>        Statement with `?` placeholders, optionally cast (`?::int8`)\n  -p, --params <json>      JSON array of bound values, one per placeholder.\n                           When omitted every placeholder is bound to NULL.\n  --json                   Print the bind plan as JSON (env PGCAST_OUTPUT=json)\n  --table                  Print the bind plan as an ASCII table (default)\n  -h, --help               Show this help\n\nExamples:\n  {program} -q \"SELECT * FROM t WHERE id = ?::int8 AND name = ?\" -p '[1, \"bob\"]'\n  echo \"SELECT ?\" | {program} --json -p '[[1,2,3]]'"
    );
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub query: Option<String>,
    pub params: Option<String>,
    pub output: Option<OutputFormat>,
    pub help: bool,
}

pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--query" | "-q" => {
                let v = args.get(i + 1).ok_or_else(|| anyhow!("--query requires a value"))?;
                out.query = Some(v.clone());
                i += 2; continue;
            }
            "--params" | "-p" => {
                let v = args.get(i + 1).ok_or_else(|| anyhow!("--params requires a value"))?;
                out.params = Some(v.clone());
                i += 2; continue;
            }
            "--json" => { out.output = Some(OutputFormat::Json); i += 1; continue; }
            "--table" => { out.output = Some(OutputFormat::Table); i += 1; continue; }
            "-h" | "--help" => { out.help = true; i += 1; continue; }
            unk => {
                // Allow passing the query without flag as a single arg
                if out.query.is_none() && !unk.starts_with('-') { out.query = Some(unk.to_string()); i += 1; continue; }
                bail!("unrecognized argument: {}", unk);
            }
        }
    }
    Ok(out)
}

/// Parse the `--params` JSON array into bind values.
pub fn parse_params(json: &str) -> CastResult<Vec<BindValue>> {
    let v: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| CastError::InvalidInput(format!("params are not valid JSON: {}", e)))?;
    match v {
        serde_json::Value::Array(items) => Ok(items.into_iter().map(BindValue::from).collect()),
        other => Err(CastError::InvalidInput(format!("params must be a JSON array, got {}", other))),
    }
}

pub fn run(program: &str, args: &[String], config: CliConfig) -> Result<()> {
    let parsed = parse_args(args)?;
    if parsed.help {
        print_usage(program);
        return Ok(());
    }
    let query = match parsed.query {
        Some(q) => q,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read query from stdin")?;
            buf.trim().to_string()
        }
    };
    if query.is_empty() {
        bail!("no query given");
    }

    let values = match parsed.params.as_deref() {
        Some(p) => parse_params(p)?,
        None => {
            debug!("no params supplied; binding every placeholder to NULL");
            vec![BindValue::Null; count_placeholders(&query)]
        }
    };
    let plan = plan_binds(&query, &values)?;
    let sql = plan.to_positional_sql();
    info!("resolved {} parameter(s)", plan.params().len());

    match parsed.output.unwrap_or(config.output) {
        OutputFormat::Json => {
            let doc = serde_json::json!({ "params": plan.params(), "sql": sql, "param_oids": plan.param_oids() });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Table => outputformatter::print_param_table(plan.params(), &sql),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(a: &[&str]) -> Vec<String> { a.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn flags_and_positional_query() {
        let a = parse_args(&argv(&["-q", "SELECT ?", "--params", "[1]", "--json"])).unwrap();
        assert_eq!(a.query.as_deref(), Some("SELECT ?"));
        assert_eq!(a.params.as_deref(), Some("[1]"));
        assert_eq!(a.output, Some(OutputFormat::Json));

        let b = parse_args(&argv(&["SELECT ?::int4"])).unwrap();
        assert_eq!(b.query.as_deref(), Some("SELECT ?::int4"));
        assert_eq!(b.output, None);
    }

    #[test]
    fn bad_arguments() {
        assert!(parse_args(&argv(&["--query"])).is_err());
        assert!(parse_args(&argv(&["--bogus"])).is_err());
        assert!(parse_args(&argv(&["q1", "q2"])).is_err());
        assert!(parse_args(&argv(&["--help"])).unwrap().help);
    }

    #[test]
    fn params_must_be_json_array() {
        let vals = parse_params(r#"[1, "x", null, [true]]"#).unwrap();
        assert_eq!(vals.len(), 4);
        assert_eq!(vals[0], BindValue::Int(1));
        assert!(matches!(parse_params("{}"), Err(CastError::InvalidInput(_))));
        assert!(matches!(parse_params("[1,"), Err(CastError::InvalidInput(_))));
    }
}

use tracing_subscriber::{EnvFilter, fmt};
use tracing::debug;

use pgcast::config::CliConfig;

fn main() -> anyhow::Result<()> {
    // Init logging; stdout carries the bind plan, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut args: Vec<String> = std::env::args().collect();
    let program = if args.is_empty() { "pgcast".to_string() } else { args.remove(0) };
    let config = CliConfig::from_env();
    debug!(target: "pgcast", "starting: output={:?}", config.output);

    pgcast::cli::run(&program, &args, config)
}

#![cfg_attr(
    not(test),
    deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

use clap::Parser;
use tracing_subscriber::EnvFilter;
use udpcraft_refdata::output::{reference_params, render, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "gen-ref-data")]
#[command(about = "Print the signed item-message reference fixture")]
struct Args {
    #[arg(long, env = "UDPCRAFT_LOG", default_value = "warn")]
    log: String,
    /// Prefix the message with the length-prefixed portal name.
    #[arg(long, default_value_t = false)]
    named: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(named = args.named, format = ?args.format, "generating reference data");
    println!("{}", render(&reference_params(args.named), args.format)?);
    Ok(())
}

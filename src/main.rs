use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tokenledger::{active_token_count, parse_input};

/// Counts the tokens still active at the latest time in a command stream.
#[derive(Parser)]
#[command(name = "tokenledger", version, about)]
struct Cli {
    /// Input file: expiry limit, row and column counts, then one command
    /// triple per row
    input: PathBuf,

    /// Also write the bare count to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.input)
        .with_context(|| format!("cannot open input file {}", cli.input.display()))?;
    let input = parse_input(BufReader::new(file))
        .with_context(|| format!("cannot parse input file {}", cli.input.display()))?;

    let count = active_token_count(input.expiry_limit, &input.commands);
    println!("Result: {count}");

    if let Some(path) = &cli.output {
        let mut out = File::create(path)
            .with_context(|| format!("cannot create output file {}", path.display()))?;
        writeln!(out, "{count}")?;
    }

    Ok(())
}

use clap::Parser;
use ledger::{ledger::Ledger, parser::parse};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Cli {
    input: String,
    /// Log filter directive, e.g. `debug` or `ledger=trace`. Falls back to `RUST_LOG`.
    #[clap(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut ledger = Ledger::default();

    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&cli.input)?;

    for instruction in parse(rdr) {
        if let Err(error) = ledger.apply(instruction?) {
            eprintln!("Operation failed: '{}'", error);
        }
    }

    ledger.serialize(std::io::stdout())
}

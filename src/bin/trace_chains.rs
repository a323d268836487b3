use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};

use tracegraph::store;
use tracegraph::trace::Tracer;

/// Traces every destination listed in the input file and saves the
/// discovered chains for later aggregation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with destination hosts, one per line
    input: PathBuf,

    /// Output file for the chain collection (defaults to the input name
    /// with a .chains.json extension)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let raw = fs::read_to_string(&args.input)
        .wrap_err_with(|| format!("cannot read destination list {:?}", args.input))?;
    let dests: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    info!("tracing {} destinations", dests.len());

    // A failed destination is skipped; chains already acquired are kept.
    let mut chains = Vec::new();
    for dest in dests {
        match Tracer::new(dest).trace() {
            Ok(result) => {
                info!(
                    "{}: {} hops in {:?}",
                    dest,
                    result.chain.len(),
                    result.trace_time
                );
                chains.push(result.chain);
            }
            Err(e) => warn!("skipping {}: {}", dest, e),
        }
    }

    let out = args
        .out
        .unwrap_or_else(|| args.input.with_extension("chains.json"));
    store::save_chains(&out, &chains)
        .wrap_err_with(|| format!("cannot write chain file {:?}", out))?;
    info!("{} chains dumped into {:?}", chains.len(), out);
    Ok(())
}

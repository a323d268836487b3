use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;

use tracegraph::topology::write_pajek_file;
use tracegraph::{store, Host, Topology};

/// Aggregates saved chain files into a host-level and a subnet-level
/// topology graph, written as Pajek .net files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chain files produced by trace-chains
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Base name for the output files
    #[arg(short, long, default_value = "topology")]
    out: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut chains = Vec::new();
    for input in &args.inputs {
        let mut loaded = store::load_chains(input)
            .wrap_err_with(|| format!("cannot load chain file {:?}", input))?;
        info!("{:?}: {} chains", input, loaded.len());
        chains.append(&mut loaded);
    }

    info!("generating host topology");
    let mut host_topology: Topology<Host> = Topology::new();
    host_topology.add_chains(&chains, Clone::clone);
    info!(
        "host topology: {} nodes, {} edges",
        host_topology.node_count(),
        host_topology.edge_count()
    );

    info!("generating subnet topology");
    let mut subnet_topology: Topology<String> = Topology::new();
    subnet_topology.add_chains(&chains, Host::subnet);
    info!(
        "subnet topology: {} nodes, {} edges",
        subnet_topology.node_count(),
        subnet_topology.edge_count()
    );

    let host_file = format!("{}-host.net", args.out);
    write_pajek_file(&host_topology, &host_file, |h| h.hostname.clone())
        .wrap_err_with(|| format!("cannot write {}", host_file))?;

    let subnet_file = format!("{}-network.net", args.out);
    write_pajek_file(&subnet_topology, &subnet_file, Clone::clone)
        .wrap_err_with(|| format!("cannot write {}", subnet_file))?;

    info!("wrote {} and {}", host_file, subnet_file);
    Ok(())
}

use tracegraph::topology::{write_pajek, Topology};
use tracegraph::trace::Tracer;
use tracegraph::Host;

fn main() {
    // Trace a single destination and print its path as a Pajek graph
    let tracer = Tracer::new("dns.google");
    match tracer.trace() {
        Ok(result) => {
            println!(
                "# {} hops in {:?}",
                result.chain.len(),
                result.trace_time
            );
            let mut topology: Topology<Host> = Topology::new();
            topology.add_chain(result.chain);
            write_pajek(&topology, std::io::stdout(), |h| h.hostname.clone()).unwrap();
        }
        Err(e) => {
            eprintln!("trace error: {}", e);
        }
    }
}

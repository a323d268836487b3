//! Pajek `.net` serialization.

use std::fs::File;
use std::hash::Hash;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::Topology;

/// Writes a topology in Pajek format.
///
/// Vertex indices are 1-based in the output; edge lines keep the
/// canonical lower-index-first endpoint order and insertion order.
/// Labels are written verbatim between double quotes, so a label
/// containing `"` produces an unreadable file. Labels need not be
/// unique; duplicates do not affect the graph structure.
pub fn write_pajek<N, W, F>(topology: &Topology<N>, mut out: W, label: F) -> io::Result<()>
where
    N: Clone + Eq + Hash,
    W: Write,
    F: Fn(&N) -> String,
{
    writeln!(out, "*Vertices {}", topology.node_count())?;
    for (i, node) in topology.nodes().iter().enumerate() {
        writeln!(out, " {} \"{}\" ", i + 1, label(node))?;
    }
    writeln!(out, "*Edges")?;
    for &(idx1, idx2) in topology.edges() {
        writeln!(out, " {}  {} ", idx1 + 1, idx2 + 1)?;
    }
    Ok(())
}

/// Writes a topology in Pajek format to a file.
pub fn write_pajek_file<N, F>(
    topology: &Topology<N>,
    path: impl AsRef<Path>,
    label: F,
) -> io::Result<()>
where
    N: Clone + Eq + Hash,
    F: Fn(&N) -> String,
{
    let mut out = BufWriter::new(File::create(path)?);
    write_pajek(topology, &mut out, label)?;
    out.flush()
}

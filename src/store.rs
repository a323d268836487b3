//! Chain collection persistence.
//!
//! Chains are acquired and aggregated by separate programs, so the
//! collection is dumped to a JSON file in between. The format is a
//! plain list of chains, each a list of hostname/address pairs, and
//! round-trips losslessly.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use thiserror::Error;

use crate::host::Chain;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid chain file: {0}")]
    Format(#[from] serde_json::Error),
}

pub fn save_chains(path: impl AsRef<Path>, chains: &[Chain]) -> Result<(), StoreError> {
    let out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(out, chains)?;
    Ok(())
}

pub fn load_chains(path: impl AsRef<Path>) -> Result<Vec<Chain>, StoreError> {
    let inp = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(inp)?)
}

//! Demonstration commands.
//!
//! Each command wires configuration into the core types and writes
//! comma-separated rows, with a header, to the given writer.

pub mod density;
pub mod normal;
pub mod online;
pub mod sample;
pub mod uniform;

use std::io::Write;

use variate_core::rng::SeededRng;

/// Creates a CSV writer over the output stream.
pub(crate) fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().has_headers(false).from_writer(out)
}

/// Seeded source when configured, platform entropy otherwise.
pub(crate) fn uniform_source(seed: Option<u64>) -> SeededRng {
    match seed {
        Some(seed) => SeededRng::from_seed(seed),
        None => SeededRng::from_entropy(),
    }
}

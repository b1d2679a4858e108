//! Uniform command: raw LCG output.

use std::io::Write;

use tracing::info;
use variate_core::rng::Lcg;

use crate::config::VariateConfig;
use crate::Result;

/// Writes `count` LCG draws as a single `u` column.
pub fn run<W: Write>(config: &VariateConfig, out: W) -> Result<()> {
    let params = &config.lcg;
    let mut lcg = Lcg::new(
        params.seed,
        params.multiplier,
        params.increment,
        params.modulus,
    )?;

    info!(
        seed = params.seed,
        multiplier = params.multiplier,
        increment = params.increment,
        modulus = params.modulus,
        count = params.count,
        "Generating uniform sequence"
    );

    let mut writer = super::csv_writer(out);
    writer.write_record(["u"])?;
    for value in lcg.generate(params.count) {
        writer.serialize([value])?;
    }
    writer.flush()?;
    Ok(())
}

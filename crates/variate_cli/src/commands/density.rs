//! Density command: the Beta target tabulated on the envelope grid.

use std::io::Write;

use tracing::info;
use variate_core::math::linspace;
use variate_core::sampler::{BetaDensity, Density};

use crate::config::VariateConfig;
use crate::Result;

/// Writes `x,density` over `linspace(0, 1, grid_size)`.
pub fn run<W: Write>(config: &VariateConfig, out: W) -> Result<()> {
    let params = &config.sampler;
    let target = BetaDensity::new(params.alpha, params.beta)?;

    info!(
        alpha = params.alpha,
        beta = params.beta,
        grid_size = params.grid_size,
        "Tabulating Beta density"
    );

    let mut writer = super::csv_writer(out);
    writer.write_record(["x", "density"])?;
    for x in linspace(0.0, 1.0, params.grid_size) {
        writer.serialize((x, target.density(x)))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabulates_grid() {
        let mut config = VariateConfig::default();
        config.sampler.grid_size = 5;

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "x,density");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "0.0,0.0");
        assert_eq!(lines[5], "1.0,0.0");
    }

    #[test]
    fn test_invalid_shape() {
        let mut config = VariateConfig::default();
        config.sampler.alpha = -2.0;
        assert!(run(&config, Vec::new()).is_err());
    }
}

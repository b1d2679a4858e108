//! Normal command: two LCG streams through Box-Muller.

use std::io::Write;

use tracing::info;
use variate_core::rng::Lcg;
use variate_core::transform::box_muller;

use crate::config::VariateConfig;
use crate::Result;

/// Writes `count` rows of `z1,z2`.
///
/// The radial stream uses the configured seed; the angular stream uses the
/// seed plus `second_seed_offset` with the same recurrence.
pub fn run<W: Write>(config: &VariateConfig, out: W) -> Result<()> {
    let params = &config.lcg;
    let angular_seed = params.seed.saturating_add(params.second_seed_offset);

    let mut radial = Lcg::new(
        params.seed,
        params.multiplier,
        params.increment,
        params.modulus,
    )?;
    let mut angular = Lcg::new(
        angular_seed,
        params.multiplier,
        params.increment,
        params.modulus,
    )?;

    info!(
        radial_seed = params.seed,
        angular_seed,
        count = params.count,
        "Generating normal pairs"
    );

    let normals = box_muller(&radial.generate(params.count), &angular.generate(params.count))?;

    let mut writer = super::csv_writer(out);
    writer.write_record(["z1", "z2"])?;
    for row in normals.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use variate_core::types::TransformError;

    #[test]
    fn test_writes_header_and_rows() {
        let mut config = VariateConfig::default();
        config.lcg.count = 50;

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("z1,z2"));
        let rows: Vec<_> = lines.collect();
        assert_eq!(rows.len(), 50);
        for row in rows {
            let fields: Vec<f64> = row.split(',').map(|f| f.parse().unwrap()).collect();
            assert_eq!(fields.len(), 2);
            assert!(fields.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_zero_count_is_empty_input() {
        let mut config = VariateConfig::default();
        config.lcg.count = 0;

        let err = run(&config, Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Transform(TransformError::EmptyInput)));
    }

    #[test]
    fn test_zero_seed_is_domain_violation() {
        let mut config = VariateConfig::default();
        config.lcg.seed = 0;
        config.lcg.count = 10;

        let err = run(&config, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Transform(TransformError::DomainViolation { index: 0, .. })
        ));
    }
}

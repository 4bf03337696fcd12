//! Drives a solver over a doubling series of problem sizes and records timings.

use gauss_core::{DenseMatrix, GaussCoreError, Instance};
use gauss_lsolver::algorithms::SolveAlgorithm;
use log::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::reclaim::{Reclaimer, SuspendGuard};
use crate::report::{mean_stddev, SizeReport};
use crate::timing::measure;

/// Band a cubic solver's doubling ratio is expected to fall in once `n` is large enough.
pub const CUBIC_RATIO_BAND: (f64, f64) = (5.0, 11.0);
const CUBIC_RATIO_MIN_SIZE: usize = 200;

/// Benchmarks `solver` across `config.sizes()`.
///
/// For each size one instance is generated from `(size, config.seed)`, then
/// `config.repeats` trials call `solver` exactly once each. Generation, the
/// reclaimer drain and dropping the solution all happen outside the timed window.
///
/// # Errors
/// A solver failure stops the sweep with [`BenchError::Solver`] carrying the size
/// and seed of the failing instance.
pub fn benchmark<F>(
    mut solver: F,
    config: &BenchConfig,
    reclaimer: &mut dyn Reclaimer,
) -> Result<Vec<SizeReport>>
where
    F: FnMut(&DenseMatrix<f64>, &[f64]) -> core::result::Result<Vec<f64>, GaussCoreError>,
{
    config.validate()?;
    let sizes = config.sizes();
    info!(
        "benchmark sweep: sizes {:?}, seed {}, {} repeats, {:?} timing",
        sizes, config.seed, config.repeats, config.timing
    );

    let mut reports: Vec<SizeReport> = Vec::with_capacity(sizes.len());
    let mut guard = SuspendGuard::new(reclaimer);

    for n in sizes {
        let instance = Instance::seeded(n, config.seed)?;
        let mut trials = Vec::with_capacity(config.repeats);

        for trial in 0..config.repeats {
            guard.collect();
            let (outcome, elapsed) = measure(config.timing, || solver(&instance.a, &instance.b));
            let x = outcome.map_err(|source| {
                log::error!(
                    "solver failed on size {} (seed {}), trial {}: {}",
                    n,
                    config.seed,
                    trial,
                    source
                );
                BenchError::Solver {
                    size: n,
                    seed: config.seed,
                    source,
                }
            })?;
            if x.len() != n {
                return Err(BenchError::Solver {
                    size: n,
                    seed: config.seed,
                    source: GaussCoreError::InvalidDimensions(format!(
                        "solution has {} entries, expected {}",
                        x.len(),
                        n
                    )),
                });
            }
            drop(x);
            debug!("size {} trial {}: {:?}", n, trial, elapsed);
            trials.push(elapsed);
        }

        let (mean, stddev) = mean_stddev(&trials);
        let ratio = reports
            .last()
            .filter(|prev| prev.mean > 0.0)
            .map(|prev| mean / prev.mean);
        if let Some(r) = ratio {
            if n >= CUBIC_RATIO_MIN_SIZE && !(CUBIC_RATIO_BAND.0..=CUBIC_RATIO_BAND.1).contains(&r) {
                warn!(
                    "size {}: ratio {:.2} outside the expected cubic band {:?}",
                    n, r, CUBIC_RATIO_BAND
                );
            }
        }

        let report = SizeReport {
            size: n,
            mean,
            stddev,
            ratio,
            trials,
            instance_fingerprint: instance.fingerprint(),
        };
        info!("{}", report);
        reports.push(report);
    }

    drop(guard);
    Ok(reports)
}

/// Runs [`benchmark`] with a [`SolveAlgorithm`] backend.
pub fn benchmark_algorithm<S>(
    algorithm: &S,
    config: &BenchConfig,
    reclaimer: &mut dyn Reclaimer,
) -> Result<Vec<SizeReport>>
where
    S: SolveAlgorithm<DenseMatrix<f64>, Value = f64>,
{
    info!("benchmarking '{}' backend", algorithm.name());
    benchmark(
        |a, b| algorithm.solve(a, b).map(|result| result.x),
        config,
        reclaimer,
    )
}

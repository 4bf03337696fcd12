use gauss_lsolver::{
    algorithms::{
        GaussianElimination, NaiveGaussianElimination, ParallelGaussianElimination,
        SolveAlgorithm,
    },
    DenseMatrix, Instance,
};
use std::time::Instant;

/// Solves one seeded instance with `algorithm` and logs how it went.
fn run<S>(algorithm: &S, instance: &Instance)
where
    S: SolveAlgorithm<DenseMatrix<f64>, Value = f64, Metadata = gauss_lsolver::algorithms::EliminationMetadata>,
{
    let start_time = Instant::now();
    let x_result = algorithm.solve(&instance.a, &instance.b);
    let duration = start_time.elapsed();

    match x_result {
        Ok(result) => {
            log::info!("{} backend finished", algorithm.name());
            log::info!("  Min |pivot|: {:.6e}", result.metadata.min_abs_pivot);
            if let Some(r) = result.metadata.residual_norm {
                log::info!("  Residual norm: {:.6e}", r);
            }
            log::info!("  Time elapsed: {:?}", duration);
        }
        Err(e) => {
            log::error!("{} backend failed: {:?}", algorithm.name(), e);
        }
    }
}

fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let n = 400;
    let seed = 2024;
    log::info!("Generating {}x{} instance with seed {}...", n, n, seed);
    let instance = Instance::seeded(n, seed).expect("Failed to generate instance");
    log::info!("  Fingerprint: {:016x}", instance.fingerprint());

    run(&NaiveGaussianElimination::default(), &instance);
    run(&GaussianElimination::default(), &instance);
    let parallel = ParallelGaussianElimination::new(4).expect("Failed to build thread pool");
    run(&parallel, &instance);
}

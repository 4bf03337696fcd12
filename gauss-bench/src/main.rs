use std::error::Error;

use clap::{Parser, ValueEnum};
use gauss_bench::{benchmark_algorithm, write_csv, BenchConfig, NoopReclaimer, SizeReport, TimingMode};
use gauss_lsolver::algorithms::{
    GaussianElimination, NaiveGaussianElimination, ParallelGaussianElimination,
    DEFAULT_PIVOT_TOLERANCE,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    Naive,
    Flat,
    Parallel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Clock {
    Wall,
    Cpu,
}

/// Times dense Gaussian elimination over a doubling series of problem sizes.
#[derive(Debug, Parser)]
#[command(name = "gauss-bench", version)]
struct Args {
    /// Solver backend to benchmark
    #[arg(long, value_enum, default_value = "flat")]
    backend: Backend,

    /// Worker threads for the parallel backend
    #[arg(long, default_value_t = 4)]
    threads: usize,

    #[arg(long, default_value_t = 50)]
    base_size: usize,

    /// Largest size in the series (inclusive)
    #[arg(long, default_value_t = 800)]
    max_size: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Timed trials per size
    #[arg(long, default_value_t = 5)]
    repeats: usize,

    #[arg(long, value_enum, default_value = "wall")]
    clock: Clock,

    /// Residual bound checked after every solve
    #[arg(long, default_value_t = gauss_core::DEFAULT_RESIDUAL_TOLERANCE)]
    residual_tolerance: f64,

    /// Skip the residual check inside the timed call
    #[arg(long)]
    no_verify: bool,

    /// Print CSV records instead of one summary line per size
    #[arg(long)]
    csv: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = BenchConfig::new(args.max_size, args.seed, args.repeats)
        .with_base_size(args.base_size)
        .with_timing(match args.clock {
            Clock::Wall => TimingMode::Wall,
            Clock::Cpu => TimingMode::Cpu,
        });
    let verify = !args.no_verify;
    let mut reclaimer = NoopReclaimer;

    let reports = match args.backend {
        Backend::Naive => {
            let algorithm = NaiveGaussianElimination::with_params(
                DEFAULT_PIVOT_TOLERANCE,
                args.residual_tolerance,
                verify,
            );
            benchmark_algorithm(&algorithm, &config, &mut reclaimer)?
        }
        Backend::Flat => {
            let algorithm = GaussianElimination::with_params(
                DEFAULT_PIVOT_TOLERANCE,
                args.residual_tolerance,
                verify,
            );
            benchmark_algorithm(&algorithm, &config, &mut reclaimer)?
        }
        Backend::Parallel => {
            let algorithm = ParallelGaussianElimination::with_params(
                args.threads,
                DEFAULT_PIVOT_TOLERANCE,
                args.residual_tolerance,
                verify,
            )?;
            benchmark_algorithm(&algorithm, &config, &mut reclaimer)?
        }
    };

    if args.csv {
        write_csv(&reports, std::io::stdout().lock())?;
    } else {
        print_summary(&reports);
    }
    Ok(())
}

fn print_summary(reports: &[SizeReport]) {
    for report in reports {
        println!("{}", report);
    }
    if let Some(first) = reports.first() {
        log::info!("instance fingerprint at size {}: {:016x}", first.size, first.instance_fingerprint);
    }
}

//! Benchmark harness for the Gaussian elimination backends.
//!
//! Generates reproducible instances of doubling size, times repeated solver calls,
//! and reports mean, standard deviation and the growth ratio between sizes.

pub mod config;
pub mod error;
pub mod harness;
pub mod reclaim;
pub mod report;
pub mod timing;

pub use config::{BenchConfig, TimingMode};
pub use error::{BenchError, Result};
pub use harness::{benchmark, benchmark_algorithm, CUBIC_RATIO_BAND};
pub use reclaim::{NoopReclaimer, Reclaimer};
pub use report::{write_csv, SizeReport};

use derive_more::From;

use gauss_core::GaussCoreError;

pub type Result<T> = core::result::Result<T, BenchError>;

#[derive(Debug, From)]
pub enum BenchError {
    // -- Externals
    #[from]
    Io(std::io::Error),

    #[from]
    Csv(csv::Error),

    #[from]
    Core(GaussCoreError),

    /// The solver failed on a generated instance; `size` and `seed` regenerate it.
    Solver {
        size: usize,
        seed: u64,
        source: GaussCoreError,
    },

    Config(String),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for BenchError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            BenchError::Solver { size, seed, source } => {
                write!(fmt, "solver failed for size {size} (seed {seed}): {source}")
            }
            BenchError::Config(msg) => write!(fmt, "invalid benchmark configuration: {msg}"),
            other => write!(fmt, "{other:?}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::Io(e) => Some(e),
            BenchError::Csv(e) => Some(e),
            BenchError::Core(e) => Some(e),
            BenchError::Solver { source, .. } => Some(source),
            BenchError::Config(_) => None,
        }
    }
}

// endregion: --- Error Boilerplate

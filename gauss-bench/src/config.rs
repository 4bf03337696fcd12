use crate::error::{BenchError, Result};

/// Which clock a trial is measured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingMode {
    /// Elapsed wall-clock time.
    #[default]
    Wall,
    /// CPU time consumed by the whole process (all threads).
    Cpu,
}

/// Parameters of one benchmark sweep.
///
/// Sizes start at `base_size` and double while they stay `<= max_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub base_size: usize,
    pub max_size: usize,
    pub seed: u64,
    pub repeats: usize,
    pub timing: TimingMode,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            base_size: 50,
            max_size: 800,
            seed: 0,
            repeats: 5,
            timing: TimingMode::Wall,
        }
    }
}

impl BenchConfig {
    pub fn new(max_size: usize, seed: u64, repeats: usize) -> Self {
        Self {
            max_size,
            seed,
            repeats,
            ..Self::default()
        }
    }

    pub fn with_base_size(mut self, base_size: usize) -> Self {
        self.base_size = base_size;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_timing(mut self, timing: TimingMode) -> Self {
        self.timing = timing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_size == 0 {
            return Err(BenchError::Config("base size must be greater than zero".to_string()));
        }
        if self.repeats == 0 {
            return Err(BenchError::Config("repeats must be greater than zero".to_string()));
        }
        if self.max_size < self.base_size {
            return Err(BenchError::Config(format!(
                "max size ({}) is smaller than base size ({})",
                self.max_size, self.base_size
            )));
        }
        Ok(())
    }

    /// The geometric size series `base, 2*base, 4*base, ...` bounded by `max_size` (inclusive).
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        let mut n = self.base_size;
        while n > 0 && n <= self.max_size {
            sizes.push(n);
            n = match n.checked_mul(2) {
                Some(next) => next,
                None => break,
            };
        }
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_doubling_inclusive() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes(), vec![50, 100, 200, 400, 800]);
        assert_eq!(config.with_max_size(799).sizes(), vec![50, 100, 200, 400]);
    }

    #[test]
    fn test_sizes_single() {
        let config = BenchConfig::new(10, 1, 1).with_base_size(10);
        assert_eq!(config.sizes(), vec![10]);
    }

    #[test]
    fn test_validate() {
        assert!(BenchConfig::default().validate().is_ok());
        assert!(matches!(
            BenchConfig::default().with_repeats(0).validate(),
            Err(BenchError::Config(_))
        ));
        assert!(matches!(
            BenchConfig::default().with_base_size(0).validate(),
            Err(BenchError::Config(_))
        ));
        assert!(matches!(
            BenchConfig::default().with_max_size(10).validate(),
            Err(BenchError::Config(_))
        ));
    }
}

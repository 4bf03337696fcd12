//! Clocks used to time a single solver call.

use std::time::{Duration, Instant};

use cpu_time::ProcessTime;

use crate::config::TimingMode;

/// Runs `f` once and returns its output with the time it took under `mode`.
///
/// Only the call itself is inside the measured window; dropping the returned value
/// is left to the caller.
pub fn measure<T>(mode: TimingMode, f: impl FnOnce() -> T) -> (T, Duration) {
    match mode {
        TimingMode::Wall => measure_wall(f),
        TimingMode::Cpu => match ProcessTime::try_now() {
            Ok(start) => {
                let out = f();
                let elapsed = start.try_elapsed().unwrap_or_else(|e| {
                    log::warn!("process CPU clock unavailable after trial: {}", e);
                    Duration::ZERO
                });
                (out, elapsed)
            }
            Err(e) => {
                log::warn!("process CPU clock unavailable, falling back to wall clock: {}", e);
                measure_wall(f)
            }
        },
    }
}

fn measure_wall<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

//! Control over deferred memory reclamation around timed trials.
//!
//! Memory is released deterministically when values drop, so there is no collector
//! to drive by default. Allocator or arena integrations that do defer work can plug
//! in through [`Reclaimer`]; the harness drains it before every trial and keeps it
//! suspended for the whole sweep.

/// Hooks the harness calls around timed regions.
pub trait Reclaimer {
    /// Runs any pending reclamation to completion.
    fn collect(&mut self);
    /// Stops background reclamation until [`Reclaimer::resume`].
    fn suspend(&mut self);
    /// Restores background reclamation.
    fn resume(&mut self);
}

/// Reclaimer for plain owned allocations: nothing is ever deferred.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReclaimer;

impl Reclaimer for NoopReclaimer {
    fn collect(&mut self) {}
    fn suspend(&mut self) {}
    fn resume(&mut self) {}
}

/// Keeps a reclaimer suspended while alive and resumes it on drop, including on early return.
pub(crate) struct SuspendGuard<'a> {
    reclaimer: &'a mut dyn Reclaimer,
}

impl<'a> SuspendGuard<'a> {
    pub(crate) fn new(reclaimer: &'a mut dyn Reclaimer) -> Self {
        reclaimer.suspend();
        log::debug!("background reclamation suspended");
        Self { reclaimer }
    }

    pub(crate) fn collect(&mut self) {
        self.reclaimer.collect();
    }
}

impl Drop for SuspendGuard<'_> {
    fn drop(&mut self) {
        self.reclaimer.resume();
        log::debug!("background reclamation resumed");
    }
}

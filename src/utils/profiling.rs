use std::time::Duration;

/// Counters and timings gathered while running a single step.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepStats {
    pub integrate_time: Duration,
    pub collide_time: Duration,
    pub total_time: Duration,

    pub body_count: usize,
    /// Number of pairs whose overlap was tested.
    pub pair_tests: usize,
    /// Number of overlapping pairs that were resolved.
    pub contacts_resolved: usize,
    /// Overlapping pairs skipped because neither body had a usable mass.
    pub pairs_skipped: usize,
    /// Bodies clamped to the floor line this step.
    pub ground_contacts: usize,
    /// Set when the step was a no-op because of a non-physical `dt`.
    pub skipped: bool,
}

impl StepStats {
    /// Writes a summary of the step to the `debug` log level.
    pub fn report(&self) {
        if self.skipped {
            log::debug!("step skipped ({} bodies unchanged)", self.body_count);
            return;
        }

        log::debug!(
            "step: bodies={} pair_tests={} contacts={} skipped_pairs={} ground={}",
            self.body_count,
            self.pair_tests,
            self.contacts_resolved,
            self.pairs_skipped,
            self.ground_contacts
        );

        let total_us = self.total_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }
        log::debug!(
            "  integrate {:.1} µs ({:.1}%), collide {:.1} µs ({:.1}%)",
            self.integrate_time.as_micros() as f32,
            (self.integrate_time.as_micros() as f32 / total_us) * 100.0,
            self.collide_time.as_micros() as f32,
            (self.collide_time.as_micros() as f32 / total_us) * 100.0
        );
    }
}

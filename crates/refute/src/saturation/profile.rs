//! Structured profiling for the saturation loop
//!
//! Collects timing and counting data during saturation when enabled via
//! `SaturationConfig::enable_profiling`. Zero overhead when disabled: all
//! instrumentation is gated on `Option::None`.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::time::Duration;

fn secs(d: &Duration) -> f64 {
    d.as_secs_f64()
}

/// Profiling data collected during saturation.
///
/// All `Duration` fields are serialized as `f64` seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaturationProfile {
    pub total_time: Duration,
    pub reconstruct_time: Duration,

    /// Worklist entries explored
    pub iterations: usize,
    /// Resolution attempts against index candidates
    pub resolutions_attempted: usize,
    /// Resolvents dropped because they were tautologies
    pub tautologies_discarded: usize,
    /// Resolvents dropped because an equal clause was already indexed
    pub duplicates_discarded: usize,
    /// Resolvents admitted into the index and worklist
    pub clauses_added: usize,
    pub max_worklist_size: usize,
}

impl SaturationProfile {
    /// Track the largest worklist seen so far.
    pub fn observe_worklist(&mut self, size: usize) {
        if size > self.max_worklist_size {
            self.max_worklist_size = size;
        }
    }
}

impl Serialize for SaturationProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SaturationProfile", 8)?;

        s.serialize_field("total_time", &secs(&self.total_time))?;
        s.serialize_field("reconstruct_time", &secs(&self.reconstruct_time))?;

        s.serialize_field("iterations", &self.iterations)?;
        s.serialize_field("resolutions_attempted", &self.resolutions_attempted)?;
        s.serialize_field("tautologies_discarded", &self.tautologies_discarded)?;
        s.serialize_field("duplicates_discarded", &self.duplicates_discarded)?;
        s.serialize_field("clauses_added", &self.clauses_added)?;
        s.serialize_field("max_worklist_size", &self.max_worklist_size)?;

        s.end()
    }
}

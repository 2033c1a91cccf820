//! Saturation configuration.

/// Configuration for the saturation loop
///
/// Both limits default to 0, meaning no limit. The search space over a
/// finite signature is finite, so an unlimited run always terminates; the
/// limits only bound how long that takes on large inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaturationConfig {
    /// Stop once this many distinct clauses are stored
    pub max_clauses: usize,
    /// Stop after exploring this many worklist entries
    pub max_iterations: usize,
    /// Enable structured profiling (zero overhead when false)
    pub enable_profiling: bool,
}

impl SaturationConfig {
    pub(crate) fn clause_limit_reached(&self, clause_count: usize) -> bool {
        self.max_clauses > 0 && clause_count >= self.max_clauses
    }

    pub(crate) fn iteration_limit_reached(&self, iterations: usize) -> bool {
        self.max_iterations > 0 && iterations >= self.max_iterations
    }
}

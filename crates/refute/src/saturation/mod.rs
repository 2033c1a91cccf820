//! Refutation by saturation under binary resolution

pub mod profile;
mod state;

pub use profile::SaturationProfile;
pub use state::{Outcome, SaturationState};

use crate::config::SaturationConfig;
use crate::logic::{Clause, Interner};

/// Load a session with the default configuration
pub fn load_session(clauses: Vec<Clause>, interner: Interner) -> SaturationState {
    SaturationState::new(clauses, SaturationConfig::default(), interner)
}

/// Run saturation on an input clause sequence
pub fn saturate(
    clauses: Vec<Clause>,
    config: SaturationConfig,
    interner: Interner,
) -> (Outcome, Option<SaturationProfile>) {
    let mut state = SaturationState::new(clauses, config, interner);
    let outcome = state.run();
    (outcome, state.profile().cloned())
}

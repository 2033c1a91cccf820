//! Plain-text session report
//!
//! Premises are printed with their load numbers, followed by the proof lines
//! (on success) and a one-line verdict:
//!
//! ```text
//! 1. {P}
//! 2. {~P}
//! 3. {} 1,2
//! Contradiction, therefore the conclusion is valid.
//! ```

use crate::inference::ProofLine;
use crate::saturation::{Outcome, SaturationState};
use std::io::{self, Write};

pub const VALID_VERDICT: &str = "Contradiction, therefore the conclusion is valid.";
pub const INVALID_VERDICT: &str = "No contradiction found, therefore the argument is invalid.";
pub const LIMIT_VERDICT: &str = "Resource limit reached before the search finished; validity is undetermined.";

/// Write the numbered premise lines
pub fn write_premises<W: Write>(out: &mut W, state: &SaturationState) -> io::Result<()> {
    write_lines(out, state, state.premises())
}

/// Write the proof lines (if any) and the verdict for `outcome`
pub fn write_outcome<W: Write>(
    out: &mut W,
    state: &SaturationState,
    outcome: &Outcome,
) -> io::Result<()> {
    match outcome {
        Outcome::Valid(proof) => {
            write_lines(out, state, &proof.lines)?;
            writeln!(out, "{}", VALID_VERDICT)?;
        }
        Outcome::Invalid => writeln!(out, "{}", INVALID_VERDICT)?,
        Outcome::ResourceLimit => writeln!(out, "{}", LIMIT_VERDICT)?,
    }
    writeln!(out)
}

fn write_lines<W: Write>(out: &mut W, state: &SaturationState, lines: &[ProofLine]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.display(state.interner()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SaturationConfig;
    use crate::parser::parse_clauses;

    fn report(input: &str) -> String {
        let parsed = parse_clauses(input).unwrap();
        let mut state = SaturationState::new(parsed.clauses, SaturationConfig::default(), parsed.interner);
        let mut out = Vec::new();
        write_premises(&mut out, &state).unwrap();
        let outcome = state.run();
        write_outcome(&mut out, &state, &outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_valid_report() {
        assert_eq!(
            report("P\n~P\n"),
            "1. {P}\n2. {~P}\n3. {} 1,2\nContradiction, therefore the conclusion is valid.\n\n"
        );
    }

    #[test]
    fn test_invalid_report() {
        assert_eq!(
            report("P\nQ\n"),
            "1. {P}\n2. {Q}\nNo contradiction found, therefore the argument is invalid.\n\n"
        );
    }
}

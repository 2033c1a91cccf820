//! Clause input parsing
//!
//! One clause per line, literals separated by commas. A literal is a single
//! letter, optionally preceded by `~` for negation. Whitespace anywhere in a
//! token is ignored and letters are case-folded to upper case, so
//! `p, ~ q,R` reads as `{P, ~Q, R}`.

use crate::error::{RefuteError, Result};
use crate::logic::{Clause, Interner, Literal};
use nom::{
    character::complete::{char, satisfy},
    combinator::{all_consuming, map, opt},
    sequence::pair,
    IResult,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Clauses parsed from one input, with the interner that names their atoms
#[derive(Debug, Clone, Default)]
pub struct ParsedClauses {
    pub clauses: Vec<Clause>,
    pub interner: Interner,
}

/// Parse a literal token with whitespace already removed: `P` or `~P`
fn parse_literal_token(input: &str) -> IResult<&str, (bool, char)> {
    all_consuming(pair(
        map(opt(char('~')), |tilde| tilde.is_some()),
        satisfy(|c: char| c.is_alphabetic()),
    ))(input)
}

/// Parse a single clause line.
///
/// `line` is the 1-based line number used in error messages.
pub fn parse_clause_line(input: &str, line: usize, interner: &mut Interner) -> Result<Clause> {
    if input.trim().is_empty() {
        return Err(RefuteError::EmptyLine { line });
    }

    let mut literals = Vec::new();
    for raw in input.split(',') {
        let token: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let (_, (negated, letter)) =
            parse_literal_token(&token).map_err(|_| RefuteError::InvalidLiteral {
                line,
                token: raw.trim().to_string(),
            })?;
        let name: String = letter.to_uppercase().collect();
        literals.push(Literal::new(interner.intern_atom(&name), negated));
    }

    Ok(Clause::new(literals))
}

/// Parse clause text, one clause per line. Blank lines are skipped.
pub fn parse_clauses(input: &str) -> Result<ParsedClauses> {
    let mut parsed = ParsedClauses::default();
    for (i, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let clause = parse_clause_line(line, i + 1, &mut parsed.interner)?;
        parsed.clauses.push(clause);
    }
    Ok(parsed)
}

/// Parse a clause file, one clause per line. Blank lines are skipped.
pub fn parse_clause_file(path: impl AsRef<Path>) -> Result<ParsedClauses> {
    let file = File::open(path)?;
    let mut parsed = ParsedClauses::default();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let clause = parse_clause_line(&line, i + 1, &mut parsed.interner)?;
        parsed.clauses.push(clause);
    }
    Ok(parsed)
}

/// Read exactly `count` clause lines from a stream (interactive entry).
///
/// Blank lines are rejected here: each line read is one clause.
pub fn read_clauses<R: BufRead>(reader: &mut R, count: usize) -> Result<ParsedClauses> {
    let mut parsed = ParsedClauses::default();
    for i in 0..count {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(RefuteError::InvalidInput(format!(
                "expected {} clauses, input ended after {}",
                count, i
            )));
        }
        let clause = parse_clause_line(&line, i + 1, &mut parsed.interner)?;
        parsed.clauses.push(clause);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(parsed: &ParsedClauses) -> Vec<String> {
        parsed
            .clauses
            .iter()
            .map(|c| c.display(&parsed.interner).to_string())
            .collect()
    }

    #[test]
    fn test_parse_line() {
        let mut interner = Interner::new();
        let clause = parse_clause_line("P, ~Q, R", 1, &mut interner).unwrap();
        assert_eq!(clause.display(&interner).to_string(), "{P, ~Q, R}");
    }

    #[test]
    fn test_case_folding_and_whitespace() {
        let mut interner = Interner::new();
        let clause = parse_clause_line(" p ,~ q,\tr ", 1, &mut interner).unwrap();
        assert_eq!(clause.display(&interner).to_string(), "{P, ~Q, R}");
        assert_eq!(interner.atom_count(), 3);
    }

    #[test]
    fn test_duplicate_literals_collapse() {
        let mut interner = Interner::new();
        let clause = parse_clause_line("P, p, ~Q", 1, &mut interner).unwrap();
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn test_invalid_tokens() {
        let mut interner = Interner::new();
        for bad in ["PQ", "~~P", "1", "P,,Q", "~", "P~", "P,"] {
            match parse_clause_line(bad, 3, &mut interner) {
                Err(RefuteError::InvalidLiteral { line, .. }) => assert_eq!(line, 3),
                other => panic!("{:?} should be rejected, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_invalid_token_is_reported() {
        let mut interner = Interner::new();
        let err = parse_clause_line("P, QR", 7, &mut interner).unwrap_err();
        assert_eq!(err.to_string(), "line 7: invalid literal 'QR'");
    }

    #[test]
    fn test_empty_line_rejected() {
        let mut interner = Interner::new();
        assert!(matches!(
            parse_clause_line("   ", 2, &mut interner),
            Err(RefuteError::EmptyLine { line: 2 })
        ));
    }

    #[test]
    fn test_parse_clauses_skips_blank_lines() {
        let parsed = parse_clauses("P, Q\n\n~P, R\n~Q, R\n~R\n").unwrap();
        assert_eq!(render(&parsed), vec!["{P, Q}", "{~P, R}", "{~Q, R}", "{~R}"]);
    }

    #[test]
    fn test_parse_clauses_reports_line_number() {
        let err = parse_clauses("P\n\nQ, 2\n").unwrap_err();
        assert!(matches!(err, RefuteError::InvalidLiteral { line: 3, .. }));
    }

    #[test]
    fn test_read_clauses_counts_lines() {
        let mut input = "P\n~P\nQ\n".as_bytes();
        let parsed = read_clauses(&mut input, 2).unwrap();
        assert_eq!(render(&parsed), vec!["{P}", "{~P}"]);
    }

    #[test]
    fn test_read_clauses_short_input() {
        let mut input = "P\n".as_bytes();
        assert!(matches!(
            read_clauses(&mut input, 2),
            Err(RefuteError::InvalidInput(_))
        ));
    }
}

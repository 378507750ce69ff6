use std::io::{BufRead, Lines};

use crate::core::{RawCommand, Result, Time, TokenError};

/// Parsed evaluation input: the expiry limit plus the raw command rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationInput {
    pub expiry_limit: Time,
    pub commands: Vec<RawCommand>,
}

/// Reads the line-oriented input format: one line each for the expiry limit,
/// the row count, and the column count, then `rows` lines of
/// whitespace-separated non-negative integers.
///
/// The declared column count is informational only. Rows keep whatever width
/// they actually have; the executor owns the shape check. Missing lines and
/// non-integer fields are the one unrecoverable condition in the system.
pub fn parse_input<R: BufRead>(reader: R) -> Result<EvaluationInput> {
    let mut lines = reader.lines();

    let expiry_limit = next_integer(&mut lines, "expiry limit")?;
    let rows = next_integer(&mut lines, "row count")? as usize;
    let _columns = next_integer(&mut lines, "column count")?;

    let mut commands = Vec::with_capacity(rows);
    for row in 0..rows {
        let line = next_line(&mut lines, &format!("command row {row}"))?;
        let fields = line
            .split_whitespace()
            .map(|field| parse_field(field, "command field"))
            .collect::<Result<RawCommand>>()?;
        commands.push(fields);
    }

    Ok(EvaluationInput {
        expiry_limit,
        commands,
    })
}

fn next_line<R: BufRead>(lines: &mut Lines<R>, what: &str) -> Result<String> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(TokenError::Parse(format!("missing {what} line"))),
    }
}

fn next_integer<R: BufRead>(lines: &mut Lines<R>, what: &str) -> Result<u64> {
    let line = next_line(lines, what)?;
    parse_field(line.trim(), what)
}

fn parse_field(field: &str, what: &str) -> Result<u64> {
    field
        .parse()
        .map_err(|_| TokenError::Parse(format!("invalid {what}: '{field}'")))
}

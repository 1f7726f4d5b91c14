//! Line-oriented text format for systems.
//!
//! ```text
//! # objective: coefficients only (`= 0` implied)
//! 3 2
//! # constraints: x1 x2 op rhs, op in < > = (also <= >=)
//! 1 1 < 4
//! 1 0 < 3
//! ```
//!
//! Blank lines and `#` comments are skipped. The first row is the objective.

use std::fmt;

use crate::plane::{Equation, EquationError, Relation, System};

/// Errors from `parse_system`; line numbers are 1-based.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// No rows at all.
    Empty,
    MissingField { line: usize, field: &'static str },
    BadNumber { line: usize, token: String },
    TrailingTokens { line: usize },
    Equation { line: usize, source: EquationError },
}

impl ParseError {
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Empty => None,
            ParseError::MissingField { line, .. }
            | ParseError::BadNumber { line, .. }
            | ParseError::TrailingTokens { line }
            | ParseError::Equation { line, .. } => Some(*line),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "input has no rows"),
            ParseError::MissingField { line, field } => {
                write!(f, "line {line}: missing {field}")
            }
            ParseError::BadNumber { line, token } => {
                write!(f, "line {line}: {token:?} is not a number")
            }
            ParseError::TrailingTokens { line } => {
                write!(f, "line {line}: unexpected tokens after rhs")
            }
            ParseError::Equation { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Equation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse a whole system; the first row is the objective.
pub fn parse_system(src: &str) -> Result<System, ParseError> {
    let mut equations = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let body = raw.split('#').next().unwrap_or("").trim();
        if body.is_empty() {
            continue;
        }
        let objective = equations.is_empty();
        equations.push(parse_row(body, idx + 1, objective)?);
    }
    System::from_equations(equations).map_err(|_| ParseError::Empty)
}

/// Parse one row. The objective row may stop after its two coefficients.
pub fn parse_row(body: &str, line: usize, objective: bool) -> Result<Equation, ParseError> {
    let mut tokens = body.split_whitespace();
    let a = number(tokens.next(), line, "x1 coefficient")?;
    let b = number(tokens.next(), line, "x2 coefficient")?;
    let op = match tokens.next() {
        Some(token) => token
            .parse::<Relation>()
            .map_err(|source| ParseError::Equation { line, source })?,
        None if objective => return Ok(Equation::objective(a, b)),
        None => return Err(ParseError::MissingField { line, field: "operator" }),
    };
    let c = number(tokens.next(), line, "rhs")?;
    if tokens.next().is_some() {
        return Err(ParseError::TrailingTokens { line });
    }
    Ok(Equation::new(a, b, op, c))
}

fn number(token: Option<&str>, line: usize, field: &'static str) -> Result<f64, ParseError> {
    let token = token.ok_or(ParseError::MissingField { line, field })?;
    token.parse::<f64>().map_err(|_| ParseError::BadNumber {
        line,
        token: token.to_string(),
    })
}

/// Render a system back into the text format (objective first).
pub fn write_system(system: &System) -> String {
    let mut out = String::new();
    for eq in system.equations() {
        out.push_str(&format!("{} {} {} {}\n", eq.a, eq.b, eq.op, eq.c));
    }
    out
}

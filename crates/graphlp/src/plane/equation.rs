//! Linear relations `a·x1 + b·x2 <op> c` and the ordered systems built from them.
//!
//! - `Relation`: the operator, parsed from `<`, `>`, `=`.
//! - `Equation`: one relation, a plain copyable value.
//! - `System`: row 0 is the objective, rows 1.. are constraints.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

/// Relational operator of an equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `a·x + b·y <= c`, written `<`.
    Le,
    /// `a·x + b·y >= c`, written `>`.
    Ge,
    /// `a·x + b·y = c`, written `=`.
    Eq,
}

impl Relation {
    /// Map a single operator symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, EquationError> {
        match symbol {
            '<' => Ok(Relation::Le),
            '>' => Ok(Relation::Ge),
            '=' => Ok(Relation::Eq),
            other => Err(EquationError::InvalidOperator {
                token: other.to_string(),
            }),
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Relation::Le => '<',
            Relation::Ge => '>',
            Relation::Eq => '=',
        }
    }
}

impl FromStr for Relation {
    type Err = EquationError;

    /// Accepts the single symbols plus the `<=`, `>=`, `==` spellings.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "<=" => return Ok(Relation::Le),
            ">=" => return Ok(Relation::Ge),
            "==" => return Ok(Relation::Eq),
            _ => {}
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Relation::from_symbol(symbol),
            _ => Err(EquationError::InvalidOperator {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors raised while assembling equations and systems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EquationError {
    /// Operator token is not one of `<`, `>`, `=`.
    InvalidOperator { token: String },
    /// A system needs at least the objective row.
    EmptySystem,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquationError::InvalidOperator { token } => {
                write!(f, "invalid operator {token:?} (expected '<', '>' or '=')")
            }
            EquationError::EmptySystem => write!(f, "system has no equations"),
        }
    }
}

impl std::error::Error for EquationError {}

/// One linear relation `a·x1 + b·x2 <op> c`.
///
/// Zero coefficients are legal; `a = b = 0` is a degenerate line that is never drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Equation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub op: Relation,
}

impl Equation {
    #[inline]
    pub fn new(a: f64, b: f64, op: Relation, c: f64) -> Self {
        Self { a, b, c, op }
    }

    /// Build from a raw operator symbol, rejecting anything but `<`, `>`, `=`.
    pub fn with_symbol(a: f64, b: f64, symbol: char, c: f64) -> Result<Self, EquationError> {
        Ok(Self::new(a, b, Relation::from_symbol(symbol)?, c))
    }

    /// Objective row: only the coefficients matter, stored as `a·x1 + b·x2 = 0`.
    #[inline]
    pub fn objective(a: f64, b: f64) -> Self {
        Self::new(a, b, Relation::Eq, 0.0)
    }

    /// Coefficient vector `(a, b)`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }

    /// Left-hand side `a·x + b·y` at `p`.
    #[inline]
    pub fn lhs(&self, p: Vector2<f64>) -> f64 {
        self.normal().dot(&p)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// Axis intercepts `(c/a, c/b)`; an axis with a zero coefficient reports 0.
    pub fn intercepts(&self) -> (f64, f64) {
        let x = if self.a != 0.0 { self.c / self.a } else { 0.0 };
        let y = if self.b != 0.0 { self.c / self.b } else { 0.0 };
        (x, y)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}x1 + {:.2}x2 {} {:.2}",
            self.a, self.b, self.op, self.c
        )
    }
}

/// Ordered system of equations. Row 0 is the objective, rows `1..` are constraints.
///
/// Invariant: never empty. Rows are read-only once the system is built.
#[derive(Clone, Debug, PartialEq)]
pub struct System {
    equations: Vec<Equation>,
}

impl System {
    pub fn new(objective: Equation, constraints: impl IntoIterator<Item = Equation>) -> Self {
        let mut equations = vec![objective];
        equations.extend(constraints);
        Self { equations }
    }

    /// Take rows as given; the first one becomes the objective.
    pub fn from_equations(equations: Vec<Equation>) -> Result<Self, EquationError> {
        if equations.is_empty() {
            return Err(EquationError::EmptySystem);
        }
        Ok(Self { equations })
    }

    /// Build from `(x1, x2, op, rhs)` tuples; the first tuple is the objective.
    pub fn from_rows(rows: &[(f64, f64, char, f64)]) -> Result<Self, EquationError> {
        let equations = rows
            .iter()
            .map(|&(a, b, symbol, c)| Equation::with_symbol(a, b, symbol, c))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_equations(equations)
    }

    #[inline]
    pub fn objective(&self) -> &Equation {
        &self.equations[0]
    }

    /// Constraint rows (everything after the objective).
    #[inline]
    pub fn constraints(&self) -> &[Equation] {
        &self.equations[1..]
    }

    /// All rows, objective first.
    #[inline]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    #[inline]
    pub fn num_constraints(&self) -> usize {
        self.equations.len() - 1
    }
}

use log::debug;
use rand::{thread_rng, Rng};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::parse::{Expression, Operator, Term};

/// Every roll made for an expression.
///
/// `subtotals` and `rolls` hold one entry per term, in the order the terms
/// were written. The total is the sum of the subtotals and every subtotal is
/// the sum of its rolls. A constant shows up as a single roll of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RolledExpression {
    pub(crate) total: i64,
    pub(crate) subtotals: Vec<i64>,
    pub(crate) rolls: Vec<Vec<i64>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) terms: Vec<Term>,
}

impl RolledExpression {
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Same as `total()`.
    pub fn value(&self) -> i64 {
        self.total
    }

    pub fn subtotals(&self) -> &[i64] {
        &self.subtotals
    }

    pub fn rolls(&self) -> &[Vec<i64>] {
        &self.rolls
    }
}

impl Expression {
    /// Lowest total the expression can roll.
    pub fn min(&self) -> i64 {
        self.terms.iter().map(Term::min).fold(0, i64::saturating_add)
    }

    /// Highest total the expression can roll.
    pub fn max(&self) -> i64 {
        self.terms.iter().map(Term::max).fold(0, i64::saturating_add)
    }

    /// Rolls every term.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_with()`
    pub fn roll(&self) -> RolledExpression {
        self.roll_with(&mut thread_rng())
    }

    /// Rolls every term, in order, with the rng specified.
    pub fn roll_with(&self, rng: &mut impl Rng) -> RolledExpression {
        let (subtotals, rolls): (Vec<i64>, Vec<Vec<i64>>) = self
            .terms
            .iter()
            .map(|term| {
                let roll = term.roll_with(&mut *rng);
                (roll.total, roll.rolls)
            })
            .unzip();
        let total = subtotals.iter().sum();

        let rolled = RolledExpression {
            total,
            subtotals,
            rolls,
            terms: self.terms.clone(),
        };
        debug!("rolled {}: {rolled} = {total}", self);

        rolled
    }

    /// Rolls the expression and only keeps the total.
    pub fn roll_total(&self) -> i64 {
        self.roll().total
    }

    pub fn roll_total_with(&self, rng: &mut impl Rng) -> i64 {
        self.roll_with(rng).total
    }
}

// Negative terms are printed after a `-` with their rolls made positive,
// `3d6 - 1d4 + 2` rolls into `[4, 1, 6] - [3] + 2`.
impl std::fmt::Display for RolledExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (term, rolls)) in self.terms.iter().zip(&self.rolls).enumerate() {
            let op = if term.is_negative() {
                Operator::Sub
            } else {
                Operator::Add
            };

            match (i, op) {
                (0, Operator::Add) => {}
                (0, Operator::Sub) => write!(f, "{op}")?,
                _ => write!(f, " {op} ")?,
            }

            match term {
                Term::Dice(_) => write!(f, "{}", to_notation(rolls))?,
                Term::Constant(constant) => write!(f, "{}", constant.value().unsigned_abs())?,
            }
        }
        Ok(())
    }
}

fn to_notation(rolls: &[i64]) -> String {
    let rolls = rolls
        .iter()
        .map(|roll| roll.unsigned_abs().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{rolls}]")
}

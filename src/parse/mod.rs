mod expression;
pub(crate) mod matcher;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Largest number of dice a single group may roll at once.
pub const MAX_DICE_COUNT: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Sign::Positive => value,
            Sign::Negative => -value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
}

/// `{count}d{sides}`\
/// A group of identical dice, every die rolls between 1 and `sides`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dice {
    pub(crate) count: u32,
    pub(crate) sides: u32,
    pub(crate) sign: Sign,
}

/// A fixed number added to (or subtracted from) the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Constant {
    pub(crate) value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Term {
    Dice(Dice),
    Constant(Constant),
}

/// A parsed dice expression, an ordered list of signed terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Expression {
    pub(crate) terms: Vec<Term>,
}

impl Dice {
    /// Creates a positive group of dice.
    /// `count` is clamped to `1..=MAX_DICE_COUNT`, `sides` to at least 1.
    pub fn new(count: u32, sides: u32) -> Self {
        Self {
            count: count.clamp(1, MAX_DICE_COUNT),
            sides: sides.max(1),
            sign: Sign::Positive,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }
    pub fn sides(&self) -> u32 {
        self.sides
    }
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Makes every die roll negative values. Calling it again has no effect.
    pub fn negate(&mut self) {
        self.sign = Sign::Negative;
    }
}

impl Constant {
    pub fn new(value: u32) -> Self {
        Self {
            value: i64::from(value),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Makes the value negative. Calling it again has no effect.
    pub fn negate(&mut self) {
        self.value = -self.value.saturating_abs();
    }
}

impl Term {
    pub fn negate(&mut self) {
        match self {
            Term::Dice(dice) => dice.negate(),
            Term::Constant(constant) => constant.negate(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Term::Dice(dice) => dice.sign == Sign::Negative,
            Term::Constant(constant) => constant.value < 0,
        }
    }
}

impl From<Dice> for Term {
    fn from(dice: Dice) -> Self {
        Term::Dice(dice)
    }
}

impl From<Constant> for Term {
    fn from(constant: Constant) -> Self {
        Term::Constant(constant)
    }
}

impl Expression {
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// A parsed expression always holds at least one term.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
        };
        write!(f, "{str}")
    }
}

// Terms print without their sign, the expression places it as an operator.
impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Dice(dice) => write!(f, "{}d{}", dice.count, dice.sides),
            Term::Constant(constant) => write!(f, "{}", constant.value.unsigned_abs()),
        }
    }
}

// Parsed expressions print back to notation that parses to the same terms.
// A leading `-` only shows up for hand-built expressions starting with a
// negative term, and that output is not accepted by `Expression::parse`.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
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
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

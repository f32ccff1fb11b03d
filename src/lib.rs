//! Parse simple dice notation, roll it, or work out the lowest and highest
//! totals it can produce.
//!
//! An expression is a list of dice groups (`3d6`, `d20`, `2d%`) and positive
//! constants joined by `+` or `-`, with any amount of spaces between them.
//!
//! ```rust
//! # use dice_expression::{parse, roll_with, Expression};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), dice_expression::ParseError> {
//! let expression = parse("3d6 + 2d4 - 5")?;
//! assert_eq!(expression.min(), 0);
//! assert_eq!(expression.max(), 21);
//!
//! // Roll with the thread rng and only keep the total
//! let total = expression.roll_total();
//! assert!((0..=21).contains(&total));
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut rng = StdRng::seed_from_u64(1);
//! let rolled = roll_with("2d6 + 3", &mut rng)?;
//! println!("{rolled} = {}", rolled.total()); // e.g. [5, 6] + 3 = 14
//! assert_eq!(rolled.subtotals().len(), 2);
//!
//! // Invalid notation is rejected up front
//! assert!("2d6 +".parse::<Expression>().is_err());
//! # Ok(())
//! # }
//! ```

mod error;
mod evaluate;
mod parse;

pub use error::ParseError;
pub use evaluate::{dice_roll::TermRoll, expression::RolledExpression};
pub use parse::{Constant, Dice, Expression, Operator, Sign, Term, MAX_DICE_COUNT};

/// Parses the notation returning the expression without rolling the dice.
pub fn parse(notation: &str) -> Result<Expression, ParseError> {
    Expression::parse(notation)
}

/// Parses the notation returning the result of rolling all the dice parsed.
pub fn roll(notation: &str) -> Result<RolledExpression, ParseError> {
    let expression = Expression::parse(notation)?;
    Ok(expression.roll())
}

/// Same as `roll()` but allows you to choose the rng you prefer to use.
pub fn roll_with(notation: &str, rng: &mut impl rand::Rng) -> Result<RolledExpression, ParseError> {
    let expression = Expression::parse(notation)?;
    Ok(expression.roll_with(rng))
}

use std::str::FromStr;

use log::{debug, trace};

use super::{
    matcher::{constant_matcher, dice_matcher, either, operator_matcher, space_matcher, Token},
    Expression, Operator, Term,
};
use crate::ParseError;

/// The scanner cycles through these slots, terms and operators alternate
/// with optional spaces between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    LeadingSpace,
    Term,
    TrailingSpace,
    Operator,
}

impl Slot {
    fn next(self) -> Self {
        match self {
            Slot::LeadingSpace => Slot::Term,
            Slot::Term => Slot::TrailingSpace,
            Slot::TrailingSpace => Slot::Operator,
            Slot::Operator => Slot::LeadingSpace,
        }
    }
}

impl Expression {
    /// Parses dice notation such as `3d6 + 2d4 - 5`.
    pub fn parse(notation: &str) -> Result<Expression, ParseError> {
        let tokens = tokenize(notation).map_err(|err| {
            debug!("rejected dice expression {notation:?}: {err}");
            err
        })?;
        let terms = fold_signs(tokens);
        debug!("parsed {notation:?} into {} terms", terms.len());

        Ok(Expression { terms })
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

impl TryFrom<&str> for Expression {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Expression::parse(value)
    }
}

fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let term = either(dice_matcher, constant_matcher);

    let mut rest = source;
    let mut slot = Slot::LeadingSpace;
    let mut tokens = Vec::new();

    while !rest.is_empty() {
        let matched = match slot {
            Slot::LeadingSpace | Slot::TrailingSpace => space_matcher(rest),
            Slot::Term => term(rest),
            Slot::Operator => operator_matcher(rest),
        };
        let Some(matched) = matched else {
            return Err(ParseError::syntax(source, rest));
        };

        trace!(
            "{slot:?} consumed {:?}",
            &rest[..rest.len() - matched.rest.len()]
        );
        tokens.extend(matched.token);
        rest = matched.rest;
        slot = slot.next();
    }

    match tokens.last() {
        None => Err(ParseError::Empty),
        Some(Token::Operator(_)) => Err(ParseError::TrailingOperator),
        Some(Token::Term(_)) => Ok(tokens),
    }
}

/// Turns the `+`/`-` in front of every term into the sign of the term.
fn fold_signs(tokens: Vec<Token>) -> Vec<Term> {
    let mut terms = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut last_operator = Operator::Add;

    for token in tokens {
        match token {
            Token::Operator(op) => last_operator = op,
            Token::Term(mut term) => {
                if last_operator == Operator::Sub {
                    term.negate();
                }
                terms.push(term);
            }
        }
    }

    terms
}

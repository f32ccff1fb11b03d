//! Recognizers for the pieces of a dice expression.
//!
//! Every matcher looks at the start of the input and either returns what it
//! read together with the rest of the input, or `None` if the input doesn't
//! start with what it's looking for. Matchers never fail in any other way.

use winnow::{
    combinator::{alt, opt},
    token::{one_of, take_while},
    PResult, Parser,
};

use super::{Constant, Dice, Operator, Term, MAX_DICE_COUNT};

const PERCENTILE_SIDES: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Term(Term),
    Operator(Operator),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Matched<'i> {
    /// Spaces are consumed without producing a token.
    pub token: Option<Token>,
    pub rest: &'i str,
}

/// `[count]d{sides}`, `[count]D{sides}`, `[count]d%`
pub(crate) fn dice_matcher(input: &str) -> Option<Matched<'_>> {
    let (dice, rest) = run(dice, input)?;
    Some(Matched {
        token: Some(Token::Term(Term::Dice(dice))),
        rest,
    })
}

pub(crate) fn constant_matcher(input: &str) -> Option<Matched<'_>> {
    let (value, rest) = run(non_zero_start_number, input)?;
    Some(Matched {
        token: Some(Token::Term(Term::Constant(Constant::new(value)))),
        rest,
    })
}

/// Always matches, possibly without consuming anything.
pub(crate) fn space_matcher(input: &str) -> Option<Matched<'_>> {
    let rest = input.trim_start_matches(' ');
    Some(Matched { token: None, rest })
}

pub(crate) fn operator_matcher(input: &str) -> Option<Matched<'_>> {
    let (op, rest) = run(operator, input)?;
    Some(Matched {
        token: Some(Token::Operator(op)),
        rest,
    })
}

/// Tries `first`, falling back to `second` on the same input.
/// `second` never runs when `first` matches.
pub(crate) fn either<'i>(
    first: impl Fn(&'i str) -> Option<Matched<'i>>,
    second: impl Fn(&'i str) -> Option<Matched<'i>>,
) -> impl Fn(&'i str) -> Option<Matched<'i>> {
    move |input| first(input).or_else(|| second(input))
}

fn run<O>(parser: fn(&mut &str) -> PResult<O>, input: &str) -> Option<(O, &str)> {
    let mut rest = input;
    let output = parser(&mut rest).ok()?;
    Some((output, rest))
}

fn dice(input: &mut &str) -> PResult<Dice> {
    (
        opt(dice_count),
        one_of(['d', 'D']),
        alt(('%'.value(PERCENTILE_SIDES), non_zero_start_number)),
    )
        .map(|(count, _, sides)| Dice::new(count.unwrap_or(1), sides))
        .parse_next(input)
}

fn operator(input: &mut &str) -> PResult<Operator> {
    alt(('+'.value(Operator::Add), '-'.value(Operator::Sub))).parse_next(input)
}

// Counts above the cap don't match.
fn dice_count(input: &mut &str) -> PResult<u32> {
    non_zero_start_number
        .verify(|count: &u32| *count <= MAX_DICE_COUNT)
        .parse_next(input)
}

// Numbers too big for a u32 don't match.
fn non_zero_start_number(input: &mut &str) -> PResult<u32> {
    take_while(1.., '0'..='9')
        .verify(|digits: &str| !digits.starts_with('0'))
        .try_map(|digits: &str| digits.parse::<u32>())
        .parse_next(input)
}

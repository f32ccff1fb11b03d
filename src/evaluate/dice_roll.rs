use log::trace;
use rand::{thread_rng, Rng};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::parse::{Constant, Dice, Sign, Term};

/// The outcome of rolling a single term.
/// `total` is always the sum of `rolls`, which are already signed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TermRoll {
    pub(crate) total: i64,
    pub(crate) rolls: Vec<i64>,
}

impl TermRoll {
    pub fn total(&self) -> i64 {
        self.total
    }
    pub fn rolls(&self) -> &[i64] {
        &self.rolls
    }
}

impl Dice {
    /// Lowest total the dice can roll.
    /// For negative dice that's every die landing on its highest side.
    pub fn min(&self) -> i64 {
        match self.sign {
            Sign::Positive => i64::from(self.count),
            Sign::Negative => -self.highest_total(),
        }
    }

    /// Highest total the dice can roll.
    pub fn max(&self) -> i64 {
        match self.sign {
            Sign::Positive => self.highest_total(),
            Sign::Negative => -i64::from(self.count),
        }
    }

    fn highest_total(&self) -> i64 {
        i64::from(self.count).saturating_mul(i64::from(self.sides))
    }

    /// Roll every die once.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_with()`
    pub fn roll(&self) -> TermRoll {
        self.roll_with(&mut thread_rng())
    }

    /// Roll every die once with the rng specified.
    pub fn roll_with(&self, rng: &mut impl Rng) -> TermRoll {
        let rolls: Vec<i64> = (0..self.count)
            .map(|_| self.sign.apply(i64::from(rng.gen_range(1..=self.sides))))
            .collect();
        let total = rolls.iter().sum();

        trace!("dice roll result for {}d{} is {rolls:?}", self.count, self.sides);

        TermRoll { total, rolls }
    }
}

impl Constant {
    pub fn min(&self) -> i64 {
        self.value
    }

    pub fn max(&self) -> i64 {
        self.value
    }

    pub fn roll(&self) -> TermRoll {
        TermRoll {
            total: self.value,
            rolls: vec![self.value],
        }
    }
}

impl Term {
    pub fn min(&self) -> i64 {
        match self {
            Term::Dice(dice) => dice.min(),
            Term::Constant(constant) => constant.min(),
        }
    }

    pub fn max(&self) -> i64 {
        match self {
            Term::Dice(dice) => dice.max(),
            Term::Constant(constant) => constant.max(),
        }
    }

    pub fn roll(&self) -> TermRoll {
        self.roll_with(&mut thread_rng())
    }

    pub fn roll_with(&self, rng: &mut impl Rng) -> TermRoll {
        match self {
            Term::Dice(dice) => dice.roll_with(rng),
            Term::Constant(constant) => constant.roll(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn negative(count: u32, sides: u32) -> Dice {
        let mut dice = Dice::new(count, sides);
        dice.negate();
        dice
    }

    #[test]
    fn test_min_positive() {
        assert_eq!(Dice::new(2, 6).min(), 2);
        assert_eq!(Dice::new(1, 5).min(), 1);
        assert_eq!(Dice::new(1000, 5000).min(), 1000);
    }

    #[test]
    fn test_min_negative() {
        assert_eq!(negative(5, 1000).min(), -5000);
        assert_eq!(negative(5, 8).min(), -40);
    }

    #[test]
    fn test_max_positive() {
        assert_eq!(Dice::new(2, 8).max(), 16);
        assert_eq!(Dice::new(4, 25).max(), 100);
        assert_eq!(Dice::new(1000, 3333).max(), 3_333_000);
    }

    #[test]
    fn test_max_negative() {
        assert_eq!(negative(7, 8).max(), -7);
        assert_eq!(negative(5, 24).max(), -5);
        assert_eq!(negative(1025, 3333).max(), -1025);
    }

    #[test]
    fn test_bounds_of_largest_dice() {
        let dice = Dice::new(u32::MAX, u32::MAX);
        assert_eq!(dice.min(), 10_000);
        assert_eq!(dice.max(), 42_949_672_950_000);

        let dice = negative(u32::MAX, u32::MAX);
        assert_eq!(dice.min(), -42_949_672_950_000);
        assert_eq!(dice.max(), -10_000);
    }

    #[test]
    fn test_roll_range_and_format() {
        let dice = Dice::new(8, 2);
        let mut rng = test_rng();
        let mut counts = [0; 3];

        for _ in 0..100 {
            let roll = dice.roll_with(&mut rng);
            assert!((8..=16).contains(&roll.total()));
            assert_eq!(roll.rolls().len(), 8);

            for value in roll.rolls() {
                assert!((1..=2).contains(value));
                counts[*value as usize] += 1;
            }
        }

        // 800 coin flips, both sides show up plenty
        assert!(counts[1] >= 100);
        assert!(counts[2] >= 100);
    }

    #[test]
    fn test_roll_negative() {
        let dice = negative(5, 4);
        let mut rng = test_rng();

        for _ in 0..100 {
            let roll = dice.roll_with(&mut rng);
            assert!((-20..=-5).contains(&roll.total()));
            assert_eq!(roll.rolls().len(), 5);
            assert!(roll.rolls().iter().all(|value| (-4..=-1).contains(value)));
        }
    }

    #[test]
    fn test_one_sided_dice() {
        let roll = Dice::new(3, 1).roll();
        assert_eq!(roll.rolls(), &[1, 1, 1]);
        assert_eq!(roll.total(), 3);
    }

    #[test]
    fn test_constant() {
        let constant = Constant::new(7777);
        assert_eq!(constant.min(), 7777);
        assert_eq!(constant.max(), 7777);

        let roll = constant.roll();
        assert_eq!(roll.total(), 7777);
        assert_eq!(roll.rolls(), &[7777]);
    }

    #[test]
    fn test_negative_constant() {
        let mut constant = Constant::new(55);
        for _ in 0..2 {
            constant.negate();
            assert_eq!(constant.min(), -55);
            assert_eq!(constant.max(), -55);
            assert_eq!(constant.roll().total(), -55);
            assert_eq!(constant.roll().rolls(), &[-55]);
        }
    }

    #[test]
    fn test_term_dispatch() {
        let mut rng = test_rng();
        let term = Term::from(Dice::new(3, 6));
        assert_eq!((term.min(), term.max()), (3, 18));
        assert_eq!(term.roll_with(&mut rng).rolls().len(), 3);

        let term = Term::from(Constant::new(4));
        assert_eq!((term.min(), term.max()), (4, 4));
        assert_eq!(term.roll_with(&mut rng).rolls(), &[4]);
    }

    proptest! {
        #[test]
        fn test_roll_within_bounds(count in 1u32..=50, sides in 1u32..=1000, seed: u64, negate: bool) {
            let mut dice = Dice::new(count, sides);
            if negate {
                dice.negate();
            }
            let roll = dice.roll_with(&mut StdRng::seed_from_u64(seed));

            prop_assert!(dice.min() <= roll.total() && roll.total() <= dice.max());
            prop_assert_eq!(roll.rolls().len(), count as usize);
            prop_assert_eq!(roll.rolls().iter().sum::<i64>(), roll.total());
            prop_assert!(roll.rolls().iter().all(|value| (1..=i64::from(sides)).contains(&value.abs())));
        }

        #[test]
        fn test_negate_is_idempotent(count in 1u32..=1000, sides in 1u32..=1000) {
            let mut once = Term::from(Dice::new(count, sides));
            once.negate();
            let mut twice = once;
            twice.negate();

            prop_assert_eq!(once.min(), twice.min());
            prop_assert_eq!(once.max(), twice.max());
            prop_assert_eq!(once.min(), -(i64::from(count) * i64::from(sides)));
            prop_assert_eq!(once.max(), -i64::from(count));
        }
    }
}

pub(crate) mod dice_roll;
pub(crate) mod expression;

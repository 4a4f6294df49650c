//! Seedable dice: sums of uniform die rolls that replay exactly from a seed.

mod common;
mod dice;
mod error;
mod pool;
mod roller;
mod seed;

pub use common::{Int, NonZeroUInt, Seed, Total, UInt};
pub use dice::{DefaultRng, Dice};
pub use error::{ParseDiceError, RollError};
pub use pool::DicePool;
pub use roller::Roller;
pub use seed::{FixedSeed, SeedSource, SystemClock};

/// Rolls an `NdS` expression once with clock-seeded [`Dice`].
///
/// # Examples
/// ```
/// let total = seeded_dice::roll("3d6").unwrap();
/// assert!((3..=18).contains(&total));
/// ```
pub fn roll(expr: &str) -> Result<Total, RollError> {
    Dice::new().roll_str(expr)
}

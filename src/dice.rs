use crate::common::{Int, Seed, Total, UInt};
use crate::error::RollError;
use crate::pool::DicePool;
use crate::roller::Roller;
use crate::seed::{SeedSource, SystemClock};
use rand::SeedableRng;

/// Generator used by [`Dice`] unless another one is supplied.
///
/// ChaCha8 output is stable across platforms and crate releases, so a seed
/// always replays the same rolls.
pub type DefaultRng = rand_chacha::ChaCha8Rng;

/// Rolls dice and sums them, drawing from a private generator.
///
/// Each roll advances the generator; nothing ever rewinds it.
///
/// ```
/// # use seeded_dice::Dice;
/// let mut dice = Dice::with_seed(42);
/// let total = dice.roll(2, 6).unwrap();
/// assert!((2..=12).contains(&total));
/// ```
#[derive(Debug, Clone)]
pub struct Dice<R = DefaultRng> {
    roller: R,
    seed: Option<Seed>,
}

impl Dice {
    /// Seeds from the wall clock.
    pub fn new() -> Self {
        Self::from_seed_source(&SystemClock)
    }

    pub fn with_seed(seed: Seed) -> Self {
        Self::seed_from_u64(seed)
    }

    pub fn from_seed_source(source: &impl SeedSource) -> Self {
        Self::seed_from_u64(source.seed())
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Roller + SeedableRng> Dice<R> {
    /// Seeds a generator of type `R`.
    pub fn seed_from_u64(seed: Seed) -> Self {
        tracing::debug!(seed, "seeding dice");
        Self {
            roller: R::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl<R: Roller> Dice<R> {
    /// Wraps an already constructed roller. [`Dice::seed`] will be `None`.
    pub fn from_rng(roller: R) -> Self {
        Self { roller, seed: None }
    }

    /// The seed this instance was created from, if it was seeded here.
    pub fn seed(&self) -> Option<Seed> {
        self.seed
    }

    /// Rolls `num` dice of `size` sides and returns their sum.
    ///
    /// Consumes exactly `num` draws. Fails when `num` is negative or `size`
    /// is less than one; `size` is checked even when `num` is zero.
    pub fn roll(&mut self, num: Int, size: Int) -> Result<Total, RollError> {
        let pool = DicePool::try_from((num, size))?;
        Ok(self.roll_pool(pool))
    }

    /// `1d6`.
    pub fn roll_default(&mut self) -> Total {
        self.roll_pool(DicePool::default())
    }

    pub fn roll_pool(&mut self, pool: DicePool) -> Total {
        let total: Total = self
            .roller
            .roll_many(pool.num, pool.sides)
            .map(Total::from)
            .sum();
        tracing::trace!(%pool, total, "rolled");
        total
    }

    /// The individual faces of a roll, in the order they were drawn.
    pub fn roll_each(&mut self, pool: DicePool) -> Vec<UInt> {
        let faces: Vec<UInt> = self
            .roller
            .roll_many(pool.num, pool.sides)
            .collect();
        tracing::trace!(%pool, ?faces, "rolled");
        faces
    }

    /// Parses `NdS` (or `dS`) and rolls it.
    pub fn roll_str(&mut self, expr: &str) -> Result<Total, RollError> {
        let pool: DicePool = expr.parse()?;
        Ok(self.roll_pool(pool))
    }
}

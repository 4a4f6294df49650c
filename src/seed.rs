use crate::common::Seed;
use std::time::{SystemTime, UNIX_EPOCH};

/// Where a [`Dice`](crate::Dice) gets its seed from.
pub trait SeedSource {
    fn seed(&self) -> Seed;
}

/// Seeds from the wall clock: nanoseconds since the UNIX epoch, truncated
/// to 64 bits.
///
/// Instances created within the same clock tick receive the same seed.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl SeedSource for SystemClock {
    fn seed(&self) -> Seed {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as Seed)
            .unwrap_or_default()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FixedSeed(pub Seed);

impl SeedSource for FixedSeed {
    fn seed(&self) -> Seed {
        self.0
    }
}

impl<S: SeedSource + ?Sized> SeedSource for &S {
    fn seed(&self) -> Seed {
        (**self).seed()
    }
}

use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A source of die faces.
///
/// Every [`rand::Rng`] is a `Roller`; each face is drawn uniformly from
/// `1..=sides`.
pub trait Roller {
    /// Rolls a single die.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    /// Rolls `num` dice lazily, one draw per face.
    fn roll_many(&mut self, num: UInt, sides: NonZeroUInt) -> impl Iterator<Item = UInt> + '_
    where
        Self: Sized,
    {
        (0..num).map(move |_| self.roll(sides))
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        Uniform::new_inclusive(1, sides.get()).sample(self)
    }

    fn roll_many(&mut self, num: UInt, sides: NonZeroUInt) -> impl Iterator<Item = UInt> + '_ {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num as usize)
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedRoller;

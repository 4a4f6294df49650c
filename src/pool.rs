use crate::common::{Int, NonZeroUInt, Total, UInt, D6};
use crate::error::{ParseDiceError, RollError};
use std::fmt;

/// `num` dice with `sides` faces each, written `NdS`.
///
/// The default pool is a single six-sided die.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DicePool {
    pub num: UInt,
    pub sides: NonZeroUInt,
}

impl DicePool {
    pub const fn new(num: UInt, sides: NonZeroUInt) -> Self {
        Self { num, sides }
    }

    /// A single die.
    pub const fn d(sides: NonZeroUInt) -> Self {
        Self::new(1, sides)
    }

    /// Smallest possible total.
    pub const fn min(&self) -> Total {
        self.num as Total
    }

    /// Largest possible total.
    pub const fn max(&self) -> Total {
        self.num as Total * self.sides.get() as Total
    }
}

impl Default for DicePool {
    fn default() -> Self {
        Self::d(D6)
    }
}

impl TryFrom<(Int, Int)> for DicePool {
    type Error = RollError;

    fn try_from((num, sides): (Int, Int)) -> Result<Self, Self::Error> {
        let sides = UInt::try_from(sides)
            .ok()
            .and_then(NonZeroUInt::new)
            .ok_or(RollError::InvalidSides(sides))?;
        let num = UInt::try_from(num).map_err(|_| RollError::NegativeCount(num))?;
        Ok(Self::new(num, sides))
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num, self.sides)
    }
}

impl std::str::FromStr for DicePool {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (num, sides) = s
            .split_once(|c: char| c == 'd' || c == 'D')
            .ok_or(ParseDiceError::NoDelimiter)?;
        let num = if num.is_empty() {
            1
        } else {
            num.parse().map_err(ParseDiceError::InvalidNum)?
        };
        let sides = sides.parse().map_err(ParseDiceError::InvalidSides)?;
        Ok(Self::new(num, sides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(num: UInt, sides: UInt) -> DicePool {
        DicePool::new(num, NonZeroUInt::new(sides).unwrap())
    }

    #[test]
    fn test_pool_from_str() {
        assert_eq!("1d20".parse::<DicePool>().unwrap(), pool(1, 20));
        assert_eq!("d20".parse::<DicePool>().unwrap(), pool(1, 20));
        assert_eq!("14d4".parse::<DicePool>().unwrap(), pool(14, 4));
        assert_eq!(" 3D8\n".parse::<DicePool>().unwrap(), pool(3, 8));
        assert_eq!("0d6".parse::<DicePool>().unwrap(), pool(0, 6));
        assert_eq!("1".parse::<DicePool>(), Err(ParseDiceError::NoDelimiter));
        assert_eq!(
            "hd2".parse::<DicePool>(),
            Err(ParseDiceError::InvalidNum("h".parse::<UInt>().unwrap_err()))
        );
        assert_eq!(
            "-1d6".parse::<DicePool>(),
            Err(ParseDiceError::InvalidNum("-1".parse::<UInt>().unwrap_err()))
        );
        assert_eq!(
            "2dx".parse::<DicePool>(),
            Err(ParseDiceError::InvalidSides("x".parse::<UInt>().unwrap_err()))
        );
        assert!(matches!(
            "2d0".parse::<DicePool>(),
            Err(ParseDiceError::InvalidSides(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let p = pool(2, 6);
        assert_eq!(p.to_string(), "2d6");
        assert_eq!(p.to_string().parse::<DicePool>().unwrap(), p);
    }

    #[test]
    fn test_default_is_one_d6() {
        assert_eq!(DicePool::default(), pool(1, 6));
        assert_eq!(DicePool::default().to_string(), "1d6");
    }

    #[test]
    fn test_bounds() {
        let p = pool(3, 8);
        assert_eq!((p.min(), p.max()), (3, 24));
        assert_eq!((pool(0, 6).min(), pool(0, 6).max()), (0, 0));
    }

    #[test]
    fn test_bounds_of_largest_pool() {
        let largest = pool(UInt::MAX, UInt::MAX);
        assert_eq!(largest.min(), UInt::MAX as Total);
        assert_eq!(largest.max(), 18_446_744_065_119_617_025);
        assert_eq!(
            "4294967295d4294967295".parse::<DicePool>().unwrap().max(),
            largest.max()
        );
    }

    #[test]
    fn test_try_from_ints() {
        assert_eq!(DicePool::try_from((2, 6)), Ok(pool(2, 6)));
        assert_eq!(DicePool::try_from((0, 1)), Ok(pool(0, 1)));
        assert_eq!(DicePool::try_from((-1, 6)), Err(RollError::NegativeCount(-1)));
        assert_eq!(DicePool::try_from((1, 0)), Err(RollError::InvalidSides(0)));
        assert_eq!(DicePool::try_from((1, -4)), Err(RollError::InvalidSides(-4)));
        // sides are checked first
        assert_eq!(DicePool::try_from((-1, 0)), Err(RollError::InvalidSides(0)));
    }
}

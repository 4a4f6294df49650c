use std::num::NonZeroU32;

/// Signed integer accepted at the validating edge of the API.
pub type Int = i32;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// Sum of a roll. `UInt::MAX` dice of `UInt::MAX` sides still fit.
pub type Total = u64;

pub type Seed = u64;

pub(crate) const D6: NonZeroUInt = match NonZeroUInt::new(6) {
    Some(x) => x,
    None => unreachable!(),
};

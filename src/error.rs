use crate::common::Int;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RollError {
    #[error("cannot roll a negative number of dice: {0}")]
    NegativeCount(Int),
    #[error("dice must have at least one side, got {0}")]
    InvalidSides(Int),
    #[error("{0}")]
    Parse(#[from] ParseDiceError),
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDiceError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("invalid number of dice: {0}")]
    InvalidNum(std::num::ParseIntError),
    #[error("invalid number of sides: {0}")]
    InvalidSides(std::num::ParseIntError),
}

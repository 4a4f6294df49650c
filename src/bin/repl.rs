use seeded_dice::{
    Dice, DicePool, FixedSeed, ParseDiceError, SeedSource, SystemClock, Total, UInt,
};
use std::env::VarError;
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use tracing_subscriber::EnvFilter;

const SEED_VAR: &str = "DICE_SEED";

/// Largest pool the repl will roll.
const MAX_DICE: UInt = 100_000;

/// Pools up to this size print every face as well as the total.
const MAX_LISTED_FACES: UInt = 20;

#[derive(thiserror::Error, Debug, PartialEq)]
enum ReplError {
    #[error("invalid DICE_SEED {value:?}: {source}")]
    InvalidSeed { value: String, source: ParseIntError },
    #[error("DICE_SEED is not valid unicode")]
    SeedNotUnicode,
    #[error("refusing to roll {0} dice, the limit is {}", MAX_DICE)]
    TooManyDice(UInt),
    #[error("{0}")]
    Parse(#[from] ParseDiceError),
}

/// `var` is the result of looking up [`SEED_VAR`]; unset means the clock.
fn seed_source(var: Result<String, VarError>) -> Result<Box<dyn SeedSource>, ReplError> {
    match var {
        Ok(value) => match value.trim().parse() {
            Ok(seed) => Ok(Box::new(FixedSeed(seed))),
            Err(source) => Err(ReplError::InvalidSeed { value, source }),
        },
        Err(VarError::NotPresent) => Ok(Box::new(SystemClock)),
        Err(VarError::NotUnicode(_)) => Err(ReplError::SeedNotUnicode),
    }
}

fn describe_roll(dice: &mut Dice, line: &str) -> Result<String, ReplError> {
    let pool: DicePool = line.parse()?;
    if pool.num > MAX_DICE {
        return Err(ReplError::TooManyDice(pool.num));
    }
    if pool.num <= MAX_LISTED_FACES {
        let faces = dice.roll_each(pool);
        let total: Total = faces.iter().map(|&x| Total::from(x)).sum();
        Ok(format!("{} = {} {:?}", pool, total, faces))
    } else {
        Ok(format!("{} = {}", pool, dice.roll_pool(pool)))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let seed = seed_source(std::env::var(SEED_VAR))?.seed();
    tracing::info!(seed, "starting dice repl");
    let mut dice = Dice::with_seed(seed);

    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match describe_roll(&mut dice, &line) {
                Ok(out) => println!("{}", out),
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

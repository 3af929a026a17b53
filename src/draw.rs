use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::errors::GenerationError;
use crate::types::{DrawNumbers, NUMBER_MAX, NUMBER_MIN, NUMBERS_PER_DRAW};

/// Where the service gets its draws from.
pub trait DrawSource: Send + Sync {
    fn next_draw(&self) -> Result<DrawNumbers, GenerationError>;
}

/// Draws seeded from the operating system's randomness source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsDrawSource;

impl DrawSource for OsDrawSource {
    fn next_draw(&self) -> Result<DrawNumbers, GenerationError> {
        generate_draw()
    }
}

pub fn generate_draw() -> Result<DrawNumbers, GenerationError> {
    let mut rng = StdRng::from_rng(OsRng)?;
    Ok(draw_numbers(&mut rng))
}

/// Picks `NUMBERS_PER_DRAW` distinct numbers without replacement, so every
/// combination is equally likely.
pub fn draw_numbers<R: Rng + ?Sized>(rng: &mut R) -> DrawNumbers {
    let pool = usize::from(NUMBER_MAX - NUMBER_MIN + 1);
    let mut picked = [0u8; NUMBERS_PER_DRAW];
    for (slot, index) in picked
        .iter_mut()
        .zip(rand::seq::index::sample(rng, pool, NUMBERS_PER_DRAW))
    {
        *slot = NUMBER_MIN + index as u8;
    }
    picked.sort_unstable();

    match DrawNumbers::new(&picked) {
        Ok(numbers) => numbers,
        Err(err) => unreachable!("sampled draw broke its invariant: {err}"),
    }
}

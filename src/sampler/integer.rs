use std::fmt::Debug;
use std::num::NonZeroU32;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::ProbabilityFunction;
use crate::error::ConfigurationError;
use crate::Value;

/// Largest magnitude below which every integer is an exact [`Value`].
pub const MAX_EXACT_FACE: i64 = 1 << 53;

/// Uniform integer in `[base, base + sides)`, like a polyhedral die whose
/// lowest face is `base`.
///
/// Every face must lie within `±MAX_EXACT_FACE`. The infallible constructors
/// take an `i32` base, which always satisfies this; `try_*` accept any `i64`
/// and check it.
#[derive(Clone, Debug)]
pub struct IntegerRange<G = StdRng>
where
    G: RngCore + Clone + Debug,
{
    base: i64,
    sides: NonZeroU32,
    rng: G,
}

impl IntegerRange {
    #[must_use]
    pub fn new(base: i32, sides: NonZeroU32) -> Self {
        Self::with_rng(base, sides, StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(base: i32, sides: NonZeroU32, seed: u64) -> Self {
        Self::with_rng(base, sides, StdRng::seed_from_u64(seed))
    }

    pub fn try_new(base: i64, sides: i64) -> Result<Self, ConfigurationError> {
        Self::try_with_rng(base, sides, StdRng::from_entropy())
    }
}

impl<G> IntegerRange<G>
where
    G: RngCore + Clone + Debug,
{
    #[must_use]
    pub fn with_rng(base: i32, sides: NonZeroU32, rng: G) -> Self {
        Self {
            base: i64::from(base),
            sides,
            rng,
        }
    }

    pub fn try_with_rng(base: i64, sides: i64, rng: G) -> Result<Self, ConfigurationError> {
        let sides = u32::try_from(sides)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(ConfigurationError::Sides(sides))?;
        let top = i128::from(base) + i128::from(sides.get()) - 1;
        let limit = i128::from(MAX_EXACT_FACE);
        if i128::from(base) < -limit || top > limit {
            return Err(ConfigurationError::Base {
                base,
                sides: sides.get(),
            });
        }
        Ok(Self { base, sides, rng })
    }

    #[must_use]
    pub fn base(&self) -> i64 {
        self.base
    }

    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides.get()
    }
}

impl<G> ProbabilityFunction for IntegerRange<G>
where
    G: RngCore + Clone + Debug,
{
    fn draw(&mut self) -> Value {
        let offset = self.rng.gen_range(0..self.sides.get());
        // faces are within ±2^53, so the cast is exact
        (self.base + i64::from(offset)) as Value
    }

    fn name(&self) -> String {
        format!("d{}", self.sides)
    }
}

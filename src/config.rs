use bon::Builder;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{ConfigurationError, Level};
use crate::sampler::{IntegerRange, Sampler};
use crate::{Series, Throw, Transform, Value};

/// Everything needed to build a series of integer dice. Each level takes at
/// most one of its add / mult adjustments.
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct RollConfig {
    #[builder(default = 1)]
    pub base: i64,
    #[builder(default = 6)]
    pub sides: i64,
    #[builder(default = 1)]
    pub dice: i64,
    #[builder(default = 1)]
    pub rolls: i64,
    pub add: Option<Value>,
    pub mult: Option<Value>,
    pub add_total: Option<Value>,
    pub mult_total: Option<Value>,
    pub add_grand_total: Option<Value>,
    pub mult_grand_total: Option<Value>,
    pub seed: Option<u64>,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RollConfig {
    /// Validates every field, then builds and rolls the series.
    pub fn series(&self) -> Result<Series<IntegerRange>, ConfigurationError> {
        let die_transform = Transform::select(self.add, self.mult, Level::Die)?;
        let throw_transform = Transform::select(self.add_total, self.mult_total, Level::Throw)?;
        let series_transform =
            Transform::select(self.add_grand_total, self.mult_grand_total, Level::Series)?;
        let dice = ConfigurationError::check_count("dice", self.dice)?;
        let rolls = ConfigurationError::check_count("rolls", self.rolls)?;

        let rng = self
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let range = IntegerRange::try_with_rng(self.base, self.sides, rng)?;

        debug!(
            base = self.base,
            sides = self.sides,
            dice,
            rolls,
            seeded = self.seed.is_some(),
            "building series"
        );

        let sampler = Sampler::from_function(range, die_transform);
        let throw = Throw::new(sampler)
            .count(dice)
            .transform(throw_transform)
            .roll()?;
        Series::new(throw)
            .count(rolls)
            .transform(series_transform)
            .roll()
    }
}

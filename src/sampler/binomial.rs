use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::ProbabilityFunction;
use crate::error::ConfigurationError;
use crate::Value;

/// Number of successes in `trials` independent draws that each succeed with
/// `probability`.
#[derive(Clone, Debug)]
pub struct Binomial<G = StdRng>
where
    G: RngCore + Clone + Debug,
{
    trials: u32,
    probability: f64,
    rng: G,
}

impl Binomial {
    pub fn try_new(trials: u32, probability: f64) -> Result<Self, ConfigurationError> {
        Self::try_with_rng(trials, probability, StdRng::from_entropy())
    }
}

impl<G> Binomial<G>
where
    G: RngCore + Clone + Debug,
{
    pub fn try_with_rng(trials: u32, probability: f64, rng: G) -> Result<Self, ConfigurationError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigurationError::Probability(probability));
        }
        Ok(Self {
            trials,
            probability,
            rng,
        })
    }

    #[must_use]
    pub fn trials(&self) -> u32 {
        self.trials
    }

    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl<G> ProbabilityFunction for Binomial<G>
where
    G: RngCore + Clone + Debug,
{
    fn draw(&mut self) -> Value {
        let p = self.probability;
        let rng = &mut self.rng;
        Value::from((0..self.trials).filter(|_| rng.gen_bool(p)).count() as u32)
    }

    fn name(&self) -> String {
        "binomial".to_owned()
    }
}

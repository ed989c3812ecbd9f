use std::fmt::{self, Display};

use bon::Builder;
use itertools::Itertools;
use tracing::debug;

use crate::error::ConfigurationError;
use crate::sampler::{ProbabilityFunction, Sampler};
use crate::table::Table;
use crate::{value, Transform, Value};

/// One throw of `count` dice cut from the same sampler.
///
/// ```
/// use hackdice::{Sampler, Throw, Transform};
///
/// let zero = Sampler::try_integer(0, 1, Transform::Identity)?;
/// let throw = Throw::new(zero).count(2).transform(Transform::Add(10.0)).roll()?;
/// assert_eq!(throw.rolls(), &[0.0, 0.0]);
/// assert_eq!(throw.total(), 10.0);
/// # Ok::<(), hackdice::ConfigurationError>(())
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(start_fn(name = "new"), finish_fn(vis = ""))]
pub struct Throw<P>
where
    P: ProbabilityFunction,
{
    #[builder(start_fn)]
    sampler: Sampler<P>,
    #[builder(default = 1)]
    count: usize,
    #[builder(default)]
    transform: Transform,
    #[builder(skip)]
    rolls: Vec<Value>,
    #[builder(skip)]
    total: Value,
}

impl<P, S> ThrowBuilder<P, S>
where
    P: ProbabilityFunction,
    S: throw_builder::IsComplete,
{
    /// Validates the throw and performs its first roll.
    pub fn roll(self) -> Result<Throw<P>, ConfigurationError> {
        let mut throw = self.build();
        if throw.count < 1 {
            return Err(ConfigurationError::Count {
                what: "dice",
                value: 0,
            });
        }
        throw.roll();
        Ok(throw)
    }
}

impl<P> Throw<P>
where
    P: ProbabilityFunction,
{
    /// Samples every die in order and returns the rolls with their total.
    pub fn roll(&mut self) -> (&[Value], Value) {
        let rolls: Vec<Value> = (0..self.count).map(|_| self.sampler.sample()).collect();
        let total = self.transform.apply(value::sum(&rolls));

        self.rolls = rolls;
        self.total = total;
        debug!(die = %self.sampler.name(), count = self.count, total, "throw");

        (&self.rolls, self.total)
    }

    #[must_use]
    pub fn rolls(&self) -> &[Value] {
        &self.rolls
    }

    #[must_use]
    pub fn total(&self) -> Value {
        self.total
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn sampler(&self) -> &Sampler<P> {
        &self.sampler
    }

    #[must_use]
    pub fn headers(&self, with_total: bool) -> Vec<String> {
        let name = self.sampler.name();
        let mut headers = (0..self.count).map(|i| format!("{name}_{i}")).collect_vec();
        if with_total {
            headers.push(format!("{}_*_{name}_roll_total", self.count));
        }
        headers
    }

    #[must_use]
    pub fn rolls_with_total(&self) -> Vec<Value> {
        let mut row = self.rolls.clone();
        row.push(self.total);
        row
    }

    #[must_use]
    pub fn table(&self, with_total: bool) -> Table {
        let row = if with_total {
            self.rolls_with_total()
        } else {
            self.rolls.clone()
        };
        Table::new(self.headers(with_total), vec![row])
    }
}

impl<P> Display for Throw<P>
where
    P: ProbabilityFunction,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.table(true), f)
    }
}

use std::fmt::{self, Display};

use bon::Builder;
use tracing::debug;

use crate::error::ConfigurationError;
use crate::sampler::ProbabilityFunction;
use crate::table::Table;
use crate::{Throw, Transform, Value};

pub const GRAND_TOTAL_HEADER: &str = "grand_total";

/// A throw repeated `count` times, each result kept as a row.
#[derive(Builder, Clone, Debug)]
#[builder(start_fn(name = "new"), finish_fn(vis = ""))]
pub struct Series<P>
where
    P: ProbabilityFunction,
{
    #[builder(start_fn)]
    throw: Throw<P>,
    #[builder(default = 1)]
    count: usize,
    #[builder(default)]
    transform: Transform,
    #[builder(skip)]
    rolls: Vec<Vec<Value>>,
    #[builder(skip)]
    totals: Vec<Value>,
    #[builder(skip)]
    grand_total: Value,
}

impl<P, S> SeriesBuilder<P, S>
where
    P: ProbabilityFunction,
    S: series_builder::IsComplete,
{
    /// Validates the series and performs its first round of throws.
    pub fn roll(self) -> Result<Series<P>, ConfigurationError> {
        let mut series = self.build();
        if series.count < 1 {
            return Err(ConfigurationError::Count {
                what: "rolls",
                value: 0,
            });
        }
        series.roll_series();
        Ok(series)
    }
}

impl<P> Series<P>
where
    P: ProbabilityFunction,
{
    pub fn roll_series(&mut self) -> (&[Vec<Value>], &[Value], Value) {
        let mut rolls = Vec::new();
        let mut totals = Vec::new();
        let mut grand_total = 0.0;

        for _ in 0..self.count {
            let (row, total) = self.throw.roll();
            rolls.push(row.to_vec());
            totals.push(total);
            grand_total += total;
        }

        self.rolls = rolls;
        self.totals = totals;
        self.grand_total = self.transform.apply(grand_total);
        debug!(
            count = self.count,
            grand_total = self.grand_total,
            "series"
        );

        (&self.rolls, &self.totals, self.grand_total)
    }

    #[must_use]
    pub fn rolls(&self) -> &[Vec<Value>] {
        &self.rolls
    }

    /// Per-throw totals, each already carrying the throw transform.
    #[must_use]
    pub fn totals(&self) -> &[Value] {
        &self.totals
    }

    #[must_use]
    pub fn grand_total(&self) -> Value {
        self.grand_total
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
    pub fn throw(&self) -> &Throw<P> {
        &self.throw
    }

    #[must_use]
    pub fn headers(&self, with_totals: bool) -> Vec<String> {
        let mut headers = self.throw.headers(with_totals);
        if with_totals {
            headers.push(GRAND_TOTAL_HEADER.to_owned());
        }
        headers
    }

    /// Die values per throw, optionally followed by the throw total and the
    /// grand total.
    #[must_use]
    pub fn rows(&self, with_totals: bool) -> Vec<Vec<Value>> {
        self.rolls
            .iter()
            .zip(&self.totals)
            .map(|(rolls, &total)| {
                let mut row = rolls.clone();
                if with_totals {
                    row.push(total);
                    row.push(self.grand_total);
                }
                row
            })
            .collect()
    }

    #[must_use]
    pub fn table(&self, with_totals: bool) -> Table {
        Table::new(self.headers(with_totals), self.rows(with_totals))
    }
}

impl<P> Display for Series<P>
where
    P: ProbabilityFunction,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.table(true), f)
    }
}

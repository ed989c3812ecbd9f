mod binomial;
mod function;
mod integer;

use std::fmt::{self, Debug, Display};
use std::num::NonZeroU32;

pub use binomial::Binomial;
use dyn_clone::DynClone;
pub use function::FnSampler;
pub use integer::{IntegerRange, MAX_EXACT_FACE};
use tracing::trace;

use crate::error::ConfigurationError;
use crate::value::Numeric;
use crate::{Transform, Value};

pub type BoxedFunction = Box<dyn ProbabilityFunction>;

/// A source of raw draws: one call, one independent sample.
pub trait ProbabilityFunction: Debug + DynClone {
    fn draw(&mut self) -> Value;

    /// Label used when the caller does not name the sampler.
    fn name(&self) -> String;

    fn boxed(self) -> BoxedFunction
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl Clone for BoxedFunction {
    fn clone(&self) -> Self {
        dyn_clone::clone_box(&**self)
    }
}

impl ProbabilityFunction for BoxedFunction {
    fn draw(&mut self) -> Value {
        (**self).draw()
    }

    fn name(&self) -> String {
        (**self).name()
    }

    fn boxed(self) -> BoxedFunction {
        self
    }
}

/// A named die: draws from its function and applies its own transform to
/// every sample. The last sample is always available through [`Sampler::value`].
#[derive(Clone, Debug)]
pub struct Sampler<P>
where
    P: ProbabilityFunction,
{
    function: P,
    name: String,
    transform: Transform,
    value: Value,
}

impl<P> Sampler<P>
where
    P: ProbabilityFunction,
{
    #[must_use]
    pub fn new<N>(function: P, name: N, transform: Transform) -> Self
    where
        N: Into<String>,
    {
        let mut sampler = Self {
            function,
            name: name.into(),
            transform,
            value: 0.0,
        };
        sampler.sample();
        sampler
    }

    #[must_use]
    pub fn from_function(function: P, transform: Transform) -> Self {
        let name = function.name();
        Self::new(function, name, transform)
    }

    pub fn sample(&mut self) -> Value {
        let raw = self.function.draw();
        self.value = self.transform.apply(raw);
        trace!(name = %self.name, raw, value = self.value, "sample");
        self.value
    }

    #[must_use]
    pub fn value(&self) -> Value {
        self.value
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn function(&self) -> &P {
        &self.function
    }

    /// Erases the function type, keeping the current value.
    #[must_use]
    pub fn boxed(self) -> Sampler<BoxedFunction>
    where
        P: 'static,
    {
        Sampler {
            function: self.function.boxed(),
            name: self.name,
            transform: self.transform,
            value: self.value,
        }
    }
}

impl Sampler<IntegerRange> {
    #[must_use]
    pub fn integer(base: i32, sides: NonZeroU32, transform: Transform) -> Self {
        Self::from_function(IntegerRange::new(base, sides), transform)
    }

    pub fn try_integer(
        base: i64,
        sides: i64,
        transform: Transform,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::from_function(
            IntegerRange::try_new(base, sides)?,
            transform,
        ))
    }
}

impl Sampler<Binomial> {
    pub fn binomial(
        trials: u32,
        probability: f64,
        transform: Transform,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::from_function(
            Binomial::try_new(trials, probability)?,
            transform,
        ))
    }
}

impl<F, T> Sampler<FnSampler<F, T>>
where
    F: FnMut() -> T + Clone,
    T: Numeric,
{
    #[must_use]
    pub fn from_fn<N>(name: N, f: F, transform: Transform) -> Self
    where
        N: Into<String>,
    {
        Self::new(FnSampler::new(f), name, transform)
    }
}

impl<P> Display for Sampler<P>
where
    P: ProbabilityFunction,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

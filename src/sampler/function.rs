use std::fmt::{self, Debug};
use std::marker::PhantomData;

use super::ProbabilityFunction;
use crate::value::Numeric;
use crate::Value;

/// Adapts a closure into a probability function. Arguments the closure needs
/// are captured by it.
#[derive(Clone)]
pub struct FnSampler<F, T> {
    f: F,
    _output: PhantomData<fn() -> T>,
}

impl<F, T> FnSampler<F, T>
where
    F: FnMut() -> T + Clone,
    T: Numeric,
{
    #[must_use]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _output: PhantomData,
        }
    }
}

impl<F, T> Debug for FnSampler<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSampler").finish_non_exhaustive()
    }
}

impl<F, T> ProbabilityFunction for FnSampler<F, T>
where
    F: FnMut() -> T + Clone,
    T: Numeric,
{
    fn draw(&mut self) -> Value {
        (self.f)().to_value()
    }

    fn name(&self) -> String {
        "fn".to_owned()
    }
}

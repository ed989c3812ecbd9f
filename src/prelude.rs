pub use crate::defs::*;
pub use crate::sampler::{Binomial, BoxedFunction, FnSampler, IntegerRange, MAX_EXACT_FACE};
pub use crate::{
    ConfigurationError, ProbabilityFunction, RollConfig, Sampler, Series, Table, Throw, Transform,
    Value,
};

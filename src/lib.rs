pub mod cli;
mod config;
pub mod defs;
mod error;
pub mod prelude;
pub mod sampler;
mod series;
mod table;
mod throw;
mod transform;
mod value;

pub use config::RollConfig;
pub use error::{ConfigurationError, Error, Level, Result};
pub use sampler::{ProbabilityFunction, Sampler};
pub use series::{Series, GRAND_TOTAL_HEADER};
pub use table::{Table, DEFAULT_SHEET_NAME};
pub use throw::Throw;
pub use transform::Transform;
pub use value::{Numeric, Value};

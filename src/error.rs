use std::fmt;

use thiserror::Error;

/// Which aggregate a transform belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Die,
    Throw,
    Series,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("sides must be between 1 and 4294967295, got {0}")]
    Sides(i64),
    #[error("faces of a d{sides} starting at {base} must lie within ±9007199254740992")]
    Base { base: i64, sides: u32 },
    #[error("{what} must be between 1 and 4294967295, got {value}")]
    Count { what: &'static str, value: i64 },
    #[error("add and multiply cannot both be applied to the {level} value")]
    ConflictingTransforms { level: Level },
    #[error("probability must lie in [0, 1], got {0}")]
    Probability(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("xlsx export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Process status for the command line: 2 for bad input, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Configuration(_) => 2,
            Error::Io(_) | Error::Csv(_) | Error::Xlsx(_) => 1,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Die => "per-die",
            Level::Throw => "throw total",
            Level::Series => "grand total",
        })
    }
}

impl ConfigurationError {
    /// Checks a repetition count taken from user input. Counts are capped at
    /// `u32::MAX`.
    pub fn check_count(what: &'static str, value: i64) -> core::result::Result<usize, Self> {
        u32::try_from(value)
            .ok()
            .filter(|&n| n >= 1)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(ConfigurationError::Count { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_accepts_positive() {
        assert_eq!(ConfigurationError::check_count("dice", 3).unwrap(), 3);
    }

    #[test]
    fn count_rejects_out_of_range() {
        for value in [0, -1, i64::from(u32::MAX) + 1, i64::MAX] {
            let err = ConfigurationError::check_count("rolls", value).unwrap_err();
            assert_eq!(
                err,
                ConfigurationError::Count {
                    what: "rolls",
                    value
                }
            );
        }
    }

    #[test]
    fn messages_name_the_level() {
        let err = ConfigurationError::ConflictingTransforms {
            level: Level::Series,
        };
        assert_eq!(
            err.to_string(),
            "add and multiply cannot both be applied to the grand total value"
        );
    }
}

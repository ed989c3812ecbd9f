use std::fmt;

use crate::error::{ConfigurationError, Level};
use crate::Value;

/// Linear adjustment applied once to an aggregate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Transform {
    #[default]
    Identity,
    Add(Value),
    Multiply(Value),
}

impl Transform {
    #[must_use]
    pub fn apply(&self, value: Value) -> Value {
        match *self {
            Transform::Identity => value,
            Transform::Add(k) => value + k,
            Transform::Multiply(k) => value * k,
        }
    }

    /// Picks the transform for one level from an optional addend and factor.
    pub fn select(
        add: Option<Value>,
        mult: Option<Value>,
        level: Level,
    ) -> Result<Self, ConfigurationError> {
        match (add, mult) {
            (Some(_), Some(_)) => Err(ConfigurationError::ConflictingTransforms { level }),
            (Some(k), None) => Ok(Transform::Add(k)),
            (None, Some(k)) => Ok(Transform::Multiply(k)),
            (None, None) => Ok(Transform::Identity),
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        matches!(self, Transform::Identity)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Identity => f.write_str("x"),
            Transform::Add(k) => write!(f, "x + {k}"),
            Transform::Multiply(k) => write!(f, "x * {k}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply() {
        assert_eq!(Transform::Identity.apply(4.0), 4.0);
        assert_eq!(Transform::Add(-10.0).apply(4.0), -6.0);
        assert_eq!(Transform::Multiply(0.5).apply(4.0), 2.0);
    }

    #[test]
    fn select_single() {
        assert_eq!(
            Transform::select(Some(2.0), None, Level::Die),
            Ok(Transform::Add(2.0))
        );
        assert_eq!(
            Transform::select(None, Some(3.0), Level::Throw),
            Ok(Transform::Multiply(3.0))
        );
        assert_eq!(
            Transform::select(None, None, Level::Series),
            Ok(Transform::Identity)
        );
    }

    #[test]
    fn select_rejects_both() {
        assert_eq!(
            Transform::select(Some(1.0), Some(2.0), Level::Throw),
            Err(ConfigurationError::ConflictingTransforms {
                level: Level::Throw
            })
        );
    }
}

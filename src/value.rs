use std::fmt::Debug;

/// Every sample and aggregate is carried as a float, so integer dice, scaled
/// totals and arbitrary distributions share one column type.
pub type Value = f64;

pub trait Numeric: Copy + Debug {
    fn to_value(self) -> Value;
}

macro_rules! impl_numeric_from {
    ($typ:ty) => {
        impl $crate::value::Numeric for $typ {
            fn to_value(self) -> Value {
                Value::from(self)
            }
        }
    };
}

macro_rules! impl_numeric_trunc {
    ($typ:ty) => {
        impl $crate::value::Numeric for $typ {
            fn to_value(self) -> Value {
                self as Value
            }
        }
    };
}

impl Numeric for bool {
    fn to_value(self) -> Value {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

impl_numeric_from!(u8);
impl_numeric_from!(u16);
impl_numeric_from!(u32);
impl_numeric_trunc!(u64);
impl_numeric_trunc!(usize);
impl_numeric_from!(i8);
impl_numeric_from!(i16);
impl_numeric_from!(i32);
impl_numeric_trunc!(i64);
impl_numeric_trunc!(isize);
impl_numeric_from!(f32);
impl_numeric_from!(f64);

/// Sums in order, so integer-valued samples add up exactly.
pub(crate) fn sum(values: &[Value]) -> Value {
    values.iter().fold(0.0, |acc, x| acc + x)
}

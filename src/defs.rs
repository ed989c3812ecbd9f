use std::num::NonZeroU32;

use crate::sampler::Sampler;
use crate::Transform;

macro_rules! standard_die {
    ($name:ident, $sides:literal) => {
        #[must_use]
        pub fn $name() -> Sampler<$crate::sampler::IntegerRange> {
            const SIDES: NonZeroU32 = match NonZeroU32::new($sides) {
                Some(sides) => sides,
                None => panic!("a standard die has sides"),
            };
            Sampler::integer(1, SIDES, Transform::Identity)
        }
    };
}

standard_die!(d2, 2);
standard_die!(d3, 3);
standard_die!(d4, 4);
standard_die!(d6, 6);
standard_die!(d8, 8);
standard_die!(d10, 10);
standard_die!(d12, 12);
standard_die!(d20, 20);
standard_die!(d100, 100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_bounded() {
        for (mut die, sides) in [(d4(), 4.0), (d6(), 6.0), (d20(), 20.0), (d100(), 100.0)] {
            assert_eq!(die.name(), format!("d{sides}"));
            for _ in 0..200 {
                let v = die.sample();
                assert!((1.0..=sides).contains(&v));
            }
        }
    }
}

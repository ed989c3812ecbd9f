//! Property tests for the aggregation laws of samplers, throws and series.

use std::num::NonZeroU32;

use hackdice::prelude::*;
use proptest::prelude::*;

fn seeded(base: i32, sides: u32, seed: u64, transform: Transform) -> Sampler<IntegerRange> {
    let sides = NonZeroU32::new(sides).unwrap();
    Sampler::from_function(IntegerRange::seeded(base, sides, seed), transform)
}

fn transform_strategy() -> impl Strategy<Value = Transform> {
    prop_oneof![
        Just(Transform::Identity),
        (-100i32..100).prop_map(|k| Transform::Add(f64::from(k))),
        (-10i32..10).prop_map(|k| Transform::Multiply(f64::from(k))),
    ]
}

proptest! {
    // 1. Integer samples stay in [base, base + sides)
    #[test]
    fn integer_samples_in_range(
        base in -1_000i32..1_000,
        sides in 1u32..500,
        seed in any::<u64>(),
    ) {
        let mut sampler = seeded(base, sides, seed, Transform::Identity);
        let lo = f64::from(base);
        let hi = lo + f64::from(sides);
        for _ in 0..50 {
            let v = sampler.sample();
            prop_assert!(lo <= v && v < hi, "v={v} base={base} sides={sides}");
            prop_assert_eq!(v.fract(), 0.0);
        }
    }

    // 2. A one-sided die always shows its base
    #[test]
    fn one_side_is_constant(base in any::<i32>(), seed in any::<u64>()) {
        let mut sampler = seeded(base, 1, seed, Transform::Identity);
        for _ in 0..10 {
            prop_assert_eq!(sampler.sample(), f64::from(base));
        }
    }

    // 3. Without a transform the total is the exact sum
    #[test]
    fn sum_law(sides in 1u32..100, dice in 1usize..20, seed in any::<u64>()) {
        let mut throw = Throw::new(seeded(1, sides, seed, Transform::Identity))
            .count(dice)
            .roll()
            .unwrap();
        for _ in 0..5 {
            let (rolls, total) = throw.roll();
            prop_assert_eq!(rolls.len(), dice);
            prop_assert_eq!(total, rolls.iter().sum::<f64>());
        }
    }

    // 4. The throw transform sees the raw sum exactly once
    #[test]
    fn transform_law(
        sides in 1u32..50,
        dice in 1usize..10,
        seed in any::<u64>(),
        transform in transform_strategy(),
    ) {
        let throw = Throw::new(seeded(0, sides, seed, Transform::Identity))
            .count(dice)
            .transform(transform)
            .roll()
            .unwrap();
        let raw: f64 = throw.rolls().iter().sum();
        prop_assert_eq!(throw.total(), transform.apply(raw));
    }

    // 5. The grand total aggregates the transformed throw totals
    #[test]
    fn series_aggregation_law(
        sides in 1u32..20,
        dice in 1usize..6,
        rolls in 1usize..12,
        seed in any::<u64>(),
        throw_transform in transform_strategy(),
        series_transform in transform_strategy(),
    ) {
        let throw = Throw::new(seeded(1, sides, seed, Transform::Identity))
            .count(dice)
            .transform(throw_transform)
            .roll()
            .unwrap();
        let series = Series::new(throw)
            .count(rolls)
            .transform(series_transform)
            .roll()
            .unwrap();

        prop_assert_eq!(series.rolls().len(), rolls);
        prop_assert_eq!(series.totals().len(), rolls);
        for (row, total) in series.rolls().iter().zip(series.totals()) {
            prop_assert_eq!(row.len(), dice);
            prop_assert_eq!(*total, throw_transform.apply(row.iter().sum::<f64>()));
        }
        let sum: f64 = series.totals().iter().sum();
        prop_assert_eq!(series.grand_total(), series_transform.apply(sum));
    }

    // 6. Export width is the dice count, plus two with totals
    #[test]
    fn table_shape(dice in 1usize..10, rolls in 1usize..10, seed in any::<u64>()) {
        let throw = Throw::new(seeded(1, 6, seed, Transform::Identity))
            .count(dice)
            .roll()
            .unwrap();
        let series = Series::new(throw).count(rolls).roll().unwrap();

        let bare = series.table(false);
        prop_assert_eq!(bare.width(), dice);
        prop_assert!(bare.rows().iter().all(|row| row.len() == dice));

        let full = series.table(true);
        prop_assert_eq!(full.width(), dice + 2);
        prop_assert_eq!(full.len(), rolls);
        prop_assert!(full.rows().iter().all(|row| row.len() == dice + 2));
    }

    // 7. Accessors do not roll
    #[test]
    fn accessors_idempotent(dice in 1usize..8, seed in any::<u64>()) {
        let throw = Throw::new(seeded(1, 20, seed, Transform::Identity))
            .count(dice)
            .roll()
            .unwrap();
        let series = Series::new(throw).count(3).roll().unwrap();
        prop_assert_eq!(series.table(true), series.table(true));
        prop_assert_eq!(series.headers(true), series.headers(true));
        prop_assert_eq!(series.throw().sampler().value(), series.throw().sampler().value());
    }

    // 8. Any i64 base either stays in range or is refused up front
    #[test]
    fn wide_bases_in_range_or_refused(base in any::<i64>(), sides in 1i64..1_000) {
        match Sampler::try_integer(base, sides, Transform::Identity) {
            Ok(mut sampler) => {
                for _ in 0..20 {
                    let v = sampler.sample() as i64;
                    prop_assert!(base <= v && v < base + sides, "v={v} base={base}");
                }
            }
            Err(err) => {
                let is_base_err = matches!(err, ConfigurationError::Base { .. });
                prop_assert!(is_base_err);
                let top = i128::from(base) + i128::from(sides) - 1;
                prop_assert!(base < -MAX_EXACT_FACE || top > i128::from(MAX_EXACT_FACE));
            }
        }
    }
}

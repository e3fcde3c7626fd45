// Property tests for the decimal engine, square root and column statistics.
use decimal_stats::prelude::*;
use proptest::prelude::*;
use quickcheck::quickcheck;

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..12)
        .prop_map(|(mantissa, scale)| format!("{}e-{}", mantissa, scale).parse().unwrap())
}

/// Values with up to 30 significant digits, wider than `precision_strategy`
fn wide_decimal_strategy() -> impl Strategy<Value = Decimal> {
    ("-?[1-9][0-9]{0,29}", 0u32..40)
        .prop_map(|(mantissa, scale)| format!("{}e-{}", mantissa, scale).parse().unwrap())
}

fn precision_strategy() -> impl Strategy<Value = Precision> {
    (2i64..20).prop_map(Precision::clamped)
}

fn column_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(wide_decimal_strategy(), 1..40)
}

fn aggregate(values: Vec<Decimal>) -> ColumnStatistics {
    aggregate_at(values, Precision::DEFAULT)
}

fn aggregate_at(values: Vec<Decimal>, precision: Precision) -> ColumnStatistics {
    ColumnAggregator::new(precision)
        .aggregate(&Column::new("1", values))
        .unwrap()
}

proptest! {
    #[test]
    fn median_and_mean_lie_between_min_and_max(
        values in column_strategy(),
        precision in precision_strategy(),
    ) {
        let stats = aggregate_at(values, precision);
        prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
        prop_assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn range_is_max_minus_min(values in column_strategy(), precision in precision_strategy()) {
        let stats = aggregate_at(values, precision);
        prop_assert_eq!(stats.range.clone(), (&stats.max - &stats.min).round(precision));
    }

    #[test]
    fn identical_values_have_zero_dispersion(
        value in wide_decimal_strategy(),
        n in 1usize..30,
        precision in precision_strategy(),
    ) {
        let stats = aggregate_at(vec![value.clone(); n], precision);
        prop_assert_eq!(&stats.mean, &value.round(precision));
        prop_assert!(stats.variance.is_zero());
        prop_assert!(stats.stddev.is_zero());
        prop_assert!(stats.range.is_zero());
    }

    #[test]
    fn single_value_has_zero_dispersion(
        value in wide_decimal_strategy(),
        precision in precision_strategy(),
    ) {
        let stats = aggregate_at(vec![value.clone()], precision);
        prop_assert_eq!(stats.count, 1);
        prop_assert_eq!(stats.median, value.round(precision));
        prop_assert!(stats.variance.is_zero());
        prop_assert!(stats.stddev.is_zero());
    }

    #[test]
    fn variance_and_stddev_are_non_negative(
        values in column_strategy(),
        precision in precision_strategy(),
    ) {
        let stats = aggregate_at(values, precision);
        prop_assert!(!stats.variance.is_negative());
        prop_assert!(!stats.stddev.is_negative());
    }

    #[test]
    fn sqrt_is_stable_under_rerounding(value in decimal_strategy(), digits in 2i64..120) {
        let precision = Precision::clamped(digits);
        let root = sqrt(&value, precision);
        prop_assert_eq!(root.round(precision), root);
    }

    #[test]
    fn sqrt_of_perfect_square_is_exact(root in 1u64..1_000_000_000, digits in 20i64..200) {
        let square = Decimal::from(root * root);
        prop_assert_eq!(sqrt(&square, Precision::clamped(digits)), Decimal::from(root));
    }

    #[test]
    fn literal_round_trips_through_text(value in decimal_strategy()) {
        let text = value.to_string();
        let parsed: Decimal = text.parse().unwrap();
        prop_assert_eq!(&parsed, &value);
        prop_assert_eq!(parsed.round(Precision::DEFAULT), value);
    }

    #[test]
    fn division_then_multiplication_is_close(
        a in decimal_strategy(),
        b in decimal_strategy().prop_filter("non-zero divisor", |b| !b.is_zero()),
    ) {
        let p = Precision::clamped(50);
        let quotient = a.div(&b, p).unwrap();
        let back = (&quotient * &b).round(Precision::clamped(30));
        prop_assert_eq!(back, a.round(Precision::clamped(30)));
    }
}

quickcheck! {
    fn sum_is_order_independent(values: Vec<i64>) -> bool {
        let forward: Decimal = values.iter().map(|v| Decimal::from(*v)).sum();
        let backward: Decimal = values.iter().rev().map(|v| Decimal::from(*v)).sum();
        forward == backward
    }

    fn statistics_ignore_row_order(values: Vec<i32>) -> bool {
        if values.is_empty() {
            return true;
        }
        let decimals: Vec<Decimal> = values.iter().map(|v| Decimal::from(i64::from(*v))).collect();
        let mut reversed = decimals.clone();
        reversed.reverse();
        aggregate(decimals) == aggregate(reversed)
    }
}

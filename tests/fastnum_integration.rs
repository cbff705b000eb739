use fastnum::decimal::D128;
use skala::{
    Invert, Nice, Scale, Ticks,
    scale::{Linear, Logarithmic},
};

fn close(actual: D128, expected: D128, tolerance: f64) -> bool {
    (actual - expected).abs() < D128::from(tolerance)
}

#[test]
fn test_linear_scale_with_decimal_domain_and_range() {
    let scale = Linear::<D128>::new((D128::from(0), D128::from(100)), (D128::from(0), D128::from(1)));

    let mapped = scale.apply(&D128::from(50));
    assert!(close(mapped, D128::from(0.5), 1e-10));

    let inverted = scale.invert(&D128::from(0.5));
    assert!(close(inverted, D128::from(50), 1e-10));
}

#[test]
fn test_linear_scale_decimal_endpoints() {
    let scale = Linear::<D128>::new((D128::from(0.1), D128::from(0.7)), (D128::from(-3), D128::from(12)));

    assert!(close(scale.apply(&D128::from(0.1)), D128::from(-3), 1e-20));
    assert!(close(scale.apply(&D128::from(0.7)), D128::from(12), 1e-20));
}

#[test]
fn test_linear_scale_decimal_nice() {
    let scale = Linear::<D128>::new((D128::from(0.13), D128::from(9.87)), (D128::from(0), D128::from(1))).nice(10);
    let (min, max) = scale.domain();

    assert!(close(*min, D128::from(0), 1e-10));
    assert!(close(*max, D128::from(10), 1e-10));
}

#[test]
fn test_linear_scale_decimal_ticks() {
    let scale = Linear::<D128>::new((D128::from(0), D128::from(10)), (D128::from(0), D128::from(1)));
    let ticks: Vec<D128> = scale.ticks(5).collect();

    assert_eq!(ticks.len(), 6);
    for (tick, expected) in ticks.iter().zip([0, 2, 4, 6, 8, 10]) {
        assert!(close(*tick, D128::from(expected), 1e-10));
    }
}

#[test]
fn test_logarithmic_scale_with_decimal() {
    let scale = Logarithmic::<D128>::with_base(
        D128::from(10),
        (D128::from(1), D128::from(100)),
        (D128::from(0), D128::from(1)),
    )
    .unwrap();

    // log10(10) is halfway between log10(1) and log10(100)
    let mapped = scale.apply(&D128::from(10));
    assert!(close(mapped, D128::from(0.5), 1e-10));

    let inverted = scale.invert(&D128::from(0.5));
    assert!(close(inverted, D128::from(10), 1e-8));
}

#[test]
fn test_logarithmic_decimal_rejects_non_positive_domain() {
    let result = Logarithmic::<D128>::new((D128::from(0), D128::from(100)), (D128::from(0), D128::from(1)));
    assert!(result.is_err());
}

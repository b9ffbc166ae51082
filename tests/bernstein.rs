use nalgebra::Vector4;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use teapot::{bernstein3, BernsteinTable};

#[test]
fn endpoints() {
    let (b, d) = bernstein3(0.0f64);
    assert_eq!(b, Vector4::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(d, Vector4::new(-3.0, 3.0, 0.0, 0.0));

    let (b, d) = bernstein3(1.0f64);
    assert_eq!(b, Vector4::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(d, Vector4::new(0.0, 0.0, -3.0, 3.0));
}

#[test]
fn midpoint() {
    let (b, d) = bernstein3(0.5f64);
    assert_eq!(b, Vector4::new(0.125, 0.375, 0.375, 0.125));
    assert_eq!(d, Vector4::new(-0.75, -0.75, 0.75, 0.75));
}

/// The basis is a partition of unity, so its derivatives sum to zero.
#[quickcheck]
fn partition_of_unity(x: f64) -> TestResult {
    if !x.is_finite() {
        return TestResult::discard();
    }
    let x = x.fract().abs();
    let (b, d) = bernstein3(x);
    TestResult::from_bool((b.sum() - 1.0).abs() < 1e-12 && d.sum().abs() < 1e-12)
}

/// Derivatives agree with a central difference.
#[test]
fn derivative() {
    let h = 1e-6;
    for s in 1..20 {
        let x = s as f64 / 20.0;
        let (lo, _) = bernstein3(x - h);
        let (hi, _) = bernstein3(x + h);
        let (_, d) = bernstein3(x);
        let approx = (hi - lo) / (2.0 * h);
        assert!((approx - d).norm() < 1e-6, "at {x}: {approx:?} vs {d:?}");
    }
}

#[test]
fn table() {
    let table = BernsteinTable::<f32>::new(10);
    assert_eq!(table.subdivisions(), 10);
    assert_eq!(table.basis_rows().len(), 10);
    assert_eq!(table.deriv_rows().len(), 10);
    for s in 0..10 {
        let (b, d) = bernstein3(s as f32 / 9.0);
        assert_eq!(table.basis(s), &b);
        assert_eq!(table.deriv(s), &d);
    }
    assert_eq!(table.basis(0), &Vector4::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(table.basis(9), &Vector4::new(0.0, 0.0, 0.0, 1.0));
}

/// Tables only depend on their sample count.
#[test]
fn table_is_pure() {
    assert_eq!(BernsteinTable::<f32>::new(7), BernsteinTable::<f32>::new(7));
    assert_ne!(BernsteinTable::<f32>::new(7), BernsteinTable::<f32>::new(10));
}

#[test]
#[should_panic]
fn table_too_small() {
    let _ = BernsteinTable::<f32>::new(1);
}

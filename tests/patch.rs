use nalgebra::{Point3, Vector3};
use teapot::{BernsteinTable, ControlPatch, NormalFix};

/// Evenly-spaced control points in the `XZ` plane; Bézier surfaces reproduce these linearly.
fn plane() -> ControlPatch<f64> {
    ControlPatch::from_fn(|i, j| Point3::new(j as f64, 0.0, i as f64))
}

/// A fan in the `XY` plane whose whole first row sits at the origin.
fn fan() -> ControlPatch<f64> {
    ControlPatch::from_fn(|i, j| Point3::new(i as f64 * (j as f64 - 1.5), -(i as f64), 0.0))
}

#[test]
fn linear_precision() {
    let patch = plane();
    let table = BernsteinTable::<f64>::new(4);
    let mut positions = vec![Point3::origin(); 16];
    patch.tessellate(&table, &mut positions);
    for (o, p) in positions.iter().enumerate() {
        let (u, v) = ((o / 4) as f64, (o % 4) as f64);
        assert!((p - Point3::new(v, 0.0, u)).norm() < 1e-12, "{o}: {p:?}");
    }
}

/// Whatever's in the output buffer beforehand doesn't leak into the results.
#[test]
fn overwrites_output() {
    let patch = plane();
    let table = BernsteinTable::<f64>::new(5);
    let mut clean = vec![Point3::origin(); 25];
    let mut dirty = vec![Point3::new(7.0, -3.0, 1e9); 25];
    patch.tessellate(&table, &mut clean);
    patch.tessellate(&table, &mut dirty);
    assert_eq!(clean, dirty);
}

#[test]
fn plane_normals() {
    let patch = plane();
    let table = BernsteinTable::<f64>::new(6);
    let mut positions = vec![Point3::origin(); 36];
    let mut normals = vec![Vector3::zeros(); 36];
    patch.tessellate_with_normals(&table, NormalFix::None, &mut positions, &mut normals);
    for n in normals {
        assert!((n - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-12, "{n:?}");
    }
}

/// Positions from the normal-generating path match the positions-only path.
#[test]
fn paths_agree() {
    let patch = fan();
    let table = BernsteinTable::<f64>::new(7);
    let mut a = vec![Point3::origin(); 49];
    let mut b = vec![Point3::origin(); 49];
    let mut normals = vec![Vector3::zeros(); 49];
    patch.tessellate(&table, &mut a);
    patch.tessellate_with_normals(&table, NormalFix::ForcePositiveY, &mut b, &mut normals);
    assert_eq!(a, b);
}

/// Grid tessellation & single-point evaluation agree.
#[test]
fn grid_matches_eval() {
    let patch = fan();
    let n = 5;
    let table = BernsteinTable::<f64>::new(n);
    let mut positions = vec![Point3::origin(); n * n];
    let mut normals = vec![Vector3::zeros(); n * n];
    patch.tessellate_with_normals(&table, NormalFix::ForceNegativeY, &mut positions, &mut normals);
    for u in 1..n {
        for v in 0..n {
            let (p, nrm) = patch.eval(u as f64 / 4.0, v as f64 / 4.0);
            assert!((positions[u * n + v] - p).norm() < 1e-12);
            assert!((normals[u * n + v] - nrm.normalize()).norm() < 1e-12);
        }
    }
}

#[test]
fn polar_fix() {
    let patch = fan();
    let n = 6;
    let table = BernsteinTable::<f64>::new(n);
    let mut positions = vec![Point3::origin(); n * n];
    let mut normals = vec![Vector3::zeros(); n * n];

    // at the pole itself, both tangents vanish
    let (_, raw) = patch.eval(0.0, 0.5);
    assert_eq!(raw.norm(), 0.0);

    patch.tessellate_with_normals(&table, NormalFix::ForcePositiveY, &mut positions, &mut normals);
    assert!(normals[..n].iter().all(|v| *v == Vector3::new(0.0, 1.0, 0.0)));
    for v in &normals[n..] {
        assert!((v - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-12, "{v:?}");
    }

    patch.tessellate_with_normals(&table, NormalFix::ForceNegativeY, &mut positions, &mut normals);
    assert!(normals[..n].iter().all(|v| *v == Vector3::new(0.0, -1.0, 0.0)));
}

#[test]
fn fix_normals() {
    assert_eq!(NormalFix::None.normal::<f32>(), None);
    assert_eq!(NormalFix::ForcePositiveY.normal(), Some(Vector3::new(0.0f32, 1.0, 0.0)));
    assert_eq!(NormalFix::ForceNegativeY.normal(), Some(Vector3::new(0.0f32, -1.0, 0.0)));
}

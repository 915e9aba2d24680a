//! Property-based tests for the kernel's geometric invariants using the
//! `proptest` crate.

use proptest::prelude::*;

use cad_geom::{Angle, BoundingBox, Line3d, Plane3d, Point3d, Vec3};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary 3D coordinate tuple in a reasonable floating-point range.
fn arb_triple() -> impl Strategy<Value = (f64, f64, f64)> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0, -1000.0f64..1000.0)
}

/// Arbitrary vector guaranteed to be comfortably non-zero.
fn arb_nonzero_vec() -> impl Strategy<Value = Vec3> {
    arb_triple()
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
        .prop_filter("vector long enough to normalize", |v| v.length() > 1e-3)
}

/// Arbitrary radian value away from the 0 / 2π wrap boundary, where a
/// whole-turn offset can legitimately normalize to either side.
fn arb_interior_angle() -> impl Strategy<Value = f64> {
    0.05f64..6.2
}

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// 1. Angle normalization: always lands in [0, 2π)
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn angle_normalizes_into_range(r in -1.0e4f64..1.0e4) {
        let a = Angle::new(r);
        prop_assert!(a.radians() >= 0.0);
        prop_assert!(a.radians() < 2.0 * std::f64::consts::PI);
    }
}

// ---------------------------------------------------------------------------
// 2. Angle congruence: r and r + 2πk normalize to the same value
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn angle_whole_turns_are_congruent(r in arb_interior_angle(), k in -8i32..8) {
        let tau = 2.0 * std::f64::consts::PI;
        let shifted = Angle::new(r + tau * k as f64);
        prop_assert!((shifted.radians() - Angle::new(r).radians()).abs() < TOL,
            "r={} k={} gave {}", r, k, shifted.radians());
    }
}

// ---------------------------------------------------------------------------
// 3. Normalized vectors have unit length and unit self-dot
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn normalized_vector_has_unit_length(v in arb_nonzero_vec()) {
        let u = v.normalize();
        prop_assert!((u.length() - 1.0).abs() < TOL);
        prop_assert!((u.dot(&u) - 1.0).abs() < TOL);
    }
}

// ---------------------------------------------------------------------------
// 4. Cross product anti-commutativity: a × b == -(b × a)
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cross_is_anticommutative(
        (ax, ay, az) in arb_triple(),
        (bx, by, bz) in arb_triple(),
    ) {
        let a = Vec3::new(ax, ay, az);
        let b = Vec3::new(bx, by, bz);
        prop_assert_eq!(a.cross(&b), -(b.cross(&a)));
    }
}

// ---------------------------------------------------------------------------
// 5. Point/vector conversions round-trip exactly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn point_vector_roundtrip((x, y, z) in arb_triple()) {
        let p = Point3d::new(x, y, z);
        prop_assert_eq!(p.to_vec3().to_point(), p);
        let v = Vec3::new(x, y, z);
        prop_assert_eq!(v.to_point().to_vec3(), v);
    }
}

// ---------------------------------------------------------------------------
// 6. Equality is reflexive, symmetric, and epsilon-tolerant
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn equality_laws((x, y, z) in arb_triple(), jitter in -4.0e-8f64..4.0e-8) {
        let p = Point3d::new(x, y, z);
        let q = Point3d::new(x + jitter, y - jitter, z + jitter);
        prop_assert_eq!(p, p);
        prop_assert_eq!(p, q);
        prop_assert_eq!(q, p);

        let v = Vec3::new(x, y, z);
        prop_assert_eq!(v, v);

        let plane = Plane3d::new(x, y, z, jitter);
        prop_assert_eq!(plane, plane);
    }
}

// ---------------------------------------------------------------------------
// 7. Rotation about an axis is an isometry that fixes the axis component
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn rotation_preserves_length_and_axis_component(
        v in arb_nonzero_vec(),
        axis in arb_nonzero_vec(),
        theta in 0.0f64..(2.0 * std::f64::consts::PI),
    ) {
        let rotated = v.rotate_about(Angle::new(theta), &axis);
        // Scale the tolerance to the magnitudes involved.
        let scale = v.length().max(1.0);
        prop_assert!((rotated.length() - v.length()).abs() < TOL * scale,
            "length {} -> {}", v.length(), rotated.length());
        let axis_unit = axis.normalize();
        prop_assert!((rotated.dot(&axis_unit) - v.dot(&axis_unit)).abs() < TOL * scale,
            "axis component changed");
    }
}

// ---------------------------------------------------------------------------
// 8. A full turn is the identity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn full_turn_is_identity(v in arb_nonzero_vec(), axis in arb_nonzero_vec()) {
        let rotated = v.rotate_about(Angle::new(2.0 * std::f64::consts::PI), &axis);
        let scale = v.length().max(1.0);
        prop_assert!((rotated - v).length() < TOL * scale);
    }
}

// ---------------------------------------------------------------------------
// 9. Serde round-trips preserve every value type
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn serde_roundtrip((x, y, z) in arb_triple(), d in -1000.0f64..1000.0) {
        let p = Point3d::new(x, y, z);
        let back: Point3d = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        prop_assert_eq!(back, p);

        let v = Vec3::new(x, y, z);
        let back: Vec3 = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        prop_assert_eq!(back, v);

        let plane = Plane3d::new(x, y, z, d);
        let back: Plane3d = serde_json::from_str(&serde_json::to_string(&plane).unwrap()).unwrap();
        prop_assert_eq!(back, plane);

        let angle = Angle::new(d);
        let back: Angle = serde_json::from_str(&serde_json::to_string(&angle).unwrap()).unwrap();
        prop_assert_eq!(back, angle);

        let bb = BoundingBox::new(p, p + v);
        let back: BoundingBox = serde_json::from_str(&serde_json::to_string(&bb).unwrap()).unwrap();
        prop_assert_eq!(back, bb);
    }
}

// ---------------------------------------------------------------------------
// 10. Line directions are unit-normalized at construction
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn line_direction_is_unit(
        (x, y, z) in arb_triple(),
        dir in arb_nonzero_vec(),
    ) {
        let line = Line3d::new(Point3d::new(x, y, z), dir);
        prop_assert!((line.direction.length() - 1.0).abs() < TOL);
        // Evaluating at the parameter returned by closest_point recovers
        // a point whose offset is perpendicular to the line.
        let probe = Point3d::new(y, z, x);
        let (foot, _t) = line.closest_point(&probe);
        prop_assert!((probe - foot).dot(&line.direction).abs() < TOL * 1000.0);
    }
}

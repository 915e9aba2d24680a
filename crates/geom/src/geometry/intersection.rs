//! Intersection and closest-approach queries among lines, planes, rays and
//! segments.
//!
//! Expected geometric non-results (parallel, skew, disjoint, degenerate
//! configurations) come back as `None`; these are normal outcomes of valid
//! queries, never panics.

use super::line::Line3d;
use super::plane::Plane3d;
use super::point::Point3d;
use super::vector::Vec3;
use crate::EPSILON;

// ─── Line-Line ──────────────────────────────────────────────────────────────

/// Find the closest points between two lines in 3D.
///
/// Solves the 2×2 system over the four direction/offset dot products.
/// Returns `(point_on_l1, t1, point_on_l2, t2, distance)`, or `None` when
/// the lines are parallel or coincident (degenerate denominator).
pub fn line_line_closest(l1: &Line3d, l2: &Line3d) -> Option<(Point3d, f64, Point3d, f64, f64)> {
    let w = l1.origin - l2.origin;
    let a = l1.direction.dot(&l1.direction);
    let b = l1.direction.dot(&l2.direction);
    let c = l2.direction.dot(&l2.direction);
    let d = l1.direction.dot(&w);
    let e = l2.direction.dot(&w);

    let denom = a * c - b * b;
    if denom.abs() < EPSILON {
        return None; // parallel
    }

    let t1 = (b * e - c * d) / denom;
    let t2 = (a * e - b * d) / denom;

    let p1 = l1.evaluate(t1);
    let p2 = l2.evaluate(t2);
    let dist = p1.distance_to(&p2);

    Some((p1, t1, p2, t2, dist))
}

/// Intersect two lines.
///
/// `None` if the lines are parallel, or skew by more than `EPSILON`;
/// otherwise the midpoint of the closest-approach pair.
pub fn line_line(l1: &Line3d, l2: &Line3d) -> Option<Point3d> {
    let (p1, _t1, p2, _t2, dist) = line_line_closest(l1, l2)?;
    if dist > EPSILON {
        return None; // the lines do not truly meet
    }
    Some(p1.midpoint(&p2))
}

// ─── Line-Plane ─────────────────────────────────────────────────────────────

/// Intersect an infinite line with a plane.
///
/// Solves the implicit-plane/parametric-line equation for the parameter
/// along the line. `None` when the line is parallel to (or embedded in)
/// the plane.
pub fn line_plane(line: &Line3d, plane: &Plane3d) -> Option<Point3d> {
    let numerator = plane.distance(&line.origin);
    let denominator = -plane.normal().dot(&line.direction);
    if denominator.abs() < EPSILON {
        return None; // parallel to or on the plane
    }
    Some(line.evaluate(numerator / denominator))
}

// ─── Ray-Plane ──────────────────────────────────────────────────────────────

/// Intersect a forward ray with a plane.
///
/// `None` when the ray is parallel to the plane or the plane lies behind
/// the ray origin. A ray starting within `EPSILON` of the plane hits at
/// (essentially) its origin regardless of direction. A zero `direction`
/// is degenerate and reports no intersection.
pub fn ray_plane(origin: &Point3d, direction: &Vec3, plane: &Plane3d) -> Option<Point3d> {
    let dir = direction.normalized()?;
    let denom = plane.normal().dot(&dir);
    if denom.abs() < EPSILON {
        return None; // parallel
    }
    let t = -plane.distance(origin) / denom;
    if t < -EPSILON {
        return None; // the plane is behind the ray
    }
    Some(*origin + dir * t.max(0.0))
}

// ─── Plane-Plane ────────────────────────────────────────────────────────────

/// Intersect two planes. Returns the line of intersection, or `None` if
/// the planes are parallel.
pub fn plane_plane(p1: &Plane3d, p2: &Plane3d) -> Option<Line3d> {
    let n1 = p1.normal();
    let n2 = p2.normal();
    let line_vector = n1.cross(&n2);
    let determinant = line_vector.length_squared();
    if determinant < EPSILON {
        return None; // parallel planes
    }
    let line_point =
        (line_vector.cross(&n2) * p1.d + n1.cross(&line_vector) * p2.d) / determinant;
    Some(Line3d::new(line_point.to_point(), line_vector))
}

// ─── Segment-Ray ────────────────────────────────────────────────────────────

/// Intersect the segment `seg_start`→`seg_start + seg_vec` with the forward
/// ray from `ray_start` along `ray_vec`.
///
/// Collinear configurations report no intersection unless
/// `include_collinear` is set, in which case the overlap is resolved by
/// dot-product projection: the ray origin if it falls inside the segment,
/// otherwise the nearest segment endpoint ahead of the ray, otherwise
/// `None` for disjoint spans.
///
/// In the general case the two signed parameters are solved via the common
/// cross vector; the hit must sit within the segment's `[0, 1]` span and on
/// the forward half of the ray (each window widened by an epsilon scaled to
/// the corresponding direction length), and the candidate points on the two
/// lines must coincide within `EPSILON` (skew configurations do not
/// intersect). Zero-length `seg_vec` or `ray_vec` is degenerate and reports
/// no intersection.
pub fn segment_ray_intersection(
    seg_start: &Point3d,
    seg_vec: &Vec3,
    ray_start: &Point3d,
    ray_vec: &Vec3,
    include_collinear: bool,
) -> Option<Point3d> {
    let seg_dir = seg_vec.normalized()?;
    let ray_dir = ray_vec.normalized()?;
    let a_to_b = *ray_start - *seg_start;

    if seg_dir.cross(&ray_dir) == Vec3::ZERO {
        // Parallel directions: collinear only if the offset runs along them too.
        let offset_along = match a_to_b.normalized() {
            Some(unit) => unit.cross(&seg_dir) == Vec3::ZERO,
            None => true, // the ray starts exactly at the segment start
        };
        if !offset_along {
            return None; // parallel but offset
        }
        if !include_collinear {
            return None;
        }
        // Project the segment endpoints onto the ray.
        let ray_len2 = ray_vec.dot(ray_vec);
        let start_t = (*seg_start - *ray_start).dot(ray_vec) / ray_len2;
        let end_t = start_t + seg_vec.dot(ray_vec) / ray_len2;
        if (start_t < 0.0 && end_t > 0.0) || (start_t > 0.0 && end_t < 0.0) {
            // The ray origin falls inside the segment.
            return Some(*ray_start);
        }
        if start_t > 0.0 {
            if start_t < end_t {
                return Some(*seg_start);
            }
            return Some(*seg_start + *seg_vec);
        }
        None // the segment lies entirely behind the ray
    } else {
        let n = seg_vec.cross(ray_vec);
        let n_len2 = n.length_squared();
        if n_len2 < EPSILON * EPSILON {
            return None;
        }
        let t_seg = a_to_b.cross(ray_vec).dot(&n) / n_len2;
        let t_ray = a_to_b.cross(seg_vec).dot(&n) / n_len2;

        let seg_epsilon = EPSILON / seg_vec.length();
        let ray_epsilon = EPSILON / ray_vec.length();
        if t_seg < -seg_epsilon || t_seg > 1.0 + seg_epsilon || t_ray < -ray_epsilon {
            return None;
        }
        let on_segment = *seg_start + *seg_vec * t_seg;
        let on_ray = *ray_start + *ray_vec * t_ray;
        if on_segment.distance_to(&on_ray) > EPSILON {
            return None; // skew: the lines pass without meeting
        }
        Some(on_segment)
    }
}

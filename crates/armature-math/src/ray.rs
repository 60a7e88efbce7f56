//! Ray representation and point-to-ray distance.

use crate::{Point3, Vec3};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is stored as given, not normalized: a pick ray spans
/// from the near clip plane point to the far clip plane point and the
/// tests below are length-invariant.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray (not necessarily unit length).
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray through two points, from `from` toward `to`.
    pub fn between(from: Point3, to: Point3) -> Self {
        Self {
            origin: from,
            direction: to - from,
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

/// Perpendicular distance from a point to the (infinite) line of a ray.
///
/// The cross product of the two origin-to-point vectors gives the area
/// of the parallelogram they span; dividing by the base length leaves
/// the height, which is the distance sought.
pub fn distance_to_ray(point: &Point3, ray: &Ray) -> f64 {
    let to_point = point - ray.origin;
    let to_point_from_end = point - ray.at(1.0);
    let area_twice = to_point.cross(&to_point_from_end).norm();
    area_twice / ray.direction.norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::origin(), Vec3::new(2.0, 0.0, 0.0));
        let p = ray.at(2.5);
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn test_ray_between() {
        let ray = Ray::between(Point3::new(1.0, 1.0, 1.0), Point3::new(1.0, 4.0, 1.0));
        assert!((ray.direction - Vec3::new(0.0, 3.0, 0.0)).norm() < 1e-12);
        assert!((ray.at(1.0) - Point3::new(1.0, 4.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_distance_to_ray_perpendicular() {
        let ray = Ray::new(Point3::origin(), Vec3::x());
        let d = distance_to_ray(&Point3::new(5.0, 3.0, 0.0), &ray);
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_ray_unnormalized() {
        // Distance must not depend on the direction's length.
        let short = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));
        let long = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 40.0));
        let p = Point3::new(2.0, 2.0, 7.0);
        let d1 = distance_to_ray(&p, &short);
        let d2 = distance_to_ray(&p, &long);
        assert!((d1 - d2).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_ray_on_line() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 1.0, 0.0));
        let d = distance_to_ray(&ray.at(3.0), &ray);
        assert!(d.abs() < 1e-9);
    }
}

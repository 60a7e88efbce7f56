#![warn(missing_docs)]

//! Math types for the armature interaction core.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! picking and constrained movement: points, vectors, rays, planes,
//! triangles, silhouette rectangles, and tolerance constants.

use nalgebra::{Matrix4, Vector4};

mod ray;
mod triangle;

pub use ray::{distance_to_ray, Ray};
pub use triangle::{Rectangle, Triangle};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Symmetric perspective projection (vertical field of view in
    /// degrees, width/height aspect, near and far clip distances).
    pub fn perspective(fov_y_degrees: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (fov_y_degrees.to_radians() / 2.0).tan();
        let mut m = Matrix4::zeros();
        m[(0, 0)] = f / aspect;
        m[(1, 1)] = f;
        m[(2, 2)] = (far + near) / (near - far);
        m[(2, 3)] = 2.0 * far * near / (near - far);
        m[(3, 2)] = -1.0;
        Self { matrix: m }
    }

    /// Compose: apply `other` first, then `self` (self * other).
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Transform a homogeneous point and undo the perspective divide.
    ///
    /// This is the unprojection primitive: a clip-space point pushed
    /// through an inverse view-projection matrix comes back with an
    /// inverse w that must be divided out to land in world space.
    pub fn apply_homogeneous(&self, p: &Point3, w: f64) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, w);
        Point3::new(v.x / v.w, v.y / v.w, v.z / v.w)
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// An unbounded plane defined by a point on it and a normal vector.
///
/// The normal does not need to be normalized; the ray intersection
/// formula is scale-invariant in it.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point3,
    /// Plane normal.
    pub normal: Vec3,
}

impl Plane {
    /// Create a plane from a point and a normal.
    pub fn new(point: Point3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Intersect a ray with this plane by the point-normal formula.
    ///
    /// Returns `None` when the ray is parallel to the plane (the
    /// |direction · normal| falls below [`Tolerance::PARALLEL`]).
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Point3> {
        let denom = ray.direction.dot(&self.normal);
        if denom.abs() < Tolerance::PARALLEL {
            return None;
        }
        let t = (self.point - ray.origin).dot(&self.normal) / denom;
        Some(ray.at(t))
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance;

impl Tolerance {
    /// Per-coordinate distance under which two endpoint coordinates
    /// count as congruent.
    pub const CONGRUENT: f64 = 0.03;

    /// |ray · normal| under which a ray counts as parallel to a plane.
    pub const PARALLEL: f64 = 1e-8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        approx::assert_relative_eq!(result.x, 11.0);
        approx::assert_relative_eq!(result.y, 22.0);
        approx::assert_relative_eq!(result.z, 33.0);
    }

    #[test]
    fn test_rotation_y_90() {
        let t = Transform::rotation_y(PI / 2.0);
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_order() {
        // then() is self * other: other applies first.
        let translate = Transform::translation(1.0, 0.0, 0.0);
        let rotate = Transform::rotation_y(PI / 2.0);
        let composed = rotate.then(&translate);
        let result = composed.apply_point(&Point3::origin());
        // origin -> (1,0,0) -> rotated to (0,0,-1)
        assert!(result.x.abs() < 1e-12);
        assert!((result.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Transform::translation(1.0, 2.0, 3.0).then(&Transform::rotation_x(0.7));
        let inv = t.inverse().unwrap();
        let p = Point3::new(5.0, 6.0, 7.0);
        let result = inv.apply_point(&t.apply_point(&p));
        assert!((result - p).norm() < 1e-10);
    }

    #[test]
    fn test_perspective_invertible() {
        let t = Transform::perspective(45.0, 16.0 / 9.0, 1.0, 100.0);
        assert!(t.inverse().is_some());
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let plane = Plane::new(Point3::origin(), Vec3::y());
        let ray = Ray::new(Point3::new(3.0, 5.0, 4.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = plane.intersect_ray(&ray).unwrap();
        approx::assert_relative_eq!(hit.x, 3.0);
        approx::assert_relative_eq!(hit.y, 0.0);
        approx::assert_relative_eq!(hit.z, 4.0);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let plane = Plane::new(Point3::origin(), Vec3::y());
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(plane.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_ray_plane_unnormalized_normal() {
        // Scaling the normal must not move the intersection.
        let plane = Plane::new(Point3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 7.0, 0.0));
        let ray = Ray::new(Point3::new(1.0, 10.0, 1.0), Vec3::new(0.0, -2.0, 0.0));
        let hit = plane.intersect_ray(&ray).unwrap();
        assert!((hit.y - 2.0).abs() < 1e-12);
    }
}

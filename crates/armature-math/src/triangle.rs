//! Triangles and silhouette rectangles for touch detection.

use crate::{Plane, Point3, Vec3};

/// A triangle given by three corner points.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// First corner.
    pub a: Point3,
    /// Second corner.
    pub b: Point3,
    /// Third corner.
    pub c: Point3,
}

impl Triangle {
    /// Create a triangle from its corners.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// Face normal (not normalized).
    pub fn normal(&self) -> Vec3 {
        (self.a - self.b).cross(&(self.c - self.b))
    }

    /// Whether `p` (assumed coplanar) lies inside this triangle.
    ///
    /// Same-side test via cross products: the three corner-to-point
    /// cross products must all face the same way.
    pub fn contains(&self, p: &Point3) -> bool {
        let a = self.a - p;
        let b = self.b - p;
        let c = self.c - p;

        let u = b.cross(&c);
        let v = c.cross(&a);
        let w = a.cross(&b);

        if u.dot(&v) < 0.0 {
            return false;
        }
        u.dot(&w) >= 0.0
    }
}

/// A planar quad split into two triangles, carrying its support plane.
///
/// Used as the pick silhouette for a cylinder body: two of these at
/// right angles along the cylinder axis intercept most touches aimed
/// at the body.
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    /// Upper triangle (top-left, bottom-left, top-right).
    pub upper: Triangle,
    /// Lower triangle (bottom-left, bottom-right, top-right).
    pub lower: Triangle,
    /// The plane the quad lies in.
    pub plane: Plane,
}

impl Rectangle {
    /// Build from corners in top-left, bottom-left, bottom-right,
    /// top-right order.
    pub fn new(tl: Point3, bl: Point3, br: Point3, tr: Point3) -> Self {
        let upper = Triangle::new(tl, bl, tr);
        let lower = Triangle::new(bl, br, tr);
        let plane = Plane::new(tl, upper.normal());
        Self { upper, lower, plane }
    }

    /// Whether a coplanar point lies within the quad.
    pub fn contains(&self, p: &Point3) -> bool {
        self.upper.contains(p) || self.lower.contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ray;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_point_in_triangle() {
        let t = unit_triangle();
        assert!(t.contains(&Point3::new(0.25, 0.25, 0.0)));
        assert!(!t.contains(&Point3::new(0.8, 0.8, 0.0)));
        assert!(!t.contains(&Point3::new(-0.1, 0.5, 0.0)));
    }

    #[test]
    fn test_triangle_normal_direction() {
        let t = unit_triangle();
        let n = t.normal();
        assert!(n.x.abs() < 1e-12);
        assert!(n.y.abs() < 1e-12);
        assert!(n.z.abs() > 0.0);
    }

    #[test]
    fn test_rectangle_contains() {
        let r = Rectangle::new(
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
        );
        assert!(r.contains(&Point3::new(0.5, 1.0, 0.0)));
        assert!(r.contains(&Point3::new(0.9, 1.9, 0.0)));
        assert!(!r.contains(&Point3::new(1.5, 1.0, 0.0)));
    }

    #[test]
    fn test_rectangle_plane_intersection() {
        let r = Rectangle::new(
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
        );
        let ray = Ray::new(Point3::new(0.5, 1.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = r.plane.intersect_ray(&ray).unwrap();
        assert!(r.contains(&hit));
    }
}

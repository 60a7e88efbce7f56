//! The snap mesh: a bounded, grid-discretized drag plane.

use armature_math::{Plane, Point3, Ray, Vec3};
use armature_model::Axis;

/// Candidate snap points per side of the grid window.
const GRID_DIM: usize = 4;

/// Spacing between candidate snap points.
const GRID_SPACING: f64 = 0.5;

/// A bounded square plane perpendicular to a principal axis, carrying
/// a small moving window of candidate snap points.
///
/// The window is re-anchored whenever the reference point crosses into
/// a different grid cell: the anchor sits one cell below the
/// reference's enclosing cell on each in-plane axis, which keeps a
/// buffer of candidates around the reference as it moves.
#[derive(Debug, Clone)]
pub struct SnapMesh {
    size: f64,
    axis: Axis,
    position: f64,
    plane: Plane,
    in_plane: [usize; 2],
    anchor: Option<[f64; 2]>,
    grid: Vec<Point3>,
}

impl SnapMesh {
    /// Create a snap mesh perpendicular to `axis` at `position` along
    /// it, extending `size` to each side.
    ///
    /// Panics when handed `Axis::None`: a drag plane needs a normal.
    pub fn new(size: f64, axis: Axis, position: f64) -> Self {
        let index = axis.index().expect("snap mesh needs a principal axis");
        let in_plane = axis.others().expect("snap mesh needs a principal axis");
        let mut point = Point3::origin();
        point[index] = position;
        let mut normal = Vec3::zeros();
        normal[index] = 1.0;
        Self {
            size,
            axis,
            position,
            plane: Plane::new(point, normal),
            in_plane,
            anchor: None,
            grid: Vec::new(),
        }
    }

    /// The axis this mesh is perpendicular to.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Coordinate of the plane along its axis.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Half-extent of the bounded footprint.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// In-plane bounds for one of the two free coordinates.
    ///
    /// Vertical planes are shifted up to start at the ground, so their
    /// y range is [0, 2·size]; every other coordinate spans ±size.
    fn bounds(&self, coordinate: usize) -> (f64, f64) {
        if coordinate == 1 && self.axis != Axis::Y {
            (0.0, 2.0 * self.size)
        } else {
            (-self.size, self.size)
        }
    }

    /// Intersect a ray with this mesh, rejecting points outside the
    /// bounded footprint, and re-anchor the snap window around the hit.
    ///
    /// Returns `None` for rays parallel to the plane or missing the
    /// footprint.
    pub fn intersect(&mut self, ray: &Ray) -> Option<Point3> {
        let point = self.plane.intersect_ray(ray)?;
        for coordinate in self.in_plane {
            let (lo, hi) = self.bounds(coordinate);
            if point[coordinate] < lo || point[coordinate] > hi {
                return None;
            }
        }
        self.recenter(&point);
        Some(point)
    }

    /// Re-anchor the candidate window around a reference point if it
    /// has left its current cell.
    fn recenter(&mut self, reference: &Point3) {
        let anchor = [
            (reference[self.in_plane[0]] / GRID_SPACING).floor() * GRID_SPACING - GRID_SPACING,
            (reference[self.in_plane[1]] / GRID_SPACING).floor() * GRID_SPACING - GRID_SPACING,
        ];
        if self.anchor == Some(anchor) {
            return;
        }
        self.anchor = Some(anchor);
        self.grid.clear();
        let index = self.axis.index().expect("snap mesh axis is principal");
        for i in 0..GRID_DIM {
            for j in 0..GRID_DIM {
                let mut point = Point3::origin();
                point[index] = self.position;
                point[self.in_plane[0]] = anchor[0] + i as f64 * GRID_SPACING;
                point[self.in_plane[1]] = anchor[1] + j as f64 * GRID_SPACING;
                self.grid.push(point);
            }
        }
    }

    /// The candidate snap point nearest to `point`.
    ///
    /// Re-anchors the window around `point` first, then scans the
    /// small fixed grid linearly; ties go to the first candidate in
    /// scan order.
    pub fn nearest_snap_point(&mut self, point: &Point3) -> Point3 {
        self.recenter(point);
        let mut best = self.grid[0];
        let mut best_distance = f64::INFINITY;
        for candidate in &self.grid {
            let distance = (candidate - point).norm();
            if distance < best_distance {
                best_distance = distance;
                best = *candidate;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_within_footprint() {
        let mut mesh = SnapMesh::new(2.5, Axis::Y, 0.0);
        let ray = Ray::new(Point3::new(1.0, 5.0, 1.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = mesh.intersect(&ray).unwrap();
        assert!((hit.x - 1.0).abs() < 1e-12);
        assert!(hit.y.abs() < 1e-12);
    }

    #[test]
    fn test_intersect_outside_footprint() {
        let mut mesh = SnapMesh::new(2.5, Axis::Y, 0.0);
        let ray = Ray::new(Point3::new(4.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(mesh.intersect(&ray).is_none());
    }

    #[test]
    fn test_intersect_parallel() {
        let mut mesh = SnapMesh::new(2.5, Axis::Y, 0.0);
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(mesh.intersect(&ray).is_none());
    }

    #[test]
    fn test_vertical_plane_bounds_start_at_ground() {
        let mut mesh = SnapMesh::new(2.5, Axis::Z, 0.0);
        let below = Ray::new(Point3::new(0.0, -1.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(mesh.intersect(&below).is_none());
        let above = Ray::new(Point3::new(0.0, 4.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(mesh.intersect(&above).is_some());
    }

    #[test]
    fn test_nearest_snap_point() {
        let mut mesh = SnapMesh::new(2.5, Axis::Y, 0.0);
        let snapped = mesh.nearest_snap_point(&Point3::new(0.25, 0.0, 0.76));
        // On-plane coordinate comes back on the half-unit grid.
        assert!(snapped.x.abs() < 1e-12 || (snapped.x - 0.5).abs() < 1e-12);
        assert!((snapped.z - 1.0).abs() < 1e-12);
        assert!(snapped.y.abs() < 1e-12);
    }

    #[test]
    fn test_snap_idempotent() {
        let mut mesh = SnapMesh::new(2.5, Axis::Z, 0.5);
        for raw in [
            Point3::new(0.2, 1.3, 0.5),
            Point3::new(-1.9, 0.01, 0.5),
            Point3::new(2.49, 4.9, 0.5),
        ] {
            let once = mesh.nearest_snap_point(&raw);
            let twice = mesh.nearest_snap_point(&once);
            assert!((twice - once).norm() < 1e-12);
        }
    }

    #[test]
    fn test_window_follows_reference() {
        let mut mesh = SnapMesh::new(2.5, Axis::Y, 0.0);
        let near_origin = mesh.nearest_snap_point(&Point3::new(0.1, 0.0, 0.1));
        assert!((near_origin.x).abs() < 1e-12);
        // Far from the first window, the grid must have moved with us.
        let far = mesh.nearest_snap_point(&Point3::new(2.1, 0.0, -1.6));
        assert!((far.x - 2.0).abs() < 1e-12);
        assert!((far.z + 1.5).abs() < 1e-12);
    }
}

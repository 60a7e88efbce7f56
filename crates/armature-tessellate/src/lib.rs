#![warn(missing_docs)]

//! Triangle mesh generation for armature items and guides.
//!
//! Turns the model's analytic shapes into flat-shaded triangle meshes
//! a renderer can upload: cylinders as end fans plus side facets,
//! junction nodes as icosahedral markers, handles as disks, and drag
//! planes as quads. GPU mechanics (buffers, shaders, draw calls) are a
//! consumer concern; this crate only produces vertex data.

use armature_math::{Point3, Vec3};
use armature_model::{Axis, Cylinder, Node};
use nalgebra::UnitQuaternion;

/// Circle segments for cylinder bodies.
const CYLINDER_SEGMENTS: usize = 12;

/// Circle segments for handle disks.
const HANDLE_SEGMENTS: usize = 24;

/// Output triangle mesh for rendering and export.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
    /// Flat array of vertex normals: `[nx0, ny0, nz0, ...]` (f32). Same length as vertices.
    pub normals: Vec<f32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.num_vertices() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Corner positions of triangle `i`.
    pub fn triangle(&self, i: usize) -> [[f32; 3]; 3] {
        let mut corners = [[0.0; 3]; 3];
        for (corner, slot) in corners.iter_mut().enumerate() {
            let v = self.indices[i * 3 + corner] as usize;
            slot.copy_from_slice(&self.vertices[v * 3..v * 3 + 3]);
        }
        corners
    }

    /// Append one flat-shaded triangle, normal taken from the winding.
    fn push_triangle(&mut self, a: Point3, b: Point3, c: Point3) {
        let normal = (a - b).cross(&(c - b));
        let normal = if normal.norm() > 0.0 {
            normal.normalize()
        } else {
            Vec3::zeros()
        };
        self.push_triangle_with_normal(a, b, c, normal);
    }

    fn push_triangle_with_normal(&mut self, a: Point3, b: Point3, c: Point3, normal: Vec3) {
        let base = self.num_vertices() as u32;
        for p in [a, b, c] {
            self.vertices
                .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
            self.normals.extend_from_slice(&[
                normal.x as f32,
                normal.y as f32,
                normal.z as f32,
            ]);
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
}

/// A capability for items that can produce their render mesh.
///
/// This is the renderable seam the interaction core exposes: a
/// consumer binds and draws the returned data however it likes.
pub trait Tessellate {
    /// Produce the item's triangle mesh.
    fn tessellate(&self) -> TriangleMesh;
}

impl Tessellate for Cylinder {
    fn tessellate(&self) -> TriangleMesh {
        cylinder_mesh(self)
    }
}

impl Tessellate for Node {
    fn tessellate(&self) -> TriangleMesh {
        node_marker_mesh(self)
    }
}

/// Points of a circle of `radius` around `center`, perpendicular to
/// `axis`. The circle repeats its first point at the end.
fn circle_points(center: Point3, radius: f64, segments: usize, axis: Axis) -> Vec<Point3> {
    let main = axis.index().expect("circle needs a principal axis");
    let others = axis.others().expect("circle needs a principal axis");
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let angle = i as f64 / segments as f64 * std::f64::consts::TAU;
        let mut p = Point3::origin();
        p[main] = center[main];
        p[others[0]] = center[others[0]] + radius * angle.cos();
        p[others[1]] = center[others[1]] + radius * angle.sin();
        points.push(p);
    }
    points
}

/// A filled disk of `radius` at `center`, perpendicular to `axis`.
///
/// Used for cylinder end handles and node ring handles.
pub fn disk_mesh(center: Point3, radius: f64, axis: Axis) -> TriangleMesh {
    let normal = axis.unit().expect("disk needs a principal axis");
    let ring = circle_points(center, radius, HANDLE_SEGMENTS, axis);
    let mut mesh = TriangleMesh::new();
    for pair in ring.windows(2) {
        mesh.push_triangle_with_normal(center, pair[0], pair[1], normal);
    }
    mesh
}

/// A cylinder as two end fans plus flat-shaded side facets.
///
/// The shape is generated vertical with the distance between the end
/// centers as its height, then rotated about the bottom center so the
/// top lands on the actual top center. Vertical cylinders skip the
/// rotation.
pub fn cylinder_mesh(cylinder: &Cylinder) -> TriangleMesh {
    let bottom = cylinder.bottom_center;
    let height = (cylinder.top_center - bottom).norm();
    let vertical_top = bottom + Vec3::new(0.0, height, 0.0);

    let bottom_ring = circle_points(bottom, cylinder.radius, CYLINDER_SEGMENTS, Axis::Y);
    let top_ring = circle_points(vertical_top, cylinder.radius, CYLINDER_SEGMENTS, Axis::Y);

    let mut mesh = TriangleMesh::new();
    for pair in bottom_ring.windows(2) {
        mesh.push_triangle_with_normal(bottom, pair[1], pair[0], -Vec3::y());
    }
    for pair in top_ring.windows(2) {
        mesh.push_triangle_with_normal(vertical_top, pair[0], pair[1], Vec3::y());
    }
    for i in 0..CYLINDER_SEGMENTS {
        let (b0, b1) = (bottom_ring[i], bottom_ring[i + 1]);
        let (t0, t1) = (top_ring[i], top_ring[i + 1]);
        mesh.push_triangle(t0, b0, t1);
        mesh.push_triangle(b0, b1, t1);
    }

    // Rotate the vertical shape so its top meets the real top center.
    if height > 0.0 {
        let direction = (cylinder.top_center - bottom) / height;
        if let Some(rotation) =
            UnitQuaternion::rotation_between(&Vec3::y(), &direction).or_else(|| {
                // Anti-parallel: rotation_between is degenerate, flip
                // about X instead.
                (direction.y < 0.0).then(|| {
                    UnitQuaternion::from_axis_angle(
                        &nalgebra::Unit::new_normalize(Vec3::x()),
                        std::f64::consts::PI,
                    )
                })
            })
        {
            apply_rotation(&mut mesh, &rotation, &bottom);
        }
    }
    mesh
}

fn apply_rotation(mesh: &mut TriangleMesh, rotation: &UnitQuaternion<f64>, pivot: &Point3) {
    for i in 0..mesh.num_vertices() {
        let v = Vec3::new(
            mesh.vertices[i * 3] as f64,
            mesh.vertices[i * 3 + 1] as f64,
            mesh.vertices[i * 3 + 2] as f64,
        );
        let rotated = rotation * (v - pivot.coords) + pivot.coords;
        mesh.vertices[i * 3] = rotated.x as f32;
        mesh.vertices[i * 3 + 1] = rotated.y as f32;
        mesh.vertices[i * 3 + 2] = rotated.z as f32;

        let n = Vec3::new(
            mesh.normals[i * 3] as f64,
            mesh.normals[i * 3 + 1] as f64,
            mesh.normals[i * 3 + 2] as f64,
        );
        let rotated_normal = rotation * n;
        mesh.normals[i * 3] = rotated_normal.x as f32;
        mesh.normals[i * 3 + 1] = rotated_normal.y as f32;
        mesh.normals[i * 3 + 2] = rotated_normal.z as f32;
    }
}

/// An icosahedral marker for a junction node.
pub fn node_marker_mesh(node: &Node) -> TriangleMesh {
    icosahedron_mesh(node.center, node.radius)
}

/// A flat-shaded icosahedron of circumradius `radius` at `center`.
pub fn icosahedron_mesh(center: Point3, radius: f64) -> TriangleMesh {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let scale = radius / (1.0 + phi * phi).sqrt();
    let a = scale;
    let b = phi * scale;

    let corner = |x: f64, y: f64, z: f64| center + Vec3::new(x, y, z);
    let vertices = [
        corner(-a, b, 0.0),
        corner(a, b, 0.0),
        corner(-a, -b, 0.0),
        corner(a, -b, 0.0),
        corner(0.0, -a, b),
        corner(0.0, a, b),
        corner(0.0, -a, -b),
        corner(0.0, a, -b),
        corner(b, 0.0, -a),
        corner(b, 0.0, a),
        corner(-b, 0.0, -a),
        corner(-b, 0.0, a),
    ];
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 3],
    ];

    let mut mesh = TriangleMesh::new();
    for face in FACES {
        let (p0, p1, p2) = (vertices[face[0]], vertices[face[1]], vertices[face[2]]);
        // Outward face normal straight from the face centroid.
        let centroid = Point3::from((p0.coords + p1.coords + p2.coords) / 3.0);
        let normal = (centroid - center).normalize();
        mesh.push_triangle_with_normal(p0, p1, p2, normal);
    }
    mesh
}

/// A translucent guide/drag plane quad perpendicular to `axis` at
/// `position`, extending `size` each way. Vertical planes are shifted
/// up to start at the ground, like the snap mesh footprint.
pub fn plane_quad_mesh(axis: Axis, position: f64, size: f64) -> TriangleMesh {
    let index = axis.index().expect("plane quad needs a principal axis");
    let others = axis.others().expect("plane quad needs a principal axis");

    let corner = |u: f64, v: f64| {
        let mut p = Point3::origin();
        p[index] = position;
        p[others[0]] = u * size;
        p[others[1]] = v * size;
        if axis != Axis::Y {
            // Vertical planes sit on the ground, not astride it.
            p[1] += size;
        }
        p
    };

    let (tl, bl, br, tr) = (
        corner(-1.0, -1.0),
        corner(-1.0, 1.0),
        corner(1.0, 1.0),
        corner(1.0, -1.0),
    );
    let mut mesh = TriangleMesh::new();
    mesh.push_triangle(tl, bl, tr);
    mesh.push_triangle(bl, br, tr);
    mesh
}

/// The two end points of a guide line along `axis` through `through`,
/// spanning `half_extent` each way.
pub fn guide_line_points(axis: Axis, through: Point3, half_extent: f64) -> Option<[Point3; 2]> {
    let direction = axis.unit()?;
    Some([
        through - direction * half_extent,
        through + direction * half_extent,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_model::Model;

    fn model_cylinder(bottom: Point3, top: Point3) -> (Model, u64) {
        let mut model = Model::new();
        let id = model.add_cylinder(bottom, top, 0.3);
        (model, id)
    }

    #[test]
    fn test_cylinder_mesh_counts() {
        let (model, id) = model_cylinder(Point3::origin(), Point3::new(0.0, 2.0, 0.0));
        let mesh = cylinder_mesh(model.cylinder(id));
        // Two fans of SEGMENTS triangles plus two per side facet.
        assert_eq!(mesh.num_triangles(), CYLINDER_SEGMENTS * 4);
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
    }

    #[test]
    fn test_vertical_cylinder_spans_height() {
        let (model, id) = model_cylinder(Point3::origin(), Point3::new(0.0, 2.0, 0.0));
        let mesh = cylinder_mesh(model.cylinder(id));
        let max_y = mesh
            .vertices
            .chunks(3)
            .map(|v| v[1])
            .fold(f32::MIN, f32::max);
        assert!((max_y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_angled_cylinder_reaches_top() {
        let top = Point3::new(1.0, 1.0, 0.0);
        let (model, id) = model_cylinder(Point3::origin(), top);
        let mesh = cylinder_mesh(model.cylinder(id));
        // Some vertex of the rotated top fan lands at the top center.
        let close = mesh.vertices.chunks(3).any(|v| {
            let p = Point3::new(v[0] as f64, v[1] as f64, v[2] as f64);
            (p - top).norm() < 1e-4
        });
        assert!(close);
    }

    #[test]
    fn test_icosahedron_counts_and_radius() {
        let mesh = icosahedron_mesh(Point3::new(1.0, 2.0, 3.0), 0.625);
        assert_eq!(mesh.num_triangles(), 20);
        for v in mesh.vertices.chunks(3) {
            let p = Point3::new(v[0] as f64, v[1] as f64, v[2] as f64);
            let r = (p - Point3::new(1.0, 2.0, 3.0)).norm();
            assert!((r - 0.625).abs() < 1e-5);
        }
    }

    #[test]
    fn test_disk_lies_in_plane() {
        let mesh = disk_mesh(Point3::new(0.0, 1.0, 0.0), 0.9, Axis::Z);
        for v in mesh.vertices.chunks(3) {
            assert!(v[2].abs() < 1e-6);
        }
        assert_eq!(mesh.num_triangles(), HANDLE_SEGMENTS);
    }

    #[test]
    fn test_guide_line_points() {
        let [a, b] = guide_line_points(Axis::X, Point3::new(1.0, 2.0, 3.0), 2.5).unwrap();
        assert!((a.x + 1.5).abs() < 1e-12);
        assert!((b.x - 3.5).abs() < 1e-12);
        assert!((a.y - 2.0).abs() < 1e-12);
        assert!(guide_line_points(Axis::None, Point3::origin(), 1.0).is_none());
    }

    #[test]
    fn test_plane_quad_vertical_starts_at_ground() {
        let mesh = plane_quad_mesh(Axis::Z, 0.5, 2.5);
        let min_y = mesh
            .vertices
            .chunks(3)
            .map(|v| v[1])
            .fold(f32::MAX, f32::min);
        assert!(min_y.abs() < 1e-6);
        for v in mesh.vertices.chunks(3) {
            assert!((v[2] - 0.5).abs() < 1e-6);
        }
    }
}

//! Orbit camera bookkeeping.
//!
//! The camera accumulates two rotation angles from panning drags and
//! produces the matrices the pick pipeline needs. Matrix construction
//! itself is the standard translate-rotate-perspective composition.

use armature_math::Transform;

/// Scale from raw drag deltas to orbit degrees.
const PAN_SCALE: f64 = 1.0 / 16.0;

/// Accumulate-and-clamp orbit camera.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    x_rotation: f64,
    y_rotation: f64,
    aspect: f64,
}

impl OrbitCamera {
    /// Camera at the default orbit position, looking slightly down.
    pub fn new() -> Self {
        Self {
            x_rotation: 0.0,
            y_rotation: 25.0,
            aspect: 1.0,
        }
    }

    /// Record the viewport size; only the aspect ratio is kept.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.aspect = width / height;
    }

    /// Accumulate a panning drag. The vertical angle is clamped to
    /// [-90, 90] so the camera cannot flip over the poles.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.x_rotation += delta_x * PAN_SCALE;
        self.y_rotation = (self.y_rotation + delta_y * PAN_SCALE).clamp(-90.0, 90.0);
    }

    /// Horizontal orbit angle in degrees.
    pub fn x_rotation(&self) -> f64 {
        self.x_rotation
    }

    /// Vertical orbit angle in degrees.
    pub fn y_rotation(&self) -> f64 {
        self.y_rotation
    }

    /// The view matrix: orbit rotations followed by the fixed offset
    /// that keeps the base in frame.
    pub fn view(&self) -> Transform {
        Transform::translation(0.0, -4.0, -15.0)
            .then(&Transform::rotation_x(self.y_rotation.to_radians()))
            .then(&Transform::rotation_y(self.x_rotation.to_radians()))
    }

    /// The perspective projection (45° vertical field of view).
    pub fn projection(&self) -> Transform {
        Transform::perspective(45.0, self.aspect, 1.0, 100.0)
    }

    /// Projection × view.
    pub fn view_projection(&self) -> Transform {
        self.projection().then(&self.view())
    }

    /// Inverse of projection × view, for unprojection.
    pub fn inverse_view_projection(&self) -> Transform {
        self.view_projection()
            .inverse()
            .expect("translate-rotate-perspective composition is invertible")
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_math::Point3;

    #[test]
    fn test_pan_accumulates() {
        let mut cam = OrbitCamera::new();
        cam.pan(32.0, 16.0);
        assert!((cam.x_rotation() - 2.0).abs() < 1e-12);
        assert!((cam.y_rotation() - 26.0).abs() < 1e-12);
    }

    #[test]
    fn test_pan_clamps_vertical() {
        let mut cam = OrbitCamera::new();
        cam.pan(0.0, 1e6);
        assert!((cam.y_rotation() - 90.0).abs() < 1e-12);
        cam.pan(0.0, -1e7);
        assert!((cam.y_rotation() + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_view_pushes_scene_back() {
        let cam = OrbitCamera::new();
        let p = cam.view().apply_point(&Point3::origin());
        assert!(p.z < 0.0);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let mut cam = OrbitCamera::new();
        cam.set_viewport(1920.0, 1080.0);
        cam.pan(100.0, -40.0);
        let vp = cam.view_projection();
        let inv = cam.inverse_view_projection();
        let p = Point3::new(1.0, 2.0, 3.0);
        let roundtrip = inv.apply_homogeneous(&vp.apply_homogeneous(&p, 1.0), 1.0);
        assert!((roundtrip - p).norm() < 1e-9);
    }
}

//! NDC-to-world ray unprojection.

use armature_math::{Point3, Ray, Transform};

/// Unproject a normalized device coordinate into a world-space ray.
///
/// Picks the clip-space points on the near (z = -1) and far (z = +1)
/// planes, pushes both through the inverse view-projection matrix, and
/// undoes the perspective divide — the w that comes back from an
/// inverse projection is the inverse of the one the forward projection
/// would produce. The ray runs from the near world point toward the
/// far one.
///
/// Always succeeds for an invertible view-projection; a singular
/// matrix gives an undefined ray, which the translate-rotate-perspective
/// camera composition never produces.
pub fn ray_from_ndc(normalized_x: f64, normalized_y: f64, inverse_view_projection: &Transform) -> Ray {
    let near_ndc = Point3::new(normalized_x, normalized_y, -1.0);
    let far_ndc = Point3::new(normalized_x, normalized_y, 1.0);

    let near_world = inverse_view_projection.apply_homogeneous(&near_ndc, 1.0);
    let far_world = inverse_view_projection.apply_homogeneous(&far_ndc, 1.0);

    Ray::between(near_world, far_world)
}

#![warn(missing_docs)]

//! Touch-to-ray-to-pick pipeline for the armature interaction core.
//!
//! Converts normalized device coordinates into world-space rays through
//! the inverse view-projection matrix, and resolves the closest
//! intersected item among all candidates by camera-space depth.

mod unproject;

pub use unproject::ray_from_ndc;

use armature_math::{Point3, Ray, Transform};
use armature_model::{ItemTouch, Model};

/// View-space depth of a world point.
///
/// Applying the view transform and reading the z component ranks
/// candidates by distance to the viewer: the largest (least negative)
/// z is the closest hit.
pub fn camera_depth(view: &Transform, point: &Point3) -> f64 {
    view.apply_point(point).z
}

/// Resolve the closest item hit by `ray` across the whole model.
///
/// Every item resolves its own internal candidates first; this loop
/// repeats the same largest-z comparison across items. The comparison
/// is strictly greater, so the first candidate found at a given depth
/// wins exact ties — acceptable with continuous float coordinates, but
/// order-dependent, which deterministic replay should keep in mind.
///
/// Returns `None` when nothing is hit; the caller falls through to the
/// ground plane.
pub fn pick_item(model: &Model, ray: &Ray, view: &Transform) -> Option<ItemTouch> {
    let mut max_z: Option<f64> = None;
    let mut closest = None;
    for item in model.items() {
        if let Some(touch) = item.find_intersection(ray, view) {
            let z = camera_depth(view, &touch.point);
            if max_z.map_or(true, |m| z > m) {
                max_z = Some(z);
                closest = Some(touch);
            }
        }
    }
    closest
}

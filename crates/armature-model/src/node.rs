//! Junction nodes joining coincident cylinder ends.

use crate::item::{Element, ItemId, ItemKind, ItemTouch};
use armature_math::{distance_to_ray, Plane, Point3, Ray, Transform, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ring-handle radius as a multiple of the node radius.
const RING_RADIUS_FACTOR: f64 = 1.5;

/// A junction where two or more cylinder ends coincide.
///
/// The cylinder-id set starts with the two founding ends and only ever
/// grows; it is never empty and holds no duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: ItemId,
    /// Junction point.
    pub center: Point3,
    /// Marker radius.
    pub radius: f64,
    /// Whether the node is part of the current selection.
    #[serde(default)]
    pub selected: bool,
    /// Transient drag feedback flag, cleared after each drag.
    #[serde(skip)]
    pub highlighted: bool,
    cylinder_ids: BTreeSet<ItemId>,
}

impl Node {
    pub(crate) fn new(id: ItemId, center: Point3, radius: f64, first: ItemId, second: ItemId) -> Self {
        let cylinder_ids = BTreeSet::from([first, second]);
        Self {
            id,
            center,
            radius,
            selected: false,
            highlighted: false,
            cylinder_ids,
        }
    }

    /// This node's id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Ids of the cylinders joined at this node.
    pub fn cylinder_ids(&self) -> &BTreeSet<ItemId> {
        &self.cylinder_ids
    }

    /// Register another cylinder end at this junction.
    pub fn add_cylinder(&mut self, id: ItemId) {
        self.cylinder_ids.insert(id);
    }

    /// Pick radius of the ring handles shown while selected.
    pub fn ring_radius(&self) -> f64 {
        self.radius * RING_RADIUS_FACTOR
    }

    /// Displace the junction point.
    ///
    /// The owning model cascades the same delta to every joined
    /// cylinder end; this call only moves the node itself.
    pub(crate) fn translate(&mut self, delta: Vec3) {
        self.center += delta;
    }

    /// Resolve this node's pick candidates against a ray.
    ///
    /// While selected the node is picked through its three axis rings
    /// (closest by view-space z wins); unselected it is a plain
    /// sphere-distance test against the marker, returning the marker
    /// point nearest the viewer.
    pub fn find_intersection(&self, ray: &Ray, view: &Transform) -> Option<ItemTouch> {
        if self.selected {
            let rings = [
                (Vec3::x(), Element::AxisX),
                (Vec3::y(), Element::AxisY),
                (Vec3::z(), Element::AxisZ),
            ];
            let mut max_z: Option<f64> = None;
            let mut closest = None;
            for (normal, element) in rings {
                let plane = Plane::new(self.center, normal);
                if let Some(point) = plane.intersect_ray(ray) {
                    if (point - self.center).norm() < self.ring_radius() {
                        let z = view.apply_point(&point).z;
                        if max_z.map_or(true, |m| z > m) {
                            max_z = Some(z);
                            closest = Some(ItemTouch {
                                item: self.id,
                                kind: ItemKind::Node,
                                point,
                                element,
                            });
                        }
                    }
                }
            }
            closest
        } else if distance_to_ray(&self.center, ray) < self.radius {
            let toward_viewer = ray.direction.normalize() * self.radius;
            Some(ItemTouch {
                item: self.id,
                kind: ItemKind::Node,
                point: self.center - toward_viewer,
                element: Element::Body,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> Node {
        Node::new(10, Point3::new(1.0, 1.0, 0.0), 0.625, 1, 2)
    }

    fn front_view() -> Transform {
        Transform::translation(0.0, 0.0, -10.0)
    }

    #[test]
    fn test_founding_ids() {
        let n = node();
        assert_eq!(n.cylinder_ids().len(), 2);
        assert!(n.cylinder_ids().contains(&1));
        assert!(n.cylinder_ids().contains(&2));
    }

    #[test]
    fn test_add_cylinder_dedupes() {
        let mut n = node();
        n.add_cylinder(2);
        n.add_cylinder(3);
        assert_eq!(n.cylinder_ids().len(), 3);
    }

    #[test]
    fn test_sphere_pick_unselected() {
        let n = node();
        let ray = Ray::new(Point3::new(1.0, 1.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let touch = n.find_intersection(&ray, &front_view()).unwrap();
        assert_eq!(touch.element, Element::Body);
        // Hit point is the marker point pulled toward the viewer.
        assert!((touch.point.z - n.radius).abs() < 1e-12);
        let miss = Ray::new(Point3::new(3.0, 1.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(n.find_intersection(&miss, &front_view()).is_none());
    }

    #[test]
    fn test_ring_pick_selected() {
        let mut n = node();
        n.selected = true;
        // Past the marker radius but inside the ring radius.
        let ray = Ray::new(Point3::new(1.8, 1.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let touch = n.find_intersection(&ray, &front_view()).unwrap();
        assert_eq!(touch.element, Element::AxisZ);
    }
}

//! Cylindrical bones.

use crate::item::{Element, ItemId, ItemKind, ItemTouch};
use armature_math::{Plane, Point3, Ray, Rectangle, Transform, Vec3};
use serde::{Deserialize, Serialize};

/// Pick-disk radius as a multiple of the cylinder radius.
const HANDLE_RADIUS_FACTOR: f64 = 3.0;

/// A capsule-like bone between two end points.
///
/// Either end may be joined into a junction node, which locks that end
/// against [`Cylinder::change_position`]; only dragging the node itself
/// moves a joined end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cylinder {
    id: ItemId,
    /// Center of the bottom end cap.
    pub bottom_center: Point3,
    /// Center of the top end cap.
    pub top_center: Point3,
    /// Cylinder radius.
    pub radius: f64,
    /// Whether the cylinder is part of the current selection.
    #[serde(default)]
    pub selected: bool,
    top_node: Option<ItemId>,
    bottom_node: Option<ItemId>,
}

impl Cylinder {
    pub(crate) fn new(id: ItemId, bottom_center: Point3, top_center: Point3, radius: f64) -> Self {
        Self {
            id,
            bottom_center,
            top_center,
            radius,
            selected: true,
            top_node: None,
            bottom_node: None,
        }
    }

    /// This cylinder's id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Id of the node joined to the top end, if any.
    pub fn top_node(&self) -> Option<ItemId> {
        self.top_node
    }

    /// Id of the node joined to the bottom end, if any.
    pub fn bottom_node(&self) -> Option<ItemId> {
        self.bottom_node
    }

    /// Node joined to the given end, if any.
    pub fn node_at(&self, top: bool) -> Option<ItemId> {
        if top {
            self.top_node
        } else {
            self.bottom_node
        }
    }

    /// Record that the given end is joined into `node`.
    pub fn set_node(&mut self, node: ItemId, top: bool) {
        if top {
            self.top_node = Some(node);
        } else {
            self.bottom_node = Some(node);
        }
    }

    /// The end point for the given polarity.
    pub fn end(&self, top: bool) -> Point3 {
        if top {
            self.top_center
        } else {
            self.bottom_center
        }
    }

    /// Pick-disk radius for this cylinder's end handles.
    pub fn handle_radius(&self) -> f64 {
        self.radius * HANDLE_RADIUS_FACTOR
    }

    /// Displace the ends by the given offsets.
    ///
    /// A `None` offset leaves that end alone, as does a zero-length
    /// one. An end joined into a node never moves through this call,
    /// whatever the offsets say; the node itself must be dragged.
    pub fn change_position(&mut self, top_offset: Option<Vec3>, bottom_offset: Option<Vec3>) {
        if self.top_node.is_none() {
            if let Some(offset) = top_offset {
                if offset.norm() > 0.0 {
                    self.top_center += offset;
                }
            }
        }
        if self.bottom_node.is_none() {
            if let Some(offset) = bottom_offset {
                if offset.norm() > 0.0 {
                    self.bottom_center += offset;
                }
            }
        }
    }

    /// Displace a joined end while its node is being dragged.
    ///
    /// This is the one path that moves a locked end; it is driven by
    /// the owning model's node cascade, never by direct item moves.
    pub(crate) fn move_joined_end(&mut self, top: bool, delta: Vec3) {
        if top {
            self.top_center += delta;
        } else {
            self.bottom_center += delta;
        }
    }

    /// The two perpendicular silhouette quads used for body picking.
    ///
    /// Each runs along the cylinder between the end centers, widened by
    /// the radius; together they intercept most touches aimed at the
    /// body (very short cylinders present a small target).
    pub fn silhouettes(&self) -> [Rectangle; 2] {
        let (b, t, r) = (self.bottom_center, self.top_center, self.radius);
        let xy = Rectangle::new(
            Point3::new(t.x - r, t.y, t.z),
            Point3::new(b.x - r, b.y, b.z),
            Point3::new(b.x + r, b.y, b.z),
            Point3::new(t.x + r, t.y, t.z),
        );
        let zy = Rectangle::new(
            Point3::new(t.x, t.y, t.z - r),
            Point3::new(b.x, b.y, b.z - r),
            Point3::new(b.x, b.y, b.z + r),
            Point3::new(t.x, t.y, t.z + r),
        );
        [xy, zy]
    }

    /// Handle disks available for picking: one per axis at each end
    /// that is not locked by a node.
    pub fn pickable_handles(&self) -> Vec<(Point3, Vec3, Element)> {
        let mut handles = Vec::with_capacity(6);
        if self.bottom_node.is_none() {
            handles.push((self.bottom_center, Vec3::x(), Element::BottomX));
            handles.push((self.bottom_center, Vec3::y(), Element::BottomY));
            handles.push((self.bottom_center, Vec3::z(), Element::BottomZ));
        }
        if self.top_node.is_none() {
            handles.push((self.top_center, Vec3::x(), Element::TopX));
            handles.push((self.top_center, Vec3::y(), Element::TopY));
            handles.push((self.top_center, Vec3::z(), Element::TopZ));
        }
        handles
    }

    /// Resolve this cylinder's pick candidates against a ray.
    ///
    /// The body silhouettes are always tested; the end handles only
    /// while the cylinder is selected (that is when they are shown).
    /// Among the internal candidates the one with the largest
    /// view-space z (closest to the viewer) wins.
    pub fn find_intersection(&self, ray: &Ray, view: &Transform) -> Option<ItemTouch> {
        let mut candidates: Vec<(Point3, Element)> = Vec::new();

        for rect in self.silhouettes() {
            if let Some(point) = rect.plane.intersect_ray(ray) {
                if rect.contains(&point) {
                    candidates.push((point, Element::Body));
                }
            }
        }

        if self.selected {
            let handle_radius = self.handle_radius();
            for (center, normal, element) in self.pickable_handles() {
                let plane = Plane::new(center, normal);
                if let Some(point) = plane.intersect_ray(ray) {
                    if (point - center).norm() < handle_radius {
                        candidates.push((point, element));
                    }
                }
            }
        }

        let mut max_z: Option<f64> = None;
        let mut closest = None;
        for (point, element) in candidates {
            let z = view.apply_point(&point).z;
            if max_z.map_or(true, |m| z > m) {
                max_z = Some(z);
                closest = Some(ItemTouch {
                    item: self.id,
                    kind: ItemKind::Cylinder,
                    point,
                    element,
                });
            }
        }
        closest
    }
}

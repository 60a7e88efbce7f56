//! The authoritative collection of cylinders and nodes.

use crate::{Cylinder, ItemId, ItemRef, Node};
use armature_math::{Point3, Vec3};
use serde::{Deserialize, Serialize};

/// Owns every cylinder and node and assigns their identities.
///
/// Ids are handed out by a monotonic counter owned by the model, reset
/// only by [`Model::clear`]. Every id referenced by a node's cylinder
/// set or a cylinder's node links must resolve here; a dangling id is
/// a corrupted graph and the lookup methods panic on one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    cylinders: Vec<Cylinder>,
    nodes: Vec<Node>,
    next_id: ItemId,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every item and reset the id counter.
    pub fn clear(&mut self) {
        self.cylinders.clear();
        self.nodes.clear();
        self.next_id = 0;
    }

    fn take_id(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a cylinder between the given end points; returns its id.
    ///
    /// New cylinders arrive selected, matching their creation by a
    /// drag that immediately starts moving them.
    pub fn add_cylinder(&mut self, bottom: Point3, top: Point3, radius: f64) -> ItemId {
        let id = self.take_id();
        self.cylinders.push(Cylinder::new(id, bottom, top, radius));
        id
    }

    /// Add a junction node seeded with two cylinder ids; returns the
    /// node's id.
    pub fn add_node(&mut self, center: Point3, radius: f64, first: ItemId, second: ItemId) -> ItemId {
        let id = self.take_id();
        self.nodes.push(Node::new(id, center, radius, first, second));
        id
    }

    /// All cylinders.
    pub fn cylinders(&self) -> &[Cylinder] {
        &self.cylinders
    }

    /// All cylinders, mutably.
    pub fn cylinders_mut(&mut self) -> &mut [Cylinder] {
        &mut self.cylinders
    }

    /// All nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All nodes, mutably.
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Every item, cylinders first.
    pub fn items(&self) -> impl Iterator<Item = ItemRef<'_>> {
        self.cylinders
            .iter()
            .map(ItemRef::Cylinder)
            .chain(self.nodes.iter().map(ItemRef::Node))
    }

    /// Cylinder lookup; panics on a dangling id.
    pub fn cylinder(&self, id: ItemId) -> &Cylinder {
        self.cylinders
            .iter()
            .find(|c| c.id() == id)
            .unwrap_or_else(|| panic!("dangling cylinder id {id}"))
    }

    /// Mutable cylinder lookup; panics on a dangling id.
    pub fn cylinder_mut(&mut self, id: ItemId) -> &mut Cylinder {
        self.cylinders
            .iter_mut()
            .find(|c| c.id() == id)
            .unwrap_or_else(|| panic!("dangling cylinder id {id}"))
    }

    /// Node lookup; panics on a dangling id.
    pub fn node(&self, id: ItemId) -> &Node {
        self.nodes
            .iter()
            .find(|n| n.id() == id)
            .unwrap_or_else(|| panic!("dangling node id {id}"))
    }

    /// Mutable node lookup; panics on a dangling id.
    pub fn node_mut(&mut self, id: ItemId) -> &mut Node {
        self.nodes
            .iter_mut()
            .find(|n| n.id() == id)
            .unwrap_or_else(|| panic!("dangling node id {id}"))
    }

    /// Selected cylinders.
    pub fn selected_cylinders(&self) -> impl Iterator<Item = &Cylinder> {
        self.cylinders.iter().filter(|c| c.selected)
    }

    /// Selected nodes.
    pub fn selected_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.selected)
    }

    /// The selected item, for the single-selection case.
    ///
    /// Returns the first selected cylinder, else the first selected
    /// node, else `None`.
    pub fn find_selected(&self) -> Option<ItemRef<'_>> {
        self.selected_cylinders()
            .next()
            .map(ItemRef::Cylinder)
            .or_else(|| self.selected_nodes().next().map(ItemRef::Node))
    }

    /// Number of selected items.
    pub fn selection_count(&self) -> usize {
        self.selected_cylinders().count() + self.selected_nodes().count()
    }

    /// Deselect everything.
    pub fn clear_selections(&mut self) {
        for cyl in &mut self.cylinders {
            cyl.selected = false;
        }
        for node in &mut self.nodes {
            node.selected = false;
        }
    }

    /// Clear all transient node highlights.
    pub fn clear_highlights(&mut self) {
        for node in &mut self.nodes {
            node.highlighted = false;
        }
    }

    /// Whether any selected cylinder has the given end joined into a
    /// node. Used to refuse drags that would move a locked end.
    pub fn selection_end_locked(&self, top: bool) -> bool {
        self.selected_cylinders().any(|c| c.node_at(top).is_some())
    }

    /// Displace a node and cascade the same delta to the matching end
    /// of every cylinder joined at it.
    ///
    /// Panics if the node's cylinder set references a missing cylinder
    /// or one that is not actually joined to this node.
    pub fn move_node(&mut self, id: ItemId, delta: Vec3) {
        if delta.norm() == 0.0 {
            return;
        }
        let node_ids: Vec<ItemId> = self.node(id).cylinder_ids().iter().copied().collect();
        self.node_mut(id).translate(delta);
        for cylinder_id in node_ids {
            let cylinder = self.cylinder_mut(cylinder_id);
            let top = match (cylinder.top_node(), cylinder.bottom_node()) {
                (Some(n), _) if n == id => true,
                (_, Some(n)) if n == id => false,
                _ => panic!("cylinder {cylinder_id} not joined to node {id}"),
            };
            cylinder.move_joined_end(top, delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_monotonic() {
        let mut model = Model::new();
        let a = model.add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        let b = model.add_cylinder(Point3::origin(), Point3::new(0.0, 2.0, 0.0), 0.3);
        let n = model.add_node(Point3::origin(), 0.625, a, b);
        assert!(a < b && b < n);
    }

    #[test]
    fn test_clear_resets_ids() {
        let mut model = Model::new();
        let first = model.add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        model.clear();
        let second = model.add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        assert_eq!(first, second);
        assert_eq!(model.cylinders().len(), 1);
    }

    #[test]
    #[should_panic(expected = "dangling cylinder id")]
    fn test_dangling_lookup_panics() {
        let model = Model::new();
        model.cylinder(42);
    }

    #[test]
    fn test_find_selected_prefers_cylinder() {
        let mut model = Model::new();
        let a = model.add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        let b = model.add_cylinder(Point3::origin(), Point3::new(1.0, 1.0, 0.0), 0.3);
        let n = model.add_node(Point3::new(0.0, 1.0, 0.0), 0.625, a, b);
        model.clear_selections();
        model.node_mut(n).selected = true;
        model.cylinder_mut(b).selected = true;
        assert_eq!(model.find_selected().unwrap().id(), b);
    }

    #[test]
    fn test_move_node_cascades() {
        let mut model = Model::new();
        let a = model.add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        let b = model.add_cylinder(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0), 0.3);
        let n = model.add_node(Point3::new(0.0, 1.0, 0.0), 0.625, a, b);
        model.cylinder_mut(a).set_node(n, true);
        model.cylinder_mut(b).set_node(n, true);

        let delta = Vec3::new(0.5, 0.0, 0.0);
        model.move_node(n, delta);

        assert!((model.node(n).center.x - 0.5).abs() < 1e-12);
        assert!((model.cylinder(a).top_center.x - 0.5).abs() < 1e-12);
        assert!((model.cylinder(b).top_center.x - 0.5).abs() < 1e-12);
        // Free ends stay put.
        assert!(model.cylinder(a).bottom_center.x.abs() < 1e-12);
        assert!((model.cylinder(b).bottom_center.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_selection_end_locked() {
        let mut model = Model::new();
        let a = model.add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        let b = model.add_cylinder(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0), 0.3);
        let n = model.add_node(Point3::new(0.0, 1.0, 0.0), 0.625, a, b);
        model.cylinder_mut(a).set_node(n, true);
        assert!(model.selection_end_locked(true));
        assert!(!model.selection_end_locked(false));
        model.clear_selections();
        assert!(!model.selection_end_locked(true));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut model = Model::new();
        let a = model.add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        let b = model.add_cylinder(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0), 0.3);
        let n = model.add_node(Point3::new(0.0, 1.0, 0.0), 0.625, a, b);
        model.cylinder_mut(a).set_node(n, true);
        model.cylinder_mut(b).set_node(n, true);

        let json = serde_json::to_string(&model).unwrap();
        let restored: Model = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.cylinders().len(), 2);
        assert_eq!(restored.nodes().len(), 1);
        assert_eq!(restored.cylinder(a).top_node(), Some(n));
        assert_eq!(restored.node(n).cylinder_ids().len(), 2);
        assert_eq!(
            restored.cylinder(b).bottom_center,
            model.cylinder(b).bottom_center
        );
        // The id counter survives the round trip.
        let mut restored = restored;
        let next = restored.add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        assert_eq!(next, n + 1);
    }
}

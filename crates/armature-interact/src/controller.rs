//! The interaction controller: gesture handling, state transitions,
//! constrained moves, congruency scanning, and node formation.

use crate::{OrbitCamera, SnapMesh};
use armature_math::{Point3, Vec3};
use armature_model::{
    Axis, Congruency, Cylinder, Element, ItemId, ItemKind, ItemRef, ItemTouch, Model,
};
use armature_pick::{pick_item, ray_from_ndc};

/// Default radius for newly extruded cylinders.
pub const DEFAULT_CYLINDER_RADIUS: f64 = 0.3;

/// Radius of junction-node markers.
pub const NODE_RADIUS: f64 = 0.625;

/// Edge length of the square ground base.
pub const BASE_SIZE: f64 = 5.0;

/// Height a cylinder is born with before its first drag-move.
const INITIAL_HEIGHT: f64 = 0.01;

/// The interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing active; the base pulses, waiting for input.
    Select,
    /// Exactly one item selected.
    Single,
    /// One or more items selected via long-press.
    Group,
    /// A camera orbit drag is in progress.
    Panning,
    /// An endpoint or whole-node drag is in progress.
    Move,
}

/// What the most recent touch-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    /// Empty space.
    Nothing,
    /// The ground base within its footprint.
    Base,
    /// A cylinder body or handle.
    Cylinder,
    /// A node marker or ring.
    Node,
}

/// The gesture-scoped record of what a touch-down resolved to.
///
/// Overwritten by every touch-down and consumed by whichever of
/// short-press / drag-start fires next; never read across gestures.
#[derive(Debug, Clone, Copy)]
enum TouchedObject {
    Item(ItemTouch),
    Base(Point3),
}

/// One congruency found between a moving endpoint and another item's
/// endpoint during a drag.
#[derive(Debug, Clone, Copy)]
pub struct CongruencyMatch {
    /// The matched (moving) endpoint.
    pub point: Point3,
    /// The classified relationship.
    pub congruency: Congruency,
    /// Id of the moving cylinder.
    pub from: ItemId,
    /// Whether the match is at the moving cylinder's top end.
    pub from_top: bool,
    /// Id of the matched cylinder, or of the existing node for
    /// [`Congruency::ExistingNode`].
    pub to: ItemId,
    /// Whether the match is at the target cylinder's top end.
    pub to_top: bool,
}

impl CongruencyMatch {
    /// Guide visual derived from this match, if any.
    pub fn guide(&self) -> Option<Guide> {
        let axis = self.congruency.axis();
        if self.congruency.requires_plane() {
            let index = axis.index()?;
            Some(Guide::Plane {
                axis,
                position: self.point[index],
            })
        } else if self.congruency.requires_line() {
            Some(Guide::Line {
                axis,
                through: self.point,
            })
        } else if self.congruency == Congruency::IdenticalPoint {
            Some(Guide::Marker { at: self.point })
        } else {
            None
        }
    }
}

/// Feedback visuals derived 1:1 from the active congruency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guide {
    /// A translucent plane perpendicular to `axis` at `position`.
    Plane {
        /// Normal axis of the guide plane.
        axis: Axis,
        /// Coordinate of the plane along that axis.
        position: f64,
    },
    /// A line along `axis` through `through`.
    Line {
        /// Direction of the guide line.
        axis: Axis,
        /// A point the line passes through.
        through: Point3,
    },
    /// A marker at a pending junction point.
    Marker {
        /// The matched point.
        at: Point3,
    },
}

/// Rendering class for an item under the current selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Not selected.
    Normal,
    /// Selected in single-selection mode.
    Single,
    /// Selected as part of a group.
    Group,
    /// Node flagged as a pending join target during a drag.
    Pending,
}

/// What a long-press resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongPressOutcome {
    /// Nothing happened.
    Ignored,
    /// An item was added to the group selection.
    Selected,
    /// An item was removed from the group selection.
    Deselected,
    /// A destructive model clear was requested and awaits
    /// [`Controller::clear_model`] from the shell.
    ClearRequested,
    /// The model was cleared (confirmation disabled).
    Cleared,
}

/// Controller policy knobs.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// When true (the default), a long-press on empty space only
    /// requests a model clear and the shell must confirm it. The
    /// unconfirmed immediate clear is the historical behavior.
    pub confirm_clear: bool,
    /// Radius for newly extruded cylinders.
    pub cylinder_radius: f64,
    /// Radius for junction-node markers.
    pub node_radius: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            confirm_clear: true,
            cylinder_radius: DEFAULT_CYLINDER_RADIUS,
            node_radius: NODE_RADIUS,
        }
    }
}

/// The interaction controller.
///
/// Owns the model, the orbit camera, and all gesture-scoped drag
/// state. The caller feeds it normalized device coordinates and
/// already-classified gestures (tap, long-press, drag start/move/end),
/// serialized onto one thread; every mutation completes before the
/// gesture callback returns.
#[derive(Debug)]
pub struct Controller {
    model: Model,
    camera: OrbitCamera,
    state: State,
    pre_drag_state: State,
    next_plane: Axis,
    base: SnapMesh,
    mesh: Option<SnapMesh>,
    previous_mesh_point: Option<Point3>,
    snap_handle: Option<Point3>,
    touched: Option<TouchedObject>,
    previous_touch: TouchKind,
    congruencies: Vec<CongruencyMatch>,
    config: ControllerConfig,
}

impl Controller {
    /// Controller over an empty model with default policy.
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    /// Controller over an empty model with the given policy.
    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            model: Model::new(),
            camera: OrbitCamera::new(),
            state: State::Select,
            pre_drag_state: State::Select,
            next_plane: Axis::None,
            base: SnapMesh::new(BASE_SIZE / 2.0, Axis::Y, 0.0),
            mesh: None,
            previous_mesh_point: None,
            snap_handle: None,
            touched: None,
            previous_touch: TouchKind::Nothing,
            congruencies: Vec::new(),
            config,
        }
    }

    /// Controller resuming an existing model.
    pub fn with_model(model: Model) -> Self {
        let mut controller = Self::new();
        controller.model = model;
        controller
    }

    /// The model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The orbit camera.
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Record the viewport size for projection.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.camera.set_viewport(width, height);
    }

    /// Current interaction state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The state a finished drag will restore.
    pub fn pre_drag_state(&self) -> State {
        self.pre_drag_state
    }

    /// The axis constraining the next move.
    pub fn active_axis(&self) -> Axis {
        self.next_plane
    }

    /// The snap mesh of the drag in progress, if any.
    pub fn snap_mesh(&self) -> Option<&SnapMesh> {
        self.mesh.as_ref()
    }

    /// Congruencies found by the current drag step.
    pub fn congruencies(&self) -> &[CongruencyMatch] {
        &self.congruencies
    }

    /// Guide visuals for the current congruency list.
    pub fn guides(&self) -> Vec<Guide> {
        self.congruencies.iter().filter_map(CongruencyMatch::guide).collect()
    }

    /// Base pulse phase in [0, 1] at `elapsed` seconds: a slow sine
    /// while idle in SELECT, constant otherwise.
    pub fn pulse_phase(&self, elapsed: f64) -> f64 {
        if self.state == State::Select {
            ((elapsed * 3.0).sin() + 1.0) / 2.0
        } else {
            0.5
        }
    }

    /// Rendering class for an item under the current selection state.
    ///
    /// The group palette stays active while panning if the drag began
    /// from a group selection.
    pub fn highlight_for(&self, item: ItemRef<'_>) -> Highlight {
        let group_active = self.state == State::Group
            || (self.state == State::Panning && self.pre_drag_state == State::Group);
        match item {
            ItemRef::Node(n) if n.highlighted => Highlight::Pending,
            _ if item.selected() => {
                if group_active {
                    Highlight::Group
                } else {
                    Highlight::Single
                }
            }
            _ => Highlight::Normal,
        }
    }

    fn item_ref(&self, touch: &ItemTouch) -> ItemRef<'_> {
        match touch.kind {
            ItemKind::Cylinder => ItemRef::Cylinder(self.model.cylinder(touch.item)),
            ItemKind::Node => ItemRef::Node(self.model.node(touch.item)),
        }
    }

    fn item_selected(&self, touch: &ItemTouch) -> bool {
        self.item_ref(touch).selected()
    }

    fn set_item_selected(&mut self, touch: &ItemTouch, selected: bool) {
        match touch.kind {
            ItemKind::Cylinder => self.model.cylinder_mut(touch.item).selected = selected,
            ItemKind::Node => self.model.node_mut(touch.item).selected = selected,
        }
    }

    /// Resolve a touch-down at normalized device coordinates.
    ///
    /// Unprojects to a ray, asks every item for an intersection, keeps
    /// the closest by camera depth, and falls through to the bounded
    /// ground base. The result is recorded for the gesture that
    /// follows and also returned so the caller can give feedback.
    pub fn on_touch_down(&mut self, normalized_x: f64, normalized_y: f64) -> TouchKind {
        let ray = ray_from_ndc(normalized_x, normalized_y, &self.camera.inverse_view_projection());
        let view = self.camera.view();

        self.touched = None;
        if let Some(touch) = pick_item(&self.model, &ray, &view) {
            self.previous_touch = match touch.kind {
                ItemKind::Cylinder => TouchKind::Cylinder,
                ItemKind::Node => TouchKind::Node,
            };
            // Touching a handle switches the active plane to its axis.
            let axis = touch.element.axis();
            if axis != Axis::None {
                self.next_plane = axis;
            }
            self.previous_mesh_point = Some(touch.point);
            self.touched = Some(TouchedObject::Item(touch));
        } else if let Some(base_point) = self.base.intersect(&ray) {
            self.previous_touch = TouchKind::Base;
            self.touched = Some(TouchedObject::Base(base_point));
        } else {
            self.previous_touch = TouchKind::Nothing;
        }
        self.previous_touch
    }

    /// Handle a tap (short press).
    pub fn on_short_press(&mut self, _normalized_x: f64, _normalized_y: f64) {
        match self.previous_touch {
            TouchKind::Cylinder | TouchKind::Node => {
                let Some(TouchedObject::Item(touch)) = self.touched else {
                    return;
                };
                match self.state {
                    State::Single => {
                        let same = self
                            .model
                            .find_selected()
                            .map(|selected| selected.id() == touch.item)
                            .unwrap_or(false);
                        if same {
                            self.next_plane = self.next_plane.next();
                        } else {
                            self.model.clear_selections();
                            self.set_item_selected(&touch, true);
                        }
                    }
                    State::Group => {
                        if self.item_selected(&touch) {
                            self.next_plane = self.next_plane.next();
                        } else {
                            self.set_item_selected(&touch, true);
                        }
                    }
                    State::Select => {
                        self.set_item_selected(&touch, true);
                        self.state = State::Single;
                    }
                    State::Panning | State::Move => {}
                }
            }
            TouchKind::Nothing => {
                self.model.clear_selections();
                self.state = State::Select;
            }
            TouchKind::Base => {}
        }
    }

    /// Handle the start of a drag.
    ///
    /// Decides between MOVE (selected item grabbed on a movable
    /// element), cylinder creation (drag up from the base while idle),
    /// and PANNING (everything else).
    pub fn on_drag_start(&mut self) {
        self.pre_drag_state = self.state;

        match self.touched {
            Some(TouchedObject::Item(touch))
                if self.item_selected(&touch)
                    && self.item_ref(&touch).can_move()
                    && (self.state == State::Single || self.state == State::Group) =>
            {
                match touch.kind {
                    ItemKind::Cylinder => self.start_cylinder_move(&touch),
                    ItemKind::Node => self.start_move(),
                }
            }
            Some(TouchedObject::Base(base_point)) if self.state == State::Select => {
                self.start_cylinder_creation(&base_point);
            }
            _ => {
                self.state = State::Panning;
            }
        }
    }

    fn start_cylinder_move(&mut self, touch: &ItemTouch) {
        // Any selected cylinder joined to a node blocks that end of
        // the whole selection from moving.
        let top_blocked = touch.element.moves_top() && self.model.selection_end_locked(true);
        let bottom_blocked =
            touch.element.moves_bottom() && self.model.selection_end_locked(false);
        if top_blocked || bottom_blocked {
            log::debug!("move refused: selection contains node-locked end");
            self.state = State::Panning;
            return;
        }
        self.start_move();
    }

    /// Enter MOVE with a snap mesh on the active-axis plane through
    /// the touched point.
    fn start_move(&mut self) {
        let Some(reference) = self.previous_mesh_point else {
            self.state = State::Panning;
            return;
        };
        let axis = if self.next_plane == Axis::None {
            Axis::Z
        } else {
            self.next_plane
        };
        let index = axis.index().expect("principal axis");
        let mut mesh = SnapMesh::new(BASE_SIZE / 2.0, axis, reference[index]);
        self.snap_handle = Some(mesh.nearest_snap_point(&reference));
        self.mesh = Some(mesh);
        self.state = State::Move;
    }

    /// A drag up from the base while idle extrudes a new cylinder at
    /// the snapped base point and continues as if its top-Z handle had
    /// been grabbed.
    fn start_cylinder_creation(&mut self, base_point: &Point3) {
        let bottom = self.base.nearest_snap_point(base_point);
        let top = bottom + Vec3::new(0.0, INITIAL_HEIGHT, 0.0);

        self.model.clear_selections();
        let id = self
            .model
            .add_cylinder(bottom, top, self.config.cylinder_radius);
        log::debug!("created cylinder {id} at {bottom:?}");

        self.pre_drag_state = State::Single;
        self.state = State::Move;
        self.next_plane = Axis::Z;
        self.mesh = Some(SnapMesh::new(BASE_SIZE / 2.0, Axis::Z, bottom.z));
        self.snap_handle = Some(bottom);
        self.previous_mesh_point = Some(top);
        self.touched = Some(TouchedObject::Item(ItemTouch {
            item: id,
            kind: ItemKind::Cylinder,
            point: top,
            element: Element::TopZ,
        }));
    }

    /// Handle a drag step.
    ///
    /// While panning, the raw deltas orbit the camera. While moving,
    /// the pointer re-projects onto the snap mesh, snaps to the grid,
    /// and the resulting delta is applied to every selected item's
    /// relevant end(s); cylinder moves then rescan congruencies.
    pub fn on_drag_move(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        normalized_x: f64,
        normalized_y: f64,
    ) {
        match self.state {
            State::Panning => {
                self.camera.pan(delta_x, delta_y);
            }
            State::Move => {
                let ray =
                    ray_from_ndc(normalized_x, normalized_y, &self.camera.inverse_view_projection());
                let Some(mesh) = self.mesh.as_mut() else {
                    return;
                };
                let Some(mesh_point) = mesh.intersect(&ray) else {
                    return;
                };
                let Some(TouchedObject::Item(touch)) = self.touched else {
                    return;
                };
                let Some(snap_handle) = self.snap_handle else {
                    return;
                };

                let new_handle = mesh.nearest_snap_point(&mesh_point);
                let delta = new_handle - snap_handle;
                if delta.norm() > 0.0 {
                    match touch.kind {
                        ItemKind::Cylinder => {
                            let top = touch.element.moves_top().then_some(delta);
                            let bottom = touch.element.moves_bottom().then_some(delta);
                            for cylinder in self.model.cylinders_mut() {
                                if cylinder.selected {
                                    cylinder.change_position(top, bottom);
                                }
                            }
                        }
                        ItemKind::Node => {
                            let ids: Vec<ItemId> =
                                self.model.selected_nodes().map(|n| n.id()).collect();
                            for id in ids {
                                self.model.move_node(id, delta);
                            }
                        }
                    }
                }
                self.snap_handle = Some(new_handle);

                // Node drags do not rescan: settled junctions are not
                // re-matched against the rest of the structure.
                if touch.kind == ItemKind::Cylinder {
                    self.rescan_congruencies(touch.element);
                }
            }
            _ => {}
        }
    }

    /// Rebuild the congruency list for the current drag step.
    fn rescan_congruencies(&mut self, element: Element) {
        self.congruencies.clear();
        self.model.clear_highlights();

        let selected: Vec<ItemId> = self.model.selected_cylinders().map(Cylinder::id).collect();
        let all: Vec<ItemId> = self.model.cylinders().iter().map(Cylinder::id).collect();
        for &moving in &selected {
            for &other in &all {
                if other != moving {
                    self.check_pair(element, moving, other);
                }
            }
        }
    }

    /// Compare the moving end(s) of one cylinder against another
    /// cylinder's ends and append any congruencies found.
    ///
    /// The moving end is always checked against the other cylinder's
    /// opposite-polarity end; its same-polarity end only when the
    /// other cylinder is unselected, since co-moving ends keep their
    /// relationship for the whole drag.
    fn check_pair(&mut self, element: Element, moving_id: ItemId, other_id: ItemId) {
        let moving = self.model.cylinder(moving_id);
        let other = self.model.cylinder(other_id);
        let (moving_top, moving_bottom) = (moving.top_center, moving.bottom_center);
        let (other_top, other_bottom) = (other.top_center, other.bottom_center);
        let other_selected = other.selected;
        let other_nodes = (other.top_node(), other.bottom_node());

        let mut found: Vec<(Point3, Congruency, bool, bool)> = Vec::new();
        if element.moves_top() {
            found.push((
                moving_top,
                Congruency::classify(&moving_top, &other_bottom),
                true,
                false,
            ));
            if !other_selected {
                found.push((
                    moving_top,
                    Congruency::classify(&moving_top, &other_top),
                    true,
                    true,
                ));
            }
        }
        if element.moves_bottom() {
            found.push((
                moving_bottom,
                Congruency::classify(&moving_bottom, &other_top),
                false,
                true,
            ));
            if !other_selected {
                found.push((
                    moving_bottom,
                    Congruency::classify(&moving_bottom, &other_bottom),
                    false,
                    false,
                ));
            }
        }

        for (point, mut congruency, from_top, to_top) in found {
            if congruency == Congruency::None {
                continue;
            }
            let mut to = other_id;
            if congruency == Congruency::IdenticalPoint {
                let node = if to_top { other_nodes.0 } else { other_nodes.1 };
                if let Some(node_id) = node {
                    // Moving onto an end that is already part of a
                    // node joins the node, not the cylinder.
                    congruency = Congruency::ExistingNode;
                    to = node_id;
                    self.model.node_mut(node_id).highlighted = true;
                }
            }
            self.congruencies.push(CongruencyMatch {
                point,
                congruency,
                from: moving_id,
                from_top,
                to,
                to_top,
            });
        }
    }

    /// Handle the end of a drag: drop the snap mesh, restore the
    /// pre-drag state, and crystallize point congruencies into nodes.
    pub fn on_drag_end(&mut self, _normalized_x: f64, _normalized_y: f64) {
        self.mesh = None;
        self.snap_handle = None;
        self.state = self.pre_drag_state;

        for found in &self.congruencies {
            if found.congruency != Congruency::ExistingNode {
                continue;
            }
            self.model.node_mut(found.to).add_cylinder(found.from);
            self.model
                .cylinder_mut(found.from)
                .set_node(found.to, found.from_top);
            log::debug!(
                "joined cylinder {} ({}) to node {}",
                found.from,
                if found.from_top { "top" } else { "bottom" },
                found.to
            );
        }
        for found in &self.congruencies {
            if found.congruency != Congruency::IdenticalPoint {
                continue;
            }
            let node = self
                .model
                .add_node(found.point, self.config.node_radius, found.from, found.to);
            self.model
                .cylinder_mut(found.from)
                .set_node(node, found.from_top);
            self.model
                .cylinder_mut(found.to)
                .set_node(node, found.to_top);
            log::debug!(
                "created node {node} joining cylinders {} and {}",
                found.from,
                found.to
            );
        }

        self.congruencies.clear();
        self.model.clear_highlights();
    }

    /// Handle a long press.
    ///
    /// On an item: toggles group membership (removal only from GROUP).
    /// On empty space: requests a destructive model clear, which the
    /// shell confirms through [`Controller::clear_model`] unless
    /// confirmation is disabled in the config.
    pub fn on_long_press(&mut self) -> LongPressOutcome {
        match self.previous_touch {
            TouchKind::Cylinder | TouchKind::Node => {
                let Some(TouchedObject::Item(touch)) = self.touched else {
                    return LongPressOutcome::Ignored;
                };
                if self.state == State::Group && self.item_selected(&touch) {
                    self.set_item_selected(&touch, false);
                    if self.model.selection_count() == 0 {
                        self.state = State::Select;
                    }
                    LongPressOutcome::Deselected
                } else if matches!(self.state, State::Single | State::Select | State::Group) {
                    self.set_item_selected(&touch, true);
                    self.state = State::Group;
                    LongPressOutcome::Selected
                } else {
                    LongPressOutcome::Ignored
                }
            }
            TouchKind::Nothing => {
                if self.config.confirm_clear {
                    LongPressOutcome::ClearRequested
                } else {
                    self.clear_model();
                    LongPressOutcome::Cleared
                }
            }
            TouchKind::Base => LongPressOutcome::Ignored,
        }
    }

    /// Destroy the whole model and reset the interaction state.
    ///
    /// This is the irreversible action behind
    /// [`LongPressOutcome::ClearRequested`].
    pub fn clear_model(&mut self) {
        log::info!(
            "clearing model ({} cylinders, {} nodes)",
            self.model.cylinders().len(),
            self.model.nodes().len()
        );
        self.model.clear();
        self.congruencies.clear();
        self.mesh = None;
        self.snap_handle = None;
        self.next_plane = Axis::None;
        self.state = State::Select;
        self.pre_drag_state = State::Select;
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = Controller::new();
        assert_eq!(controller.state(), State::Select);
        assert_eq!(controller.active_axis(), Axis::None);
        assert!(controller.model().cylinders().is_empty());
    }

    #[test]
    fn test_pulse_only_while_idle() {
        let mut controller = Controller::new();
        let idle = controller.pulse_phase(0.4);
        assert!(idle > 0.5);
        controller.state = State::Single;
        assert!((controller.pulse_phase(0.4) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut controller = Controller::new();
        controller
            .model
            .add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        controller.previous_touch = TouchKind::Nothing;
        assert_eq!(controller.on_long_press(), LongPressOutcome::ClearRequested);
        assert_eq!(controller.model().cylinders().len(), 1);
        controller.clear_model();
        assert!(controller.model().cylinders().is_empty());
    }

    #[test]
    fn test_unconfirmed_clear_policy() {
        let mut controller = Controller::with_config(ControllerConfig {
            confirm_clear: false,
            ..ControllerConfig::default()
        });
        controller
            .model
            .add_cylinder(Point3::origin(), Point3::new(0.0, 1.0, 0.0), 0.3);
        controller.previous_touch = TouchKind::Nothing;
        assert_eq!(controller.on_long_press(), LongPressOutcome::Cleared);
        assert!(controller.model().cylinders().is_empty());
    }

    #[test]
    fn test_guides_from_congruencies() {
        let mut controller = Controller::new();
        controller.congruencies.push(CongruencyMatch {
            point: Point3::new(1.0, 2.0, 3.0),
            congruency: Congruency::PlaneY,
            from: 0,
            from_top: true,
            to: 1,
            to_top: false,
        });
        controller.congruencies.push(CongruencyMatch {
            point: Point3::new(1.0, 2.0, 3.0),
            congruency: Congruency::IdenticalPoint,
            from: 0,
            from_top: true,
            to: 1,
            to_top: false,
        });
        let guides = controller.guides();
        assert_eq!(guides.len(), 2);
        assert_eq!(
            guides[0],
            Guide::Plane {
                axis: Axis::Y,
                position: 2.0
            }
        );
        assert!(matches!(guides[1], Guide::Marker { .. }));
    }
}

#![warn(missing_docs)]

//! Interaction state machine and constrained-move core for armature.
//!
//! The [`Controller`] is the centerpiece: it turns already-classified
//! touch gestures (tap, long-press, drag start/move/end) at normalized
//! device coordinates into selection changes, camera orbits, snapped
//! endpoint moves, and, on drag release, permanent junction nodes.
//!
//! # Architecture
//!
//! - [`Controller`] - gesture handling, state transitions, congruency
//!   scanning, node formation
//! - [`OrbitCamera`] - accumulate-and-clamp orbit angles and the view
//!   and projection matrices derived from them
//! - [`SnapMesh`] - the bounded, grid-discretized drag plane that
//!   constrains and quantizes endpoint movement
//!
//! All gesture callbacks must be serialized onto one thread; every
//! mutation completes before the callback returns, so a render pass
//! reading the model between callbacks never observes a half-applied
//! move.

mod camera;
mod controller;
mod snap;

pub use camera::OrbitCamera;
pub use controller::{
    CongruencyMatch, Controller, ControllerConfig, Guide, Highlight, LongPressOutcome, State,
    TouchKind, BASE_SIZE, DEFAULT_CYLINDER_RADIUS, NODE_RADIUS,
};
pub use snap::SnapMesh;

#![warn(missing_docs)]

//! Item and model data structures for the armature interaction core.
//!
//! Defines the principal axes, the congruency classifier, the two item
//! kinds (cylinders and junction nodes), and the [`Model`] that owns
//! them and assigns their identities.
//!
//! Items are a closed set, so they are dispatched as a tagged variant
//! ([`ItemRef`]) rather than an open trait hierarchy.

mod axis;
mod congruency;
mod cylinder;
mod item;
mod model;
mod node;

pub use axis::Axis;
pub use congruency::Congruency;
pub use cylinder::Cylinder;
pub use item::{Element, ItemId, ItemKind, ItemRef, ItemTouch};
pub use model::Model;
pub use node::Node;

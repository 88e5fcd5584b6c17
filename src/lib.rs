//! # Lanes Core
//!
//! A two-lane project board: a reactive in-memory store, a component
//! lifecycle for template-based views, and the drag-and-drop protocol that
//! moves projects between the active and finished lanes.
//!
//! Rendering goes through the [`surface::ContentSource`] trait;
//! [`surface::MemoryDocument`] is a headless implementation.

pub mod board;
pub mod component;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod store;
pub mod surface;

// Re-export commonly used types
pub use board::Board;
pub use component::{CreationForm, DragSource, DropState, DropTarget, ItemView, LaneView};
pub use config::BoardConfig;
pub use domain::{
    lane::LaneKind,
    project::{Project, ProjectId, ProjectStatus},
    validation::{validate, Constraints, FieldValue},
};
pub use error::{BoardError, Result};
pub use store::ProjectStore;
pub use surface::{ContentSource, MemoryDocument};

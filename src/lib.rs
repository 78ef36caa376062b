//! Library exports for the sketchboard annotation engine.
//!
//! The engine is layered leaf to root: the shape model and drawing ([`draw`]),
//! undo/redo ([`history`]), the tool state machine ([`input`]) and the editor
//! that owns them and keeps the render buffers current ([`editor`]). Hosts
//! embed an [`Editor`] and feed it pointer gestures.

pub mod config;
pub mod draw;
pub mod editor;
pub mod history;
pub mod input;
pub mod util;

pub use config::Config;
pub use editor::{Editor, EditorEvent};

//! Gridscribe observation-to-text pipeline.
//!
//! Converts one turn's raw game-state observation (fixed-size byte grids
//! from a turn-based terminal game simulator) into a single tagged text
//! document for downstream text agents and loggers. Lossy but faithful:
//! the map view is cropped and dedented, status lines are lifted off the
//! terminal buffer, inventory slots are paired into readable lines.

pub mod errors;
pub mod grid;
pub mod decode;
pub mod observation;
pub mod view;
pub mod status;
pub mod inventory;
pub mod document;

pub use errors::{ScribeError, ScribeResult};
pub use grid::CharGrid;
pub use observation::{FieldArray, Observation};
pub use document::render_document;

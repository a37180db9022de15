//! # CardTray CAM Tools
//!
//! Geometry for laser-cut card storage trays: side walls carrying angled,
//! rounded slots, and the removable divider panels that drop into them.
//!
//! ## Geometry
//!
//! - **Divider Slots**: Slot and straight segment descriptions, the layout generator and the
//!   length normalizer
//! - **Edge Tracer**: Replays a slotted edge onto a turtle-style tracer with drift-free snapping
//! - **Divider Panel**: Divider outlines with tabs and finger notches
//! - **Tray Planner**: Composes a full tray from a [`cardtray_settings::TrayConfig`]
//!
//! ## Supporting Infrastructure
//!
//! - **Path Tracer**: The drawing contract plus a recording tracer and a polyline turtle
//! - **Error**: Configuration and geometry errors

pub mod divider_panel;
pub mod divider_slots;
pub mod edge_tracer;
pub mod error;
pub mod path_tracer;
pub mod tray;

// Re-export commonly used items
pub use divider_panel::{notched_edge_moves, DividerPanelBuilder, DividerPanelParameters};
pub use divider_slots::{
    EdgeSegment, SlotDescription, SlotLayoutGenerator, SlotParameters, SlottedEdge,
    StraightEdgeDescription, TrigCache,
};
pub use edge_tracer::{slot_moves, DividerSlotsEdge};
pub use error::{ParameterError, ParameterResult, SlotLayoutError, SlotLayoutResult};
pub use path_tracer::{Move, PathTracer, PathTurtle, Point, TraceCommand, TraceRecorder};
pub use tray::{DividerVariant, LayoutReport, TrayPlan};

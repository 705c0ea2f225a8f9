//! Chart composition — four stacked panels over a shared position axis.
//!
//! Consumes the aligned series, indicator frame, and geometry collections
//! from `chartlab-core` and emits renderer-agnostic draw ops. This layer
//! owns no computation logic; turning a [`ChartSpec`] into pixels is a
//! drawing backend's job.

pub mod compose;
pub mod ops;

pub use compose::{compose, ChartSpec, Panel, PanelKind, PANEL_WEIGHTS};
pub use ops::{DrawOp, Ink, MarkerGlyph, TextAnchor};

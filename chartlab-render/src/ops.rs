//! Draw instructions — the boundary contract with rendering backends.
//!
//! Coordinates are chart-space: x is the integer position axis (as f64 so
//! half-widths work), y is the panel's own value scale. Backends map these
//! to pixels and pick concrete colors for each [`Ink`].

use serde::{Deserialize, Serialize};

/// Semantic color role; backends choose the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ink {
    /// Bullish sessions and up-crosses.
    Bull,
    /// Bearish sessions and down-crosses.
    Bear,
    /// Envelope band lines.
    Band,
    /// Oscillator curve.
    Oscillator,
    /// MACD line.
    Macd,
    /// Signal line.
    Signal,
    /// Histogram bars.
    Histogram,
    /// Guide lines and shaded guide zones.
    Guide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerGlyph {
    ArrowUp,
    ArrowDown,
    TriangleUp,
    TriangleDown,
}

/// Text placement relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    /// Axis-aligned filled rectangle (candle bodies, volume and histogram
    /// bars, shaded zones).
    Rect {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        ink: Ink,
        alpha: f64,
    },
    /// Single line segment (wicks, envelope pieces, connectors).
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        ink: Ink,
    },
    /// Connected polyline (indicator curves).
    Polyline { points: Vec<(f64, f64)>, ink: Ink },
    /// Horizontal guide across the panel's full width.
    HLine { y: f64, ink: Ink, dashed: bool },
    /// Point marker.
    Marker {
        x: f64,
        y: f64,
        glyph: MarkerGlyph,
        ink: Ink,
    },
    /// Annotation anchored to a point.
    Text {
        x: f64,
        y: f64,
        text: String,
        ink: Ink,
        anchor: TextAnchor,
    },
}

impl DrawOp {
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64, ink: Ink) -> Self {
        DrawOp::Rect {
            x0,
            y0,
            x1,
            y1,
            ink,
            alpha: 1.0,
        }
    }

    pub fn shaded(x0: f64, y0: f64, x1: f64, y1: f64, ink: Ink, alpha: f64) -> Self {
        DrawOp::Rect {
            x0,
            y0,
            x1,
            y1,
            ink,
            alpha,
        }
    }
}

//! Chart geometry — renderer-agnostic primitives derived from the aligned
//! series and indicator frame.
//!
//! Each builder is one pass over its inputs, pure and order-preserving,
//! keyed by the shared integer position axis. The output collection owns
//! its primitives outright; nothing here aliases the frame.

use crate::domain::AlignedSeries;
use crate::frame::IndicatorFrame;
use serde::{Deserialize, Serialize};

/// Candle and volume-bar half-width around the position.
pub const BAR_HALF_WIDTH: f64 = 0.3;
/// Price offset for breakout arrows beyond the close.
pub const BREAKOUT_OFFSET: f64 = 1.0;
/// Target number of axis-label strides.
pub const AXIS_LABEL_SLOTS: usize = 10;
/// Hard ceiling on emitted axis labels.
pub const MAX_AXIS_LABELS: usize = 11;

/// Session coloring: bullish closes at or above the open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Bullish,
    Bearish,
}

/// One candlestick: body rectangle plus high/low wick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub position: usize,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub tone: Tone,
}

impl Candle {
    /// Lower edge of the body rectangle.
    pub fn body_low(&self) -> f64 {
        self.open.min(self.close)
    }

    /// Upper edge of the body rectangle.
    pub fn body_high(&self) -> f64 {
        self.open.max(self.close)
    }
}

/// One volume bar, colored like its session's candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub position: usize,
    pub height: f64,
    pub tone: Tone,
}

/// Envelope piece between two adjacent positions: upper and lower band
/// values at each end, with a vertical closure connector at the right
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeSegment {
    pub start: usize,
    pub end: usize,
    pub upper_start: f64,
    pub upper_end: f64,
    pub lower_start: f64,
    pub lower_end: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakoutSide {
    Above,
    Below,
}

/// A close outside the envelope, flagged at its session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakoutMarker {
    pub position: usize,
    pub price: f64,
    pub side: BreakoutSide,
}

impl BreakoutMarker {
    /// Where to draw the arrow: one price unit beyond the close, on the
    /// breakout side.
    pub fn anchor(&self) -> f64 {
        match self.side {
            BreakoutSide::Above => self.price + BREAKOUT_OFFSET,
            BreakoutSide::Below => self.price - BREAKOUT_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossDirection {
    Up,
    Down,
}

/// A macd/signal crossover, anchored at the macd value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverMarker {
    pub position: usize,
    pub value: f64,
    pub direction: CrossDirection,
}

impl CrossoverMarker {
    pub fn label(&self) -> &'static str {
        match self.direction {
            CrossDirection::Up => "golden cross",
            CrossDirection::Down => "death cross",
        }
    }

    /// Up-crosses label above the point, down-crosses below.
    pub fn label_above(&self) -> bool {
        self.direction == CrossDirection::Up
    }
}

/// Sparse x-axis tick: position plus its formatted session date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub position: usize,
    pub text: String,
}

/// All geometry for one chart, owned by this collection alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub candles: Vec<Candle>,
    pub volume: Vec<VolumeBar>,
    pub envelope: Vec<EnvelopeSegment>,
    pub breakouts: Vec<BreakoutMarker>,
    pub crossovers: Vec<CrossoverMarker>,
    pub labels: Vec<AxisLabel>,
}

/// Run every builder pass over the trimmed series and frame.
pub fn build_geometry(series: &AlignedSeries, frame: &IndicatorFrame) -> ChartGeometry {
    ChartGeometry {
        candles: candles(series),
        volume: volume_bars(series),
        envelope: envelope_segments(frame),
        breakouts: breakout_markers(series, frame),
        crossovers: crossover_markers(frame),
        labels: axis_labels(series),
    }
}

/// One candle per session.
pub fn candles(series: &AlignedSeries) -> Vec<Candle> {
    series
        .iter()
        .enumerate()
        .map(|(position, p)| Candle {
            position,
            open: p.open,
            high: p.high,
            low: p.low,
            close: p.close,
            tone: if p.is_bullish() { Tone::Bullish } else { Tone::Bearish },
        })
        .collect()
}

/// One volume bar per session, tone matching the candle.
pub fn volume_bars(series: &AlignedSeries) -> Vec<VolumeBar> {
    series
        .iter()
        .enumerate()
        .map(|(position, p)| VolumeBar {
            position,
            height: p.volume,
            tone: if p.is_bullish() { Tone::Bullish } else { Tone::Bearish },
        })
        .collect()
}

/// One segment per adjacent position pair, carrying both bands.
pub fn envelope_segments(frame: &IndicatorFrame) -> Vec<EnvelopeSegment> {
    (1..frame.len())
        .map(|i| EnvelopeSegment {
            start: i - 1,
            end: i,
            upper_start: frame.upper[i - 1],
            upper_end: frame.upper[i],
            lower_start: frame.lower[i - 1],
            lower_end: frame.lower[i],
        })
        .collect()
}

/// At most one marker per session: Above when the close clears the upper
/// band, Below when it undercuts the lower band, none in between.
pub fn breakout_markers(series: &AlignedSeries, frame: &IndicatorFrame) -> Vec<BreakoutMarker> {
    series
        .iter()
        .enumerate()
        .filter_map(|(position, p)| {
            let side = if p.close > frame.upper[position] {
                BreakoutSide::Above
            } else if p.close < frame.lower[position] {
                BreakoutSide::Below
            } else {
                return None;
            };
            Some(BreakoutMarker {
                position,
                price: p.close,
                side,
            })
        })
        .collect()
}

/// One marker per flagged crossover position.
pub fn crossover_markers(frame: &IndicatorFrame) -> Vec<CrossoverMarker> {
    (0..frame.len())
        .filter_map(|position| {
            let direction = if frame.cross_up[position] {
                CrossDirection::Up
            } else if frame.cross_down[position] {
                CrossDirection::Down
            } else {
                return None;
            };
            Some(CrossoverMarker {
                position,
                value: frame.macd[position],
                direction,
            })
        })
        .collect()
}

/// Sparse date ticks: stride of roughly a tenth of the axis, bumped where
/// needed so the count never exceeds [`MAX_AXIS_LABELS`].
pub fn axis_labels(series: &AlignedSeries) -> Vec<AxisLabel> {
    let n = series.len();
    if n == 0 {
        return Vec::new();
    }

    let stride = (n / AXIS_LABEL_SLOTS)
        .max(n.div_ceil(MAX_AXIS_LABELS))
        .max(1);

    series
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(position, p)| AxisLabel {
            position,
            text: p.date.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

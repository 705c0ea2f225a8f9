//! Panel layout and draw-op emission.
//!
//! Four stacked panels share the integer position axis: price (candles,
//! envelope, breakout arrows), volume, RSI (with guide zones), and MACD
//! (histogram, both lines, crossover annotations). Heights follow
//! [`PANEL_WEIGHTS`].

use crate::ops::{DrawOp, Ink, MarkerGlyph, TextAnchor};
use chartlab_core::domain::AlignedSeries;
use chartlab_core::frame::IndicatorFrame;
use chartlab_core::geometry::{
    AxisLabel, BreakoutSide, ChartGeometry, CrossDirection, Tone, BAR_HALF_WIDTH,
};
use serde::{Deserialize, Serialize};

/// Height weights for price : volume : RSI : MACD.
pub const PANEL_WEIGHTS: [u32; 4] = [3, 1, 1, 1];

/// RSI guide levels.
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

const Y_PAD_FRACTION: f64 = 0.05;
const GUIDE_ZONE_ALPHA: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelKind {
    Price,
    Volume,
    Rsi,
    Macd,
}

/// One panel: its vertical scale and the ops drawn on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub weight: u32,
    pub y_min: f64,
    pub y_max: f64,
    pub ops: Vec<DrawOp>,
}

/// The composed chart: everything a drawing backend needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    /// Number of positions on the shared x-axis.
    pub positions: usize,
    /// Sparse date ticks, shared by all panels.
    pub x_labels: Vec<AxisLabel>,
    pub panels: Vec<Panel>,
}

/// Lay out the four panels and assign geometry to each.
pub fn compose(
    symbol: &str,
    series: &AlignedSeries,
    frame: &IndicatorFrame,
    geometry: &ChartGeometry,
) -> ChartSpec {
    let n = frame.len();
    ChartSpec {
        title: format!("{symbol} technical analysis"),
        positions: n,
        x_labels: geometry.labels.clone(),
        panels: vec![
            price_panel(series, frame, geometry),
            volume_panel(geometry),
            rsi_panel(frame, n),
            macd_panel(frame, geometry),
        ],
    }
}

fn ink_for(tone: Tone) -> Ink {
    match tone {
        Tone::Bullish => Ink::Bull,
        Tone::Bearish => Ink::Bear,
    }
}

/// Pad a raw value extent by 5%, widening flat extents by a unit so the
/// scale never collapses.
fn padded(min: f64, max: f64) -> (f64, f64) {
    let range = max - min;
    let pad = if range > 0.0 { range * Y_PAD_FRACTION } else { 1.0 };
    (min - pad, max + pad)
}

fn price_panel(
    series: &AlignedSeries,
    frame: &IndicatorFrame,
    geometry: &ChartGeometry,
) -> Panel {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in series {
        lo = lo.min(p.low);
        hi = hi.max(p.high);
    }
    for i in 0..frame.len() {
        lo = lo.min(frame.lower[i]);
        hi = hi.max(frame.upper[i]);
    }
    for b in &geometry.breakouts {
        lo = lo.min(b.anchor());
        hi = hi.max(b.anchor());
    }
    let (y_min, y_max) = padded(lo, hi);

    let mut ops = Vec::new();
    for c in &geometry.candles {
        let x = c.position as f64;
        let ink = ink_for(c.tone);
        ops.push(DrawOp::rect(
            x - BAR_HALF_WIDTH,
            c.body_low(),
            x + BAR_HALF_WIDTH,
            c.body_high(),
            ink,
        ));
        ops.push(DrawOp::Line {
            x0: x,
            y0: c.low,
            x1: x,
            y1: c.high,
            ink,
        });
    }
    for s in &geometry.envelope {
        let (x0, x1) = (s.start as f64, s.end as f64);
        ops.push(DrawOp::Line {
            x0,
            y0: s.upper_start,
            x1,
            y1: s.upper_end,
            ink: Ink::Band,
        });
        ops.push(DrawOp::Line {
            x0,
            y0: s.lower_start,
            x1,
            y1: s.lower_end,
            ink: Ink::Band,
        });
        // Vertical closure at the right endpoint.
        ops.push(DrawOp::Line {
            x0: x1,
            y0: s.lower_end,
            x1,
            y1: s.upper_end,
            ink: Ink::Band,
        });
    }
    for b in &geometry.breakouts {
        let (glyph, ink) = match b.side {
            BreakoutSide::Above => (MarkerGlyph::ArrowUp, Ink::Bull),
            BreakoutSide::Below => (MarkerGlyph::ArrowDown, Ink::Bear),
        };
        ops.push(DrawOp::Marker {
            x: b.position as f64,
            y: b.anchor(),
            glyph,
            ink,
        });
    }

    Panel {
        kind: PanelKind::Price,
        weight: PANEL_WEIGHTS[0],
        y_min,
        y_max,
        ops,
    }
}

fn volume_panel(geometry: &ChartGeometry) -> Panel {
    let max = geometry
        .volume
        .iter()
        .map(|v| v.height)
        .fold(0.0f64, f64::max);
    let (_, y_max) = padded(0.0, max);

    let ops = geometry
        .volume
        .iter()
        .map(|v| {
            let x = v.position as f64;
            DrawOp::rect(
                x - BAR_HALF_WIDTH,
                0.0,
                x + BAR_HALF_WIDTH,
                v.height,
                ink_for(v.tone),
            )
        })
        .collect();

    Panel {
        kind: PanelKind::Volume,
        weight: PANEL_WEIGHTS[1],
        y_min: 0.0,
        y_max,
        ops,
    }
}

fn rsi_panel(frame: &IndicatorFrame, n: usize) -> Panel {
    let x0 = -0.5;
    let x1 = n as f64 - 0.5;

    let mut ops = vec![
        DrawOp::shaded(x0, RSI_OVERBOUGHT, x1, 100.0, Ink::Guide, GUIDE_ZONE_ALPHA),
        DrawOp::shaded(x0, 0.0, x1, RSI_OVERSOLD, Ink::Guide, GUIDE_ZONE_ALPHA),
        DrawOp::HLine {
            y: RSI_OVERBOUGHT,
            ink: Ink::Guide,
            dashed: true,
        },
        DrawOp::HLine {
            y: RSI_OVERSOLD,
            ink: Ink::Guide,
            dashed: true,
        },
    ];
    ops.push(DrawOp::Polyline {
        points: frame
            .rsi
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect(),
        ink: Ink::Oscillator,
    });

    Panel {
        kind: PanelKind::Rsi,
        weight: PANEL_WEIGHTS[2],
        y_min: 0.0,
        y_max: 100.0,
        ops,
    }
}

fn macd_panel(frame: &IndicatorFrame, geometry: &ChartGeometry) -> Panel {
    let mut lo = 0.0f64;
    let mut hi = 0.0f64;
    for i in 0..frame.len() {
        lo = lo.min(frame.macd[i]).min(frame.signal[i]).min(frame.histogram[i]);
        hi = hi.max(frame.macd[i]).max(frame.signal[i]).max(frame.histogram[i]);
    }
    let (y_min, y_max) = padded(lo, hi);

    let mut ops = Vec::new();
    for (i, &h) in frame.histogram.iter().enumerate() {
        let x = i as f64;
        ops.push(DrawOp::rect(
            x - BAR_HALF_WIDTH,
            h.min(0.0),
            x + BAR_HALF_WIDTH,
            h.max(0.0),
            Ink::Histogram,
        ));
    }
    ops.push(DrawOp::Polyline {
        points: frame
            .macd
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect(),
        ink: Ink::Macd,
    });
    ops.push(DrawOp::Polyline {
        points: frame
            .signal
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect(),
        ink: Ink::Signal,
    });

    for m in &geometry.crossovers {
        let x = m.position as f64;
        let (glyph, ink, anchor) = match m.direction {
            CrossDirection::Up => (MarkerGlyph::TriangleUp, Ink::Bull, TextAnchor::Above),
            CrossDirection::Down => (MarkerGlyph::TriangleDown, Ink::Bear, TextAnchor::Below),
        };
        ops.push(DrawOp::Marker {
            x,
            y: m.value,
            glyph,
            ink,
        });
        ops.push(DrawOp::Text {
            x,
            y: m.value,
            text: m.label().to_string(),
            ink,
            anchor,
        });
    }

    Panel {
        kind: PanelKind::Macd,
        weight: PANEL_WEIGHTS[3],
        y_min,
        y_max,
        ops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartlab_core::data::{RawRow, TradingCalendar};
    use chartlab_core::geometry::build_geometry;
    use chartlab_core::{align_sessions, compute_frame};
    use chrono::NaiveDate;

    fn composed(closes: &[f64]) -> (ChartSpec, usize) {
        let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let rows: Vec<RawRow> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let open = if i == 0 { close } else { closes[i - 1] };
                RawRow {
                    date: base + chrono::Duration::days(i as i64),
                    open,
                    high: open.max(close) + 1.0,
                    low: open.min(close) - 1.0,
                    close,
                    volume: 1000.0 + i as f64,
                }
            })
            .collect();
        let calendar = TradingCalendar::from_dates(rows.iter().map(|r| r.date));
        let series = align_sessions(&rows, &calendar, "TEST").unwrap();
        let (trimmed, frame) = compute_frame(&series).unwrap();
        let geometry = build_geometry(&trimmed, &frame);
        let spec = compose("TEST", &trimmed, &frame, &geometry);
        (spec, frame.len())
    }

    fn reversal_closes() -> Vec<f64> {
        let mut closes: Vec<f64> = (0..45).map(|i| 100.0 + i as f64).collect();
        closes.extend((0..45).map(|i| 144.0 - i as f64));
        closes
    }

    #[test]
    fn four_panels_with_expected_weights() {
        let (spec, _) = composed(&reversal_closes());
        assert_eq!(spec.panels.len(), 4);
        let kinds: Vec<PanelKind> = spec.panels.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![PanelKind::Price, PanelKind::Volume, PanelKind::Rsi, PanelKind::Macd]
        );
        let weights: Vec<u32> = spec.panels.iter().map(|p| p.weight).collect();
        assert_eq!(weights, PANEL_WEIGHTS.to_vec());
    }

    #[test]
    fn title_names_the_symbol() {
        let (spec, _) = composed(&reversal_closes());
        assert_eq!(spec.title, "TEST technical analysis");
    }

    #[test]
    fn price_panel_draws_each_candle_once() {
        let (spec, n) = composed(&reversal_closes());
        let price = &spec.panels[0];
        let bodies = price
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .count();
        assert_eq!(bodies, n);
        // One wick per candle plus three envelope lines per segment.
        let lines = price
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count();
        assert_eq!(lines, n + 3 * (n - 1));
    }

    #[test]
    fn rsi_panel_has_guides_and_fixed_scale() {
        let (spec, _) = composed(&reversal_closes());
        let rsi = &spec.panels[2];
        assert_eq!(rsi.y_min, 0.0);
        assert_eq!(rsi.y_max, 100.0);
        let hlines: Vec<f64> = rsi
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::HLine { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(hlines, vec![RSI_OVERBOUGHT, RSI_OVERSOLD]);
    }

    #[test]
    fn macd_panel_annotates_crossovers() {
        let (spec, _) = composed(&reversal_closes());
        let macd = &spec.panels[3];
        let texts: Vec<&str> = macd
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(!texts.is_empty());
        assert!(texts.iter().all(|t| *t == "golden cross" || *t == "death cross"));

        let markers = macd
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Marker { .. }))
            .count();
        assert_eq!(markers, texts.len());
    }

    #[test]
    fn panel_scales_cover_their_ops() {
        let (spec, _) = composed(&reversal_closes());
        for panel in &spec.panels {
            assert!(panel.y_min < panel.y_max);
            for op in &panel.ops {
                match op {
                    DrawOp::Rect { y0, y1, .. } | DrawOp::Line { y0, y1, .. } => {
                        assert!(*y0 >= panel.y_min && *y1 <= panel.y_max);
                    }
                    DrawOp::Polyline { points, .. } => {
                        for (_, y) in points {
                            assert!(*y >= panel.y_min && *y <= panel.y_max);
                        }
                    }
                    DrawOp::HLine { y, .. } | DrawOp::Marker { y, .. } => {
                        assert!(*y >= panel.y_min && *y <= panel.y_max);
                    }
                    DrawOp::Text { .. } => {}
                }
            }
        }
    }

    #[test]
    fn spec_roundtrips_through_json() {
        let (spec, _) = composed(&reversal_closes());
        let json = serde_json::to_string(&spec).unwrap();
        let deser: ChartSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, deser);
    }

    #[test]
    fn x_labels_are_copied_from_geometry() {
        let (spec, n) = composed(&reversal_closes());
        assert!(!spec.x_labels.is_empty());
        assert!(spec.x_labels.len() <= 11);
        assert!(spec.x_labels.iter().all(|l| l.position < n));
    }
}

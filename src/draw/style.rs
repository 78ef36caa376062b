//! Stroke and fill attributes shared by outline shapes.

use super::color::{BLACK, Color};
use serde::{Deserialize, Serialize};

/// End cap for open path ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Corner style where path segments meet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl LineCap {
    fn is_round(&self) -> bool {
        *self == LineCap::Round
    }
}

impl LineJoin {
    fn is_round(&self) -> bool {
        *self == LineJoin::Round
    }
}

/// Dash pattern applied to strokes.
#[derive(Clone, Debug, PartialEq)]
pub struct Dash {
    pub phase: f64,
    pub lengths: Vec<f64>,
}

/// Paint attributes for outline shapes.
///
/// Flattened into each shape's serialized object, so the field names here are
/// the wire names (`strokeColor`, `capStyle`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle {
    /// Outline color; `None` skips the stroke pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    /// Interior color; `None` skips the fill pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "LineCap::is_round")]
    pub cap_style: LineCap,
    #[serde(default, skip_serializing_if = "LineJoin::is_round")]
    pub join_style: LineJoin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_phase: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_lengths: Option<Vec<f64>>,
}

/// Stroke width used when a shape or setting leaves it unspecified.
pub const DEFAULT_STROKE_WIDTH: f64 = 10.0;

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Some(BLACK),
            fill_color: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            cap_style: LineCap::default(),
            join_style: LineJoin::default(),
            dash_phase: None,
            dash_lengths: None,
        }
    }
}

impl StrokeStyle {
    /// Dash pattern, present only when both phase and lengths are set.
    pub fn dash(&self) -> Option<Dash> {
        match (self.dash_phase, &self.dash_lengths) {
            (Some(phase), Some(lengths)) if !lengths.is_empty() => Some(Dash {
                phase,
                lengths: lengths.clone(),
            }),
            _ => None,
        }
    }

    /// Color for the fill pass, ignoring fully transparent fills.
    pub fn visible_fill(&self) -> Option<Color> {
        self.fill_color.filter(|c| !c.is_clear())
    }

    /// Color for the stroke pass, ignoring fully transparent strokes.
    pub fn visible_stroke(&self) -> Option<Color> {
        self.stroke_color.filter(|c| !c.is_clear())
    }
}

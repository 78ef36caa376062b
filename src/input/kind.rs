//! Tool selection.

use super::angle::AngleTool;
use super::pen::PenTool;
use super::selection::SelectionTool;
use super::text::{TextTool, TextToolOptions};
use super::tool::Tool;
use super::two_point::TwoPointTool;
use crate::draw::TwoPointKind;
use crate::util::DEFAULT_VELOCITY_ADJUSTMENT;
use std::fmt;
use std::str::FromStr;

/// The built-in tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Freehand drawing with velocity-thinned width
    Pen,
    /// Freehand stroke that clears pixels
    Eraser,
    Line,
    /// Line with a V head at the end point
    Arrow,
    Rectangle,
    Ellipse,
    /// Regular 3-gon inscribed in the drag square
    Triangle,
    /// Regular 5-gon inscribed in the drag square
    Pentagon,
    Star,
    /// Two arms and the angle between them
    Angle,
    Selection,
    Text,
}

/// Per-tool knobs taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolOptions {
    pub velocity_based_width: bool,
    pub velocity_adjustment: f64,
    pub text: TextToolOptions,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            velocity_based_width: true,
            velocity_adjustment: DEFAULT_VELOCITY_ADJUSTMENT,
            text: TextToolOptions::default(),
        }
    }
}

impl ToolKind {
    pub const ALL: [ToolKind; 12] = [
        ToolKind::Pen,
        ToolKind::Eraser,
        ToolKind::Line,
        ToolKind::Arrow,
        ToolKind::Rectangle,
        ToolKind::Ellipse,
        ToolKind::Triangle,
        ToolKind::Pentagon,
        ToolKind::Star,
        ToolKind::Angle,
        ToolKind::Selection,
        ToolKind::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "Pen",
            ToolKind::Eraser => "Eraser",
            ToolKind::Line => "Line",
            ToolKind::Arrow => "Arrow",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Ellipse => "Ellipse",
            ToolKind::Triangle => "Triangle",
            ToolKind::Pentagon => "Pentagon",
            ToolKind::Star => "Star",
            ToolKind::Angle => "Angle",
            ToolKind::Selection => "Selection",
            ToolKind::Text => "Text",
        }
    }

    /// Builds a fresh tool instance.
    pub fn build(self, options: &ToolOptions) -> Box<dyn Tool> {
        let two_point = |kind| Box::new(TwoPointTool::new(self.name(), kind)) as Box<dyn Tool>;
        match self {
            ToolKind::Pen => Box::new(PenTool::pen(
                options.velocity_based_width,
                options.velocity_adjustment,
            )),
            ToolKind::Eraser => Box::new(PenTool::eraser()),
            ToolKind::Line => two_point(TwoPointKind::Line),
            ToolKind::Arrow => two_point(TwoPointKind::Arrow),
            ToolKind::Rectangle => two_point(TwoPointKind::Rectangle),
            ToolKind::Ellipse => two_point(TwoPointKind::Ellipse),
            ToolKind::Triangle => two_point(TwoPointKind::Ngon(3)),
            ToolKind::Pentagon => two_point(TwoPointKind::Ngon(5)),
            ToolKind::Star => two_point(TwoPointKind::Star),
            ToolKind::Angle => Box::new(AngleTool::new()),
            ToolKind::Selection => Box::new(SelectionTool::new()),
            ToolKind::Text => Box::new(TextTool::new(options.text)),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}

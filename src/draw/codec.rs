//! JSON encoding of drawings and shapes.
//!
//! A drawing is `{ "size": [w, h], "shapes": [...] }`. Every shape object
//! carries a `type` tag next to its own fields:
//!
//! | tag         | variant                                   |
//! |-------------|-------------------------------------------|
//! | `Line`      | line, or arrow with `arrowStyle: "standard"` |
//! | `Rectangle` | rectangle                                 |
//! | `Ellipse`   | ellipse                                   |
//! | `Ngon`      | regular polygon, with `sides`             |
//! | `Star`      | five-pointed star                         |
//! | `Angle`     | three-point angle                         |
//! | `Pen`       | freehand pen or eraser stroke             |
//! | `Text`      | text block                                |
//!
//! Decoding is lenient by default: unknown or malformed entries are logged and
//! skipped. [`DecodeMode::Strict`] turns the first bad entry into an error.

use super::angle::AngleShape;
use super::drawing::Drawing;
use super::pen::PenShape;
use super::shape::{Shape, ShapeId};
use super::text::TextShape;
use super::two_point::{TwoPointKind, TwoPointShape};
use crate::util::Size;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// How decoding treats entries it cannot understand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Skip bad entries and keep going
    #[default]
    Lenient,
    /// Fail on the first bad entry
    Strict,
}

impl DecodeMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        }
    }
}

/// Errors that can occur while decoding a drawing.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed drawing document: {0}")]
    Document(#[source] serde_json::Error),

    #[error("Shape entry {index} has no type tag")]
    MissingType { index: usize },

    #[error("Unknown shape type '{tag}' at index {index}")]
    UnknownShapeType { tag: String, index: usize },

    #[error("Malformed '{tag}' shape at index {index}: {source}")]
    MalformedShape {
        tag: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{tag}' shape at index {index} is invalid: {reason}")]
    InvalidShape {
        tag: String,
        index: usize,
        reason: String,
    },

    #[error("Shape id '{id}' at index {index} is already used by an earlier shape")]
    DuplicateId { id: String, index: usize },
}

#[derive(Serialize, Deserialize)]
struct DrawingDocument {
    size: Size,
    #[serde(default)]
    shapes: Vec<Value>,
}

/// Arrow heads are the only line style.
const ARROW_STYLE_STANDARD: &str = "standard";

/// Encodes one shape as a tagged JSON object.
pub fn encode_shape(shape: &Shape) -> Result<Value, serde_json::Error> {
    let mut value = match shape {
        Shape::TwoPoint(shape) => serde_json::to_value(shape)?,
        Shape::Angle(shape) => serde_json::to_value(shape)?,
        Shape::Pen(shape) => serde_json::to_value(shape)?,
        Shape::Text(shape) => serde_json::to_value(shape)?,
    };
    if let Value::Object(map) = &mut value {
        map.insert("type".into(), Value::from(shape.type_tag()));
        if let Shape::TwoPoint(two_point) = shape {
            match two_point.kind {
                TwoPointKind::Ngon(sides) => {
                    map.insert("sides".into(), Value::from(sides));
                }
                TwoPointKind::Arrow => {
                    map.insert("arrowStyle".into(), Value::from(ARROW_STYLE_STANDARD));
                }
                _ => {}
            }
        }
    }
    Ok(value)
}

/// Encodes a whole drawing.
pub fn encode_drawing(drawing: &Drawing) -> Result<Value, serde_json::Error> {
    let shapes = drawing
        .shapes()
        .iter()
        .map(encode_shape)
        .collect::<Result<Vec<_>, _>>()?;
    serde_json::to_value(DrawingDocument {
        size: drawing.size(),
        shapes,
    })
}

/// Encodes a drawing as pretty-printed JSON text.
pub fn drawing_to_string(drawing: &Drawing) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&encode_drawing(drawing)?)
}

fn from_object<T: serde::de::DeserializeOwned>(
    map: &Map<String, Value>,
    tag: &str,
    index: usize,
) -> Result<T, DecodeError> {
    serde_json::from_value(Value::Object(map.clone())).map_err(|source| {
        DecodeError::MalformedShape {
            tag: tag.to_string(),
            index,
            source,
        }
    })
}

fn two_point(
    map: &Map<String, Value>,
    tag: &str,
    index: usize,
    kind: TwoPointKind,
) -> Result<Shape, DecodeError> {
    let mut shape: TwoPointShape = from_object(map, tag, index)?;
    shape.kind = kind;
    Ok(Shape::TwoPoint(shape))
}

/// Decodes one tagged shape object; `index` is only used in error messages.
pub fn decode_shape(value: &Value, index: usize) -> Result<Shape, DecodeError> {
    let Some(map) = value.as_object() else {
        return Err(DecodeError::MissingType { index });
    };
    let Some(tag) = map.get("type").and_then(Value::as_str) else {
        return Err(DecodeError::MissingType { index });
    };

    match tag {
        "Line" => {
            let kind = match map.get("arrowStyle").and_then(Value::as_str) {
                Some(ARROW_STYLE_STANDARD) => TwoPointKind::Arrow,
                _ => TwoPointKind::Line,
            };
            two_point(map, tag, index, kind)
        }
        "Arrow" => two_point(map, tag, index, TwoPointKind::Arrow),
        "Rectangle" => two_point(map, tag, index, TwoPointKind::Rectangle),
        "Ellipse" => two_point(map, tag, index, TwoPointKind::Ellipse),
        "Star" => two_point(map, tag, index, TwoPointKind::Star),
        "Ngon" => {
            let sides = map
                .get("sides")
                .and_then(Value::as_u64)
                .filter(|sides| *sides >= 3)
                .and_then(|sides| u32::try_from(sides).ok())
                .ok_or_else(|| DecodeError::InvalidShape {
                    tag: tag.to_string(),
                    index,
                    reason: "'sides' must be an integer of at least 3".to_string(),
                })?;
            two_point(map, tag, index, TwoPointKind::Ngon(sides))
        }
        "Angle" => Ok(Shape::Angle(from_object::<AngleShape>(map, tag, index)?)),
        "Pen" => Ok(Shape::Pen(from_object::<PenShape>(map, tag, index)?)),
        "Text" => Ok(Shape::Text(from_object::<TextShape>(map, tag, index)?)),
        other => Err(DecodeError::UnknownShapeType {
            tag: other.to_string(),
            index,
        }),
    }
}

/// Decodes a list of shape objects.
///
/// In lenient mode bad entries are logged and dropped while the rest of the
/// list still decodes. A shape whose id an earlier entry already took counts
/// as a bad entry.
pub fn decode_shapes(values: &[Value], mode: DecodeMode) -> Result<Vec<Shape>, DecodeError> {
    let mut shapes = Vec::with_capacity(values.len());
    let mut seen: HashSet<ShapeId> = HashSet::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let decoded = decode_shape(value, index).and_then(|shape| {
            if seen.insert(shape.id().clone()) {
                Ok(shape)
            } else {
                Err(DecodeError::DuplicateId {
                    id: shape.id().to_string(),
                    index,
                })
            }
        });
        match decoded {
            Ok(shape) => shapes.push(shape),
            Err(err) if mode == DecodeMode::Lenient => warn!("Skipping shape: {err}"),
            Err(err) => return Err(err),
        }
    }
    Ok(shapes)
}

/// Decodes a drawing document from JSON text.
pub fn decode_drawing(json: &str, mode: DecodeMode) -> Result<Drawing, DecodeError> {
    let document: DrawingDocument = serde_json::from_str(json).map_err(DecodeError::Document)?;
    let shapes = decode_shapes(&document.shapes, mode)?;
    Ok(Drawing::with_shapes(document.size, shapes))
}

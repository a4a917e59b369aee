//! Coercion and validation of canvas coordinates coming from clients.
//!
//! The scene editor posts drag-and-drop output, which may arrive as
//! fractional numbers or numeric strings. Override coordinates are only
//! coerced; default positions are additionally bounds-checked.

use serde_json::Value;

use crate::error::CoreError;
use crate::placement::Position;
use crate::types::DbId;

/// Smallest coordinate on the canvas, in percent.
pub const CANVAS_MIN: i32 = 0;

/// Largest coordinate on the canvas, in percent.
pub const CANVAS_MAX: i32 = 100;

/// Coerce a JSON value to an integer coordinate.
///
/// Accepts numbers and numeric strings; fractional values are truncated
/// toward zero (`"12.7"` becomes `12`). Anything else is a field-level
/// validation error naming `field`.
pub fn coerce_coordinate(field: &'static str, value: &Value) -> Result<i32, CoreError> {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let number = raw.filter(|n| n.is_finite()).ok_or_else(|| CoreError::FieldValidation {
        field,
        message: format!("'{value}' is not a number"),
    })?;

    let truncated = number.trunc();
    if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        return Err(CoreError::FieldValidation {
            field,
            message: format!("{number} is out of range"),
        });
    }

    // Range checked above, so the cast cannot saturate.
    Ok(truncated as i32)
}

/// Coerce a JSON value to a record ID.
///
/// Accepts positive integers and strings of digits, since form posts
/// deliver IDs as text.
pub fn coerce_id(field: &'static str, value: &Value) -> Result<DbId, CoreError> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<DbId>().ok(),
        _ => None,
    };
    id.filter(|id| *id > 0).ok_or_else(|| CoreError::FieldValidation {
        field,
        message: format!("'{value}' is not a valid id"),
    })
}

/// Ensure a default position lies on the canvas.
pub fn validate_canvas_position(position: Position) -> Result<(), CoreError> {
    for (field, value) in [("x", position.x), ("y", position.y)] {
        if !(CANVAS_MIN..=CANVAS_MAX).contains(&value) {
            return Err(CoreError::FieldValidation {
                field,
                message: format!("must be between {CANVAS_MIN} and {CANVAS_MAX}, got {value}"),
            });
        }
    }
    Ok(())
}

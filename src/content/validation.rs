//! Range checks for loaded content. Each check resets the offending field to
//! its default and reports what it replaced.

use super::data::MovementDefs;
use crate::sprites::SheetLayout;

/// Largest frame edge accepted from a manifest, in pixels.
pub const MAX_FRAME_EDGE: u32 = 4096;

/// Largest column or row count accepted from a manifest.
pub const MAX_SHEET_CELLS: u32 = 256;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} field '{}' {}; using default",
            self.source_type, self.field, self.message
        )
    }
}

/// Helper macro for resetting a field that fails a check
macro_rules! check_field {
    ($errors:expr, $source_type:expr, $target:expr, $defaults:expr, $field:ident, $ok:expr, $message:expr) => {
        let value = $target.$field;
        if !($ok)(value) {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: stringify!($field),
                message: format!("{} (got {:?})", $message, value),
            });
            $target.$field = $defaults.$field;
        }
    };
}

pub fn validate_movement(defs: &mut MovementDefs) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let defaults = MovementDefs::default();

    check_field!(
        errors,
        "Movement",
        defs,
        defaults,
        speed,
        |v: f32| v.is_finite() && v > 0.0,
        "must be a positive number"
    );
    check_field!(
        errors,
        "Movement",
        defs,
        defaults,
        air_friction,
        |v: f32| (0.0..1.0).contains(&v),
        "must be in [0, 1)"
    );
    check_field!(
        errors,
        "Movement",
        defs,
        defaults,
        repeat_interval,
        |v: f32| v.is_finite() && v > 0.0,
        "must be a positive number of seconds"
    );
    check_field!(
        errors,
        "Movement",
        defs,
        defaults,
        spawn,
        |v: (f32, f32)| v.0.is_finite() && v.1.is_finite(),
        "must be finite"
    );
    check_field!(
        errors,
        "Movement",
        defs,
        defaults,
        body_size,
        |v: (f32, f32)| v.0.is_finite() && v.1.is_finite() && v.0 > 0.0 && v.1 > 0.0,
        "must be positive"
    );

    errors
}

pub fn validate_sheet_layout(layout: &mut SheetLayout) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let defaults = SheetLayout::default();
    let edge_ok = |v: u32| (1..=MAX_FRAME_EDGE).contains(&v);

    check_field!(
        errors,
        "SheetLayout",
        layout,
        defaults,
        frame_width,
        edge_ok,
        "must be between 1 and 4096 pixels"
    );
    check_field!(
        errors,
        "SheetLayout",
        layout,
        defaults,
        frame_height,
        edge_ok,
        "must be between 1 and 4096 pixels"
    );
    check_field!(
        errors,
        "SheetLayout",
        layout,
        defaults,
        columns,
        |v: u32| (1..=MAX_SHEET_CELLS).contains(&v),
        "must be between 1 and 256"
    );
    // Every facing needs its own row.
    check_field!(
        errors,
        "SheetLayout",
        layout,
        defaults,
        rows,
        |v: u32| (4..=MAX_SHEET_CELLS).contains(&v),
        "must have a row per facing"
    );

    errors
}

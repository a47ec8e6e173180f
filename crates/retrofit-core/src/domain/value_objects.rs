//! Domain value objects: ResourceName and Position.
//!
//! Both are pure values with no identity. A `ResourceName` can only be
//! built from a non-blank string, so code holding one never re-validates.

use std::fmt;

use crate::domain::validation::require_non_blank;
use crate::error::RetrofitResult;

// ── ResourceName ─────────────────────────────────────────────────────────────

/// A validated, non-blank resource identifier (sprite name, image path, or
/// text content).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate `value` as the argument called `parameter`.
    pub fn parse(parameter: &'static str, value: &str) -> RetrofitResult<Self> {
        require_non_blank(parameter, value).map(|v| Self(v.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Position ─────────────────────────────────────────────────────────────────

/// Integer screen coordinates as used by the modern API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Floating-point coordinates as expected by the legacy engine.
    ///
    /// Every `i32` is exactly representable as an `f64`.
    pub fn to_legacy(self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Requirement;
    use crate::error::RetrofitError;

    #[test]
    fn resource_name_rejects_blank() {
        let err = ResourceName::parse("path", "  ").unwrap_err();
        assert_eq!(
            err,
            RetrofitError::invalid_argument("path", Requirement::NonBlank)
        );
    }

    #[test]
    fn resource_name_displays_raw_value() {
        let name = ResourceName::parse("name", "enemy_attack").unwrap();
        assert_eq!(name.to_string(), "enemy_attack");
        assert_eq!(name.into_inner(), "enemy_attack");
    }

    #[test]
    fn position_converts_to_legacy_floats() {
        assert_eq!(Position::new(50, 60).to_legacy(), (50.0, 60.0));
        assert_eq!(Position::new(-3, 0).to_legacy(), (-3.0, 0.0));
    }

    #[test]
    fn legacy_conversion_keeps_large_coordinates_exact() {
        assert_eq!(
            Position::new(16_777_217, i32::MAX).to_legacy(),
            (16_777_217.0, 2_147_483_647.0)
        );
        assert_eq!(
            Position::new(i32::MIN, -16_777_217).to_legacy(),
            (-2_147_483_648.0, -16_777_217.0)
        );
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::from((10, 20)).to_string(), "(10, 20)");
    }
}

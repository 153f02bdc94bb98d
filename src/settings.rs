//! Wallpaper settings
//!
//! Persisted as JSON. Missing fields fall back to the defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::AUTUMN_PALETTE;
use crate::sim::{FieldParams, ParticleField};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Everything needed to build a wallpaper field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    #[serde(flatten)]
    pub params: FieldParams,
    /// RNG seed; `None` picks one at startup
    pub seed: Option<u64>,
    /// Glyphs drawn at random for each particle
    pub palette: Vec<String>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            params: FieldParams::default(),
            seed: None,
            palette: AUTUMN_PALETTE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}

impl FieldSettings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject values that would make placement or ticking meaningless
    pub fn validate(&self) -> Result<()> {
        let p = &self.params;

        if !p.size_range.is_valid() {
            return Err(invalid("size_range", "must be finite with min <= max"));
        }
        if p.size_range.min <= 0.0 {
            return Err(invalid("size_range", "sizes must be positive"));
        }
        if !p.speed_range.is_valid() {
            return Err(invalid("speed_range", "must be finite with min <= max"));
        }
        if p.speed_range.min < 0.0 {
            return Err(invalid("speed_range", "speeds must not be negative"));
        }
        if !(p.radius_factor.is_finite() && p.radius_factor > 0.0) {
            return Err(invalid("radius_factor", "must be positive"));
        }
        if !(p.spacing.is_finite() && p.spacing >= 0.0) {
            return Err(invalid("spacing", "must not be negative"));
        }
        if p.max_attempts == 0 {
            return Err(invalid("max_attempts", "must be at least 1"));
        }
        if !(p.shrink_factor > 0.0 && p.shrink_factor <= 1.0) {
            return Err(invalid("shrink_factor", "must be in (0, 1]"));
        }
        if !(p.separation_padding.is_finite() && p.separation_padding >= 0.0) {
            return Err(invalid("separation_padding", "must not be negative"));
        }
        if !(p.tick_interval.is_finite() && p.tick_interval > 0.0) {
            return Err(invalid("tick_interval", "must be positive"));
        }
        if self.palette.is_empty() {
            return Err(invalid("palette", "needs at least one glyph"));
        }

        Ok(())
    }

    /// Build an empty field from these settings
    pub fn build_field(&self, seed: u64) -> ParticleField<String> {
        ParticleField::new(self.params, self.palette.clone(), seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Span;

    #[test]
    fn test_defaults() {
        let s = FieldSettings::default();
        assert_eq!(s.params.target_count, 30);
        assert_eq!(s.params.size_range, Span::new(50.0, 80.0));
        assert_eq!(s.params.speed_range, Span::new(20.0, 50.0));
        assert_eq!(s.params.spacing, SPACING);
        assert_eq!(s.params.max_attempts, 50);
        assert_eq!(s.params.tick_interval, TICK_INTERVAL);
        assert_eq!(s.palette.len(), 5);
        assert!(s.seed.is_none());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "target_count": 12, "palette": ["*"], "seed": 7 }"#;
        let s = FieldSettings::from_json(json).unwrap();
        assert_eq!(s.params.target_count, 12);
        assert_eq!(s.params.size_range, Span::new(MIN_SIZE, MAX_SIZE));
        assert_eq!(s.palette, vec!["*".to_string()]);
        assert_eq!(s.seed, Some(7));
    }

    #[test]
    fn test_nested_range_json() {
        let json = r#"{ "speed_range": { "min": 0.0, "max": 0.0 } }"#;
        let s = FieldSettings::from_json(json).unwrap();
        assert_eq!(s.params.speed_range, Span::fixed(0.0));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let json = r#"{ "size_range": { "min": 90.0, "max": 50.0 } }"#;
        let err = FieldSettings::from_json(json).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "size_range", .. }));
    }

    #[test]
    fn test_rejects_empty_palette() {
        let err = FieldSettings::from_json(r#"{ "palette": [] }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "palette", .. }));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let cases = [
            (r#"{ "tick_interval": 0.0 }"#, "tick_interval"),
            (r#"{ "shrink_factor": 1.5 }"#, "shrink_factor"),
            (r#"{ "max_attempts": 0 }"#, "max_attempts"),
            (r#"{ "spacing": -1.0 }"#, "spacing"),
            (r#"{ "speed_range": { "min": -5.0, "max": 5.0 } }"#, "speed_range"),
        ];
        for (json, expected) in cases {
            match FieldSettings::from_json(json) {
                Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("{json}: expected invalid {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = FieldSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.json");

        let mut s = FieldSettings::default();
        s.seed = Some(1234);
        s.params.target_count = 8;
        s.save(&path).unwrap();

        let loaded = FieldSettings::load(&path).unwrap();
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FieldSettings::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_build_field() {
        let field = FieldSettings::default().build_field(5);
        assert!(field.is_empty());
        assert_eq!(field.seed(), 5);
        assert_eq!(field.params().target_count, TARGET_COUNT);
    }
}

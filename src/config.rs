//! Tuning constants for the demo, optionally overridden by a JSON block in the host page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub hero_width: f64,
    pub hero_height: f64,
    pub hero_start_x: f64,
    /// Spawn y is `canvas_height - hero_start_offset`.
    pub hero_start_offset: f64,
    pub gravity: f64,
    pub run_speed: f64,
    pub climb_speed: f64,
    pub platform_count: u32,
    pub platform_height: f64,
    /// Vertical space between consecutive platforms.
    pub platform_gap: f64,
    /// Platform width is `canvas_width / platform_width_divisor`.
    pub platform_width_divisor: f64,
    pub ladder_width: f64,
    pub hero_color: String,
    pub platform_color: String,
    pub ladder_color: String,
    /// `None` clears the canvas to transparent.
    pub background_color: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hero_width: 50.0,
            hero_height: 50.0,
            hero_start_x: 100.0,
            hero_start_offset: 150.0,
            gravity: 0.5,
            run_speed: 3.0,
            climb_speed: 3.0,
            platform_count: 10,
            platform_height: 10.0,
            platform_gap: 100.0,
            platform_width_divisor: 3.0,
            ladder_width: 50.0,
            hero_color: "#ff0000".into(),
            platform_color: "#8B4513".into(),
            ladder_color: "#555555".into(),
            background_color: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be a finite number greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`{field}` must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("`platform_count` must be at least 1")]
    NoPlatforms,
    #[error("`platform_width_divisor` must be at least 1 (got {0})")]
    DivisorTooSmall(f64),
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Config embedded in the host page. Absent or blank means defaults.
    pub fn from_page(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = match raw.map(str::trim) {
            Some(r) if !r.is_empty() => r,
            _ => return Ok(Self::default()),
        };
        let config = Self::from_json(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("hero_width", self.hero_width),
            ("hero_height", self.hero_height),
            ("gravity", self.gravity),
            ("run_speed", self.run_speed),
            ("climb_speed", self.climb_speed),
            ("platform_height", self.platform_height),
            ("ladder_width", self.ladder_width),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        let finite = [
            ("hero_start_x", self.hero_start_x),
            ("hero_start_offset", self.hero_start_offset),
            ("platform_gap", self.platform_gap),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if self.platform_count == 0 {
            return Err(ConfigError::NoPlatforms);
        }
        if !(self.platform_width_divisor.is_finite() && self.platform_width_divisor >= 1.0) {
            return Err(ConfigError::DivisorTooSmall(self.platform_width_divisor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = GameConfig::from_json(r##"{"gravity": 0.25, "hero_color": "#00ff00"}"##)
            .expect("valid json");
        assert_eq!(cfg.gravity, 0.25);
        assert_eq!(cfg.hero_color, "#00ff00");
        assert_eq!(cfg.platform_count, 10);
        assert_eq!(cfg.ladder_width, 50.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(GameConfig::from_json(r#"{"gravityy": 1.0}"#).is_err());
    }

    #[test]
    fn validation_names_the_field() {
        let cfg = GameConfig {
            run_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                field: "run_speed",
                ..
            })
        ));
        let cfg = GameConfig {
            platform_count: 0,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NoPlatforms)));
        let cfg = GameConfig {
            platform_width_divisor: 0.5,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DivisorTooSmall(d)) if d == 0.5
        ));
        let err = GameConfig {
            gravity: f64::NAN,
            ..GameConfig::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("`gravity`"));
    }

    #[test]
    fn page_config_falls_back_and_reports() {
        assert_eq!(GameConfig::from_page(None).unwrap(), GameConfig::default());
        assert_eq!(
            GameConfig::from_page(Some("  \n ")).unwrap(),
            GameConfig::default()
        );
        let cfg = GameConfig::from_page(Some(r#"{"platform_count": 4}"#)).unwrap();
        assert_eq!(cfg.platform_count, 4);
        assert!(matches!(
            GameConfig::from_page(Some("{not json")),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_page(Some(r#"{"ladder_width": -1}"#)),
            Err(ConfigError::NotPositive {
                field: "ladder_width",
                ..
            })
        ));
    }
}

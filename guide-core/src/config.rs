//! Guidebook configuration.
//!
//! Every field has a default matching the shipped texture sheet, so an
//! empty JSON object is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::atlas::AtlasSize;
use crate::error::GuideError;

/// Tunable sizes and limits of the guidebook screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Pixel size of the chrome texture sheet.
    pub atlas: AtlasSize,
    /// Frame border thickness (without shadow).
    pub border_thickness: i32,
    /// Inner shadow drawn by the frame art.
    pub shadow_thickness: i32,
    /// Width of the line between page and slider.
    pub separator_thickness: i32,
    pub slider_width: i32,
    pub slider_height: i32,
    pub tab_width: i32,
    pub tab_height: i32,
    /// Height of the active tab and the home tab.
    pub full_tab_height: i32,
    /// Maximum number of bookmark tabs.
    pub max_tabs: usize,
    /// Border of button tiles.
    pub tile_border: i32,
    /// Tiling phase of the paper background.
    pub background_phase: (i32, i32),
    /// Page opened by the home button.
    pub main_menu: String,
    /// Outline the visible page area.
    pub debug_wireframe: bool,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            atlas: AtlasSize::default(),
            border_thickness: 16,
            shadow_thickness: 6,
            separator_thickness: 5,
            slider_width: 12,
            slider_height: 15,
            tab_width: 24,
            tab_height: 24,
            full_tab_height: 32,
            max_tabs: 10,
            tile_border: 2,
            background_phase: (7, 8),
            main_menu: String::from("/main_menu.md"),
            debug_wireframe: false,
        }
    }
}

impl GuideConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, GuideError> {
        let config: GuideConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GuideError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded guide config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Frame border plus shadow: the size of the frame's corner art.
    pub fn frame_corner(&self) -> i32 {
        self.border_thickness + self.shadow_thickness
    }

    pub fn validate(&self) -> Result<(), GuideError> {
        if self.atlas.width == 0 || self.atlas.height == 0 {
            return Err(GuideError::InvalidConfig("atlas size must be positive".into()));
        }
        let positive = [
            ("border_thickness", self.border_thickness),
            ("slider_width", self.slider_width),
            ("slider_height", self.slider_height),
            ("tab_width", self.tab_width),
            ("tab_height", self.tab_height),
            ("full_tab_height", self.full_tab_height),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0) {
            return Err(GuideError::InvalidConfig(format!("{name} must be positive, got {value}")));
        }
        let non_negative = [
            ("shadow_thickness", self.shadow_thickness),
            ("separator_thickness", self.separator_thickness),
            ("tile_border", self.tile_border),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| *v < 0) {
            return Err(GuideError::InvalidConfig(format!("{name} must not be negative, got {value}")));
        }
        if self.max_tabs == 0 {
            return Err(GuideError::InvalidConfig("max_tabs must be at least 1".into()));
        }
        if self.main_menu.is_empty() {
            return Err(GuideError::InvalidConfig("main_menu path is empty".into()));
        }
        Ok(())
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = GuideConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_corner(), 22);
        assert_eq!(config.max_tabs, 10);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = GuideConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GuideConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = GuideConfig::from_json_str(r#"{ "max_tabs": 3, "background_phase": [0, 0] }"#).unwrap();
        assert_eq!(config.max_tabs, 3);
        assert_eq!(config.background_phase, (0, 0));
        assert_eq!(config.border_thickness, 16);
    }

    #[test]
    fn test_zero_tabs_rejected() {
        let err = GuideConfig::from_json_str(r#"{ "max_tabs": 0 }"#).unwrap_err();
        assert!(matches!(err, GuideError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_slider_rejected() {
        let err = GuideConfig::from_json_str(r#"{ "slider_height": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("slider_height"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(GuideConfig::from_json_str("{ nope"), Err(GuideError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "debug_wireframe": true }}"#).unwrap();
        let config = GuideConfig::load(file.path()).unwrap();
        assert!(config.debug_wireframe);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GuideConfig::load("/definitely/not/here.json"),
            Err(GuideError::Io(_))
        ));
    }
}

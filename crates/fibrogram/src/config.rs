use serde::Deserialize;

use fibrogram_core::color::{Color, ColorError};

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Style configuration section
    #[serde(default)]
    pub style: StyleConfig,
}

/// Layout configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Pixels per author coordinate unit
    #[serde(default = "default_scale")]
    pub scale: f32,

    /// Whitespace around the figure content, in pixels
    #[serde(default = "default_margin")]
    pub margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            margin: default_margin(),
        }
    }
}

fn default_scale() -> f32 {
    60.0
}

fn default_margin() -> f32 {
    70.0
}

/// Style configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background color for diagrams
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Get the background color from configuration
    /// Returns None if no background color is configured
    pub fn background_color(&self) -> Result<Option<Color>, ColorError> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.layout.scale, 60.0);
        assert_eq!(config.layout.margin, 70.0);
    }

    #[test]
    fn test_background_color_absent() {
        let config = StyleConfig::default();
        assert!(config.background_color().unwrap().is_none());
    }

    #[test]
    fn test_background_color_parses() {
        let config: StyleConfig = style_with_background("white");
        let color = config.background_color().unwrap();
        assert_eq!(color.unwrap().to_string(), "white");
    }

    #[test]
    fn test_background_color_invalid() {
        let config: StyleConfig = style_with_background("no-such-color");
        assert!(config.background_color().is_err());
    }

    fn style_with_background(color: &str) -> StyleConfig {
        StyleConfig {
            background_color: Some(color.to_string()),
        }
    }
}

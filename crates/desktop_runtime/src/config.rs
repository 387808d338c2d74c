//! Window manager configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    drag::CompactDragPolicy,
    layout::{LayoutCaps, LayoutEngine},
    placement::{PlacementConfig, PlacementKind},
};

const DEFAULT_CONFIG_TOML: &str = include_str!("../desktop.toml");

#[derive(Debug, Error)]
/// Errors raised while loading [`DesktopConfig`].
pub enum ConfigError {
    /// The document is not valid TOML or does not match the schema.
    #[error("failed to parse desktop config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("invalid desktop config value `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialViewport {
    pub width: f64,
    pub height: f64,
}

impl Default for InitialViewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub compact_policy: CompactDragPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub top_bar_height: f64,
    pub compact_breakpoint: f64,
    pub initial_viewport: InitialViewport,
    pub layout: LayoutEngine,
    pub drag: DragConfig,
    pub placement: PlacementConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            top_bar_height: 32.0,
            compact_breakpoint: 768.0,
            initial_viewport: InitialViewport::default(),
            layout: LayoutEngine::default(),
            drag: DragConfig::default(),
            placement: PlacementConfig::default(),
        }
    }
}

impl DesktopConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration bundled with the crate.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_CONFIG_TOML)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.top_bar_height.is_finite() || self.top_bar_height < 0.0 {
            return Err(ConfigError::Invalid {
                field: "top_bar_height",
                reason: format!("must be a non-negative number, got {}", self.top_bar_height),
            });
        }
        if !self.compact_breakpoint.is_finite() || self.compact_breakpoint <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "compact_breakpoint",
                reason: format!("must be positive, got {}", self.compact_breakpoint),
            });
        }
        validate_caps("layout.regular", self.layout.regular)?;
        validate_caps("layout.compact", self.layout.compact)?;
        if self.placement.strategy == PlacementKind::Cascade
            && (!self.placement.cascade_step.is_finite() || self.placement.cascade_step <= 0.0)
        {
            return Err(ConfigError::Invalid {
                field: "placement.cascade_step",
                reason: format!("must be positive, got {}", self.placement.cascade_step),
            });
        }
        Ok(())
    }
}

fn validate_caps(field: &'static str, caps: LayoutCaps) -> Result<(), ConfigError> {
    let in_range = |value: f64| value > 0.0 && value <= 1.0;
    if in_range(caps.width_fraction) && in_range(caps.height_fraction) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!(
                "fractions must be in (0, 1], got width {} height {}",
                caps.width_fraction, caps.height_fraction
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        let config = DesktopConfig::load_default().expect("bundled config parses");
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn partial_documents_fall_back_to_defaults() {
        let config = DesktopConfig::from_toml_str(
            r#"
            top_bar_height = 40

            [drag]
            compact_policy = "disabled"

            [placement]
            strategy = "randomized"
            seed = 42
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.top_bar_height, 40.0);
        assert_eq!(config.drag.compact_policy, CompactDragPolicy::Disabled);
        assert_eq!(config.placement.strategy, PlacementKind::Randomized);
        assert_eq!(config.placement.seed, Some(42));
        assert_eq!(config.layout, LayoutEngine::default());
        assert_eq!(config.compact_breakpoint, 768.0);
    }

    #[test]
    fn out_of_range_fractions_are_rejected() {
        let err = DesktopConfig::from_toml_str(
            r#"
            [layout.compact]
            width_fraction = 1.5
            height_fraction = 0.8
            "#,
        )
        .expect_err("fraction above one");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "layout.compact",
                ..
            }
        ));
    }

    #[test]
    fn malformed_documents_surface_parse_errors() {
        let err = DesktopConfig::from_toml_str("top_bar_height = \"tall\"").expect_err("bad type");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

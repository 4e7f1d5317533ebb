// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::Path;

use bagwall_camera::{CameraConfig, TapConfig};
use bagwall_catalog::UnresolvedPolicy;
use bagwall_masonry::MasonryConfig;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Everything tunable about a wall.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```
/// use bagwall_view::WallConfig;
///
/// let config = WallConfig::from_toml_str(r#"
///     [layout]
///     column_count = 6
///
///     [view]
///     seed = 42
///     unresolved = { mode = "placeholder", aspect_ratio = 1.4 }
/// "#).unwrap();
/// assert_eq!(config.layout.column_count, 6);
/// assert_eq!(config.layout.column_gutter, 60.0);
/// assert_eq!(config.view.seed, Some(42));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Masonry geometry.
    pub layout: MasonryConfig,
    /// Camera spring and momentum.
    pub camera: CameraConfig,
    /// Tap recognition thresholds.
    pub tap: TapConfig,
    /// Rendering, hover, fade, and search behavior.
    pub view: ViewConfig,
}

/// Rendering and interaction settings of [`WallView`](crate::WallView).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Distance beyond the display edges within which instances are realized.
    pub visible_margin: f64,
    /// Distance beyond the display edges within which realized visuals are kept.
    pub keep_alive_margin: f64,
    /// Scale of the hovered item once its zoom settles.
    pub hover_scale: f64,
    /// Fraction of the remaining hover zoom covered per frame.
    pub hover_speed: f64,
    /// Distance from rest below which the hover zoom counts as finished.
    pub hover_rest_epsilon: f64,
    /// Alpha added per frame while a rebuilt wall fades in.
    pub fade_step: f64,
    /// Below this fade alpha, placeholder boxes are drawn under the images.
    pub placeholder_alpha: f64,
    /// Quiet time after the last keystroke before a search rebuilds the wall.
    pub search_debounce_ms: u64,
    /// Seed for pool shuffles; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Handling of items whose image size is unknown.
    pub unresolved: UnresolvedPolicy,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            visible_margin: 200.0,
            keep_alive_margin: 400.0,
            hover_scale: 1.04,
            hover_speed: 0.12,
            hover_rest_epsilon: 0.001,
            fade_step: 0.08,
            placeholder_alpha: 0.3,
            search_debounce_ms: 200,
            seed: None,
            unresolved: UnresolvedPolicy::Exclude,
        }
    }
}

impl WallConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "wall config loaded");
        Ok(config)
    }

    /// Checks that the configuration can drive a wall.
    ///
    /// Besides the layout geometry this rejects camera and easing values that
    /// would keep an animation from ever coming to rest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;

        let view = &self.view;
        require(
            non_negative(view.visible_margin),
            "visible_margin must be non-negative",
        )?;
        require(
            non_negative(view.keep_alive_margin) && view.keep_alive_margin >= view.visible_margin,
            "keep_alive_margin must be at least visible_margin",
        )?;
        require(positive(view.fade_step), "fade_step must be positive")?;
        require(
            positive(view.hover_speed) && view.hover_speed <= 1.0,
            "hover_speed must be in (0, 1]",
        )?;
        require(positive(view.hover_scale), "hover_scale must be positive")?;
        require(
            non_negative(view.hover_rest_epsilon),
            "hover_rest_epsilon must be non-negative",
        )?;
        require(
            non_negative(view.placeholder_alpha) && view.placeholder_alpha <= 1.0,
            "placeholder_alpha must be in [0, 1]",
        )?;
        if let UnresolvedPolicy::Placeholder { aspect_ratio } = view.unresolved {
            require(
                positive(aspect_ratio),
                "placeholder aspect_ratio must be positive",
            )?;
        }

        let camera = &self.camera;
        require(
            positive(camera.ease_factor) && camera.ease_factor <= 1.0,
            "camera ease_factor must be in (0, 1]",
        )?;
        require(
            non_negative(camera.friction) && camera.friction < 1.0,
            "camera friction must be in [0, 1)",
        )?;
        require(positive(camera.stop_speed), "camera stop_speed must be positive")?;
        require(
            non_negative(camera.snap_epsilon),
            "camera snap_epsilon must be non-negative",
        )?;
        require(
            non_negative(camera.wheel_multiplier),
            "camera wheel_multiplier must be non-negative",
        )?;
        require(
            camera.reference_frame_ms > 0,
            "camera reference_frame_ms must be positive",
        )?;

        let tap = &self.tap;
        require(
            non_negative(tap.mouse_slop) && non_negative(tap.touch_slop),
            "tap slops must be non-negative",
        )?;
        require(
            non_negative(tap.drag_threshold),
            "tap drag_threshold must be non-negative",
        )?;
        Ok(())
    }
}

fn require(ok: bool, message: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid(message))
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use bagwall_catalog::UnresolvedPolicy;

    use super::WallConfig;
    use crate::ConfigError;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(WallConfig::from_toml_str("").unwrap(), WallConfig::default());
    }

    #[test]
    fn defaults_match_the_reference_wall() {
        let config = WallConfig::default();
        assert_eq!(config.layout.column_count, 10);
        assert_eq!(config.layout.global_period, 2400.0);
        assert_eq!(config.camera.friction, 0.95);
        assert_eq!(config.camera.wheel_multiplier, 1.2);
        assert_eq!(config.tap.max_duration_ms, 300);
        assert_eq!(config.view.search_debounce_ms, 200);
        assert_eq!(config.view.unresolved, UnresolvedPolicy::Exclude);
    }

    #[test]
    fn sections_override_individually() {
        let config = WallConfig::from_toml_str(
            r#"
            [camera]
            friction = 0.9

            [tap]
            touch_slop = 20.0

            [view]
            unresolved = { mode = "placeholder", aspect_ratio = 1.5 }
            "#,
        )
        .unwrap();
        assert_eq!(config.camera.friction, 0.9);
        assert_eq!(config.camera.ease_factor, 0.15);
        assert_eq!(config.tap.touch_slop, 20.0);
        assert_eq!(
            config.view.unresolved,
            UnresolvedPolicy::Placeholder { aspect_ratio: 1.5 }
        );
    }

    #[test]
    fn malformed_toml_is_reported() {
        assert!(matches!(
            WallConfig::from_toml_str("[layout\ncolumn_count = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            WallConfig::from_toml_str("[layout]\ncolumn_count = \"three\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            WallConfig::from_toml_str("[layout]\ncolumn_count = 0"),
            Err(ConfigError::Layout(_))
        ));
        assert!(matches!(
            WallConfig::from_toml_str("[view]\nkeep_alive_margin = 10.0"),
            Err(ConfigError::Invalid(_))
        ));
        for document in [
            "[camera]\nfriction = 1.0",
            "[camera]\nstop_speed = -1.0",
            "[camera]\nstop_speed = 0.0",
            "[camera]\nsnap_epsilon = -0.5",
            "[camera]\nwheel_multiplier = -2.0",
            "[camera]\nreference_frame_ms = 0",
            "[view]\nhover_scale = 0.0",
            "[view]\nhover_rest_epsilon = -0.001",
            "[view]\nplaceholder_alpha = 1.5",
            "[view]\nunresolved = { mode = \"placeholder\", aspect_ratio = -1.0 }",
            "[tap]\ntouch_slop = -3.0",
            "[tap]\ndrag_threshold = -1.0",
        ] {
            assert!(
                matches!(
                    WallConfig::from_toml_str(document),
                    Err(ConfigError::Invalid(_))
                ),
                "accepted {document:?}"
            );
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut config = WallConfig::default();
        config.camera.stop_speed = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = WallConfig::default();
        config.view.hover_scale = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            WallConfig::load("/no/such/bagwall.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}

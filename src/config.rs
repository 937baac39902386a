//! Static presentation options and timing constants.
//!
//! The viewer is constructed with one fixed configuration block: navigator
//! mini-map bottom-right, scroll and pinch zoom gestures, bounded zoom range,
//! and the standard control buttons minus rotation. Call sites never vary it;
//! [`ViewerOptions::default`] is the whole contract.
//!
//! The block serializes (camelCase) into the option object the external
//! viewer consumes, so embedders can hand it across the boundary as JSON:
//!
//! ```
//! use deepzoom_hook::ViewerOptions;
//!
//! let options = ViewerOptions::default();
//! let json = serde_json::to_value(&options).unwrap();
//! assert_eq!(json["navigatorPosition"], "BOTTOM_RIGHT");
//! assert_eq!(json["showRotationControl"], false);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// =============================================================================
// Constants
// =============================================================================

/// Name of the host element attribute carrying the base resource locator.
pub const INFO_URL_ATTRIBUTE: &str = "data-info-url";

/// Fixed wait between attach and viewer construction.
///
/// Long enough for the surrounding layout/animation (typically a modal
/// transition) to finish, so the viewer never measures a zero-sized
/// container.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

/// CDN path the viewer loads its control icons from.
pub const DEFAULT_PREFIX_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/openseadragon/4.1.0/images/";

/// Zoom animation duration in seconds.
pub const DEFAULT_ANIMATION_TIME: f64 = 0.5;

/// Lower zoom bound.
pub const DEFAULT_MIN_ZOOM_LEVEL: f64 = 0.5;

/// Upper zoom bound.
pub const DEFAULT_MAX_ZOOM_LEVEL: f64 = 20.0;

// =============================================================================
// Gesture Settings
// =============================================================================

/// Mouse gesture flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureSettingsMouse {
    /// Zoom with the scroll wheel.
    pub scroll_to_zoom: bool,
}

/// Touch gesture flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureSettingsTouch {
    /// Zoom with a two-finger pinch.
    pub pinch_to_zoom: bool,
}

// =============================================================================
// Navigator Position
// =============================================================================

/// Corner the navigator mini-map docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavigatorPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

// =============================================================================
// Viewer Options
// =============================================================================

/// The fixed presentation configuration passed at viewer construction.
///
/// Field names mirror the external viewer's option object; serialization
/// with serde produces that object directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerOptions {
    /// Asset prefix the control icons are loaded from.
    pub prefix_url: String,

    /// Show the navigator mini-map.
    pub show_navigator: bool,

    /// Corner the navigator docks to.
    pub navigator_position: NavigatorPosition,

    /// Mouse gestures.
    pub gesture_settings_mouse: GestureSettingsMouse,

    /// Touch gestures.
    pub gesture_settings_touch: GestureSettingsTouch,

    /// Zoom animation duration in seconds.
    pub animation_time: f64,

    /// Lower zoom bound.
    pub min_zoom_level: f64,

    /// Upper zoom bound.
    pub max_zoom_level: f64,

    /// Canvas opacity, 1.0 = fully opaque.
    pub opacity: f64,

    /// Show the +/- zoom buttons.
    pub show_zoom_control: bool,

    /// Show the home (reset view) button.
    pub show_home_control: bool,

    /// Show the full-page toggle button.
    pub show_full_page_control: bool,

    /// Show the rotation button.
    pub show_rotation_control: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            prefix_url: DEFAULT_PREFIX_URL.to_string(),
            show_navigator: true,
            navigator_position: NavigatorPosition::BottomRight,
            gesture_settings_mouse: GestureSettingsMouse {
                scroll_to_zoom: true,
            },
            gesture_settings_touch: GestureSettingsTouch {
                pinch_to_zoom: true,
            },
            animation_time: DEFAULT_ANIMATION_TIME,
            min_zoom_level: DEFAULT_MIN_ZOOM_LEVEL,
            max_zoom_level: DEFAULT_MAX_ZOOM_LEVEL,
            opacity: 1.0,
            show_zoom_control: true,
            show_home_control: true,
            show_full_page_control: true,
            show_rotation_control: false,
        }
    }
}

impl ViewerOptions {
    /// Validate the options block.
    ///
    /// The default block always validates; this guards embedders that build
    /// options by hand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_zoom_level <= 0.0 || self.min_zoom_level >= self.max_zoom_level {
            return Err(ConfigError::InvalidZoomBounds {
                min: self.min_zoom_level,
                max: self.max_zoom_level,
            });
        }

        if self.animation_time < 0.0 {
            return Err(ConfigError::InvalidAnimationTime(self.animation_time));
        }

        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::InvalidOpacity(self.opacity));
        }

        if self.prefix_url.is_empty() {
            return Err(ConfigError::EmptyPrefixUrl);
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_validate() {
        assert!(ViewerOptions::default().validate().is_ok());
    }

    #[test]
    fn test_default_block_matches_contract() {
        let options = ViewerOptions::default();

        assert_eq!(options.prefix_url, DEFAULT_PREFIX_URL);
        assert!(options.show_navigator);
        assert_eq!(options.navigator_position, NavigatorPosition::BottomRight);
        assert!(options.gesture_settings_mouse.scroll_to_zoom);
        assert!(options.gesture_settings_touch.pinch_to_zoom);
        assert_eq!(options.animation_time, 0.5);
        assert_eq!(options.min_zoom_level, 0.5);
        assert_eq!(options.max_zoom_level, 20.0);
        assert_eq!(options.opacity, 1.0);
        assert!(options.show_zoom_control);
        assert!(options.show_home_control);
        assert!(options.show_full_page_control);
        assert!(!options.show_rotation_control);
    }

    #[test]
    fn test_invalid_zoom_bounds() {
        let mut options = ViewerOptions::default();
        options.min_zoom_level = 0.0;
        assert!(matches!(
            options.validate(),
            Err(ConfigError::InvalidZoomBounds { .. })
        ));

        let mut options = ViewerOptions::default();
        options.min_zoom_level = 20.0;
        options.max_zoom_level = 0.5;
        assert!(matches!(
            options.validate(),
            Err(ConfigError::InvalidZoomBounds { .. })
        ));
    }

    #[test]
    fn test_negative_animation_time() {
        let mut options = ViewerOptions::default();
        options.animation_time = -0.5;
        assert_eq!(
            options.validate(),
            Err(ConfigError::InvalidAnimationTime(-0.5))
        );
    }

    #[test]
    fn test_invalid_opacity() {
        let mut options = ViewerOptions::default();
        options.opacity = 1.5;
        assert_eq!(options.validate(), Err(ConfigError::InvalidOpacity(1.5)));
    }

    #[test]
    fn test_empty_prefix_url() {
        let mut options = ViewerOptions::default();
        options.prefix_url = String::new();
        assert_eq!(options.validate(), Err(ConfigError::EmptyPrefixUrl));
    }

    #[test]
    fn test_serializes_to_viewer_option_object() {
        let options = ViewerOptions::default();
        let json = serde_json::to_value(&options).unwrap();

        assert_eq!(json["prefixUrl"], DEFAULT_PREFIX_URL);
        assert_eq!(json["showNavigator"], true);
        assert_eq!(json["navigatorPosition"], "BOTTOM_RIGHT");
        assert_eq!(json["gestureSettingsMouse"]["scrollToZoom"], true);
        assert_eq!(json["gestureSettingsTouch"]["pinchToZoom"], true);
        assert_eq!(json["animationTime"], 0.5);
        assert_eq!(json["minZoomLevel"], 0.5);
        assert_eq!(json["maxZoomLevel"], 20.0);
        assert_eq!(json["opacity"], 1.0);
        assert_eq!(json["showZoomControl"], true);
        assert_eq!(json["showHomeControl"], true);
        assert_eq!(json["showFullPageControl"], true);
        assert_eq!(json["showRotationControl"], false);
    }

    #[test]
    fn test_options_round_trip() {
        let options = ViewerOptions::default();
        let json = serde_json::to_string(&options).unwrap();
        let back: ViewerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}

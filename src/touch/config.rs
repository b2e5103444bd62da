use crate::error::ConfigError;

use super::classify::ClassifierParams;

/// Per-interpreter gesture settings.
///
/// Defaults come from `config/gestures.toml`, compiled in by the build script.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Track the `touched` flag used for pressed styling.
    pub feedback_enabled: bool,
    pub swipe_enabled: bool,
    pub swipe_threshold: f32,
    pub tap_max_duration_ms: u64,
    pub tap_max_movement: f32,
    pub long_press_delay_ms: u64,
    /// Per-axis movement that cancels a pending long-press.
    pub long_press_slop: f32,
    /// A fired long-press suppresses swipe as well as tap on release.
    pub long_press_terminal: bool,
    pub prevent_default_touch_move: bool,
}

include!(concat!(env!("OUT_DIR"), "/gesture_config.rs"));

pub fn active_config() -> &'static GestureConfig {
    &GESTURE_CONFIG
}

impl Default for GestureConfig {
    fn default() -> Self {
        *active_config()
    }
}

impl GestureConfig {
    pub fn with_feedback(mut self, enabled: bool) -> Self {
        self.feedback_enabled = enabled;
        self
    }

    pub fn with_swipe(mut self, threshold: f32) -> Self {
        self.swipe_enabled = true;
        self.swipe_threshold = threshold;
        self
    }

    pub fn without_swipe(mut self) -> Self {
        self.swipe_enabled = false;
        self
    }

    pub fn with_long_press_delay(mut self, delay_ms: u64) -> Self {
        self.long_press_delay_ms = delay_ms;
        self
    }

    pub fn with_long_press_terminal(mut self, terminal: bool) -> Self {
        self.long_press_terminal = terminal;
        self
    }

    pub fn with_prevent_default_touch_move(mut self, prevent: bool) -> Self {
        self.prevent_default_touch_move = prevent;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("swipe_threshold", self.swipe_threshold),
            ("tap_max_movement", self.tap_max_movement),
            ("long_press_slop", self.long_press_slop),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveDistance { field, value });
            }
        }
        if self.tap_max_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "tap_max_duration_ms",
            });
        }
        if self.long_press_delay_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "long_press_delay_ms",
            });
        }

        if self.swipe_enabled && self.tap_max_movement > self.swipe_threshold {
            log::warn!(
                "tap_max_movement {} exceeds swipe_threshold {}; swipes take precedence",
                self.tap_max_movement,
                self.swipe_threshold
            );
        }
        Ok(())
    }

    pub(crate) fn classifier_params(&self) -> ClassifierParams {
        ClassifierParams {
            swipe_enabled: self.swipe_enabled,
            swipe_threshold: self.swipe_threshold,
            tap_max_duration_ms: self.tap_max_duration_ms,
            tap_max_movement: self.tap_max_movement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_defaults_match_documented_values() {
        let config = GestureConfig::default();

        assert!(config.feedback_enabled);
        assert!(!config.swipe_enabled);
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(config.tap_max_duration_ms, 300);
        assert_eq!(config.tap_max_movement, 10.0);
        assert_eq!(config.long_press_delay_ms, 500);
        assert_eq!(config.long_press_slop, 10.0);
        assert!(config.long_press_terminal);
        assert!(!config.prevent_default_touch_move);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builders_override_fields() {
        let config = GestureConfig::default()
            .with_swipe(80.0)
            .with_feedback(false)
            .with_long_press_delay(650)
            .with_prevent_default_touch_move(true);

        assert!(config.swipe_enabled);
        assert_eq!(config.swipe_threshold, 80.0);
        assert!(!config.feedback_enabled);
        assert_eq!(config.long_press_delay_ms, 650);
        assert!(config.prevent_default_touch_move);
        assert!(!config.without_swipe().swipe_enabled);
    }

    #[test]
    fn validation_rejects_degenerate_values() {
        assert_eq!(
            GestureConfig::default().with_swipe(0.0).validate(),
            Err(ConfigError::NonPositiveDistance {
                field: "swipe_threshold",
                value: 0.0,
            })
        );
        assert!(matches!(
            GestureConfig::default().with_swipe(f32::NAN).validate(),
            Err(ConfigError::NonPositiveDistance {
                field: "swipe_threshold",
                ..
            })
        ));
        assert_eq!(
            GestureConfig::default().with_long_press_delay(0).validate(),
            Err(ConfigError::ZeroDuration {
                field: "long_press_delay_ms",
            })
        );
    }
}

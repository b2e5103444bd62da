use std::{fmt, fs, path::Path};

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GesturesFile {
    pub feedback: FeedbackSection,
    pub swipe: SwipeSection,
    pub tap: TapSection,
    pub long_press: LongPressSection,
    pub touch_move: TouchMoveSection,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FeedbackSection {
    pub enabled: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SwipeSection {
    pub enabled: bool,
    pub threshold: f32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TapSection {
    pub max_duration_ms: u64,
    pub max_movement: f32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LongPressSection {
    pub delay_ms: u64,
    pub slop: f32,
    pub terminal: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TouchMoveSection {
    pub prevent_default: bool,
}

#[derive(Debug)]
pub enum ConfigCompilerError {
    Io(String),
    Parse(String),
    Validation(String),
}

impl fmt::Display for ConfigCompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigCompilerError {}

pub fn parse_gestures_file(path: &Path) -> Result<GesturesFile, ConfigCompilerError> {
    let source = fs::read_to_string(path)
        .map_err(|e| ConfigCompilerError::Io(format!("failed to read {}: {e}", path.display())))?;
    parse_gestures_str(&source)
}

pub fn parse_gestures_str(source: &str) -> Result<GesturesFile, ConfigCompilerError> {
    toml::from_str(source).map_err(|e| ConfigCompilerError::Parse(e.to_string()))
}

pub fn validate_config(config: &GesturesFile) -> Result<(), ConfigCompilerError> {
    let mut problems: Vec<String> = Vec::new();

    for (field, value) in [
        ("swipe.threshold", config.swipe.threshold),
        ("tap.max_movement", config.tap.max_movement),
        ("long_press.slop", config.long_press.slop),
    ] {
        if !value.is_finite() || value <= 0.0 {
            problems.push(format!("{field} must be a positive finite distance"));
        }
    }

    if config.tap.max_duration_ms == 0 {
        problems.push("tap.max_duration_ms must be > 0".to_string());
    }
    if config.long_press.delay_ms == 0 {
        problems.push("long_press.delay_ms must be > 0".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigCompilerError::Validation(problems.join("; ")))
    }
}

pub fn render_generated_config(config: &GesturesFile) -> String {
    let mut out = String::new();
    out.push_str("// @generated by gesture_config_compiler from config/gestures.toml. Do not edit.\n\n");
    out.push_str("pub const GESTURE_CONFIG: GestureConfig = GestureConfig {\n");
    push_field(&mut out, "feedback_enabled", config.feedback.enabled);
    push_field(&mut out, "swipe_enabled", config.swipe.enabled);
    push_field(&mut out, "swipe_threshold", float_literal(config.swipe.threshold));
    push_field(&mut out, "tap_max_duration_ms", config.tap.max_duration_ms);
    push_field(
        &mut out,
        "tap_max_movement",
        float_literal(config.tap.max_movement),
    );
    push_field(&mut out, "long_press_delay_ms", config.long_press.delay_ms);
    push_field(
        &mut out,
        "long_press_slop",
        float_literal(config.long_press.slop),
    );
    push_field(&mut out, "long_press_terminal", config.long_press.terminal);
    push_field(
        &mut out,
        "prevent_default_touch_move",
        config.touch_move.prevent_default,
    );
    out.push_str("};\n");
    out
}

pub fn generate_from_path(path: &Path) -> Result<String, ConfigCompilerError> {
    let config = parse_gestures_file(path)?;
    validate_config(&config)?;
    Ok(render_generated_config(&config))
}

fn push_field(out: &mut String, name: &str, value: impl fmt::Display) {
    out.push_str(&format!("    {name}: {value},\n"));
}

// `{:?}` keeps the decimal point, so the literal stays typed as a float.
fn float_literal(value: f32) -> String {
    format!("{value:?}")
}

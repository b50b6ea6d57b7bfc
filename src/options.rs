use crate::error::{PlanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

pub const MIN_SCENES: u32 = 1;
pub const MAX_SCENES: u32 = 10;
pub const BASELINE_SCENES: u32 = 5;

/// Visual style of the generated video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    #[default]
    Cinematic,
    Realistic,
    Emotional,
    Animated,
    Documentary,
    Surreal,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 6] = [
        VisualStyle::Cinematic,
        VisualStyle::Realistic,
        VisualStyle::Emotional,
        VisualStyle::Animated,
        VisualStyle::Documentary,
        VisualStyle::Surreal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VisualStyle::Cinematic => "cinematic",
            VisualStyle::Realistic => "realistic",
            VisualStyle::Emotional => "emotional",
            VisualStyle::Animated => "animated",
            VisualStyle::Documentary => "documentary",
            VisualStyle::Surreal => "surreal",
        }
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisualStyle {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        VisualStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlanError::InvalidInput(format!("unknown visual style '{}'", wanted)))
    }
}

/// Scene count as it arrives from loosely validated callers: a JSON number
/// (possibly fractional) or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SceneCountInput {
    Number(f64),
    Text(String),
}

impl From<u32> for SceneCountInput {
    fn from(count: u32) -> Self {
        SceneCountInput::Number(count as f64)
    }
}

/// Partial, untrusted options record. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_count: Option<SceneCountInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_voiceover: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_thumbnail: Option<bool>,
}

impl RawOptions {
    /// The options behind the "Sample" shortcut.
    pub fn sample() -> Self {
        Self {
            topic: Some("A lone cyclist racing sunrise through misty city streets".into()),
            mood: Some("energizing".into()),
            tone: Some("reflective".into()),
            visual_style: Some("cinematic".into()),
            atmosphere: Some("neon reflections on wet streets".into()),
            scene_count: Some(SceneCountInput::from(6)),
            include_voiceover: Some(true),
            include_thumbnail: Some(true),
        }
    }

    /// Builds a new record from `self` with every field set in `overrides`
    /// taking precedence.
    pub fn merge(self, overrides: RawOptions) -> RawOptions {
        RawOptions {
            topic: overrides.topic.or(self.topic),
            mood: overrides.mood.or(self.mood),
            tone: overrides.tone.or(self.tone),
            visual_style: overrides.visual_style.or(self.visual_style),
            atmosphere: overrides.atmosphere.or(self.atmosphere),
            scene_count: overrides.scene_count.or(self.scene_count),
            include_voiceover: overrides.include_voiceover.or(self.include_voiceover),
            include_thumbnail: overrides.include_thumbnail.or(self.include_thumbnail),
        }
    }

    /// Fills defaults, clamps the scene count and rejects an empty topic.
    pub fn normalize(self, defaults: &OptionDefaults) -> Result<GenerationOptions> {
        let topic = self
            .topic
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if topic.is_empty() {
            return Err(PlanError::InvalidInput(
                "topic must not be empty".to_string(),
            ));
        }

        let visual_style = match self.visual_style.as_deref().map(str::trim) {
            None | Some("") => defaults.visual_style,
            Some(raw) => raw.parse::<VisualStyle>().unwrap_or_else(|_| {
                warn!(
                    "Unknown visual style '{}', using '{}'",
                    raw, defaults.visual_style
                );
                defaults.visual_style
            }),
        };

        let options = GenerationOptions {
            topic,
            mood: text_or(self.mood, &defaults.mood),
            tone: text_or(self.tone, &defaults.tone),
            visual_style,
            atmosphere: text_or(self.atmosphere, &defaults.atmosphere),
            scene_count: normalize_scene_count(self.scene_count.as_ref(), defaults.scene_count),
            include_voiceover: self.include_voiceover.unwrap_or(false),
            include_thumbnail: self.include_thumbnail.unwrap_or(false),
        };
        debug!(
            "Normalized options: style={}, scenes={}",
            options.visual_style, options.scene_count
        );
        Ok(options)
    }
}

fn text_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => fallback.to_string(),
    }
}

pub fn clamp_scene_count(count: u32) -> u32 {
    count.clamp(MIN_SCENES, MAX_SCENES)
}

/// Rounds fractional counts and clamps to the supported range. Missing or
/// non-numeric input falls back to `fallback` (itself clamped).
pub fn normalize_scene_count(input: Option<&SceneCountInput>, fallback: u32) -> u32 {
    let number = match input {
        Some(SceneCountInput::Number(n)) => Some(*n),
        Some(SceneCountInput::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    };

    match number {
        Some(n) if n.is_finite() => {
            let rounded = n.round().clamp(MIN_SCENES as f64, MAX_SCENES as f64) as u32;
            if rounded as f64 != n {
                warn!("Scene count {} normalized to {}", n, rounded);
            }
            rounded
        }
        _ => clamp_scene_count(fallback),
    }
}

/// Fully populated options consumed by the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub topic: String,
    pub mood: String,
    pub tone: String,
    pub visual_style: VisualStyle,
    pub atmosphere: String,
    pub scene_count: u32,
    #[serde(default)]
    pub include_voiceover: bool,
    #[serde(default)]
    pub include_thumbnail: bool,
}

/// Values used for any field the caller leaves out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDefaults {
    #[serde(default = "default_mood")]
    pub mood: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default)]
    pub visual_style: VisualStyle,
    #[serde(default = "default_atmosphere")]
    pub atmosphere: String,
    #[serde(default = "default_scene_count")]
    pub scene_count: u32,
}

pub(crate) fn default_mood() -> String {
    "inspiring".to_string()
}

pub(crate) fn default_tone() -> String {
    "warm".to_string()
}

pub(crate) fn default_atmosphere() -> String {
    "soft golden-hour haze".to_string()
}

pub(crate) fn default_scene_count() -> u32 {
    BASELINE_SCENES
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            mood: default_mood(),
            tone: default_tone(),
            visual_style: VisualStyle::default(),
            atmosphere: default_atmosphere(),
            scene_count: default_scene_count(),
        }
    }
}

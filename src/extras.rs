use crate::options::GenerationOptions;
use crate::scene::Scene;
use crate::summary::Summary;
use crate::templates::{StoryPhase, StyleTemplate};
use crate::text::capitalize;
use serde::{Deserialize, Serialize};

/// Optional outputs, only built when at least one flag is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover_lines: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_prompt: Option<String>,
}

pub struct ExtrasBuilder;

impl ExtrasBuilder {
    /// Returns `None` when neither extra was requested.
    pub fn build(summary: &Summary, scenes: &[Scene], options: &GenerationOptions) -> Option<Extras> {
        if !options.include_voiceover && !options.include_thumbnail {
            return None;
        }

        let voiceover_lines = options
            .include_voiceover
            .then(|| Self::voiceover_lines(scenes));
        let thumbnail_prompt = if options.include_thumbnail {
            Self::thumbnail_prompt(summary, scenes)
        } else {
            None
        };

        Some(Extras {
            voiceover_lines,
            thumbnail_prompt,
        })
    }

    /// One narration line per scene, in scene order.
    pub fn voiceover_lines(scenes: &[Scene]) -> Vec<String> {
        let count = scenes.len();
        scenes
            .iter()
            .map(|scene| {
                let lead = StoryPhase::for_scene(scene.index, count).narration_lead();
                format!(
                    "{} we {}, carried by {}.",
                    lead,
                    scene.beat().to_lowercase(),
                    scene.atmosphere
                )
            })
            .collect()
    }

    /// The scene with the longest atmosphere text; ties go to the lowest index.
    pub fn poster_scene(scenes: &[Scene]) -> Option<&Scene> {
        scenes.iter().reduce(|best, scene| {
            if scene.atmosphere.chars().count() > best.atmosphere.chars().count() {
                scene
            } else {
                best
            }
        })
    }

    pub fn thumbnail_prompt(summary: &Summary, scenes: &[Scene]) -> Option<String> {
        let scene = Self::poster_scene(scenes)?;
        let style = StyleTemplate::for_style(summary.visual_style);
        Some(format!(
            "{} poster frame for \"{}\": {}. Featuring {}. {}; {}. Mood: {}, tone: {}. Atmosphere: {}. Single striking focal point, {}, high detail, no text overlays.",
            capitalize(summary.visual_style.as_str()),
            summary.title,
            scene.setting,
            scene.characters,
            scene.camera,
            scene.lighting,
            summary.mood,
            summary.tone,
            scene.atmosphere,
            style.palette
        ))
    }
}

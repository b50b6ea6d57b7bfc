use crate::error::{PlanError, Result};
use crate::extras::{Extras, ExtrasBuilder};
use crate::options::{clamp_scene_count, GenerationOptions, OptionDefaults, RawOptions};
use crate::prompt::PromptComposer;
use crate::scene::{Scene, SceneSynthesizer};
use crate::summary::{Summary, SummaryBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete generated output for one set of options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlan {
    pub summary: Summary,
    pub scenes: Vec<Scene>,
    pub final_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

impl VideoPlan {
    /// Payload behind "Copy JSON".
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub struct PlanGenerator;

impl PlanGenerator {
    /// Maps normalized options to a plan. Options built by hand are checked
    /// again here: an empty topic is rejected and the scene count clamped.
    pub fn generate(options: &GenerationOptions) -> Result<VideoPlan> {
        let topic = options.topic.trim();
        if topic.is_empty() {
            return Err(PlanError::InvalidInput(
                "topic must not be empty".to_string(),
            ));
        }

        let options = GenerationOptions {
            topic: topic.to_string(),
            scene_count: clamp_scene_count(options.scene_count),
            ..options.clone()
        };

        let summary = SummaryBuilder::build(&options);
        let scenes = SceneSynthesizer::synthesize(&options);
        let final_prompt = PromptComposer::compose(&summary, &scenes, &options);
        let extras = ExtrasBuilder::build(&summary, &scenes, &options);

        debug!(
            "Generated plan '{}' with {} scenes ({} prompt chars)",
            summary.title,
            scenes.len(),
            final_prompt.len()
        );

        Ok(VideoPlan {
            summary,
            scenes,
            final_prompt,
            extras,
        })
    }

    /// Normalizes a raw record against `defaults`, then generates.
    pub fn generate_raw(raw: RawOptions, defaults: &OptionDefaults) -> Result<VideoPlan> {
        let options = raw.normalize(defaults)?;
        Self::generate(&options)
    }
}

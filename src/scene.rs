use crate::options::{clamp_scene_count, GenerationOptions};
use crate::templates::{
    named_subject, SelectionKey, StoryPhase, StyleTemplate, Table, CAMERA_MOVES,
    LIGHTING_STYLES, SETTING_FRAMES,
};
use crate::text::{capitalize, strip_sentence_end, with_article};
use serde::{Deserialize, Serialize};

/// One unit of the video breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// 1-based position in the plan
    pub index: usize,
    pub setting: String,
    pub characters: String,
    pub camera: String,
    pub lighting: String,
    pub key_actions: String,
    pub atmosphere: String,
}

impl Scene {
    /// Story beat that opens `key_actions`, e.g. "Build momentum".
    pub fn beat(&self) -> &str {
        self.key_actions
            .split_once(':')
            .map(|(beat, _)| beat)
            .unwrap_or(self.key_actions.as_str())
    }
}

pub struct SceneSynthesizer;

impl SceneSynthesizer {
    /// Builds `scene_count` scenes. Table entries are chosen with
    /// `(topic offset + index - 1) % table length`, so the same options always
    /// yield the same sequence.
    pub fn synthesize(options: &GenerationOptions) -> Vec<Scene> {
        let count = clamp_scene_count(options.scene_count) as usize;
        let key = SelectionKey::from_topic(&options.topic);
        let style = StyleTemplate::for_style(options.visual_style);
        let subject = named_subject(&options.topic);

        (1..=count)
            .map(|index| {
                Self::create_scene(options, &key, &style, subject.as_deref(), index, count)
            })
            .collect()
    }

    fn create_scene(
        options: &GenerationOptions,
        key: &SelectionKey,
        style: &StyleTemplate,
        subject: Option<&str>,
        index: usize,
        count: usize,
    ) -> Scene {
        let phase = StoryPhase::for_scene(index, count);
        let topic = &options.topic;

        let setting = format!(
            "{} within the world of \"{}\", steeped in {}",
            key.pick(Table::Setting, &SETTING_FRAMES, index),
            topic,
            options.atmosphere
        );

        let role = key.pick(Table::Role, phase.character_roles(), index);
        let characters = match subject {
            Some(subject) => format!("{}, {}", capitalize(subject), role),
            None => format!("Implied subject from the topic, {}", role),
        };

        let camera = format!(
            "{}, {}",
            key.pick(Table::Camera, &CAMERA_MOVES, index),
            style.lens
        );
        let lighting = format!(
            "{}, {}",
            capitalize(key.pick(Table::Lighting, &LIGHTING_STYLES, index)),
            style.palette
        );

        let key_actions = format!(
            "{}: {}, played with {} energy and {} undertone",
            key.pick(Table::Beat, phase.beats(), index),
            strip_sentence_end(topic),
            options.mood,
            with_article(&options.tone)
        );

        let atmosphere = format!(
            "{}, {}",
            options.atmosphere,
            key.pick(Table::Atmosphere, phase.atmosphere_shifts(), index)
        );

        Scene {
            index,
            setting,
            characters,
            camera,
            lighting,
            key_actions,
            atmosphere,
        }
    }
}

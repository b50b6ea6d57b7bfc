use crate::options::GenerationOptions;
use crate::scene::Scene;
use crate::summary::Summary;
use crate::templates::StyleTemplate;
use crate::text::with_article;

pub struct PromptComposer;

impl PromptComposer {
    /// Assembles the final prompt: preamble, one block per scene in index
    /// order, closing directive. Only formats what the plan already holds.
    pub fn compose(summary: &Summary, scenes: &[Scene], options: &GenerationOptions) -> String {
        let style = StyleTemplate::for_style(summary.visual_style);
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Create {} video titled \"{}\" with {} mood and {} tone.\n",
            with_article(summary.visual_style.as_str()),
            summary.title,
            with_article(&summary.mood),
            with_article(&summary.tone)
        ));
        prompt.push_str(&format!("Concept: {}\n", summary.idea));
        prompt.push_str(&format!(
            "Visual style: {} ({}).\n",
            summary.visual_style, style.directives
        ));

        for scene in scenes {
            prompt.push('\n');
            prompt.push_str(&format!("Scene {}:\n", scene.index));
            prompt.push_str(&format!("- Setting: {}\n", scene.setting));
            prompt.push_str(&format!("- Characters: {}\n", scene.characters));
            prompt.push_str(&format!("- Camera: {}\n", scene.camera));
            prompt.push_str(&format!("- Lighting: {}\n", scene.lighting));
            prompt.push_str(&format!("- Action: {}\n", scene.key_actions));
            prompt.push_str(&format!("- Atmosphere: {}\n", scene.atmosphere));
        }

        prompt.push('\n');
        prompt.push_str(&format!(
            "Keep every shot consistent with the {} visual style, {}, and sustain an atmosphere of {} from the first frame to the last.",
            summary.visual_style, style.directives, options.atmosphere
        ));

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::VisualStyle;
    use crate::scene::SceneSynthesizer;
    use crate::summary::SummaryBuilder;

    fn options() -> GenerationOptions {
        GenerationOptions {
            topic: "An astronaut tends a garden on Mars".into(),
            mood: "wistful".into(),
            tone: "quiet".into(),
            visual_style: VisualStyle::Surreal,
            atmosphere: "red dust drifting in low gravity".into(),
            scene_count: 4,
            include_voiceover: false,
            include_thumbnail: false,
        }
    }

    #[test]
    fn test_prompt_contains_every_scene() {
        let options = options();
        let summary = SummaryBuilder::build(&options);
        let scenes = SceneSynthesizer::synthesize(&options);
        let prompt = PromptComposer::compose(&summary, &scenes, &options);

        for scene in &scenes {
            assert!(prompt.contains(&scene.setting));
            assert!(prompt.contains(&scene.key_actions));
            assert!(prompt.contains(&format!("Scene {}:", scene.index)));
        }
        assert!(prompt.contains("surreal"));
        assert!(prompt.contains("red dust drifting in low gravity"));
    }

    #[test]
    fn test_prompt_order() {
        let options = options();
        let summary = SummaryBuilder::build(&options);
        let scenes = SceneSynthesizer::synthesize(&options);
        let prompt = PromptComposer::compose(&summary, &scenes, &options);

        let preamble = prompt.find("Create a surreal video").unwrap();
        let first = prompt.find("Scene 1:").unwrap();
        let last = prompt.find("Scene 4:").unwrap();
        let closing = prompt.find("Keep every shot consistent").unwrap();
        assert!(preamble < first && first < last && last < closing);
    }
}

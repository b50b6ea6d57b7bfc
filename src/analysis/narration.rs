use crate::plan::VideoPlan;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Comfortable narration speed used for read-time estimates
pub const NARRATION_WPM: f32 = 150.0;
/// Voiceover lines longer than this are flagged
pub const MAX_LINE_WORDS: usize = 25;

#[derive(Debug, Clone, Serialize)]
pub struct LineEstimate {
    pub scene_index: usize,
    pub words: usize,
    pub seconds: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PacingAlert {
    pub scene_index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NarrationReport {
    pub scene_action_words: Vec<usize>,
    pub prompt_words: usize,
    pub voiceover: Vec<LineEstimate>,
    pub total_voiceover_seconds: f32,
    pub pacing_alerts: Vec<PacingAlert>,
}

pub struct NarrationAnalyzer;

impl NarrationAnalyzer {
    pub fn analyze(plan: &VideoPlan) -> NarrationReport {
        let scene_action_words = plan
            .scenes
            .iter()
            .map(|scene| Self::count_words(&scene.key_actions))
            .collect();

        let voiceover = Self::estimate_voiceover(plan);
        let total_voiceover_seconds = voiceover.iter().map(|line| line.seconds).sum();
        let pacing_alerts = Self::analyze_pacing(&voiceover);

        NarrationReport {
            scene_action_words,
            prompt_words: Self::count_words(&plan.final_prompt),
            voiceover,
            total_voiceover_seconds,
            pacing_alerts,
        }
    }

    fn estimate_voiceover(plan: &VideoPlan) -> Vec<LineEstimate> {
        let Some(lines) = plan.extras.as_ref().and_then(|e| e.voiceover_lines.as_ref()) else {
            return Vec::new();
        };

        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let words = Self::count_words(line);
                LineEstimate {
                    scene_index: i + 1,
                    words,
                    seconds: words as f32 / NARRATION_WPM * 60.0,
                }
            })
            .collect()
    }

    fn analyze_pacing(voiceover: &[LineEstimate]) -> Vec<PacingAlert> {
        voiceover
            .iter()
            .filter(|line| line.words > MAX_LINE_WORDS)
            .map(|line| PacingAlert {
                scene_index: line.scene_index,
                message: format!(
                    "Voiceover for scene {} runs {} words ({:.1}s). Target: at most {} words",
                    line.scene_index, line.words, line.seconds, MAX_LINE_WORDS
                ),
            })
            .collect()
    }

    fn count_words(text: &str) -> usize {
        text.unicode_words().count()
    }
}

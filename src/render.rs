use crate::analysis::{NarrationAnalyzer, NarrationReport};
use crate::plan::VideoPlan;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Whole plan as JSON ("Copy JSON")
    #[default]
    Json,
    /// Final prompt only ("Copy Final Prompt")
    Prompt,
    /// Human-readable report
    Markdown,
}

pub struct PlanRenderer;

impl PlanRenderer {
    pub fn render(plan: &VideoPlan, format: OutputFormat, pretty: bool) -> Result<String> {
        match format {
            OutputFormat::Json if pretty => {
                plan.to_json_pretty().context("Failed to serialize plan")
            }
            OutputFormat::Json => serde_json::to_string(plan).context("Failed to serialize plan"),
            OutputFormat::Prompt => Ok(plan.final_prompt.clone()),
            OutputFormat::Markdown => Ok(Self::markdown(plan)),
        }
    }

    /// Four sections: summary, scene breakdown, final prompt, extras (if any).
    pub fn markdown(plan: &VideoPlan) -> String {
        let summary = &plan.summary;
        let mut md = format!(
            "# {}\n\n## 1. Video Summary\n\n- **Short title**: {}\n- **One-sentence idea**: {}\n- **Mood + tone**: {} + {}\n- **Visual style**: {}\n\n## 2. Scene Breakdown\n",
            summary.title,
            summary.title,
            summary.idea,
            summary.mood,
            summary.tone,
            summary.visual_style
        );

        for scene in &plan.scenes {
            md.push_str(&format!(
                "\n### Scene {}\n\n- **Location + setting**: {}\n- **Characters**: {}\n- **Camera**: {}\n- **Lighting**: {}\n- **Key actions**: {}\n- **Atmosphere**: {}\n",
                scene.index,
                scene.setting,
                scene.characters,
                scene.camera,
                scene.lighting,
                scene.key_actions,
                scene.atmosphere
            ));
        }

        md.push_str(&format!(
            "\n## 3. Final Video Prompt\n\n```text\n{}\n```\n",
            plan.final_prompt
        ));

        if let Some(extras) = &plan.extras {
            md.push_str("\n## 4. Extras\n");
            if let Some(lines) = &extras.voiceover_lines {
                md.push_str("\n**Voiceover lines**\n\n");
                for (i, line) in lines.iter().enumerate() {
                    md.push_str(&format!("{}. {}\n", i + 1, line));
                }
            }
            if let Some(thumbnail) = &extras.thumbnail_prompt {
                md.push_str(&format!("\n**Thumbnail / poster prompt**\n\n{}\n", thumbnail));
            }
        }

        md.push_str(&Self::report_markdown(&NarrationAnalyzer::analyze(plan)));
        md
    }

    pub fn report_markdown(report: &NarrationReport) -> String {
        let mut md = format!(
            "\n## Narration Report\n\n- Final prompt: {} words\n",
            report.prompt_words
        );
        if !report.voiceover.is_empty() {
            md.push_str(&format!(
                "- Voiceover: {} lines, ~{:.1}s at narration pace\n",
                report.voiceover.len(),
                report.total_voiceover_seconds
            ));
        }
        for alert in &report.pacing_alerts {
            md.push_str(&format!("- **[Pacing]** {}\n", alert.message));
        }
        md
    }

    /// Get a summary of the plan structure
    pub fn summarize(plan: &VideoPlan) -> String {
        let mut summary = String::new();
        summary.push_str(&format!("Title: {}\n", plan.summary.title));
        summary.push_str(&format!("Style: {}\n", plan.summary.visual_style));
        summary.push_str(&format!(
            "Mood/tone: {} / {}\n",
            plan.summary.mood, plan.summary.tone
        ));
        summary.push_str(&format!("Scenes: {}\n", plan.scenes.len()));

        for scene in &plan.scenes {
            summary.push_str(&format!("  Scene {}: {}\n", scene.index, scene.beat()));
        }

        if let Some(extras) = &plan.extras {
            if let Some(lines) = &extras.voiceover_lines {
                summary.push_str(&format!("Voiceover lines: {}\n", lines.len()));
            }
            if extras.thumbnail_prompt.is_some() {
                summary.push_str("Thumbnail prompt: yes\n");
            }
        }

        summary
    }
}

use crate::options::{GenerationOptions, VisualStyle};
use crate::text::{capitalize, strip_sentence_end, with_article};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const MAX_TITLE_WORDS: usize = 8;
const MINOR_WORDS: [&str; 16] = [
    "a", "an", "the", "and", "or", "but", "of", "in", "on", "at", "to", "for", "by", "with",
    "from", "through",
];

/// Headline of the plan: derived title and idea plus the chosen mood, tone and style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub title: String,
    pub idea: String,
    pub mood: String,
    pub tone: String,
    pub visual_style: VisualStyle,
}

pub struct SummaryBuilder;

impl SummaryBuilder {
    pub fn build(options: &GenerationOptions) -> Summary {
        Summary {
            title: Self::title(&options.topic),
            idea: Self::idea(options),
            mood: options.mood.clone(),
            tone: options.tone.clone(),
            visual_style: options.visual_style,
        }
    }

    /// Title-cased fragment of at most eight words with punctuation removed.
    pub fn title(topic: &str) -> String {
        static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
        let punctuation = PUNCTUATION
            .get_or_init(|| Regex::new(r"[^\p{L}\p{N}\s'-]").expect("punctuation pattern is valid"));

        let cleaned = punctuation.replace_all(topic, " ");
        let words: Vec<String> = cleaned
            .split_whitespace()
            .take(MAX_TITLE_WORDS)
            .enumerate()
            .map(|(i, word)| {
                let lower = word.to_lowercase();
                if i > 0 && MINOR_WORDS.contains(&lower.as_str()) {
                    lower
                } else {
                    capitalize(word)
                }
            })
            .collect();

        if words.is_empty() {
            "Untitled Video".to_string()
        } else {
            words.join(" ")
        }
    }

    /// One sentence restating the topic verbatim.
    pub fn idea(options: &GenerationOptions) -> String {
        let topic = strip_sentence_end(&options.topic);
        format!(
            "{}: {} video with {} mood and {} tone.",
            topic,
            with_article(options.visual_style.as_str()),
            with_article(&options.mood),
            with_article(&options.tone)
        )
    }
}

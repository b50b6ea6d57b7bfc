//! Fixed vocabulary tables used to vary scenes deterministically.
//!
//! Every table that is indexed per scene holds at least as many
//! distinct entries as a plan has scenes, so a plan never repeats an entry from the same table.

use crate::options::VisualStyle;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::OnceLock;

pub const CAMERA_MOVES: [&str; 10] = [
    "Wide establishing shot with a slow push-in",
    "Low-angle tracking shot moving alongside the subject",
    "Handheld close-up that breathes with the action",
    "Overhead drone shot drifting forward",
    "Over-the-shoulder medium shot",
    "Slow dolly-out reveal",
    "Macro insert on a telling detail",
    "Steady gimbal follow from behind",
    "Locked-off frame with the subject crossing through",
    "Sweeping crane move rising above the scene",
];

pub const LIGHTING_STYLES: [&str; 10] = [
    "soft diffused key light with gentle falloff",
    "hard rim light carving the silhouette",
    "warm practical lights glowing in the background",
    "cool ambient fill with deep shadows",
    "golden backlight flaring into the lens",
    "high-contrast chiaroscuro",
    "flickering motivated light from the environment",
    "even overcast daylight",
    "volumetric shafts of light cutting through haze",
    "low-key moonlit blue tones",
];

pub const SETTING_FRAMES: [&str; 10] = [
    "Expansive establishing vista",
    "Intimate close quarters",
    "Threshold between two spaces",
    "Elevated vantage point above the action",
    "Quiet edge of the main location",
    "Heart of the main location",
    "Narrow transitional passage",
    "Reflective ground-level world",
    "Open horizon line",
    "Still clearing where the journey pauses",
];

/// Narrative position of a scene within the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryPhase {
    Opening,
    Rising,
    Climax,
    Resolution,
}

impl StoryPhase {
    /// Places a 1-based scene index within a plan of `count` scenes.
    /// A single-scene plan is all climax.
    pub fn for_scene(index: usize, count: usize) -> Self {
        if count <= 1 {
            return StoryPhase::Climax;
        }
        if index <= 1 {
            return StoryPhase::Opening;
        }
        if index >= count {
            return StoryPhase::Resolution;
        }
        let progress = (index - 1) as f32 / (count - 1) as f32;
        if progress < 0.5 {
            StoryPhase::Rising
        } else {
            StoryPhase::Climax
        }
    }

    pub fn beats(self) -> &'static [&'static str] {
        match self {
            StoryPhase::Opening => &[
                "Introduce the subject",
                "Establish the world and its stakes",
                "Set the story in motion",
            ],
            StoryPhase::Rising => &[
                "Build momentum",
                "Deepen the journey",
                "Reveal a telling detail",
                "Raise the stakes",
            ],
            StoryPhase::Climax => &[
                "Reach the defining moment",
                "Push to peak intensity",
                "Hold on the turning point",
            ],
            StoryPhase::Resolution => &[
                "Resolve the journey",
                "Let the moment settle",
                "Close on a lingering image",
            ],
        }
    }

    pub fn atmosphere_shifts(self) -> &'static [&'static str] {
        match self {
            StoryPhase::Opening => &[
                "hushed and expectant",
                "calm before anything moves",
                "quiet with a hint of promise",
            ],
            StoryPhase::Rising => &[
                "gathering intensity",
                "charged with forward motion",
                "growing denser with every beat",
                "tightening around the subject",
            ],
            StoryPhase::Climax => &[
                "at its most vivid and overwhelming",
                "electric",
                "suspended in a breathless peak",
            ],
            StoryPhase::Resolution => &[
                "softening into calm",
                "fading gently",
                "lingering like an afterimage",
            ],
        }
    }

    pub fn character_roles(self) -> &'static [&'static str] {
        match self {
            StoryPhase::Opening => &["introduced in frame", "first seen from a distance"],
            StoryPhase::Rising => &["pressing forward", "absorbed in the task at hand"],
            StoryPhase::Climax => &["at the center of the moment", "fully committed"],
            StoryPhase::Resolution => &["at rest", "looking back on the journey"],
        }
    }

    pub fn narration_lead(self) -> &'static str {
        match self {
            StoryPhase::Opening => "First,",
            StoryPhase::Rising => "Then,",
            StoryPhase::Climax => "Now,",
            StoryPhase::Resolution => "Finally,",
        }
    }
}

/// Per-style wording shared by scenes, the final prompt and the thumbnail.
#[derive(Debug, Clone, Copy)]
pub struct StyleTemplate {
    pub lens: &'static str,
    pub palette: &'static str,
    pub directives: &'static str,
}

impl StyleTemplate {
    pub fn for_style(style: VisualStyle) -> Self {
        match style {
            VisualStyle::Cinematic => StyleTemplate {
                lens: "anamorphic widescreen framing",
                palette: "rich filmic color grade",
                directives: "anamorphic 2.39:1 framing, shallow depth of field, filmic grain, motivated camera movement",
            },
            VisualStyle::Realistic => StyleTemplate {
                lens: "natural 35mm perspective",
                palette: "true-to-life color",
                directives: "photorealistic textures, natural motion, accurate physics, unstylized color",
            },
            VisualStyle::Emotional => StyleTemplate {
                lens: "intimate close framing",
                palette: "tender, warm color palette",
                directives: "lingering close-ups, expressive faces, soft focus transitions, emotionally driven pacing",
            },
            VisualStyle::Animated => StyleTemplate {
                lens: "stylized animated framing",
                palette: "vibrant saturated palette",
                directives: "clean stylized shapes, expressive animation, bold color blocking, smooth motion arcs",
            },
            VisualStyle::Documentary => StyleTemplate {
                lens: "observational handheld perspective",
                palette: "naturalistic grade",
                directives: "observational camera, available light, authentic detail, unobtrusive framing",
            },
            VisualStyle::Surreal => StyleTemplate {
                lens: "dreamlike distorted perspective",
                palette: "uncanny shifting palette",
                directives: "impossible geometry, dream logic transitions, morphing forms, heightened symbolism",
            },
        }
    }
}

/// Topic-derived selection key. Each table reads its own digest byte as an
/// offset, so tables rotate independently of one another.
#[derive(Debug, Clone)]
pub struct SelectionKey {
    digest: [u8; 32],
}

#[derive(Debug, Clone, Copy)]
pub enum Table {
    Camera = 0,
    Lighting = 1,
    Setting = 2,
    Beat = 3,
    Atmosphere = 4,
    Role = 5,
}

impl SelectionKey {
    pub fn from_topic(topic: &str) -> Self {
        let digest = Sha256::digest(topic.as_bytes());
        Self {
            digest: digest.into(),
        }
    }

    /// Picks the entry for a 1-based scene index: `(offset + index - 1) % len`.
    pub fn pick<'a>(&self, table: Table, entries: &[&'a str], index: usize) -> &'a str {
        let offset = self.digest[table as usize] as usize;
        entries[(offset + index.saturating_sub(1)) % entries.len()]
    }
}

const PERSON_NOUNS: &str = "man|woman|men|women|girl|boy|child|children|kid|baby|teen|teenager|person|people|family|couple|friend|stranger|traveler|traveller|wanderer|explorer|hero|heroine|astronaut|scientist|doctor|nurse|chef|artist|painter|musician|singer|dancer|athlete|runner|cyclist|swimmer|climber|surfer|skater|driver|pilot|sailor|soldier|knight|king|queen|prince|princess|detective|student|teacher|worker|farmer|fisherman|grandmother|grandfather|mother|father|daughter|son|sister|brother|robot|android|dog|cat|fox|wolf|bird";

/// Finds an explicitly named character at its first mention in the topic,
/// e.g. "A lone cyclist racing ..." gives "A lone cyclist". The noun must end
/// at whitespace, punctuation or the end of the topic, so "cat-shaped" is not a cat.
pub fn named_subject(topic: &str) -> Option<String> {
    static SUBJECT: OnceLock<Regex> = OnceLock::new();
    let regex = SUBJECT.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)\b((?:(?:a|an|the|one|two|three|some)\s+(?:[\p{{L}}-]+\s+){{0,2}}?)?(?:{})s?)(?:\s|$|[,.;:!?])",
            PERSON_NOUNS
        ))
        .expect("subject pattern is valid")
    });
    regex
        .captures(topic)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MAX_SCENES;

    #[test]
    fn test_tables_cover_max_scenes() {
        for table in [&CAMERA_MOVES[..], &LIGHTING_STYLES[..], &SETTING_FRAMES[..]] {
            assert!(table.len() >= MAX_SCENES as usize);
            let mut sorted = table.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), table.len());
        }
    }

    #[test]
    fn test_story_phase_placement() {
        assert_eq!(StoryPhase::for_scene(1, 1), StoryPhase::Climax);
        assert_eq!(StoryPhase::for_scene(1, 2), StoryPhase::Opening);
        assert_eq!(StoryPhase::for_scene(2, 2), StoryPhase::Resolution);
        assert_eq!(StoryPhase::for_scene(2, 6), StoryPhase::Rising);
        assert_eq!(StoryPhase::for_scene(4, 6), StoryPhase::Climax);
        assert_eq!(StoryPhase::for_scene(6, 6), StoryPhase::Resolution);
    }

    #[test]
    fn test_selection_key_cycles_without_repeats() {
        let key = SelectionKey::from_topic("a quiet harbor at dawn");
        let picks: Vec<&str> = (1..=10)
            .map(|i| key.pick(Table::Camera, &CAMERA_MOVES, i))
            .collect();
        let mut unique = picks.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 10);

        // Index 11 wraps back onto index 1.
        assert_eq!(
            key.pick(Table::Camera, &CAMERA_MOVES, 11),
            key.pick(Table::Camera, &CAMERA_MOVES, 1)
        );
    }

    #[test]
    fn test_selection_key_is_deterministic() {
        let a = SelectionKey::from_topic("topic");
        let b = SelectionKey::from_topic("topic");
        assert_eq!(
            a.pick(Table::Lighting, &LIGHTING_STYLES, 3),
            b.pick(Table::Lighting, &LIGHTING_STYLES, 3)
        );
    }

    #[test]
    fn test_named_subject() {
        assert_eq!(
            named_subject("A lone cyclist racing sunrise through misty city streets").as_deref(),
            Some("A lone cyclist")
        );
        assert_eq!(
            named_subject("The city where a dancer waits").as_deref(),
            Some("a dancer")
        );
        assert_eq!(named_subject("Bioluminescent waves at midnight"), None);
    }

    #[test]
    fn test_named_subject_ignores_hyphenated_compounds() {
        assert_eq!(named_subject("A cat-shaped cloud drifts"), None);
        assert_eq!(
            named_subject("A cat-shaped kite and a boy, running").as_deref(),
            Some("a boy")
        );
        assert_eq!(named_subject("Portrait of a sailor").as_deref(), Some("a sailor"));
        assert_eq!(named_subject("Meet the dancers.").as_deref(), Some("the dancers"));
    }
}

use prompt_agent::options::SceneCountInput;
use prompt_agent::{
    generate_video_plan, OptionDefaults, PlanError, PlanGenerator, RawOptions, VideoPlan,
    VisualStyle,
};

fn raw(style: VisualStyle, scene_count: f64, voiceover: bool, thumbnail: bool) -> RawOptions {
    RawOptions {
        topic: Some("Two friends build a raft to cross a wide river".into()),
        mood: Some("adventurous".into()),
        tone: Some("hopeful".into()),
        visual_style: Some(style.as_str().into()),
        atmosphere: Some("sunlit spray and rushing water".into()),
        scene_count: Some(SceneCountInput::Number(scene_count)),
        include_voiceover: Some(voiceover),
        include_thumbnail: Some(thumbnail),
    }
}

fn generate(raw: RawOptions) -> VideoPlan {
    PlanGenerator::generate_raw(raw, &OptionDefaults::default()).unwrap()
}

#[test]
fn test_determinism() {
    for style in VisualStyle::ALL {
        let a = generate(raw(style, 7.0, true, true));
        let b = generate(raw(style, 7.0, true, true));
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn test_cardinality_and_ordering() {
    for count in -2..=14 {
        let plan = generate(raw(VisualStyle::Realistic, count as f64, false, false));
        assert_eq!(plan.scenes.len(), count.clamp(1, 10) as usize);
        for (i, scene) in plan.scenes.iter().enumerate() {
            assert_eq!(scene.index, i + 1);
        }
    }
}

#[test]
fn test_extras_presence_law() {
    for voiceover in [false, true] {
        for thumbnail in [false, true] {
            let plan = generate(raw(VisualStyle::Emotional, 4.0, voiceover, thumbnail));
            assert_eq!(plan.extras.is_some(), voiceover || thumbnail);
            if let Some(extras) = &plan.extras {
                assert_eq!(extras.voiceover_lines.is_some(), voiceover);
                assert_eq!(extras.thumbnail_prompt.is_some(), thumbnail);
            }
        }
    }
}

#[test]
fn test_voiceover_length_law() {
    for count in 1..=10 {
        let plan = generate(raw(VisualStyle::Animated, count as f64, true, false));
        let lines = plan.extras.unwrap().voiceover_lines.unwrap();
        assert_eq!(lines.len(), plan.scenes.len());
    }
}

#[test]
fn test_prompt_containment() {
    for style in VisualStyle::ALL {
        let plan = generate(raw(style, 10.0, false, false));
        for scene in &plan.scenes {
            assert!(plan.final_prompt.contains(&scene.setting));
            assert!(plan.final_prompt.contains(&scene.key_actions));
        }
        assert!(plan.final_prompt.contains(style.as_str()));
    }
}

#[test]
fn test_scenes_differ_within_plan() {
    let plan = generate(raw(VisualStyle::Surreal, 10.0, false, false));
    for (i, a) in plan.scenes.iter().enumerate() {
        for b in plan.scenes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_rejection() {
    for topic in ["", "   ", "\n\t"] {
        let raw = RawOptions {
            topic: Some(topic.into()),
            ..RawOptions::sample()
        };
        let result = PlanGenerator::generate_raw(raw, &OptionDefaults::default());
        assert!(matches!(result, Err(PlanError::InvalidInput(_))));
    }
}

#[test]
fn test_sample_example() {
    let plan = generate(RawOptions::sample());
    assert_eq!(plan.scenes.len(), 6);
    assert_eq!(
        plan.scenes.iter().map(|s| s.index).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
    assert_eq!(plan.summary.visual_style, VisualStyle::Cinematic);
    let extras = plan.extras.as_ref().unwrap();
    assert_eq!(extras.voiceover_lines.as_ref().unwrap().len(), 6);
    assert!(!extras.thumbnail_prompt.as_ref().unwrap().trim().is_empty());
    assert!(plan.final_prompt.contains("neon reflections on wet streets"));
}

#[test]
fn test_scene_count_examples() {
    let fifteen = RawOptions {
        scene_count: Some(SceneCountInput::from(15)),
        ..RawOptions::sample()
    };
    assert_eq!(generate(fifteen).scenes.len(), 10);

    let zero = RawOptions {
        scene_count: Some(SceneCountInput::from(0)),
        ..RawOptions::sample()
    };
    assert_eq!(generate(zero).scenes.len(), 1);
}

#[test]
fn test_copy_views_share_one_plan() {
    let plan = generate(RawOptions::sample());
    let json: serde_json::Value = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["finalPrompt"].as_str().unwrap(), plan.final_prompt);
}

#[test]
fn test_public_entry_point_matches_generator() {
    let options = RawOptions::sample()
        .normalize(&OptionDefaults::default())
        .unwrap();
    assert_eq!(
        generate_video_plan(&options).unwrap(),
        PlanGenerator::generate(&options).unwrap()
    );
}

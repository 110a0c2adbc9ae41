/*!
 * Tests for the engine entry point
 */

use scenesmith::demo::DEMO_SCRIPT;
use scenesmith::segmentation::{count_words, split_paragraphs, DEFAULT_MAX_WORDS_PER_SCENE};
use scenesmith::synthesis::CLOSING_DIRECTIVE;
use scenesmith::{
    build_scene_prompts, normalize_script, CameraMovement, Lighting, Mood, SceneEngine,
    SegmentationConfig, SynthesisConfig, VisualStyle,
};

use crate::common::{self, SHORT_SCRIPT, SIX_SENTENCE_PARAGRAPH};

/// Test the single sentence scenario
#[test]
fn test_buildScenePrompts_withShortSentence_shouldReturnOneDawnScene() {
    let scenes = build_scene_prompts("A dog runs across a quiet beach at dawn.");

    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].index, 1);
    assert_eq!(scenes[0].script_slice, "A dog runs across a quiet beach at dawn.");
    assert_eq!(scenes[0].lighting, Lighting::Sunrise);
    assert!(scenes[0].prompt.contains("Vertical 9:16 framing"));
    assert!(scenes[0].prompt.contains("2-4 second clip"));
}

/// Test the demo script scenario
#[test]
fn test_buildScenePrompts_withDemoScript_shouldReturnFourScenes() {
    let scenes = build_scene_prompts(DEMO_SCRIPT);

    assert_eq!(scenes.len(), 4);
    assert_eq!(scenes[0].lighting, Lighting::Sunrise);
    assert_eq!(scenes[3].lighting, Lighting::Twilight);

    // Every paragraph of the demo fits the default budget and stays whole
    let paragraphs = split_paragraphs(DEMO_SCRIPT);
    for (scene, paragraph) in scenes.iter().zip(&paragraphs) {
        assert_eq!(&scene.script_slice, paragraph);
    }

    common::assert_scene_sequence(DEMO_SCRIPT, &scenes);
}

/// Test the inferred tags of every demo scene
#[test]
fn test_buildScenePrompts_withDemoScript_shouldInferExpectedTags() {
    let scenes = build_scene_prompts(DEMO_SCRIPT);
    let tags: Vec<_> = scenes
        .iter()
        .map(|scene| (scene.mood, scene.lighting, scene.movement))
        .collect();

    assert_eq!(
        tags,
        vec![
            (Mood::Hopeful, Lighting::Sunrise, CameraMovement::Sweeping),
            (Mood::Joyful, Lighting::Morning, CameraMovement::Handheld),
            (Mood::Hopeful, Lighting::NaturalLight, CameraMovement::Tracking),
            (Mood::Joyful, Lighting::Twilight, CameraMovement::SlowPan),
        ]
    );
    assert!(scenes.iter().all(|scene| scene.style == VisualStyle::CinematicVertical));
}

/// Test the six sentence paragraph scenario
#[test]
fn test_buildScenePrompts_withSixShortSentences_shouldSplitAtSentenceBoundary() {
    let scenes = build_scene_prompts(SIX_SENTENCE_PARAGRAPH);

    assert!(scenes.len() >= 2);
    assert_eq!(scenes[0].script_slice, "The alarm rings. Mara jumps out of bed. A cat knocks over a vase.");
    for scene in &scenes {
        assert!(scene.word_count() <= DEFAULT_MAX_WORDS_PER_SCENE);
        assert!(scene.script_slice.ends_with('.'));
    }

    common::assert_scene_sequence(SIX_SENTENCE_PARAGRAPH, &scenes);
}

/// Test that blank input yields no scenes
#[test]
fn test_buildScenePrompts_withWhitespaceOnly_shouldReturnEmpty() {
    assert!(build_scene_prompts("   ").is_empty());
    assert!(build_scene_prompts("\n\n\t\n").is_empty());
    assert_eq!(normalize_script("  \n "), "");
}

/// Test that repeated invocations are identical
#[test]
fn test_buildScenePrompts_calledTwice_shouldBeDeterministic() {
    assert_eq!(build_scene_prompts(DEMO_SCRIPT), build_scene_prompts(DEMO_SCRIPT));
    assert_eq!(build_scene_prompts(SHORT_SCRIPT), build_scene_prompts(SHORT_SCRIPT));
}

/// Test that the closing directive ends every prompt
#[test]
fn test_buildScenePrompts_everyPrompt_shouldEndWithClosingDirective() {
    for scene in build_scene_prompts(DEMO_SCRIPT) {
        assert!(scene.prompt.ends_with(CLOSING_DIRECTIVE));
        assert!(scene.prompt.starts_with(&format!("Scene {}:", scene.index)));
    }
}

/// Test the transition marker is dropped from the prompt but kept in the slice
#[test]
fn test_buildScenePrompts_withTransition_shouldKeepSliceVerbatim() {
    let scenes = build_scene_prompts(SHORT_SCRIPT);

    assert_eq!(scenes.len(), 2);
    assert!(scenes[1].script_slice.starts_with("Cut to a crowded market"));
    assert!(scenes[1].prompt.starts_with("Scene 2: A crowded market"));
    assert_eq!(scenes[1].movement, CameraMovement::Handheld);
}

/// Test a single block of text without paragraph breaks
#[test]
fn test_sceneEngine_withSingleBlock_shouldGroupSentencesUnderBudget() {
    let script = "She opens the door. Wind rushes in. Papers fly across the room. \
She grabs the lamp. The power cuts out. Silence. \
A phone buzzes on the table. She answers it.";
    let engine = SceneEngine::new(
        SegmentationConfig {
            max_words_per_scene: 20,
            max_sentences_per_scene: 3,
            min_words_per_scene: 4,
        },
        SynthesisConfig::default(),
    );
    let scenes = engine.build(script);

    assert!(scenes.len() >= 3);
    for scene in &scenes {
        assert!(count_words(&scene.script_slice) <= 20);
    }
    common::assert_scene_sequence(script, &scenes);
}

/// Test that an over-long single sentence is returned whole
#[test]
fn test_sceneEngine_withLongSentence_shouldNotBreakInsideIt() {
    let sentence = "The camera follows the runner through the crowded streets of the old city \
past the fountain and the bakery and the church and the market and the river and the bridge \
until she finally reaches the hill where the whole valley opens in front of her.";
    assert!(count_words(sentence) > DEFAULT_MAX_WORDS_PER_SCENE);

    let scenes = build_scene_prompts(sentence);
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].script_slice, sentence);
}

/// Test the prompt length bound on a very long slice
#[test]
fn test_sceneEngine_withLongSentence_shouldBoundPromptLength() {
    let sentence = format!("{}.", "the caravan crosses another dune".repeat(60));
    let engine = SceneEngine::with_defaults();
    let max_chars = engine.synthesizer().config().max_prompt_chars;

    let scenes = engine.build(&sentence);
    assert_eq!(scenes.len(), 1);
    assert!(scenes[0].prompt.chars().count() <= max_chars);
}

/// Test that fixed style from configuration applies to every scene
#[test]
fn test_sceneEngine_withFixedStyle_shouldApplyToAllScenes() {
    let engine = SceneEngine::new(
        SegmentationConfig::default(),
        SynthesisConfig {
            fixed_style: Some(VisualStyle::Vintage),
            ..SynthesisConfig::default()
        },
    );

    let scenes = engine.build(DEMO_SCRIPT);
    assert!(scenes.iter().all(|scene| scene.style == VisualStyle::Vintage));
}

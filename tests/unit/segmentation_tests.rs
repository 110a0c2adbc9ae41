/*!
 * Tests for script segmentation
 */

use std::sync::Arc;

use scenesmith::segmentation::{
    count_words, PunctuationSentenceDetector, SegmentationConfig, Segmenter, SentenceDetector,
};
use scenesmith::{normalize_script, SceneEngine, SynthesisConfig};

use crate::common::{self, SIX_SENTENCE_PARAGRAPH};

/// Line-based detector: every line is one sentence.
#[derive(Debug)]
struct LineDetector;

impl SentenceDetector for LineDetector {
    fn sentences<'a>(&self, paragraph: &'a str) -> Vec<&'a str> {
        paragraph
            .split_inclusive(" | ")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Test that the quick cuts preset produces more, shorter scenes
#[test]
fn test_segmenter_quickCuts_shouldProduceMoreScenesThanDefault() {
    let script = format!("{} {}", SIX_SENTENCE_PARAGRAPH, SIX_SENTENCE_PARAGRAPH);

    let default_slices = Segmenter::with_defaults().segment(&script);
    let quick_slices = Segmenter::new(SegmentationConfig::quick_cuts()).segment(&script);

    assert!(quick_slices.len() > default_slices.len());
    for slice in &quick_slices {
        assert!(count_words(slice) <= SegmentationConfig::quick_cuts().max_words_per_scene);
    }
}

/// Test that the long takes preset keeps paragraphs whole
#[test]
fn test_segmenter_longTakes_shouldKeepSixSentencesTogether() {
    let config = SegmentationConfig {
        max_sentences_per_scene: 6,
        ..SegmentationConfig::long_takes()
    };
    let slices = Segmenter::new(config).segment(SIX_SENTENCE_PARAGRAPH);

    assert_eq!(slices, vec![normalize_script(SIX_SENTENCE_PARAGRAPH)]);
}

/// Test that the stats report splits and merges
#[test]
fn test_segmenter_segmentWithStats_shouldCountWork() {
    let script = format!(
        "Night.\n\nThe city sleeps under a blanket of fog.\n\n{}",
        SIX_SENTENCE_PARAGRAPH
    );
    let (slices, stats) = Segmenter::with_defaults().segment_with_stats(&script);

    assert_eq!(stats.paragraphs, 3);
    assert_eq!(stats.merges, 1);
    assert_eq!(stats.splits, 1);
    assert_eq!(stats.scenes, slices.len());
    assert_eq!(slices[0], "Night. The city sleeps under a blanket of fog.");
    assert_eq!(slices.len(), 3);
}

/// Test a custom sentence detector plugged into the engine
#[test]
fn test_segmenter_withCustomDetector_shouldUseItsBoundaries() {
    let script = "wide shot of the harbor | boats rock gently | a gull lands on a post | \
the fisherman waves | the sun climbs | nets are hauled aboard";
    let segmenter = Segmenter::with_detector(
        SegmentationConfig {
            max_words_per_scene: 40,
            max_sentences_per_scene: 3,
            min_words_per_scene: 2,
        },
        Arc::new(LineDetector),
    );
    let engine = SceneEngine::from_parts(
        segmenter,
        scenesmith::PromptSynthesizer::new(SynthesisConfig::default()),
    );

    let scenes = engine.build(script);

    assert_eq!(scenes.len(), 2);
    assert!(scenes[0].script_slice.ends_with("a gull lands on a post |"));
    common::assert_scene_sequence(script, &scenes);
}

/// Test that the default detector is usable through the trait object
#[test]
fn test_punctuationSentenceDetector_asTraitObject_shouldSplit() {
    let detector: Arc<dyn SentenceDetector> = Arc::new(PunctuationSentenceDetector::new());
    assert_eq!(detector.sentences("One. Two."), vec!["One.", "Two."]);
}

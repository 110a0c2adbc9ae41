/*!
 * Script to scene-prompt engine.
 *
 * The engine runs the segmenter over the whole script, then hands every slice
 * to the synthesizer with its 1-based position. It is a pure function of its
 * input and configuration: it does no I/O, holds no mutable state and never
 * fails. An input with no letters or digits yields an empty sequence.
 */

use log::info;

use crate::app_config::Config;
use crate::scene::ScenePrompt;
use crate::segmentation::{collapse_whitespace, has_words, SegmentationConfig, Segmenter};
use crate::synthesis::{PromptSynthesizer, SynthesisConfig};

/// Build scene prompts for a script with the default thresholds.
pub fn build_scene_prompts(script: &str) -> Vec<ScenePrompt> {
    SceneEngine::with_defaults().build(script)
}

/// Whitespace-normalized form of a script.
///
/// This is the text the scene slices partition: joining every `script_slice`
/// with a single space reproduces it exactly.
pub fn normalize_script(script: &str) -> String {
    if !has_words(script) {
        return String::new();
    }
    collapse_whitespace(script)
}

/// Join the slices of a scene sequence back into the normalized script.
pub fn reassemble(scenes: &[ScenePrompt]) -> String {
    scenes
        .iter()
        .map(|scene| scene.script_slice.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Segmenter and synthesizer wired together.
#[derive(Debug, Clone, Default)]
pub struct SceneEngine {
    segmenter: Segmenter,
    synthesizer: PromptSynthesizer,
}

impl SceneEngine {
    pub fn new(segmentation: SegmentationConfig, synthesis: SynthesisConfig) -> Self {
        Self::from_parts(Segmenter::new(segmentation), PromptSynthesizer::new(synthesis))
    }

    /// Create an engine from an already built segmenter and synthesizer.
    pub fn from_parts(segmenter: Segmenter, synthesizer: PromptSynthesizer) -> Self {
        Self {
            segmenter,
            synthesizer,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(SegmentationConfig::default(), SynthesisConfig::default())
    }

    /// Create an engine from the application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.segmentation.clone(), config.synthesis.clone())
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    pub fn synthesizer(&self) -> &PromptSynthesizer {
        &self.synthesizer
    }

    /// Split the script into scenes and synthesize a prompt for each.
    pub fn build(&self, script: &str) -> Vec<ScenePrompt> {
        let slices = self.segmenter.segment(script);

        let scenes: Vec<ScenePrompt> = slices
            .into_iter()
            .enumerate()
            .map(|(i, slice)| self.synthesizer.synthesize(&slice, i + 1))
            .collect();

        info!("Built {} scene prompt(s)", scenes.len());
        scenes
    }
}

/*!
 * Scene records produced by the engine.
 *
 * A `ScenePrompt` is one short clip: the slice of script it covers, the
 * cinematic tags inferred for it and the rendered video-generation prompt.
 * Tags are serialized as their labels, the same words the prompt uses.
 */

use serde::{Deserialize, Serialize};

use crate::synthesis::tags::{as_label, CameraMovement, Lighting, Mood, VisualStyle};

/// Cinematic treatment inferred for one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SceneTags {
    pub mood: Mood,
    pub lighting: Lighting,
    pub movement: CameraMovement,
    pub style: VisualStyle,
}

/// One scene of a script, ready to be pasted into a text-to-video tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePrompt {
    /// 1-based position of the scene in the script
    pub index: usize,

    /// Whitespace-normalized text of the script this scene covers
    pub script_slice: String,

    #[serde(with = "as_label")]
    pub mood: Mood,

    #[serde(with = "as_label")]
    pub lighting: Lighting,

    #[serde(with = "as_label")]
    pub movement: CameraMovement,

    #[serde(with = "as_label")]
    pub style: VisualStyle,

    /// Rendered prompt for the video model
    pub prompt: String,
}

impl ScenePrompt {
    /// Create a scene record from its parts.
    pub fn new(index: usize, script_slice: String, tags: SceneTags, prompt: String) -> Self {
        Self {
            index,
            script_slice,
            mood: tags.mood,
            lighting: tags.lighting,
            movement: tags.movement,
            style: tags.style,
            prompt,
        }
    }

    /// The four tags of this scene.
    pub fn tags(&self) -> SceneTags {
        SceneTags {
            mood: self.mood,
            lighting: self.lighting,
            movement: self.movement,
            style: self.style,
        }
    }

    /// Number of words in the script slice.
    pub fn word_count(&self) -> usize {
        crate::segmentation::count_words(&self.script_slice)
    }
}

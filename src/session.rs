/*!
 * Caller-side state around the engine.
 *
 * A `ScriptSession` is what an interactive front end keeps between user
 * actions: the script being edited, the last generated scenes, whether the
 * user already tried to generate, and which prompt was copied last. The
 * engine never sees any of it.
 */

use chrono::{DateTime, Utc};

use crate::demo::DEMO_SCRIPT;
use crate::engine::SceneEngine;
use crate::scene::ScenePrompt;

/// Shown when generation is requested without a script.
pub const EMPTY_SCRIPT_MESSAGE: &str = "Please paste a script before generating prompts.";

/// Which scene prompt was copied last, and when.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyState {
    /// `None` when the last copy attempt failed or nothing was copied yet
    pub index: Option<usize>,
    pub copied_at: Option<DateTime<Utc>>,
}

/// Interactive session state.
#[derive(Debug, Clone, Default)]
pub struct ScriptSession {
    engine: SceneEngine,
    script: String,
    scenes: Vec<ScenePrompt>,
    touched: bool,
    copy_state: CopyState,
}

impl ScriptSession {
    pub fn new(engine: SceneEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn scenes(&self) -> &[ScenePrompt] {
        &self.scenes
    }

    pub fn copy_state(&self) -> CopyState {
        self.copy_state
    }

    /// Replace the script text. Scenes are kept until the next generation.
    pub fn set_script(&mut self, script: impl Into<String>) {
        self.script = script.into();
    }

    /// Generate scenes from the current script.
    ///
    /// A blank script clears the scenes and turns on the field error.
    pub fn generate(&mut self) -> &[ScenePrompt] {
        self.touched = true;
        let trimmed = self.script.trim();

        self.scenes = if trimmed.is_empty() {
            Vec::new()
        } else {
            self.engine.build(trimmed)
        };
        &self.scenes
    }

    /// Load the demo script and generate it.
    pub fn use_demo(&mut self) -> &[ScenePrompt] {
        self.script = DEMO_SCRIPT.to_string();
        self.touched = false;
        self.scenes = self.engine.build(DEMO_SCRIPT);
        &self.scenes
    }

    /// Validation message for the script field, if any.
    pub fn field_error(&self) -> Option<&'static str> {
        (self.touched && self.script.trim().is_empty()).then_some(EMPTY_SCRIPT_MESSAGE)
    }

    /// One-line summary of the generated scenes, `None` when there are none.
    pub fn summary(&self) -> Option<String> {
        summarize(self.scenes.len())
    }

    /// Prompt text of a scene by its 1-based index.
    pub fn prompt(&self, index: usize) -> Option<&str> {
        self.scenes
            .iter()
            .find(|scene| scene.index == index)
            .map(|scene| scene.prompt.as_str())
    }

    /// Record a successful copy of the scene's prompt.
    pub fn mark_copied(&mut self, index: usize, at: DateTime<Utc>) {
        self.copy_state = CopyState {
            index: Some(index),
            copied_at: Some(at),
        };
    }

    /// Record a failed copy: no scene shows as copied.
    pub fn mark_copy_failed(&mut self, at: DateTime<Utc>) {
        self.copy_state = CopyState {
            index: None,
            copied_at: Some(at),
        };
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copy_state.index == Some(index)
    }
}

/// "N scene(s) ready for upload.", or `None` for zero scenes.
pub fn summarize(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 scene ready for upload.".to_string()),
        n => Some(format!("{} scenes ready for upload.", n)),
    }
}

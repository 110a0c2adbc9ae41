/*!
 * Common test utilities for the scenesmith test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use scenesmith::{normalize_script, reassemble, ScenePrompt};

/// One paragraph of six short, unrelated sentences (29 words).
pub const SIX_SENTENCE_PARAGRAPH: &str = "The alarm rings. Mara jumps out of bed. A cat knocks over a vase. \
Rain hits the window hard. The kettle starts to whistle. Someone knocks at the door.";

/// A two-beat script with a transition line.
pub const SHORT_SCRIPT: &str = "A dog runs across a quiet beach at dawn.

Cut to a crowded market where vendors shout over each other and a boy weaves between stalls.";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Asserts the structural guarantees every scene sequence must hold
pub fn assert_scene_sequence(script: &str, scenes: &[ScenePrompt]) {
    assert_eq!(reassemble(scenes), normalize_script(script), "slices must partition the script");

    for (position, scene) in scenes.iter().enumerate() {
        assert_eq!(scene.index, position + 1, "indices must be contiguous from 1");
        assert!(!scene.script_slice.trim().is_empty());
        assert!(!scene.mood.to_string().is_empty());
        assert!(!scene.lighting.to_string().is_empty());
        assert!(!scene.movement.to_string().is_empty());
        assert!(!scene.style.to_string().is_empty());
        assert!(!scene.prompt.trim().is_empty());
    }
}

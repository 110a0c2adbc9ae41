/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;

use scenesmith::file_utils::FileManager;

use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "pitch.txt", "A dog runs.")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_script.txt"));
}

/// Test that generate_output_path creates the correct path
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path =
        FileManager::generate_output_path(Path::new("/tmp/input/pitch.md"), Path::new("/tmp/output"), "scenes", "md");

    assert_eq!(output_path, Path::new("/tmp/output/pitch.scenes.md"));
}

/// Test recursive script discovery
#[test]
fn test_find_scripts_withNestedFolders_shouldFindTextAndMarkdown() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "a.txt", "One.")?;
    common::create_test_file(root, "nested/b.MD", "Two.")?;
    common::create_test_file(root, "notes.json", "{}")?;
    common::create_test_file(root, "a.scenes.txt", "Scene 1")?;

    let scripts = FileManager::find_scripts(root, "scenes")?;
    let names: Vec<String> = scripts
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect();

    assert_eq!(scripts.len(), 2);
    assert!(names.contains(&"a.txt".to_string()));
    assert!(names.contains(&"b.MD".to_string()));

    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out/deeper/pitch.scenes.txt");

    FileManager::write_to_file(&target, "Scene 1")?;
    assert_eq!(FileManager::read_to_string(&target)?, "Scene 1");

    Ok(())
}

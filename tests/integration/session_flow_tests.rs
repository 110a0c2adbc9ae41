/*!
 * Integration tests for the interactive session flow
 */

use chrono::Utc;

use scenesmith::demo::DEMO_SCRIPT;
use scenesmith::session::EMPTY_SCRIPT_MESSAGE;
use scenesmith::{build_scene_prompts, ScriptSession};

/// Test the generate, edit, copy cycle of a front end
#[test]
fn test_session_fullCycle_shouldTrackStateAcrossActions() {
    let mut session = ScriptSession::default();

    // Generating before typing anything shows the field error
    session.generate();
    assert_eq!(session.field_error(), Some(EMPTY_SCRIPT_MESSAGE));
    assert!(session.scenes().is_empty());

    // The demo clears the error and fills the scenes
    session.use_demo();
    assert_eq!(session.field_error(), None);
    assert_eq!(session.scenes(), build_scene_prompts(DEMO_SCRIPT).as_slice());

    // Copy the third prompt
    let copied = session.prompt(3).map(str::to_string);
    assert!(copied.is_some());
    session.mark_copied(3, Utc::now());
    assert!(session.is_copied(3));

    // Editing keeps the previous scenes until the next generation
    session.set_script("   ");
    assert_eq!(session.scenes().len(), 4);
    assert_eq!(session.summary().as_deref(), Some("4 scenes ready for upload."));

    session.generate();
    assert!(session.scenes().is_empty());
    assert_eq!(session.summary(), None);
    assert_eq!(session.field_error(), Some(EMPTY_SCRIPT_MESSAGE));
}

/// Test that generation trims the script before running the engine
#[test]
fn test_session_generate_withPaddedScript_shouldMatchEngineOnTrimmedText() {
    let mut session = ScriptSession::default();
    session.set_script("\n\n   A dog runs across a quiet beach at dawn.   \n");

    let scenes = session.generate().to_vec();

    assert_eq!(scenes, build_scene_prompts("A dog runs across a quiet beach at dawn."));
    assert_eq!(session.summary().as_deref(), Some("1 scene ready for upload."));
}

/// Test a failed copy clears the copied marker
#[test]
fn test_session_markCopyFailed_shouldClearCopiedScene() {
    let mut session = ScriptSession::default();
    session.use_demo();

    session.mark_copied(1, Utc::now());
    session.mark_copy_failed(Utc::now());

    assert!((1..=4).all(|index| !session.is_copied(index)));
    assert_eq!(session.copy_state().index, None);
}

/*!
 * # scenesmith - script to scene prompts
 *
 * A Rust library that breaks a short-form prose script into 2-4 second
 * vertical scenes and writes a text-to-video prompt for each one.
 *
 * ## Features
 *
 * - Paragraph and sentence aware segmentation under a word/sentence budget
 * - Pluggable sentence boundary detection
 * - Mood, lighting, camera movement and visual style inferred from explicit
 *   keyword tables, with a default for every category
 * - Prompt templates with a fixed vertical-format closing directive
 * - Text, JSON and Markdown output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `engine`: `build_scene_prompts` and the `SceneEngine` wiring
 * - `segmentation`: splitting a script into scene-sized slices
 * - `synthesis`: cinematic tags, cue tables and prompt templates
 * - `scene`: the `ScenePrompt` record
 * - `session`: caller-side state for interactive front ends
 * - `output`: rendering scenes for humans and tools
 * - `app_config`: Configuration management
 * - `app_controller`: File and folder processing
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## Example
 *
 * ```
 * let scenes = scenesmith::build_scene_prompts("A dog runs across a quiet beach at dawn.");
 * assert_eq!(scenes.len(), 1);
 * assert_eq!(scenes[0].index, 1);
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod demo;
pub mod engine;
pub mod errors;
pub mod file_utils;
pub mod output;
pub mod scene;
pub mod segmentation;
pub mod session;
pub mod synthesis;

// Re-export main types for easier usage
pub use app_config::Config;
pub use engine::{build_scene_prompts, normalize_script, reassemble, SceneEngine};
pub use errors::{AppError, ConfigError};
pub use output::{render_scenes, OutputFormat};
pub use scene::{ScenePrompt, SceneTags};
pub use segmentation::{SegmentationConfig, Segmenter, SentenceDetector};
pub use session::ScriptSession;
pub use synthesis::{CameraMovement, Lighting, Mood, PromptSynthesizer, SynthesisConfig, VisualStyle};

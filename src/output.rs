/*!
 * Rendering scene sequences for humans and tools.
 */

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::errors::AppError;
use crate::scene::ScenePrompt;
use crate::session::summarize;

/// Shown instead of a scene list when a script produced nothing.
pub const NO_SCENES_MESSAGE: &str = "No scenes yet";

/// Output format for rendered scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one block per scene
    #[default]
    Text,
    /// Pretty-printed JSON array of scene records
    Json,
    /// Markdown with one section per scene
    Markdown,
}

impl OutputFormat {
    /// File extension used when writing this format next to a script.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render scenes in the requested format.
pub fn render_scenes(scenes: &[ScenePrompt], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(scenes)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_text(scenes)),
        OutputFormat::Markdown => Ok(render_markdown(scenes)),
    }
}

fn render_text(scenes: &[ScenePrompt]) -> String {
    let Some(summary) = summarize(scenes.len()) else {
        return format!("{}\n", NO_SCENES_MESSAGE);
    };

    let mut out = String::new();
    for scene in scenes {
        // Writing into a String cannot fail
        let _ = writeln!(out, "Scene {}", scene.index);
        let _ = writeln!(out, "Script: {}", scene.script_slice);
        let _ = writeln!(
            out,
            "Mood: {} | Lighting: {} | Camera: {} | Style: {}",
            scene.mood, scene.lighting, scene.movement, scene.style
        );
        let _ = writeln!(out, "Prompt: {}", scene.prompt);
        out.push('\n');
    }
    out.push_str(&summary);
    out.push('\n');
    out
}

fn render_markdown(scenes: &[ScenePrompt]) -> String {
    let mut out = String::from("# Scene Breakdown\n\n");
    let Some(summary) = summarize(scenes.len()) else {
        out.push_str(&format!("_{}_\n", NO_SCENES_MESSAGE));
        return out;
    };

    let _ = writeln!(out, "_{}_\n", summary);
    for scene in scenes {
        let _ = writeln!(out, "## Scene {}\n", scene.index);
        let _ = writeln!(out, "> {}\n", scene.script_slice);
        let _ = writeln!(out, "- **Mood:** {}", scene.mood);
        let _ = writeln!(out, "- **Lighting:** {}", scene.lighting);
        let _ = writeln!(out, "- **Camera:** {}", scene.movement);
        let _ = writeln!(out, "- **Style:** {}\n", scene.style);
        let _ = writeln!(out, "```text\n{}\n```\n", scene.prompt);
    }
    out
}

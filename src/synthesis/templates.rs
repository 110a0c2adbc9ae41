/*!
 * Prompt templates for text-to-video generation.
 *
 * A template orders the scene content and the four tag directives. The
 * closing directive (vertical framing, clip length, content suitability) is
 * appended to every rendered prompt and cannot be removed by a template.
 */

use crate::scene::SceneTags;
use crate::synthesis::tags::CinematicTag;

/// Placeholders every template has to contain.
pub const REQUIRED_PLACEHOLDERS: &[&str] =
    &["{content}", "{mood}", "{lighting}", "{movement}", "{style}"];

/// Appended to every prompt.
pub const CLOSING_DIRECTIVE: &str = "Vertical 9:16 framing, 2-4 second clip, smooth natural motion, \
no on-screen text, logos or watermarks, safe for all audiences.";

/// Template for one scene prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default scene prompt.
    pub const SCENE_PROMPT: &'static str = "Scene {index}: {content}. \
Mood: {mood}. Lighting: {lighting}. Camera: {movement}. Style: {style}.";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default scene template.
    pub fn scene_prompt() -> Self {
        Self::new(Self::SCENE_PROMPT)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Placeholders from `REQUIRED_PLACEHOLDERS` the template lacks.
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        REQUIRED_PLACEHOLDERS
            .iter()
            .copied()
            .filter(|placeholder| !self.template.contains(placeholder))
            .collect()
    }

    /// Render the template and append the closing directive.
    pub fn render(&self, index: usize, content: &str, tags: &SceneTags) -> String {
        let body = self
            .template
            .replace("{index}", &index.to_string())
            .replace("{mood}", tags.mood.directive())
            .replace("{lighting}", tags.lighting.directive())
            .replace("{movement}", tags.movement.directive())
            .replace("{style}", tags.style.directive())
            .replace("{content}", content);

        format!("{} {}", body.trim_end(), CLOSING_DIRECTIVE)
    }

    /// How many times the content is inserted into a prompt.
    pub fn content_slots(&self) -> usize {
        self.template.matches("{content}").count()
    }

    /// Characters a prompt would take with empty content.
    pub fn overhead_chars(&self, index: usize, tags: &SceneTags) -> usize {
        self.render(index, "", tags).chars().count()
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::scene_prompt()
    }
}

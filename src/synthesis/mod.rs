/*!
 * Prompt synthesis for individual scenes.
 *
 * The synthesizer looks at one script slice at a time. It infers the four
 * cinematic tags from lexical cues, restates the slice as visual content and
 * renders the prompt through a `PromptTemplate`. It keeps no state between
 * calls, so slices can be synthesized in any order.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::scene::{ScenePrompt, SceneTags};

pub mod cues;
pub mod tags;
pub mod templates;

pub use self::cues::{CueRule, CueTable, TokenizedSlice};
pub use self::tags::{CameraMovement, CinematicTag, Lighting, Mood, VisualStyle};
pub use self::templates::{PromptTemplate, CLOSING_DIRECTIVE};

/// Upper bound on the rendered prompt, in characters.
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 1000;

/// Smallest prompt budget accepted by configuration validation.
pub const MIN_PROMPT_CHARS: usize = 400;

/// Content used when a slice restates to nothing.
const FALLBACK_CONTENT: &str = "A cinematic moment";

/// Screenplay transitions and sluglines that describe the edit, not the picture.
static LEADING_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:smash\s+)?cut\s+to|dissolve\s+to|fade\s+(?:in|out|to)|int\.|ext\.)[\s:.,-]*")
        .expect("Invalid leading marker regex")
});

/// Configuration for prompt synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Template used to render every prompt
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,

    /// Maximum prompt length in characters
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,

    /// Force one visual style on every scene instead of inferring it
    #[serde(default)]
    pub fixed_style: Option<VisualStyle>,
}

fn default_prompt_template() -> String {
    PromptTemplate::SCENE_PROMPT.to_string()
}

fn default_max_prompt_chars() -> usize {
    DEFAULT_MAX_PROMPT_CHARS
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            prompt_template: default_prompt_template(),
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
            fixed_style: None,
        }
    }
}

/// Turns script slices into scene prompts.
#[derive(Debug, Clone)]
pub struct PromptSynthesizer {
    config: SynthesisConfig,
    template: PromptTemplate,
}

impl PromptSynthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        let template = PromptTemplate::new(&config.prompt_template);
        Self { config, template }
    }

    pub fn with_defaults() -> Self {
        Self::new(SynthesisConfig::default())
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Infer the cinematic tags of a slice, falling back to category defaults.
    pub fn infer_tags(&self, slice: &str) -> SceneTags {
        let tokens = TokenizedSlice::new(slice);
        let style = self
            .config
            .fixed_style
            .unwrap_or_else(|| cues::STYLE_CUES.classify_or_default(&tokens));

        SceneTags {
            mood: cues::MOOD_CUES.classify_or_default(&tokens),
            lighting: cues::LIGHTING_CUES.classify_or_default(&tokens),
            movement: cues::MOVEMENT_CUES.classify_or_default(&tokens),
            style,
        }
    }

    /// Build the scene record for one slice at a 1-based position.
    pub fn synthesize(&self, slice: &str, index: usize) -> ScenePrompt {
        let tags = self.infer_tags(slice);
        let prompt = self.render_prompt(slice, index, &tags);

        debug!(
            "Scene {}: mood={:?} lighting={:?} movement={:?} style={:?} ({} chars)",
            index,
            tags.mood,
            tags.lighting,
            tags.movement,
            tags.style,
            prompt.chars().count()
        );

        ScenePrompt::new(index, slice.to_string(), tags, prompt)
    }

    /// Render the prompt for a slice with already inferred tags.
    pub fn render_prompt(&self, slice: &str, index: usize, tags: &SceneTags) -> String {
        let content = restate_content(slice);
        let overhead = self.template.overhead_chars(index, tags);
        // Every slot repeats the content, so each gets an equal share
        let budget = self.config.max_prompt_chars.saturating_sub(overhead)
            / self.template.content_slots().max(1);

        if overhead >= self.config.max_prompt_chars {
            warn!(
                "Prompt template needs {} chars, above the {} char limit",
                overhead, self.config.max_prompt_chars
            );
        }

        let content = truncate_at_word(&content, budget);
        self.template.render(index, &content, tags)
    }
}

impl Default for PromptSynthesizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Restate a slice as the visual content of a shot.
///
/// Leading transitions such as "Cut to" are dropped, trailing sentence
/// punctuation is removed (the template supplies its own) and the first
/// letter is capitalized.
pub fn restate_content(slice: &str) -> String {
    let stripped = LEADING_MARKER.replace(slice.trim(), "");
    let stripped = stripped
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | '…' | ',' | ';' | ':'))
        .trim_end();

    if !stripped.chars().any(char::is_alphanumeric) {
        return FALLBACK_CONTENT.to_string();
    }

    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => FALLBACK_CONTENT.to_string(),
    }
}

/// Cut `text` to at most `max_chars` characters at a word boundary, marking
/// the cut with an ellipsis.
pub fn truncate_at_word(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    // Leave room for the ellipsis
    let keep = max_chars - 1;
    let cut = text
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..cut];

    let head = match head.rfind(char::is_whitespace) {
        Some(space) if space > 0 => &head[..space],
        _ => head,
    };

    format!("{}…", head.trim_end_matches(|c: char| !c.is_alphanumeric()))
}

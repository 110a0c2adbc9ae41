/*!
 * Script segmentation.
 *
 * A script is split into scene-sized slices that each fit a short clip:
 * - Paragraphs (blank-line separated) are the candidate scenes
 * - Paragraphs below a minimum word count are merged with a neighbour
 * - Slices above the word or sentence budget are split at the sentence
 *   boundary that best balances the two halves
 *
 * A sentence is never split. Joining the slices with a single space returns
 * the whitespace-normalized script.
 */

pub mod paragraphs;
pub mod sentences;

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

pub use self::paragraphs::{collapse_whitespace, count_words, has_words, split_paragraphs};
pub use self::sentences::{PunctuationSentenceDetector, SentenceDetector};

/// Upper bound on words in one scene, roughly what can be voiced in a 2-4 second clip.
pub const DEFAULT_MAX_WORDS_PER_SCENE: usize = 40;

/// Upper bound on sentences in one scene.
pub const DEFAULT_MAX_SENTENCES_PER_SCENE: usize = 3;

/// Paragraphs with fewer words than this are merged with a neighbour.
pub const DEFAULT_MIN_WORDS_PER_SCENE: usize = 6;

/// Configuration for script segmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Maximum words per scene before a split is forced
    #[serde(default = "default_max_words_per_scene")]
    pub max_words_per_scene: usize,

    /// Maximum sentences per scene before a split is forced
    #[serde(default = "default_max_sentences_per_scene")]
    pub max_sentences_per_scene: usize,

    /// Paragraphs shorter than this are merged into a neighbour
    #[serde(default = "default_min_words_per_scene")]
    pub min_words_per_scene: usize,
}

fn default_max_words_per_scene() -> usize {
    DEFAULT_MAX_WORDS_PER_SCENE
}

fn default_max_sentences_per_scene() -> usize {
    DEFAULT_MAX_SENTENCES_PER_SCENE
}

fn default_min_words_per_scene() -> usize {
    DEFAULT_MIN_WORDS_PER_SCENE
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            max_words_per_scene: DEFAULT_MAX_WORDS_PER_SCENE,
            max_sentences_per_scene: DEFAULT_MAX_SENTENCES_PER_SCENE,
            min_words_per_scene: DEFAULT_MIN_WORDS_PER_SCENE,
        }
    }
}

impl SegmentationConfig {
    /// Tighter budget for very fast-paced edits.
    pub fn quick_cuts() -> Self {
        Self {
            max_words_per_scene: 20,
            max_sentences_per_scene: 2,
            min_words_per_scene: 4,
        }
    }

    /// Looser budget that keeps most paragraphs whole.
    pub fn long_takes() -> Self {
        Self {
            max_words_per_scene: 70,
            max_sentences_per_scene: 5,
            min_words_per_scene: 8,
        }
    }

    /// Whether a slice with the given size stays within budget.
    pub fn fits(&self, words: usize, sentences: usize) -> bool {
        words <= self.max_words_per_scene && sentences <= self.max_sentences_per_scene
    }
}

/// Counters collected during one segmentation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentationStats {
    /// Non-empty paragraphs found
    pub paragraphs: usize,

    /// Short paragraphs merged into a neighbour
    pub merges: usize,

    /// Splits performed on over-budget slices
    pub splits: usize,

    /// Slices produced
    pub scenes: usize,
}

#[derive(Debug, Clone, Copy)]
struct Sentence<'a> {
    text: &'a str,
    words: usize,
}

impl<'a> Sentence<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            words: count_words(text),
        }
    }

    /// Punctuation-only fragments do not count toward the sentence budget.
    fn is_counted(&self) -> bool {
        self.words > 0
    }
}

/// A run of sentences that will become one or more scenes.
#[derive(Debug, Clone)]
struct Unit<'a> {
    sentences: Vec<Sentence<'a>>,
}

impl<'a> Unit<'a> {
    fn words(&self) -> usize {
        total_words(&self.sentences)
    }

    fn counted_sentences(&self) -> usize {
        counted_sentences(&self.sentences)
    }

    /// Whether this unit and `other` can share one scene.
    fn can_absorb(&self, other: &Unit<'a>, config: &SegmentationConfig) -> bool {
        if self.words() == 0 || other.words() == 0 {
            return true;
        }
        config.fits(
            self.words() + other.words(),
            self.counted_sentences() + other.counted_sentences(),
        )
    }

    fn absorb(&mut self, other: Unit<'a>) {
        self.sentences.extend(other.sentences);
    }
}

fn total_words(sentences: &[Sentence<'_>]) -> usize {
    sentences.iter().map(|s| s.words).sum()
}

fn counted_sentences(sentences: &[Sentence<'_>]) -> usize {
    sentences.iter().filter(|s| s.is_counted()).count()
}

fn join_sentences(sentences: &[Sentence<'_>]) -> String {
    sentences
        .iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits scripts into scene-sized slices.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmentationConfig,
    detector: Arc<dyn SentenceDetector>,
}

impl Segmenter {
    /// Create a segmenter using the punctuation sentence detector.
    pub fn new(config: SegmentationConfig) -> Self {
        Self::with_detector(config, Arc::new(PunctuationSentenceDetector::new()))
    }

    /// Create a segmenter with a custom sentence detector.
    pub fn with_detector(config: SegmentationConfig, detector: Arc<dyn SentenceDetector>) -> Self {
        Self { config, detector }
    }

    /// Create a segmenter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SegmentationConfig::default())
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Split a script into ordered, non-empty slices.
    ///
    /// Returns an empty vector when the script has no letters or digits.
    pub fn segment(&self, script: &str) -> Vec<String> {
        self.segment_with_stats(script).0
    }

    /// Split a script and report what the segmenter did.
    pub fn segment_with_stats(&self, script: &str) -> (Vec<String>, SegmentationStats) {
        let mut stats = SegmentationStats::default();

        let paragraphs = split_paragraphs(script);
        if !paragraphs.iter().any(|p| has_words(p)) {
            return (Vec::new(), stats);
        }
        stats.paragraphs = paragraphs.len();

        let units: Vec<Unit<'_>> = paragraphs
            .iter()
            .map(|paragraph| Unit {
                sentences: self
                    .detector
                    .sentences(paragraph)
                    .into_iter()
                    .map(Sentence::new)
                    .collect(),
            })
            .filter(|unit| !unit.sentences.is_empty())
            .collect();

        let units = self.merge_short_units(units, &mut stats);

        let mut slices = Vec::with_capacity(units.len());
        for unit in &units {
            self.split_into(&unit.sentences, &mut slices, &mut stats);
        }
        stats.scenes = slices.len();

        debug!(
            "Segmented script: {} paragraphs, {} merges, {} splits, {} scenes",
            stats.paragraphs, stats.merges, stats.splits, stats.scenes
        );

        (slices, stats)
    }

    /// Merge units below the minimum word count into the following unit, or
    /// into the previous one when the following unit has no room.
    fn merge_short_units<'a>(
        &self,
        units: Vec<Unit<'a>>,
        stats: &mut SegmentationStats,
    ) -> Vec<Unit<'a>> {
        let mut merged: Vec<Unit<'a>> = Vec::with_capacity(units.len());
        let mut pending: Option<Unit<'a>> = None;

        for unit in units {
            let current = match pending.take() {
                Some(mut short) if short.can_absorb(&unit, &self.config) => {
                    short.absorb(unit);
                    stats.merges += 1;
                    short
                }
                Some(short) => {
                    Self::attach_to_previous(&self.config, &mut merged, short, stats);
                    unit
                }
                None => unit,
            };

            if current.words() < self.config.min_words_per_scene {
                pending = Some(current);
            } else {
                merged.push(current);
            }
        }

        if let Some(short) = pending {
            Self::attach_to_previous(&self.config, &mut merged, short, stats);
        }

        merged
    }

    /// Append a short unit to the last merged unit when it fits, otherwise
    /// keep it as its own scene.
    fn attach_to_previous<'a>(
        config: &SegmentationConfig,
        merged: &mut Vec<Unit<'a>>,
        short: Unit<'a>,
        stats: &mut SegmentationStats,
    ) {
        match merged.last_mut() {
            Some(previous) if previous.can_absorb(&short, config) => {
                previous.absorb(short);
                stats.merges += 1;
            }
            _ => merged.push(short),
        }
    }

    /// Push the sentences as one slice, or split them in two and recurse
    /// while they exceed the budget.
    fn split_into(
        &self,
        sentences: &[Sentence<'_>],
        slices: &mut Vec<String>,
        stats: &mut SegmentationStats,
    ) {
        let words = total_words(sentences);
        let counted = counted_sentences(sentences);

        if counted < 2 || self.config.fits(words, counted) {
            slices.push(join_sentences(sentences));
            return;
        }

        let Some(at) = balanced_split_point(sentences) else {
            slices.push(join_sentences(sentences));
            return;
        };

        stats.splits += 1;
        self.split_into(&sentences[..at], slices, stats);
        self.split_into(&sentences[at..], slices, stats);
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Pick the boundary that best balances the word counts of both halves.
///
/// Ties go to the boundary closest to the middle sentence, then to the
/// earlier boundary. Both halves must hold at least one word.
fn balanced_split_point(sentences: &[Sentence<'_>]) -> Option<usize> {
    let total = total_words(sentences);
    let count = sentences.len();
    let mut left_words = 0;
    let mut best: Option<(usize, usize, usize)> = None;

    for at in 1..count {
        left_words += sentences[at - 1].words;
        let right_words = total - left_words;
        if left_words == 0 || right_words == 0 {
            continue;
        }

        let imbalance = (2 * left_words).abs_diff(total);
        let from_middle = (2 * at).abs_diff(count);
        let candidate = (imbalance, from_middle, at);

        if best.is_none_or(|current| candidate < current) {
            best = Some(candidate);
        }
    }

    best.map(|(_, _, at)| at)
}

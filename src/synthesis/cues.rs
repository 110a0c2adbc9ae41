/*!
 * Lexical cue tables.
 *
 * Each tag category is inferred from an explicit rule table mapping keywords
 * to a tag. A slice is scored against every rule: a rule scores its weight
 * once for each distinct keyword found in the slice. The highest score wins;
 * ties go to the rule listed first. A slice with no hits gets no tag and the
 * caller falls back to the category default.
 *
 * Single-word keywords also match regular inflections: `run` matches `runs`
 * and `running`, `glide` matches `glided` and `gliding`, `crash` matches
 * `crashes`. Keywords containing a space match as phrases.
 */

use log::trace;

use crate::synthesis::tags::{CameraMovement, CinematicTag, Lighting, Mood, VisualStyle};

/// Endings that take `es` instead of `s`.
const SIBILANT_ENDINGS: &[&str] = &["s", "x", "z", "ch", "sh"];

/// A slice lowered and split into word tokens for cue matching.
#[derive(Debug, Clone)]
pub struct TokenizedSlice {
    tokens: Vec<String>,
    padded: String,
}

impl TokenizedSlice {
    pub fn new(text: &str) -> Self {
        let lowered = text.to_lowercase().replace('’', "'");
        let tokens: Vec<String> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|token| token.trim_matches('\''))
            .map(|token| token.strip_suffix("'s").unwrap_or(token))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        let padded = format!(" {} ", tokens.join(" "));

        Self { tokens, padded }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether the keyword appears in the slice.
    pub fn contains_cue(&self, cue: &str) -> bool {
        if cue.contains(' ') {
            return self.padded.contains(&format!(" {} ", cue));
        }
        self.tokens.iter().any(|token| word_matches(token, cue))
    }
}

fn word_matches(token: &str, cue: &str) -> bool {
    let ends_in_e = cue.ends_with('e');

    let Some(suffix) = token.strip_prefix(cue) else {
        // glide -> gliding
        return ends_in_e
            && token.strip_suffix("ing").is_some_and(|stem| cue.strip_suffix('e') == Some(stem));
    };

    match suffix {
        "" | "s" | "ly" => true,
        "es" => SIBILANT_ENDINGS.iter().any(|ending| cue.ends_with(ending)),
        "d" => ends_in_e,
        "ed" | "ing" => !ends_in_e,
        _ => doubles_final_consonant(cue, suffix),
    }
}

/// step -> stepped, sit -> sitting
fn doubles_final_consonant(cue: &str, suffix: &str) -> bool {
    let Some(last) = cue.chars().last() else {
        return false;
    };
    if !last.is_ascii_alphabetic() || "aeiouwxy".contains(last) {
        return false;
    }
    suffix
        .strip_prefix(last)
        .is_some_and(|rest| rest == "ed" || rest == "ing")
}

/// One keyword to tag mapping.
#[derive(Debug, Clone, Copy)]
pub struct CueRule<T: 'static> {
    pub tag: T,
    pub weight: u32,
    pub keywords: &'static [&'static str],
}

impl<T: CinematicTag> CueRule<T> {
    /// Score of this rule against a slice.
    pub fn score(&self, slice: &TokenizedSlice) -> u32 {
        let hits = self
            .keywords
            .iter()
            .filter(|keyword| slice.contains_cue(keyword))
            .count() as u32;
        hits * self.weight
    }
}

/// Ordered rule table for one tag category.
#[derive(Debug, Clone, Copy)]
pub struct CueTable<T: 'static> {
    rules: &'static [CueRule<T>],
}

impl<T: CinematicTag> CueTable<T> {
    pub const fn new(rules: &'static [CueRule<T>]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [CueRule<T>] {
        self.rules
    }

    /// Best matching tag, or `None` when no rule has a hit.
    pub fn classify(&self, slice: &TokenizedSlice) -> Option<T> {
        let mut best: Option<(T, u32)> = None;

        for rule in self.rules {
            let score = rule.score(slice);
            if score == 0 {
                continue;
            }
            trace!("{} cue {:?} scored {}", T::CATEGORY, rule.tag, score);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((rule.tag, score));
            }
        }

        best.map(|(tag, _)| tag)
    }

    /// Best matching tag, or the category default.
    pub fn classify_or_default(&self, slice: &TokenizedSlice) -> T {
        self.classify(slice).unwrap_or_default()
    }
}

/// Emotional vocabulary.
pub static MOOD_CUES: CueTable<Mood> = CueTable::new(&[
    CueRule {
        tag: Mood::Tense,
        weight: 1,
        keywords: &[
            "danger", "fear", "afraid", "scream", "panic", "threat", "chase", "escape", "gun",
            "blood", "tense", "tension", "dread", "alarm", "fight", "trap", "hunt", "desperate",
        ],
    },
    CueRule {
        tag: Mood::Joyful,
        weight: 1,
        keywords: &[
            "joy", "laugh", "smile", "celebrate", "cheer", "excitement", "excited", "delight",
            "happy", "dance", "grin", "party", "playful", "triumph",
        ],
    },
    CueRule {
        tag: Mood::Hopeful,
        weight: 1,
        keywords: &[
            "hope", "dream", "believe", "vision", "promise", "inspire", "faith", "wish",
            "future", "determined", "new beginning",
        ],
    },
    CueRule {
        tag: Mood::Calm,
        weight: 1,
        keywords: &[
            "quiet", "calm", "still", "silent", "peaceful", "gentle", "serene", "soft",
            "relax", "breeze", "tranquil", "rest",
        ],
    },
    CueRule {
        tag: Mood::Melancholic,
        weight: 1,
        keywords: &[
            "alone", "lone", "lonely", "grief", "tears", "cry", "loss", "goodbye", "funeral",
            "empty", "regret", "mourn", "sorrow", "farewell",
        ],
    },
    CueRule {
        tag: Mood::Mysterious,
        weight: 1,
        keywords: &[
            "shadow", "fog", "mist", "secret", "whisper", "unknown", "hidden", "strange",
            "mysterious", "eerie", "cloaked", "silhouette",
        ],
    },
    CueRule {
        tag: Mood::Awe,
        weight: 1,
        keywords: &[
            "vast", "towering", "majestic", "endless", "breathtaking", "overwhelmed", "wonder",
            "colossal", "infinite", "sublime",
        ],
    },
]);

/// Time-of-day cues outweigh environment cues.
pub static LIGHTING_CUES: CueTable<Lighting> = CueTable::new(&[
    CueRule {
        tag: Lighting::Sunrise,
        weight: 3,
        keywords: &["sunrise", "dawn", "daybreak", "first light", "sunup"],
    },
    CueRule {
        tag: Lighting::Morning,
        weight: 3,
        keywords: &["morning", "breakfast", "early light"],
    },
    CueRule {
        tag: Lighting::Daylight,
        weight: 3,
        keywords: &["noon", "midday", "afternoon", "sunlit", "sunny", "daylight"],
    },
    CueRule {
        tag: Lighting::GoldenHour,
        weight: 3,
        keywords: &["sunset", "dusk", "golden hour", "evening", "sundown"],
    },
    CueRule {
        tag: Lighting::Twilight,
        weight: 3,
        keywords: &["twilight", "blue hour", "nightfall", "gloaming"],
    },
    CueRule {
        tag: Lighting::Night,
        weight: 3,
        keywords: &["night", "midnight", "moon", "moonlight", "moonlit", "neon", "darkness"],
    },
    CueRule {
        tag: Lighting::Storm,
        weight: 1,
        keywords: &["storm", "rain", "thunder", "lightning", "overcast", "downpour", "clouds"],
    },
    CueRule {
        tag: Lighting::Interior,
        weight: 1,
        keywords: &[
            "studio", "loft", "room", "office", "kitchen", "hallway", "indoors", "interior",
            "inside", "apartment", "bedroom", "warehouse", "lamp", "candle", "monitor",
        ],
    },
]);

/// Action verbs and camera-implying language.
pub static MOVEMENT_CUES: CueTable<CameraMovement> = CueTable::new(&[
    CueRule {
        tag: CameraMovement::Handheld,
        weight: 1,
        keywords: &[
            "bustling", "chaos", "chaotic", "stumble", "scramble", "frantic", "shaky", "crowd",
            "fight", "struggle", "rush",
        ],
    },
    CueRule {
        tag: CameraMovement::Tracking,
        weight: 1,
        keywords: &[
            "run", "ran", "chase", "walk", "follow", "race", "glide", "drive",
            "ride", "step", "roll", "sprint", "march",
        ],
    },
    CueRule {
        tag: CameraMovement::Sweeping,
        weight: 1,
        keywords: &[
            "sweep", "soar", "fly", "aerial", "overhead", "vista", "panorama",
            "landscape", "skyline",
        ],
    },
    CueRule {
        tag: CameraMovement::PushIn,
        weight: 1,
        keywords: &[
            "reveal", "realize", "stare", "gaze", "focus", "notice", "read", "close up",
            "discover",
        ],
    },
    CueRule {
        tag: CameraMovement::SlowPan,
        weight: 1,
        keywords: &["pan", "across", "scan", "survey", "gather", "surround", "line up"],
    },
    CueRule {
        tag: CameraMovement::Static,
        weight: 1,
        keywords: &[
            "sit", "stand", "talk", "speak", "dialogue", "conversation", "nod", "watch", "wait",
            "listen", "pause",
        ],
    },
]);

/// Genre cues; most scripts fall through to the cinematic vertical default.
pub static STYLE_CUES: CueTable<VisualStyle> = CueTable::new(&[
    CueRule {
        tag: VisualStyle::Noir,
        weight: 1,
        keywords: &["detective", "noir", "crime", "cigarette", "alley", "gangster", "femme fatale"],
    },
    CueRule {
        tag: VisualStyle::Documentary,
        weight: 1,
        keywords: &["interview", "documentary", "archival", "footage", "reporter", "testimony"],
    },
    CueRule {
        tag: VisualStyle::Epic,
        weight: 1,
        keywords: &["battle", "army", "kingdom", "empire", "warrior", "legend", "conquest"],
    },
    CueRule {
        tag: VisualStyle::Dreamlike,
        weight: 1,
        keywords: &["dreamlike", "surreal", "floating", "magic", "magical", "fairy", "hallucination"],
    },
    CueRule {
        tag: VisualStyle::Vintage,
        weight: 1,
        keywords: &["vintage", "retro", "sepia", "polaroid", "old photograph", "jukebox"],
    },
]);

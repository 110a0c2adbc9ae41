/*!
 * Closed vocabulary of cinematic tags.
 *
 * Every category has a fixed set of values and a documented default that is
 * used when a scene carries no lexical cue for it. In configuration a tag is
 * written as its kebab-case identifier. `label()` is the short human tag
 * stored on scene records (see [`as_label`]) and `directive()` the production
 * phrasing used inside prompts. A directive always contains its label.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Behaviour shared by all tag categories.
pub trait CinematicTag: Copy + Eq + Default + fmt::Debug + 'static {
    /// Category name, used in logs.
    const CATEGORY: &'static str;

    /// Every value of the category.
    fn all() -> &'static [Self];

    /// Short tag shown alongside the scene.
    fn label(&self) -> &'static str;

    /// Camera/production phrasing used in the prompt.
    fn directive(&self) -> &'static str;

    /// The tag whose label is `label`.
    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tag| tag.label() == label)
    }
}

/// Serde adapter writing a tag as its label.
///
/// Reading accepts the label or the kebab-case identifier.
pub mod as_label {
    use serde::de::{DeserializeOwned, IntoDeserializer};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CinematicTag;

    pub fn serialize<T, S>(tag: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: CinematicTag,
        S: Serializer,
    {
        serializer.serialize_str(tag.label())
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: CinematicTag + DeserializeOwned,
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match T::from_label(&value) {
            Some(tag) => Ok(tag),
            None => T::deserialize(IntoDeserializer::<D::Error>::into_deserializer(value.as_str())),
        }
    }
}

/// Emotional register of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Tense,
    Joyful,
    Hopeful,
    Calm,
    Melancholic,
    Mysterious,
    Awe,
    #[default]
    Balanced,
}

impl CinematicTag for Mood {
    const CATEGORY: &'static str = "mood";

    fn all() -> &'static [Self] {
        &[
            Self::Tense,
            Self::Joyful,
            Self::Hopeful,
            Self::Calm,
            Self::Melancholic,
            Self::Mysterious,
            Self::Awe,
            Self::Balanced,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Tense => "tense",
            Self::Joyful => "joyful",
            Self::Hopeful => "hopeful",
            Self::Calm => "calm",
            Self::Melancholic => "melancholic",
            Self::Mysterious => "mysterious",
            Self::Awe => "awe-struck",
            Self::Balanced => "balanced",
        }
    }

    fn directive(&self) -> &'static str {
        match self {
            Self::Tense => "tense, suspenseful atmosphere",
            Self::Joyful => "joyful, celebratory energy",
            Self::Hopeful => "hopeful, uplifting emotional tone",
            Self::Calm => "calm, serene atmosphere",
            Self::Melancholic => "melancholic, reflective tone",
            Self::Mysterious => "mysterious, hushed atmosphere",
            Self::Awe => "awe-struck sense of scale and wonder",
            Self::Balanced => "balanced, grounded emotional tone",
        }
    }
}

/// Lighting setup derived from time of day and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lighting {
    Sunrise,
    Morning,
    Daylight,
    GoldenHour,
    Twilight,
    Night,
    Storm,
    Interior,
    #[default]
    NaturalLight,
}

impl CinematicTag for Lighting {
    const CATEGORY: &'static str = "lighting";

    fn all() -> &'static [Self] {
        &[
            Self::Sunrise,
            Self::Morning,
            Self::Daylight,
            Self::GoldenHour,
            Self::Twilight,
            Self::Night,
            Self::Storm,
            Self::Interior,
            Self::NaturalLight,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise glow",
            Self::Morning => "soft morning light",
            Self::Daylight => "bright daylight",
            Self::GoldenHour => "golden hour",
            Self::Twilight => "twilight",
            Self::Night => "moody night",
            Self::Storm => "overcast storm light",
            Self::Interior => "warm interior practicals",
            Self::NaturalLight => "natural light",
        }
    }

    fn directive(&self) -> &'static str {
        match self {
            Self::Sunrise => "warm sunrise glow with long soft shadows",
            Self::Morning => "soft morning light through clean air",
            Self::Daylight => "bright daylight with crisp contrast",
            Self::GoldenHour => "golden hour backlight with warm flares",
            Self::Twilight => "deep blue twilight with glowing accents",
            Self::Night => "moody night lighting with pools of practical light",
            Self::Storm => "diffused overcast storm light under heavy clouds",
            Self::Interior => "warm interior practicals with gentle fill",
            Self::NaturalLight => "balanced natural light",
        }
    }
}

/// Camera motion vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraMovement {
    Handheld,
    Tracking,
    Sweeping,
    PushIn,
    SlowPan,
    Static,
    #[default]
    GentleDrift,
}

impl CinematicTag for CameraMovement {
    const CATEGORY: &'static str = "movement";

    fn all() -> &'static [Self] {
        &[
            Self::Handheld,
            Self::Tracking,
            Self::Sweeping,
            Self::PushIn,
            Self::SlowPan,
            Self::Static,
            Self::GentleDrift,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Handheld => "handheld",
            Self::Tracking => "tracking shot",
            Self::Sweeping => "sweeping crane",
            Self::PushIn => "slow push-in",
            Self::SlowPan => "slow pan",
            Self::Static => "static frame",
            Self::GentleDrift => "gentle drift",
        }
    }

    fn directive(&self) -> &'static str {
        match self {
            Self::Handheld => "energetic handheld camera with subtle shake",
            Self::Tracking => "smooth tracking shot following the subject",
            Self::Sweeping => "sweeping crane move revealing the setting",
            Self::PushIn => "slow push-in toward the subject",
            Self::SlowPan => "slow pan across the scene",
            Self::Static => "static frame on a locked-off camera",
            Self::GentleDrift => "gentle drift with subtle parallax",
        }
    }
}

/// Overall visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualStyle {
    Noir,
    Documentary,
    Epic,
    Dreamlike,
    Vintage,
    #[default]
    CinematicVertical,
}

impl CinematicTag for VisualStyle {
    const CATEGORY: &'static str = "style";

    fn all() -> &'static [Self] {
        &[
            Self::Noir,
            Self::Documentary,
            Self::Epic,
            Self::Dreamlike,
            Self::Vintage,
            Self::CinematicVertical,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Noir => "neo-noir",
            Self::Documentary => "documentary realism",
            Self::Epic => "epic cinematic",
            Self::Dreamlike => "dreamlike",
            Self::Vintage => "vintage film",
            Self::CinematicVertical => "cinematic vertical",
        }
    }

    fn directive(&self) -> &'static str {
        match self {
            Self::Noir => "neo-noir contrast with deep shadows",
            Self::Documentary => "documentary realism with natural textures",
            Self::Epic => "epic cinematic scale with rich detail",
            Self::Dreamlike => "dreamlike haze with soft bloom",
            Self::Vintage => "vintage film grain with faded warmth",
            Self::CinematicVertical => {
                "cinematic vertical composition, shallow depth of field, filmic color grade"
            }
        }
    }
}

macro_rules! display_as_label {
    ($($tag:ty),*) => {
        $(
            impl fmt::Display for $tag {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.label())
                }
            }
        )*
    };
}

display_as_label!(Mood, Lighting, CameraMovement, VisualStyle);

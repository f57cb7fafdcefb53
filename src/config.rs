//! Card configuration.
//!
//! Every DOM id, class name, delay and label the card uses lives here so the
//! markup can change without touching the wiring. `Default` reproduces the
//! birthday card the crate was written for. With the `serde` feature the whole
//! tree derives `Serialize`/`Deserialize` and missing fields fall back to their
//! defaults, so a host page only needs to override what differs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Delay before a closing page is moved back onto the right-hand stack (ms).
/// Matches the CSS flip transition so the z-order change happens off screen.
pub const FLIP_SETTLE_MS: u32 = 500;
/// How often a new floater is spawned (ms).
pub const FLOATER_SPAWN_MS: u32 = 500;
/// Floaters remove themselves after this long regardless of animation state (ms).
pub const FLOATER_LIFETIME_MS: u32 = 15_000;
/// Length of the jump-scare before the overlay is hidden again (ms).
pub const SCARE_MS: u32 = 3_000;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CardConfig {
    pub book: BookConfig,
    pub atmosphere: AtmosphereConfig,
    pub signature: SignatureConfig,
    pub celebration: CelebrationConfig,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BookConfig {
    /// CSS selector matching the page elements, in reading order.
    pub page_selector: String,
    /// Class toggled on while a page lies on the left-hand stack.
    pub flipped_class: String,
    pub settle_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct AtmosphereConfig {
    pub container_id: String,
    pub floater_class: String,
    pub glyphs: Vec<String>,
    pub spawn_interval_ms: u32,
    pub lifetime_ms: u32,
    /// Half-open `[min, max)` font size in rem.
    pub font_rem: (f64, f64),
    /// Half-open `[min, max)` animation duration in seconds.
    pub duration_s: (f64, f64),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SignatureConfig {
    pub line_id: String,
    pub signed_text_id: String,
    pub hidden_class: String,
    pub confetti: ConfettiBurst,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CelebrationConfig {
    pub button_id: String,
    pub overlay_id: String,
    pub hidden_class: String,
    pub audio_url: String,
    pub vibration_ms: Vec<u32>,
    pub scare_ms: u32,
    pub gotcha_label: String,
    pub gotcha_background: String,
}

/// Options handed to the page's `confetti(...)` function.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ConfettiBurst {
    pub particle_count: u32,
    /// Spread angle in degrees.
    pub spread: f64,
    /// Normalized `[0, 1]` origin; `None` lets the library use its default.
    pub origin_x: Option<f64>,
    pub origin_y: Option<f64>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            page_selector: ".page".into(),
            flipped_class: "flipped".into(),
            settle_ms: FLIP_SETTLE_MS,
        }
    }
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            container_id: "bg".into(),
            floater_class: "floater".into(),
            glyphs: ["⚽", "🏆", "⭐", "🔴", "🔵", "🥇", "🏟️"]
                .iter()
                .map(|g| g.to_string())
                .collect(),
            spawn_interval_ms: FLOATER_SPAWN_MS,
            lifetime_ms: FLOATER_LIFETIME_MS,
            font_rem: (1.0, 3.0),
            duration_s: (5.0, 15.0),
        }
    }
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            line_id: "signLine".into(),
            signed_text_id: "signedText".into(),
            hidden_class: "hidden".into(),
            confetti: ConfettiBurst::default(),
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            button_id: "celebrateBtn".into(),
            overlay_id: "jumpscare".into(),
            hidden_class: "hidden".into(),
            audio_url: "https://www.myinstants.com/media/sounds/screaming-girl-horror.mp3".into(),
            vibration_ms: vec![1000, 50, 1000, 50, 1000],
            scare_ms: SCARE_MS,
            gotcha_label: "GOTCHA! 🤣 Happy Birthday!".into(),
            gotcha_background: "#28a745".into(),
        }
    }
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: 50,
            spread: 50.0,
            origin_x: None,
            origin_y: Some(0.7),
        }
    }
}

#[cfg(feature = "serde_json")]
impl CardConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

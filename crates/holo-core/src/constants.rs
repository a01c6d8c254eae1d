use std::time::Duration;

// Shared effect/timing tuning constants used by the web frontend.

// Holo mapping
pub const CENTER_PERCENT: f64 = 50.0;
pub const TILT_DIVISOR: f64 = 8.0; // percent offset from centre per degree of tilt
pub const HYP_MAX: f64 = 0.5; // radial brightness cap
pub const ACTIVE_OPACITY: f64 = 0.7; // shine opacity while hovered
pub const PERCENT_DECIMALS: i32 = 2;
pub const HYP_DECIMALS: i32 = 3;

// Idle float
pub const IDLE_AFTER_MS: u64 = 5_000;
pub const INITIAL_IDLE_MS: u64 = 3_000;
pub const FLOAT_PERIOD_SEC: f64 = 4.0;
pub const FLOAT_STAGGER_SEC: f64 = 0.2;

// Entrance
pub const ENTRANCE_BASE_MS: u64 = 100;
pub const ENTRANCE_STEP_MS: u64 = 100;
pub const ENTRANCE_HIDDEN_TRANSFORM: &str = "translateY(30px) scale(0.9)";
pub const ENTRANCE_SHOWN_TRANSFORM: &str = "translateY(0) scale(1)";
pub const ENTRANCE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// Selectors
pub const CARD_SELECTOR: &str = ".card";
pub const SPREAD_CARD_SELECTOR: &str = ".celtic-cross .card";
pub const CARD_FRONT_SELECTOR: &str = ".card__front";
pub const MODAL_ID: &str = "card-modal";
pub const MODAL_OVERLAY_SELECTOR: &str = ".modal__overlay";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal__close";
pub const MODAL_IMAGE_ID: &str = "modal-card-image";
pub const MODAL_CARD_ID: &str = "modal-card";

// Classes and attributes
pub const ACTIVE_CLASS: &str = "active";
pub const READING_CLASS: &str = "card-reading";
pub const MODAL_CARD_CLASS: &str = "card-modal";
pub const CENTRAL_CLASSES: [&str; 2] = ["card-base", "card-crossing"];
pub const IMAGE_DATA_ATTR: &str = "data-image";
pub const MODAL_IMAGE_ALT: &str = "Tarot Card";

pub const FLOAT_KEYFRAMES_CSS: &str = "
  @keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-5px); }
  }
  .card-base, .card-crossing {
    animation: none !important;
  }
";

/// Timing knobs handed to the controller.
///
/// Defaults mirror the constants above; hosts and tests may shorten them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub idle_after: Duration,
    pub initial_idle: Duration,
    pub entrance_base: Duration,
    pub entrance_step: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            idle_after: Duration::from_millis(IDLE_AFTER_MS),
            initial_idle: Duration::from_millis(INITIAL_IDLE_MS),
            entrance_base: Duration::from_millis(ENTRANCE_BASE_MS),
            entrance_step: Duration::from_millis(ENTRANCE_STEP_MS),
        }
    }
}

impl Settings {
    /// Delay before the `index`-th spread card is revealed.
    pub fn entrance_delay(&self, index: usize) -> Duration {
        self.entrance_base + self.entrance_step * index as u32
    }
}

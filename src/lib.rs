//! Audio-narrated guided-tour engine for the project dashboard.
//!
//! The dashboard itself is static content; the moving part is the tour:
//! a fixed script of steps walked by the [`TourController`], which drives
//! section switches and anchor scrolls through a [`Renderer`] and speaks
//! each step's text through a [`SpeechEngine`]. Both collaborators are
//! traits supplied by the host shell; everything here degrades to
//! visual-only navigation when speech is unavailable.

pub mod config;
pub mod script;
pub mod speech;
pub mod tour;

pub use config::{default_config_path, load_config, save_config, TourConfig};
pub use script::{ScriptError, TourScript, TourStep};
pub use speech::{
    NarrationPlayer, NullSpeechEngine, SpeechEngine, SpeechError, VoiceDirectory, VoiceInfo,
    VoiceSettings,
};
pub use tour::{NavigationBridge, Renderer, TourController, TourState, TourView};

/// Install the fmt tracing subscriber with env-filter. Host binaries call
/// this once at startup; repeated calls are ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

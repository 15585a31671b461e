//! Narration Player — the tour's single mouth.
//!
//! Wraps the speech engine with the at-most-one-utterance guarantee:
//! every `speak` cancels whatever was playing before submitting the next
//! utterance. Engine failures are absorbed here so narration problems can
//! never block navigation or end the tour.

use super::interface::{SpeechEngine, VoiceInfo, VoiceSettings, RATE_MAX, RATE_MIN};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct NarrationPlayer {
    engine: Arc<dyn SpeechEngine>,
}

impl NarrationPlayer {
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self { engine }
    }

    /// Cancel any current utterance and submit `text` with the voice
    /// resolved from `settings`. A selected voice that no longer exists in
    /// the catalog falls back to the engine default. Fire-and-forget: the
    /// call returns once the utterance is submitted, not when it finishes.
    pub async fn speak(&self, text: &str, settings: &VoiceSettings, catalog: &[VoiceInfo]) {
        self.engine.cancel_all();

        if !self.engine.is_available().await {
            debug!("[Narration] engine unavailable — skipping utterance");
            return;
        }

        let voice_id = settings
            .voice_id
            .as_deref()
            .filter(|id| catalog.iter().any(|v| v.id == *id));
        if settings.voice_id.is_some() && voice_id.is_none() {
            debug!(
                "[Narration] selected voice {:?} not in catalog — using engine default",
                settings.voice_id
            );
        }

        let rate = settings.rate.clamp(RATE_MIN, RATE_MAX);
        if let Err(e) = self.engine.speak(text, voice_id, rate).await {
            warn!("[Narration] utterance failed: {}", e);
        }
    }

    /// Cancel any in-flight or queued utterance. Safe to call when
    /// nothing is playing.
    pub fn stop(&self) {
        self.engine.cancel_all();
    }
}

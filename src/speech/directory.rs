//! Voice Directory — discovers, caches, and ranks narration voices.
//!
//! The catalog is a pure function of the engine's current report: each
//! refresh replaces the cached list wholesale (no merge), sorted with
//! English-tagged voices first.

use super::interface::{SpeechEngine, VoiceInfo};
use crate::config::TourConfig;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Cached, ranked view of the engine's voice inventory.
#[derive(Clone)]
pub struct VoiceDirectory {
    engine: Arc<dyn SpeechEngine>,
    catalog: Arc<RwLock<Vec<VoiceInfo>>>,
}

impl VoiceDirectory {
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            catalog: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Re-query the engine and replace the cached catalog.
    pub async fn refresh(&self) -> Vec<VoiceInfo> {
        let voices = sort_voices(self.engine.enumerate_voices());
        debug!("[Voice] catalog refreshed: {} voices", voices.len());
        let mut catalog = self.catalog.write().await;
        *catalog = voices.clone();
        voices
    }

    /// Current catalog without touching the engine.
    pub async fn catalog(&self) -> Vec<VoiceInfo> {
        self.catalog.read().await.clone()
    }

    /// Lazy first load: query the engine only if nothing is cached yet.
    /// The engine may legitimately still report zero voices at this point;
    /// a later "voices changed" notification fills the catalog in.
    pub async fn ensure_loaded(&self) -> Vec<VoiceInfo> {
        {
            let catalog = self.catalog.read().await;
            if !catalog.is_empty() {
                return catalog.clone();
            }
        }
        self.refresh().await
    }

    /// Spawn a background task that refreshes the catalog whenever the
    /// engine signals a voice inventory change.
    pub fn watch_changes(&self) {
        let Some(mut rx) = self.engine.subscribe_voices() else {
            return;
        };
        let directory = self.clone();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(()) | Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => {
                        directory.refresh().await;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }

    /// Default voice selection policy. Priority:
    ///   1. exact preferred display name
    ///   2. exact preferred locale tag
    ///   3. preferred language prefix
    ///   4. first voice in the catalog
    /// Returns None only when the catalog is empty. Does not mutate
    /// settings — the caller decides whether to apply the result.
    pub fn pick_default(catalog: &[VoiceInfo], config: &TourConfig) -> Option<String> {
        if let Some(ref name) = config.preferred_voice {
            if let Some(voice) = catalog.iter().find(|v| &v.display_name == name) {
                return Some(voice.id.clone());
            }
        }
        if let Some(voice) = catalog
            .iter()
            .find(|v| v.language_tag == config.preferred_locale)
        {
            return Some(voice.id.clone());
        }
        if let Some(voice) = catalog
            .iter()
            .find(|v| v.language_tag.starts_with(&config.language_prefix))
        {
            return Some(voice.id.clone());
        }
        catalog.first().map(|v| v.id.clone())
    }
}

/// English-tagged voices first, then lexicographic by display name.
/// The sort is stable, so full ties keep the engine's enumeration order.
fn sort_voices(mut voices: Vec<VoiceInfo>) -> Vec<VoiceInfo> {
    voices.sort_by(|a, b| {
        b.is_english()
            .cmp(&a.is_english())
            .then_with(|| a.display_name.cmp(&b.display_name))
    });
    voices
}

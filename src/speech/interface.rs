use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

/// Narration rate bounds. Settings outside this range are clamped on write.
pub const RATE_MIN: f32 = 0.5;
pub const RATE_MAX: f32 = 2.0;

// ── Error Types ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SpeechError {
    Unavailable(String),
    SubmitFailed(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::Unavailable(msg) => write!(f, "Speech engine unavailable: {}", msg),
            SpeechError::SubmitFailed(msg) => write!(f, "Utterance submit failed: {}", msg),
        }
    }
}

impl std::error::Error for SpeechError {}

// ── Voice Descriptors ──────────────────────────────────

/// One narration voice as reported by the speech engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub id: String,
    pub display_name: String,
    /// BCP 47 style tag, e.g. "en-US".
    pub language_tag: String,
}

impl VoiceInfo {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        language_tag: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            language_tag: language_tag.into(),
        }
    }

    /// Whether the primary language subtag is English ("en" or "en-*"),
    /// ASCII case-insensitive.
    pub fn is_english(&self) -> bool {
        let tag = self.language_tag.to_ascii_lowercase();
        tag == "en" || tag.starts_with("en-")
    }
}

/// Voice selection shared across tour sessions within a run.
/// `voice_id = None` means "use the directory's default selection policy".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub voice_id: Option<String>,
    pub rate: f32,
}

impl VoiceSettings {
    pub fn new(voice_id: Option<String>, rate: f32) -> Self {
        Self {
            voice_id,
            rate: rate.clamp(RATE_MIN, RATE_MAX),
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            voice_id: None,
            rate: 1.0,
        }
    }
}

// ── Engine Trait ───────────────────────────────────────

/// Capability contract for the text-to-speech collaborator.
///
/// Playback is fire-and-forget: the engine never reports completion, and
/// the tour never waits on it. `cancel_all` must be safe to call at any
/// time, including when nothing is playing.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Current voice inventory. May be empty before the engine has
    /// finished loading voices; see `subscribe_voices`.
    fn enumerate_voices(&self) -> Vec<VoiceInfo>;

    /// Check if the engine is currently operational.
    async fn is_available(&self) -> bool;

    /// Submit an utterance. `voice_id = None` selects the engine default.
    async fn speak(
        &self,
        text: &str,
        voice_id: Option<&str>,
        rate: f32,
    ) -> Result<(), SpeechError>;

    /// Cancel any in-flight or queued utterances immediately.
    fn cancel_all(&self);

    /// Subscribe to "voices changed" notifications. Engines that load
    /// voices asynchronously fire this once the inventory is ready (and on
    /// any later change); engines without change notification return None.
    fn subscribe_voices(&self) -> Option<broadcast::Receiver<()>> {
        None
    }
}

// ── Null Engine ────────────────────────────────────────

/// Silent fallback used when no real speech engine exists. Every call is
/// a no-op, which degrades the tour to visual-only navigation.
#[derive(Debug, Default)]
pub struct NullSpeechEngine;

#[async_trait]
impl SpeechEngine for NullSpeechEngine {
    fn enumerate_voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }

    async fn is_available(&self) -> bool {
        false
    }

    async fn speak(
        &self,
        _text: &str,
        _voice_id: Option<&str>,
        _rate: f32,
    ) -> Result<(), SpeechError> {
        Ok(())
    }

    fn cancel_all(&self) {}
}

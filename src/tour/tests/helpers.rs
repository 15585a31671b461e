//! Shared mock collaborators for the tour controller tests: a speech
//! engine and a renderer that record every call they receive.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::config::TourConfig;
use crate::script::{TourScript, TourStep};
use crate::speech::{SpeechEngine, SpeechError, VoiceInfo};
use crate::tour::bridge::Renderer;
use crate::tour::controller::TourController;

// ── Mock Speech Engine ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    CancelAll,
    Speak {
        text: String,
        voice_id: Option<String>,
        rate: f32,
    },
}

pub struct MockSpeechEngine {
    pub voices: Vec<VoiceInfo>,
    pub available: bool,
    calls: Mutex<Vec<EngineCall>>,
}

impl MockSpeechEngine {
    pub fn new() -> Self {
        Self {
            voices: vec![
                VoiceInfo::new("voice-0", "Vera", "en-US"),
                VoiceInfo::new("voice-1", "Brian", "en-GB"),
            ],
            available: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            voices: Vec::new(),
            available: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn speak_calls(&self) -> Vec<EngineCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, EngineCall::Speak { .. }))
            .collect()
    }
}

#[async_trait]
impl SpeechEngine for MockSpeechEngine {
    fn enumerate_voices(&self) -> Vec<VoiceInfo> {
        self.voices.clone()
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn speak(
        &self,
        text: &str,
        voice_id: Option<&str>,
        rate: f32,
    ) -> Result<(), SpeechError> {
        self.calls.lock().unwrap().push(EngineCall::Speak {
            text: text.to_string(),
            voice_id: voice_id.map(str::to_string),
            rate,
        });
        Ok(())
    }

    fn cancel_all(&self) {
        self.calls.lock().unwrap().push(EngineCall::CancelAll);
    }
}

// ── Mock Renderer ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    SetSection(String),
    ScrollTo(String),
    ScrollTop,
}

#[derive(Default)]
pub struct MockRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn scrolls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::ScrollTo(anchor) => Some(anchor),
                _ => None,
            })
            .collect()
    }

    pub fn section_switches(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::SetSection(id) => Some(id),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for MockRenderer {
    fn set_active_section(&self, section_id: &str) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::SetSection(section_id.to_string()));
    }

    fn scroll_to_anchor(&self, anchor_id: &str) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::ScrollTo(anchor_id.to_string()));
    }

    fn scroll_to_top(&self) {
        self.events.lock().unwrap().push(RenderEvent::ScrollTop);
    }
}

// ── Fixtures ────────────────────────────────────────────────

/// N steps, each in its own section: step-i targets section-i.
pub fn sample_script(steps: usize) -> TourScript {
    let steps = (0..steps)
        .map(|i| {
            TourStep::new(
                format!("step-{}", i),
                format!("section-{}", i),
                format!("Step {}", i),
                format!("narration {}", i),
            )
        })
        .collect();
    TourScript::new(steps).unwrap()
}

pub fn test_config(scroll_delay_ms: u64) -> TourConfig {
    TourConfig {
        scroll_delay_ms,
        ..TourConfig::default()
    }
}

/// Controller over fresh mocks: N single-section steps and a short
/// scroll delay so tests stay fast.
pub fn test_controller(
    steps: usize,
    scroll_delay_ms: u64,
) -> (TourController, Arc<MockSpeechEngine>, Arc<MockRenderer>) {
    let engine = Arc::new(MockSpeechEngine::new());
    let renderer = Arc::new(MockRenderer::new());
    let controller = TourController::new(
        sample_script(steps),
        engine.clone(),
        renderer.clone(),
        test_config(scroll_delay_ms),
    );
    (controller, engine, renderer)
}

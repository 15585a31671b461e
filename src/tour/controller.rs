//! Tour Controller — the state machine driving the guided tour.
//!
//! Owns `TourState` and `VoiceSettings`; every mutation goes through the
//! transport operations here, and each mutation while a tour is active
//! re-runs the step-changed effect: switch section, schedule the anchor
//! scroll, then speak or silence the narration. Collaborator failures are
//! absorbed below this layer, so the operations themselves cannot fail —
//! the only refusal is `start()` on an empty script.

use crate::config::TourConfig;
use crate::script::TourScript;
use crate::speech::{
    NarrationPlayer, SpeechEngine, VoiceDirectory, VoiceSettings, RATE_MAX, RATE_MIN,
};
use crate::tour::bridge::{NavigationBridge, Renderer};
use crate::tour::state::{TourState, TourView};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::{debug, warn};

/// Clone-able handle to the tour engine. All clones share one state.
#[derive(Clone)]
pub struct TourController {
    script: Arc<TourScript>,
    directory: VoiceDirectory,
    player: NarrationPlayer,
    bridge: NavigationBridge,
    config: Arc<TourConfig>,
    state: Arc<RwLock<TourState>>,
    settings: Arc<RwLock<VoiceSettings>>,
    view_tx: Arc<watch::Sender<TourView>>,
}

impl TourController {
    /// Build the controller over its collaborators. Must be called inside
    /// a Tokio runtime: engines that signal voice changes get a background
    /// watcher task spawned here.
    pub fn new(
        script: TourScript,
        engine: Arc<dyn SpeechEngine>,
        renderer: Arc<dyn Renderer>,
        config: TourConfig,
    ) -> Self {
        let directory = VoiceDirectory::new(engine.clone());
        directory.watch_changes();

        let settings = VoiceSettings::new(None, config.default_rate);
        let (view_tx, _) = watch::channel(TourView::idle());

        Self {
            script: Arc::new(script),
            directory,
            player: NarrationPlayer::new(engine),
            bridge: NavigationBridge::new(renderer, config.scroll_delay_ms),
            config: Arc::new(config),
            state: Arc::new(RwLock::new(TourState::default())),
            settings: Arc::new(RwLock::new(settings)),
            view_tx: Arc::new(view_tx),
        }
    }

    // ── Read Surface ───────────────────────────────────

    /// Read-only view stream for the renderer: highlight state and the
    /// `active` flag it uses to disable manual section controls.
    pub fn subscribe(&self) -> watch::Receiver<TourView> {
        self.view_tx.subscribe()
    }

    pub async fn state(&self) -> TourState {
        *self.state.read().await
    }

    pub async fn settings(&self) -> VoiceSettings {
        self.settings.read().await.clone()
    }

    /// Ranked voice catalog for transport UIs (voice pickers).
    pub async fn voices(&self) -> Vec<crate::speech::VoiceInfo> {
        self.directory.ensure_loaded().await
    }

    // ── Transport Operations ───────────────────────────

    /// Begin the tour at step 0 with narration playing. Returns false and
    /// stays idle when the script is empty.
    pub async fn start(&self) -> bool {
        if self.script.is_empty() {
            warn!("[Tour] empty script — refusing to start");
            return false;
        }

        // First start lazily loads the catalog and applies the default
        // voice policy if the user has not chosen one.
        let catalog = self.directory.ensure_loaded().await;
        {
            let mut settings = self.settings.write().await;
            if settings.voice_id.is_none() {
                settings.voice_id = VoiceDirectory::pick_default(&catalog, &self.config);
            }
        }

        {
            let mut state = self.state.write().await;
            state.active = true;
            state.current_index = 0;
            state.playing = true;
        }
        debug!("[Tour] started ({} steps)", self.script.len());
        self.step_changed().await;
        true
    }

    /// Advance to the next step, resuming narration even if it was muted.
    /// On the terminal step this ends the tour instead.
    pub async fn next(&self) {
        let advanced = {
            let mut state = self.state.write().await;
            if !state.active {
                return;
            }
            if state.current_index + 1 < self.script.len() {
                state.current_index += 1;
                state.playing = true;
                true
            } else {
                false
            }
        };

        if advanced {
            self.step_changed().await;
        } else {
            self.stop().await;
        }
    }

    /// End the tour: cancel narration and pending scrolls, clear the
    /// highlight view, and return the renderer to the top of content.
    pub async fn stop(&self) {
        {
            let mut state = self.state.write().await;
            state.active = false;
            state.playing = false;
        }
        self.player.stop();
        self.bridge.reset();
        self.view_tx.send_replace(TourView::idle());
        debug!("[Tour] stopped");
    }

    /// Select a narration voice (None reverts to the default policy on
    /// the next start). Mid-tour this replays the current step so the
    /// user hears the new voice without losing position.
    pub async fn set_voice(&self, voice_id: Option<String>) {
        {
            let mut settings = self.settings.write().await;
            settings.voice_id = voice_id;
        }
        self.replay_if_touring().await;
    }

    /// Set the narration rate, clamped to the supported range. Mid-tour
    /// this replays the current step at the new rate.
    pub async fn set_rate(&self, rate: f32) {
        {
            let mut settings = self.settings.write().await;
            settings.rate = rate.clamp(RATE_MIN, RATE_MAX);
        }
        self.replay_if_touring().await;
    }

    /// Mute or resume narration for the current step without leaving the
    /// tour. No-op while idle (`playing` may never outlive `active`).
    pub async fn set_playing(&self, playing: bool) {
        {
            let mut state = self.state.write().await;
            if !state.active || state.playing == playing {
                return;
            }
            state.playing = playing;
        }
        self.step_changed().await;
    }

    /// The renderer reports which section it currently displays. Manual
    /// browsing outside a tour only updates the bridge's dedup cache and
    /// never touches tour state.
    pub async fn on_section_rendered(&self, section_id: &str) {
        self.bridge.note_displayed(section_id).await;
    }

    // ── Step-Changed Effect ────────────────────────────

    async fn replay_if_touring(&self) {
        if self.state.read().await.active {
            self.step_changed().await;
        }
    }

    /// Runs after every mutation while the tour is active: section switch
    /// first, then the delayed anchor scroll (keyed so a later step
    /// supersedes it), then narration. Narration may race the visual
    /// transition; audio has no visual dependency.
    async fn step_changed(&self) {
        let (index, playing) = {
            let state = self.state.read().await;
            if !state.active {
                return;
            }
            (state.current_index, state.playing)
        };
        let Some(step) = self.script.get(index) else {
            warn!("[Tour] step index {} out of range", index);
            return;
        };

        self.bridge.show_section(&step.section_id).await;
        self.bridge.schedule_scroll(step.id.clone());
        self.view_tx.send_replace(TourView::for_step(index, step));

        if playing {
            let settings = self.settings.read().await.clone();
            let catalog = self.directory.catalog().await;
            self.player.speak(&step.narration, &settings, &catalog).await;
        } else {
            self.player.stop();
        }
    }
}

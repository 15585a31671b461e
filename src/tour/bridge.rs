//! Navigation Bridge — the controller's thin adapter onto the renderer.
//!
//! Section switches are deduplicated against the section currently on
//! screen. Anchor scrolls run after a fixed delay so the switched section
//! has rendered; each scheduled scroll is keyed to a generation counter
//! and discarded at fire time if a later step superseded it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Capability contract for the display layer. All calls are best-effort:
/// scrolling to an anchor that is not in the rendered tree is a no-op.
pub trait Renderer: Send + Sync {
    fn set_active_section(&self, section_id: &str);
    fn scroll_to_anchor(&self, anchor_id: &str);
    fn scroll_to_top(&self);
}

#[derive(Clone)]
pub struct NavigationBridge {
    renderer: Arc<dyn Renderer>,
    displayed_section: Arc<RwLock<Option<String>>>,
    scroll_generation: Arc<AtomicU64>,
    scroll_delay: Duration,
}

impl NavigationBridge {
    pub fn new(renderer: Arc<dyn Renderer>, scroll_delay_ms: u64) -> Self {
        Self {
            renderer,
            displayed_section: Arc::new(RwLock::new(None)),
            scroll_generation: Arc::new(AtomicU64::new(0)),
            scroll_delay: Duration::from_millis(scroll_delay_ms),
        }
    }

    /// Request a section switch, skipped when the section is already on
    /// screen.
    pub async fn show_section(&self, section_id: &str) {
        let mut displayed = self.displayed_section.write().await;
        if displayed.as_deref() == Some(section_id) {
            return;
        }
        self.renderer.set_active_section(section_id);
        *displayed = Some(section_id.to_string());
    }

    /// Record a section the renderer switched to on its own (manual tab
    /// browsing outside a tour).
    pub async fn note_displayed(&self, section_id: &str) {
        let mut displayed = self.displayed_section.write().await;
        *displayed = Some(section_id.to_string());
    }

    /// Schedule a delayed scroll to `anchor_id`, superseding any scroll
    /// still pending. If another schedule (or cancel) happens before the
    /// delay elapses, this scroll is discarded instead of firing stale.
    pub fn schedule_scroll(&self, anchor_id: String) {
        let token = self.scroll_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = self.scroll_generation.clone();
        let renderer = self.renderer.clone();
        let delay = self.scroll_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == token {
                renderer.scroll_to_anchor(&anchor_id);
            } else {
                debug!("[Tour] discarding stale scroll to {}", anchor_id);
            }
        });
    }

    /// Invalidate any pending scroll without scheduling a new one.
    pub fn cancel_pending_scroll(&self) {
        self.scroll_generation.fetch_add(1, Ordering::SeqCst);
    }

    /// End-of-tour reset: drop pending scrolls and return to the top of
    /// the content area.
    pub fn reset(&self) {
        self.cancel_pending_scroll();
        self.renderer.scroll_to_top();
    }
}

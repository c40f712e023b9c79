//! Popover service store
//!
//! A single app-wide popover slot. Screens call [`PopoverStore::show`]
//! with the id of the trigger component and serialized content; the
//! root-level popover host reads the slot, renders it, and reports back
//! through [`PopoverStore::request_close`] and [`PopoverStore::dismiss`].
//!
//! Handlers are represented as string identifiers, resolved by the host.

use app_ui::popover::{Placement, PopoverConfig};
use app_ui::tokens::{duration, overlay};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Arrow dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowSize {
    /// Base width
    pub width: f32,
    /// Height from base to tip
    pub height: f32,
}

fn default_duration() -> u32 {
    duration::SLOW
}

/// Options for one `show` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopoverOptions {
    /// Placement relative to the trigger
    #[serde(default)]
    pub placement: Placement,
    /// Handler fired when the host asks to close
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_request_close: Option<EventHandler>,
    /// Backdrop colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Gap from the trigger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f32>,
    /// Arrow dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_size: Option<ArrowSize>,
    /// Animation duration in milliseconds
    #[serde(default = "default_duration")]
    pub animation_duration: u32,
    /// Handler fired once the popover finished closing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_dismiss: Option<EventHandler>,
}

impl Default for PopoverOptions {
    fn default() -> Self {
        Self {
            placement: Placement::Auto,
            on_request_close: None,
            background_color: None,
            offset: None,
            arrow_size: None,
            animation_duration: duration::SLOW,
            on_dismiss: None,
        }
    }
}

impl PopoverOptions {
    /// Set placement
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the close-request handler
    pub fn with_on_request_close(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_request_close = Some(handler.into());
        self
    }

    /// Set the dismiss handler
    pub fn with_on_dismiss(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_dismiss = Some(handler.into());
        self
    }

    /// Set the trigger gap
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set arrow dimensions
    pub fn with_arrow_size(mut self, width: f32, height: f32) -> Self {
        self.arrow_size = Some(ArrowSize { width, height });
        self
    }

    /// Backdrop colour, transparent unless set
    pub fn backdrop_color(&self) -> &str {
        self.background_color.as_deref().unwrap_or(overlay::TRANSPARENT)
    }

    /// Popover engine config for these options
    ///
    /// The host drives visibility, so the config is controlled.
    pub fn to_config(&self, visible: bool) -> PopoverConfig {
        let mut config = PopoverConfig::new()
            .with_placement(self.placement)
            .with_visible(visible)
            .with_duration(self.animation_duration);
        if let Some(offset) = self.offset {
            config = config.with_offset(offset);
        }
        if let Some(arrow) = self.arrow_size {
            config = config.with_arrow_size(arrow.height);
        }
        config
    }
}

/// Contents of the popover slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopoverState<C> {
    /// Whether the popover should be showing
    pub visible: bool,
    /// Content to render
    pub content: Option<C>,
    /// Trigger component the popover anchors to
    pub trigger_id: Option<ComponentId>,
    /// Options of the latest `show`
    pub options: PopoverOptions,
}

impl<C> Default for PopoverState<C> {
    fn default() -> Self {
        Self {
            visible: false,
            content: None,
            trigger_id: None,
            options: PopoverOptions::default(),
        }
    }
}

/// Shared handle to a popover slot
pub struct PopoverStore<C> {
    state: Arc<RwLock<PopoverState<C>>>,
}

impl<C> Clone for PopoverStore<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<C> Default for PopoverStore<C> {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(PopoverState::default())),
        }
    }
}

impl<C> PopoverStore<C> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `content` anchored to `trigger_id`, replacing any current popover
    pub fn show(&self, trigger_id: impl Into<ComponentId>, content: C, options: PopoverOptions) {
        let trigger_id = trigger_id.into();
        tracing::debug!(trigger = %trigger_id, placement = ?options.placement, "Showing popover");

        let mut state = self.state.write();
        state.visible = true;
        state.content = Some(content);
        state.trigger_id = Some(trigger_id);
        state.options = options;
    }

    /// Start hiding; content stays until [`Self::reset`] so it can animate out
    pub fn hide(&self) {
        self.state.write().visible = false;
    }

    /// Clear the slot
    pub fn reset(&self) {
        *self.state.write() = PopoverState::default();
    }

    /// Whether a popover is showing
    pub fn is_visible(&self) -> bool {
        self.state.read().visible
    }

    /// Whether the host has something to render
    pub fn has_content(&self) -> bool {
        let state = self.state.read();
        state.content.is_some() && state.trigger_id.is_some()
    }

    /// Current trigger id
    pub fn trigger_id(&self) -> Option<ComponentId> {
        self.state.read().trigger_id.clone()
    }

    /// Current options
    pub fn options(&self) -> PopoverOptions {
        self.state.read().options.clone()
    }

    /// Read the current content
    pub fn with_content<R>(&self, f: impl FnOnce(Option<&C>) -> R) -> R {
        f(self.state.read().content.as_ref())
    }

    /// Host asks to close (backdrop, back button); hides and returns the handler to fire
    pub fn request_close(&self) -> Option<EventHandler> {
        let mut state = self.state.write();
        state.visible = false;
        state.options.on_request_close.clone()
    }

    /// Host finished the close animation; resets and returns the handler to fire
    pub fn dismiss(&self) -> Option<EventHandler> {
        let mut state = self.state.write();
        let handler = state.options.on_dismiss.take();
        *state = PopoverState::default();
        handler
    }
}

impl<C: Clone> PopoverStore<C> {
    /// Copy of the whole slot
    pub fn snapshot(&self) -> PopoverState<C> {
        self.state.read().clone()
    }
}

/// App-wide popover service over serialized content
pub struct PopoverService;

impl PopoverService {
    fn store() -> &'static PopoverStore<String> {
        static STORE: OnceLock<PopoverStore<String>> = OnceLock::new();
        STORE.get_or_init(PopoverStore::new)
    }

    /// Show a popover anchored to `trigger_id`
    pub fn show(trigger_id: impl Into<ComponentId>, content: impl Into<String>, options: PopoverOptions) {
        Self::store().show(trigger_id, content.into(), options);
    }

    /// Hide the current popover
    pub fn hide() {
        Self::store().hide();
    }

    /// Whether a popover is showing
    pub fn is_visible() -> bool {
        Self::store().is_visible()
    }

    /// Handle to the underlying store, for the root host
    pub fn handle() -> PopoverStore<String> {
        Self::store().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_hide() {
        let store: PopoverStore<&str> = PopoverStore::new();
        assert!(!store.is_visible());
        assert!(!store.has_content());

        store.show("menu-button", "menu", PopoverOptions::default());
        assert!(store.is_visible());
        assert!(store.has_content());
        assert_eq!(store.trigger_id().as_deref(), Some("menu-button"));

        store.hide();
        assert!(!store.is_visible());
        // Content lingers for the close animation
        assert!(store.has_content());
        assert_eq!(store.with_content(|c| c.copied()), Some("menu"));
    }

    #[test]
    fn test_request_close_returns_handler() {
        let store: PopoverStore<u32> = PopoverStore::new();
        store.show(
            "t",
            1,
            PopoverOptions::default().with_on_request_close("closeMenu"),
        );
        assert_eq!(store.request_close().as_deref(), Some("closeMenu"));
        assert!(!store.is_visible());
    }

    #[test]
    fn test_dismiss_resets() {
        let store: PopoverStore<u32> = PopoverStore::new();
        store.show("t", 1, PopoverOptions::default().with_on_dismiss("menuGone"));
        store.hide();

        assert_eq!(store.dismiss().as_deref(), Some("menuGone"));
        assert_eq!(store.snapshot(), PopoverState::default());
        assert_eq!(store.dismiss(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store: PopoverStore<u32> = PopoverStore::new();
        let host = store.clone();
        store.show("t", 7, PopoverOptions::default());
        assert!(host.is_visible());
    }

    #[test]
    fn test_options_defaults_and_config() {
        let options: PopoverOptions = serde_json::from_str(r#"{"placement":"top"}"#).unwrap();
        assert_eq!(options.placement, Placement::Top);
        assert_eq!(options.animation_duration, 300);
        assert_eq!(options.backdrop_color(), "transparent");

        let config = options.with_offset(6.0).with_arrow_size(12.0, 6.0).to_config(true);
        assert_eq!(config.placement, Placement::Top);
        assert_eq!(config.offset, 6.0);
        assert_eq!(config.arrow_size, 6.0);
        assert!(config.is_controlled());
        assert_eq!(config.duration, 300);
    }

    #[test]
    fn test_animation_duration_reaches_config() {
        let options = PopoverOptions {
            animation_duration: 50,
            ..PopoverOptions::default()
        };
        let config = options.to_config(true);
        assert_eq!(config.transition_duration(), std::time::Duration::from_millis(50));
    }

    #[test]
    fn test_global_service() {
        PopoverService::show("profile-avatar", "{\"type\":\"menu\"}", PopoverOptions::default());
        assert!(PopoverService::is_visible());
        assert!(PopoverService::handle().has_content());

        PopoverService::hide();
        assert!(!PopoverService::is_visible());
        PopoverService::handle().reset();
    }
}

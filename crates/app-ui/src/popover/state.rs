//! Visibility and measurement state machine
//!
//! A popover moves `Closed → Opening → Open → Closing → Closed`. Placement
//! is a two-pass affair: the overlay is first rendered transparent, the
//! host reports its natural size through [`Popover::on_layout`], and only
//! then are direction, size and position computed. Until that happens
//! [`Measurement::measured`] is false and styles keep the overlay hidden.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use uuid::Uuid;

use super::animation::{AnimatedValue, Easing, Transition};
use super::back_handler::{BackHandler, BackSubscription};
use super::config::PopoverConfig;
use super::direction::resolve_direction;
use super::size::constrain_size;
use super::style::{compute_popover_styles, Color, PopoverStyles};
use super::trigger::{ResolvedTrigger, Trigger};
use super::types::{Measurement, OverlayLayout, ScreenSize, TriggerMeasurement};

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopoverPhase {
    /// Not rendered
    #[default]
    Closed,
    /// Open animation running
    Opening,
    /// Fully open
    Open,
    /// Close animation running
    Closing,
}

impl PopoverPhase {
    /// Whether the latest request was an open
    pub fn is_opening_or_open(&self) -> bool {
        matches!(self, PopoverPhase::Opening | PopoverPhase::Open)
    }
}

/// Lifecycle notifications, each fired at most once per transition
#[cfg_attr(test, mockall::automock)]
pub trait PopoverListener {
    /// Open requested, animation starting
    fn on_open_start(&mut self) {}
    /// Open animation finished
    fn on_open_complete(&mut self) {}
    /// Close requested, animation starting
    fn on_close_start(&mut self) {}
    /// Close animation finished and geometry reset
    fn on_close_complete(&mut self) {}
    /// Backdrop pressed, whether or not it closes the popover
    fn on_backdrop_press(&mut self) {}
    /// Hardware back pressed while the popover was showing
    fn on_back_button_press(&mut self) {}
}

/// Listener that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl PopoverListener for NoopListener {}

/// Recorded lifecycle notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PopoverEvent {
    /// See [`PopoverListener::on_open_start`]
    OpenStart,
    /// See [`PopoverListener::on_open_complete`]
    OpenComplete,
    /// See [`PopoverListener::on_close_start`]
    CloseStart,
    /// See [`PopoverListener::on_close_complete`]
    CloseComplete,
    /// See [`PopoverListener::on_backdrop_press`]
    BackdropPress,
    /// See [`PopoverListener::on_back_button_press`]
    BackButtonPress,
}

/// Listener that records every notification, shareable with the owner
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Rc<RefCell<Vec<PopoverEvent>>>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far
    pub fn events(&self) -> Vec<PopoverEvent> {
        self.events.borrow().clone()
    }

    /// Take and clear the recorded events
    pub fn drain(&self) -> Vec<PopoverEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: PopoverEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PopoverListener for EventLog {
    fn on_open_start(&mut self) {
        self.push(PopoverEvent::OpenStart);
    }
    fn on_open_complete(&mut self) {
        self.push(PopoverEvent::OpenComplete);
    }
    fn on_close_start(&mut self) {
        self.push(PopoverEvent::CloseStart);
    }
    fn on_close_complete(&mut self) {
        self.push(PopoverEvent::CloseComplete);
    }
    fn on_backdrop_press(&mut self) {
        self.push(PopoverEvent::BackdropPress);
    }
    fn on_back_button_press(&mut self) {
        self.push(PopoverEvent::BackButtonPress);
    }
}

/// One popover instance
pub struct Popover {
    id: Uuid,
    config: PopoverConfig,
    screen: ScreenSize,
    trigger: ResolvedTrigger,
    listener: Box<dyn PopoverListener>,
    phase: PopoverPhase,
    rendered: bool,
    measurement: Measurement,
    trigger_measurement: Option<TriggerMeasurement>,
    progress: AnimatedValue,
    transition: Option<Transition>,
    background: Option<Color>,
}

impl Popover {
    /// Mount a popover
    ///
    /// A controlled config with `visible: true` starts opening right away.
    pub fn new(config: PopoverConfig, trigger: Trigger, screen: ScreenSize) -> Self {
        let initially_visible = config.visible == Some(true);
        let mut popover = Self {
            id: Uuid::new_v4(),
            config,
            screen,
            trigger: trigger.resolve(),
            listener: Box::new(NoopListener),
            phase: PopoverPhase::Closed,
            rendered: false,
            measurement: Measurement::default(),
            trigger_measurement: None,
            progress: AnimatedValue::default(),
            transition: None,
            background: None,
        };
        tracing::debug!(popover = %popover.id, placement = ?popover.config.placement, "Popover mounted");

        if initially_visible {
            popover.open();
        }
        popover
    }

    /// Attach the lifecycle listener
    pub fn with_listener(mut self, listener: impl PopoverListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// Set the surface colour shared by content and arrow
    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Instance id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current phase
    pub fn phase(&self) -> PopoverPhase {
        self.phase
    }

    /// Whether the overlay is rendered (any phase but `Closed`)
    pub fn is_visible(&self) -> bool {
        self.rendered
    }

    /// Whether visibility is owned by the caller
    pub fn is_controlled(&self) -> bool {
        self.config.is_controlled()
    }

    /// Current geometry
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Animation progress (scale factor)
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// Config in effect
    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// Screen used for placement
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Whether a transition is running
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Time left in the running transition
    pub fn remaining(&self) -> Duration {
        self.transition
            .map(|t| t.remaining())
            .unwrap_or(Duration::ZERO)
    }

    // -------------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------------

    /// Open, cancelling a close that is still animating
    pub fn open(&mut self) {
        match self.phase {
            PopoverPhase::Opening | PopoverPhase::Open => {
                tracing::debug!(popover = %self.id, phase = ?self.phase, "Open ignored");
                return;
            }
            PopoverPhase::Closed => {
                self.measurement = Measurement::default();
                self.trigger_measurement = None;
            }
            // Keep the geometry: the pending reset is cancelled with the close
            PopoverPhase::Closing => {}
        }

        tracing::debug!(popover = %self.id, from = ?self.phase, "Popover opening");
        self.phase = PopoverPhase::Opening;
        self.rendered = true;
        self.listener.on_open_start();
        self.transition = Some(Transition::new(
            self.progress.get(),
            1.0,
            self.config.transition_duration(),
            Easing::open(),
        ));
    }

    /// Close; no-op when already closed or closing
    pub fn close(&mut self) {
        if !self.phase.is_opening_or_open() {
            tracing::debug!(popover = %self.id, phase = ?self.phase, "Close ignored");
            return;
        }

        tracing::debug!(popover = %self.id, from = ?self.phase, "Popover closing");
        self.phase = PopoverPhase::Closing;
        self.listener.on_close_start();
        self.transition = Some(Transition::new(
            self.progress.get(),
            0.0,
            self.config.transition_duration(),
            Easing::close(),
        ));
    }

    /// Trigger element pressed
    pub fn press_trigger(&mut self) {
        if self.trigger.opens_on_press(self.is_controlled()) {
            self.open();
        }
    }

    /// Backdrop pressed
    pub fn press_backdrop(&mut self) {
        if !self.rendered {
            return;
        }
        self.listener.on_backdrop_press();
        if self.config.backdrop_closable && !self.is_controlled() {
            self.close();
        }
    }

    /// Close handle given to render-function content; ignored when controlled
    pub fn close_from_content(&mut self) {
        if !self.is_controlled() {
            self.close();
        }
    }

    /// Hardware back pressed; returns true when the event was consumed
    ///
    /// Only an opening or open popover intercepts; during the close
    /// animation the event propagates.
    pub fn handle_back_press(&mut self) -> bool {
        if !self.phase.is_opening_or_open() {
            return false;
        }
        self.listener.on_back_button_press();
        if !self.is_controlled() {
            self.close();
        }
        true
    }

    /// Owner re-drives the visibility prop; makes the popover controlled
    pub fn set_visible(&mut self, visible: bool) {
        self.config.visible = Some(visible);
        if visible != self.phase.is_opening_or_open() {
            if visible {
                self.open();
            } else {
                self.close();
            }
        }
    }

    /// Screen rotated or resized
    pub fn set_screen_size(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    // -------------------------------------------------------------------------
    // Layout and animation
    // -------------------------------------------------------------------------

    /// Overlay layout reported by the host
    ///
    /// The trigger is measured on the first layout of an open cycle. Every
    /// layout recomputes direction, size and position from scratch. Layouts
    /// arriving while closing or closed are discarded.
    pub fn on_layout(&mut self, layout: OverlayLayout) {
        if !self.phase.is_opening_or_open() {
            tracing::debug!(popover = %self.id, phase = ?self.phase, "Discarding layout");
            return;
        }

        let trigger = match self.trigger_measurement {
            Some(trigger) => trigger,
            None => match self.trigger.slot.measure() {
                Some(measure) => {
                    let trigger = TriggerMeasurement::from(measure);
                    self.trigger_measurement = Some(trigger);
                    trigger
                }
                None => {
                    tracing::warn!(popover = %self.id, "Trigger could not be measured");
                    return;
                }
            },
        };

        let offsets = self.config.offsets();
        let direction = resolve_direction(self.config.placement, &trigger, self.screen);
        let mut next = Measurement {
            children: trigger,
            popover: layout,
            direction,
            measured: true,
        };
        let size = constrain_size(direction, &next, self.screen, &offsets);

        next.popover.width = size.width;
        next.popover.height = size.height;

        tracing::debug!(
            popover = %self.id,
            %direction,
            width = size.width,
            height = size.height,
            "Popover measured"
        );
        self.measurement = next;
    }

    /// Advance the running transition by `dt`; returns true while still animating
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.advance(dt);
        self.progress.set(transition.value());
        tracing::trace!(popover = %self.id, progress = self.progress.get(), "Popover frame");

        if !transition.is_finished() {
            return true;
        }

        self.transition = None;
        match self.phase {
            PopoverPhase::Opening => {
                self.phase = PopoverPhase::Open;
                tracing::debug!(popover = %self.id, "Popover open");
                self.listener.on_open_complete();
            }
            PopoverPhase::Closing => {
                self.rendered = false;
                self.measurement = Measurement::default();
                self.trigger_measurement = None;
                self.phase = PopoverPhase::Closed;
                tracing::debug!(popover = %self.id, "Popover closed");
                self.listener.on_close_complete();
            }
            PopoverPhase::Open | PopoverPhase::Closed => {}
        }
        false
    }

    /// Run the current transition to completion
    pub fn finish_transition(&mut self) {
        let remaining = self.remaining();
        self.tick(remaining);
    }

    /// Styles for the current frame
    pub fn styles(&self) -> PopoverStyles {
        compute_popover_styles(
            &self.measurement,
            self.screen,
            &self.config.offsets(),
            self.progress,
            self.background.as_deref(),
        )
    }
}

impl std::fmt::Debug for Popover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popover")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("measurement", &self.measurement)
            .field("progress", &self.progress.get())
            .finish()
    }
}

// =============================================================================
// Mounting
// =============================================================================

/// A popover registered with the back handler for as long as it lives
pub struct MountedPopover {
    popover: Rc<RefCell<Popover>>,
    _subscription: BackSubscription,
}

impl MountedPopover {
    /// Mount `popover` and route back presses to it
    pub fn mount(popover: Popover, back_handler: &BackHandler) -> Self {
        let popover = Rc::new(RefCell::new(popover));
        let weak = Rc::downgrade(&popover);
        let subscription = back_handler.add_listener(move || {
            weak.upgrade()
                .and_then(|p| p.try_borrow_mut().ok().map(|mut p| p.handle_back_press()))
                .unwrap_or(false)
        });

        Self {
            popover,
            _subscription: subscription,
        }
    }

    /// Shared handle to the popover
    pub fn handle(&self) -> &Rc<RefCell<Popover>> {
        &self.popover
    }

    /// Borrow the popover
    pub fn borrow(&self) -> std::cell::Ref<'_, Popover> {
        self.popover.borrow()
    }

    /// Mutably borrow the popover
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, Popover> {
        self.popover.borrow_mut()
    }
}

//! Time-driven playback of popover transitions

use std::cell::RefCell;
use std::time::Duration;
use tokio::time::{interval, Instant, MissedTickBehavior};

use super::state::Popover;
use crate::tokens::frame;

/// Default frame interval (60 Hz)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(frame::FRAME_60HZ_MS);

/// Tick `popover` once per frame until its running transition completes
///
/// The popover is only borrowed while a frame is applied, so other code
/// may issue requests between frames. A request that starts a new
/// transition keeps the loop going.
pub async fn play_transition(popover: &RefCell<Popover>, frame_interval: Duration) {
    let mut frames = interval(frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
    frames.tick().await;

    let mut last = Instant::now();
    while popover.borrow().is_animating() {
        frames.tick().await;
        let now = Instant::now();
        popover.borrow_mut().tick(now - last);
        last = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::popover::config::PopoverConfig;
    use crate::popover::state::PopoverPhase;
    use crate::popover::trigger::{StaticElement, Trigger};
    use crate::popover::types::ScreenSize;
    use std::rc::Rc;

    fn popover() -> RefCell<Popover> {
        RefCell::new(Popover::new(
            PopoverConfig::default(),
            Trigger::Element(Rc::new(StaticElement::at(10.0, 10.0, 20.0, 20.0))),
            ScreenSize::new(393.0, 852.0),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_plays_to_completion() {
        let popover = popover();
        popover.borrow_mut().press_trigger();

        let started = Instant::now();
        play_transition(&popover, DEFAULT_FRAME_INTERVAL).await;

        assert_eq!(popover.borrow().phase(), PopoverPhase::Open);
        assert_eq!(popover.borrow().progress(), 1.0);
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_plays_to_closed() {
        let popover = popover();
        popover.borrow_mut().press_trigger();
        popover.borrow_mut().finish_transition();
        popover.borrow_mut().press_backdrop();

        play_transition(&popover, DEFAULT_FRAME_INTERVAL).await;
        assert_eq!(popover.borrow().phase(), PopoverPhase::Closed);
        assert!(!popover.borrow().is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_returns_immediately() {
        let popover = popover();
        play_transition(&popover, DEFAULT_FRAME_INTERVAL).await;
        assert_eq!(popover.borrow().phase(), PopoverPhase::Closed);
    }
}

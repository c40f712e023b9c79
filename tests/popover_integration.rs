//! Popover Integration Tests
//!
//! End-to-end scenarios across the placement engine, the lifecycle state
//! machine, back-button routing and the popover service store.

use std::cell::RefCell;
use std::rc::Rc;

use app_state::{PopoverOptions, PopoverStore};
use app_ui::popover::{
    play_transition, BackHandler, Direction, EventLog, Measurement, MountedPopover,
    OverlayLayout, Placement, Popover, PopoverConfig, PopoverEvent, PopoverPhase, ScreenSize,
    StaticElement, Trigger, TriggerRef, DEFAULT_FRAME_INTERVAL,
};
use tempfile::TempDir;

const SCREEN: ScreenSize = ScreenSize {
    width: 393.0,
    height: 852.0,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn trigger_at(page_x: f32, page_y: f32) -> Trigger {
    Trigger::Element(Rc::new(StaticElement::at(page_x, page_y, 80.0, 40.0)))
}

fn placed(placement: Placement, natural: (f32, f32)) -> Popover {
    let config = PopoverConfig::new()
        .with_placement(placement)
        .with_edge_offset(10.0)
        .with_arrow_size(8.0);
    let mut popover = Popover::new(config, trigger_at(100.0, 100.0), SCREEN);
    popover.press_trigger();
    popover.on_layout(OverlayLayout::sized(natural.0, natural.1));
    popover.finish_transition();
    popover
}

/// Literal pixel output for each explicit side
#[test]
fn test_positions_for_every_side() {
    init_tracing();

    let cases = [
        (Placement::Right, (188.0, 70.0)),
        (Placement::Left, (10.0, 70.0)),
        (Placement::Bottom, (40.0, 148.0)),
        (Placement::Top, (40.0, 10.0)),
    ];
    for (placement, expected) in cases {
        let popover = placed(placement, (200.0, 100.0));
        assert_eq!(popover.styles().position(), Some(expected), "{:?}", placement);
    }
}

/// Oversized content is clamped to the room on the chosen side
#[test]
fn test_max_bounds_for_every_side() {
    let cases = [
        (Placement::Right, (195.0, 832.0)),
        (Placement::Left, (82.0, 832.0)),
        (Placement::Top, (373.0, 82.0)),
        (Placement::Bottom, (373.0, 694.0)),
    ];
    for (placement, (max_width, max_height)) in cases {
        let popover = placed(placement, (2000.0, 2000.0));
        let content = popover.styles().content;
        assert_eq!(content.max_width, Some(max_width), "{:?}", placement);
        assert_eq!(content.max_height, Some(max_height), "{:?}", placement);
    }
}

/// Auto placement resolves from the trigger position
#[test]
fn test_auto_placement_follows_room() {
    let config = PopoverConfig::new();
    let mut popover = Popover::new(config, trigger_at(150.0, 760.0), SCREEN);
    popover.press_trigger();
    popover.on_layout(OverlayLayout::sized(120.0, 60.0));
    assert_eq!(popover.measurement().direction, Direction::Top);
}

/// A full uncontrolled cycle leaves no geometry behind
#[test]
fn test_uncontrolled_cycle() {
    init_tracing();

    let log = EventLog::new();
    let mut popover = Popover::new(
        PopoverConfig::new().with_placement(Placement::Bottom),
        trigger_at(100.0, 100.0),
        SCREEN,
    )
    .with_listener(log.clone());

    popover.press_trigger();
    assert_eq!(popover.phase(), PopoverPhase::Opening);
    popover.on_layout(OverlayLayout::sized(200.0, 100.0));
    popover.finish_transition();
    assert_eq!(popover.phase(), PopoverPhase::Open);

    popover.press_backdrop();
    assert_eq!(popover.phase(), PopoverPhase::Closing);
    popover.finish_transition();

    assert_eq!(popover.phase(), PopoverPhase::Closed);
    assert_eq!(*popover.measurement(), Measurement::default());
    assert_eq!(
        log.events(),
        vec![
            PopoverEvent::OpenStart,
            PopoverEvent::OpenComplete,
            PopoverEvent::BackdropPress,
            PopoverEvent::CloseStart,
            PopoverEvent::CloseComplete,
        ]
    );
}

/// A caller-owned trigger ref with controlled visibility
#[test]
fn test_controlled_by_ref() {
    let slot = TriggerRef::new();
    slot.attach(Rc::new(StaticElement::at(100.0, 100.0, 80.0, 40.0)));

    let mut popover = Popover::new(
        PopoverConfig::new().with_visible(false),
        Trigger::Ref(slot),
        SCREEN,
    );

    // The owner's element is pressed; only the owner can open
    popover.press_trigger();
    assert_eq!(popover.phase(), PopoverPhase::Closed);

    popover.set_visible(true);
    popover.on_layout(OverlayLayout::sized(200.0, 100.0));
    popover.finish_transition();
    assert!(popover.measurement().measured);

    // Backdrop only notifies; owner closes
    popover.press_backdrop();
    assert_eq!(popover.phase(), PopoverPhase::Open);
    popover.set_visible(false);
    popover.finish_transition();
    assert!(!popover.is_visible());
}

/// Back button closes the topmost mounted popover only
#[test]
fn test_back_button_routing() {
    let handler = BackHandler::new();
    let first = MountedPopover::mount(Popover::new(PopoverConfig::new(), trigger_at(10.0, 10.0), SCREEN), &handler);
    let second = MountedPopover::mount(Popover::new(PopoverConfig::new(), trigger_at(200.0, 400.0), SCREEN), &handler);

    first.borrow_mut().press_trigger();
    assert!(handler.press());
    assert_eq!(first.borrow().phase(), PopoverPhase::Closing);
    assert_eq!(second.borrow().phase(), PopoverPhase::Closed);

    drop(first);
    drop(second);
    assert_eq!(handler.listener_count(), 0);
    assert!(!handler.press());
}

/// Animation playback on a paused clock
#[tokio::test(start_paused = true)]
async fn test_driven_open_and_close() {
    let popover = RefCell::new(placed(Placement::Right, (200.0, 100.0)));
    popover.borrow_mut().close();

    play_transition(&popover, DEFAULT_FRAME_INTERVAL).await;
    assert_eq!(popover.borrow().phase(), PopoverPhase::Closed);

    popover.borrow_mut().press_trigger();
    play_transition(&popover, DEFAULT_FRAME_INTERVAL).await;
    assert_eq!(popover.borrow().phase(), PopoverPhase::Open);
    // Not measured yet in this cycle
    assert_eq!(popover.borrow().styles().wrapper.opacity, 0.0);
}

/// Config loaded from disk feeds the engine
#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("popover.json");
    std::fs::write(&path, r#"{"placement":"left","edgeOffset":10,"arrowSize":8}"#).unwrap();

    let config = PopoverConfig::from_path(&path).unwrap();
    let mut popover = Popover::new(config, trigger_at(100.0, 100.0), SCREEN);
    popover.press_trigger();
    popover.on_layout(OverlayLayout::sized(200.0, 100.0));
    assert_eq!(popover.styles().position(), Some((10.0, 70.0)));
}

/// The service store configures a host-driven popover
#[test]
fn test_service_store_drives_host() {
    let store: PopoverStore<String> = PopoverStore::new();
    store.show(
        "avatar",
        "menu".to_string(),
        PopoverOptions::default()
            .with_placement(Placement::Bottom)
            .with_on_request_close("onMenuClose"),
    );

    let mut host = Popover::new(
        store.options().to_config(store.is_visible()),
        trigger_at(100.0, 100.0),
        SCREEN,
    );
    assert_eq!(host.phase(), PopoverPhase::Opening);

    host.on_layout(OverlayLayout::sized(200.0, 100.0));
    host.finish_transition();
    assert_eq!(host.styles().position(), Some((40.0, 148.0)));

    assert_eq!(store.request_close().as_deref(), Some("onMenuClose"));
    host.set_visible(store.is_visible());
    host.finish_transition();
    assert_eq!(host.phase(), PopoverPhase::Closed);

    store.dismiss();
    assert!(!store.has_content());
}

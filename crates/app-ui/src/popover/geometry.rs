//! Absolute positioning of the overlay and its arrow
//!
//! Placement runs on an already-constrained overlay size (see
//! [`super::size`]). The main axis sits the overlay next to the trigger,
//! the cross axis centers it on the trigger unless that would break the
//! edge offset, in which case it is pinned to the nearer screen edge.

use super::types::{Direction, Measurement, PopoverOffsets, PositionResult, ScreenSize};

/// Cross-axis placement along one screen axis
///
/// `start`/`extent` describe the trigger on that axis, `size` the overlay.
pub fn center_on_axis(start: f32, extent: f32, size: f32, screen_extent: f32, edge_offset: f32) -> f32 {
    let half_extent = extent / 2.0;
    let needed = size / 2.0 + edge_offset;
    let before = start + half_extent;
    let after = screen_extent - (start + extent) + half_extent;
    let centered = start + (extent - size) / 2.0;

    if before < screen_extent / 2.0 {
        if before > needed {
            centered
        } else {
            edge_offset
        }
    } else if after > needed {
        centered
    } else {
        screen_extent - (size + edge_offset)
    }
}

/// Left edge of an overlay placed above or below the trigger
pub fn horizontal_center(measurement: &Measurement, screen: ScreenSize, edge_offset: f32) -> f32 {
    center_on_axis(
        measurement.children.page_x,
        measurement.children.width,
        measurement.popover.width,
        screen.width,
        edge_offset,
    )
}

/// Top edge of an overlay placed beside the trigger
pub fn vertical_center(measurement: &Measurement, screen: ScreenSize, edge_offset: f32) -> f32 {
    center_on_axis(
        measurement.children.page_y,
        measurement.children.height,
        measurement.popover.height,
        screen.height,
        edge_offset,
    )
}

/// Compute the overlay's top-left and the arrow offset inside it
///
/// The arrow offset is floored at `arrow_size` for Left, Right and Bottom
/// but not for Top. Rendered output depends on that exact pixel
/// behaviour, so keep the four branches distinct.
pub fn compute_position(
    direction: Direction,
    measurement: &Measurement,
    screen: ScreenSize,
    offsets: &PopoverOffsets,
) -> PositionResult {
    let trigger = &measurement.children;
    let popover = &measurement.popover;
    let PopoverOffsets {
        offset,
        arrow_size,
        edge_offset,
    } = *offsets;

    match direction {
        Direction::Left => {
            let y = vertical_center(measurement, screen, edge_offset);
            PositionResult {
                x: trigger.page_x - (popover.width + offset + arrow_size),
                y,
                arrow_x: popover.width,
                arrow_y: (trigger.page_y + trigger.height / 2.0 - y - arrow_size / 2.0)
                    .max(arrow_size),
            }
        }
        Direction::Right => {
            let y = vertical_center(measurement, screen, edge_offset);
            PositionResult {
                x: trigger.page_x + trigger.width + offset + arrow_size,
                y,
                arrow_x: -arrow_size,
                arrow_y: (trigger.page_y + trigger.height / 2.0 - y - arrow_size / 2.0)
                    .max(arrow_size),
            }
        }
        Direction::Top => {
            let x = horizontal_center(measurement, screen, edge_offset);
            PositionResult {
                x,
                y: trigger.page_y - (popover.height + offset + arrow_size),
                arrow_x: trigger.page_x + trigger.width / 2.0 - x - arrow_size / 2.0,
                arrow_y: popover.height,
            }
        }
        Direction::Bottom => {
            let x = horizontal_center(measurement, screen, edge_offset);
            PositionResult {
                x,
                y: trigger.page_y + trigger.height + offset + arrow_size,
                arrow_x: (trigger.page_x + trigger.width / 2.0 - x - arrow_size / 2.0)
                    .max(arrow_size),
                arrow_y: -arrow_size,
            }
        }
    }
}

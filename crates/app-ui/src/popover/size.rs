//! Overflow-aware sizing of the overlay for a resolved direction

use super::types::{Direction, Measurement, PopoverOffsets, ScreenSize, Size};

/// Largest box the overlay may occupy on the given side
///
/// Values can be negative when the trigger sits too close to an edge;
/// [`constrain_size`] clamps them.
pub fn max_bounds(
    direction: Direction,
    measurement: &Measurement,
    screen: ScreenSize,
    offsets: &PopoverOffsets,
) -> Size {
    let trigger = &measurement.children;
    let PopoverOffsets {
        offset,
        arrow_size,
        edge_offset,
    } = *offsets;

    match direction {
        Direction::Top => Size {
            width: screen.width - edge_offset * 2.0,
            height: trigger.page_y - (edge_offset + offset + arrow_size),
        },
        Direction::Bottom => {
            let top = trigger.page_y + trigger.height + offset + arrow_size;
            Size {
                width: screen.width - edge_offset * 2.0,
                height: screen.height - (top + edge_offset),
            }
        }
        Direction::Left => Size {
            width: trigger.page_x - (offset + edge_offset + arrow_size),
            height: screen.height - edge_offset * 2.0,
        },
        Direction::Right => Size {
            width: screen.width
                - (trigger.page_x + trigger.width + offset + edge_offset + arrow_size),
            height: screen.height - edge_offset * 2.0,
        },
    }
}

/// Shrink the overlay's natural size to fit the room on `direction`
///
/// Each axis is constrained independently and never grown.
pub fn constrain_size(
    direction: Direction,
    measurement: &Measurement,
    screen: ScreenSize,
    offsets: &PopoverOffsets,
) -> Size {
    let max = max_bounds(direction, measurement, screen, offsets);
    let natural = &measurement.popover;

    let mut size = Size {
        width: natural.width,
        height: natural.height,
    };
    if natural.height > max.height {
        size.height = max.height.max(0.0);
    }
    if natural.width > max.width {
        size.width = max.width.max(0.0);
    }
    size
}

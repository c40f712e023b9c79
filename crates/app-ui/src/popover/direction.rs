//! Resolve a placement request into a concrete direction

use super::types::{Direction, Placement, ScreenSize, TriggerMeasurement};

/// Pick the side the overlay will be placed on
///
/// Explicit placements are returned unchanged. `Auto` takes the side with
/// the strictly greatest room, evaluated in the order top, bottom, left,
/// right starting from left, so ties keep the earlier candidate.
pub fn resolve_direction(
    placement: Placement,
    trigger: &TriggerMeasurement,
    screen: ScreenSize,
) -> Direction {
    if let Some(direction) = placement.direction() {
        return direction;
    }

    let top = trigger.page_y;
    let bottom = screen.height - (trigger.page_y + trigger.height);
    let left = trigger.page_x;
    let right = screen.width - (trigger.page_x + trigger.width);

    match placement {
        Placement::AutoVertical => {
            if bottom >= top {
                Direction::Bottom
            } else {
                Direction::Top
            }
        }
        Placement::AutoHorizontal => {
            if right >= left {
                Direction::Right
            } else {
                Direction::Left
            }
        }
        _ => {
            let candidates = [
                (Direction::Top, top),
                (Direction::Bottom, bottom),
                (Direction::Left, left),
                (Direction::Right, right),
            ];

            let (best, _) = candidates.iter().fold(
                (Direction::Left, left),
                |(best, best_space), &(direction, space)| {
                    if space > best_space {
                        (direction, space)
                    } else {
                        (best, best_space)
                    }
                },
            );
            best
        }
    }
}

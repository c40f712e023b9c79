//! Style output consumed by the rendering layer

use serde::{Deserialize, Serialize};

use super::animation::AnimatedValue;
use super::geometry::compute_position;
use super::transform::{compute_transform_adjustments, ArrowAnchor, TransformStep};
use super::types::{Direction, Measurement, PopoverOffsets, ScreenSize, Size};
use crate::tokens::{overlay, shadows, z_index, Shadow};

/// Color value (CSS-like string)
pub type Color = String;

/// Absolutely positioned wrapper holding arrow and content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperStyle {
    /// Opacity; forced to 0 until measured
    pub opacity: f32,
    /// Transform list, empty until measured
    pub transform: Vec<TransformStep>,
    /// Drop shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Stacking layer
    pub z_index: i32,
}

/// Content box inside the wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStyle {
    /// Constrained width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
    /// Constrained height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
    /// Surface colour
    pub background_color: Color,
    /// Corner radius
    pub border_radius: f32,
}

/// Pointer arrow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowStyle {
    /// Offset from the wrapper's left
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    /// Offset from the wrapper's top
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    /// Rotation in degrees
    pub rotation: f32,
    /// Triangle size
    pub size: f32,
    /// Fill, matches the content surface
    pub color: Color,
    /// Drop shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

/// Full-screen backdrop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackdropStyle {
    /// Animated opacity
    pub opacity: f32,
    /// Backdrop colour
    pub background_color: Color,
    /// Stacking layer
    pub z_index: i32,
}

/// Every style the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopoverStyles {
    /// Wrapper
    pub wrapper: WrapperStyle,
    /// Content
    pub content: ContentStyle,
    /// Arrow
    pub arrow: ArrowStyle,
    /// Backdrop
    pub backdrop: BackdropStyle,
}

impl PopoverStyles {
    /// The wrapper's absolute position, once placed
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.wrapper.transform.as_slice() {
            [TransformStep::TranslateX(x), TransformStep::TranslateY(y), ..] => Some((*x, *y)),
            _ => None,
        }
    }
}

/// Compute styles for the current frame
///
/// Nothing is positioned until the measurement is placeable; the wrapper
/// stays transparent regardless of `progress` in the meantime.
pub fn compute_popover_styles(
    measurement: &Measurement,
    screen: ScreenSize,
    offsets: &PopoverOffsets,
    progress: AnimatedValue,
    background: Option<&str>,
) -> PopoverStyles {
    let color: Color = background.unwrap_or(overlay::SURFACE).to_string();
    let backdrop = BackdropStyle {
        opacity: progress.opacity(),
        background_color: overlay::BACKDROP.to_string(),
        z_index: z_index::POPOVER_BACKDROP,
    };

    if !measurement.is_placeable() {
        return PopoverStyles {
            wrapper: WrapperStyle {
                opacity: 0.0,
                transform: Vec::new(),
                shadow: None,
                z_index: z_index::POPOVER,
            },
            content: ContentStyle {
                max_width: None,
                max_height: None,
                background_color: color.clone(),
                border_radius: overlay::RADIUS,
            },
            arrow: ArrowStyle {
                left: None,
                top: None,
                rotation: measurement.direction.arrow_rotation(),
                size: offsets.arrow_size,
                color,
                shadow: None,
            },
            backdrop,
        };
    }

    let direction: Direction = measurement.direction;
    let popover = &measurement.popover;
    let position = compute_position(direction, measurement, screen, offsets);

    let mut transform = vec![
        TransformStep::TranslateX(position.x),
        TransformStep::TranslateY(position.y),
    ];
    transform.extend(compute_transform_adjustments(
        Some(direction),
        Size {
            width: popover.width,
            height: popover.height,
        },
        ArrowAnchor {
            arrow_size: offsets.arrow_size,
            arrow_x: position.arrow_x,
            arrow_y: position.arrow_y,
        },
        progress.get(),
    ));

    PopoverStyles {
        wrapper: WrapperStyle {
            opacity: progress.opacity(),
            transform,
            shadow: Some(shadows::overlay()),
            z_index: z_index::POPOVER,
        },
        content: ContentStyle {
            max_width: Some(popover.width),
            max_height: Some(popover.height),
            background_color: color.clone(),
            border_radius: overlay::RADIUS,
        },
        arrow: ArrowStyle {
            left: Some(position.arrow_x),
            top: Some(position.arrow_y),
            rotation: direction.arrow_rotation(),
            size: offsets.arrow_size,
            color,
            shadow: Some(shadows::overlay()),
        },
        backdrop,
    }
}

//! Animation-origin adjustment so the scale animation grows from the arrow tip

use serde::{Deserialize, Serialize};

use super::types::{Direction, Size};

/// One step of a transform list, applied in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformStep {
    /// Horizontal translation
    TranslateX(f32),
    /// Vertical translation
    TranslateY(f32),
    /// Uniform scale
    Scale(f32),
}

/// Arrow geometry consumed by the adjuster
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArrowAnchor {
    /// Arrow triangle size
    pub arrow_size: f32,
    /// Arrow left inside the overlay
    pub arrow_x: f32,
    /// Arrow top inside the overlay
    pub arrow_y: f32,
}

/// Translate-scale-translate steps anchoring `scale` at the arrow
///
/// `None` (no resolved direction) yields no steps.
pub fn compute_transform_adjustments(
    direction: Option<Direction>,
    size: Size,
    arrow: ArrowAnchor,
    scale: f32,
) -> Vec<TransformStep> {
    use TransformStep::{Scale, TranslateX, TranslateY};

    let Size { width, height } = size;
    let max_arrow_y = height / 2.0 - arrow.arrow_size / 2.0;
    let max_arrow_x = width / 2.0 - arrow.arrow_size / 2.0;
    let translate_y = max_arrow_y - arrow.arrow_y;
    let translate_x = max_arrow_x - arrow.arrow_x;

    match direction {
        Some(Direction::Right) => vec![
            TranslateX(-width / 2.0),
            TranslateY(-translate_y),
            Scale(scale),
            TranslateX(width / 2.0),
            TranslateY(translate_y),
        ],
        Some(Direction::Left) => vec![
            TranslateX(width / 2.0),
            TranslateY(-translate_y),
            Scale(scale),
            TranslateX(-width / 2.0),
            TranslateY(translate_y),
        ],
        Some(Direction::Bottom) => vec![
            TranslateY(-height / 2.0),
            TranslateX(-translate_x),
            Scale(scale),
            TranslateY(height / 2.0),
            TranslateX(translate_x),
        ],
        Some(Direction::Top) => vec![
            TranslateY(height / 2.0),
            TranslateX(-translate_x),
            Scale(scale),
            TranslateY(-height / 2.0),
            TranslateX(translate_x),
        ],
        None => Vec::new(),
    }
}

/// Map a point through the transform list
pub fn apply_to_point(steps: &[TransformStep], point: (f32, f32)) -> (f32, f32) {
    // Steps compose outer-to-inner, so the last step acts on the point first
    steps.iter().rev().fold(point, |(x, y), step| match *step {
        TransformStep::TranslateX(dx) => (x + dx, y),
        TransformStep::TranslateY(dy) => (x, y + dy),
        TransformStep::Scale(s) => (x * s, y * s),
    })
}

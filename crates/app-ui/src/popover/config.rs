//! Popover configuration and its error type

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::types::{Placement, PopoverOffsets};
use crate::tokens::duration;

/// Popover errors
#[derive(Debug, thiserror::Error)]
pub enum PopoverError {
    /// Configuration failed validation
    #[error("Invalid popover config: {0}")]
    InvalidConfig(String),

    /// Configuration was not valid JSON
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for popover operations
pub type Result<T> = std::result::Result<T, PopoverError>;

fn default_true() -> bool {
    true
}

fn default_arrow_size() -> f32 {
    PopoverOffsets::default().arrow_size
}

fn default_edge_offset() -> f32 {
    PopoverOffsets::default().edge_offset
}

fn default_duration() -> u32 {
    duration::SLOW
}

/// Recognized popover options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopoverConfig {
    /// Requested placement
    #[serde(default)]
    pub placement: Placement,
    /// Gap between trigger and overlay
    #[serde(default)]
    pub offset: f32,
    /// Arrow size, `0` hides the arrow
    #[serde(default = "default_arrow_size")]
    pub arrow_size: f32,
    /// Minimum gap from the screen edges
    #[serde(default = "default_edge_offset")]
    pub edge_offset: f32,
    /// Whether a backdrop press closes the popover
    #[serde(default = "default_true")]
    pub backdrop_closable: bool,
    /// External visibility; presence makes the popover controlled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Open and close animation length in milliseconds
    #[serde(default = "default_duration")]
    pub duration: u32,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        let offsets = PopoverOffsets::default();
        Self {
            placement: Placement::Auto,
            offset: offsets.offset,
            arrow_size: offsets.arrow_size,
            edge_offset: offsets.edge_offset,
            backdrop_closable: true,
            visible: None,
            duration: duration::SLOW,
        }
    }
}

impl PopoverConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading popover config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check offsets are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("offset", self.offset),
            ("arrowSize", self.arrow_size),
            ("edgeOffset", self.edge_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PopoverError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Whether visibility is driven by the owner
    pub fn is_controlled(&self) -> bool {
        self.visible.is_some()
    }

    /// Length of one open or close animation
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration))
    }

    /// Spacing triple used by the geometry functions
    pub fn offsets(&self) -> PopoverOffsets {
        PopoverOffsets {
            offset: self.offset,
            arrow_size: self.arrow_size,
            edge_offset: self.edge_offset,
        }
    }

    /// Set placement
    pub fn with_placement(mut self, placement: impl Into<Placement>) -> Self {
        self.placement = placement.into();
        self
    }

    /// Set the trigger gap
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the arrow size
    pub fn with_arrow_size(mut self, arrow_size: f32) -> Self {
        self.arrow_size = arrow_size;
        self
    }

    /// Set the edge offset
    pub fn with_edge_offset(mut self, edge_offset: f32) -> Self {
        self.edge_offset = edge_offset;
        self
    }

    /// Set whether backdrop presses close
    pub fn with_backdrop_closable(mut self, closable: bool) -> Self {
        self.backdrop_closable = closable;
        self
    }

    /// Set the animation length in milliseconds
    pub fn with_duration(mut self, millis: u32) -> Self {
        self.duration = millis;
        self
    }

    /// Make the popover controlled with an initial visibility
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PopoverConfig::default();
        assert_eq!(config.placement, Placement::Auto);
        assert_eq!(config.offsets(), PopoverOffsets::default());
        assert!(config.backdrop_closable);
        assert!(!config.is_controlled());
        assert_eq!(config.transition_duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_from_json_partial() {
        let config = PopoverConfig::from_json(r#"{"placement":"right","edgeOffset":10}"#).unwrap();
        assert_eq!(config.placement, Placement::Right);
        assert_eq!(config.edge_offset, 10.0);
        assert_eq!(config.arrow_size, 8.0);
        assert!(config.backdrop_closable);
    }

    #[test]
    fn test_visible_makes_controlled() {
        let config = PopoverConfig::from_json(r#"{"visible":false}"#).unwrap();
        assert!(config.is_controlled());
    }

    #[test]
    fn test_negative_offset_rejected() {
        let err = PopoverConfig::from_json(r#"{"arrowSize":-2}"#).unwrap_err();
        assert!(matches!(err, PopoverError::InvalidConfig(_)));
        assert!(err.to_string().contains("arrowSize"));
    }

    #[test]
    fn test_malformed_json() {
        let err = PopoverConfig::from_json("{placement").unwrap_err();
        assert!(matches!(err, PopoverError::Json(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"placement":"autoVertical","backdropClosable":false}}"#).unwrap();

        let config = PopoverConfig::from_path(file.path()).unwrap();
        assert_eq!(config.placement, Placement::AutoVertical);
        assert!(!config.backdrop_closable);

        let missing = PopoverConfig::from_path(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(PopoverError::Io(_))));
    }

    #[test]
    fn test_builder() {
        let config = PopoverConfig::new()
            .with_placement(Placement::Left)
            .with_offset(4.0)
            .with_arrow_size(0.0)
            .with_edge_offset(16.0)
            .with_backdrop_closable(false)
            .with_visible(true)
            .with_duration(50);
        assert_eq!(config.offsets().offset, 4.0);
        assert_eq!(config.transition_duration(), Duration::from_millis(50));
        assert_eq!(config.visible, Some(true));
        config.validate().unwrap();
    }
}

//! Mobile starter
//!
//! Facade over the workspace crates:
//!
//! - [`app_ui`] - Popover placement engine and design tokens
//! - [`app_state`] - App-wide stores such as the popover service

#![warn(missing_docs)]

pub use app_state;
pub use app_ui;

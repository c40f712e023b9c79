//! Application state management for the mobile starter
//!
//! This crate provides app-wide stores shared between screens, such as the
//! single-slot popover service.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod popover;

pub use popover::{
    ArrowSize, ComponentId, EventHandler, PopoverOptions, PopoverService, PopoverState,
    PopoverStore,
};

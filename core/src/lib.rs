//! vpad Core - On-screen virtual controller overlay
//!
//! This crate turns pointer input over a touch overlay into press and
//! release actions for an emulated system, and lays the overlay out in
//! screen pixels.
//!
//! # Architecture
//!
//! - [`VController`] - Owns every control, tracks per-pointer state and dispatches input
//! - [`VirtualControl`] - Trait shared by the d-pad, button groups, triggers and UI buttons
//! - [`RenderSurface`] - Draw-call sink supplied by the host renderer
//! - [`InputSink`] - Receiver of logical button actions
//! - [`Config`] - TOML-backed layout and input settings

pub mod config;
pub mod controller;
pub mod controls;
pub mod geometry;
pub mod input;

pub use config::{Config, ConfigError, InputConfig, LayoutConfig};
pub use controller::{SystemInputLayout, VController};
pub use controls::{
    ControlId, ControlState, KeyboardMode, LayoutContext, RenderSurface, Sprite, UiButtonKind,
    VirtualControl,
};
pub use geometry::Rect;
pub use input::{
    ButtonCode, Element, ElementPair, GamepadMap, InputAction, InputSink, KeyboardMap,
    PointerButton, PointerEvent, PointerState,
};

//! Viewport-driven behavior: visibility observation, per-frame tasks, scroll
//! tracking and in-page navigation.

pub mod frame;
pub mod navigator;
pub mod observer;
pub mod registry;
pub mod scroll;

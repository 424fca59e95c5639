//! GUI input adapter for the portfolio page.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for the section backdrop, and egui for the page content and navbar.

pub mod app;
pub mod commands;
pub mod events;

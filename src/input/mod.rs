//! Input adapters for the portfolio page.
//!
//! Adapters receive commands, clicks and scroll events from a front-end and
//! forward them to the navigation controller.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;

//! Spot card - a kitesurfing spot card for the terminal
//!
//! The library exposes the card's modules for testing and embedding.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod glyphs;
pub mod logging;
pub mod preview;
pub mod reducer;
pub mod state;
pub mod tasks;

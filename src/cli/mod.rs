//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - world-clock: Show local times for the home and requested cities
//! - search: Fuzzy-find city ids by name
//! - config show|set-home|add-city|remove-city|reset: Manage preferences
pub mod config;
pub mod search;
pub mod world_clock;

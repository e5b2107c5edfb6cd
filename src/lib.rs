//! Process board - Elm-style editing core
//!
//! This crate provides the core types and logic for editing boards of
//! processes (ordered slot lists) by drag-and-drop, implementing the Elm
//! Architecture pattern.

pub mod allocator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod scenario;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::BoardConfig;
pub use messages::Msg;
pub use model::BoardModel;

//! Runtime module - drives the update loop
//!
//! - `app` - owns the model, executes commands, feeds async results back as messages

pub mod app;

pub use app::App;

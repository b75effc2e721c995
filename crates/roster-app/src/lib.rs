//! roster-app - Application state and orchestration for Roster
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the message and action types, the update function, the form
//! model over an influencer draft, and configuration loading.

pub mod actions;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{default_config_path, load_settings, Settings};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, UiMode};

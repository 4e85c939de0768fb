//! Sketchpad Application
//!
//! Application shell: mounts the drawing canvas in the browser, and replays
//! recorded pointer-event scripts into SVG on native targets.

mod config;
mod replay;

pub use config::{AppConfig, apply_query_params};
pub use replay::{ReplayError, ReplaySummary, Script, load_script, parse_script, replay};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{CanvasMount, mount_sketchpad, run_wasm};

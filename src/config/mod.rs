// src/config/mod.rs

//! Configuration for a single launch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the resolved `LaunchConfig`
//!   (`model.rs`).
//! - Load an optional config file from disk (`loader.rs`).
//! - Apply defaults and check required inputs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_resolve, load_from_path};
pub use model::{
    Action, DEFAULT_LOG_PATH, ExecMode, LaunchConfig, LaunchInputs, LaunchKind, LaunchSection,
    RawConfigFile,
};

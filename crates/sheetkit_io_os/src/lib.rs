//! `sheetkit_io_os` v1:
//! Rust-side OS/process helper kernel.
//!
//! - `spec` : OS-family enum, options/models, error types
//! - `env`  : rendering-environment plan derivation and apply
//! - `open` : default-application file opener

pub mod env;
pub mod open;
pub mod spec;

pub use env::{apply_env_plan, derive_env_plan};
pub use open::{derive_open_command, open_with_default_app};
pub use spec::{EnumOsFamily, OpenFileError, SpecEnvOptions, SpecEnvPlan, SpecOpenCommand};

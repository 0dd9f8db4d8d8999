//! Command handlers (imperative shell)
//!
//! Each command resolves settings, builds a form, runs it against the
//! wallet and prints through an `Output`.

pub mod common;
pub mod config;
pub mod connect;
pub mod deploy;
pub mod interactive;
pub mod template;
pub mod validate;

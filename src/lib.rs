//! Random name draws from CSV files.
//!
//! The draw flow lives in [`workflow::Workflow`]; the desktop and console
//! binaries are thin frontends that show its prompts.

pub mod config;
pub mod data;
pub mod draw;
pub mod prompt;
pub mod select;
pub mod session;
pub mod workflow;

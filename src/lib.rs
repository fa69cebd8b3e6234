//! romtag - retro media filename tagging
//!
//! This library crate exposes the CLI building blocks for integration testing.

pub mod config;
pub mod output;
pub mod scanner;

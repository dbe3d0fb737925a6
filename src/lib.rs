//! render-opts: command-line options for the renderer
//!
//! A library for turning the renderer's command-line arguments into a
//! strongly-typed, validated configuration.

pub mod config;

//! Foundation types for Icicle controls.
//!
//! This crate holds the framework-agnostic types shared by the layout engine
//! and its hosts: geometry, navigation directions, panel configuration and
//! error types.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;

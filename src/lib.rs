// ABOUTME: Library crate for flow exposing the tmux, picker and switch API for testing and reuse

#![allow(missing_docs)]

pub mod config;
pub mod find;
pub mod picker;
pub mod switch;
pub mod tmux;

//! Platform abstraction layer
//!
//! Turns raw key events into the single level-state direction the
//! simulation reads each tick.

pub mod input;

pub use input::{InputBuffer, Key, KeyState};

//! Theme Module
//!
//! Color constants for the Workio desktop UI.

pub mod colors;

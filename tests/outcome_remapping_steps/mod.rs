//! Step definitions for outcome remapping scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;

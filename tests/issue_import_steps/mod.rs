//! Step definitions for issue import behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;

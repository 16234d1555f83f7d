//! Idempotent import of external issues into a local task store.
//!
//! Each issue gets a local identifier derived from its scope and number, so
//! re-importing finds the earlier copy without a mapping table. The copy's
//! local notes and in-progress status are merged into the fresh candidate
//! before it replaces the copy. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Run settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! Issue import: reconcile external tracker issues into a local task store.
//!
//! This crate turns issues from an external tracker into local task records
//! and merges them with copies that users have edited locally. Repeated
//! imports of the same issue always address the same record, because its
//! identifier is derived from the issue's scope and number.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (filesystem, templates)
//!
//! # Modules
//!
//! - [`import`]: Identity derivation, field projection, and merge-on-import

pub mod import;

//! Port contracts for issue import.
//!
//! Ports define infrastructure-agnostic interfaces used by import services.

pub mod renderer;
pub mod store;

pub use renderer::{TemplateError, TemplateRenderer};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};

#[cfg(test)]
pub use renderer::MockTemplateRenderer;
#[cfg(test)]
pub use store::MockTaskStore;

//! Adapter implementations of the import ports.

pub mod document;
pub mod fs;
pub mod memory;
pub mod template;

pub use fs::FsTaskStore;
pub use memory::InMemoryTaskStore;
pub use template::MiniJinjaRenderer;

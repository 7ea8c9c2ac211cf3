//! Executors that ship with weft but are not registered by default.

mod square_root;
mod word_count;

pub use square_root::SquareRootExecutor;
pub use word_count::WordCountExecutor;

use crate::registry::ExecutorRegistry;

/// A fresh registry with the built-ins plus every optional executor.
pub fn extended_registry() -> ExecutorRegistry {
  let registry = ExecutorRegistry::new();
  registry.register(SquareRootExecutor);
  registry.register(WordCountExecutor);
  registry
}

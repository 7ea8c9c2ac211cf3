//! Kind -> executor lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::builtin;
use crate::executor::NodeExecutor;

static GLOBAL: LazyLock<Arc<ExecutorRegistry>> =
  LazyLock::new(|| Arc::new(ExecutorRegistry::new()));

/// Mutable map from node kind to the executor that runs it.
///
/// Registering a kind that already exists replaces it. Registries are
/// independent of each other; [`ExecutorRegistry::global`] is the one shared
/// by everything that does not bring its own, so changes to it are visible to
/// all of its users.
pub struct ExecutorRegistry {
  executors: RwLock<HashMap<String, Arc<dyn NodeExecutor>>>,
}

impl ExecutorRegistry {
  /// A registry with the built-in kinds.
  pub fn new() -> Self {
    let registry = Self::empty();
    builtin::register_defaults(&registry);
    registry
  }

  /// A registry with no kinds at all.
  pub fn empty() -> Self {
    Self {
      executors: RwLock::new(HashMap::new()),
    }
  }

  /// The process-wide default registry.
  pub fn global() -> Arc<ExecutorRegistry> {
    GLOBAL.clone()
  }

  /// Register an executor under the kind it declares.
  pub fn register(&self, executor: impl NodeExecutor + 'static) {
    self.register_arc(Arc::new(executor));
  }

  /// Register an already shared executor.
  pub fn register_arc(&self, executor: Arc<dyn NodeExecutor>) {
    let kind = executor.kind().to_string();
    debug!(kind = %kind, "executor_registered");
    self.write().insert(kind, executor);
  }

  /// Look up the executor for `kind`.
  pub fn get(&self, kind: &str) -> Option<Arc<dyn NodeExecutor>> {
    self.read().get(kind).cloned()
  }

  /// Remove `kind`. Returns whether it was registered.
  pub fn unregister(&self, kind: &str) -> bool {
    let removed = self.write().remove(kind).is_some();
    if removed {
      debug!(kind = %kind, "executor_unregistered");
    }
    removed
  }

  pub fn contains(&self, kind: &str) -> bool {
    self.read().contains_key(kind)
  }

  /// Registered kinds, sorted.
  pub fn kinds(&self) -> Vec<String> {
    let mut kinds: Vec<String> = self.read().keys().cloned().collect();
    kinds.sort();
    kinds
  }

  pub fn len(&self) -> usize {
    self.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.read().is_empty()
  }

  // A panic while holding the lock cannot leave the map half-updated, so a
  // poisoned lock is still safe to use.
  fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn NodeExecutor>>> {
    self.executors.read().unwrap_or_else(|e| e.into_inner())
  }

  fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn NodeExecutor>>> {
    self.executors.write().unwrap_or_else(|e| e.into_inner())
  }
}

impl Default for ExecutorRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for ExecutorRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ExecutorRegistry")
      .field("kinds", &self.kinds())
      .finish()
  }
}

use thiserror::Error;

/// Why a single node failed. Never aborts a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NodeError {
  /// A two-input kind is missing one or both of `inputA` / `inputB`.
  #[error("{kind} node requires both inputs A and B")]
  MissingInputs { kind: &'static str },

  /// A single-input kind has nothing on `input`.
  #[error("{kind} node requires input")]
  MissingInput { kind: &'static str },

  #[error("division by zero")]
  DivisionByZero,

  /// The configured operation or condition is not one the kind knows.
  #[error("unknown {what}: {value}")]
  UnknownOperation { what: &'static str, value: String },

  #[error("cannot calculate square root of a negative number")]
  NegativeSquareRoot,

  /// The node's `data` does not have the expected shape.
  #[error("invalid configuration: {message}")]
  InvalidConfig { message: String },

  /// Free-form failure for custom executors.
  #[error("{message}")]
  Failed { message: String },
}

impl NodeError {
  pub fn failed(message: impl Into<String>) -> Self {
    Self::Failed {
      message: message.into(),
    }
  }
}

//! Node kind identifiers understood by the bundled executors.

/// Emits its configured `value`.
pub const INPUT: &str = "inputNode";
/// Binary arithmetic over `inputA` and `inputB`.
pub const MATH: &str = "mathNode";
/// Unary text transform over `input`.
pub const TEXT: &str = "textNode";
/// Binary numeric comparison over `inputA` and `inputB`.
pub const CONDITION: &str = "conditionNode";
/// Terminal probe that passes `input` through.
pub const OUTPUT: &str = "outputNode";
/// Square root of `input`. Not registered by default.
pub const SQUARE_ROOT: &str = "squareRootNode";
/// Word and character statistics of `input`. Not registered by default.
pub const WORD_COUNT: &str = "wordCountNode";

/// Slot names used by two-input kinds.
pub const INPUT_A: &str = "inputA";
pub const INPUT_B: &str = "inputB";

use async_trait::async_trait;
use serde_json::{Value, json};
use weft_config::{DEFAULT_INPUT_SLOT, kinds};

use crate::coerce::to_text;
use crate::context::NodeContext;
use crate::error::NodeError;
use crate::executor::NodeExecutor;

/// Word and character statistics of the text on `input`.
///
/// Output: `{ wordCount, charCount, charCountNoSpaces, words }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCountExecutor;

#[async_trait]
impl NodeExecutor for WordCountExecutor {
  fn kind(&self) -> &str {
    kinds::WORD_COUNT
  }

  async fn execute(&self, _config: &Value, ctx: &NodeContext<'_>) -> Result<Value, NodeError> {
    let input = ctx
      .input(DEFAULT_INPUT_SLOT)
      .ok_or(NodeError::MissingInput { kind: "word count" })?;
    let text = to_text(input);

    let words: Vec<&str> = text.split_whitespace().collect();
    let char_count = text.chars().count();
    let char_count_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

    ctx.log(format!(
      "  word count: {:?} -> {} words, {} chars",
      text,
      words.len(),
      char_count
    ));
    Ok(json!({
      "wordCount": words.len(),
      "charCount": char_count,
      "charCountNoSpaces": char_count_no_spaces,
      "words": words,
    }))
  }
}

//! Loose value coercion.
//!
//! Graphs come from a dynamically typed editor, so numeric kinds accept
//! strings like `"42"` and text kinds accept numbers. The rules here mirror
//! what the editor's users expect from that environment.

use serde_json::Value;

/// Coerce a value to a number. Unparsable values become NaN.
pub fn to_number(value: &Value) -> f64 {
  match value {
    Value::Null => 0.0,
    Value::Bool(b) => {
      if *b {
        1.0
      } else {
        0.0
      }
    }
    Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
    Value::String(s) => parse_number(s),
    Value::Array(_) => parse_number(&to_text(value)),
    Value::Object(_) => f64::NAN,
  }
}

fn parse_number(s: &str) -> f64 {
  match s.trim() {
    "" => 0.0,
    "Infinity" | "+Infinity" => f64::INFINITY,
    "-Infinity" => f64::NEG_INFINITY,
    s if s
      .bytes()
      .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) =>
    {
      s.parse().unwrap_or(f64::NAN)
    }
    _ => f64::NAN,
  }
}

/// Coerce a value to text.
pub fn to_text(value: &Value) -> String {
  match value {
    Value::Null => "null".to_string(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => match n.as_i64() {
      Some(i) => i.to_string(),
      None => format_number(n.as_f64().unwrap_or(f64::NAN)),
    },
    Value::String(s) => s.clone(),
    Value::Array(items) => items
      .iter()
      .map(|item| match item {
        Value::Null => String::new(),
        other => to_text(other),
      })
      .collect::<Vec<_>>()
      .join(","),
    Value::Object(_) => value.to_string(),
  }
}

/// Render a number the way it reads in the editor: no trailing `.0`.
pub fn format_number(n: f64) -> String {
  if n.is_nan() {
    "NaN".to_string()
  } else if n.is_infinite() {
    let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
    text.to_string()
  } else if n == 0.0 {
    "0".to_string()
  } else {
    n.to_string()
  }
}

/// Wrap a computed number as a JSON value.
///
/// Integral results become JSON integers so `10 + 5` reads back as `15`.
/// JSON has no NaN or infinity; those become `null`.
pub fn number_value(n: f64) -> Value {
  const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

  if !n.is_finite() {
    Value::Null
  } else if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
    Value::from(n as i64)
  } else {
    Value::from(n)
  }
}

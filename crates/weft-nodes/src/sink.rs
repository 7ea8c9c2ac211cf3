//! Sinks for human-readable progress lines.
//!
//! Lines are purely observational: nothing an executor or the runtime writes
//! to a sink affects results.

use tokio::sync::mpsc;

/// Receives progress lines during a run.
pub trait LogSink: Send + Sync {
  fn log(&self, line: &str);
}

impl<F> LogSink for F
where
  F: Fn(&str) + Send + Sync,
{
  fn log(&self, line: &str) {
    self(line)
  }
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
  fn log(&self, _line: &str) {}
}

/// Forwards lines to an unbounded channel.
///
/// Use this to stream progress to another task (a UI, a websocket) while the
/// run is still going.
#[derive(Debug, Clone)]
pub struct ChannelSink {
  sender: mpsc::UnboundedSender<String>,
}

impl ChannelSink {
  pub fn new(sender: mpsc::UnboundedSender<String>) -> Self {
    Self { sender }
  }
}

impl LogSink for ChannelSink {
  fn log(&self, line: &str) {
    // Receiver may have been dropped
    let _ = self.sender.send(line.to_string());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_channel_sink_forwards_lines() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sink = ChannelSink::new(tx);

    sink.log("one");
    sink.log("two");

    assert_eq!(rx.try_recv().unwrap(), "one");
    assert_eq!(rx.try_recv().unwrap(), "two");
  }

  #[test]
  fn test_channel_sink_ignores_closed_receiver() {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    ChannelSink::new(tx).log("nobody listening");
  }
}

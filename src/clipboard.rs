use crate::config::Config;
use crate::node::Node;
use std::io;
use std::time::{Duration, Instant};

/// Seam for the host clipboard. The engine never talks to a real
/// clipboard itself; the display collaborator supplies one.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Per-code-block copy action with a transient "copied" indicator.
/// Fire-and-forget: triggering never blocks or reports an error, and
/// the indicator expires on its own once the delay elapses.
#[derive(Debug, Clone)]
pub struct CopyAffordance {
    code: String,
    reset_delay: Duration,
    copied_until: Option<Instant>,
}

impl CopyAffordance {
    pub fn new(code: impl Into<String>, reset_delay: Duration) -> Self {
        CopyAffordance {
            code: code.into(),
            reset_delay,
            copied_until: None,
        }
    }

    /// Builds the affordance for a code-block node; other node kinds
    /// carry no copy action.
    pub fn for_node(node: &Node, config: &Config) -> Option<Self> {
        match node {
            Node::CodeBlock { code, .. } => Some(CopyAffordance::new(
                code.clone(),
                Duration::from_millis(config.copy_reset_ms),
            )),
            _ => None,
        }
    }

    /// Writes the literal code text. On failure the action is a no-op;
    /// the indicator only arms when the write succeeds.
    pub fn trigger(&mut self, clipboard: &mut dyn Clipboard) {
        if clipboard.write_text(&self.code).is_ok() {
            self.copied_until = Some(Instant::now() + self.reset_delay);
        }
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }
}

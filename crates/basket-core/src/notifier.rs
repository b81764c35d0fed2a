//! # Notifier Trait
//!
//! Where cart messages go. The cart itself only produces outcomes; a
//! `Notifier` receives the rendered lines.
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │            Notifier (trait)            │
//! │  └── notify(line)                      │
//! └────────────────────────────────────────┘
//!                     ▲
//!          ┌──────────┴──────────┐
//!  ┌───────┴────────┐   ┌────────┴───────┐
//!  │ConsoleNotifier │   │ MemoryNotifier │
//!  │   (stdout)     │   │  (Vec<String>) │
//!  └────────────────┘   └────────────────┘
//! ```

/// Sink for human-readable cart message lines
pub trait Notifier {
    /// Emit one line of output
    fn notify(&mut self, line: &str);

    /// Emit several lines in order
    fn notify_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        for line in lines {
            self.notify(line.as_ref());
        }
    }
}

/// Type alias for a boxed notifier (dynamic dispatch)
pub type BoxedNotifier = Box<dyn Notifier>;

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, line: &str) {
        (**self).notify(line);
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, line: &str) {
        (**self).notify(line);
    }
}

/// Prints every line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Records lines in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNotifier {
    lines: Vec<String>,
}

impl MemoryNotifier {
    /// Create a notifier with no recorded lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines recorded so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the recorded lines, leaving the notifier empty
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

//! Debug logging for the gauge widget.
//!
//! A small ring buffer of text lines, filled from the widget's lifecycle
//! (attribute extraction, measure, policy changes) and shown by hosts on a
//! debug overlay. No heap: lines are fixed-capacity `heapless::String`s.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("view created");
//! log_fmt!(log, "measure -> {}", side);
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer for debug log messages.
///
/// Old messages are dropped when the buffer is full. Lines longer than
/// `LOG_LINE_LENGTH - 1` characters are truncated.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create a new empty debug log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a log message. If buffer is full, oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= LOG_LINE_LENGTH - 1 {
                break;
            }
            if line.push(c).is_err() {
                break;
            }
        }
        self.push_line(line);
    }

    /// Push a formatted message. Output beyond the line capacity is dropped.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line = Truncating(String::new());
        // Truncating never reports an error, it only stops accepting input.
        let _ = line.write_fmt(args);
        self.push_line(line.0);
    }

    fn push_line(
        &mut self,
        line: String<LOG_LINE_LENGTH>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent message, if any.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    /// Get number of log entries.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Check if log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

/// `fmt::Write` adapter that silently drops characters once the line is full.
struct Truncating(String<LOG_LINE_LENGTH>);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.len() + c.len_utf8() > LOG_LINE_LENGTH - 1 {
                break;
            }
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Push a `format!`-style message into a [`DebugLog`].
#[macro_export]
macro_rules! log_fmt {
    ($log:expr, $($arg:tt)*) => {
        $log.push_fmt(format_args!($($arg)*))
    };
}

// =============================================================================
// Tests
// =============================================================================

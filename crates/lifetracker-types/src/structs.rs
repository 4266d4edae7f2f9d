//! Core record types for the LifeTracker event store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::EventKind;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB display color attached to each log entry.
///
/// The store assigns colors from the fixed per-kind table; how (or whether)
/// they are rendered is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from its RGB channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase RGB hex rendering without a leading `#`, e.g. `C8E6C9`.
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// LogEntry
// ---------------------------------------------------------------------------

/// An immutable record of a single observed lifecycle transition.
///
/// Entries are created exactly once, at submission time, by the store and
/// never mutated afterwards. The timestamp is captured when the transition
/// is submitted and carried as a preformatted `HH:mm:ss.SSS` local-time
/// string, so a rendered log never reinterprets times after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The transition that occurred.
    pub kind: EventKind,
    /// Submission wall-clock time, formatted `HH:mm:ss.SSS`.
    pub timestamp: String,
    /// Display color for log rendering.
    pub color: Color,
}

impl LogEntry {
    /// The notification label corresponding to this entry's kind.
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }
}

//! Enumeration types for the LifeTracker event store.
//!
//! The transition set mirrors the six concrete lifecycle callbacks a host
//! shell reports for a component, plus the catch-all registration sentinel
//! that observer APIs use to mean "every kind".

use serde::{Deserialize, Serialize};

use crate::structs::Color;

// ---------------------------------------------------------------------------
// Lifecycle transitions
// ---------------------------------------------------------------------------

/// A lifecycle transition reported by the host application shell.
///
/// The six concrete variants are real transitions. [`EventKind::Any`] is a
/// registration sentinel: observer APIs use it to mean "notify me for every
/// kind". It never denotes an occurrence, and the lifecycle source is
/// contracted to filter it out before submission; the store additionally
/// ignores it if it slips through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The component was created.
    Created,
    /// The component became visible.
    Started,
    /// The component came to the foreground and is interactive.
    Resumed,
    /// The component lost foreground focus.
    Paused,
    /// The component is no longer visible.
    Stopped,
    /// The component was torn down.
    Destroyed,
    /// Catch-all registration sentinel, never a real transition.
    Any,
}

impl EventKind {
    /// The human-readable label published on the notification channel.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "ON_CREATE",
            Self::Started => "ON_START",
            Self::Resumed => "ON_RESUME",
            Self::Paused => "ON_PAUSE",
            Self::Stopped => "ON_STOP",
            Self::Destroyed => "ON_DESTROY",
            Self::Any => "ON_ANY",
        }
    }

    /// The fixed display color for log rendering.
    ///
    /// Pure and total: every kind maps to exactly one color, with no error
    /// path. The sentinel maps to white but never reaches a log because
    /// submissions of it are ignored.
    pub const fn color(self) -> Color {
        match self {
            Self::Created => Color::new(0xC8, 0xE6, 0xC9),   // light green
            Self::Started => Color::new(0xA5, 0xD6, 0xA7),   // green
            Self::Resumed => Color::new(0x81, 0xC7, 0x84),   // darker green
            Self::Paused => Color::new(0xFF, 0xCC, 0x80),    // light orange
            Self::Stopped => Color::new(0xFF, 0xAB, 0x91),   // orange
            Self::Destroyed => Color::new(0xEF, 0x9A, 0x9A), // red
            Self::Any => Color::new(0xFF, 0xFF, 0xFF),
        }
    }

    /// Whether this kind is the catch-all registration sentinel.
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Any)
    }
}

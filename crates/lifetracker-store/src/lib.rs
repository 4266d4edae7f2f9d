//! Observable lifecycle event store.
//!
//! This crate provides [`EventStore`], the single authority for recording
//! lifecycle transitions and fanning them out to observers without loss of
//! history and without duplicate ephemeral delivery:
//!
//! - a **durable log** of every transition, newest first, exposed through
//!   [`tokio::sync::watch`] so observers always read a full, consistent
//!   snapshot and are signalled on every change;
//! - an **ephemeral notification channel**, one label per transition,
//!   exposed through [`tokio::sync::broadcast`] so only observers
//!   subscribed at emission time are told, at most once, with no replay.
//!
//! # Architecture
//!
//! The store owns only the sender halves of both channels. Observers own
//! their receiver halves independently, so dropping an observer is an
//! immediate unsubscribe and never extends the store's lifetime. Log
//! mutation is whole-value replacement of an immutable snapshot; a
//! snapshot handed to an observer can never change underneath it.
//!
//! # Modules
//!
//! - [`store`] -- The [`EventStore`] itself
//! - [`log`] -- The immutable newest-first [`EventLog`] snapshot
//! - [`notifications`] -- The one-shot [`NotificationFeed`] receiver
//! - [`clock`] -- Wall-clock capture and `HH:mm:ss.SSS` formatting

pub mod clock;
pub mod log;
pub mod notifications;
pub mod store;

// Re-export primary types for convenience.
pub use log::EventLog;
pub use notifications::NotificationFeed;
pub use store::EventStore;

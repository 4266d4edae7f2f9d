//! Terminal harness for the LifeTracker event store.
//!
//! Plays both roles of the external collaborator the store is designed
//! around: a lifecycle source pushing discrete transitions in, and a
//! presentation layer rendering the durable log and the transient
//! notifications out. The scripted sequence mirrors a host shell taking a
//! component through launch, a background/foreground round trip, and exit.

mod config;

use std::time::Duration;

use tokio::time::sleep;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifetracker_store::EventStore;
use lifetracker_types::EventKind;

use crate::config::ConsoleConfig;

/// The transition script a host shell would produce. The catch-all
/// sentinel is included to exercise source-side filtering.
const SCRIPT: [EventKind; 11] = [
    EventKind::Created,
    EventKind::Started,
    EventKind::Resumed,
    EventKind::Any,
    EventKind::Paused,
    EventKind::Stopped,
    EventKind::Started,
    EventKind::Resumed,
    EventKind::Paused,
    EventKind::Stopped,
    EventKind::Destroyed,
];

/// Application entry point.
///
/// Initializes logging, loads configuration, starts the presentation
/// tasks, replays the lifecycle script into the store, then renders the
/// full history and shuts down.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("lifetracker-console starting");

    let config = ConsoleConfig::from_env()?;
    info!(
        show_notifications = config.show_notifications,
        step_millis = config.step_millis,
        "configuration loaded"
    );

    let store = EventStore::new();

    // Presentation: transient notification lines, gated by the
    // presentation-owned switch. The store emits regardless.
    let mut feed = store.subscribe();
    let show_notifications = config.show_notifications;
    let toaster = tokio::spawn(async move {
        while let Some(label) = feed.recv().await {
            if show_notifications {
                println!(">>> Lifecycle event: {label}");
            }
        }
    });

    // Presentation: render the newest entry on every log change.
    let mut log_rx = store.watch_log();
    let renderer = tokio::spawn(async move {
        while log_rx.changed().await.is_ok() {
            let snapshot = log_rx.borrow_and_update().clone();
            if let Some(entry) = snapshot.newest() {
                println!(
                    "[{}] {:<10} {}  ({} recorded)",
                    entry.timestamp,
                    entry.label(),
                    entry.color,
                    snapshot.len()
                );
            }
        }
    });

    // Lifecycle source: replay the script, suppressing the sentinel the
    // way a real source is contracted to.
    for kind in SCRIPT {
        if kind.is_sentinel() {
            continue;
        }
        store.submit(kind);
        sleep(Duration::from_millis(config.step_millis)).await;
    }

    println!("--- full history, newest first ---");
    for entry in &store.log() {
        println!("[{}] {:<10} {}", entry.timestamp, entry.label(), entry.color);
    }

    // Dropping the store closes both channels; the presentation tasks
    // drain and exit on their own.
    drop(store);
    renderer.await?;
    toaster.await?;

    info!("lifetracker-console finished");
    Ok(())
}

//! Config file watching. Runs on the background runtime and turns file
//! events into [`AppEvent::ConfigReload`] for the GTK loop.

use crate::config::{self, ConfigError};
use crate::events::AppEvent;
use async_channel::Sender;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;

/// True for events that create, change or remove `config_path` itself.
pub fn touches_config(event: &Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

/// Watches the config directory until the GTK side drops its receiver.
pub async fn watch_config(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let config_path = config::get_config_path()?;
    let Some(config_dir) = config_path.parent() else {
        return Ok(());
    };
    // notify needs the watched directory to exist
    fs_err::create_dir_all(config_dir)?;

    let (events_tx, events_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = events_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(config_dir, RecursiveMode::NonRecursive)?;
    log::debug!("Watching {}", config_dir.display());

    while let Ok(res) = events_rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Watch error: {}", e);
                continue;
            }
        };
        if !touches_config(&event, &config_path) {
            continue;
        }
        log::debug!("Config file event: {:?}", event.kind);
        if tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
    Ok(())
}

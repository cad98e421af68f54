use super::watch;
use crate::events::AppEvent;
use async_channel::Sender;
use std::io;
use std::thread;
use tokio::runtime;

/// Runs the config watcher on its own thread with a single-threaded runtime.
/// A watcher that fails only disables hot reload.
pub fn spawn_config_watcher(tx: Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("config-watcher".to_string())
        .spawn(move || {
            let rt = match runtime::Builder::new_current_thread().enable_all().build() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create Tokio runtime, config reload disabled: {}", e);
                    return;
                }
            };
            match rt.block_on(watch::watch_config(tx)) {
                Ok(()) => log::debug!("Config watcher finished"),
                Err(e) => log::error!("Config watcher stopped, reload disabled: {}", e),
            }
        })?;
    Ok(())
}

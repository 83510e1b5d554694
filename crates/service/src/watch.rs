use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::host::VirtualProjectHost;
use crate::{Result, ServiceError};

/// Drops cached route augmentations when their files change on disk.
///
/// Invalidation only: the next query against a dropped file rebuilds its
/// entry lazily. Editors that push text through the delegate host are
/// covered by version tokens already; the watcher catches out-of-editor
/// changes (git checkout, codegen runs).
pub struct RouteWatcher {
    // keep the OS watcher alive for as long as invalidation should run
    _watcher: RecommendedWatcher,
}

impl RouteWatcher {
    pub fn spawn(host: Arc<VirtualProjectHost>, root: &Path) -> Result<Self> {
        let handler_host = host.clone();
        let mut watcher = notify::recommended_watcher(move |event: notify::Result<Event>| {
            match event {
                Ok(event) => handle_event(&handler_host, &event),
                Err(err) => warn!("watch error: {err}"),
            }
        })
        .map_err(|err| ServiceError::Watch(err.to_string()))?;
        watcher
            .watch(root, RecursiveMode::Recursive)
            .map_err(|err| ServiceError::Watch(err.to_string()))?;
        debug!("watching {} for route changes", root.display());
        Ok(Self { _watcher: watcher })
    }
}

fn handle_event(host: &VirtualProjectHost, event: &Event) {
    for path in &event.paths {
        if host.invalidate(path) {
            debug!("invalidated cached augmentation for {}", path.display());
        }
    }
}

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, warn};

use routetype_annotate::annotate_route;
use routetype_protocol::ScriptHost;
use routetype_routes::{ProjectConfig, RouteRegistry};
use routetype_splice::AugmentedModule;

use crate::{Result, ServiceError};

/// Sentinel version for a cache entry built before its delegate version was
/// observed. Never equal to any real version token, so the entry fails its
/// next freshness check and is rebuilt against the delegate's version.
pub const FORCE_UPDATE_VERSION: &str = "__routetype_force_update__";

/// One cached route augmentation: the applied snapshot, the splice list
/// that produced it, and the delegate version it was built from.
///
/// Entries are immutable; staleness drops the `Arc` from the cache and a
/// later lookup builds a fresh one. Holders of an entry keep a consistent
/// snapshot/splice pair for the whole query they serve.
#[derive(Debug)]
pub struct RouteModuleEntry {
    pub snapshot: Arc<str>,
    pub version: String,
    pub module: AugmentedModule,
}

/// Overlay host serving augmented snapshots for route modules and
/// delegating everything else.
///
/// The engine bound to this host sees route files with the synthetic import
/// and `satisfies` annotations already applied; all other files, versions,
/// and file-system queries pass straight through to the delegate.
pub struct VirtualProjectHost {
    delegate: Arc<dyn ScriptHost>,
    config: ProjectConfig,
    routes: Arc<RouteRegistry>,
    cache: Mutex<HashMap<PathBuf, Arc<RouteModuleEntry>>>,
}

impl VirtualProjectHost {
    pub fn new(
        delegate: Arc<dyn ScriptHost>,
        config: ProjectConfig,
        routes: Arc<RouteRegistry>,
    ) -> Self {
        Self {
            delegate,
            config,
            routes,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    /// The cached entry for `file`, only if still fresh.
    ///
    /// An entry carrying [`FORCE_UPDATE_VERSION`] is never fresh, and
    /// neither is one whose recorded version differs from the delegate's
    /// current token.
    pub fn route_if_current(&self, file: &Path) -> Option<Arc<RouteModuleEntry>> {
        let cache = self.lock_cache();
        let entry = cache.get(file)?.clone();
        if entry.version == FORCE_UPDATE_VERSION {
            return None;
        }
        let delegate_version = self.delegate.script_version(file)?;
        if entry.version != delegate_version {
            return None;
        }
        Some(entry)
    }

    /// Build (or rebuild) the augmentation for `file` and cache it.
    ///
    /// The first entry for a file records [`FORCE_UPDATE_VERSION`] so the
    /// next freshness check forces one rebuild against the observed
    /// delegate version; replacements record the real token.
    pub fn ensure_route(&self, file: &Path) -> Result<Arc<RouteModuleEntry>> {
        if !self.routes.is_route(file) {
            return Err(ServiceError::NotARoute(file.to_path_buf()));
        }
        let text = self
            .delegate
            .script_text(file)
            .ok_or_else(|| ServiceError::MissingSource(file.to_path_buf()))?;
        let specifier = self.config.types_module_specifier(file);
        let module = annotate_route(file, &text, &specifier)?;
        let snapshot: Arc<str> = Arc::from(module.augmented_text());

        let mut cache = self.lock_cache();
        let version = if cache.contains_key(file) {
            self.delegate
                .script_version(file)
                .unwrap_or_else(|| FORCE_UPDATE_VERSION.to_string())
        } else {
            FORCE_UPDATE_VERSION.to_string()
        };
        debug!(
            "augmented {} ({} splices, version {version})",
            file.display(),
            module.splices().len()
        );
        let entry = Arc::new(RouteModuleEntry {
            snapshot,
            version,
            module,
        });
        cache.insert(file.to_path_buf(), entry.clone());
        Ok(entry)
    }

    /// The current entry for `file`: the fresh cached one, or a rebuild.
    ///
    /// Returns `None` for non-routes and for files whose splice planning
    /// fails (`export =` modules); those fall back to the native view.
    pub fn get_route(&self, file: &Path) -> Option<Arc<RouteModuleEntry>> {
        if !self.routes.is_route(file) {
            return None;
        }
        if let Some(entry) = self.route_if_current(file) {
            return Some(entry);
        }
        match self.ensure_route(file) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("augmentation disabled for {}: {err}", file.display());
                None
            }
        }
    }

    /// Drop the cached entry for `file`. Returns whether one existed.
    pub fn invalidate(&self, file: &Path) -> bool {
        self.lock_cache().remove(file).is_some()
    }

    pub fn invalidate_all(&self) {
        self.lock_cache().clear();
    }

    /// Drop and eagerly rebuild the entry for `file`.
    pub fn refresh(&self, file: &Path) -> Result<Arc<RouteModuleEntry>> {
        self.invalidate(file);
        self.ensure_route(file)
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Arc<RouteModuleEntry>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ScriptHost for VirtualProjectHost {
    fn script_file_names(&self) -> Vec<PathBuf> {
        self.delegate.script_file_names()
    }

    fn script_version(&self, file: &Path) -> Option<String> {
        if let Some(entry) = self.lock_cache().get(file) {
            return Some(entry.version.clone());
        }
        self.delegate.script_version(file)
    }

    fn script_text(&self, file: &Path) -> Option<Arc<str>> {
        if let Some(entry) = self.get_route(file) {
            return Some(entry.snapshot.clone());
        }
        self.delegate.script_text(file)
    }

    fn file_exists(&self, file: &Path) -> bool {
        self.delegate.file_exists(file)
    }

    fn default_lib_file(&self) -> PathBuf {
        self.delegate.default_lib_file()
    }

    fn read_directory(&self, dir: &Path) -> Vec<PathBuf> {
        self.delegate.read_directory(dir)
    }
}

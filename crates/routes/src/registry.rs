use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{ProjectConfig, RouteManifest};

/// A module recognized as implementing a set of conventionally named route
/// exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// URL path pattern from the manifest.
    pub path: String,
    /// Module file, relative to the app directory.
    pub file: PathBuf,
}

/// Routes keyed by absolute file path. Built once per manifest read;
/// rebuild from a fresh manifest when the route config changes.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    by_path: HashMap<PathBuf, Route>,
}

impl RouteRegistry {
    pub fn from_manifest(config: &ProjectConfig, manifest: &RouteManifest) -> Self {
        let mut by_path = HashMap::with_capacity(manifest.len());
        for entry in &manifest.routes {
            let absolute = config.route_file_path(&entry.file);
            by_path.insert(
                absolute,
                Route {
                    path: entry.path.clone(),
                    file: PathBuf::from(&entry.file),
                },
            );
        }
        debug!("route registry built with {} routes", by_path.len());
        Self { by_path }
    }

    /// Look up a route by absolute file path.
    pub fn get(&self, file: &Path) -> Option<&Route> {
        self.by_path.get(file)
    }

    pub fn is_route(&self, file: &Path) -> bool {
        self.by_path.contains_key(file)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Absolute paths of all registered routes.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.by_path.keys().map(PathBuf::as_path)
    }
}

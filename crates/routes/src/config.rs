use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-project configuration for route augmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory containing the route modules; manifest `file` entries are
    /// relative to it.
    pub app_directory: PathBuf,
    /// Directory the external templater writes generated-type modules to.
    pub types_directory: PathBuf,
}

impl ProjectConfig {
    pub fn new(app_directory: impl Into<PathBuf>, types_directory: impl Into<PathBuf>) -> Self {
        Self {
            app_directory: app_directory.into(),
            types_directory: types_directory.into(),
        }
    }

    /// Absolute path of a route module given its app-relative `file`.
    pub fn route_file_path(&self, file: impl AsRef<Path>) -> PathBuf {
        self.app_directory.join(file)
    }

    /// Path of the generated-type module for a route file, mirroring the
    /// route's app-relative location under `types_directory` with a
    /// `+types` directory next to the module:
    /// `app/routes/product.tsx` -> `<types>/routes/+types/product.ts`.
    pub fn types_module_path(&self, route_file: &Path) -> PathBuf {
        let relative = route_file
            .strip_prefix(&self.app_directory)
            .unwrap_or(route_file);
        let stem = relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut out = self.types_directory.clone();
        if let Some(parent) = relative.parent().filter(|p| !p.as_os_str().is_empty()) {
            out.push(parent);
        }
        out.push("+types");
        out.push(format!("{stem}.ts"));
        out
    }

    /// Import specifier for the generated-type module: the module path
    /// without its extension. The splice planner injects this verbatim into
    /// the synthetic import.
    pub fn types_module_specifier(&self, route_file: &Path) -> String {
        let path = self.types_module_path(route_file);
        let without_ext = path.with_extension("");
        without_ext.to_string_lossy().replace('\\', "/")
    }
}

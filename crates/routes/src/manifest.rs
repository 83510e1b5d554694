use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

/// One manifest entry: a URL path pattern bound to an app-relative module
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRoute {
    /// URL path pattern (`products/:id`). Pattern parsing is an external
    /// concern; the string is carried through untouched.
    pub path: String,
    /// Module file, relative to the app directory.
    pub file: String,
}

/// The route manifest, as produced by the external route-config
/// collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteManifest {
    pub routes: Vec<ManifestRoute>,
}

impl RouteManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

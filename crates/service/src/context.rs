use std::sync::Arc;

use log::info;

use routetype_protocol::{LanguageEngine, LanguageService, ScriptHost};
use routetype_routes::{ProjectConfig, RouteRegistry};

use crate::host::VirtualProjectHost;

/// Everything one project's decorated queries need: the native service
/// bound to the real files, the augmented service bound to the virtual
/// host, and the host itself.
///
/// Contexts are built explicitly and passed to [`crate::DecoratedService`];
/// there is no process-wide current project.
pub struct ProjectContext {
    host: Arc<VirtualProjectHost>,
    native: Arc<dyn LanguageService>,
    augmented: Arc<dyn LanguageService>,
    routes: Arc<RouteRegistry>,
}

impl ProjectContext {
    pub fn new(
        engine: &dyn LanguageEngine,
        delegate: Arc<dyn ScriptHost>,
        native: Arc<dyn LanguageService>,
        config: ProjectConfig,
        routes: Arc<RouteRegistry>,
    ) -> Arc<Self> {
        let host = Arc::new(VirtualProjectHost::new(delegate, config, routes.clone()));
        let augmented = engine.create_service(host.clone() as Arc<dyn ScriptHost>);
        info!("project context ready ({} routes)", routes.len());
        Arc::new(Self {
            host,
            native,
            augmented,
            routes,
        })
    }

    pub fn host(&self) -> &Arc<VirtualProjectHost> {
        &self.host
    }

    /// Service bound to the delegate host (real file contents).
    pub fn native(&self) -> &dyn LanguageService {
        self.native.as_ref()
    }

    /// Service bound to the virtual host (augmented route contents).
    pub fn augmented(&self) -> &dyn LanguageService {
        self.augmented.as_ref()
    }

    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }
}

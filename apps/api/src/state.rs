use std::sync::Arc;

use crate::config::Config;
use crate::layout::{DateFormatter, IconRegistry, MonthYearFormatter, TemplateRegistry};

/// Shared application state injected into all route handlers via Axum extractors.
/// Registries are built at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub templates: Arc<TemplateRegistry>,
    pub icons: Arc<IconRegistry>,
    /// Pluggable date formatter. Default: MonthYearFormatter.
    pub formatter: Arc<dyn DateFormatter>,
}

impl AppState {
    pub fn new(config: Config, templates: TemplateRegistry) -> Self {
        AppState {
            config,
            templates: Arc::new(templates),
            icons: Arc::new(IconRegistry::default()),
            formatter: Arc::new(MonthYearFormatter),
        }
    }
}

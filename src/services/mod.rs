//! Business logic services

pub mod catalog;
pub mod lifecycle;

use std::sync::Arc;

use crate::{config::LifecycleConfig, repository::Store};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub lifecycle: lifecycle::LifecycleService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Arc<dyn Store>, lifecycle_config: LifecycleConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store.clone()),
            lifecycle: lifecycle::LifecycleService::new(store, lifecycle_config),
        }
    }
}

use std::sync::Arc;

use linkhop_core::ReadRegistry;

#[derive(Clone)]
pub struct AppState {
    registry: Arc<dyn ReadRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<dyn ReadRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &dyn ReadRegistry {
        self.registry.as_ref()
    }
}

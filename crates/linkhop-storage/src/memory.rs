use async_trait::async_trait;
use linkhop_core::{ReadRegistry, Registry, ShortCode, UrlRecord};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::trace;

/// In-memory implementation of the registry traits.
///
/// Every operation, read or write, goes through the same exclusive lock.
/// The lock is only held for the map access itself: never across an
/// `.await` and never while another lock is taken.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    storage: Mutex<HashMap<String, UrlRecord>>,
}

impl InMemoryRegistry {
    /// Creates a new, empty in-memory registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory registry with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl ReadRegistry for InMemoryRegistry {
    async fn get(&self, code: &ShortCode) -> Option<UrlRecord> {
        self.storage.lock().get(code.as_str()).cloned()
    }

    async fn len(&self) -> usize {
        self.storage.lock().len()
    }
}

#[async_trait]
impl Registry for InMemoryRegistry {
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Option<UrlRecord> {
        let replaced = self.storage.lock().insert(code.as_str().to_owned(), record);
        if replaced.is_some() {
            trace!(code = %code, "overwrote existing short code");
        }
        replaced
    }
}

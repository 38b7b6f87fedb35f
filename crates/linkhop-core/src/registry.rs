use crate::shortcode::ShortCode;
use async_trait::async_trait;
use std::sync::Arc;

/// A stored URL record in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// The long URL the short code redirects to.
    pub original_url: String,
}

impl UrlRecord {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}

/// A read-only view of a registry.
///
/// This trait provides only the read operations from [`Registry`],
/// allowing the redirect endpoint to have read-only access.
#[async_trait]
pub trait ReadRegistry: Send + Sync + 'static {
    /// Retrieves the URL record for a given short code.
    /// Returns `None` if the code was never registered.
    async fn get(&self, code: &ShortCode) -> Option<UrlRecord>;

    /// Number of registered short codes.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
pub trait Registry: ReadRegistry {
    /// Stores a URL record, replacing any record already registered under
    /// `code`. Returns the replaced record.
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Option<UrlRecord>;
}

#[async_trait]
impl<R: ReadRegistry + ?Sized> ReadRegistry for Arc<R> {
    async fn get(&self, code: &ShortCode) -> Option<UrlRecord> {
        (**self).get(code).await
    }

    async fn len(&self) -> usize {
        (**self).len().await
    }
}

#[async_trait]
impl<R: Registry + ?Sized> Registry for Arc<R> {
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Option<UrlRecord> {
        (**self).insert(code, record).await
    }
}

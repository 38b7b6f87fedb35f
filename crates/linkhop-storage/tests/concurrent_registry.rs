use std::collections::HashSet;
use std::sync::Arc;

use linkhop_core::ShortCode;
use linkhop_storage::{InMemoryRegistry, ReadRegistry, Registry, UrlRecord};

const WRITERS: usize = 16;
const CODES_PER_WRITER: usize = 200;
const OVERLAP: usize = 50;

fn url_for(code: &str) -> String {
    format!("https://example.com/{code}")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_writers_and_readers_lose_no_updates() {
    let registry = Arc::new(InMemoryRegistry::new());
    let mut handles = Vec::new();

    // Each writer owns a private range and also writes into a shared range
    // that every writer touches.
    for writer in 0..WRITERS {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            for i in 0..CODES_PER_WRITER {
                let code = format!("w{writer}-{i}");
                registry
                    .insert(&ShortCode::new(code.as_str()), UrlRecord::new(url_for(&code)))
                    .await;
            }
            for i in 0..OVERLAP {
                let code = format!("shared-{i}");
                registry
                    .insert(&ShortCode::new(code.as_str()), UrlRecord::new(url_for(&code)))
                    .await;
            }
        }));
    }

    for reader in 0..WRITERS {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            for i in 0..CODES_PER_WRITER {
                let code = format!("w{reader}-{i}");
                if let Some(record) = registry.get(&ShortCode::new(code.as_str())).await {
                    assert_eq!(record.original_url, url_for(&code));
                }
                let _ = registry.len().await;
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let mut expected = HashSet::new();
    for writer in 0..WRITERS {
        for i in 0..CODES_PER_WRITER {
            expected.insert(format!("w{writer}-{i}"));
        }
    }
    for i in 0..OVERLAP {
        expected.insert(format!("shared-{i}"));
    }

    assert_eq!(registry.len().await, expected.len());
    for code in &expected {
        let record = registry.get(&ShortCode::new(code.as_str())).await.unwrap();
        assert_eq!(record.original_url, url_for(code));
    }
}

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tinylink_core::error::StorageError;
use tinylink_core::repository::{LinkRecord, ReadRepository, Repository, Result};
use tinylink_core::shortcode::ShortCode;

/// Process-local link records keyed by short code.
///
/// `create` checks for an existing code and inserts under the same shard
/// lock, so concurrent writers of one code see exactly one success.
/// Records are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, String>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self.storage.get(code.as_str()).map(|entry| LinkRecord {
            short_code: code.clone(),
            original_url: entry.value().clone(),
        }))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(code.as_str()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn create(&self, record: LinkRecord) -> Result<()> {
        // The entry guard holds the shard lock, so the vacancy check and the
        // insert cannot interleave with another writer.
        match self.storage.entry(record.short_code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(record.short_code.to_string())),
            Entry::Vacant(vacant) => {
                vacant.insert(record.original_url);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn record(code_str: &str, url: &str) -> LinkRecord {
        LinkRecord {
            short_code: code(code_str),
            original_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_get() {
        let repo = InMemoryRepository::new();

        repo.create(record("abc123", "https://example.com"))
            .await
            .unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result, record("abc123", "https://example.com"));
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get(&code("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn create_conflict_keeps_the_original() {
        let repo = InMemoryRepository::new();

        repo.create(record("abc123", "https://example.com"))
            .await
            .unwrap();

        let err = repo
            .create(record("abc123", "https://other.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Conflict(ref c) if c == "abc123"));
        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn codes_are_case_sensitive() {
        let repo = InMemoryRepository::new();

        repo.create(record("aB", "https://one.example")).await.unwrap();
        repo.create(record("Ab", "https://two.example")).await.unwrap();

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn same_url_under_two_codes() {
        let repo = InMemoryRepository::new();

        repo.create(record("one", "https://example.com")).await.unwrap();
        repo.create(record("two", "https://example.com")).await.unwrap();

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn exists_checks() {
        let repo = InMemoryRepository::new();

        assert!(!repo.exists(&code("abc123")).await.unwrap());

        repo.create(record("abc123", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.exists(&code("abc123")).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_creates_of_one_code_admit_a_single_writer() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..16u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(record("race", &format!("https://example{}.com", i)))
                    .await
                    .is_ok()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_access() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let r = record(&format!("code{:03}", i), &format!("https://example{}.com", i));
                repo.create(r).await.unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let c = code(&format!("code{:03}", i));
            let result = repo.get(&c).await.unwrap().unwrap();
            assert_eq!(result.original_url, format!("https://example{}.com", i));
        }
    }
}

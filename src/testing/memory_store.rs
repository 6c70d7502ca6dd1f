use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::path::Path;

use crate::errors::{DeployError, Result};
use crate::interfaces::{ListPage, ObjectStore};

/// An object as the fake store keeps it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Paginating in-memory object store.
///
/// Continuation tokens are the last key of the previous page, so deleting
/// objects mid-listing does not disturb pagination.
pub struct InMemoryStore {
    page_size: usize,
    buckets: RefCell<HashMap<String, BTreeMap<String, StoredObject>>>,
    list_calls: RefCell<Vec<Option<String>>>,
    deletes: RefCell<usize>,
    failing_key: Option<String>,
}

impl InMemoryStore {
    /// An empty store listing at most `page_size` keys per page
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            buckets: RefCell::new(HashMap::new()),
            list_calls: RefCell::new(Vec::new()),
            deletes: RefCell::new(0),
            failing_key: None,
        }
    }

    #[must_use]
    pub fn with_bucket(self, bucket: &str) -> Self {
        self.buckets
            .borrow_mut()
            .entry(bucket.to_string())
            .or_default();
        self
    }

    /// Make every delete or put of `key` fail
    #[must_use]
    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing_key = Some(key.to_string());
        self
    }

    pub fn insert(&self, bucket: &str, key: &str, content_type: &str, body: &[u8]) {
        self.buckets
            .borrow_mut()
            .entry(bucket.to_string())
            .or_default()
            .insert(
                key.to_string(),
                StoredObject {
                    content_type: content_type.to_string(),
                    body: body.to_vec(),
                },
            );
    }

    #[must_use]
    pub fn keys(&self, bucket: &str) -> BTreeSet<String> {
        self.buckets
            .borrow()
            .get(bucket)
            .map(|objects| objects.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.buckets
            .borrow()
            .get(bucket)
            .and_then(|objects| objects.get(key).cloned())
    }

    /// Continuation token passed to each listing call, in order
    #[must_use]
    pub fn list_calls(&self) -> Vec<Option<String>> {
        self.list_calls.borrow().clone()
    }

    #[must_use]
    pub fn delete_count(&self) -> usize {
        *self.deletes.borrow()
    }

    fn no_such_bucket(bucket: &str) -> String {
        format!("NoSuchBucket: {bucket}")
    }
}

impl ObjectStore for InMemoryStore {
    fn list_objects(&self, bucket: &str, continuation_token: Option<String>) -> Result<ListPage> {
        self.list_calls.borrow_mut().push(continuation_token.clone());

        let buckets = self.buckets.borrow();
        let objects = buckets.get(bucket).ok_or_else(|| DeployError::List {
            bucket: bucket.to_string(),
            message: Self::no_such_bucket(bucket),
        })?;

        let lower = match continuation_token {
            Some(token) => Excluded(token),
            None => Unbounded,
        };
        let mut keys: Vec<String> = objects
            .range((lower, Unbounded))
            .map(|(key, _)| key.clone())
            .take(self.page_size + 1)
            .collect();

        let next_token = if keys.len() > self.page_size {
            keys.truncate(self.page_size);
            keys.last().cloned()
        } else {
            None
        };

        Ok(ListPage { keys, next_token })
    }

    fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        let fail = |message: String| DeployError::Delete {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message,
        };
        if self.failing_key.as_deref() == Some(key) {
            return Err(fail("InternalError".to_string()));
        }

        let mut buckets = self.buckets.borrow_mut();
        let objects = buckets
            .get_mut(bucket)
            .ok_or_else(|| fail(Self::no_such_bucket(bucket)))?;
        // S3 reports success for missing keys too
        objects.remove(key);
        *self.deletes.borrow_mut() += 1;
        Ok(())
    }

    fn put_object(&self, bucket: &str, key: &str, path: &Path, content_type: &str) -> Result<()> {
        let fail = |message: String| DeployError::Upload {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message,
        };
        if self.failing_key.as_deref() == Some(key) {
            return Err(fail("InternalError".to_string()));
        }

        let body = std::fs::read(path).map_err(|source| DeployError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut buckets = self.buckets.borrow_mut();
        let objects = buckets
            .get_mut(bucket)
            .ok_or_else(|| fail(Self::no_such_bucket(bucket)))?;
        objects.insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                body,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_resume_after_token() {
        let store = InMemoryStore::new(2).with_bucket("b");
        for key in ["a", "b", "c"] {
            store.insert("b", key, "text/plain", b"x");
        }

        let first = store.list_objects("b", None).unwrap();
        assert_eq!(first.keys, vec!["a", "b"]);
        assert_eq!(first.next_token.as_deref(), Some("b"));

        let second = store.list_objects("b", first.next_token).unwrap();
        assert_eq!(second.keys, vec!["c"]);
        assert!(second.next_token.is_none());
    }

    #[test]
    fn unknown_bucket_fails_listing() {
        let store = InMemoryStore::new(10);
        assert!(store.list_objects("missing", None).is_err());
    }
}

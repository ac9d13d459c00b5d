//! Screen-owned collection cache.
//!
//! Each list screen owns one `CollectionCache` per remote collection it
//! renders. The cache is the only coordination primitive in the client:
//! after any successful mutation the screen calls [`CollectionCache::invalidate`],
//! which drops the cached rows and bumps a generation counter that the
//! screen's fetch task watches. Invalidation is coarse: the whole collection,
//! never a single item.

use std::future::Future;

/// Cached copy of one remote collection plus an invalidation generation.
#[derive(Clone, Debug)]
pub struct CollectionCache<T> {
    rows: Option<Vec<T>>,
    generation: u64,
}

impl<T> Default for CollectionCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionCache<T> {
    pub fn new() -> Self {
        Self {
            rows: None,
            generation: 0,
        }
    }

    /// Monotonic counter bumped by every [`invalidate`](Self::invalidate).
    /// Fetch tasks key on this to know when to refetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop the cached rows and force the next read to refetch.
    pub fn invalidate(&mut self) {
        self.rows = None;
        self.generation += 1;
    }

    /// Store a freshly fetched collection.
    pub fn fill(&mut self, rows: Vec<T>) {
        self.rows = Some(rows);
    }

    /// The cached rows, if any fetch has completed since the last
    /// invalidation.
    pub fn rows(&self) -> Option<&[T]> {
        self.rows.as_deref()
    }
}

impl<T: Clone> CollectionCache<T> {
    /// Return the cached rows, or run `fetch` and cache its result.
    pub async fn get_or_fetch<F, Fut, E>(&mut self, fetch: F) -> Result<Vec<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        if let Some(rows) = &self.rows {
            return Ok(rows.clone());
        }
        let rows = fetch().await?;
        self.rows = Some(rows.clone());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_get_or_fetch_caches_until_invalidated() {
        let calls = AtomicUsize::new(0);
        let mut cache = CollectionCache::new();

        let fetch = || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ()>(vec![1, 2, 3]) }
        };

        assert_eq!(cache.get_or_fetch(fetch).await.unwrap(), vec![1, 2, 3]);
        assert_eq!(cache.get_or_fetch(fetch).await.unwrap(), vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cache.invalidate();
        assert!(cache.rows().is_none());
        assert_eq!(cache.get_or_fetch(fetch).await.unwrap(), vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalidate_bumps_generation() {
        let mut cache = CollectionCache::<u8>::new();
        assert_eq!(cache.generation(), 0);
        cache.fill(vec![1]);
        cache.invalidate();
        cache.invalidate();
        assert_eq!(cache.generation(), 2);
        assert!(cache.rows().is_none());
    }
}

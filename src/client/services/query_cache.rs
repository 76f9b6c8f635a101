use std::collections::HashMap;
use std::sync::Mutex;

/// Query group refreshed after every successful analysis.
pub const ANALYSIS_QUERY_TAG: &str = "analysis";

/// Data-fetching layer as seen by the coordinators: they only ever mark a
/// query group stale.
pub trait QueryCache: Send + Sync {
    fn invalidate(&self, tag: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct QueryEntry {
    generation: u64,
    stale: bool,
}

/// In-process query client. Views poll `is_stale` and refetch, then call
/// `mark_fresh`.
#[derive(Debug, Default)]
pub struct QueryClient {
    entries: Mutex<HashMap<String, QueryEntry>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stale(&self, tag: &str) -> bool {
        self.entry(tag).stale
    }

    /// Number of times `tag` has been invalidated.
    pub fn generation(&self, tag: &str) -> u64 {
        self.entry(tag).generation
    }

    pub fn mark_fresh(&self, tag: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            if let Some(entry) = entries.get_mut(tag) {
                entry.stale = false;
            }
        }
    }

    fn entry(&self, tag: &str) -> QueryEntry {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(tag).copied())
            .unwrap_or_default()
    }
}

impl QueryCache for QueryClient {
    fn invalidate(&self, tag: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            let entry = entries.entry(tag.to_string()).or_default();
            entry.generation += 1;
            entry.stale = true;
            log::debug!("[QUERY] '{}' invalidated (generation {})", tag, entry.generation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidation_bumps_generation_and_marks_stale() {
        let client = QueryClient::new();
        assert!(!client.is_stale(ANALYSIS_QUERY_TAG));
        assert_eq!(client.generation(ANALYSIS_QUERY_TAG), 0);

        client.invalidate(ANALYSIS_QUERY_TAG);
        client.invalidate(ANALYSIS_QUERY_TAG);
        assert!(client.is_stale(ANALYSIS_QUERY_TAG));
        assert_eq!(client.generation(ANALYSIS_QUERY_TAG), 2);

        client.mark_fresh(ANALYSIS_QUERY_TAG);
        assert!(!client.is_stale(ANALYSIS_QUERY_TAG));
        assert_eq!(client.generation(ANALYSIS_QUERY_TAG), 2);
        assert!(!client.is_stale("other"));
    }
}

//! history.rs — bounded in-memory log of analysis reports, keyed by session.
//! Oldest entries are dropped once a session exceeds the configured cap.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::report::AnalysisResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub ts_unix: u64,
    pub text: String,
    pub result: AnalysisResult,
}

#[derive(Debug)]
pub struct History {
    inner: Mutex<HashMap<String, Vec<HistoryEntry>>>,
    cap: usize,
}

impl History {
    /// `cap` is the per-session entry limit, clamped to a sane range.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            cap: cap.clamp(1, 10_000),
        }
    }

    pub fn push(&self, session: &str, text: &str, result: &AnalysisResult) {
        let entry = HistoryEntry {
            ts_unix: now_unix(),
            text: text.to_string(),
            result: result.clone(),
        };

        let mut map = self.inner.lock().expect("history mutex poisoned");
        let entries = map.entry(session.to_string()).or_default();
        entries.push(entry);
        if entries.len() > self.cap {
            let excess = entries.len() - self.cap;
            entries.drain(0..excess);
        }
    }

    /// Last `n` entries for the session, newest first.
    pub fn snapshot_last_n(&self, session: &str, n: usize) -> Vec<HistoryEntry> {
        let map = self.inner.lock().expect("history mutex poisoned");
        match map.get(session) {
            Some(entries) => entries.iter().rev().take(n).cloned().collect(),
            None => Vec::new(),
        }
    }

    pub fn clear(&self, session: &str) {
        self.inner
            .lock()
            .expect("history mutex poisoned")
            .remove(session);
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> AnalysisResult {
        AnalysisResult::empty(false)
    }

    #[test]
    fn push_and_snapshot_newest_first() {
        let h = History::with_capacity(10);
        h.push("s1", "first", &result());
        h.push("s1", "second", &result());

        let snap = h.snapshot_last_n("s1", 5);
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].text, "second");
        assert_eq!(snap[1].text, "first");
    }

    #[test]
    fn sessions_are_isolated() {
        let h = History::with_capacity(10);
        h.push("a", "for a", &result());
        h.push("b", "for b", &result());

        assert_eq!(h.snapshot_last_n("a", 10).len(), 1);
        assert_eq!(h.snapshot_last_n("b", 10).len(), 1);
        assert!(h.snapshot_last_n("c", 10).is_empty());
    }

    #[test]
    fn cap_drops_oldest_entries() {
        let h = History::with_capacity(3);
        for i in 0..5 {
            h.push("s", &format!("entry {i}"), &result());
        }
        let snap = h.snapshot_last_n("s", 10);
        assert_eq!(snap.len(), 3);
        assert_eq!(snap[0].text, "entry 4");
        assert_eq!(snap[2].text, "entry 2");
    }

    #[test]
    fn clear_wipes_only_that_session() {
        let h = History::with_capacity(10);
        h.push("a", "keep?", &result());
        h.push("b", "stays", &result());
        h.clear("a");
        assert!(h.snapshot_last_n("a", 10).is_empty());
        assert_eq!(h.snapshot_last_n("b", 10).len(), 1);
    }
}

//! Per-Site Submission Locks
//!
//! A DashMap-backed registry of async mutexes keyed by site id. The
//! submission transaction holds its site's lock across the
//! read-evaluate-insert sequence; submissions for different sites
//! never contend. Notification dispatch happens after release.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

/// Lock registry, one mutex per site
#[derive(Debug, Default)]
pub struct SiteLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SiteLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// The mutex for one site, created on first use.
    ///
    /// Returns the Arc so the guard can outlive the DashMap shard
    /// reference; callers lock it themselves.
    pub fn lock_for(&self, site_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(site_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

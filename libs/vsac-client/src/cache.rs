//! JSON snapshot cache of the most recent retrieval.
//!
//! One file, no expiry policy: a rerun reuses the previous batch instead of
//! re-authenticating and re-fetching. A run that skipped the probe
//! ([`CacheLookup::Disabled`]) stays distinguishable from one that probed
//! and found nothing readable ([`CacheLookup::Miss`]).

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use terbium_vsac_models::DescribedValueSet;

const SNAPSHOT_FILE: &str = "value_sets.json";

/// Outcome of a snapshot probe.
#[derive(Debug)]
pub enum CacheLookup {
    /// A readable snapshot was found.
    Hit(Vec<DescribedValueSet>),
    /// Caching is enabled but no snapshot file exists.
    Miss,
    /// The caller opted out of the cache for this run.
    Disabled,
}

/// Snapshot store under a cache directory.
pub struct SnapshotCache {
    path: PathBuf,
    enabled: bool,
}

impl SnapshotCache {
    pub fn new(cache_dir: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            path: cache_dir.into().join(SNAPSHOT_FILE),
            enabled,
        }
    }

    /// Path of the snapshot file, whether or not it exists yet.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Probe the snapshot. A present-but-corrupt file is an error, not a
    /// silent miss.
    pub fn load(&self) -> Result<CacheLookup> {
        if !self.enabled {
            return Ok(CacheLookup::Disabled);
        }
        if !self.path.is_file() {
            return Ok(CacheLookup::Miss);
        }
        let bytes = fs::read(&self.path)?;
        Ok(CacheLookup::Hit(serde_json::from_slice(&bytes)?))
    }

    /// Write the snapshot, creating the cache directory on demand. Runs
    /// with the cache disabled still refresh the snapshot for future runs.
    pub fn store(&self, records: &[DescribedValueSet]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(records)?)?;
        Ok(())
    }
}

//! Snapshot management and the acquisition seam.
//!
//! Computation in this crate is pure; the potentially blocking fetch of a
//! fresh Earth-orientation table is an injected dependency. [`TableProvider`]
//! is that seam: anything that can produce a record set (a downloader, a file
//! reader, a test stub) can drive a refresh. [`EopSnapshots`] publishes each
//! refreshed table as a new immutable `Arc` snapshot; readers holding a prior
//! snapshot keep seeing consistent, unmixed data.

use super::record::EopRecord;
use super::table::EarthOrientationTable;
use crate::errors::GravityResult;

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Default IERS rapid/standard finals2000A product, the source the original
/// gravimetry pipeline pointed at (https mirror of the IERS ftp path).
pub const IERS_FINALS_URL: &str =
    "https://datacenter.iers.org/data/9/finals2000A.all";

/// Configuration for table acquisition.
///
/// Explicit values passed at construction time, never process-wide mutable
/// state, so computation stays test-isolatable and deterministic.
#[derive(Debug, Clone)]
pub struct EopConfig {
    /// Source endpoint for the finals2000A product.
    pub source_url: String,

    /// A snapshot older than this many days counts as stale.
    pub max_staleness_days: f64,

    /// Request timeout for the download step.
    pub timeout: Duration,
}

impl Default for EopConfig {
    fn default() -> Self {
        Self {
            source_url: IERS_FINALS_URL.to_string(),
            max_staleness_days: 10.0,
            timeout: Duration::from_secs(60),
        }
    }
}

impl EopConfig {
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_max_staleness(mut self, days: f64) -> Self {
        self.max_staleness_days = days;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Source of Earth-orientation records, consumed but not scheduled here.
///
/// Implementations may block (network, disk); for that reason the core never
/// calls a provider from inside `lookup` or the correction formula. Refresh
/// happens only through an explicit [`EopSnapshots::refresh_from`] call.
pub trait TableProvider {
    fn fetch_table(&self) -> GravityResult<Vec<EopRecord>>;
}

/// Published snapshot holder implementing refresh-by-replacement.
///
/// A fresh table replaces, never mutates, the current one: the swap is a
/// single-writer operation behind a mutex, while readers clone the `Arc` and
/// read lock-free from then on.
pub struct EopSnapshots {
    config: EopConfig,

    current: Mutex<Option<Snapshot>>,
}

struct Snapshot {
    table: Arc<EarthOrientationTable>,

    /// Epoch (MJD) at which this snapshot was published.
    published_mjd: f64,
}

impl EopSnapshots {
    pub fn new(config: EopConfig) -> Self {
        Self {
            config,
            current: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &EopConfig {
        &self.config
    }

    /// The current table snapshot, if one has been published.
    pub fn table(&self) -> Option<Arc<EarthOrientationTable>> {
        self.current
            .lock()
            .expect("snapshot lock poisoned")
            .as_ref()
            .map(|s| Arc::clone(&s.table))
    }

    /// Publishes `records` as a new immutable snapshot, replacing any prior
    /// one. Readers holding the prior snapshot are unaffected.
    pub fn replace(&self, records: Vec<EopRecord>, now_mjd: f64) -> Arc<EarthOrientationTable> {
        let table = Arc::new(EarthOrientationTable::new(records));
        let mut guard = self.current.lock().expect("snapshot lock poisoned");
        *guard = Some(Snapshot {
            table: Arc::clone(&table),
            published_mjd: now_mjd,
        });
        table
    }

    /// Whether the published snapshot is older than the configured maximum
    /// staleness. A missing snapshot is always stale.
    pub fn is_stale(&self, now_mjd: f64) -> bool {
        match self
            .current
            .lock()
            .expect("snapshot lock poisoned")
            .as_ref()
        {
            None => true,
            Some(snapshot) => now_mjd - snapshot.published_mjd > self.config.max_staleness_days,
        }
    }

    /// Fetches a fresh table from `provider` and publishes it.
    ///
    /// This is the only path that triggers acquisition; repeated queries
    /// against a stale snapshot keep returning the old (consistent) data
    /// until a caller explicitly refreshes.
    ///
    /// # Errors
    ///
    /// Propagates the provider's failure unchanged; the prior snapshot, if
    /// any, remains published.
    pub fn refresh_from<P: TableProvider>(
        &self,
        provider: &P,
        now_mjd: f64,
    ) -> GravityResult<Arc<EarthOrientationTable>> {
        let records = provider.fetch_table()?;
        Ok(self.replace(records, now_mjd))
    }
}

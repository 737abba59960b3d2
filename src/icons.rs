//! Application icons for window items.
//!
//! Alfred can draw a window row with its application's Finder icon if we
//! tell it the application's path.  Resolving a bundle id to a path means
//! asking Spotlight (`mdfind`), falling back to AppleScript (`osascript`),
//! which is far too slow to do for every window on every keystroke.  The
//! [`IconCache`] memoises results (including "not found") in a JSON file
//! for a configurable time-to-live.

use crate::traits::AppLocator;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default time-to-live of a cache entry: one week.
pub const DEFAULT_TTL_SECS: u64 = 7 * 24 * 60 * 60;

const CACHE_DIR_NAME: &str = "aerospace-alfred-workflow";
pub const CACHE_FILE_NAME: &str = "icon_cache.json";

/// One memoised lookup.  An empty `path` records that no app was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    #[serde(default)]
    pub path: String,
    /// Unix timestamp (seconds) of the lookup.
    #[serde(default)]
    pub ts: u64,
}

/// Error from writing the cache file.
#[derive(Debug, thiserror::Error)]
#[error("icon cache error: {0}")]
pub struct IconCacheError(String);

/// Bundle id → application path memo with a time-to-live.
#[derive(Debug)]
pub struct IconCache {
    file: Option<PathBuf>,
    entries: HashMap<String, CacheEntry>,
    ttl_secs: u64,
    enabled: bool,
    dirty: bool,
}

/// Seconds since the Unix epoch.
pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// `$XDG_CACHE_HOME/aerospace-alfred-workflow`, falling back to
/// `~/Library/Caches/aerospace-alfred-workflow`.
pub fn default_cache_dir() -> PathBuf {
    let base = std::env::var("XDG_CACHE_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
            format!("{}/Library/Caches", home)
        });
    PathBuf::from(base).join(CACHE_DIR_NAME)
}

impl IconCache {
    /// An empty cache that is never written to disk.
    pub fn in_memory(ttl_secs: u64) -> Self {
        Self {
            file: None,
            entries: HashMap::new(),
            ttl_secs,
            enabled: true,
            dirty: false,
        }
    }

    /// A cache that resolves nothing and never asks the locator.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::in_memory(0)
        }
    }

    /// Load the cache file from `dir`.
    ///
    /// A missing, unreadable or malformed file yields an empty cache, and
    /// entries that do not have the expected shape are dropped.
    pub fn load(dir: &Path, ttl_secs: u64) -> Self {
        let file = dir.join(CACHE_FILE_NAME);
        let entries = match std::fs::read_to_string(&file) {
            Ok(contents) => parse_entries(&contents),
            Err(e) => {
                debug!("no icon cache at {} ({})", file.display(), e);
                HashMap::new()
            }
        };
        Self {
            file: Some(file),
            entries,
            ttl_secs,
            enabled: true,
            dirty: false,
        }
    }

    /// Whether a lookup has changed the cache since it was loaded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn get(&self, bundle_id: &str) -> Option<&CacheEntry> {
        self.entries.get(bundle_id)
    }

    /// Application path for `bundle_id`, consulting `locator` only when the
    /// cached entry is missing or older than the TTL.
    ///
    /// `now` is a Unix timestamp in seconds.
    pub fn resolve<L: AppLocator>(
        &mut self,
        bundle_id: &str,
        locator: &L,
        now: u64,
    ) -> Option<String> {
        if !self.enabled || bundle_id.is_empty() {
            return None;
        }
        if let Some(entry) = self.entries.get(bundle_id) {
            if entry.ts != 0 && now.saturating_sub(entry.ts) < self.ttl_secs {
                return Some(entry.path.clone()).filter(|p| !p.is_empty());
            }
        }

        let path = locator
            .locate(bundle_id)
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        debug!("resolved {} to {:?}", bundle_id, path);
        self.entries.insert(
            bundle_id.to_string(),
            CacheEntry {
                path: path.clone(),
                ts: now,
            },
        );
        self.dirty = true;
        Some(path).filter(|p| !p.is_empty())
    }

    /// Write the cache file, creating its directory if needed.
    pub fn save(&self) -> Result<(), IconCacheError> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        if let Some(dir) = file.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| IconCacheError(format!("create {}: {}", dir.display(), e)))?;
        }
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| IconCacheError(format!("serialize: {}", e)))?;
        std::fs::write(file, json)
            .map_err(|e| IconCacheError(format!("write {}: {}", file.display(), e)))
    }

    /// [`save`](Self::save) if dirty, logging rather than returning failures.
    pub fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        match self.save() {
            Ok(()) => self.dirty = false,
            Err(e) => warn!("{}", e),
        }
    }
}

fn parse_entries(contents: &str) -> HashMap<String, CacheEntry> {
    let raw: HashMap<String, Value> = match serde_json::from_str(contents) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("ignoring malformed icon cache: {}", e);
            return HashMap::new();
        }
    };
    raw.into_iter()
        .filter_map(|(id, value)| {
            serde_json::from_value::<CacheEntry>(value)
                .ok()
                .map(|entry| (id, entry))
        })
        .collect()
}

/// [`AppLocator`] that asks Spotlight, then AppleScript.
///
/// Only paths that exist on disk are returned.
#[derive(Debug, Clone)]
pub struct SpotlightLocator {
    mdfind: PathBuf,
    osascript: PathBuf,
}

impl Default for SpotlightLocator {
    fn default() -> Self {
        Self::with_programs("mdfind", "osascript")
    }
}

impl SpotlightLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given `mdfind` and `osascript` executables.
    pub fn with_programs(mdfind: impl AsRef<Path>, osascript: impl AsRef<Path>) -> Self {
        Self {
            mdfind: mdfind.as_ref().to_path_buf(),
            osascript: osascript.as_ref().to_path_buf(),
        }
    }
}

/// Run a lookup tool and return its trimmed stdout, or `None` on any failure.
fn run_lookup(program: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
            Some(text).filter(|t| !t.is_empty())
        }
        Ok(out) => {
            debug!("{} exited with {}", program.display(), out.status);
            None
        }
        Err(e) => {
            debug!("failed to run {}: {}", program.display(), e);
            None
        }
    }
}

impl AppLocator for SpotlightLocator {
    fn locate(&self, bundle_id: &str) -> Option<PathBuf> {
        let spotlight_query = format!("kMDItemCFBundleIdentifier == '{}'", bundle_id);
        let found = run_lookup(&self.mdfind, &[&spotlight_query])
            .and_then(|out| out.lines().next().map(|l| l.trim().to_string()))
            .filter(|p| !p.is_empty())
            .or_else(|| {
                let script = format!(
                    "POSIX path of (path to application id \"{}\")",
                    bundle_id
                );
                run_lookup(&self.osascript, &["-e", &script])
            })?;
        let path = PathBuf::from(found);
        path.exists().then_some(path)
    }
}

use crate::allowlist::{CACHE_FOLDERS, cache_folder_path};
use crate::constants::CHROMIUM_VENDOR_DIRS;
use crate::measure::measure;
use crate::model::{CacheEntry, CacheInventory, InstanceCaches, ProfileCaches};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds a fresh inventory of the cache folders under `root`.
///
/// `root` is expected to hold instance directories (one per browser
/// installation/channel), each holding profile directories. A missing or
/// non-directory root yields an empty inventory rather than an error, so
/// pointing at the wrong place reads as "nothing found". Profiles with
/// no allow-listed folder and instances with no surviving profile are
/// pruned during the walk.
pub fn scan(root: &Path) -> CacheInventory {
    if !root.is_dir() {
        return CacheInventory::default();
    }

    let instances = subdirectories(root)
        .into_iter()
        .filter_map(|(name, path)| {
            let profiles = scan_instance(&path);
            (!profiles.is_empty()).then_some(InstanceCaches { name, profiles })
        })
        .collect();

    CacheInventory { instances }
}

fn scan_instance(instance_dir: &Path) -> Vec<ProfileCaches> {
    subdirectories(instance_dir)
        .into_iter()
        .filter_map(|(name, path)| {
            let entries = scan_profile(&path);
            (!entries.is_empty()).then_some(ProfileCaches { name, entries })
        })
        .collect()
}

/// Probes every allow-listed folder under one profile directory. Sibling
/// folders are measured in parallel; the indexed collect keeps the
/// entries in allow-list order.
fn scan_profile(profile_dir: &Path) -> Vec<CacheEntry> {
    CACHE_FOLDERS
        .par_iter()
        .filter_map(|folder| {
            let path = cache_folder_path(profile_dir, folder);
            path.exists().then(|| {
                let measurement = measure(&path);
                CacheEntry {
                    folder: (*folder).to_string(),
                    size: measurement.size,
                    skipped: measurement.skipped,
                }
            })
        })
        .collect()
}

/// Immediate subdirectories of `path` as (name, path) pairs. Unreadable
/// listings read as empty; non-directory entries are ignored. Sorted by
/// name, since directory order is OS-defined.
fn subdirectories(path: &Path) -> Vec<(String, PathBuf)> {
    let Ok(read_dir) = fs::read_dir(path) else {
        return Vec::new();
    };

    let mut dirs: Vec<(String, PathBuf)> = read_dir
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .map(|entry| {
            (
                entry.file_name().to_string_lossy().into_owned(),
                entry.path(),
            )
        })
        .collect();
    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    dirs
}

/// Existence-filtered candidates for Chromium-family vendor directories
/// on this machine, for callers populating a root picker. Scanning is
/// always rooted at the caller's explicit choice; this is a convenience,
/// not a default the engine falls back to.
pub fn default_roots() -> Vec<PathBuf> {
    let bases = [dirs::data_local_dir(), dirs::config_dir(), dirs::data_dir()];

    let mut roots = Vec::new();
    for base in bases.into_iter().flatten() {
        for vendor in CHROMIUM_VENDOR_DIRS {
            let candidate = base.join(vendor);
            if candidate.is_dir() && !roots.contains(&candidate) {
                roots.push(candidate);
            }
        }
    }
    roots
}

use crate::allowlist::{self, CACHE_FOLDERS};
use crate::model::CacheInventory;
use jwalk::{Parallelism, WalkDir};
use std::fs;
use std::ops::AddAssign;
use std::path::Path;

/// Tally of one clear operation. `removed` counts allow-listed folders
/// that existed when the call started, i.e. a delete was attempted;
/// `failed` counts those whose directory entry survived the attempt
/// (locked or undeletable contents). Missing targets count toward
/// neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearOutcome {
    pub removed: usize,
    pub failed: usize,
}

impl AddAssign for ClearOutcome {
    fn add_assign(&mut self, other: Self) {
        self.removed += other.removed;
        self.failed += other.failed;
    }
}

/// Deletes one cache folder under `root/instance/profile`.
///
/// Names outside the allow-list are refused outright, so no caller can
/// reach past the folders the engine recognizes. Deleting a folder that
/// is already gone is a no-op reporting zero.
pub fn clear_folder(root: &Path, instance: &str, profile: &str, folder: &str) -> ClearOutcome {
    if !allowlist::is_cache_folder(folder) {
        return ClearOutcome::default();
    }

    let profile_dir = root.join(instance).join(profile);
    let target = allowlist::cache_folder_path(&profile_dir, folder);
    if !target.exists() {
        return ClearOutcome::default();
    }

    remove_tree(&target);
    ClearOutcome {
        removed: 1,
        failed: usize::from(target.exists()),
    }
}

/// Deletes every allow-listed folder under one profile, in allow-list
/// order. Attempts are independent; one missing folder does not stop the
/// next.
pub fn clear_profile(root: &Path, instance: &str, profile: &str) -> ClearOutcome {
    let mut outcome = ClearOutcome::default();
    for folder in CACHE_FOLDERS {
        outcome += clear_folder(root, instance, profile, folder);
    }
    outcome
}

/// Deletes the caches of every profile recorded for `instance` in the
/// supplied snapshot. Profiles created after that scan are left alone;
/// an instance absent from the snapshot clears nothing.
pub fn clear_instance(root: &Path, instance: &str, inventory: &CacheInventory) -> ClearOutcome {
    let mut outcome = ClearOutcome::default();
    if let Some(caches) = inventory.instance(instance) {
        for profile in &caches.profiles {
            outcome += clear_profile(root, instance, &profile.name);
        }
    }
    outcome
}

/// Best-effort recursive removal. The whole-subtree removal is the fast
/// path; if it errors, fall back to deleting whatever is deletable,
/// files first, then directories bottom-up, swallowing individual
/// failures so one locked file does not keep the rest of the tree
/// around.
fn remove_tree(path: &Path) {
    if fs::remove_dir_all(path).is_ok() {
        return;
    }

    let mut directories = Vec::new();
    for entry in WalkDir::new(path)
        .skip_hidden(false)
        .parallelism(Parallelism::Serial)
        .into_iter()
        .flatten()
    {
        if entry.file_type().is_dir() {
            directories.push(entry.path());
        } else {
            let _ = fs::remove_file(entry.path());
        }
    }
    // The walk yields parents before children; reverse to empty the
    // deepest directories first.
    for dir in directories.iter().rev() {
        let _ = fs::remove_dir(dir);
    }
}

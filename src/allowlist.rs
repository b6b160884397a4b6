use crate::constants::{
    BLOB_STORAGE, CACHE, CODE_CACHE, GPU_CACHE, INDEXED_DB, MEDIA_CACHE,
    SERVICE_WORKER_CACHE_STORAGE,
};
use std::path::{Path, PathBuf};

/// Cache folders known to hold regenerable data, in the order they are
/// probed and cleared. Entries are relative to a profile directory; an
/// entry may span two segments (`Service Worker/CacheStorage`). Nothing
/// outside this list is ever measured or deleted.
pub const CACHE_FOLDERS: &[&str] = &[
    CACHE,
    CODE_CACHE,
    GPU_CACHE,
    MEDIA_CACHE,
    INDEXED_DB,
    BLOB_STORAGE,
    SERVICE_WORKER_CACHE_STORAGE,
];

pub fn is_cache_folder(name: &str) -> bool {
    CACHE_FOLDERS.contains(&name)
}

/// Joins an allow-list entry onto a profile directory segment by segment,
/// so composite entries resolve with native separators on every platform.
pub fn cache_folder_path(profile_dir: &Path, name: &str) -> PathBuf {
    name.split('/')
        .fold(profile_dir.to_path_buf(), |path, segment| path.join(segment))
}
